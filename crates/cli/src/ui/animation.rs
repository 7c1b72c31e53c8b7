// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Entry transition for newly appeared posts.
//!
//! One-shot, linear: a card starts 50 units below its resting place at
//! zero opacity and settles at offset zero, full opacity. The renderer
//! maps units to rows and opacity to a dim-to-normal color ramp; this
//! module only does the sampling.

use std::time::{Duration, Instant};

/// Starting vertical displacement, in animation units.
pub const START_OFFSET: f32 = 50.0;

/// How long the transition runs.
pub const DURATION: Duration = Duration::from_millis(500);

/// Vertical units per terminal row when mapping offset to cells.
pub const UNITS_PER_ROW: f32 = 10.0;

/// A sampled animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Displacement below the resting position, `START_OFFSET..=0`.
    pub offset: f32,
    /// `0.0..=1.0`.
    pub opacity: f32,
}

impl Sample {
    /// Offset expressed as whole terminal rows.
    pub fn offset_rows(&self) -> u16 {
        (self.offset / UNITS_PER_ROW).round() as u16
    }
}

/// A running entry transition for one post's visual anchor.
#[derive(Debug, Clone, Copy)]
pub struct EntryTransition {
    started: Instant,
}

impl EntryTransition {
    /// Start the transition at `now`.
    pub fn begin(now: Instant) -> Self {
        EntryTransition { started: now }
    }

    /// Linear interpolation between the start and end states, clamped.
    pub fn sample(&self, now: Instant) -> Sample {
        let elapsed = now.saturating_duration_since(self.started);
        let t = (elapsed.as_secs_f32() / DURATION.as_secs_f32()).clamp(0.0, 1.0);
        Sample {
            offset: START_OFFSET * (1.0 - t),
            opacity: t,
        }
    }

    /// True once the end state has been reached; the transition never
    /// replays.
    pub fn finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= DURATION
    }
}

#[cfg(test)]
#[path = "animation_tests.rs"]
mod tests;
