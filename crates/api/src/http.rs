// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP implementation of [`BlogStore`] over reqwest.
//!
//! Maps every failure mode into [`TransportError`]: request errors become
//! `Network`, non-2xx responses become `Status` with the body text as the
//! message, and undecodable bodies become `Decode`. No retries.

use std::time::Duration;

use ql_core::{BlogPost, CreateBlogRequest, UpdateBlogRequest};

use crate::error::{TransportError, TransportResult};
use crate::store::{BlogStore, StoreFuture};

/// HTTP client for the blog store REST surface.
pub struct HttpStore {
    http: reqwest::Client,
    base_url: String,
}

impl HttpStore {
    /// Create a client against `base_url` (e.g. `http://localhost:4000`).
    ///
    /// A trailing slash on the base URL is tolerated. The timeout applies
    /// per request; an elapsed timeout surfaces as a `Network` error.
    pub fn new(base_url: &str, timeout: Duration) -> TransportResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(HttpStore {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Reject non-success responses, folding the body text into the error.
async fn check_status(resp: reqwest::Response) -> TransportResult<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = resp.text().await.unwrap_or_default();
    Err(TransportError::Status {
        status: status.as_u16(),
        message,
    })
}

fn send_error(e: reqwest::Error) -> TransportError {
    TransportError::Network(e.to_string())
}

fn decode_error(e: reqwest::Error) -> TransportError {
    TransportError::Decode(e.to_string())
}

impl BlogStore for HttpStore {
    fn fetch_all(&self) -> StoreFuture<'_, Vec<BlogPost>> {
        Box::pin(async move {
            let resp = self
                .http
                .get(self.url("/blogs"))
                .send()
                .await
                .map_err(send_error)?;
            let resp = check_status(resp).await?;
            let posts = resp.json::<Vec<BlogPost>>().await.map_err(decode_error)?;
            tracing::debug!(count = posts.len(), "fetched posts");
            Ok(posts)
        })
    }

    fn create(&self, title: String, content: String) -> StoreFuture<'_, BlogPost> {
        Box::pin(async move {
            let body = CreateBlogRequest { title, content };
            let resp = self
                .http
                .post(self.url("/blogs"))
                .json(&body)
                .send()
                .await
                .map_err(send_error)?;
            let resp = check_status(resp).await?;
            let post = resp.json::<BlogPost>().await.map_err(decode_error)?;
            tracing::debug!(id = %post.id, "created post");
            Ok(post)
        })
    }

    fn update(&self, id: String, title: String, content: String) -> StoreFuture<'_, BlogPost> {
        Box::pin(async move {
            // The backend takes the id in the PUT body, not the path.
            let body = UpdateBlogRequest { id, title, content };
            let resp = self
                .http
                .put(self.url("/blogs/"))
                .json(&body)
                .send()
                .await
                .map_err(send_error)?;
            let resp = check_status(resp).await?;
            let post = resp.json::<BlogPost>().await.map_err(decode_error)?;
            tracing::debug!(id = %post.id, "updated post");
            Ok(post)
        })
    }

    fn delete(&self, id: String) -> StoreFuture<'_, ()> {
        Box::pin(async move {
            let resp = self
                .http
                .delete(self.url(&format!("/blogs/{}", id)))
                .send()
                .await
                .map_err(send_error)?;
            check_status(resp).await?;
            tracing::debug!(id = %id, "deleted post");
            Ok(())
        })
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
