//! Request execution and error-response decoding.
//!
//! Requests are sent exactly once. Non-success responses are turned into
//! [`ClientError::ApiError`] carrying the status, the URL and the message
//! from the Jama error envelope when one is present.

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::StatusResponse;

/// Send a request and fail on any non-2xx status.
pub async fn send_request(builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    // Prefer the Jama error message over the raw body
    let message = match serde_json::from_str::<StatusResponse>(&body) {
        Ok(resp) => resp
            .meta
            .message
            .or(resp.meta.status)
            .unwrap_or_else(|| status.to_string()),
        Err(_) if body.trim().is_empty() => status.to_string(),
        Err(_) => body,
    };

    debug!(status = status.as_u16(), url = %url, "Request failed");

    Err(ClientError::ApiError {
        status: status.as_u16(),
        url,
        message,
    })
}
