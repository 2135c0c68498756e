//! Error handling for the API module

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http {
        status: u16,
        message: String,
        /// Human-readable `detail` field of the error body, if any.
        detail: Option<String>,
    },

    /// The response body did not match the expected shape.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

impl ApiError {
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        Self::from_status_and_body(status, message)
    }

    pub fn from_status_and_body(status: u16, body: String) -> ApiError {
        let detail = parse_detail(&body);
        ApiError::Http {
            status,
            message: body,
            detail,
        }
    }

    /// The message shown to the user for a failed request: the server's
    /// `detail` when it sent one, otherwise a description of the failure.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ApiError::Http { status, .. } => {
                format!("Request failed with status code {}", status)
            }
            ApiError::Reqwest(e) => e.to_string(),
            ApiError::Decode(e) => e.to_string(),
        }
    }
}

/// Extract a string `detail` field from a JSON error body.
fn parse_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    }
}
