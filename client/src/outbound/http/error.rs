//! HTTP failure classification.
//!
//! Maps transport failures and non-2xx statuses onto the [`ApiError`]
//! taxonomy. The mapping annotates rather than replaces: the status and a
//! body preview travel with the error so diagnostics are never lost.

use std::collections::BTreeMap;

use reqwest::StatusCode;
use serde::Deserialize;

use crate::domain::ports::ApiError;

/// Laravel-style 419 used for expired CSRF sessions.
const STATUS_SESSION_EXPIRED: u16 = 419;

/// 422 payload shape: `{"message": ..., "errors": {field: [messages]}}`.
#[derive(Debug, Default, Deserialize)]
struct ValidationBody {
    #[serde(default)]
    errors: BTreeMap<String, Vec<String>>,
}

pub(super) fn map_transport_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::transport(format!("request timed out: {error}"))
    } else {
        ApiError::transport(error.to_string())
    }
}

pub(super) fn classify_status(status: StatusCode, body: &[u8]) -> ApiError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), preview)
    };

    match status {
        StatusCode::NOT_FOUND => ApiError::not_found(message),
        StatusCode::UNPROCESSABLE_ENTITY => {
            let parsed: ValidationBody = serde_json::from_slice(body).unwrap_or_default();
            ApiError::validation(parsed.errors, message)
        }
        _ if status.as_u16() == STATUS_SESSION_EXPIRED => ApiError::session_expired(message),
        _ if status.is_server_error() => ApiError::server(status.as_u16(), message),
        _ => ApiError::unclassified(status.as_u16(), message),
    }
}

/// Compact, length-limited rendering of a response body for error messages.
fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
