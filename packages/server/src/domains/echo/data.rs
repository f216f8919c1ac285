use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

pub const ECHO_MESSAGE: &str = "Echo API endpoint working!";
pub const STATUS_MESSAGE: &str = "Echo API is running! Send a POST request with JSON data.";
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON in request body";

/// Response to a successful POST.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EchoResponse {
    pub message: String,
    pub timestamp: String,
    pub data: Value,
}

/// Response to a GET.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EchoStatus {
    pub message: String,
    pub timestamp: String,
}

/// Body was not valid JSON.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[error("{error}")]
pub struct EchoError {
    pub error: String,
}

/// Decode `body` as JSON and wrap it in an echo response.
pub fn echo(body: &[u8], now: DateTime<Utc>) -> Result<EchoResponse, EchoError> {
    let data: Value = serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "Rejecting echo body");
        EchoError {
            error: INVALID_JSON_MESSAGE.to_string(),
        }
    })?;

    Ok(EchoResponse {
        message: ECHO_MESSAGE.to_string(),
        timestamp: iso_timestamp(now),
        data,
    })
}

pub fn status(now: DateTime<Utc>) -> EchoStatus {
    EchoStatus {
        message: STATUS_MESSAGE.to_string(),
        timestamp: iso_timestamp(now),
    }
}

/// ISO-8601 UTC with millisecond precision, e.g. `2025-01-15T10:30:00.000Z`.
pub fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}
