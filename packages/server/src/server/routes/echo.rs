use axum::{
    body::Bytes,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;

use crate::domains::echo::{self, EchoError, EchoResponse, EchoStatus};

impl IntoResponse for EchoError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

/// POST /api/echo - reflect the JSON body back
///
/// The body is read raw so the Content-Type header does not matter; only
/// the bytes have to be valid JSON.
pub async fn echo_handler(body: Bytes) -> Result<(StatusCode, Json<EchoResponse>), EchoError> {
    let response = echo::echo(&body, Utc::now())?;
    Ok((StatusCode::OK, Json(response)))
}

/// GET /api/echo
pub async fn echo_status_handler() -> Json<EchoStatus> {
    Json(echo::status(Utc::now()))
}
