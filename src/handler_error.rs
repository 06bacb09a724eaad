use axum::http::StatusCode;

use crate::telemetry::error_chain_fmt;

/// An intentional failure raised by handler code to answer the request with
/// a specific HTTP status.
///
/// A `HandlerError` travels through the ordinary error channel like any
/// other error. The wrapped callback recognizes it anywhere in the chain and
/// answers with the carried status instead of the generic 500.
#[derive(thiserror::Error)]
#[error("{message}")]
pub struct HandlerError {
    message: String,
    status: StatusCode,
}

impl HandlerError {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    /// The status the response should carry when this error is recovered.
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl std::fmt::Debug for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Resolves the response status for a failed handler.
///
/// A [`HandlerError`] in the chain answers with its carried status; any
/// other failure maps to an opaque 500.
pub fn error_status(error: &anyhow::Error) -> StatusCode {
    match error.downcast_ref::<HandlerError>() {
        Some(handler_error) => handler_error.status(),
        None => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
