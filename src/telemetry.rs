use async_trait::async_trait;
use axum::http::StatusCode;
use axum::http::request::Parts;
use serde_json::Value;

use crate::contract::RouteLog;

/// Formats an error together with its chain of sources.
pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

/// A [`RouteLog`] that forwards to the `tracing` facade.
///
/// The subscriber wiring stays with the host application; without one these
/// calls are no-ops.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

#[async_trait]
impl RouteLog for TracingLog {
    async fn request(&self, request: &Parts) {
        tracing::info!(
            method = %request.method,
            path = %request.uri.path(),
            "Incoming request"
        );
    }

    async fn status(&self, status: StatusCode) {
        tracing::info!(status = status.as_u16(), "Responding");
    }

    async fn payload(&self, status: StatusCode, data: &Value) {
        tracing::info!(
            status = status.as_u16(),
            data = %data,
            "Responding with payload"
        );
    }

    async fn error(&self, error: &anyhow::Error) {
        // We record the error chain as a structured field on the log record.
        tracing::error!(error.cause_chain = ?error, "Handler failed");
    }
}
