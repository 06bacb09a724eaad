//! The capability contracts a host must supply: a logging capability, a
//! response builder, and the handler shape itself. The crate owns nothing
//! behind these seams.

use async_trait::async_trait;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::http::request::Parts;
use serde_json::Value;

/// The logging capability injected through [`RouteOptions`].
///
/// All calls may suspend; the wrapped callback awaits each one. No format or
/// transport is prescribed here. [`TracingLog`] forwards to the `tracing`
/// facade, and tests inject recording doubles.
///
/// [`RouteOptions`]: crate::route::RouteOptions
/// [`TracingLog`]: crate::telemetry::TracingLog
#[async_trait]
pub trait RouteLog: Send + Sync {
    /// A request-scoped entry, awaited before the handler runs. The logger
    /// sees the request head; the body stays with the handler.
    async fn request(&self, request: &Parts);

    /// A bare response status.
    async fn status(&self, status: StatusCode);

    /// A response status together with the payload sent as the body.
    async fn payload(&self, status: StatusCode, data: &Value);

    /// A failure recovered from the handler.
    async fn error(&self, error: &anyhow::Error);
}

/// The response half of the host framework's contract: a chainable
/// status/send builder with a terminal `end`.
///
/// `status` and `send` record intent; `end` finalizes the response. The
/// wrapped callback calls `end` exactly once per invocation, on every path.
pub trait ResponseWriter: Send {
    fn status(&mut self, status: StatusCode) -> &mut dyn ResponseWriter;

    fn send(&mut self, data: Value) -> &mut dyn ResponseWriter;

    fn end(&mut self);
}

/// What a handler resolved to when it did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum HandlerOutcome {
    /// Answer with a bare status code.
    Status(StatusCode),
    /// Answer with a status code and a JSON payload as the body.
    Payload { status: StatusCode, data: Value },
}

impl HandlerOutcome {
    pub fn payload(status: StatusCode, data: Value) -> Self {
        Self::Payload { status, data }
    }
}

impl From<StatusCode> for HandlerOutcome {
    fn from(status: StatusCode) -> Self {
        Self::Status(status)
    }
}

/// A request handler, as supplied by the application.
///
/// Handlers receive the request unmodified together with the response
/// writer, and either resolve to a [`HandlerOutcome`] or fail. A failure
/// carrying a [`HandlerError`] answers with its status; anything else
/// answers 500. Handlers never need to finalize the response themselves.
///
/// [`HandlerError`]: crate::handler_error::HandlerError
#[async_trait]
pub trait RouteHandler: Send + Sync {
    async fn handle(
        &self,
        request: Request,
        response: &mut dyn ResponseWriter,
    ) -> Result<HandlerOutcome, anyhow::Error>;
}
