//! A buffered implementation of the response contract for axum hosts.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use crate::contract::ResponseWriter;

/// Buffers the status and body driven through [`ResponseWriter`] and
/// converts into an [`axum::response::Response`] once the route has ended
/// it.
#[derive(Debug, Default)]
pub struct BufferedResponse {
    status: Option<StatusCode>,
    body: Option<Value>,
    ended: bool,
}

impl BufferedResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `end` has been called.
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn status_code(&self) -> Option<StatusCode> {
        self.status
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}

impl ResponseWriter for BufferedResponse {
    fn status(&mut self, status: StatusCode) -> &mut dyn ResponseWriter {
        self.status = Some(status);
        self
    }

    fn send(&mut self, data: Value) -> &mut dyn ResponseWriter {
        self.body = Some(data);
        self
    }

    fn end(&mut self) {
        self.ended = true;
    }
}

impl IntoResponse for BufferedResponse {
    fn into_response(self) -> Response {
        // The hosting framework answers 200 when a route never set a status.
        let status = self.status.unwrap_or(StatusCode::OK);
        match self.body {
            Some(data) => (status, Json(data)).into_response(),
            None => status.into_response(),
        }
    }
}
