use std::sync::Arc;

use axum::extract::Request;

use crate::contract::{HandlerOutcome, ResponseWriter, RouteHandler, RouteLog};
use crate::handler_error::error_status;

/// A failure while wiring a route together.
///
/// Setup errors abort route registration at startup; they are never
/// produced per-request.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("The `log` option is required.")]
    MissingLog,
    #[error("No handler is present.")]
    MissingHandler,
}

/// Options accepted by [`configure_route`]. The `log` capability is
/// required.
#[derive(Clone, Default)]
pub struct RouteOptions {
    pub log: Option<Arc<dyn RouteLog>>,
}

impl RouteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Injects the logging capability.
    pub fn log(mut self, log: impl RouteLog + 'static) -> Self {
        self.log = Some(Arc::new(log));
        self
    }
}

/// Validates `options` and returns the route decorator.
///
/// Fails with [`SetupError::MissingLog`] before any handler is involved
/// when the logging capability is absent.
pub fn configure_route(options: RouteOptions) -> Result<Route, SetupError> {
    let log = options.log.ok_or(SetupError::MissingLog)?;
    Ok(Route { log })
}

/// The configured decorator. One `Route` wraps any number of handlers, all
/// sharing the injected logger.
#[derive(Clone)]
pub struct Route {
    log: Arc<dyn RouteLog>,
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route").finish_non_exhaustive()
    }
}

impl Route {
    /// Wraps `handler` into a framework-facing callback.
    ///
    /// The handler is optional so that registration driven by configuration
    /// can pass straight through; an absent handler fails with
    /// [`SetupError::MissingHandler`].
    pub fn wrap<H>(&self, handler: Option<H>) -> Result<WrappedRoute<H>, SetupError>
    where
        H: RouteHandler,
    {
        let handler = handler.ok_or(SetupError::MissingHandler)?;
        Ok(WrappedRoute {
            log: Arc::clone(&self.log),
            handler,
        })
    }
}

/// A handler wrapped with request logging, outcome interpretation, and
/// error recovery.
#[derive(Clone)]
pub struct WrappedRoute<H> {
    log: Arc<dyn RouteLog>,
    handler: H,
}

impl<H> std::fmt::Debug for WrappedRoute<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WrappedRoute").finish_non_exhaustive()
    }
}

impl<H> WrappedRoute<H>
where
    H: RouteHandler,
{
    /// Drives one request through the handler and finalizes `response`.
    ///
    /// Exactly one of the outcome branches runs per invocation, and the
    /// response is ended exactly once, as the final step. Handler failures
    /// never propagate to the caller; the response carries them.
    pub async fn respond(&self, request: Request, response: &mut dyn ResponseWriter) {
        // Log from the parts so the handler still gets the intact request.
        let (parts, body) = request.into_parts();
        self.log.request(&parts).await;
        let request = Request::from_parts(parts, body);

        match self.handler.handle(request, response).await {
            Ok(HandlerOutcome::Status(status)) => {
                self.log.status(status).await;
                response.status(status);
            }
            Ok(HandlerOutcome::Payload { status, data }) => {
                self.log.payload(status, &data).await;
                response.status(status).send(data);
            }
            Err(error) => {
                self.log.error(&error).await;
                let status = error_status(&error);
                self.log.status(status).await;
                response.status(status);
            }
        }

        response.end();
    }
}
