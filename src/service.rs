//! Mounts a [`WrappedRoute`] on a tower/axum host. Each call owns its own
//! request/response pair; nothing is shared between invocations beyond the
//! injected logger.

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use axum::extract::Request;
use axum::response::{IntoResponse, Response};
use tower::Service;

use crate::contract::RouteHandler;
use crate::respond::BufferedResponse;
use crate::route::WrappedRoute;

impl<H> Service<Request> for WrappedRoute<H>
where
    H: RouteHandler + Clone + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Response, Infallible>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request) -> Self::Future {
        let route = self.clone();
        Box::pin(async move {
            let mut response = BufferedResponse::new();
            route.respond(request, &mut response).await;
            Ok(response.into_response())
        })
    }
}
