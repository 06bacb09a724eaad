use std::sync::LazyLock;

use async_trait::async_trait;
use axum::Router;
use axum::extract::Request;
use axum::http::StatusCode;
use routewrap::{
    HandlerError, HandlerOutcome, ResponseWriter, RouteHandler, RouteOptions, TracingLog,
    configure_route,
};
use serde_json::json;

// Ensure that the `tracing` stack is only initialised once using `LazyLock`
static TRACING: LazyLock<()> = LazyLock::new(|| {
    // Forward route logs to stdout when requested; without a subscriber the
    // `tracing` calls are no-ops.
    if std::env::var("TEST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
            .init();
    }
});

pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

#[derive(Clone)]
struct Ping;

#[async_trait]
impl RouteHandler for Ping {
    async fn handle(
        &self,
        _request: Request,
        _response: &mut dyn ResponseWriter,
    ) -> Result<HandlerOutcome, anyhow::Error> {
        Ok(StatusCode::OK.into())
    }
}

#[derive(Clone)]
struct ListWidgets;

#[async_trait]
impl RouteHandler for ListWidgets {
    async fn handle(
        &self,
        _request: Request,
        _response: &mut dyn ResponseWriter,
    ) -> Result<HandlerOutcome, anyhow::Error> {
        Ok(HandlerOutcome::payload(
            StatusCode::OK,
            json!({
                "widgets": [
                    { "id": 1, "name": "anvil" },
                    { "id": 2, "name": "crowbar" },
                ]
            }),
        ))
    }
}

#[derive(Clone)]
struct Locked;

#[async_trait]
impl RouteHandler for Locked {
    async fn handle(
        &self,
        _request: Request,
        _response: &mut dyn ResponseWriter,
    ) -> Result<HandlerOutcome, anyhow::Error> {
        Err(HandlerError::new("No session is present.", StatusCode::UNAUTHORIZED).into())
    }
}

#[derive(Clone)]
struct Broken;

#[async_trait]
impl RouteHandler for Broken {
    async fn handle(
        &self,
        _request: Request,
        _response: &mut dyn ResponseWriter,
    ) -> Result<HandlerOutcome, anyhow::Error> {
        Err(anyhow::anyhow!("the widget store is on fire"))
    }
}

pub async fn spawn_app() -> TestApp {
    // The first time `force` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    LazyLock::force(&TRACING);

    let route = configure_route(RouteOptions::new().log(TracingLog))
        .expect("Failed to configure the route.");

    // One configured decorator wraps every handler; they share the logger.
    let app = Router::new()
        .route_service("/ping", route.wrap(Some(Ping)).expect("Failed to wrap the handler."))
        .route_service(
            "/widgets",
            route.wrap(Some(ListWidgets)).expect("Failed to wrap the handler."),
        )
        .route_service("/locked", route.wrap(Some(Locked)).expect("Failed to wrap the handler."))
        .route_service("/broken", route.wrap(Some(Broken)).expect("Failed to wrap the handler."));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind a random port.");
    let address = format!("http://127.0.0.1:{}", listener.local_addr().unwrap().port());

    #[allow(clippy::let_underscore_future)]
    let _ = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server crashed.");
    });

    TestApp {
        address,
        api_client: reqwest::Client::new(),
    }
}
