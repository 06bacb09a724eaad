pub mod contract;
pub mod handler_error;
pub mod respond;
pub mod route;
pub mod telemetry;

mod service;

pub use contract::{HandlerOutcome, ResponseWriter, RouteHandler, RouteLog};
pub use handler_error::{HandlerError, error_status};
pub use respond::BufferedResponse;
pub use route::{Route, RouteOptions, SetupError, WrappedRoute, configure_route};
pub use telemetry::TracingLog;
