//! Customer gateway library.
//!
//! Receives `GET /customers`, optionally fetches a bearer token from the auth
//! upstream, forwards the call to the customer upstream and translates its
//! reply into the gateway's own response.

pub mod config;
pub mod customers;
pub mod http;
pub mod lifecycle;
pub mod mock;
pub mod observability;
pub mod upstream;

pub use config::GatewayConfig;
pub use customers::CustomerPipeline;
pub use http::GatewayServer;
pub use lifecycle::Shutdown;
