//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID, request context)
//!     → handlers.rs (customer pipeline, health)
//!     → response.rs (error rendering)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{CustomerFilters, RequestContext, UuidRequestId, X_REQUEST_ID};
pub use server::{AppState, GatewayServer};
