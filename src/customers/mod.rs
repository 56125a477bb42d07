//! Customer listing subsystem.
//!
//! # Data Flow
//! ```text
//! GET /customers
//!     → pipeline.rs (optional token fetch, customer fetch)
//!     → translator.rs (status/body → Vec<Customer> or GatewayError)
//!     → http layer renders success or error
//! ```

pub mod error;
pub mod pipeline;
pub mod translator;
pub mod types;

pub use error::{ErrorBody, GatewayError, GatewayResult};
pub use pipeline::CustomerPipeline;
pub use translator::translate;
pub use types::{Customer, CustomerStatus, ErrorResponse, TokenResponse};
