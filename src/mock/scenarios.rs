//! Canned customer scenarios.

use axum::http::StatusCode;
use clap::ValueEnum;

use crate::mock::MockReply;

/// Token handed out by the mock auth endpoint.
pub const MOCK_TOKEN: &str = "mock-access-token";

/// Three customers, one per status.
pub const CUSTOMERS_BODY: &str = r#"[
  {
    "id": "C001",
    "name": "Ana Martinez",
    "age": 28,
    "status": "ACTIVE",
    "email": "ana.martinez@email.com"
  },
  {
    "id": "C002",
    "name": "Carlos Ramirez",
    "age": 35,
    "status": "INACTIVE",
    "email": "carlos.ramirez@email.com"
  },
  {
    "id": "C003",
    "name": "Laura Gómez",
    "age": 42,
    "status": "PENDING",
    "email": "laura.gomez@email.com"
  }
]"#;

/// Expired-token error from the data endpoint.
pub const UNAUTHORIZED_BODY: &str = r#"{
  "code": "401",
  "description": "Unauthorized access - invalid or expired token"
}"#;

/// Data endpoint behavior served by the mock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    /// 200 with three customers.
    Success,
    /// 401 with a structured error body.
    Unauthorized,
}

impl Scenario {
    pub fn customers_reply(self) -> MockReply {
        match self {
            Self::Success => MockReply::new(StatusCode::OK, CUSTOMERS_BODY),
            Self::Unauthorized => MockReply::new(StatusCode::UNAUTHORIZED, UNAUTHORIZED_BODY),
        }
    }
}
