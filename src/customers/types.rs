//! Customer payloads exchanged with the upstreams and the caller.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a customer record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerStatus {
    Active,
    Inactive,
    Pending,
}

/// One customer as returned by the data upstream.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub age: i32,
    pub status: CustomerStatus,
    pub email: String,
}

/// Body of a successful token call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
}

/// Structured error body, both upstream and ours.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub description: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }
}
