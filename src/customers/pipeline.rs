//! Customer request pipeline.
//!
//! ```text
//! [auth step, optional]  AuthUpstream::fetch_token
//!     transport failure  → internal error
//!     status >= 400      → same status, raw body
//!     bad token body     → internal error
//! [data step]            CustomerUpstream::fetch_customers(token)
//!     → translate::<Vec<Customer>>
//! ```
//!
//! Each upstream is called at most once per request and the first failure
//! ends the pipeline.

use std::sync::Arc;

use crate::config::AuthStep;
use crate::customers::error::{ErrorBody, GatewayError, GatewayResult};
use crate::customers::translator::translate;
use crate::customers::types::{Customer, TokenResponse};
use crate::upstream::{AuthUpstream, CustomerUpstream, AUTH_UPSTREAM, CUSTOMERS_UPSTREAM};

/// Fetch → forward → translate pipeline for `GET /customers`.
#[derive(Clone)]
pub struct CustomerPipeline {
    auth: Option<Arc<dyn AuthUpstream>>,
    customers: Arc<dyn CustomerUpstream>,
}

impl CustomerPipeline {
    /// Pipeline that fetches a bearer token before every customer call.
    pub fn with_auth(auth: Arc<dyn AuthUpstream>, customers: Arc<dyn CustomerUpstream>) -> Self {
        Self {
            auth: Some(auth),
            customers,
        }
    }

    /// Pipeline that calls the customer upstream without a token.
    pub fn without_auth(customers: Arc<dyn CustomerUpstream>) -> Self {
        Self { auth: None, customers }
    }

    pub fn auth_step(&self) -> AuthStep {
        if self.auth.is_some() {
            AuthStep::Required
        } else {
            AuthStep::Disabled
        }
    }

    /// Run the pipeline once.
    pub async fn fetch_customers(&self) -> GatewayResult<Vec<Customer>> {
        let token = match &self.auth {
            Some(auth) => {
                tracing::info!("Requesting bearer token from auth upstream");
                let token = obtain_token(auth.as_ref()).await?;
                tracing::info!("Bearer token obtained");
                Some(token)
            }
            None => None,
        };

        let reply = self
            .customers
            .fetch_customers(token.as_deref())
            .await
            .inspect_err(|e| {
                tracing::error!(upstream = e.upstream(), error = %e, "Customer upstream unreachable")
            })?;
        tracing::info!(status = %reply.status, "Customer upstream replied");

        let result = translate::<Vec<Customer>>(CUSTOMERS_UPSTREAM, "customers", reply);
        match &result {
            Ok(customers) => tracing::info!(count = customers.len(), "Customers received"),
            Err(e) => tracing::error!(status = %e.status(), error = %e, "Customer call failed"),
        }
        result
    }
}

async fn obtain_token(auth: &dyn AuthUpstream) -> GatewayResult<String> {
    let reply = auth
        .fetch_token()
        .await
        .inspect_err(|e| tracing::error!(upstream = e.upstream(), error = %e, "Auth upstream unreachable"))?;

    if reply.is_error() {
        tracing::error!(
            status = %reply.status,
            body = %String::from_utf8_lossy(&reply.body),
            "Auth upstream rejected token request"
        );
        return Err(GatewayError::Upstream {
            upstream: AUTH_UPSTREAM,
            status: reply.status,
            body: ErrorBody::Raw(reply.body),
        });
    }

    let token: TokenResponse = serde_json::from_slice(&reply.body).map_err(|source| {
        tracing::error!(error = %source, "Auth upstream returned an unreadable token");
        GatewayError::Deserialize {
            upstream: AUTH_UPSTREAM,
            what: "token",
            source,
        }
    })?;

    Ok(token.access_token)
}
