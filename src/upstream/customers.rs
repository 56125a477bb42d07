//! Customer listing endpoint client.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};

use crate::config::schema::{UpstreamConfig, DEFAULT_CUSTOMERS_PATH};
use crate::upstream::{
    build_http_client, read_reply, ClientError, CustomerUpstream, TransportError, UpstreamReply,
    CUSTOMERS_UPSTREAM,
};

/// HTTP client for the customer data upstream.
///
/// Only the bearer token is forwarded; inbound headers and query filters stay
/// at the gateway.
#[derive(Debug, Clone)]
pub struct CustomerClient {
    client: reqwest::Client,
    url: url::Url,
}

impl CustomerClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, ClientError> {
        let (client, url) = build_http_client(CUSTOMERS_UPSTREAM, config, DEFAULT_CUSTOMERS_PATH)?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &url::Url {
        &self.url
    }
}

#[async_trait]
impl CustomerUpstream for CustomerClient {
    async fn fetch_customers(&self, bearer_token: Option<&str>) -> Result<UpstreamReply, TransportError> {
        tracing::debug!(url = %self.url, with_token = bearer_token.is_some(), "Requesting customers");
        let start = Instant::now();

        let mut request = self.client.get(self.url.clone()).header(ACCEPT, "application/json");
        if let Some(token) = bearer_token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        read_reply(CUSTOMERS_UPSTREAM, request.send().await, start).await
    }
}
