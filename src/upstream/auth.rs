//! Token endpoint client.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::header::ACCEPT;

use crate::config::schema::{UpstreamConfig, DEFAULT_AUTH_PATH};
use crate::upstream::{
    build_http_client, read_reply, AuthUpstream, ClientError, TransportError, UpstreamReply, AUTH_UPSTREAM,
};

/// HTTP client for the authentication upstream.
#[derive(Debug, Clone)]
pub struct AuthClient {
    client: reqwest::Client,
    url: url::Url,
}

impl AuthClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, ClientError> {
        let (client, url) = build_http_client(AUTH_UPSTREAM, config, DEFAULT_AUTH_PATH)?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &url::Url {
        &self.url
    }
}

#[async_trait]
impl AuthUpstream for AuthClient {
    async fn fetch_token(&self) -> Result<UpstreamReply, TransportError> {
        tracing::debug!(url = %self.url, "Requesting bearer token");
        let start = Instant::now();
        let sent = self
            .client
            .get(self.url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await;
        read_reply(AUTH_UPSTREAM, sent, start).await
    }
}
