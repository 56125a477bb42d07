//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use customer_gateway::config::{AuthStep, GatewayConfig};
use customer_gateway::mock::{CallRecorder, MockReply, MockUpstream};
use customer_gateway::{GatewayServer, Shutdown};
use std::sync::Arc;
use tokio::net::TcpListener;

/// A running gateway in front of a running mock upstream.
pub struct TestGateway {
    pub base_url: String,
    pub recorder: Arc<CallRecorder>,
    pub client: reqwest::Client,
    shutdown: Shutdown,
}

impl TestGateway {
    pub fn customers_url(&self) -> String {
        format!("{}/customers", self.base_url)
    }
}

impl Drop for TestGateway {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a mock upstream on an ephemeral port.
pub async fn start_mock_upstream(mock: MockUpstream) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    mock.spawn(listener).await.unwrap()
}

/// Gateway config pointing both upstreams at `upstream`.
pub fn config_for(upstream: SocketAddr, auth: AuthStep) -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.pipeline.auth = auth;
    config.upstreams.auth.base_url = format!("http://{upstream}");
    config.upstreams.customers.base_url = format!("http://{upstream}");
    config.upstreams.auth.request_timeout_secs = 2;
    config.upstreams.customers.request_timeout_secs = 2;
    config
}

/// Start a gateway with the given config.
pub async fn start_gateway(config: GatewayConfig, recorder: Arc<CallRecorder>) -> TestGateway {
    let shutdown = Shutdown::new();
    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = GatewayServer::new(config).unwrap();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;

    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    TestGateway {
        base_url: format!("http://{addr}"),
        recorder,
        client,
        shutdown,
    }
}

/// Mock upstream with the given replies plus a gateway in front of it.
pub async fn start_stack(auth: AuthStep, auth_reply: MockReply, customers_reply: MockReply) -> TestGateway {
    let mock = MockUpstream::new(auth_reply, customers_reply);
    let recorder = mock.recorder();
    let upstream = start_mock_upstream(mock).await;
    start_gateway(config_for(upstream, auth), recorder).await
}
