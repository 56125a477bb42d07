//! Upstream redirects are treated as replies and never followed.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::routing::get;
use axum::Router;
use customer_gateway::config::AuthStep;
use customer_gateway::customers::ErrorResponse;
use customer_gateway::mock::scenarios::CUSTOMERS_BODY;
use customer_gateway::mock::CallRecorder;
use tokio::net::TcpListener;

mod common;

#[derive(Default)]
struct Hits {
    listing: AtomicUsize,
    elsewhere: AtomicUsize,
}

async fn start_redirecting_upstream(hits: Arc<Hits>) -> std::net::SocketAddr {
    let listing_hits = hits.clone();
    let router = Router::new()
        .route(
            "/wiremock",
            get(move || async move {
                listing_hits.listing.fetch_add(1, Ordering::SeqCst);
                (StatusCode::FOUND, [(header::LOCATION, "/elsewhere")], "redirect body")
            }),
        )
        .route(
            "/elsewhere",
            get(move || async move {
                hits.elsewhere.fetch_add(1, Ordering::SeqCst);
                (StatusCode::OK, [(header::CONTENT_TYPE, "application/json")], CUSTOMERS_BODY)
            }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    addr
}

#[tokio::test]
async fn test_customer_redirect_is_not_followed() {
    let hits = Arc::new(Hits::default());
    let upstream = start_redirecting_upstream(hits.clone()).await;
    let gateway = common::start_gateway(
        common::config_for(upstream, AuthStep::Disabled),
        Arc::new(CallRecorder::default()),
    )
    .await;

    let res = gateway.client.get(gateway.customers_url()).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorResponse = res.json().await.unwrap();
    assert_eq!(body.code, "500");
    assert_eq!(hits.listing.load(Ordering::SeqCst), 1);
    assert_eq!(hits.elsewhere.load(Ordering::SeqCst), 0);
}
