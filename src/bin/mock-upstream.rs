//! Stand-in for the auth and customer upstreams.

use std::net::SocketAddr;

use clap::Parser;
use tokio::net::TcpListener;

use customer_gateway::mock::{MockUpstream, Scenario};

#[derive(Parser)]
#[command(name = "mock-upstream")]
#[command(about = "Serves canned /auth and /wiremock replies for the customer gateway", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "127.0.0.1:8089")]
    bind: SocketAddr,

    #[arg(short, long, value_enum, default_value_t = Scenario::Success)]
    scenario: Scenario,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let listener = TcpListener::bind(cli.bind).await?;
    println!("Mock upstream ({:?}) listening on http://{}", cli.scenario, cli.bind);

    axum::serve(listener, MockUpstream::scenario(cli.scenario).router()).await?;
    Ok(())
}
