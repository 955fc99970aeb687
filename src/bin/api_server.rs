//! REST API server for the NJ municipality directory
//!
//! Usage:
//!   ./target/release/api_server [--host HOST] [--port PORT]
//!
//! REST endpoints:
//!   GET /api/v1/health                 - Health check
//!   GET /api/v1/municipalities         - All municipalities (optional ?county=NN)
//!   GET /api/v1/municipalities/:code   - Single municipality
//!   GET /api/v1/counties               - All counties with municipality counts
//!   GET /api/v1/counties/:code         - County with its municipalities

use anyhow::{Context, Result};
use clap::Parser;
use nj_muni_codes::{api, muni_names};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "api_server")]
#[command(about = "Serve the NJ municipality code directory over REST")]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value = "8080")]
    port: u16,
}

fn print_banner(addr: &SocketAddr) {
    println!("============================================================");
    println!("         NJ MUNICIPALITY DIRECTORY API SERVER");
    println!("============================================================");
    println!();
    println!("  REST:     http://{}/api/v1/", addr);
    println!("  Entries:  {}", muni_names::len());
    println!();
    println!("REST Endpoints:");
    println!("  GET /api/v1/health                Health check");
    println!("  GET /api/v1/municipalities        All municipalities");
    println!("  GET /api/v1/municipalities/:code  Municipality by code");
    println!("  GET /api/v1/counties              All counties");
    println!("  GET /api/v1/counties/:code        County detail");
    println!();
    println!("============================================================");
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .init();

    let args = Args::parse();

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .with_context(|| format!("invalid listen address {}:{}", args.host, args.port))?;

    print_banner(&addr);

    let app = api::create_router();
    tracing::info!("Starting REST server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
