//! Binary crate for the weather relay server.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Wiring the router to the production upstream clients
//! - Serving until interrupted

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use relay_server::{AppState, CorsOptions, router};

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let app = router(AppState::new(), &CorsOptions::default());

    let listener = tokio::net::TcpListener::bind(cli.listen).await?;
    info!("relay listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
