use anyhow::Context;
use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use gist_search::gists::client::GistClient;
use gist_search::search::handlers::{handle_ping, handle_search};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "0.0.0.0:9876".parse()?;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                let value = args
                    .get(i + 1)
                    .context("--bind requires an <addr:port> value")?;
                bind_addr = value.parse()?;
                i += 2;
            }
            "--help" | "-h" => {
                eprintln!("Usage: {} [--bind <addr:port>]", args[0]);
                eprintln!("Example: {} --bind 0.0.0.0:9876", args[0]);
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    // 1. Upstream client, injected into the handlers:
    let client = Arc::new(GistClient::new());

    // 2. HTTP Router:
    let app = Router::new()
        .route("/ping", get(handle_ping))
        .route("/api/v1/search", post(handle_search))
        .layer(Extension(client));

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
