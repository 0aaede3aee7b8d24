use std::env;

use anyhow::Context;
use clap::Parser;
use tokio::signal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use wordsearch_config::Config;
use wordsearch_proxy::{Forwarder, ProxyState, WORD_SEARCH_ROUTE, router};

#[derive(Parser)]
#[command(name = "wordsearch-proxy", about = "Forwards word lookups to the dictionary function")]
struct Cli {
    /// Address to listen on, overrides PROXY_BIND_ADDR
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::new();

    let forwarder = Forwarder::from_config(&config.proxy)?;
    tracing::info!("[PROXY] upstream: {}", forwarder.upstream_url());

    let bind_addr = cli.bind.unwrap_or(config.proxy.bind_addr);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!("[PROXY] listening on {} ({})", bind_addr, WORD_SEARCH_ROUTE);

    axum::serve(listener, router(ProxyState::new(forwarder)))
        .with_graceful_shutdown(async {
            if let Err(e) = signal::ctrl_c().await {
                tracing::error!("failed to listen for ctrl+c: {e}");
            }
            tracing::info!("Shutdown requested");
        })
        .await?;

    Ok(())
}
