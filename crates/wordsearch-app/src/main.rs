use std::env;
use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use wordsearch_client::ProxyClient;
use wordsearch_config::Config;
use wordsearch_io::audio::SystemAudioPlayer;

mod controller;
mod events;
mod io;
mod render;
mod search;
mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::render::render_view;
use self::search::SearchController;

#[derive(Parser)]
#[command(name = "wordsearch", about = "Look up definitions, examples and pronunciations")]
struct Cli {
    /// Proxy word search URL, overrides WORDSEARCH_PROXY_URL
    #[arg(long)]
    proxy_url: Option<String>,

    /// Look up a single word, print the result and exit
    #[arg(long)]
    word: Option<String>,

    /// With --word, print the final view as JSON
    #[arg(long, requires = "word")]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the rendered view
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = Config::new();
    if let Some(proxy_url) = cli.proxy_url {
        config.client.proxy_url = proxy_url;
    }

    let transport = ProxyClient::new(&config.client)?;
    tracing::info!("Using proxy at {}", transport.endpoint());
    let search = SearchController::new(
        Arc::new(transport),
        Arc::new(SystemAudioPlayer),
        &config.client,
    );

    match cli.word {
        Some(word) => run_once(search, &word, cli.json).await,
        None => run(search).await,
    }
}

async fn run_once(search: SearchController, word: &str, json: bool) -> anyhow::Result<()> {
    if let Some(lookup) = search.submit(word).await {
        lookup.await?;
    }

    let view = search.view().await;
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render_view(&view));
    }
    Ok(())
}

async fn run(search: SearchController) -> anyhow::Result<()> {
    let app = AppController::new();
    let search = search.with_observer(app.view_observer());

    println!("{}", render_view(&search.view().await));
    let mut tasks = app.spawn_tasks(search);

    tokio::select! {
        result = signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::error!("failed to listen for ctrl+c: {e}");
            }
            tracing::info!("Shutdown requested");
        }
        _ = app.cancelled() => {
            tracing::info!("Quit requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::warn!("task exited"),
                Ok(Err(e)) => tracing::error!("task failed: {e}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    }

    app.shutdown();
    // The stdin watcher may sit in a blocking read; don't wait on it
    tasks.abort_all();
    Ok(())
}
