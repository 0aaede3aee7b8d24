use kanal::AsyncSender;
use tokio_util::sync::CancellationToken;
use wordsearch_core::types::{AppEvent, UiEvent};

/// Feed typed lines into the app until stdin closes or the app shuts down
pub async fn watcher_io(
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    tracing::info!("Starting stdin watcher");

    let tx = event_tx.clone();
    tokio::select! {
        result = wordsearch_io::stdin::watch_stdin(move |line| {
            let tx = tx.clone();
            async move {
                tx.send(AppEvent::TextInput(line)).await?;
                Ok(())
            }
        }) => {
            if let Err(e) = result {
                tracing::error!("stdin watcher error: {}", e);
            }
            // End of input behaves like :quit
            let _ = event_tx.send(AppEvent::UiEvent(UiEvent::Quit)).await;
        }
        _ = cancel.cancelled() => {
            tracing::info!("stdin watcher stopping");
        }
    }

    Ok(())
}
