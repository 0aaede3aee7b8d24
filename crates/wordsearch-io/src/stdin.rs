use std::future::Future;
use std::io::{BufRead, BufReader};
use std::thread;

use tokio::sync::mpsc;

/// Read stdin line by line until EOF, handing each line to `on_line`
pub async fn watch_stdin<F, Fut>(on_line: F) -> Result<(), anyhow::Error>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<(), anyhow::Error>>,
{
    watch_lines(BufReader::new(std::io::stdin()), on_line).await
}

/// Lines are delivered in order; `on_line` resolves before the next one is handed over.
///
/// Reading happens on a detached thread so a pending blocking read never
/// holds up runtime shutdown.
pub async fn watch_lines<R, F, Fut>(reader: R, mut on_line: F) -> Result<(), anyhow::Error>
where
    R: BufRead + Send + 'static,
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<(), anyhow::Error>>,
{
    let (tx, mut rx) = mpsc::unbounded_channel();

    thread::Builder::new()
        .name("stdin-reader".into())
        .spawn(move || {
            for line in reader.lines() {
                match line {
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::error!("failed to read input: {}", e);
                        break;
                    }
                }
            }
        })?;

    while let Some(line) = rx.recv().await {
        on_line(line).await?;
    }

    tracing::debug!("input stream closed");
    Ok(())
}
