use std::io::Write;

use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;
use wordsearch_core::types::AppEvent;

use crate::render::render_view;

/// Redraw on every view snapshot coming from the app
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    loop {
        let event = tokio::select! {
            event = app_to_ui_rx.recv() => event?,
            _ = cancel.cancelled() => break,
        };

        if let AppEvent::ViewChanged(view) = event {
            tracing::debug!("[UI] redraw, phase {:?}", view.phase);
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", render_view(&view))?;
            stdout.flush()?;
        }
    }

    Ok(())
}
