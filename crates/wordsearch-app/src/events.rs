use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;
use wordsearch_core::types::{AppEvent, UiEvent};

use crate::search::SearchController;

pub mod play_audio;
pub mod text_input;

use play_audio::handle_play_audio;
use text_input::parse_command;

/// App's main loop
pub async fn event_loop(
    controller: SearchController,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            event = ui_to_app_rx.recv() => event?,
            _ = cancel.cancelled() => break,
        };

        tracing::debug!(
            "[EVENT_LOOP] event received: {:?}",
            std::mem::discriminant(&event)
        );
        if !handle_events(&controller, event).await {
            tracing::info!("[EVENT_LOOP] quit requested");
            cancel.cancel();
            break;
        }
    }

    Ok(())
}

/// Returns false once the user asked to quit
pub async fn handle_events(controller: &SearchController, event: AppEvent) -> bool {
    match event {
        AppEvent::TextInput(line) => {
            let command = parse_command(&line);
            tracing::debug!("TextInput parsed as {:?}", command);
            handle_ui_event(controller, command).await
        }
        AppEvent::UiEvent(event) => handle_ui_event(controller, event).await,
        AppEvent::ViewChanged(_) => {
            // UI-only event, ignore in backend
            true
        }
    }
}

async fn handle_ui_event(controller: &SearchController, event: UiEvent) -> bool {
    match event {
        UiEvent::Search(query) => {
            // The lookup task runs on its own; its result arrives as a ViewChanged
            let _ = controller.submit(&query).await;
        }
        UiEvent::Clear => controller.clear().await,
        UiEvent::PlayAudio(index) => handle_play_audio(controller, index).await,
        UiEvent::Quit => return false,
    }
    true
}
