use crate::search::SearchController;

/// Play the `index`-th (1-based) recording currently on screen
pub async fn handle_play_audio(controller: &SearchController, index: usize) {
    let view = controller.view().await;
    let url = index
        .checked_sub(1)
        .and_then(|i| view.playable_audio().nth(i));

    match url {
        Some(url) => {
            tracing::info!("[AUDIO] playing {}", url);
            controller.play_audio(url);
        }
        None => tracing::warn!(
            "[AUDIO] no recording #{} on screen for '{}'",
            index,
            controller.query().await
        ),
    }
}
