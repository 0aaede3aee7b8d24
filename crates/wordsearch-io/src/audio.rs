use wordsearch_core::audio::{AudioError, AudioPlayer};

/// Hands the recording URL to the desktop's default handler
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemAudioPlayer;

impl AudioPlayer for SystemAudioPlayer {
    fn play(&self, url: &str) -> Result<(), AudioError> {
        tracing::debug!("Opening audio {}", url);
        open::that_detached(url).map_err(|e| AudioError::Launch {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}
