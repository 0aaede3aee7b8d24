/// Starts playback of a pronunciation recording.
///
/// Playback is fire-and-forget: the caller never waits on it and a failure
/// only gets logged.
pub trait AudioPlayer: Send + Sync {
    fn play(&self, url: &str) -> Result<(), AudioError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("Failed to start playback of {url}: {reason}")]
    Launch { url: String, reason: String },
}
