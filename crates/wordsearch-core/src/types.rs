use crate::view::ViewState;

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A raw line typed by the user
    TextInput(String),
    UiEvent(UiEvent),
    /// Snapshot published after every state transition
    ViewChanged(ViewState),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Search(String),
    Clear,
    /// 1-based index into the phonetics that carry audio
    PlayAudio(usize),
    Quit,
}
