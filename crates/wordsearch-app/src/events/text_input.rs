use wordsearch_core::types::UiEvent;

/// Turn a typed line into a UI action.
///
/// Anything that is not a `:` command is a search, passed on exactly as
/// typed (blank lines included, so they hit the empty-word check).
pub fn parse_command(line: &str) -> UiEvent {
    let trimmed = line.trim();
    let Some(command) = trimmed.strip_prefix(':') else {
        return UiEvent::Search(line.to_string());
    };

    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("clear" | "c"), None) => UiEvent::Clear,
        (Some("quit" | "q" | "exit"), None) => UiEvent::Quit,
        (Some("play" | "p"), index) => {
            UiEvent::PlayAudio(index.and_then(|i| i.parse().ok()).unwrap_or(1))
        }
        _ => UiEvent::Search(line.to_string()),
    }
}
