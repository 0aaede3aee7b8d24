use std::fmt::Write;

use wordsearch_core::{Phase, ViewState};

const HEADER: &str =
    "Unlock Word Power: Definitions, Phonetics & Examples with the Free Dictionary API";

pub const PROMPT_HELP: &str =
    "Type a word to search. Commands: :play <n>, :clear, :quit";

/// Draw the search screen as plain text
pub fn render_view(view: &ViewState) -> String {
    let mut out = String::new();

    if view.phase == Phase::Idle && view.error.is_none() {
        let _ = writeln!(out, "{HEADER}");
        let _ = writeln!(out, "{PROMPT_HELP}");
        return out;
    }

    if view.loading {
        let _ = writeln!(out, "Searching...");
    }

    if let Some(error) = &view.error {
        let _ = writeln!(out, "! {error}");
    }

    if view.meanings.is_empty() {
        return out;
    }

    let _ = writeln!(out, "Results : {}", view.word.as_deref().unwrap_or_default());

    let mut audio_index = 0;
    for phonetic in &view.phonetics {
        let _ = write!(out, "  Phonetic: {}", phonetic.text);
        if phonetic.has_audio() {
            audio_index += 1;
            let _ = write!(out, "  [:play {audio_index}]");
        }
        out.push('\n');
    }

    for meaning in &view.meanings {
        let _ = writeln!(out, "  {}", meaning.part_of_speech);
        for definition in &meaning.definitions {
            let _ = writeln!(out, "    - Definition: {}", definition.definition);
            if let Some(example) = &definition.example {
                let _ = writeln!(out, "      Example: \"{example}\"");
            }
        }
    }

    out
}
