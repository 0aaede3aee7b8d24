use serde::Serialize;
use wordsearch_types::{Definition, Meaning, Phonetic};

use crate::error::SearchError;
use crate::lookup::LookupOutcome;

/// Which of the five view phases the state is in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Empty,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlattenedDefinition {
    pub definition: String,
    pub example: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlattenedMeaning {
    pub part_of_speech: String,
    pub definitions: Vec<FlattenedDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlattenedPhonetic {
    pub text: String,
    pub audio: Option<String>,
}

impl FlattenedPhonetic {
    pub fn has_audio(&self) -> bool {
        self.audio.is_some()
    }
}

impl From<Definition> for FlattenedDefinition {
    fn from(definition: Definition) -> Self {
        Self {
            definition: definition.definition,
            example: definition.example,
        }
    }
}

impl From<Meaning> for FlattenedMeaning {
    fn from(meaning: Meaning) -> Self {
        Self {
            part_of_speech: meaning.part_of_speech,
            definitions: meaning.definitions.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Phonetic> for FlattenedPhonetic {
    fn from(phonetic: Phonetic) -> Self {
        Self {
            text: phonetic.text,
            audio: phonetic.audio,
        }
    }
}

/// Everything the renderer needs to draw the search screen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub phase: Phase,
    pub loading: bool,
    pub error: Option<String>,
    pub word: Option<String>,
    pub meanings: Vec<FlattenedMeaning>,
    pub phonetics: Vec<FlattenedPhonetic>,
}

impl ViewState {
    pub fn idle() -> Self {
        Self::default()
    }

    /// Empty query: show the validation message and keep whatever results are on screen
    pub fn reject_empty_query(&mut self) {
        self.error = Some(SearchError::Validation.to_string());
        if !self.loading {
            self.phase = Phase::Error;
        }
    }

    pub fn begin_loading(&mut self) {
        self.phase = Phase::Loading;
        self.loading = true;
        self.error = None;
        self.meanings.clear();
        self.phonetics.clear();
    }

    /// Apply a terminal outcome. This is the only place `loading` drops back to false.
    pub fn finish(&mut self, outcome: LookupOutcome) {
        match outcome {
            LookupOutcome::Found {
                word,
                meanings,
                phonetics,
            } => {
                self.phase = Phase::Success;
                self.error = None;
                self.word = Some(word);
                self.meanings = meanings;
                self.phonetics = phonetics;
            }
            LookupOutcome::NotFound => {
                self.phase = Phase::Empty;
                self.show_error(SearchError::NotFound);
            }
            LookupOutcome::RateLimited(message) => {
                self.phase = Phase::Error;
                self.show_error(SearchError::rate_limited(message));
            }
            LookupOutcome::Failed(_) => {
                self.phase = Phase::Error;
                self.show_error(SearchError::NotFound);
            }
        }
        self.loading = false;
    }

    pub fn reset(&mut self) {
        *self = Self::idle();
    }

    fn show_error(&mut self, error: SearchError) {
        self.error = Some(error.to_string());
        self.meanings.clear();
        self.phonetics.clear();
    }

    /// Phonetics that can be played, in display order
    pub fn playable_audio(&self) -> impl Iterator<Item = &str> {
        self.phonetics.iter().filter_map(|p| p.audio.as_deref())
    }
}
