use wordsearch_types::{LookupResult, WordEntry};

use crate::transport::TransportError;
use crate::view::{FlattenedMeaning, FlattenedPhonetic};

/// What a finished request means for the view
#[derive(Debug)]
pub enum LookupOutcome {
    Found {
        word: String,
        meanings: Vec<FlattenedMeaning>,
        phonetics: Vec<FlattenedPhonetic>,
    },
    /// The service answered but had no entries for the word
    NotFound,
    RateLimited(Option<String>),
    /// The request never produced a usable payload
    Failed(TransportError),
}

/// Map a transport result onto an outcome.
///
/// A proxy error envelope counts as a failed request. Otherwise a 429 wins
/// over everything else in the payload, and a null or empty entry list is a
/// miss.
pub fn classify(response: Result<LookupResult, TransportError>) -> LookupOutcome {
    let result = match response {
        Ok(result) => result,
        Err(e) => return LookupOutcome::Failed(e),
    };

    if let Some(error) = result.error {
        return LookupOutcome::Failed(TransportError::Proxy(error));
    }

    if result.is_rate_limited() {
        return LookupOutcome::RateLimited(result.message);
    }

    match result.entries {
        Some(entries) if !entries.is_empty() => flatten(entries),
        _ => LookupOutcome::NotFound,
    }
}

/// Concatenate every entry's meanings and phonetics in response order.
/// The headword comes from the first entry.
fn flatten(entries: Vec<WordEntry>) -> LookupOutcome {
    let word = entries[0].word.clone();
    let mut meanings = Vec::new();
    let mut phonetics = Vec::new();

    for entry in entries {
        meanings.extend(entry.meanings.into_iter().map(FlattenedMeaning::from));
        phonetics.extend(entry.phonetics.into_iter().map(FlattenedPhonetic::from));
    }

    LookupOutcome::Found {
        word,
        meanings,
        phonetics,
    }
}
