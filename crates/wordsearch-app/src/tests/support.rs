use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use tokio::sync::oneshot;
use wordsearch_config::client::ClientConfig;
use wordsearch_core::audio::{AudioError, AudioPlayer};
use wordsearch_core::transport::{LookupTransport, TransportError};
use wordsearch_types::{Definition, LookupResult, Meaning, Phonetic, WordEntry};

use crate::search::SearchController;

pub type Reply = Result<LookupResult, TransportError>;

enum Scripted {
    Now(Reply),
    Later(oneshot::Receiver<Reply>),
}

/// In-memory transport answering from a per-query script
#[derive(Default)]
pub struct ScriptedTransport {
    script: Mutex<HashMap<String, Scripted>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn reply(&self, query: &str, reply: Reply) {
        self.script
            .lock()
            .unwrap()
            .insert(query.to_string(), Scripted::Now(reply));
    }

    /// The request for `query` hangs until the returned sender fires
    pub fn gate(&self, query: &str) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.script
            .lock()
            .unwrap()
            .insert(query.to_string(), Scripted::Later(rx));
        tx
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl LookupTransport for ScriptedTransport {
    async fn search(&self, query: &str) -> Result<LookupResult, TransportError> {
        self.calls.lock().unwrap().push(query.to_string());
        let scripted = self.script.lock().unwrap().remove(query);
        match scripted {
            Some(Scripted::Now(reply)) => reply,
            Some(Scripted::Later(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(TransportError::Network("gate dropped".into()))),
            None => Err(TransportError::Status(404)),
        }
    }
}

#[derive(Default)]
pub struct RecordingAudio {
    pub played: Mutex<Vec<String>>,
    pub fail: bool,
}

impl AudioPlayer for RecordingAudio {
    fn play(&self, url: &str) -> Result<(), AudioError> {
        self.played.lock().unwrap().push(url.to_string());
        if self.fail {
            return Err(AudioError::Launch {
                url: url.to_string(),
                reason: "no audio device".into(),
            });
        }
        Ok(())
    }
}

pub fn controller(
    transport: &Arc<ScriptedTransport>,
    audio: &Arc<RecordingAudio>,
    discard_stale_responses: bool,
) -> SearchController {
    let config = ClientConfig {
        discard_stale_responses,
        ..ClientConfig::default()
    };
    SearchController::new(transport.clone(), audio.clone(), &config)
}

pub fn entry(word: &str, parts: &[&str], audio: Option<&str>) -> WordEntry {
    WordEntry {
        word: word.to_string(),
        meanings: parts
            .iter()
            .map(|part| Meaning {
                part_of_speech: part.to_string(),
                definitions: vec![Definition {
                    definition: format!("{word} used as {part}"),
                    example: None,
                }],
            })
            .collect(),
        phonetics: vec![Phonetic {
            text: format!("/{word}/"),
            audio: audio.map(str::to_string),
        }],
    }
}

pub fn hello_result() -> LookupResult {
    LookupResult::with_entries(vec![WordEntry {
        word: "hello".into(),
        meanings: vec![Meaning {
            part_of_speech: "exclamation".into(),
            definitions: vec![Definition {
                definition: "A greeting.".into(),
                example: None,
            }],
        }],
        phonetics: vec![Phonetic {
            text: "/həˈloʊ/".into(),
            audio: Some("https://example.com/hello.mp3".into()),
        }],
    }])
}
