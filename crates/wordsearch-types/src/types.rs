use serde::{Deserialize, Deserializer, Serialize};

/// Envelope returned by the lookup function and relayed by the proxy.
///
/// Every field is optional on the wire. A forwarding error envelope
/// (`{"error": .., "status": 500}`) decodes with `error` set and no entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupResult {
    #[serde(rename = "WordSearchResponses")]
    pub entries: Option<Vec<WordEntry>>,
    #[serde(rename = "StatusCode", skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(rename = "Message", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Set only when the proxy could not reach the lookup function
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LookupResult {
    pub fn with_entries(entries: Vec<WordEntry>) -> Self {
        Self {
            entries: Some(entries),
            ..Self::default()
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status_code == Some(429)
    }

    pub fn is_proxy_error(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub word: String,
    #[serde(deserialize_with = "null_as_default")]
    pub meanings: Vec<Meaning>,
    #[serde(deserialize_with = "null_as_default")]
    pub phonetics: Vec<Phonetic>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meaning {
    #[serde(rename = "partOfSpeech", deserialize_with = "null_as_default")]
    pub part_of_speech: String,
    #[serde(deserialize_with = "null_as_default")]
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Definition {
    #[serde(deserialize_with = "null_as_default")]
    pub definition: String,
    #[serde(deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Phonetic {
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    /// The lookup service sends `""` when no recording exists
    #[serde(deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.is_empty()))
}
