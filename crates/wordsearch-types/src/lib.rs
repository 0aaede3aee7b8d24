pub mod types;

pub use types::{Definition, LookupResult, Meaning, Phonetic, WordEntry};
