/// User-facing failures of a search.
///
/// The `Display` output is exactly what the view shows in its error slot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("Please enter a word")]
    Validation,

    /// No entries, or the lookup could not be completed at all
    #[error("No definitions found. Please try another word.")]
    NotFound,

    #[error("{0}")]
    RateLimited(String),
}

pub const RATE_LIMIT_FALLBACK: &str = "Too many requests. Please try again later.";

impl SearchError {
    pub fn rate_limited(message: Option<String>) -> Self {
        SearchError::RateLimited(
            message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| RATE_LIMIT_FALLBACK.to_string()),
        )
    }
}
