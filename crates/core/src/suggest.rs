//! Suggestion candidates for a search query.
//!
//! The controller only ever sees the [`SuggestionSource`] trait, so the
//! in-memory vocabulary and the network-backed source are interchangeable.
//! Retrieval is best-effort end to end: [`lookup_or_empty`] folds every
//! failure into "no candidates this cycle".

use async_trait::async_trait;
use thiserror::Error;

/// What went wrong producing suggestions. Never shown to the user; the
/// pipeline logs it and renders nothing instead.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The backing service could not be reached or answered with junk.
    #[error("suggestion backend unavailable: {0}")]
    Backend(String),
}

/// A source of candidate strings for a query.
#[async_trait]
pub trait SuggestionSource {
    /// Candidates matching `query`, in the order the panel should show them.
    async fn lookup(&self, query: &str) -> Result<Vec<String>, LookupError>;
}

/// The vocabulary the page ships with for offline matching.
const VOCABULARY: [&str; 8] = [
    "Wheat", "Rice", "Corn", "Potato", "Bean", "Lentil", "Barley", "Oats",
];

/// In-memory source: case-insensitive substring match over a fixed
/// vocabulary, answering in vocabulary order.
#[derive(Clone, Debug)]
pub struct StaticSuggestions {
    vocabulary: Vec<String>,
}

impl StaticSuggestions {
    pub fn new(vocabulary: Vec<String>) -> Self {
        Self { vocabulary }
    }

    /// Synchronous matching core, shared by the trait impl and tests.
    pub fn matches(&self, query: &str) -> Vec<String> {
        let needle = query.to_lowercase();
        self.vocabulary
            .iter()
            .filter(|candidate| candidate.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

impl Default for StaticSuggestions {
    /// The built-in crop vocabulary.
    fn default() -> Self {
        Self::new(VOCABULARY.iter().map(|s| s.to_string()).collect())
    }
}

#[async_trait]
impl SuggestionSource for StaticSuggestions {
    async fn lookup(&self, query: &str) -> Result<Vec<String>, LookupError> {
        Ok(self.matches(query))
    }
}

/// Run a lookup, normalizing failure to an empty candidate list. The empty
/// list makes the panel hide, which is exactly the page's "nothing to offer"
/// state.
pub async fn lookup_or_empty<S>(source: &S, query: &str) -> Vec<String>
where
    S: SuggestionSource + ?Sized,
{
    match source.lookup(query).await {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::warn!("suggestion lookup failed for {query:?}: {e}");
            Vec::new()
        }
    }
}
