use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque per-user key scoping every backend request. Established once at
/// startup and threaded explicitly; serialized as the `username` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    pub fn new(name: impl Into<String>) -> Self {
        Identity(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The two items currently offered for a single pairwise choice. Fetched
/// fresh per round, discarded after each vote.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComparisonPair {
    #[serde(rename = "course1")]
    pub first: String,
    #[serde(rename = "course2")]
    pub second: String,
}

impl ComparisonPair {
    /// A pair with a missing or empty name must never be bound to the slots.
    pub fn is_well_formed(&self) -> bool {
        !self.first.is_empty() && !self.second.is_empty()
    }
}

/// The atomic unit submitted to the backend. Immutable once built, never
/// retried automatically.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoteDecision {
    pub winner: String,
    pub loser: String,
    #[serde(rename = "username")]
    pub identity: Identity,
}

/// One backend-computed row of the ranking. The score is opaque to the
/// client; the backend owns the rating algorithm and the display order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RankingEntry {
    pub name: String,
    #[serde(rename = "rating")]
    pub score: f64,
}
