#[cfg(test)]
pub mod fake;
mod http;

pub use http::{BackendConfig, HttpBackend};

use crate::models::{ComparisonPair, Identity, RankingEntry, VoteDecision};
use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("backend returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed response payload: {0}")]
    MalformedPayload(&'static str),
}

/// The three operations the backend exposes. Everything the client knows
/// about ratings and vote history lives behind this seam, which also lets
/// tests substitute an in-memory backend.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Fetches one comparison pair for the given identity.
    async fn fetch_pair(&self, identity: &Identity) -> Result<ComparisonPair, BackendError>;

    /// Submits a vote. Only completion matters; the response body is ignored.
    async fn submit_vote(&self, decision: &VoteDecision) -> Result<(), BackendError>;

    /// Fetches the full ranking in backend display order.
    async fn fetch_rankings(&self, identity: &Identity) -> Result<Vec<RankingEntry>, BackendError>;
}
