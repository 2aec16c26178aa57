use crate::backend::{Backend, BackendError};
use crate::models::{Identity, RankingEntry};
use std::sync::Arc;

/// Read-only projection of the backend's ranking for one identity. The
/// backend owns the order; this view only re-fetches and re-renders it.
pub struct RankingView {
    backend: Arc<dyn Backend>,
    identity: Identity,
    entries: Vec<RankingEntry>,
}

impl RankingView {
    pub fn new(backend: Arc<dyn Backend>, identity: Identity) -> Self {
        RankingView {
            backend,
            identity,
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[RankingEntry] {
        &self.entries
    }

    /// Replaces the held entries with the backend's current ranking. On
    /// failure the previously fetched entries are kept as-is.
    pub async fn refresh(&mut self) -> Result<(), BackendError> {
        self.entries = self.backend.fetch_rankings(&self.identity).await?;
        Ok(())
    }

    /// Full re-render, one `<position>. <name> (<score>)` line per entry in
    /// backend order. An empty ranking renders as an empty string.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (index, entry) in self.entries.iter().enumerate() {
            out.push_str(&format!("{}. {} ({})\n", index + 1, entry.name, entry.score));
        }
        out
    }
}
