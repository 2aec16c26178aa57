use crate::backend::{Backend, BackendError};
use crate::models::{ComparisonPair, Identity, VoteDecision};
use crate::view::RankingView;
use log::warn;
use std::sync::Arc;

/// The two selectable display positions of the current matchup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    A,
    B,
}

/// State of the selectable slots. A choice is only possible while armed;
/// after a failed reload the last pair stays visible but inert.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotBinding {
    Empty,
    Armed(ComparisonPair),
    Inert(ComparisonPair),
}

/// Drives one voting round after another for a single identity: fetches a
/// pair, binds it to the slots, turns a slot choice into a vote decision and
/// runs the submit-then-refresh cycle.
pub struct PairSession {
    backend: Arc<dyn Backend>,
    identity: Identity,
    binding: SlotBinding,
}

impl PairSession {
    pub fn new(backend: Arc<dyn Backend>, identity: Identity) -> Self {
        PairSession {
            backend,
            identity,
            binding: SlotBinding::Empty,
        }
    }

    pub fn binding(&self) -> &SlotBinding {
        &self.binding
    }

    /// Fetches a fresh pair and rebinds both slots to it, replacing whatever
    /// was bound before. Overlapping loads are not serialized: the last load
    /// to resolve wins the binding, and the identity scoping on the backend
    /// is the source of truth for which pair is actually live.
    ///
    /// A transport error, an error status or a malformed pair (missing or
    /// empty names) disarms the slots instead: the previous pair stays
    /// displayed but takes no votes until a later load succeeds.
    pub async fn load_pair(&mut self) -> Result<(), BackendError> {
        match self.backend.fetch_pair(&self.identity).await {
            Ok(pair) if pair.is_well_formed() => {
                self.binding = SlotBinding::Armed(pair);
                Ok(())
            }
            Ok(_) => {
                self.disarm();
                Err(BackendError::MalformedPayload("pair with empty item name"))
            }
            Err(e) => {
                self.disarm();
                Err(e)
            }
        }
    }

    fn disarm(&mut self) {
        let previous = std::mem::replace(&mut self.binding, SlotBinding::Empty);
        self.binding = match previous {
            SlotBinding::Armed(pair) | SlotBinding::Inert(pair) => SlotBinding::Inert(pair),
            SlotBinding::Empty => SlotBinding::Empty,
        };
    }

    /// Turns a slot choice into a decision against the currently bound pair:
    /// the chosen slot's item wins, the other slot's item loses. Returns
    /// `None` while the slots are empty or inert. Whether winner and loser
    /// actually belong to the pair the backend considers live is the
    /// backend's to validate, not ours.
    pub fn choose(&self, slot: Slot) -> Option<VoteDecision> {
        let SlotBinding::Armed(pair) = &self.binding else {
            return None;
        };
        let (winner, loser) = match slot {
            Slot::A => (pair.first.clone(), pair.second.clone()),
            Slot::B => (pair.second.clone(), pair.first.clone()),
        };
        Some(VoteDecision {
            winner,
            loser,
            identity: self.identity.clone(),
        })
    }

    /// Submits the decision and, only once the backend has acknowledged it,
    /// refreshes both panes. The two refreshes are independent of each other
    /// and run concurrently. A failed submission performs no refresh at all,
    /// so the display never pretends a lost vote was counted.
    pub async fn cast_vote(
        &mut self,
        view: &mut RankingView,
        decision: VoteDecision,
    ) -> Result<(), BackendError> {
        self.backend.submit_vote(&decision).await?;

        let (pair_result, rankings_result) = tokio::join!(self.load_pair(), view.refresh());
        if let Err(e) = pair_result {
            warn!("pair refresh after vote failed: {}", e);
        }
        if let Err(e) = rankings_result {
            warn!("rankings refresh after vote failed: {}", e);
        }
        Ok(())
    }
}
