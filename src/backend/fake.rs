use super::{Backend, BackendError};
use crate::models::{ComparisonPair, Identity, RankingEntry, VoteDecision};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// One observed backend call, in the order the client issued it.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Pair(String),
    Vote(VoteDecision),
    Rankings(String),
}

/// Scripted in-memory backend. Each operation pops the next queued response
/// and records the call so tests can assert on sequencing.
#[derive(Default)]
pub struct FakeBackend {
    calls: Mutex<Vec<Call>>,
    pairs: Mutex<VecDeque<Result<ComparisonPair, BackendError>>>,
    votes: Mutex<VecDeque<Result<(), BackendError>>>,
    rankings: Mutex<VecDeque<Result<Vec<RankingEntry>, BackendError>>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        FakeBackend::default()
    }

    pub fn queue_pair(&self, response: Result<ComparisonPair, BackendError>) {
        self.pairs.lock().unwrap().push_back(response);
    }

    pub fn queue_vote(&self, response: Result<(), BackendError>) {
        self.votes.lock().unwrap().push_back(response);
    }

    pub fn queue_rankings(&self, response: Result<Vec<RankingEntry>, BackendError>) {
        self.rankings.lock().unwrap().push_back(response);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn pair(first: &str, second: &str) -> ComparisonPair {
        ComparisonPair {
            first: first.to_string(),
            second: second.to_string(),
        }
    }
}

fn unscripted() -> BackendError {
    BackendError::MalformedPayload("no scripted response left")
}

#[async_trait]
impl Backend for FakeBackend {
    async fn fetch_pair(&self, identity: &Identity) -> Result<ComparisonPair, BackendError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Pair(identity.as_str().to_string()));
        self.pairs.lock().unwrap().pop_front().unwrap_or_else(|| Err(unscripted()))
    }

    async fn submit_vote(&self, decision: &VoteDecision) -> Result<(), BackendError> {
        self.calls.lock().unwrap().push(Call::Vote(decision.clone()));
        self.votes.lock().unwrap().pop_front().unwrap_or_else(|| Err(unscripted()))
    }

    async fn fetch_rankings(&self, identity: &Identity) -> Result<Vec<RankingEntry>, BackendError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Rankings(identity.as_str().to_string()));
        self.rankings
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(unscripted()))
    }
}
