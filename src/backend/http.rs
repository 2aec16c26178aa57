use super::{Backend, BackendError};
use crate::models::{ComparisonPair, Identity, RankingEntry, VoteDecision};
use async_trait::async_trait;
use std::env;

#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
}

impl BackendConfig {
    pub fn from_env() -> Self {
        let base_url =
            env::var("BACKEND_URL").unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());
        Self::new(base_url)
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        BackendConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

/// reqwest-backed implementation of the three endpoints.
pub struct HttpBackend {
    config: BackendConfig,
    http: reqwest::Client,
}

impl HttpBackend {
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder().user_agent("duelrank").build()?;
        Ok(HttpBackend { config, http })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn fetch_pair(&self, identity: &Identity) -> Result<ComparisonPair, BackendError> {
        let response = self
            .http
            .get(self.url("/pair"))
            .query(&[("username", identity.as_str())])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(BackendError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    async fn submit_vote(&self, decision: &VoteDecision) -> Result<(), BackendError> {
        let response = self
            .http
            .post(self.url("/vote"))
            .json(decision)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(BackendError::Status(response.status()));
        }
        Ok(())
    }

    async fn fetch_rankings(&self, identity: &Identity) -> Result<Vec<RankingEntry>, BackendError> {
        let response = self
            .http
            .get(self.url("/rankings"))
            .query(&[("username", identity.as_str())])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(BackendError::Status(response.status()));
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_trims_trailing_slash() {
        let config = BackendConfig::new("http://localhost:5000/");
        assert_eq!(config.base_url, "http://localhost:5000");
    }

    #[test]
    fn endpoint_urls_join_cleanly() {
        let backend = HttpBackend::new(BackendConfig::new("http://localhost:5000/")).unwrap();
        assert_eq!(backend.url("/pair"), "http://localhost:5000/pair");
        assert_eq!(backend.url("/rankings"), "http://localhost:5000/rankings");
    }
}
