//! Client for the external agent-management service.

use crate::error::{MissionControlError, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde_json::Value;
use tracing::debug;

/// Read access to the agent backend
///
/// Responses are passed through untouched; the dashboard renders whatever
/// the backend returns.
#[async_trait]
pub trait AgentBackend: Send + Sync {
    /// Scheduled jobs (`{"jobs": [...]}`)
    async fn list_cron_jobs(&self) -> Result<Value>;

    /// Agent sessions (`{"sessions": [...]}`)
    async fn list_sessions(&self) -> Result<Value>;
}

/// HTTP implementation of [`AgentBackend`] using bearer-token auth
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl HttpBackend {
    const CRON_LIST_PATH: &'static str = "/api/cron/list";
    const SESSIONS_LIST_PATH: &'static str = "/api/sessions/list";

    pub fn new(base_url: &str, token: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, token)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str, token: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json(&self, path: &str) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MissionControlError::BackendStatus(status.as_u16()));
        }

        Ok(response.json::<Value>().await?)
    }
}

#[async_trait]
impl AgentBackend for HttpBackend {
    async fn list_cron_jobs(&self) -> Result<Value> {
        self.get_json(Self::CRON_LIST_PATH).await
    }

    async fn list_sessions(&self) -> Result<Value> {
        self.get_json(Self::SESSIONS_LIST_PATH).await
    }
}
