//! Client-credentials access tokens for the Graph API.

use crate::config::DirectoryConfig;
use crate::error::{DirectoryError, DirectoryResult};
use chrono::{DateTime, Duration, Utc};
use log::debug;
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::RwLock;

/// Token endpoint response. The v1 authority reports `expires_in` as a string.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: Value,
}

impl TokenResponse {
    fn expires_in_seconds(&self) -> i64 {
        match &self.expires_in {
            Value::Number(n) => n.as_i64().unwrap_or(0),
            Value::String(s) => s.parse().unwrap_or(0),
            _ => 0,
        }
    }
}

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn is_expired(&self, grace_period: Duration) -> bool {
        Utc::now() + grace_period >= self.expires_at
    }
}

/// Caches one access token and refreshes it shortly before it expires.
#[derive(Debug)]
pub struct TokenCache {
    token_url: String,
    client_id: String,
    client_secret: String,
    resource: String,
    http_client: reqwest::Client,
    cached_token: RwLock<Option<CachedToken>>,
    grace_period: Duration,
}

impl TokenCache {
    pub fn new(config: &DirectoryConfig, http_client: reqwest::Client) -> Self {
        Self {
            token_url: format!("{}{}/oauth2/token", config.login_base_url, config.tenant_id),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            resource: config.graph_base_url.clone(),
            http_client,
            cached_token: RwLock::new(None),
            grace_period: Duration::minutes(5),
        }
    }

    /// A valid access token, acquiring a new one when needed.
    pub async fn get_token(&self) -> DirectoryResult<String> {
        {
            let cache = self.cached_token.read().await;
            if let Some(token) = cache.as_ref() {
                if !token.is_expired(self.grace_period) {
                    return Ok(token.access_token.clone());
                }
            }
        }

        let mut cache = self.cached_token.write().await;
        // Another caller may have refreshed while we waited for the lock.
        if let Some(token) = cache.as_ref() {
            if !token.is_expired(self.grace_period) {
                return Ok(token.access_token.clone());
            }
        }

        debug!("Acquiring access token from {}", self.token_url);
        let token = self.acquire_token().await?;
        let access_token = token.access_token.clone();
        *cache = Some(token);
        Ok(access_token)
    }

    /// Drop the cached token so the next request acquires a new one.
    pub async fn invalidate(&self) {
        *self.cached_token.write().await = None;
    }

    async fn acquire_token(&self) -> DirectoryResult<CachedToken> {
        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("resource", self.resource.as_str()),
        ];

        let response = self
            .http_client
            .post(&self.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| DirectoryError::authentication(format!("Token request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectoryError::authentication(format!(
                "Token request failed with status {}: {}",
                status, body
            )));
        }

        let token: TokenResponse = response.json().await.map_err(|e| {
            DirectoryError::authentication(format!("Failed to parse token response: {}", e))
        })?;

        let expires_at = Utc::now() + Duration::seconds(token.expires_in_seconds());
        debug!(
            "Acquired access token, expires at {}",
            expires_at.format("%Y-%m-%d %H:%M:%S UTC")
        );

        Ok(CachedToken {
            access_token: token.access_token,
            expires_at,
        })
    }
}
