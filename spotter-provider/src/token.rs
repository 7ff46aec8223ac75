use crate::app_config::AmadeusConfig;
use crate::error::ProviderError;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use tokio::sync::Mutex;

/// A bearer credential from the client-credentials flow. Expiry is
/// time-based only; no clock-skew compensation.
#[derive(Debug, Clone)]
pub struct Credential {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl Credential {
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// Seam for the actual token-exchange call, so the cache policy is
/// testable with counting doubles.
#[async_trait]
pub trait TokenExchanger: Send + Sync {
    async fn exchange(&self) -> Result<Credential, ProviderError>;
}

/// Single-slot credential cache. The slot lock is not held across the
/// exchange call: concurrent expired observers may each refresh, which is
/// idempotent and last-writer-wins.
pub struct TokenSource<E> {
    exchanger: E,
    slot: Mutex<Option<Credential>>,
}

impl<E: TokenExchanger> TokenSource<E> {
    pub fn new(exchanger: E) -> Self {
        Self {
            exchanger,
            slot: Mutex::new(None),
        }
    }

    /// Return the cached token if unexpired, otherwise exchange and cache.
    /// An expired credential is discarded before the exchange; a failed
    /// exchange leaves the slot empty.
    pub async fn bearer_token(&self) -> Result<String, ProviderError> {
        {
            let mut slot = self.slot.lock().await;
            if let Some(cred) = slot.as_ref() {
                if !cred.is_expired() {
                    return Ok(cred.token.clone());
                }
            }
            *slot = None;
        }

        let cred = self.exchanger.exchange().await?;
        let token = cred.token.clone();
        *self.slot.lock().await = Some(cred);
        Ok(token)
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    expires_in: Option<i64>,
}

/// Live exchanger: form-encoded client-credentials POST against the
/// provider's OAuth endpoint.
pub struct OAuthExchanger {
    http: reqwest::Client,
    base_url: String,
    client_id: String,
    client_secret: String,
    live: bool,
}

impl OAuthExchanger {
    pub fn new(http: reqwest::Client, config: &AmadeusConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            live: config.has_live_credentials(),
        }
    }
}

#[async_trait]
impl TokenExchanger for OAuthExchanger {
    async fn exchange(&self) -> Result<Credential, ProviderError> {
        if !self.live {
            return Err(ProviderError::AuthUnavailable(
                "client credentials missing or placeholder".to_string(),
            ));
        }

        tracing::debug!("exchanging client credentials for a bearer token");
        let url = format!("{}/v1/security/oauth2/token", self.base_url);
        let response = self
            .http
            .post(&url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::AuthUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::AuthUnavailable(format!(
                "token endpoint returned {status}"
            )));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::AuthUnavailable(e.to_string()))?;

        match body.access_token {
            Some(token) => Ok(Credential {
                token,
                expires_at: Utc::now() + Duration::seconds(body.expires_in.unwrap_or(0)),
            }),
            None => Err(ProviderError::AuthUnavailable(
                "token response carried no access_token".to_string(),
            )),
        }
    }
}
