//! High-level client: `BitfinexClient` with the funding sub-client accessor.
//!
//! The sub-client lives in `domain/funding/client.rs`. This module keeps the
//! builder, the credential slot, and the shared nonce source.

use crate::auth::{Credentials, HmacRequestFactory, NonceGenerator};
use crate::domain::funding::client::Funding;
use crate::error::SdkError;
use crate::http::{FundingHttp, RetryConfig, RetryPolicy};
use crate::permission::{requires_permission, CommandKind, Permission};

use async_lock::RwLock;
use std::sync::Arc;

pub use crate::domain::funding::client::Funding as FundingClient;

/// The primary entry point for authenticated funding requests.
///
/// Clones share credentials and the nonce source, so requests signed through
/// any clone stay strictly ordered.
#[derive(Clone)]
pub struct BitfinexClient {
    pub(crate) http: FundingHttp,
    credentials: Arc<RwLock<Option<Credentials>>>,
    nonce: Arc<NonceGenerator>,
    read_retry: RetryPolicy,
}

impl BitfinexClient {
    pub fn builder() -> BitfinexClientBuilder {
        BitfinexClientBuilder::default()
    }

    pub fn funding(&self) -> Funding<'_> {
        Funding { client: self }
    }

    pub async fn set_credentials(&self, credentials: Credentials) {
        *self.credentials.write().await = Some(credentials);
    }

    pub async fn clear_credentials(&self) {
        *self.credentials.write().await = None;
    }

    pub async fn has_credentials(&self) -> bool {
        self.credentials.read().await.is_some()
    }

    /// Encode-free send: the caller supplies the body produced by the codec.
    pub(crate) async fn send(
        &self,
        kind: CommandKind,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, SdkError> {
        let permission = requires_permission(kind);
        let retry = match permission {
            Permission::Read => self.read_retry.clone(),
            Permission::Write => RetryPolicy::for_permission(permission),
        };
        let factory = HmacRequestFactory::with_nonce(
            self.credentials.read().await.clone(),
            self.nonce.clone(),
        );
        tracing::debug!(?kind, %permission, "funding request {}", path);
        self.http
            .execute(&factory, permission, path, body, &retry)
            .await
    }
}

impl std::fmt::Debug for BitfinexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitfinexClient")
            .field("base_url", &self.http.base_url())
            .field("read_retry", &self.read_retry)
            .finish_non_exhaustive()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct BitfinexClientBuilder {
    base_url: String,
    credentials: Option<Credentials>,
    read_retry: RetryPolicy,
}

impl Default for BitfinexClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            credentials: None,
            read_retry: RetryPolicy::for_permission(Permission::Read),
        }
    }
}

impl BitfinexClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Load credentials from `BFX_API_KEY` / `BFX_API_SECRET`.
    pub fn credentials_from_env(self) -> Result<Self, SdkError> {
        Ok(self.credentials(Credentials::from_env()?))
    }

    /// Override the retry behavior of read requests. Writes are never retried.
    pub fn read_retry(mut self, config: RetryConfig) -> Self {
        self.read_retry = RetryPolicy::Custom(config);
        self
    }

    /// Disable retries for reads as well.
    pub fn no_read_retry(mut self) -> Self {
        self.read_retry = RetryPolicy::None;
        self
    }

    pub fn build(self) -> Result<BitfinexClient, SdkError> {
        Ok(BitfinexClient {
            http: FundingHttp::new(&self.base_url)?,
            credentials: Arc::new(RwLock::new(self.credentials)),
            nonce: Arc::new(NonceGenerator::new()),
            read_retry: self.read_retry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = BitfinexClient::builder().build().unwrap();
        assert_eq!(client.http.base_url(), crate::network::DEFAULT_API_URL);
        assert!(matches!(client.read_retry, RetryPolicy::Idempotent));
    }

    #[test]
    fn test_builder_custom_read_retry() {
        let client = BitfinexClient::builder()
            .base_url("http://127.0.0.1:9/")
            .read_retry(RetryConfig::immediate(1))
            .build()
            .unwrap();
        assert_eq!(client.http.base_url(), "http://127.0.0.1:9");
        assert!(matches!(client.read_retry, RetryPolicy::Custom(ref c) if c.max_retries == 1));
    }

    #[tokio::test]
    async fn test_credentials_can_be_swapped() {
        let client = BitfinexClient::builder().build().unwrap();
        assert!(!client.has_credentials().await);

        let clone = client.clone();
        clone.set_credentials(Credentials::new("k", "s")).await;
        assert!(client.has_credentials().await);

        client.clear_credentials().await;
        assert!(!clone.has_credentials().await);
    }

    #[test]
    fn test_debug_hides_credentials() {
        let client = BitfinexClient::builder()
            .credentials(Credentials::new("key", "topsecret"))
            .build()
            .unwrap();
        assert!(!format!("{:?}", client).contains("topsecret"));
    }

    #[tokio::test]
    async fn test_missing_credentials_fails_before_sending() {
        let client = BitfinexClient::builder()
            .base_url("http://127.0.0.1:9")
            .build()
            .unwrap();
        let err = client.funding().offers(None).await.unwrap_err();
        assert!(matches!(
            err,
            SdkError::Auth(crate::error::AuthError::MissingCredentials)
        ));
    }
}
