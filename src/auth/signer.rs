//! HMAC-SHA384 request signing.

use super::{scoped_path, AuthenticatedRequest, Credentials, NonceGenerator, RequestFactory};
use crate::error::AuthError;
use crate::permission::Permission;
use hmac::{Hmac, Mac};
use sha2::Sha384;
use std::sync::Arc;

type HmacSha384 = Hmac<Sha384>;

/// Prefix of every signed path.
pub const SIGNATURE_PREFIX: &str = "/api/v2/";

pub const HEADER_NONCE: &str = "bfx-nonce";
pub const HEADER_API_KEY: &str = "bfx-apikey";
pub const HEADER_SIGNATURE: &str = "bfx-signature";
pub const HEADER_CONTENT_TYPE: &str = "content-type";

/// Signs requests with an API key pair and a shared nonce source.
#[derive(Debug, Clone)]
pub struct HmacRequestFactory {
    credentials: Option<Credentials>,
    nonce: Arc<NonceGenerator>,
}

impl HmacRequestFactory {
    pub fn new(credentials: Option<Credentials>) -> Self {
        Self::with_nonce(credentials, Arc::new(NonceGenerator::new()))
    }

    pub fn with_nonce(credentials: Option<Credentials>, nonce: Arc<NonceGenerator>) -> Self {
        Self { credentials, nonce }
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Build a request for an explicit nonce.
    pub fn sign_with_nonce(
        &self,
        permission: Permission,
        path: &str,
        nonce: u64,
        body: Vec<u8>,
    ) -> Result<AuthenticatedRequest, AuthError> {
        let creds = self
            .credentials
            .as_ref()
            .ok_or(AuthError::MissingCredentials)?;
        let path = scoped_path(permission, path);
        let signature = sign(creds.api_secret(), &path, nonce, &body)?;

        Ok(AuthenticatedRequest {
            permission,
            path,
            nonce,
            headers: vec![
                (HEADER_NONCE, nonce.to_string()),
                (HEADER_API_KEY, creds.api_key().to_string()),
                (HEADER_SIGNATURE, signature),
                (HEADER_CONTENT_TYPE, "application/json".to_string()),
            ],
            body,
        })
    }
}

impl RequestFactory for HmacRequestFactory {
    fn new_authenticated_request_with_bytes(
        &self,
        permission: Permission,
        path: &str,
        body: Vec<u8>,
    ) -> Result<AuthenticatedRequest, AuthError> {
        self.sign_with_nonce(permission, path, self.nonce.next(), body)
    }
}

/// Hex HMAC-SHA384 of `/api/v2/<path><nonce><body>`.
pub fn sign(secret: &str, path: &str, nonce: u64, body: &[u8]) -> Result<String, AuthError> {
    let mut mac = HmacSha384::new_from_slice(secret.as_bytes())
        .map_err(|e| AuthError::InvalidSecret(e.to_string()))?;
    mac.update(SIGNATURE_PREFIX.as_bytes());
    mac.update(path.as_bytes());
    mac.update(nonce.to_string().as_bytes());
    mac.update(body);
    Ok(hex::encode(mac.finalize().into_bytes()))
}
