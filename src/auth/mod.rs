//! Authentication: API credentials, nonces, and signed request construction.
//!
//! ## Boundary
//!
//! The codec produces request *bodies*; it never sees the API secret. A
//! [`RequestFactory`] takes a permission scope, an endpoint path and a body and
//! returns a fully signed [`AuthenticatedRequest`]. [`HmacRequestFactory`] is
//! the venue's HMAC-SHA384 scheme; tests and applications may provide their own.
//!
//! ## Path layout
//!
//! Authenticated endpoints live under `auth/<scope>/<endpoint>`, where scope
//! is `r` for [`Permission::Read`] and `w` for [`Permission::Write`].

pub mod signer;

pub use signer::HmacRequestFactory;

use crate::error::AuthError;
use crate::permission::Permission;
use std::sync::atomic::{AtomicU64, Ordering};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "BFX_API_KEY";
/// Environment variable holding the API secret.
pub const API_SECRET_ENV: &str = "BFX_API_SECRET";

/// Body signed and sent for requests without a payload.
pub const EMPTY_BODY: &[u8] = b"{}";

// ============================================================================
// Credentials
// ============================================================================

/// API key pair. The secret never leaves this type except into the signer.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Read `BFX_API_KEY` / `BFX_API_SECRET`.
    pub fn from_env() -> Result<Self, AuthError> {
        let key = read_env(API_KEY_ENV)?;
        let secret = read_env(API_SECRET_ENV)?;
        Ok(Self::new(key, secret))
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn api_secret(&self) -> &str {
        &self.api_secret
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

fn read_env(name: &'static str) -> Result<String, AuthError> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(AuthError::MissingEnv(name))
}

// ============================================================================
// Nonces
// ============================================================================

/// Strictly increasing microsecond nonce source.
///
/// The venue rejects a nonce that is not larger than the previous one for the
/// same key, so one generator must be shared by everything signing with a key.
#[derive(Debug, Default)]
pub struct NonceGenerator {
    last: AtomicU64,
}

impl NonceGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> u64 {
        let now = chrono::Utc::now().timestamp_micros().max(0) as u64;
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(prev + 1);
            match self
                .last
                .compare_exchange_weak(prev, candidate, Ordering::SeqCst, Ordering::Relaxed)
            {
                Ok(_) => return candidate,
                Err(actual) => prev = actual,
            }
        }
    }
}

// ============================================================================
// Request Factory
// ============================================================================

/// A signed request, ready for transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedRequest {
    pub permission: Permission,
    /// Path relative to the API base, e.g. `auth/w/funding/offer/cancel`.
    pub path: String,
    pub nonce: u64,
    pub headers: Vec<(&'static str, String)>,
    pub body: Vec<u8>,
}

impl AuthenticatedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Builds signed requests around codec-produced bodies.
pub trait RequestFactory {
    fn new_authenticated_request(
        &self,
        permission: Permission,
        path: &str,
    ) -> Result<AuthenticatedRequest, AuthError> {
        self.new_authenticated_request_with_bytes(permission, path, EMPTY_BODY.to_vec())
    }

    fn new_authenticated_request_with_bytes(
        &self,
        permission: Permission,
        path: &str,
        body: Vec<u8>,
    ) -> Result<AuthenticatedRequest, AuthError>;
}

/// `funding/offers/fUSD` → `auth/r/funding/offers/fUSD`.
pub fn scoped_path(permission: Permission, path: &str) -> String {
    format!("auth/{}/{}", permission.scope(), path.trim_start_matches('/'))
}
