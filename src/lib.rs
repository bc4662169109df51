//! # Bitfinex Funding SDK
//!
//! Wire codec and typed snapshot decoder for the Bitfinex v2 funding market,
//! with an optional authenticated REST client.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Commands, codec, row decoding, domain types (pure, no I/O)
//! 2. **Auth**: Credentials, nonces, HMAC-SHA384 request signing
//! 3. **HTTP API**: `FundingHttp` with permission-based retry policies
//! 4. **WebSocket**: Account-channel envelopes and notification frames (no socket)
//! 5. **High-Level Client**: `BitfinexClient` with the `funding()` sub-client
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bitfinex_funding::prelude::*;
//!
//! let client = BitfinexClient::builder()
//!     .credentials_from_env()?
//!     .build()?;
//!
//! let offers = client.funding().offers(Some("fUSD")).await?;
//! let ack = client
//!     .funding()
//!     .submit_offer(&FundingOfferRequest::new("fUSD", "100".parse()?, "0.0002".parse()?, 2))
//!     .await?;
//!
//! // Same command over a websocket connection you manage yourself:
//! let frame = encode_ws(&CancelRequest { id: 41215 })?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire payloads, row conversions.
pub mod domain;

/// Command encoding, row access, snapshot decoding.
pub mod codec;

/// Command kinds and the permission each one needs.
pub mod permission;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Authentication: credentials, nonces, signed requests.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP transport with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: WebSocket ───────────────────────────────────────────────────────

/// Websocket envelopes for the authenticated account channel.
pub mod ws;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `BitfinexClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Currency, FundingSide, FundingSymbol};

    // Codec
    pub use crate::codec::{
        decode_notification, decode_snapshot, encode_rest, encode_ws, Command, FromRow, Snapshot,
    };
    pub use crate::permission::{requires_permission, CommandKind, Permission};

    // Domain types
    pub use crate::domain::credit::Credit;
    pub use crate::domain::funding::{KeepFundingKind, KeepFundingRequest};
    pub use crate::domain::loan::Loan;
    pub use crate::domain::notification::{Notification, NotificationStatus, NotifyInfo};
    pub use crate::domain::offer::{CancelAllRequest, CancelRequest, FundingOfferRequest, Offer, OfferType};
    pub use crate::domain::trade::FundingTrade;

    // Errors
    pub use crate::error::{AuthError, DecodeError, EncodeError, HttpError, SdkError, ValidationError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_WS_URL};

    // Auth
    pub use crate::auth::{AuthenticatedRequest, Credentials, HmacRequestFactory, RequestFactory};

    // WebSocket
    pub use crate::ws::WsEnvelope;

    // HTTP client + sub-client
    #[cfg(feature = "http")]
    pub use crate::client::{BitfinexClient, BitfinexClientBuilder, FundingClient};
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
