//! Network URL constants.

/// Default REST API base URL. Authenticated paths are appended to it.
pub const DEFAULT_API_URL: &str = "https://api.bitfinex.com/v2";

/// Default WebSocket URL. Envelopes from [`crate::codec::encode_ws`] go here.
pub const DEFAULT_WS_URL: &str = "wss://api.bitfinex.com/ws/2";
