//! Notification array layout.

/// Positions of a notification array.
pub mod fields {
    pub const MTS: usize = 0;
    pub const TYPE: usize = 1;
    pub const MESSAGE_ID: usize = 2;
    pub const NOTIFY_INFO: usize = 4;
    pub const CODE: usize = 5;
    pub const STATUS: usize = 6;
    pub const TEXT: usize = 7;

    pub const MIN: usize = 8;
}

/// Notification kinds whose payload is a funding offer row (or rows).
pub fn carries_offers(kind: &str) -> bool {
    kind.starts_with("fon") || kind.starts_with("foc")
}
