//! Notification domain: the venue's acknowledgement of a write request.

mod convert;
pub mod wire;

use crate::codec::Snapshot;
use crate::domain::offer::Offer;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Outcome reported in a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationStatus {
    Success,
    Error,
    Failure,
    Other(String),
}

impl From<&str> for NotificationStatus {
    fn from(s: &str) -> Self {
        match s {
            "SUCCESS" => NotificationStatus::Success,
            "ERROR" => NotificationStatus::Error,
            "FAILURE" => NotificationStatus::Failure,
            other => NotificationStatus::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for NotificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationStatus::Success => write!(f, "SUCCESS"),
            NotificationStatus::Error => write!(f, "ERROR"),
            NotificationStatus::Failure => write!(f, "FAILURE"),
            NotificationStatus::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Payload carried by a notification.
#[derive(Debug, Clone, PartialEq)]
pub enum NotifyInfo {
    None,
    FundingOffer(Offer),
    FundingOffers(Snapshot<Offer>),
    /// Kinds without a typed decoder, and every non-successful notification.
    Raw(Value),
}

/// A decoded notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub created_at: DateTime<Utc>,
    /// Request kind being acknowledged, e.g. `"foc-req"`.
    pub kind: String,
    pub message_id: Option<i64>,
    pub info: NotifyInfo,
    pub code: Option<i64>,
    pub status: NotificationStatus,
    pub text: String,
}

impl Notification {
    pub fn is_success(&self) -> bool {
        self.status == NotificationStatus::Success
    }

    /// The single offer carried by a funding offer notification.
    pub fn offer(&self) -> Option<&Offer> {
        match &self.info {
            NotifyInfo::FundingOffer(offer) => Some(offer),
            _ => None,
        }
    }
}
