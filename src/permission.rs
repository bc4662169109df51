//! Permission scopes and the command kinds they gate.

use serde::{Deserialize, Serialize};

/// Credential scope used to sign a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Read,
    Write,
}

impl Permission {
    /// Path segment of the authenticated endpoint (`auth/r/...`, `auth/w/...`).
    pub fn scope(&self) -> &'static str {
        match self {
            Permission::Read => "r",
            Permission::Write => "w",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Permission::Read => write!(f, "read"),
            Permission::Write => write!(f, "write"),
        }
    }
}

/// Every operation the funding API exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Offers,
    OfferHistory,
    Loans,
    LoanHistory,
    Credits,
    CreditHistory,
    Trades,
    SubmitOffer,
    CancelOffer,
    CancelAllOffers,
    KeepFunding,
}

impl CommandKind {
    pub const ALL: [CommandKind; 11] = [
        CommandKind::Offers,
        CommandKind::OfferHistory,
        CommandKind::Loans,
        CommandKind::LoanHistory,
        CommandKind::Credits,
        CommandKind::CreditHistory,
        CommandKind::Trades,
        CommandKind::SubmitOffer,
        CommandKind::CancelOffer,
        CommandKind::CancelAllOffers,
        CommandKind::KeepFunding,
    ];

    /// Websocket input code, for commands that have a websocket form.
    pub fn ws_code(&self) -> Option<&'static str> {
        match self {
            CommandKind::SubmitOffer => Some("fon"),
            CommandKind::CancelOffer | CommandKind::CancelAllOffers => Some("foc"),
            CommandKind::KeepFunding
            | CommandKind::Offers
            | CommandKind::OfferHistory
            | CommandKind::Loans
            | CommandKind::LoanHistory
            | CommandKind::Credits
            | CommandKind::CreditHistory
            | CommandKind::Trades => None,
        }
    }

    pub fn permission(&self) -> Permission {
        requires_permission(*self)
    }
}

/// Scope a command kind must be signed with.
pub fn requires_permission(kind: CommandKind) -> Permission {
    match kind {
        CommandKind::Offers
        | CommandKind::OfferHistory
        | CommandKind::Loans
        | CommandKind::LoanHistory
        | CommandKind::Credits
        | CommandKind::CreditHistory
        | CommandKind::Trades => Permission::Read,
        CommandKind::SubmitOffer
        | CommandKind::CancelOffer
        | CommandKind::CancelAllOffers
        | CommandKind::KeepFunding => Permission::Write,
    }
}
