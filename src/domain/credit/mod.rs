//! Credit domain: funding taken and used in a margin position.

mod convert;

use crate::domain::loan::Loan;
use serde::{Deserialize, Serialize};

/// Positions specific to a credit row; the rest follow the loan layout.
pub mod fields {
    pub const POSITION_PAIR: usize = 21;

    /// Same leading fields as a loan.
    pub const MIN: usize = crate::domain::loan::wire::fields::MIN;
}

/// A funding credit: a loan plus the trading pair of the position using it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credit {
    #[serde(flatten)]
    pub loan: Loan,
    pub position_pair: Option<String>,
}
