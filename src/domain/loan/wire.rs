//! Loan row layout. Credits share it and append the position pair.

/// Positions of a funding loan row (`funding/loans`).
pub mod fields {
    pub const ID: usize = 0;
    pub const SYMBOL: usize = 1;
    pub const SIDE: usize = 2;
    pub const MTS_CREATED: usize = 3;
    pub const MTS_UPDATED: usize = 4;
    pub const AMOUNT: usize = 5;
    pub const FLAGS: usize = 6;
    pub const STATUS: usize = 7;
    pub const RATE: usize = 11;
    pub const PERIOD: usize = 12;
    pub const MTS_OPENING: usize = 13;
    pub const MTS_LAST_PAYOUT: usize = 14;
    pub const NOTIFY: usize = 15;
    pub const HIDDEN: usize = 16;
    pub const RENEW: usize = 18;
    pub const RATE_REAL: usize = 19;
    pub const NO_CLOSE: usize = 20;

    /// `ID` through `AMOUNT` must be present.
    pub const MIN: usize = 6;
}
