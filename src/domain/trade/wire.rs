//! Funding trade row layout.

/// Positions of a funding trade row (`funding/trades/hist`).
pub mod fields {
    pub const ID: usize = 0;
    pub const SYMBOL: usize = 1;
    pub const MTS_CREATED: usize = 2;
    pub const OFFER_ID: usize = 3;
    pub const AMOUNT: usize = 4;
    pub const RATE: usize = 5;
    pub const PERIOD: usize = 6;
    pub const MAKER: usize = 7;

    /// Everything but `MAKER` must be present.
    pub const MIN: usize = 7;
}
