//! Funding sub-client: offers, loans, credits, trades and their write actions.

use super::KeepFundingRequest;
use crate::client::BitfinexClient;
use crate::codec::{self, Command, FromRow, Snapshot};
use crate::domain::credit::Credit;
use crate::domain::loan::Loan;
use crate::domain::notification::Notification;
use crate::domain::offer::{CancelAllRequest, CancelRequest, FundingOfferRequest, Offer};
use crate::domain::trade::FundingTrade;
use crate::error::SdkError;
use crate::permission::CommandKind;

pub struct Funding<'a> {
    pub(crate) client: &'a BitfinexClient,
}

impl<'a> Funding<'a> {
    // ── Reads ────────────────────────────────────────────────────────────

    /// Active funding offers, optionally for one symbol.
    pub async fn offers(&self, symbol: Option<&str>) -> Result<Snapshot<Offer>, SdkError> {
        self.read(CommandKind::Offers, &path("funding/offers", symbol, "")).await
    }

    pub async fn offer_history(&self, symbol: Option<&str>) -> Result<Snapshot<Offer>, SdkError> {
        self.read(CommandKind::OfferHistory, &path("funding/offers", symbol, "/hist"))
            .await
    }

    pub async fn loans(&self, symbol: Option<&str>) -> Result<Snapshot<Loan>, SdkError> {
        self.read(CommandKind::Loans, &path("funding/loans", symbol, "")).await
    }

    pub async fn loan_history(&self, symbol: Option<&str>) -> Result<Snapshot<Loan>, SdkError> {
        self.read(CommandKind::LoanHistory, &path("funding/loans", symbol, "/hist"))
            .await
    }

    pub async fn credits(&self, symbol: Option<&str>) -> Result<Snapshot<Credit>, SdkError> {
        self.read(CommandKind::Credits, &path("funding/credits", symbol, "")).await
    }

    pub async fn credit_history(&self, symbol: Option<&str>) -> Result<Snapshot<Credit>, SdkError> {
        self.read(CommandKind::CreditHistory, &path("funding/credits", symbol, "/hist"))
            .await
    }

    pub async fn trades(&self, symbol: Option<&str>) -> Result<Snapshot<FundingTrade>, SdkError> {
        self.read(CommandKind::Trades, &path("funding/trades", symbol, "/hist"))
            .await
    }

    // ── Writes ───────────────────────────────────────────────────────────

    pub async fn submit_offer(&self, request: &FundingOfferRequest) -> Result<Notification, SdkError> {
        self.write(request, "funding/offer/submit").await
    }

    pub async fn cancel_offer(&self, request: &CancelRequest) -> Result<Notification, SdkError> {
        self.write(request, "funding/offer/cancel").await
    }

    pub async fn cancel_all_offers(&self, request: &CancelAllRequest) -> Result<Notification, SdkError> {
        self.write(request, "funding/offer/cancel/all").await
    }

    pub async fn keep_funding(&self, request: &KeepFundingRequest) -> Result<Notification, SdkError> {
        self.write(request, "funding/keep").await
    }

    // ── Internal ─────────────────────────────────────────────────────────

    async fn read<T: FromRow>(&self, kind: CommandKind, path: &str) -> Result<Snapshot<T>, SdkError> {
        let raw = self.client.send(kind, path, None).await?;
        Ok(codec::decode_snapshot(&raw)?)
    }

    async fn write<C: Command>(&self, command: &C, path: &str) -> Result<Notification, SdkError> {
        // validation errors surface here, before anything is signed
        let body = codec::encode_rest(command)?;
        let raw = self.client.send(C::KIND, path, Some(body)).await?;
        Ok(codec::decode_notification(&raw)?)
    }
}

/// `funding/offers` + `fUSD` + `/hist` → `funding/offers/fUSD/hist`.
fn path(base: &str, symbol: Option<&str>, suffix: &str) -> String {
    match symbol.filter(|s| !s.is_empty()) {
        Some(s) => format!("{}/{}{}", base, urlencoding::encode(s), suffix),
        None => format!("{}{}", base, suffix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(path("funding/offers", None, ""), "funding/offers");
        assert_eq!(path("funding/offers", Some("fUSD"), ""), "funding/offers/fUSD");
        assert_eq!(path("funding/loans", Some("fUST"), "/hist"), "funding/loans/fUST/hist");
        assert_eq!(path("funding/trades", None, "/hist"), "funding/trades/hist");
        assert_eq!(path("funding/credits", Some(""), ""), "funding/credits");
    }

    #[test]
    fn test_symbol_is_escaped() {
        assert_eq!(path("funding/offers", Some("f/x"), ""), "funding/offers/f%2Fx");
    }
}
