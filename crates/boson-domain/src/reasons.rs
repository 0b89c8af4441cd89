//! Reasons a protocol transaction reverts.
//!
//! Entities never produce these; they exist so callers can match the reason
//! string a failed call reports.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Known revert reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RevertReason {
    /// An address argument was invalid.
    InvalidAddress,
    /// A facet initializer ran twice.
    AlreadyInitialized,
    /// Caller is not the seller's operator.
    NotOperator,
    /// Referenced offer does not exist.
    NoSuchOffer,
    /// Offer was already voided.
    OfferAlreadyVoided,
    /// Offer validity period is invalid.
    OfferPeriodInvalid,
}

impl RevertReason {
    /// Every reason, in declaration order.
    pub const ALL: [RevertReason; 6] = [
        RevertReason::InvalidAddress,
        RevertReason::AlreadyInitialized,
        RevertReason::NotOperator,
        RevertReason::NoSuchOffer,
        RevertReason::OfferAlreadyVoided,
        RevertReason::OfferPeriodInvalid,
    ];

    /// Message the contract reverts with.
    pub const fn message(self) -> &'static str {
        match self {
            RevertReason::InvalidAddress => "Invalid Address",
            RevertReason::AlreadyInitialized => "Already initialized",
            RevertReason::NotOperator => "Not seller's operator",
            RevertReason::NoSuchOffer => "No such offer",
            RevertReason::OfferAlreadyVoided => "Offer already voided",
            RevertReason::OfferPeriodInvalid => "Offer period invalid",
        }
    }

    /// Symbolic name, e.g. `NO_SUCH_OFFER`.
    pub const fn name(self) -> &'static str {
        match self {
            RevertReason::InvalidAddress => "INVALID_ADDRESS",
            RevertReason::AlreadyInitialized => "ALREADY_INITIALIZED",
            RevertReason::NotOperator => "NOT_OPERATOR",
            RevertReason::NoSuchOffer => "NO_SUCH_OFFER",
            RevertReason::OfferAlreadyVoided => "OFFER_ALREADY_VOIDED",
            RevertReason::OfferPeriodInvalid => "OFFER_PERIOD_INVALID",
        }
    }

    /// Reason whose message equals `message` exactly.
    pub fn from_message(message: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.message() == message)
    }

    /// Reason whose message appears inside a longer error text, such as a
    /// node's "reverted with reason string '...'" output. The longest
    /// matching message wins.
    pub fn find_in(text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .filter(|r| text.contains(r.message()))
            .max_by_key(|r| r.message().len())
    }
}

impl fmt::Display for RevertReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Error returned when a symbolic reason name is unknown.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown revert reason: {0}")]
pub struct UnknownReason(pub String);

impl FromStr for RevertReason {
    type Err = UnknownReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.name() == s)
            .ok_or_else(|| UnknownReason(s.to_string()))
    }
}

/// Flat symbolic-name to message table.
pub fn reasons_table() -> BTreeMap<&'static str, &'static str> {
    RevertReason::ALL
        .into_iter()
        .map(|r| (r.name(), r.message()))
        .collect()
}
