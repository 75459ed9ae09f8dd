//! Charge status classification.
//!
//! The billing API reports a charge's status as a bare string. The record keeps
//! that string as-is; [`ChargeStatus`] is a read-only view over it for callers
//! that prefer to `match`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Wire literals interpreted by the charge predicates.
pub mod literals {
    /// Charge accepted by the merchant and billing.
    pub const ACTIVE: &str = "active";
    /// Charge cancelled by the app or the merchant.
    pub const CANCELLED: &str = "cancelled";
    /// Charge created but not yet accepted.
    pub const PENDING: &str = "pending";
    /// Charge declined by the merchant.
    pub const DECLINED: &str = "declined";
    /// Charge not accepted before it lapsed.
    pub const EXPIRED: &str = "expired";
    /// Charge on hold because the store is frozen.
    pub const FROZEN: &str = "frozen";
    /// `billing_on` value marking usage-based billing.
    pub const BILLING_ON_USAGE: &str = "usage";
}

/// Status of a recurring application charge.
///
/// Matching is exact and case-sensitive. Anything unrecognized, including
/// `"Active"` or `" active"`, is kept verbatim in [`ChargeStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChargeStatus {
    /// `"active"`.
    Active,
    /// `"cancelled"`.
    Cancelled,
    /// `"pending"`.
    Pending,
    /// `"declined"`.
    Declined,
    /// `"expired"`.
    Expired,
    /// `"frozen"`.
    Frozen,
    /// Any other status string.
    Other(String),
}

impl ChargeStatus {
    /// Get the status as its wire string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => literals::ACTIVE,
            Self::Cancelled => literals::CANCELLED,
            Self::Pending => literals::PENDING,
            Self::Declined => literals::DECLINED,
            Self::Expired => literals::EXPIRED,
            Self::Frozen => literals::FROZEN,
            Self::Other(status) => status,
        }
    }

    /// Whether this is one of the six documented statuses.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for ChargeStatus {
    fn from(value: &str) -> Self {
        match value {
            literals::ACTIVE => Self::Active,
            literals::CANCELLED => Self::Cancelled,
            literals::PENDING => Self::Pending,
            literals::DECLINED => Self::Declined,
            literals::EXPIRED => Self::Expired,
            literals::FROZEN => Self::Frozen,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ChargeStatus {
    fn from(value: String) -> Self {
        match Self::from(value.as_str()) {
            Self::Other(_) => Self::Other(value),
            known => known,
        }
    }
}

impl From<ChargeStatus> for String {
    fn from(status: ChargeStatus) -> Self {
        match status {
            ChargeStatus::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ChargeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
