//! Recurring application charge record.
//!
//! A [`RecurringApplicationCharge`] is what the billing API returns for
//! `recurring_application_charge` resources and what an app sends when it
//! asks a merchant to approve one. Every field is optional so that a value
//! the API left out never reads as zero or `false`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::builder::RecurringApplicationChargeBuilder;
use crate::status::{literals, ChargeStatus};

/// A subscription-style charge registered by an app against a merchant's store.
///
/// The record performs no validation and is never changed in place by this
/// crate. The status string is the only field the predicates interpret, and
/// nothing ties it to the timestamps: a `"cancelled"` charge may still have no
/// `cancelled_on`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringApplicationCharge {
    /// Identifier assigned by the platform.
    #[serde(
        default,
        deserialize_with = "crate::wire::lenient_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,

    /// Charge name shown to the merchant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Raw status string (see [`ChargeStatus`]).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Price per billing cycle.
    #[serde(
        default,
        deserialize_with = "crate::wire::lenient_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Decimal>,

    /// ISO 4217 currency code.
    #[serde(
        rename = "currencyCode",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub currency_code: Option<String>,

    /// When the charge was created.
    #[serde(rename = "created_at", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the charge was last updated.
    #[serde(rename = "updated_at", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// When the merchant's approval took effect.
    #[serde(rename = "activated_on", default, skip_serializing_if = "Option::is_none")]
    pub activated_on: Option<DateTime<Utc>>,

    /// When the charge was cancelled.
    #[serde(rename = "cancelled_on", default, skip_serializing_if = "Option::is_none")]
    pub cancelled_on: Option<DateTime<Utc>>,

    /// When the free trial ends.
    #[serde(rename = "trial_ends_on", default, skip_serializing_if = "Option::is_none")]
    pub trial_ends_on: Option<DateTime<Utc>>,

    /// Length of the free trial. `None` means no trial was configured.
    #[serde(rename = "trial_days", default, skip_serializing_if = "Option::is_none")]
    pub trial_days: Option<i32>,

    /// Ceiling for usage charges in one billing cycle. `None` means uncapped.
    #[serde(
        rename = "capped_amount",
        default,
        deserialize_with = "crate::wire::lenient_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub capped_amount: Option<Decimal>,

    /// Free-text terms for usage charges.
    #[serde(rename = "terms", default, skip_serializing_if = "Option::is_none")]
    pub terms: Option<String>,

    /// Where the merchant is sent after approving or declining.
    #[serde(rename = "return_url", default, skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,

    /// Where the merchant approves the charge.
    #[serde(rename = "confirmation_url", default, skip_serializing_if = "Option::is_none")]
    pub confirmation_url: Option<String>,

    /// Test charge flag. `None` reads as `false`.
    #[serde(rename = "test", default, skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,

    /// `return_url` with the charge id appended by the platform.
    #[serde(
        rename = "decorated_return_url",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub decorated_return_url: Option<String>,

    /// Billing basis; `"usage"` marks usage-based billing.
    #[serde(rename = "billing_on", default, skip_serializing_if = "Option::is_none")]
    pub billing_on: Option<String>,

    /// Usage billed so far against the capped amount.
    #[serde(
        rename = "balance_used",
        default,
        deserialize_with = "crate::wire::lenient_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub balance_used: Option<Decimal>,

    /// Capped amount left in the current cycle.
    #[serde(
        rename = "balance_remaining",
        default,
        deserialize_with = "crate::wire::lenient_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub balance_remaining: Option<Decimal>,

    /// Fraud risk score.
    #[serde(rename = "risk_level", default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<i32>,
}

impl RecurringApplicationCharge {
    /// Create an empty record with every field unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a record.
    #[must_use]
    pub fn builder() -> RecurringApplicationChargeBuilder {
        RecurringApplicationChargeBuilder::default()
    }

    /// Start a builder seeded with this record's fields.
    #[must_use]
    pub fn to_builder(&self) -> RecurringApplicationChargeBuilder {
        RecurringApplicationChargeBuilder::from(self.clone())
    }

    /// Classify the status string, if there is one.
    #[must_use]
    pub fn status_kind(&self) -> Option<ChargeStatus> {
        self.status.as_deref().map(ChargeStatus::from)
    }

    /// Check if the charge is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status_is(literals::ACTIVE)
    }

    /// Check if the charge was cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.status_is(literals::CANCELLED)
    }

    /// Check if the charge awaits the merchant's approval.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status_is(literals::PENDING)
    }

    /// Check if the merchant declined the charge.
    #[must_use]
    pub fn is_declined(&self) -> bool {
        self.status_is(literals::DECLINED)
    }

    /// Check if the charge expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.status_is(literals::EXPIRED)
    }

    /// Check if the charge is frozen.
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.status_is(literals::FROZEN)
    }

    /// Check if a trial of at least one day is configured.
    ///
    /// Negative trial lengths are passed through from the API and read as no trial.
    #[must_use]
    pub fn has_trial_period(&self) -> bool {
        self.trial_days.is_some_and(|days| days > 0)
    }

    /// Check if usage charges are capped at a positive amount.
    #[must_use]
    pub fn is_capped(&self) -> bool {
        self.capped_amount.is_some_and(|amount| amount > Decimal::ZERO)
    }

    /// Check if this is a test charge.
    #[must_use]
    pub fn is_test(&self) -> bool {
        self.test == Some(true)
    }

    /// Check if the charge bills on usage.
    #[must_use]
    pub fn has_usage_charges(&self) -> bool {
        self.billing_on.as_deref() == Some(literals::BILLING_ON_USAGE)
    }

    fn status_is(&self, literal: &str) -> bool {
        self.status.as_deref() == Some(literal)
    }
}
