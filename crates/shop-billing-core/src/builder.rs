//! Fluent builder for [`RecurringApplicationCharge`].
//!
//! # Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use shop_billing_core::RecurringApplicationCharge;
//!
//! let charge = RecurringApplicationCharge::builder()
//!     .name("Super Duper Plan")
//!     .price(Decimal::new(1000, 2))
//!     .return_url("https://super-duper.shopifyapps.com")
//!     .trial_days(7)
//!     .test(true)
//!     .build();
//!
//! assert!(charge.has_trial_period());
//! assert!(charge.is_test());
//! assert!(charge.id.is_none());
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::charge::RecurringApplicationCharge;

/// Generates one consuming setter per builder field.
///
/// `string` setters take `impl Into<String>`; `value` setters take the field type.
macro_rules! setters {
    ($(string $sfield:ident, $sdoc:expr;)* $(value $vfield:ident: $ty:ty, $vdoc:expr;)*) => {
        $(
            #[doc = $sdoc]
            #[must_use]
            pub fn $sfield(mut self, value: impl Into<String>) -> Self {
                self.inner.$sfield = Some(value.into());
                self
            }
        )*
        $(
            #[doc = $vdoc]
            #[must_use]
            pub fn $vfield(mut self, value: $ty) -> Self {
                self.inner.$vfield = Some(value);
                self
            }
        )*
    };
}

/// Builder accepting any subset of charge fields.
///
/// Fields never set stay `None`. Setting a field twice keeps the last value.
#[derive(Debug, Clone, Default)]
pub struct RecurringApplicationChargeBuilder {
    inner: RecurringApplicationCharge,
}

impl RecurringApplicationChargeBuilder {
    setters! {
        string id, "Set the platform identifier.";
        string name, "Set the charge name.";
        string status, "Set the raw status string.";
        string currency_code, "Set the ISO 4217 currency code.";
        string terms, "Set the usage terms.";
        string return_url, "Set the post-approval return URL.";
        string confirmation_url, "Set the approval URL.";
        string decorated_return_url, "Set the decorated return URL.";
        string billing_on, "Set the billing basis (`\"usage\"` for usage billing).";
        value price: Decimal, "Set the price per billing cycle.";
        value created_at: DateTime<Utc>, "Set the creation time.";
        value updated_at: DateTime<Utc>, "Set the last update time.";
        value activated_on: DateTime<Utc>, "Set the activation time.";
        value cancelled_on: DateTime<Utc>, "Set the cancellation time.";
        value trial_ends_on: DateTime<Utc>, "Set the trial end time.";
        value trial_days: i32, "Set the trial length in days.";
        value capped_amount: Decimal, "Set the usage cap.";
        value test: bool, "Set the test flag.";
        value balance_used: Decimal, "Set the usage balance consumed.";
        value balance_remaining: Decimal, "Set the usage balance left.";
        value risk_level: i32, "Set the fraud risk score.";
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> RecurringApplicationCharge {
        self.inner
    }
}

impl From<RecurringApplicationCharge> for RecurringApplicationChargeBuilder {
    fn from(charge: RecurringApplicationCharge) -> Self {
        Self { inner: charge }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn empty_builder_matches_new() {
        let charge = RecurringApplicationCharge::builder().build();
        assert_eq!(charge, RecurringApplicationCharge::new());
    }

    #[test]
    fn builder_matches_struct_literal() {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

        let built = RecurringApplicationCharge::builder()
            .id("455696195")
            .name("Super Mega Plan")
            .status("pending")
            .price(Decimal::new(1500, 2))
            .currency_code("USD")
            .created_at(created)
            .capped_amount(Decimal::new(100, 0))
            .terms("$1 for 1000 emails")
            .billing_on("usage")
            .risk_level(0)
            .build();

        let literal = RecurringApplicationCharge {
            id: Some("455696195".into()),
            name: Some("Super Mega Plan".into()),
            status: Some("pending".into()),
            price: Some(Decimal::new(1500, 2)),
            currency_code: Some("USD".into()),
            created_at: Some(created),
            capped_amount: Some(Decimal::new(100, 0)),
            terms: Some("$1 for 1000 emails".into()),
            billing_on: Some("usage".into()),
            risk_level: Some(0),
            ..RecurringApplicationCharge::default()
        };

        assert_eq!(built, literal);
        assert!(built.is_pending());
        assert!(built.is_capped());
        assert!(built.has_usage_charges());
    }

    #[test]
    fn last_setter_wins() {
        let charge = RecurringApplicationCharge::builder()
            .status("pending")
            .status("active")
            .build();
        assert!(charge.is_active());
    }

    #[test]
    fn to_builder_replaces_a_copy() {
        let original = RecurringApplicationCharge::builder()
            .id("1")
            .status("pending")
            .trial_days(14)
            .build();

        let activated = original.to_builder().status("active").build();

        assert!(original.is_pending());
        assert!(activated.is_active());
        assert_eq!(activated.id, original.id);
        assert_eq!(activated.trial_days, Some(14));
    }
}
