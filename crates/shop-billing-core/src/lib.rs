//! Core types for the shop billing API.
//!
//! This crate models the `recurring_application_charge` resource an app
//! registers against a merchant's store:
//!
//! - **Record**: `RecurringApplicationCharge` and its status predicates
//! - **Builder**: `RecurringApplicationChargeBuilder`
//! - **Status**: `ChargeStatus`, an open classification of the status string
//! - **Wire**: external key mapping, envelopes, and JSON helpers
//!
//! # Money
//!
//! Prices, caps and balances are `rust_decimal::Decimal`. They go on the wire
//! as strings (`"9.99"`) and are never routed through `f64`.
//!
//! # Example
//!
//! ```
//! use shop_billing_core::wire;
//!
//! let charge = wire::decode_envelope(r#"{
//!     "recurring_application_charge": {
//!         "id": 675931192,
//!         "name": "Super Duper Expensive action",
//!         "price": "100.00",
//!         "status": "active",
//!         "test": null,
//!         "trial_days": 0
//!     }
//! }"#)?;
//!
//! assert!(charge.is_active());
//! assert!(!charge.is_test());
//! assert!(!charge.has_trial_period());
//! # Ok::<(), shop_billing_core::WireError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builder;
pub mod charge;
pub mod error;
pub mod status;
pub mod wire;

pub use builder::RecurringApplicationChargeBuilder;
pub use charge::RecurringApplicationCharge;
pub use error::{Result, WireError};
pub use status::{literals, ChargeStatus};
pub use wire::{ChargeEnvelope, ChargeListEnvelope, WIRE_FIELDS};
