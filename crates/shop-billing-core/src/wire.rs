//! Wire format for recurring application charges.
//!
//! The billing API speaks JSON with `snake_case` keys, except for the handful of
//! fields that keep their record name verbatim (`currencyCode` among them).
//! [`WIRE_FIELDS`] lists the mapping; the serde attributes on
//! [`RecurringApplicationCharge`] must agree with it.
//!
//! Decoding is lenient in the ways the platform needs: numeric ids, decimals
//! sent as JSON numbers, and explicit `null` are all accepted.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::charge::RecurringApplicationCharge;
use crate::error::{Result, WireError};

/// Envelope key for a single charge.
pub const CHARGE_KEY: &str = "recurring_application_charge";

/// Envelope key for a list of charges.
pub const CHARGE_LIST_KEY: &str = "recurring_application_charges";

/// Record field name to external JSON key, in declaration order.
pub const WIRE_FIELDS: [(&str, &str); 21] = [
    ("id", "id"),
    ("name", "name"),
    ("status", "status"),
    ("price", "price"),
    ("currency_code", "currencyCode"),
    ("created_at", "created_at"),
    ("updated_at", "updated_at"),
    ("activated_on", "activated_on"),
    ("cancelled_on", "cancelled_on"),
    ("trial_ends_on", "trial_ends_on"),
    ("trial_days", "trial_days"),
    ("capped_amount", "capped_amount"),
    ("terms", "terms"),
    ("return_url", "return_url"),
    ("confirmation_url", "confirmation_url"),
    ("test", "test"),
    ("decorated_return_url", "decorated_return_url"),
    ("billing_on", "billing_on"),
    ("balance_used", "balance_used"),
    ("balance_remaining", "balance_remaining"),
    ("risk_level", "risk_level"),
];

/// Look up the external key for a record field.
#[must_use]
pub fn wire_key(field: &str) -> Option<&'static str> {
    WIRE_FIELDS
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, key)| *key)
}

/// Single charge wrapped the way the API sends and accepts it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeEnvelope {
    /// The charge.
    pub recurring_application_charge: RecurringApplicationCharge,
}

/// List of charges wrapped the way the API returns them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeListEnvelope {
    /// The charges, in the order returned.
    #[serde(default)]
    pub recurring_application_charges: Vec<RecurringApplicationCharge>,
}

/// Decode a bare charge object.
///
/// # Errors
///
/// Returns [`WireError::Json`] if the payload is not a valid charge.
pub fn decode_charge(json: &str) -> Result<RecurringApplicationCharge> {
    let charge: RecurringApplicationCharge = serde_json::from_str(json)?;
    tracing::debug!(
        id = ?charge.id,
        status = ?charge.status,
        "Decoded recurring application charge"
    );
    Ok(charge)
}

/// Decode a charge wrapped in its `recurring_application_charge` envelope.
///
/// # Errors
///
/// Returns [`WireError::MissingEnvelope`] if the envelope key is absent, or
/// [`WireError::Json`] if the payload is malformed.
pub fn decode_envelope(json: &str) -> Result<RecurringApplicationCharge> {
    let value = unwrap_envelope(json, CHARGE_KEY)?;
    let charge: RecurringApplicationCharge = serde_json::from_value(value)?;
    tracing::debug!(
        id = ?charge.id,
        status = ?charge.status,
        "Decoded recurring application charge"
    );
    Ok(charge)
}

/// Decode a `recurring_application_charges` list.
///
/// # Errors
///
/// Returns [`WireError::MissingEnvelope`] if the list key is absent, or
/// [`WireError::Json`] if any entry is malformed.
pub fn decode_list(json: &str) -> Result<Vec<RecurringApplicationCharge>> {
    let value = unwrap_envelope(json, CHARGE_LIST_KEY)?;
    let charges: Vec<RecurringApplicationCharge> = serde_json::from_value(value)?;
    tracing::debug!(count = charges.len(), "Decoded recurring application charges");
    Ok(charges)
}

/// Encode a charge as a bare object. Unset fields are omitted.
///
/// # Errors
///
/// Returns [`WireError::Json`] if serialization fails.
pub fn encode_charge(charge: &RecurringApplicationCharge) -> Result<String> {
    let json = serde_json::to_string(charge)?;
    tracing::debug!(
        id = ?charge.id,
        bytes = json.len(),
        "Encoded recurring application charge"
    );
    Ok(json)
}

/// Encode a charge inside its envelope, ready to send as a request body.
///
/// # Errors
///
/// Returns [`WireError::Json`] if serialization fails.
pub fn encode_envelope(charge: &RecurringApplicationCharge) -> Result<String> {
    let envelope = ChargeEnvelope {
        recurring_application_charge: charge.clone(),
    };
    let json = serde_json::to_string(&envelope)?;
    tracing::debug!(
        id = ?charge.id,
        bytes = json.len(),
        "Encoded recurring application charge envelope"
    );
    Ok(json)
}

fn unwrap_envelope(json: &str, key: &'static str) -> Result<serde_json::Value> {
    let mut value: serde_json::Value = serde_json::from_str(json)?;
    match value.get_mut(key).map(serde_json::Value::take) {
        Some(inner) => Ok(inner),
        None => {
            tracing::warn!(key, "Billing payload missing envelope key");
            Err(WireError::MissingEnvelope { key })
        }
    }
}

/// Accept an id as a JSON string or integer.
pub(crate) fn lenient_id<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) => Ok(Some(s)),
        serde_json::Value::Number(n) if n.is_i64() || n.is_u64() => Ok(Some(n.to_string())),
        other => Err(serde::de::Error::custom(format!(
            "expected string or integer for id, got {other}"
        ))),
    }
}

/// Accept a decimal as a numeric string or a JSON number.
///
/// Numbers are parsed from their JSON text so no float arithmetic is involved.
/// This relies on `serde_json`'s `arbitrary_precision` feature, which keeps
/// that text in [`serde_json::Number`] instead of narrowing it to `f64`.
pub(crate) fn lenient_decimal<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) => parse_decimal(&s).map(Some),
        serde_json::Value::Number(n) => parse_decimal(&n.to_string()).map(Some),
        other => Err(serde::de::Error::custom(format!(
            "expected number or string for decimal, got {other}"
        ))),
    }
}

fn parse_decimal<E: serde::de::Error>(text: &str) -> std::result::Result<Decimal, E> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|e| E::custom(format!("invalid decimal {text:?}: {e}")))
}
