//! Common fixtures for shop-billing integration tests.

#![allow(dead_code)] // Some fixtures are used by different test files

use serde_json::{json, Value};

/// A charge as the API returns it after the merchant approved it.
pub fn active_charge_response() -> Value {
    json!({
        "recurring_application_charge": {
            "id": 455_696_195,
            "name": "Super Mega Plan",
            "api_client_id": 755_357_713,
            "price": "15.00",
            "status": "active",
            "return_url": "http://yourapp.example.org",
            "billing_on": "2024-09-30",
            "created_at": "2024-09-30T16:42:23-04:00",
            "updated_at": "2024-09-30T16:42:26-04:00",
            "test": null,
            "activated_on": "2024-09-30T00:00:00-04:00",
            "cancelled_on": null,
            "trial_days": 0,
            "trial_ends_on": null,
            "decorated_return_url": "http://yourapp.example.org?charge_id=455696195",
            "currencyCode": "USD"
        }
    })
}

/// A usage-billed charge that is still awaiting approval.
pub fn pending_usage_charge() -> Value {
    json!({
        "id": "1029266948",
        "name": "Usage Plan",
        "price": 10,
        "status": "pending",
        "capped_amount": "100.0",
        "terms": "$1 for 1000 emails",
        "billing_on": "usage",
        "balance_used": 0,
        "balance_remaining": "100.0",
        "risk_level": 0,
        "trial_days": 7,
        "test": true,
        "confirmation_url": "https://jsmith.myshopify.com/admin/charges/1029266948/confirm_recurring_application_charge"
    })
}

/// A list response holding one charge per documented status.
pub fn charge_list_response() -> Value {
    let charges: Vec<Value> = ["active", "cancelled", "pending", "declined", "expired", "frozen"]
        .iter()
        .enumerate()
        .map(|(i, status)| {
            json!({
                "id": 1000 + i,
                "name": format!("Plan {i}"),
                "price": "4.99",
                "status": status,
                "currencyCode": "USD"
            })
        })
        .collect();

    json!({ "recurring_application_charges": charges })
}
