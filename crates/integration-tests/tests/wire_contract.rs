//! Integration tests for the JSON wire contract.
//!
//! The frontend depends on exact field names (`insertedId`, `cardIds`, the
//! singular `menuId` list, `totalUser`, ...). These tests pin them down.

use rust_decimal::Decimal;

use bistro_core::{CartEntryId, DeleteResult, Email, InsertResult, MenuItemId, PaymentId};
use bistro_server::models::Payment;
use bistro_server::routes::payments::{PaymentOutcome, RecordPaymentRequest};
use bistro_server::routes::users::RegisterResponse;

#[test]
fn idempotent_registration_reports_null_inserted_id() {
    let second_call = RegisterResponse {
        message: Some("user already exists"),
        inserted_id: None,
    };
    let json = serde_json::to_string(&second_call).expect("serializes");
    assert_eq!(
        json,
        r#"{"message":"user already exists","insertedId":null}"#
    );
}

#[test]
fn payment_commit_request_uses_frontend_field_names() {
    let req: RecordPaymentRequest = serde_json::from_str(
        r#"{
            "email": "diner@example.com",
            "price": 19.75,
            "transactionId": "pi_abc123",
            "cardIds": [1, 2],
            "menuId": [10, 11],
            "date": "2026-08-01T12:00:00Z"
        }"#,
    )
    .expect("deserializes");

    assert_eq!(req.email.as_str(), "diner@example.com");
    assert_eq!(req.price, Decimal::new(1975, 2));
    assert_eq!(req.cart_ids, vec![CartEntryId::new(1), CartEntryId::new(2)]);
    assert_eq!(req.menu_ids, vec![MenuItemId::new(10), MenuItemId::new(11)]);
    assert!(req.date.is_some());
}

#[test]
fn payment_commit_response_carries_both_acks() {
    let outcome = PaymentOutcome {
        payment_result: InsertResult::inserted(7),
        delete_result: DeleteResult::deleted(2),
    };
    let value = serde_json::to_value(&outcome).expect("serializes");

    assert_eq!(
        value
            .get("paymentResult")
            .and_then(|r| r.get("insertedId"))
            .and_then(serde_json::Value::as_i64),
        Some(7)
    );
    assert_eq!(
        value
            .get("deleteResult")
            .and_then(|r| r.get("deletedCount"))
            .and_then(serde_json::Value::as_i64),
        Some(2)
    );
}

#[test]
fn ledger_entries_serialize_with_historical_names() {
    let payment = Payment {
        id: PaymentId::new(1),
        email: Email::parse("diner@example.com").expect("valid email"),
        price: Decimal::new(1250, 2),
        transaction_id: "pi_xyz".to_string(),
        cart_ids: vec![CartEntryId::new(4)],
        menu_ids: vec![MenuItemId::new(9)],
        paid_at: chrono::Utc::now(),
    };

    let value = serde_json::to_value(&payment).expect("serializes");
    for field in ["cardIds", "menuId", "date", "transactionId", "email"] {
        assert!(value.get(field).is_some(), "missing field {field}");
    }
}
