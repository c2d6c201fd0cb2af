//! Payment route handlers: history plus the two checkout phases.

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bistro_core::{CartEntryId, DeleteResult, Email, InsertResult, MenuItemId};

use crate::db::PaymentRepository;
use crate::error::{AppError, Result};
use crate::middleware::{Authenticated, ensure_self};
use crate::models::{NewPayment, Payment};
use crate::services::CheckoutWorkflow;
use crate::state::AppState;

/// `GET /payment-history/{email}` (authenticated, self-only) - the caller's
/// ledger entries, newest first.
pub async fn history(
    Authenticated(claims): Authenticated,
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<Payment>>> {
    ensure_self(&claims, &email)?;

    let email = Email::parse(&email).map_err(|e| AppError::BadRequest(e.to_string()))?;
    let payments = PaymentRepository::new(state.pool())
        .list_by_email(&email)
        .await?;

    Ok(Json(payments))
}

/// Intent request payload.
#[derive(Debug, Deserialize)]
pub struct CreateIntentRequest {
    pub price: Decimal,
}

/// Intent response: the secret the browser uses to complete the charge.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIntentResponse {
    pub client_secret: String,
}

/// `POST /create-payment-intent` - intent phase.
///
/// Asks the gateway to authorize `round(price * 100)` minor units of USD.
/// No local state is written; gateway failures surface with the gateway's
/// own status and message.
pub async fn create_intent(
    State(state): State<AppState>,
    Json(req): Json<CreateIntentRequest>,
) -> Result<Json<CreateIntentResponse>> {
    if req.price.is_sign_negative() {
        return Err(AppError::BadRequest(
            "price must be non-negative".to_string(),
        ));
    }

    let client_secret = CheckoutWorkflow::new(state.pool(), state.stripe())
        .create_intent(req.price)
        .await?;

    Ok(Json(CreateIntentResponse { client_secret }))
}

/// Commit request payload.
///
/// Wire names follow the frontend's historical contract: cart entry ids
/// travel as `cardIds` and the purchased menu item list as a singular
/// `menuId`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPaymentRequest {
    pub email: Email,
    pub price: Decimal,
    pub transaction_id: String,
    #[serde(rename = "cardIds")]
    pub cart_ids: Vec<CartEntryId>,
    #[serde(rename = "menuId")]
    pub menu_ids: Vec<MenuItemId>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

/// Commit response: both driver-level acknowledgments.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOutcome {
    pub payment_result: InsertResult,
    pub delete_result: DeleteResult,
}

/// `POST /payment` - commit phase.
///
/// Records the payment in the ledger and clears the covered cart entries in
/// one transaction.
pub async fn record(
    State(state): State<AppState>,
    Json(req): Json<RecordPaymentRequest>,
) -> Result<Json<PaymentOutcome>> {
    if req.price.is_sign_negative() {
        return Err(AppError::BadRequest(
            "price must be non-negative".to_string(),
        ));
    }

    let payment = NewPayment {
        email: req.email,
        price: req.price,
        transaction_id: req.transaction_id,
        cart_ids: req.cart_ids,
        menu_ids: req.menu_ids,
        paid_at: req.date.unwrap_or_else(Utc::now),
    };

    let (payment_result, delete_result) = CheckoutWorkflow::new(state.pool(), state.stripe())
        .commit(&payment)
        .await?;

    Ok(Json(PaymentOutcome {
        payment_result,
        delete_result,
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_record_request_wire_names() {
        let req: RecordPaymentRequest = serde_json::from_str(
            r#"{
                "email": "diner@example.com",
                "price": 19.75,
                "transactionId": "pi_abc123",
                "cardIds": [4, 5],
                "menuId": [9, 10]
            }"#,
        )
        .unwrap();

        assert_eq!(req.cart_ids.len(), 2);
        assert_eq!(req.menu_ids.first().map(MenuItemId::as_i32), Some(9));
        assert!(req.date.is_none());
    }

    #[test]
    fn test_outcome_wire_shape() {
        let outcome = PaymentOutcome {
            payment_result: InsertResult::inserted(7),
            delete_result: DeleteResult::deleted(2),
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(
            json,
            r#"{"paymentResult":{"insertedId":7},"deleteResult":{"deletedCount":2}}"#
        );
    }
}
