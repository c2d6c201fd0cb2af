//! Payment ledger domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use bistro_core::{CartEntryId, Email, MenuItemId, PaymentId};

/// One recorded payment. Immutable once created (append-only ledger).
///
/// Wire names mirror the frontend's historical contract: the cart entry ids
/// travel as `cardIds` and the purchased menu item list as a singular
/// `menuId`, with the timestamp exposed as `date`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Unique payment ID.
    pub id: PaymentId,
    /// Payer's email.
    pub email: Email,
    /// Total charged, in the shop currency.
    pub price: Decimal,
    /// Gateway transaction id.
    pub transaction_id: String,
    /// Cart entries this payment covered.
    #[serde(rename = "cardIds")]
    pub cart_ids: Vec<CartEntryId>,
    /// Purchased menu items, in purchase order.
    #[serde(rename = "menuId")]
    pub menu_ids: Vec<MenuItemId>,
    /// When the payment was recorded.
    #[serde(rename = "date")]
    pub paid_at: DateTime<Utc>,
}

/// Fields for recording a payment.
#[derive(Debug, Clone)]
pub struct NewPayment {
    pub email: Email,
    pub price: Decimal,
    pub transaction_id: String,
    pub cart_ids: Vec<CartEntryId>,
    pub menu_ids: Vec<MenuItemId>,
    pub paid_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_wire_names() {
        let payment = Payment {
            id: PaymentId::new(1),
            email: Email::parse("diner@example.com").unwrap(),
            price: Decimal::new(1975, 2),
            transaction_id: "pi_123".to_string(),
            cart_ids: vec![CartEntryId::new(4)],
            menu_ids: vec![MenuItemId::new(9)],
            paid_at: Utc::now(),
        };

        let value = serde_json::to_value(&payment).unwrap();
        assert!(value.get("cardIds").is_some());
        assert!(value.get("menuId").is_some());
        assert!(value.get("date").is_some());
        assert!(value.get("transactionId").is_some());
        assert!(value.get("cart_ids").is_none());
    }
}
