//! Payment reconciliation workflow.
//!
//! Two phases with no persisted state between them:
//!
//! 1. **Intent**: ask the gateway to authorize the amount and hand the
//!    client secret back. Nothing is written locally; a gateway failure
//!    surfaces as-is.
//! 2. **Commit**: record the completed payment in the ledger and clear the
//!    cart entries it covered, in one transaction.

use rust_decimal::Decimal;
use sqlx::PgPool;

use bistro_core::{DeleteResult, InsertResult};

use crate::db::{PaymentRepository, RepositoryError};
use crate::models::NewPayment;
use crate::services::stripe::{GatewayError, StripeClient, to_minor_units};

/// The two-phase checkout workflow over the gateway and the ledger.
pub struct CheckoutWorkflow<'a> {
    pool: &'a PgPool,
    stripe: &'a StripeClient,
}

impl<'a> CheckoutWorkflow<'a> {
    /// Create a checkout workflow over the shared pool and gateway client.
    #[must_use]
    pub const fn new(pool: &'a PgPool, stripe: &'a StripeClient) -> Self {
        Self { pool, stripe }
    }

    /// Intent phase: authorize `price` with the gateway.
    ///
    /// Returns the client secret the browser needs to complete the charge.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError` if the amount is unrepresentable or the
    /// gateway rejects the intent.
    pub async fn create_intent(&self, price: Decimal) -> Result<String, GatewayError> {
        let amount = to_minor_units(price)?;
        let intent = self.stripe.create_payment_intent(amount).await?;

        tracing::debug!(intent_id = %intent.id, amount, "payment intent created");

        Ok(intent.client_secret)
    }

    /// Commit phase: record the payment and clear its cart entries.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the transaction fails; nothing is
    /// recorded in that case.
    pub async fn commit(
        &self,
        payment: &NewPayment,
    ) -> Result<(InsertResult, DeleteResult), RepositoryError> {
        let outcome = PaymentRepository::new(self.pool)
            .record_with_cart_cleanup(payment)
            .await?;

        tracing::info!(
            email = %payment.email,
            cart_entries = payment.cart_ids.len(),
            "payment recorded, cart cleared"
        );

        Ok(outcome)
    }
}
