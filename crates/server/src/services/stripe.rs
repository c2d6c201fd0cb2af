//! Stripe API client for payment intents.
//!
//! Only the intent-creation slice of the gateway is wrapped: the client asks
//! for an authorization over a fixed amount and hands the returned client
//! secret back to the caller, which completes the charge browser-side.

use reqwest::header::{HeaderMap, HeaderValue};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;

/// Stripe API base URL.
const BASE_URL: &str = "https://api.stripe.com/v1";

/// Errors that can occur when interacting with the payment gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Gateway returned an error response.
    #[error("gateway error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse a response or build a request.
    #[error("parse error: {0}")]
    Parse(String),

    /// The amount cannot be represented in minor units.
    #[error("invalid amount: {0}")]
    InvalidAmount(Decimal),
}

/// A created payment intent.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntent {
    /// Gateway-side intent id.
    pub id: String,
    /// Secret the browser uses to complete the charge.
    pub client_secret: String,
}

/// Convert a price in the shop currency to gateway minor units (cents).
///
/// # Errors
///
/// Returns `GatewayError::InvalidAmount` if the rounded amount does not fit
/// in an `i64`.
pub fn to_minor_units(price: Decimal) -> Result<i64, GatewayError> {
    price
        .checked_mul(Decimal::from(100))
        .and_then(|cents| cents.round().to_i64())
        .ok_or(GatewayError::InvalidAmount(price))
}

/// Stripe API client.
#[derive(Clone)]
pub struct StripeClient {
    client: reqwest::Client,
}

impl StripeClient {
    /// Create a new Stripe client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(api_key: &SecretString) -> Result<Self, GatewayError> {
        let mut headers = HeaderMap::new();

        let auth_value = format!("Bearer {}", api_key.expose_secret());
        let mut auth_value = HeaderValue::from_str(&auth_value)
            .map_err(|e| GatewayError::Parse(format!("invalid API key format: {e}")))?;
        auth_value.set_sensitive(true);
        headers.insert("Authorization", auth_value);

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self { client })
    }

    /// Create a payment intent for `amount` minor units of USD, card only.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Api` with the gateway's status and message if
    /// the gateway rejects the request.
    pub async fn create_payment_intent(&self, amount: i64) -> Result<PaymentIntent, GatewayError> {
        let url = format!("{BASE_URL}/payment_intents");

        let params = [
            ("amount", amount.to_string()),
            ("currency", "usd".to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let response = self.client.post(&url).form(&params).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<PaymentIntent>()
            .await
            .map_err(|e| GatewayError::Parse(e.to_string()))
    }
}
