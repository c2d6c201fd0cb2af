//! External-facing services.
//!
//! - [`token`] - Issues and verifies bearer tokens (the identity assertions
//!   behind every guarded route)
//! - [`stripe`] - Payment gateway client
//! - [`checkout`] - The two-phase payment reconciliation workflow

pub mod checkout;
pub mod stripe;
pub mod token;

pub use checkout::CheckoutWorkflow;
pub use stripe::{GatewayError, StripeClient};
pub use token::{AuthError, Claims, TokenService};
