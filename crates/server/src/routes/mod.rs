//! HTTP route handlers for the ordering API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                     - Liveness check
//! GET  /health/ready               - Readiness check (pings the store)
//!
//! # Tokens
//! POST /jwt                        - Issue an identity token
//!
//! # Catalog
//! GET    /menu                     - Full catalog
//! GET    /menu/{id}                - Single item (null body when absent)
//! POST   /menu                     - Create item (Admin)
//! PATCH  /menu/{id}                - Update item, upsert semantics (Admin)
//! DELETE /menu/{id}                - Delete item (Admin)
//!
//! # Users
//! GET    /users                    - All accounts (Admin)
//! GET    /user/admin/{email}       - Admin flag (authenticated, self-only)
//! PUT    /user/{email}             - Idempotent create-if-absent
//! PATCH  /user/{id}                - Promote to Admin (Admin)
//! DELETE /user/{id}                - Delete account (Admin)
//!
//! # Carts
//! GET    /carts?email=             - Owner-scoped cart entries
//! POST   /carts                    - Add a cart entry
//! DELETE /cart/{id}                - Remove a cart entry
//!
//! # Payments
//! GET  /payment-history/{email}    - Ledger entries (authenticated, self-only)
//! POST /create-payment-intent      - Gateway intent phase
//! POST /payment                    - Commit phase (record + clear cart)
//!
//! # Analytics
//! GET /admin-home                  - Summary counts and revenue
//! GET /order-stats                 - Per-category quantity and revenue
//! ```

pub mod analytics;
pub mod auth;
pub mod carts;
pub mod menu;
pub mod payments;
pub mod users;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Create the token routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/jwt", post(auth::issue_token))
}

/// Create the catalog routes router.
pub fn menu_routes() -> Router<AppState> {
    Router::new()
        .route("/menu", get(menu::list).post(menu::create))
        .route(
            "/menu/{id}",
            get(menu::show).patch(menu::update).delete(menu::remove),
        )
}

/// Create the user directory routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list))
        .route("/user/admin/{email}", get(users::admin_flag))
        // One registration for /user/{..}: PUT takes the segment as an email,
        // PATCH and DELETE take it as a numeric id.
        .route(
            "/user/{key}",
            put(users::register)
                .patch(users::promote)
                .delete(users::remove),
        )
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/carts", get(carts::list).post(carts::create))
        .route("/cart/{id}", axum::routing::delete(carts::remove))
}

/// Create the payment routes router.
pub fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/payment-history/{email}", get(payments::history))
        .route("/create-payment-intent", post(payments::create_intent))
        .route("/payment", post(payments::record))
}

/// Create the analytics routes router.
pub fn analytics_routes() -> Router<AppState> {
    Router::new()
        .route("/admin-home", get(analytics::admin_home))
        .route("/order-stats", get(analytics::order_stats))
}

/// Combine all API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(menu_routes())
        .merge(user_routes())
        .merge(cart_routes())
        .merge(payment_routes())
        .merge(analytics_routes())
}
