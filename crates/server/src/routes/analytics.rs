//! Read-only analytics aggregations for the admin dashboard.

use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::db::payments::CategoryStat;
use crate::db::{MenuRepository, PaymentRepository, UserRepository};
use crate::error::Result;
use crate::state::AppState;

/// Dashboard summary counts and total revenue.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminHomeSummary {
    pub total_user: i64,
    pub total_menu: i64,
    pub total_order: i64,
    pub revenue: Decimal,
}

/// `GET /admin-home` - independent counts over users, catalog, and ledger,
/// plus the summed payment prices. Revenue is zero on an empty ledger.
pub async fn admin_home(State(state): State<AppState>) -> Result<Json<AdminHomeSummary>> {
    let pool = state.pool();

    let total_user = UserRepository::new(pool).count().await?;
    let total_menu = MenuRepository::new(pool).count().await?;

    let payments = PaymentRepository::new(pool);
    let total_order = payments.count().await?;
    let revenue = payments.revenue().await?;

    Ok(Json(AdminHomeSummary {
        total_user,
        total_menu,
        total_order,
        revenue,
    }))
}

/// `GET /order-stats` - per-category order quantity and revenue.
pub async fn order_stats(State(state): State<AppState>) -> Result<Json<Vec<CategoryStat>>> {
    let stats = PaymentRepository::new(state.pool()).category_stats().await?;
    Ok(Json(stats))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_wire_names() {
        let summary = AdminHomeSummary {
            total_user: 3,
            total_menu: 12,
            total_order: 2,
            revenue: Decimal::new(1975, 2),
        };
        let value = serde_json::to_value(&summary).unwrap();

        assert_eq!(value.get("totalUser").and_then(|v| v.as_i64()), Some(3));
        assert_eq!(value.get("totalMenu").and_then(|v| v.as_i64()), Some(12));
        assert_eq!(value.get("totalOrder").and_then(|v| v.as_i64()), Some(2));
        assert!(value.get("revenue").is_some());
    }

    #[test]
    fn test_category_stat_wire_names() {
        let stat = CategoryStat {
            category: "Dessert".to_string(),
            quantity: 2,
            revenue: Decimal::new(1300, 2),
        };
        let value = serde_json::to_value(&stat).unwrap();

        assert_eq!(
            value.get("category").and_then(|v| v.as_str()),
            Some("Dessert")
        );
        assert_eq!(value.get("quantity").and_then(|v| v.as_i64()), Some(2));
    }
}
