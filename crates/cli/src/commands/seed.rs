//! Catalog seeding command.
//!
//! Inserts a small sample menu so a fresh deployment has something to show.
//! Seeding is idempotent: items already present (by name) are skipped.

use rust_decimal::Decimal;

use super::CommandError;

/// Sample catalog: (name, category, price in cents, recipe).
const SAMPLE_MENU: &[(&str, &str, i64, &str)] = &[
    (
        "Margherita Pizza",
        "Pizza",
        1250,
        "Tomato, mozzarella, fresh basil",
    ),
    (
        "Spaghetti Carbonara",
        "Pasta",
        1395,
        "Guanciale, pecorino, egg yolk",
    ),
    ("Caesar Salad", "Salad", 950, "Romaine, parmesan, croutons"),
    ("Tiramisu", "Dessert", 650, "Mascarpone, espresso, cocoa"),
    ("Panna Cotta", "Dessert", 600, "Vanilla cream, berry coulis"),
    ("Espresso", "Drinks", 300, "Double shot"),
];

/// Seed the catalog with the sample menu.
///
/// # Errors
///
/// Returns `CommandError` if the connection or an insert fails.
pub async fn run() -> Result<(), CommandError> {
    let pool = super::connect().await?;

    let mut inserted = 0_u64;
    for (name, category, cents, recipe) in SAMPLE_MENU {
        let result = sqlx::query(
            r"
            INSERT INTO menu_items (name, category, price, recipe)
            SELECT $1, $2, $3, $4
            WHERE NOT EXISTS (SELECT 1 FROM menu_items WHERE name = $1)
            ",
        )
        .bind(name)
        .bind(category)
        .bind(Decimal::new(*cents, 2))
        .bind(recipe)
        .execute(&pool)
        .await?;

        inserted += result.rows_affected();
    }

    tracing::info!(inserted, "catalog seeded");
    Ok(())
}
