//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use std::str::FromStr;

/// A sellable dish with price and inventory count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub title: String,
    pub price: Decimal,
    pub inventory: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

// Price is stored as TEXT so the decimal value survives storage exactly;
// hand-rolled FromRow parses it back.
impl<'r> sqlx::FromRow<'r, SqliteRow> for MenuItem {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let price_text: String = row.try_get("price")?;
        let price = Decimal::from_str(&price_text).map_err(|e| sqlx::Error::ColumnDecode {
            index: "price".into(),
            source: Box::new(e),
        })?;
        Ok(Self {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            price,
            inventory: row.try_get("inventory")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub title: String,
    pub price: Decimal,
    pub inventory: i64,
}

/// Update menu item payload (partial)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub title: Option<String>,
    pub price: Option<Decimal>,
    pub inventory: Option<i64>,
}
