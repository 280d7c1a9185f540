use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Quantities above zero and up to this value count as low stock.
pub const LOW_STOCK_MAX: i32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub sku: String,
    #[serde(default)]
    pub category: Option<String>,
    pub quantity: i32,
    pub price: Decimal,
    #[serde(default)]
    pub supplier: Option<String>,
    pub last_updated: DateTime<Utc>,
}

impl Product {
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::classify(self.quantity)
    }
}

/// The six editable fields after form validation, with quantity and price
/// already parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub sku: String,
    pub category: Option<String>,
    pub quantity: i32,
    pub price: Decimal,
    pub supplier: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    pub fn classify(quantity: i32) -> Self {
        if quantity == 0 {
            StockStatus::OutOfStock
        } else if quantity <= LOW_STOCK_MAX {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// Stable identifier for the styling collaborator.
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "out-of-stock",
            StockStatus::LowStock => "low-stock",
            StockStatus::InStock => "in-stock",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Sem Estoque",
            StockStatus::LowStock => "Estoque Baixo",
            StockStatus::InStock => "Em Estoque",
        }
    }
}
