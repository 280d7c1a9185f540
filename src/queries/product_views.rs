use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Product, StockStatus};

/// Category filter sentinel matching every record.
pub const ALL_CATEGORIES: &str = "all";

/// Aggregate figures for the dashboard header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryStats {
    pub total_value: Decimal,
    pub total_items: i64,
    pub low_stock: usize,
    pub out_of_stock: usize,
}

/// Records whose name or sku contains `search_term` (case-insensitive) and
/// whose category matches `category`, in collection order.
pub fn filtered<'a>(
    products: &'a [Product],
    search_term: &str,
    category: &str,
) -> Vec<&'a Product> {
    let term = search_term.to_lowercase();

    products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&term) || p.sku.to_lowercase().contains(&term)
        })
        .filter(|p| category == ALL_CATEGORIES || p.category.as_deref() == Some(category))
        .collect()
}

/// Distinct non-empty categories in first-seen order, prefixed with the
/// `all` sentinel.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];

    for product in products {
        match product.category.as_deref() {
            Some(category) if !category.is_empty() => {
                if !categories.iter().any(|c| c == category) {
                    categories.push(category.to_string());
                }
            }
            _ => {}
        }
    }

    categories
}

pub fn total_value(products: &[Product]) -> Decimal {
    products
        .iter()
        .map(|p| p.price * Decimal::from(p.quantity))
        .sum()
}

pub fn total_items(products: &[Product]) -> i64 {
    products.iter().map(|p| i64::from(p.quantity)).sum()
}

pub fn low_stock_count(products: &[Product]) -> usize {
    products
        .iter()
        .filter(|p| p.stock_status() == StockStatus::LowStock)
        .count()
}

pub fn out_of_stock_count(products: &[Product]) -> usize {
    products
        .iter()
        .filter(|p| p.stock_status() == StockStatus::OutOfStock)
        .count()
}

pub fn stats(products: &[Product]) -> InventoryStats {
    InventoryStats {
        total_value: total_value(products),
        total_items: total_items(products),
        low_stock: low_stock_count(products),
        out_of_stock: out_of_stock_count(products),
    }
}
