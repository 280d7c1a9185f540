use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::error::Result;
use crate::models::Product;

use super::Storage;

/// Fixed slot the whole collection is persisted under.
pub const STORAGE_KEY: &str = "inventory-products";

/// Read the stored snapshot, falling back to the sample dataset when the
/// slot is absent, unreadable, or does not parse as a product list.
pub fn load<S: Storage>(storage: &S) -> Vec<Product> {
    let raw = match storage.get(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return sample_products(),
        Err(e) => {
            tracing::warn!("Failed to read stored inventory, using sample data: {}", e);
            return sample_products();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(products) => products,
        Err(e) => {
            tracing::warn!("Stored inventory is malformed, using sample data: {}", e);
            sample_products()
        }
    }
}

/// Overwrite the stored snapshot with the full collection. Last writer wins.
pub fn save<S: Storage>(storage: &mut S, products: &[Product]) -> Result<()> {
    let raw = serde_json::to_string(products)?;
    storage.set(STORAGE_KEY, &raw)
}

/// Reference dataset a fresh inventory starts from.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Notebook Dell XPS 15".to_string(),
            sku: "DEL-XPS15-001".to_string(),
            category: Some("Eletrônicos".to_string()),
            quantity: 25,
            price: Decimal::new(899_990, 2),
            supplier: Some("Dell Brasil".to_string()),
            last_updated: timestamp("2023-10-15T10:30:00Z"),
        },
        Product {
            id: 2,
            name: "Mouse Sem Fio Logitech MX Master 3".to_string(),
            sku: "LOG-MXM3-002".to_string(),
            category: Some("Periféricos".to_string()),
            quantity: 42,
            price: Decimal::new(49_990, 2),
            supplier: Some("Logitech".to_string()),
            last_updated: timestamp("2023-10-18T14:15:00Z"),
        },
        Product {
            id: 3,
            name: "Teclado Mecânico Keychron K2".to_string(),
            sku: "KEY-K2-003".to_string(),
            category: Some("Periféricos".to_string()),
            quantity: 8,
            price: Decimal::new(69_990, 2),
            supplier: Some("Keychron".to_string()),
            last_updated: timestamp("2023-10-20T09:45:00Z"),
        },
    ]
}

fn timestamp(rfc3339: &str) -> DateTime<Utc> {
    rfc3339.parse().unwrap_or_else(|_| Utc::now())
}
