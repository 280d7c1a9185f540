

/// Form boundary tests
pub mod forms_tests;


use rust_decimal::Decimal;

use crate::models::ProductInput;
use crate::storage::{snapshot, MemoryStorage, Storage};
use crate::store::Inventory;

pub fn input(name: &str, sku: &str, category: Option<&str>, quantity: i32, price: &str) -> ProductInput {
    ProductInput {
        name: name.to_string(),
        sku: sku.to_string(),
        category: category.map(str::to_string),
        quantity,
        price: price.parse::<Decimal>().unwrap(),
        supplier: None,
    }
}

/// An inventory with nothing in it, so the sample seed does not apply.
pub fn empty_inventory() -> Inventory<MemoryStorage> {
    let mut storage = MemoryStorage::new();
    storage.set(snapshot::STORAGE_KEY, "[]").unwrap();

    Inventory::load(storage)
}
