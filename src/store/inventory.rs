use chrono::Utc;

use crate::error::Result;
use crate::models::{Product, ProductInput};
use crate::storage::{snapshot, Storage};

/// Sole owner of the product collection, newest first. Every mutation ends
/// with one synchronous full-snapshot save; a failed save keeps the
/// in-memory change and surfaces the error to the caller.
pub struct Inventory<S: Storage> {
    products: Vec<Product>,
    storage: S,
    last_id: i64,
}

impl<S: Storage> Inventory<S> {
    /// Seed from the stored snapshot, or from the sample dataset when
    /// nothing valid is stored.
    pub fn load(storage: S) -> Self {
        let products = snapshot::load(&storage);
        let last_id = products.iter().map(|p| p.id).max().unwrap_or(0);

        Self {
            products,
            storage,
            last_id,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Insert a new record at the head of the collection.
    pub fn create(&mut self, input: ProductInput) -> Result<&Product> {
        let product = Product {
            id: self.next_id(),
            name: input.name,
            sku: input.sku,
            category: input.category,
            quantity: input.quantity,
            price: input.price,
            supplier: input.supplier,
            last_updated: Utc::now(),
        };

        self.products.insert(0, product);
        self.save()?;

        Ok(&self.products[0])
    }

    /// Replace all editable fields of the record, preserving its id.
    /// Returns `Ok(false)` without saving when the id is absent.
    pub fn update(&mut self, id: i64, input: ProductInput) -> Result<bool> {
        let product = match self.products.iter_mut().find(|p| p.id == id) {
            Some(product) => product,
            None => return Ok(false),
        };

        product.name = input.name;
        product.sku = input.sku;
        product.category = input.category;
        product.quantity = input.quantity;
        product.price = input.price;
        product.supplier = input.supplier;
        product.last_updated = Utc::now();

        self.save()?;

        Ok(true)
    }

    /// Remove the record permanently. Returns `Ok(false)` when absent.
    pub fn delete(&mut self, id: i64) -> Result<bool> {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);

        if self.products.len() == before {
            return Ok(false);
        }

        self.save()?;

        Ok(true)
    }

    /// Add `delta` to the record's quantity, clamped at zero. Returns
    /// `Ok(false)` when absent.
    pub fn adjust_quantity(&mut self, id: i64, delta: i32) -> Result<bool> {
        let product = match self.products.iter_mut().find(|p| p.id == id) {
            Some(product) => product,
            None => return Ok(false),
        };

        product.quantity = product.quantity.saturating_add(delta).max(0);
        product.last_updated = Utc::now();

        self.save()?;

        Ok(true)
    }

    // Timestamp-derived, floored to stay strictly increasing when two
    // creates land in the same millisecond.
    fn next_id(&mut self) -> i64 {
        let id = Utc::now().timestamp_millis().max(self.last_id + 1);
        self.last_id = id;
        id
    }

    fn save(&mut self) -> Result<()> {
        snapshot::save(&mut self.storage, &self.products)
    }
}
