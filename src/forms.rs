use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::{Alert, Product, ProductInput};
use crate::storage::Storage;
use crate::store::Inventory;

/// Raw form state as the UI holds it: six string-valued fields. Validation
/// and numeric parsing happen here, before the store is touched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub quantity: String,
    pub price: String,
    pub supplier: String,
}

impl ProductForm {
    pub fn parse(&self) -> Result<ProductInput> {
        let name = self.name.trim();
        let sku = self.sku.trim();
        let quantity = self.quantity.trim();
        let price = self.price.trim();

        if name.is_empty() || sku.is_empty() || quantity.is_empty() || price.is_empty() {
            return Err(AppError::BadRequest(
                "Por favor, preencha todos os campos obrigatórios".to_string(),
            ));
        }

        let quantity: i32 = quantity.parse().map_err(|_| {
            AppError::BadRequest("Quantidade deve ser um número inteiro".to_string())
        })?;

        if quantity < 0 {
            return Err(AppError::BadRequest(
                "Quantidade não pode ser negativa".to_string(),
            ));
        }

        let price: Decimal = price
            .parse()
            .map_err(|_| AppError::BadRequest("Preço deve ser um número válido".to_string()))?;

        if price < Decimal::ZERO {
            return Err(AppError::BadRequest(
                "Preço não pode ser negativo".to_string(),
            ));
        }

        Ok(ProductInput {
            name: name.to_string(),
            sku: sku.to_string(),
            category: optional(&self.category),
            quantity,
            price,
            supplier: optional(&self.supplier),
        })
    }

    /// Prefill for the edit flow.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            sku: product.sku.clone(),
            category: product.category.clone().unwrap_or_default(),
            quantity: product.quantity.to_string(),
            price: product.price.to_string(),
            supplier: product.supplier.clone().unwrap_or_default(),
        }
    }
}

/// Validate the form, then update the record being edited or create a new
/// one. A not-found update is never observed in normal operation and still
/// reports success.
pub fn submit<S: Storage>(
    inventory: &mut Inventory<S>,
    form: &ProductForm,
    editing: Option<i64>,
) -> Alert {
    let input = match form.parse() {
        Ok(input) => input,
        Err(e) => return e.into(),
    };

    let result = match editing {
        Some(id) => inventory
            .update(id, input)
            .map(|_| "Produto atualizado com sucesso!"),
        None => inventory
            .create(input)
            .map(|_| "Produto adicionado com sucesso!"),
    };

    match result {
        Ok(message) => Alert::success(message),
        Err(e) => e.into(),
    }
}

pub fn remove<S: Storage>(inventory: &mut Inventory<S>, id: i64) -> Alert {
    match inventory.delete(id) {
        Ok(_) => Alert::success("Produto removido com sucesso!"),
        Err(e) => e.into(),
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();

    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
