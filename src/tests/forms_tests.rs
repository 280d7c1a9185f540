use rust_decimal::Decimal;

use super::{empty_inventory, input};
use crate::error::AppError;
use crate::forms::{self, ProductForm};
use crate::models::AlertKind;

fn filled_form() -> ProductForm {
    ProductForm {
        name: "Notebook Dell XPS 15".to_string(),
        sku: "DEL-XPS15-001".to_string(),
        category: "Eletrônicos".to_string(),
        quantity: "25".to_string(),
        price: "8999.90".to_string(),
        supplier: "Dell Brasil".to_string(),
    }
}

#[test]
fn parse_rejects_missing_required_fields() {
    for missing in ["name", "sku", "quantity", "price"] {
        let mut form = filled_form();
        match missing {
            "name" => form.name.clear(),
            "sku" => form.sku = "   ".to_string(),
            "quantity" => form.quantity.clear(),
            _ => form.price.clear(),
        }

        match form.parse() {
            Err(AppError::BadRequest(msg)) => {
                assert_eq!(msg, "Por favor, preencha todos os campos obrigatórios")
            }
            other => panic!("expected BadRequest for missing {}, got {:?}", missing, other),
        }
    }
}

#[test]
fn parse_rejects_non_numeric_and_negative_values() {
    let mut form = filled_form();
    form.quantity = "vinte".to_string();
    assert!(matches!(form.parse(), Err(AppError::BadRequest(_))));

    let mut form = filled_form();
    form.quantity = "-3".to_string();
    assert!(matches!(form.parse(), Err(AppError::BadRequest(_))));

    let mut form = filled_form();
    form.price = "caro".to_string();
    assert!(matches!(form.parse(), Err(AppError::BadRequest(_))));

    let mut form = filled_form();
    form.price = "-1.50".to_string();
    assert!(matches!(form.parse(), Err(AppError::BadRequest(_))));
}

#[test]
fn parse_trims_and_normalizes_optional_fields() {
    let mut form = filled_form();
    form.name = "  Mouse  ".to_string();
    form.category = "   ".to_string();
    form.supplier = String::new();

    let parsed = form.parse().unwrap();
    assert_eq!(parsed.name, "Mouse");
    assert_eq!(parsed.category, None);
    assert_eq!(parsed.supplier, None);
    assert_eq!(parsed.quantity, 25);
    assert_eq!(parsed.price, "8999.90".parse::<Decimal>().unwrap());
}

#[test]
fn submit_creates_a_record_and_reports_success() {
    let mut inventory = empty_inventory();

    let alert = forms::submit(&mut inventory, &filled_form(), None);
    assert_eq!(alert.kind, AlertKind::Success);
    assert_eq!(alert.message, "Produto adicionado com sucesso!");

    assert_eq!(inventory.products().len(), 1);
    let product = &inventory.products()[0];
    assert_eq!(product.name, "Notebook Dell XPS 15");
    assert_eq!(product.category.as_deref(), Some("Eletrônicos"));
    assert_eq!(product.quantity, 25);
}

#[test]
fn submit_updates_the_record_being_edited() {
    let mut inventory = empty_inventory();
    let id = inventory.create(input("Mouse", "LOG-001", None, 5, "99.90")).unwrap().id;

    let mut form = ProductForm::from_product(inventory.get(id).unwrap());
    form.name = "Mouse Sem Fio".to_string();
    form.quantity = "7".to_string();

    let alert = forms::submit(&mut inventory, &form, Some(id));
    assert_eq!(alert.kind, AlertKind::Success);
    assert_eq!(alert.message, "Produto atualizado com sucesso!");

    assert_eq!(inventory.products().len(), 1);
    let product = inventory.get(id).unwrap();
    assert_eq!(product.name, "Mouse Sem Fio");
    assert_eq!(product.quantity, 7);
}

#[test]
fn submit_validation_failure_leaves_the_store_unchanged() {
    let mut inventory = empty_inventory();

    let mut form = filled_form();
    form.price = "caro".to_string();

    let alert = forms::submit(&mut inventory, &form, None);
    assert_eq!(alert.kind, AlertKind::Error);
    assert!(inventory.products().is_empty());
}

#[test]
fn remove_reports_success() {
    let mut inventory = empty_inventory();
    let id = inventory.create(input("Cabo", "CB-001", None, 1, "1.00")).unwrap().id;

    let alert = forms::remove(&mut inventory, id);
    assert_eq!(alert.kind, AlertKind::Success);
    assert_eq!(alert.message, "Produto removido com sucesso!");
    assert!(inventory.products().is_empty());
}

#[test]
fn from_product_prefills_every_field() {
    let mut inventory = empty_inventory();
    let id = inventory
        .create(input("Teclado", "KEY-001", Some("Periféricos"), 8, "699.90"))
        .unwrap()
        .id;

    let form = ProductForm::from_product(inventory.get(id).unwrap());
    assert_eq!(form.name, "Teclado");
    assert_eq!(form.sku, "KEY-001");
    assert_eq!(form.category, "Periféricos");
    assert_eq!(form.quantity, "8");
    assert_eq!(form.price, "699.90");
    assert_eq!(form.supplier, "");

    // the prefilled form parses back to the same input
    let parsed = form.parse().unwrap();
    assert_eq!(parsed, input("Teclado", "KEY-001", Some("Periféricos"), 8, "699.90"));
}
