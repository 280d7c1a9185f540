use crate::{config::AppConfig, error::Result, storage::LocalStorage, store::Inventory};

/// Build an inventory backed by file storage under the configured data
/// directory.
pub fn build(config: &AppConfig) -> Result<Inventory<LocalStorage>> {
    let storage = LocalStorage::new(&config.storage.data_dir)?;

    Ok(Inventory::load(storage))
}
