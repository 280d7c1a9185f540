mod inventory;

pub use inventory::Inventory;
