mod alert;
mod product;

pub use alert::*;
pub use product::*;
