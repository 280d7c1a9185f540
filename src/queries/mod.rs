mod product_views;

pub use product_views::*;
