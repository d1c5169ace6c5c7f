pub mod attributes;
pub mod orders;
pub mod products;
