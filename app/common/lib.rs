pub mod attributes;
pub mod channels;
pub mod cookies;
pub mod error;
pub mod form;
pub mod limits;
pub mod list;
pub mod messages;
pub mod money;
pub mod orders;
pub mod products;
pub mod urls;
