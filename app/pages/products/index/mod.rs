mod get;
mod page;
mod post;
mod product_list;

pub use self::{get::get, post::post};
