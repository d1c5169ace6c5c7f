mod get;
mod order_list;
mod page;
mod post;

pub use self::{get::get, post::post};
