mod get;
mod page;
mod post;

pub use self::{get::get, post::post};
