mod get;
mod post;

pub use self::{get::get, post::post};
