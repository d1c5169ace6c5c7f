pub mod _attribute_id;
pub mod add;
mod attribute_page;
pub mod index;
