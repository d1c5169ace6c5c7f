pub mod app_layout;
pub mod demo_banner;
pub mod detailed_content;
pub mod document;
