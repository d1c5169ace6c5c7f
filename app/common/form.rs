pub mod metadata;
pub mod session;
pub mod slug;
