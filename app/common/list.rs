//! The model shared by every list page: which columns show, how headers sort, which rows are selected, how pages are requested, how list settings change, and how a possibly unloaded collection becomes rows.

pub mod columns;
pub mod pagination;
pub mod rows;
pub mod selection;
pub mod settings;
pub mod sort;
