pub mod entries_table;
pub mod loader;
pub mod modal;
