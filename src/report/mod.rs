//! Report module - input summary, menu table and CSV export

pub mod menu_export;
pub mod summary;

pub use menu_export::*;
pub use summary::*;
