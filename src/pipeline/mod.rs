//! Pipeline module - input validation and menu generation

pub mod cuisine;
pub mod error;
pub mod generator;

pub use cuisine::*;
pub use error::MenuError;
pub use generator::*;
