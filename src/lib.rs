//! menugen: Menu Enumeration Library
//!
//! Given a dish count per cuisine, lists every menu that takes exactly
//! one dish from each cuisine, and exports them as CSV.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
