//! Command implementations for the capstone CLI

pub mod categories;
pub mod generate;
pub mod status;

pub use categories::*;
pub use generate::*;
pub use status::*;
