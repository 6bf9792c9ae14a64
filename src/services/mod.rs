//! External collaborators the engine reads from.

pub mod market_data;

pub use market_data::*;
