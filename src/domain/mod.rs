//! Domain values exposed by the vault search layer.

pub mod brew;
pub mod query;
pub mod search;
pub mod types;
