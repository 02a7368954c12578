//! DTO modules that bridge services with the vault endpoints and the display layer.

pub mod vault;
