//! Configuration models of the vault client.

pub mod config;
