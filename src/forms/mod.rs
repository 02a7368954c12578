//! Parsing of the query strings that describe a vault search.

use thiserror::Error;

pub mod vault;

#[derive(Debug, Error)]
/// Errors that can occur when processing query-string data.
pub enum FormError {
    #[error("malformed query string: {0}")]
    Malformed(#[from] serde::de::value::Error),
}
