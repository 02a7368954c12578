//! Search session for the brew vault: query serialization, pagination window
//! and coordination of the results and total requests.

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod pagination;

#[cfg(feature = "client")]
pub mod api;
#[cfg(feature = "client")]
pub mod dto;
#[cfg(feature = "client")]
pub mod models;
#[cfg(feature = "client")]
pub mod services;

#[cfg(feature = "data")]
pub use domain::types::PageSize;

/// Page size used when neither the query string nor the configuration sets one.
#[cfg(feature = "data")]
pub const DEFAULT_PAGE_SIZE: PageSize = PageSize::Twenty;
