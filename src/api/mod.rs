//! Access to the vault search backend.

use async_trait::async_trait;

use crate::domain::brew::BrewSummary;
use crate::domain::query::VaultQuery;

pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use errors::{ServerFailureKind, VaultError, VaultResult};

/// Endpoints consumed by a vault search session.
#[async_trait]
pub trait VaultApi: Send + Sync {
    /// Fetches one page of brews matching the query's filters.
    async fn fetch_brews(&self, query: &VaultQuery, page: usize) -> VaultResult<Vec<BrewSummary>>;

    /// Fetches the number of brews matching the query's filters.
    async fn fetch_total(&self, query: &VaultQuery) -> VaultResult<usize>;
}
