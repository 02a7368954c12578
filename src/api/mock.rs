//! Mock vault backend for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::api::{VaultApi, VaultResult};
use crate::domain::brew::BrewSummary;
use crate::domain::query::VaultQuery;

mock! {
    pub VaultBackend {}

    #[async_trait]
    impl VaultApi for VaultBackend {
        async fn fetch_brews(&self, query: &VaultQuery, page: usize) -> VaultResult<Vec<BrewSummary>>;
        async fn fetch_total(&self, query: &VaultQuery) -> VaultResult<usize>;
    }
}
