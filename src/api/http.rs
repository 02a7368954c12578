//! reqwest-backed implementation of [`VaultApi`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::api::{VaultApi, VaultError, VaultResult};
use crate::domain::brew::BrewSummary;
use crate::domain::query::VaultQuery;
use crate::dto::vault::{BrewsResponse, TotalResponse};
use crate::models::config::ClientConfig;

const RESULTS_PATH: &str = "api/vault";
const TOTAL_PATH: &str = "api/vault/total";

/// HTTP client for the vault endpoints.
#[derive(Debug, Clone)]
pub struct HttpVaultApi {
    client: Client,
    base_url: String,
}

impl HttpVaultApi {
    pub fn new(config: &ClientConfig) -> VaultResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str, query_string: &str) -> String {
        format!("{}/{}?{}", self.base_url, path, query_string)
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> VaultResult<T> {
        log::debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(VaultError::ServerFailure {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|err| VaultError::InvalidResponse(err.to_string()))
    }
}

#[async_trait]
impl VaultApi for HttpVaultApi {
    async fn fetch_brews(&self, query: &VaultQuery, page: usize) -> VaultResult<Vec<BrewSummary>> {
        let url = self.url(RESULTS_PATH, &query.with_page(page).to_query_string());
        let response: BrewsResponse = self.get(&url).await?;
        Ok(response.brews)
    }

    async fn fetch_total(&self, query: &VaultQuery) -> VaultResult<usize> {
        let url = self.url(TOTAL_PATH, &query.to_total_query_string());
        let response: TotalResponse = self.get(&url).await?;
        Ok(response.total_brews)
    }
}
