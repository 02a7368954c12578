//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::DEFAULT_PAGE_SIZE;
use crate::domain::types::PageSize;

fn default_page_size() -> PageSize {
    DEFAULT_PAGE_SIZE
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Clone, Debug, Deserialize)]
/// Settings of the vault search client.
pub struct ClientConfig {
    /// Base URL of the site exposing `/api/vault`.
    pub base_url: String,
    /// Page size used when a query string carries no usable `count`.
    #[serde(default = "default_page_size")]
    pub default_page_size: PageSize,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_optional_settings_use_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url": "http://localhost:8000"}"#).unwrap();

        assert_eq!(config.default_page_size, PageSize::Twenty);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn rejects_unsupported_default_page_size() {
        let config = serde_json::from_str::<ClientConfig>(
            r#"{"base_url": "http://localhost:8000", "default_page_size": 15}"#,
        );
        assert!(config.is_err());
    }
}
