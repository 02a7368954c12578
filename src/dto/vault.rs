//! DTOs exchanged with the vault endpoints and handed to the display layer.

use serde::{Deserialize, Serialize};

use crate::api::VaultError;
use crate::domain::brew::BrewSummary;
use crate::domain::query::VaultQuery;
use crate::domain::search::SearchResult;
use crate::pagination::PageWindow;

/// Body of a successful `/api/vault` response.
#[derive(Debug, Deserialize, Serialize)]
pub struct BrewsResponse {
    #[serde(default)]
    pub brews: Vec<BrewSummary>,
}

/// Body of a successful `/api/vault/total` response.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalResponse {
    pub total_brews: usize,
}

/// What the results pane shows.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultsView {
    /// A results request is in flight.
    Searching,
    /// The last results request failed.
    Failed(VaultError),
    /// No search has been issued yet.
    NotSearched,
    /// The search completed without matches on this page.
    NoBrews,
    Brews(SearchResult),
}

/// Everything required to render the vault page.
#[derive(Clone, Debug)]
pub struct VaultPageData {
    /// Query echoed back to the search form.
    pub query: VaultQuery,
    /// Whether the search control is enabled for the current form values.
    pub search_enabled: bool,
    pub results: ResultsView,
    /// Known number of matching brews.
    pub total: Option<usize>,
    pub window: PageWindow,
    /// Last failure of the total request; it only hides the window.
    pub total_error: Option<VaultError>,
}
