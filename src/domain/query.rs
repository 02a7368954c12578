//! Search parameters of a vault session and their canonical serialization.

use serde::Serialize;
use validator::{Validate, ValidationError};

use crate::DEFAULT_PAGE_SIZE;
use crate::domain::types::PageSize;

/// Current search parameters of a vault session.
///
/// A query is searchable only when a title or an author is given and at least
/// one renderer is included; see [`VaultQuery::is_valid`].
#[derive(Clone, Debug, PartialEq, Eq, Validate)]
#[validate(schema(function = "validate_filters"))]
pub struct VaultQuery {
    pub title: String,
    pub author: String,
    pub include_v3: bool,
    pub include_legacy: bool,
    pub page_size: PageSize,
    #[validate(range(min = 1))]
    pub page: usize,
}

fn validate_filters(query: &VaultQuery) -> Result<(), ValidationError> {
    if query.title.trim().is_empty() && query.author.trim().is_empty() {
        return Err(ValidationError::new("missing_title_or_author"));
    }
    if !query.include_v3 && !query.include_legacy {
        return Err(ValidationError::new("no_renderer_selected"));
    }
    Ok(())
}

/// Wire shape of the results endpoint parameters; field order is the key order.
#[derive(Serialize)]
struct ResultsParams<'a> {
    title: &'a str,
    author: &'a str,
    count: usize,
    v3: bool,
    legacy: bool,
    page: usize,
}

/// Wire shape of the total endpoint parameters.
#[derive(Serialize)]
struct TotalParams<'a> {
    title: &'a str,
    author: &'a str,
    v3: bool,
    legacy: bool,
}

/// Urlencodes flat parameters; an unencodable value yields an empty string.
fn encode<T: Serialize>(params: T) -> String {
    serde_html_form::to_string(params).unwrap_or_else(|err| {
        log::error!("Failed to encode vault query parameters: {err}");
        String::new()
    })
}

impl Default for VaultQuery {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            include_v3: true,
            include_legacy: true,
            page_size: DEFAULT_PAGE_SIZE,
            page: 1,
        }
    }
}

impl VaultQuery {
    /// Creates a first-page query for the given filters.
    pub fn new(title: impl Into<String>, author: impl Into<String>, page_size: PageSize) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            page_size,
            ..Self::default()
        }
    }

    /// Restricts the renderers included in the search.
    #[must_use]
    pub fn renderers(mut self, include_v3: bool, include_legacy: bool) -> Self {
        self.include_v3 = include_v3;
        self.include_legacy = include_legacy;
        self
    }

    /// Returns the same filters pointed at another page.
    #[must_use]
    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// Whether the query may be sent to the backend.
    pub fn is_valid(&self) -> bool {
        match self.validate() {
            Ok(()) => true,
            Err(errors) => {
                log::debug!("Vault query is incomplete: {errors}");
                false
            }
        }
    }

    /// Ordered key/value pairs: title, author, count, v3, legacy, page.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.clone()),
            ("author", self.author.clone()),
            ("count", self.page_size.get().to_string()),
            ("v3", self.include_v3.to_string()),
            ("legacy", self.include_legacy.to_string()),
            ("page", self.page.to_string()),
        ]
    }

    /// Urlencoded form of [`VaultQuery::to_query_params`].
    pub fn to_query_string(&self) -> String {
        let params = ResultsParams {
            title: &self.title,
            author: &self.author,
            count: self.page_size.get(),
            v3: self.include_v3,
            legacy: self.include_legacy,
            page: self.page,
        };
        encode(params)
    }

    /// Urlencoded filters for the page-independent total endpoint.
    pub fn to_total_query_string(&self) -> String {
        let params = TotalParams {
            title: &self.title,
            author: &self.author,
            v3: self.include_v3,
            legacy: self.include_legacy,
        };
        encode(params)
    }

    /// Whether two queries select the same brews, ignoring the page.
    pub fn same_filters(&self, other: &VaultQuery) -> bool {
        self.title == other.title
            && self.author == other.author
            && self.include_v3 == other.include_v3
            && self.include_legacy == other.include_legacy
            && self.page_size == other.page_size
    }
}
