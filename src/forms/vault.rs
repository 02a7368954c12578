//! Query-string form of a vault search, as found in shareable links.

use serde::Deserialize;

use crate::domain::query::VaultQuery;
use crate::domain::types::{PageSize, page_number};
use crate::forms::FormError;

/// Raw query parameters; every field is optional and kept as text.
#[derive(Debug, Default, Deserialize)]
pub struct VaultSearchForm {
    pub title: Option<String>,
    pub author: Option<String>,
    pub count: Option<String>,
    pub v3: Option<String>,
    pub legacy: Option<String>,
    pub page: Option<String>,
}

/// Renderer flags are included unless explicitly switched off.
fn flag(value: Option<&str>) -> bool {
    value != Some("false")
}

impl VaultSearchForm {
    /// Parses an urlencoded query string, with or without a leading `?`.
    pub fn parse(raw: &str) -> Result<Self, FormError> {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        Ok(serde_html_form::from_str(raw)?)
    }

    /// Collects key/value pairs; unknown keys are ignored and later keys win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "title" => &mut form.title,
                "author" => &mut form.author,
                "count" => &mut form.count,
                "v3" => &mut form.v3,
                "legacy" => &mut form.legacy,
                "page" => &mut form.page,
                _ => continue,
            };
            *slot = Some(value.into());
        }
        form
    }

    /// Builds the session query, falling back to defaults for missing or
    /// unusable values.
    pub fn into_query(self, default_page_size: PageSize) -> VaultQuery {
        let page_size = self
            .count
            .as_deref()
            .and_then(|count| count.trim().parse::<usize>().ok())
            .and_then(|count| PageSize::new(count).ok())
            .unwrap_or(default_page_size);

        let page = self
            .page
            .as_deref()
            .and_then(|page| page.trim().parse::<usize>().ok())
            .and_then(|page| page_number(page).ok())
            .unwrap_or(1);

        VaultQuery {
            include_v3: flag(self.v3.as_deref()),
            include_legacy: flag(self.legacy.as_deref()),
            title: self.title.unwrap_or_default(),
            author: self.author.unwrap_or_default(),
            page_size,
            page,
        }
    }
}

impl VaultQuery {
    /// Restores a query from ordered key/value pairs.
    pub fn from_query_params<I, K, V>(pairs: I, default_page_size: PageSize) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        VaultSearchForm::from_pairs(pairs).into_query(default_page_size)
    }

    /// Restores a query from a shareable query string.
    pub fn from_query_string(raw: &str, default_page_size: PageSize) -> Result<Self, FormError> {
        Ok(VaultSearchForm::parse(raw)?.into_query(default_page_size))
    }
}
