use serde::Serialize;

use crate::domain::brew::BrewSummary;

/// One page of matching brews as shown to the user.
///
/// `total` stays `None` until the count request resolves.
#[derive(Clone, Debug, Serialize, PartialEq, Default)]
pub struct SearchResult {
    pub brews: Vec<BrewSummary>,
    pub page: usize,
    pub total: Option<usize>,
}

impl SearchResult {
    pub fn new(brews: Vec<BrewSummary>, page: usize, total: Option<usize>) -> Self {
        Self { brews, page, total }
    }

    pub fn is_empty(&self) -> bool {
        self.brews.is_empty()
    }
}
