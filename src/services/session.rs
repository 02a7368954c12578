//! State of a single vault search session.
//!
//! Every dispatched search action receives a [`Generation`]. The session keeps
//! the generation of the latest results request and of the latest total
//! request, and responses carrying any other generation are discarded. A page
//! change only moves the results generation, so a total requested by the same
//! search still lands.

use crate::api::{VaultError, VaultResult};
use crate::domain::brew::BrewSummary;
use crate::domain::query::VaultQuery;
use crate::domain::search::SearchResult;
use crate::dto::vault::{ResultsView, VaultPageData};
use crate::pagination::{PageWindow, compute_window};

/// Monotonically increasing identifier of a dispatched search action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A response tagged with the generation that requested it.
#[derive(Clone, Debug, PartialEq)]
pub struct Stamped<T> {
    pub generation: Generation,
    pub value: T,
}

impl<T> Stamped<T> {
    pub fn new(generation: Generation, value: T) -> Self {
        Self { generation, value }
    }
}

/// Outcome of a results request for one page.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultsOutcome {
    pub page: usize,
    pub brews: VaultResult<Vec<BrewSummary>>,
}

pub type TotalOutcome = VaultResult<usize>;

/// Requests to issue for an accepted search action.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchTicket {
    pub generation: Generation,
    pub query: VaultQuery,
    pub page: usize,
    /// `false` for page changes, which keep the known total.
    pub fetch_total: bool,
}

#[derive(Debug)]
pub struct SessionState {
    draft: VaultQuery,
    active: Option<VaultQuery>,
    last_generation: u64,
    results_generation: Option<Generation>,
    total_generation: Option<Generation>,
    brews: Option<Vec<BrewSummary>>,
    /// Page of the applied `brews`.
    results_page: usize,
    /// Page of the latest dispatched request; drives the window.
    page: usize,
    total: Option<usize>,
    error: Option<VaultError>,
    total_error: Option<VaultError>,
    searching: bool,
}

impl SessionState {
    /// Starts a session whose form shows `initial`; nothing is fetched yet.
    pub fn new(initial: VaultQuery) -> Self {
        let page = initial.page;
        Self {
            draft: initial,
            active: None,
            last_generation: 0,
            results_generation: None,
            total_generation: None,
            brews: None,
            results_page: page,
            page,
            total: None,
            error: None,
            total_error: None,
            searching: false,
        }
    }

    fn next_generation(&mut self) -> Generation {
        self.last_generation += 1;
        Generation(self.last_generation)
    }

    /// Replaces the form values without searching.
    pub fn update_draft(&mut self, query: VaultQuery) {
        self.draft = query;
    }

    pub fn draft(&self) -> &VaultQuery {
        &self.draft
    }

    /// Query of the latest accepted search.
    pub fn active(&self) -> Option<&VaultQuery> {
        self.active.as_ref()
    }

    /// Whether the search control is enabled for the current form values.
    pub fn search_enabled(&self) -> bool {
        self.draft.is_valid()
    }

    pub fn searching(&self) -> bool {
        self.searching
    }

    /// Accepts a new search with changed filters.
    ///
    /// Both requests are issued under a fresh generation, and the brews and
    /// total of the previous search are forgotten. Incomplete queries are rejected with
    /// [`VaultError::ValidationBlocked`] and leave the results untouched.
    pub fn begin_search(&mut self, query: VaultQuery) -> VaultResult<SearchTicket> {
        self.draft = query.clone();
        if !query.is_valid() {
            return Err(VaultError::ValidationBlocked);
        }

        let generation = self.next_generation();
        self.results_generation = Some(generation);
        self.total_generation = Some(generation);
        self.brews = None;
        self.total = None;
        self.total_error = None;
        self.error = None;
        self.searching = true;
        self.page = query.page;
        self.active = Some(query.clone());

        log::info!(
            "Dispatching vault search #{} for page {}",
            generation.get(),
            query.page
        );

        Ok(SearchTicket {
            generation,
            page: query.page,
            query,
            fetch_total: true,
        })
    }

    /// Accepts a page change for the active search; the total is kept.
    pub fn begin_page_change(&mut self, page: usize) -> VaultResult<SearchTicket> {
        let Some(active) = self.active.as_mut() else {
            return Err(VaultError::ValidationBlocked);
        };

        let query = active.with_page(page);
        *active = query.clone();
        self.draft.page = query.page;

        let generation = self.next_generation();
        self.results_generation = Some(generation);
        self.error = None;
        self.searching = true;
        self.page = query.page;

        log::info!(
            "Dispatching vault page change #{} to page {}",
            generation.get(),
            query.page
        );

        Ok(SearchTicket {
            generation,
            page: query.page,
            query,
            fetch_total: false,
        })
    }

    /// Folds a results response into the session.
    ///
    /// Returns `false` when the response is stale. A failed request empties
    /// the result set, so brews of an earlier search never survive it.
    pub fn apply_results(&mut self, stamped: Stamped<ResultsOutcome>) -> bool {
        if self.results_generation != Some(stamped.generation) {
            log::debug!(
                "Discarding stale vault results #{}",
                stamped.generation.get()
            );
            return false;
        }

        let ResultsOutcome { page, brews } = stamped.value;
        match brews {
            Ok(brews) => {
                self.brews = Some(brews);
                self.error = None;
            }
            Err(err) => {
                log::error!("Failed to load vault results for page {page}: {err}");
                self.brews = Some(Vec::new());
                self.error = Some(err);
            }
        }
        self.results_page = page;
        self.searching = false;
        true
    }

    /// Folds a total response into the session; `false` when stale.
    pub fn apply_total(&mut self, stamped: Stamped<TotalOutcome>) -> bool {
        if self.total_generation != Some(stamped.generation) {
            log::debug!("Discarding stale vault total #{}", stamped.generation.get());
            return false;
        }

        match stamped.value {
            Ok(total) => {
                self.total = Some(total);
                self.total_error = None;
            }
            Err(err) => {
                log::error!("Failed to load vault total: {err}");
                self.total = None;
                self.total_error = Some(err);
            }
        }
        true
    }

    /// Snapshot of the current page of results, if any search completed.
    pub fn result(&self) -> Option<SearchResult> {
        self.brews
            .as_ref()
            .map(|brews| SearchResult::new(brews.clone(), self.results_page, self.total))
    }

    pub fn total(&self) -> Option<usize> {
        self.total
    }

    pub fn error(&self) -> Option<&VaultError> {
        self.error.as_ref()
    }

    pub fn window(&self) -> PageWindow {
        match &self.active {
            Some(query) => compute_window(self.page, self.total, query.page_size.get()),
            None => PageWindow::empty(),
        }
    }

    pub fn view(&self) -> ResultsView {
        if self.searching {
            return ResultsView::Searching;
        }
        if let Some(err) = &self.error {
            return ResultsView::Failed(err.clone());
        }
        match self.result() {
            None => ResultsView::NotSearched,
            Some(result) if result.is_empty() => ResultsView::NoBrews,
            Some(result) => ResultsView::Brews(result),
        }
    }

    pub fn page_data(&self) -> VaultPageData {
        VaultPageData {
            query: self.active.clone().unwrap_or_else(|| self.draft.clone()),
            search_enabled: self.search_enabled(),
            results: self.view(),
            total: self.total,
            window: self.window(),
            total_error: self.total_error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::PageSize;

    fn brew(title: &str) -> BrewSummary {
        BrewSummary {
            title: title.to_string(),
            ..BrewSummary::default()
        }
    }

    fn query(title: &str) -> VaultQuery {
        VaultQuery::new(title, "", PageSize::Twenty)
    }

    fn results(ticket: &SearchTicket, brews: VaultResult<Vec<BrewSummary>>) -> Stamped<ResultsOutcome> {
        Stamped::new(
            ticket.generation,
            ResultsOutcome {
                page: ticket.page,
                brews,
            },
        )
    }

    #[test]
    fn new_session_has_not_searched() {
        let state = SessionState::new(VaultQuery::default());

        assert_eq!(state.view(), ResultsView::NotSearched);
        assert!(!state.search_enabled());
        assert!(state.window().is_empty());
    }

    #[test]
    fn incomplete_query_is_blocked_without_generation() {
        let mut state = SessionState::new(VaultQuery::default());

        let blocked = state.begin_search(query("").renderers(true, true));
        assert_eq!(blocked, Err(VaultError::ValidationBlocked));

        let ticket = state.begin_search(query("x")).unwrap();
        assert_eq!(ticket.generation.get(), 1);
    }

    #[test]
    fn draft_drives_search_enabled() {
        let mut state = SessionState::new(query("x"));
        assert!(state.search_enabled());

        state.update_draft(query("x").renderers(false, false));
        assert!(!state.search_enabled());
    }

    #[test]
    fn successful_search_fills_results_and_window() {
        let mut state = SessionState::new(VaultQuery::default());
        let ticket = state.begin_search(query("x")).unwrap();
        assert!(ticket.fetch_total);
        assert_eq!(state.view(), ResultsView::Searching);

        assert!(state.apply_results(results(&ticket, Ok(vec![brew("a"), brew("b")]))));
        assert!(state.window().is_empty());

        assert!(state.apply_total(Stamped::new(ticket.generation, Ok(45))));
        let window = state.window();
        assert_eq!(window.total_pages, 3);
        assert_eq!(window.visible_pages, vec![1, 2, 3]);

        match state.view() {
            ResultsView::Brews(result) => {
                assert_eq!(result.brews.len(), 2);
                assert_eq!(result.page, 1);
                assert_eq!(result.total, Some(45));
            }
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn failed_results_do_not_resurrect_previous_brews() {
        let mut state = SessionState::new(VaultQuery::default());
        let first = state.begin_search(query("first")).unwrap();
        state.apply_results(results(&first, Ok(vec![brew("old")])));
        state.apply_total(Stamped::new(first.generation, Ok(1)));

        let second = state.begin_search(query("second")).unwrap();
        let failure = VaultError::ServerFailure { status: 500 };
        assert!(state.apply_results(results(&second, Err(failure.clone()))));
        assert!(state.apply_total(Stamped::new(second.generation, Ok(12))));

        assert_eq!(state.view(), ResultsView::Failed(failure));
        let result = state.result().unwrap();
        assert!(result.brews.is_empty());
        assert_eq!(result.total, Some(12));
    }

    #[test]
    fn new_search_drops_brews_of_previous_search() {
        let mut state = SessionState::new(VaultQuery::default());
        let first = state.begin_search(query("first")).unwrap();
        state.apply_results(results(&first, Ok(vec![brew("old")])));

        let second = state.begin_search(query("second").with_page(3)).unwrap();
        assert!(state.apply_total(Stamped::new(second.generation, Ok(999))));

        assert_eq!(state.result(), None);
        assert_eq!(state.view(), ResultsView::Searching);
    }

    #[test]
    fn pending_page_change_keeps_page_of_shown_brews() {
        let mut state = SessionState::new(VaultQuery::default());
        let search = state.begin_search(query("x")).unwrap();
        state.apply_results(results(&search, Ok(vec![brew("p1")])));
        state.apply_total(Stamped::new(search.generation, Ok(100)));

        let page = state.begin_page_change(4).unwrap();
        let shown = state.result().unwrap();
        assert_eq!((shown.brews, shown.page), (vec![brew("p1")], 1));
        assert_eq!(state.window().visible_pages[3], 4);
        assert!(state.window().can_go_prev);

        state.apply_results(results(&page, Ok(vec![brew("p4")])));
        let shown = state.result().unwrap();
        assert_eq!((shown.brews, shown.page), (vec![brew("p4")], 4));
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut state = SessionState::new(VaultQuery::default());
        let first = state.begin_search(query("first")).unwrap();
        let second = state.begin_search(query("second")).unwrap();

        assert!(state.apply_results(results(&second, Ok(vec![brew("new")]))));
        assert!(state.apply_total(Stamped::new(second.generation, Ok(1))));

        assert!(!state.apply_results(results(&first, Ok(vec![brew("old")]))));
        assert!(!state.apply_total(Stamped::new(first.generation, Ok(99))));

        let result = state.result().unwrap();
        assert_eq!(result.brews, vec![brew("new")]);
        assert_eq!(result.total, Some(1));
    }

    #[test]
    fn page_change_keeps_total_and_accepts_pending_total() {
        let mut state = SessionState::new(VaultQuery::default());
        let search = state.begin_search(query("x")).unwrap();
        state.apply_results(results(&search, Ok(vec![brew("p1")])));

        let page = state.begin_page_change(3).unwrap();
        assert!(!page.fetch_total);
        assert_eq!(page.query.page, 3);
        assert!(page.query.same_filters(&search.query));

        assert!(state.apply_total(Stamped::new(search.generation, Ok(100))));
        assert!(state.apply_results(results(&page, Ok(vec![brew("p3")]))));

        let result = state.result().unwrap();
        assert_eq!(result.page, 3);
        assert_eq!(result.total, Some(100));
        assert!(state.window().can_go_prev);
    }

    #[test]
    fn later_page_change_supersedes_earlier_one() {
        let mut state = SessionState::new(VaultQuery::default());
        let search = state.begin_search(query("x")).unwrap();
        state.apply_results(results(&search, Ok(vec![brew("p1")])));

        let second = state.begin_page_change(2).unwrap();
        let third = state.begin_page_change(3).unwrap();

        assert!(state.apply_results(results(&third, Ok(vec![brew("p3")]))));
        assert!(!state.apply_results(results(&second, Ok(vec![brew("p2")]))));
        assert_eq!(state.result().unwrap().brews, vec![brew("p3")]);
    }

    #[test]
    fn page_change_without_search_is_blocked() {
        let mut state = SessionState::new(query("x"));
        assert_eq!(state.begin_page_change(2), Err(VaultError::ValidationBlocked));
    }

    #[test]
    fn failed_total_hides_window_but_keeps_results() {
        let mut state = SessionState::new(VaultQuery::default());
        let ticket = state.begin_search(query("x")).unwrap();
        state.apply_results(results(&ticket, Ok(vec![brew("a")])));
        state.apply_total(Stamped::new(
            ticket.generation,
            Err(VaultError::TransportFailure("reset".into())),
        ));

        let data = state.page_data();
        assert!(matches!(data.results, ResultsView::Brews(_)));
        assert!(data.window.is_empty());
        assert!(data.total_error.is_some());
    }

    #[test]
    fn empty_page_shows_no_brews() {
        let mut state = SessionState::new(VaultQuery::default());
        let ticket = state.begin_search(query("x")).unwrap();
        state.apply_results(results(&ticket, Ok(Vec::new())));

        assert_eq!(state.view(), ResultsView::NoBrews);
    }
}
