//! Coordination of the results and total requests of a vault session.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::api::{VaultApi, VaultResult};
use crate::domain::query::VaultQuery;
use crate::dto::vault::VaultPageData;
use crate::services::session::{
    Generation, ResultsOutcome, SearchTicket, SessionState, Stamped, TotalOutcome,
};

/// Fetches one page of brews and stamps the outcome.
pub async fn fetch_results<A>(
    api: &A,
    query: &VaultQuery,
    page: usize,
    generation: Generation,
) -> Stamped<ResultsOutcome>
where
    A: VaultApi + ?Sized,
{
    let brews = api.fetch_brews(query, page).await;
    Stamped::new(generation, ResultsOutcome { page, brews })
}

/// Fetches the number of matching brews and stamps the outcome.
pub async fn fetch_total<A>(api: &A, query: &VaultQuery, generation: Generation) -> Stamped<TotalOutcome>
where
    A: VaultApi + ?Sized,
{
    Stamped::new(generation, api.fetch_total(query).await)
}

/// Whether the responses of a dispatched action were applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settled {
    pub results_applied: bool,
    /// `None` when the action did not request a total.
    pub total_applied: Option<bool>,
}

/// Requests spawned for one search action.
#[derive(Debug)]
pub struct SearchHandle {
    generation: Generation,
    results: JoinHandle<bool>,
    total: Option<JoinHandle<bool>>,
}

async fn join_applied(handle: JoinHandle<bool>) -> bool {
    handle.await.unwrap_or_else(|err| {
        log::error!("Vault request task failed: {err}");
        false
    })
}

impl SearchHandle {
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Waits until both responses have been applied or discarded.
    pub async fn settled(self) -> Settled {
        let results_applied = join_applied(self.results).await;
        let total_applied = match self.total {
            Some(total) => Some(join_applied(total).await),
            None => None,
        };

        Settled {
            results_applied,
            total_applied,
        }
    }
}

/// Search session driving a [`VaultApi`].
///
/// Requests run as tokio tasks, so the methods that dispatch them must be
/// called from within a tokio runtime.
pub struct VaultSearch<A: ?Sized> {
    api: Arc<A>,
    state: Arc<Mutex<SessionState>>,
}

impl<A: ?Sized> Clone for VaultSearch<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            state: Arc::clone(&self.state),
        }
    }
}

impl<A> VaultSearch<A>
where
    A: VaultApi + ?Sized + 'static,
{
    pub fn new(api: Arc<A>, initial: VaultQuery) -> Self {
        Self {
            api,
            state: Arc::new(Mutex::new(SessionState::new(initial))),
        }
    }

    /// Records edited form values; drives [`VaultPageData::search_enabled`].
    pub fn update_form(&self, query: VaultQuery) {
        self.state.lock().update_draft(query);
    }

    /// Starts a search with new filters from the first page, requesting
    /// results and total. The page carried by `query` is ignored.
    pub fn search(&self, query: VaultQuery) -> VaultResult<SearchHandle> {
        self.open(query.with_page(1))
    }

    /// Starts a search at the page carried by `query`, as when restoring a
    /// shared link.
    pub fn open(&self, query: VaultQuery) -> VaultResult<SearchHandle> {
        let ticket = self.state.lock().begin_search(query)?;
        Ok(self.dispatch(ticket))
    }

    /// Requests another page of the active search, keeping the total.
    pub fn go_to_page(&self, page: usize) -> VaultResult<SearchHandle> {
        let ticket = self.state.lock().begin_page_change(page)?;
        Ok(self.dispatch(ticket))
    }

    /// Opens `query` at its own page, waits for both responses and returns
    /// the resulting page data.
    pub async fn run(&self, query: VaultQuery) -> VaultResult<VaultPageData> {
        self.open(query)?.settled().await;
        Ok(self.snapshot())
    }

    pub fn snapshot(&self) -> VaultPageData {
        self.state.lock().page_data()
    }

    fn dispatch(&self, ticket: SearchTicket) -> SearchHandle {
        let SearchTicket {
            generation,
            query,
            page,
            fetch_total: with_total,
        } = ticket;
        let query = Arc::new(query);

        let results = {
            let api = Arc::clone(&self.api);
            let state = Arc::clone(&self.state);
            let query = Arc::clone(&query);
            tokio::spawn(async move {
                let stamped = fetch_results(api.as_ref(), &query, page, generation).await;
                state.lock().apply_results(stamped)
            })
        };

        let total = with_total.then(|| {
            let api = Arc::clone(&self.api);
            let state = Arc::clone(&self.state);
            tokio::spawn(async move {
                let stamped = fetch_total(api.as_ref(), &query, generation).await;
                state.lock().apply_total(stamped)
            })
        });

        SearchHandle {
            generation,
            results,
            total,
        }
    }
}
