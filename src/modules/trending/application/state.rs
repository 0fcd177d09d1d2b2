use std::sync::Arc;
use tokio::sync::watch;

use crate::modules::trending::domain::{PageState, TrendingResults};

/// Port the aggregator publishes page state and results into
///
/// Writes are last-write-wins from the consumer's point of view.
pub trait StateSink: Send + Sync {
    fn post_page_state(&self, state: PageState);

    fn post_results(&self, results: TrendingResults);
}

/// Observable value cells backed by `tokio::sync::watch`
///
/// Receivers only ever see the latest value; intermediate writes may be
/// coalesced.
pub struct WatchStateSink {
    page_state: watch::Sender<PageState>,
    results: watch::Sender<Arc<TrendingResults>>,
}

impl WatchStateSink {
    pub fn new() -> Self {
        let (page_state, _) = watch::channel(PageState::Loading);
        let (results, _) = watch::channel(Arc::new(TrendingResults::new()));
        Self {
            page_state,
            results,
        }
    }

    pub fn subscribe_page_state(&self) -> watch::Receiver<PageState> {
        self.page_state.subscribe()
    }

    pub fn subscribe_results(&self) -> watch::Receiver<Arc<TrendingResults>> {
        self.results.subscribe()
    }

    /// Current page state snapshot
    pub fn page_state(&self) -> PageState {
        *self.page_state.borrow()
    }

    /// Latest published results snapshot
    pub fn results(&self) -> Arc<TrendingResults> {
        self.results.borrow().clone()
    }
}

impl Default for WatchStateSink {
    fn default() -> Self {
        Self::new()
    }
}

impl StateSink for WatchStateSink {
    fn post_page_state(&self, state: PageState) {
        // send_replace stores the value even while nobody is subscribed
        self.page_state.send_replace(state);
    }

    fn post_results(&self, results: TrendingResults) {
        self.results.send_replace(Arc::new(results));
    }
}
