use std::sync::Arc;

use super::state::StateSink;
use crate::modules::trending::domain::{
    MovieRepository, PageState, TrendingQuery, TrendingResults,
};
use crate::shared::utils::TimedOperation;
use crate::{log_debug, log_info, log_warn};

/// Search terms submitted once when the trending page is launched
pub const SEED_SEARCH_TERMS: [&str; 10] = [
    "Breaking Bad",
    "Jurassic",
    "Silicon Valley",
    "Office",
    "Wolverine",
    "Suits",
    "Friends",
    "Narcos",
    "Batman",
    "Mr.Bean",
];

/// Fetches every trending category in order and reduces the outcome to a page state
pub struct TrendingAggregator {
    repository: Arc<dyn MovieRepository>,
    sink: Arc<dyn StateSink>,
    query: TrendingQuery,
    page: u32,
}

impl TrendingAggregator {
    pub fn new(repository: Arc<dyn MovieRepository>, sink: Arc<dyn StateSink>) -> Self {
        Self {
            repository,
            sink,
            query: TrendingQuery::default(),
            page: 1,
        }
    }

    pub fn with_query(mut self, query: TrendingQuery) -> Self {
        self.query = query;
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn query(&self) -> &TrendingQuery {
        &self.query
    }

    /// Run one full fetch cycle
    ///
    /// Posts `Loading` first, then awaits each category in query order before
    /// starting the next one. Exactly one terminal state is posted at the end;
    /// results are posted only for `Data`. The terminal state is also returned.
    pub async fn run_cycle(&self) -> PageState {
        let timer = TimedOperation::new("trending cycle");
        self.sink.post_page_state(PageState::Loading);

        let mut results = TrendingResults::new();
        let mut failures = 0usize;

        for (label, request) in self.query.iter() {
            match self
                .repository
                .fetch_trending_movies(self.page, request.media_type, request.time_window)
                .await
            {
                Ok(list) => {
                    let movies = list.into_movies();
                    if movies.is_empty() {
                        log_debug!("Trending '{}' returned no titles", label);
                    } else {
                        log_debug!("Trending '{}' returned {} titles", label, movies.len());
                        results.insert(label, movies);
                    }
                }
                Err(e) => {
                    log_warn!("Trending '{}' failed: {}", label, e);
                    failures += 1;
                }
            }
        }

        let state = resolve_page_state(&results, failures);
        log_info!(
            "Trending cycle finished: {} ({} sections, {} failures)",
            state,
            results.len(),
            failures
        );

        if state == PageState::Data {
            self.sink.post_results(results);
        }
        self.sink.post_page_state(state);

        timer.finish_with_info(&state.to_string());
        state
    }

    /// Submit the seed search terms in order, ignoring individual failures
    pub async fn seed_search_terms(&self) {
        for term in SEED_SEARCH_TERMS {
            if let Err(e) = self.repository.add_search_term(term).await {
                log_warn!("Failed to add seed search term '{}': {}", term, e);
            }
        }
        log_debug!("Submitted {} seed search terms", SEED_SEARCH_TERMS.len());
    }
}

/// Reduce one cycle's outcome to a terminal page state
///
/// Any category with titles wins over failures elsewhere. Without titles, a
/// single failure makes the page an error; otherwise it is simply empty.
pub fn resolve_page_state(results: &TrendingResults, failures: usize) -> PageState {
    if !results.is_empty() {
        PageState::Data
    } else if failures > 0 {
        PageState::Error
    } else {
        PageState::Empty
    }
}
