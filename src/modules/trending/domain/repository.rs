use async_trait::async_trait;

use super::entities::MovieList;
use super::value_objects::{MediaType, TimeWindow};
use crate::shared::errors::AppResult;

/// Repository interface for trending media and search history
///
/// Implementations own every network and caching concern; callers only see
/// a successful page or an error.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Fetch one page of trending titles
    async fn fetch_trending_movies(
        &self,
        page: u32,
        media_type: MediaType,
        time_window: TimeWindow,
    ) -> AppResult<MovieList>;

    /// Remember a search term for later suggestions
    async fn add_search_term(&self, term: &str) -> AppResult<()>;
}
