/// Trending page backend
///
/// Architecture:
/// - Domain: value objects, entities, the trending query and the repository port
/// - Application: the aggregator, its state sink and the hosting session
/// - Infrastructure: TMDB-backed repository, HTTP client, search history
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use application::{
    StateSink, TrendingAggregator, TrendingSession, WatchStateSink, SEED_SEARCH_TERMS,
};
pub use domain::{
    MediaType, Movie, MovieList, MovieRepository, MovieRequest, PageState, TimeWindow,
    TrendingQuery, TrendingResults,
};
pub use infrastructure::{SearchTermStore, TmdbMovieRepository};
