pub mod modules;
pub mod shared;

use modules::trending::{
    MovieRepository, StateSink, TmdbMovieRepository, TrendingAggregator, TrendingSession,
    WatchStateSink,
};
use shared::{utils::init_logger, AppConfig, AppResult};
use std::sync::Arc;

/// Handles the UI layer keeps for the trending page
pub struct TrendingPage {
    pub session: TrendingSession,
    pub state: Arc<WatchStateSink>,
}

/// Wire the trending page from environment configuration and launch it
///
/// Must be called from within a tokio runtime.
pub fn launch_trending_page() -> AppResult<TrendingPage> {
    init_logger();
    let config = AppConfig::from_env()?;
    Ok(launch_with_config(&config))
}

pub fn launch_with_config(config: &AppConfig) -> TrendingPage {
    // Cast to trait objects for dependency injection
    let repository: Arc<dyn MovieRepository> = Arc::new(TmdbMovieRepository::new(config));
    let state = Arc::new(WatchStateSink::new());
    let sink: Arc<dyn StateSink> = state.clone();

    let aggregator =
        Arc::new(TrendingAggregator::new(repository, sink).with_page(config.trending_page));
    let session = TrendingSession::start(aggregator);

    TrendingPage { session, state }
}
