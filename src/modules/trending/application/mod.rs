mod aggregator;
mod session;
mod state;

pub use aggregator::{resolve_page_state, TrendingAggregator, SEED_SEARCH_TERMS};
pub use session::TrendingSession;
pub use state::{StateSink, WatchStateSink};
