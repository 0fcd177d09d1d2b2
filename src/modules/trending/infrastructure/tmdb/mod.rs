pub mod mapper;
pub mod models;
pub mod repository;

pub use mapper::TmdbMapper;
pub use models::{TmdbTrendingResponse, TrendingItem};
pub use repository::TmdbMovieRepository;
