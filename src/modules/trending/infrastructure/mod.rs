pub mod http_client;
pub mod search_terms;
pub mod tmdb;

pub use http_client::{RateLimitClient, RetryPolicy};
pub use search_terms::{SearchTerm, SearchTermStore};
pub use tmdb::TmdbMovieRepository;
