pub mod entities;
pub mod repository;
pub mod trending_query;
pub mod value_objects;

pub use entities::{build_image_url, Movie, MovieList, MovieRequest};
pub use repository::MovieRepository;
pub use trending_query::{TrendingQuery, TrendingResults, TrendingSection};
pub use value_objects::{MediaType, PageState, TimeWindow};
