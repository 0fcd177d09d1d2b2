use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::value_objects::{MediaType, TimeWindow};

pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// A single trending title (movie or TV show)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub original_title: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    /// Concrete kind of this title; never `MediaType::All`
    pub media_type: MediaType,
    pub vote_average: Option<f32>,
    pub vote_count: Option<u32>,
    pub popularity: Option<f32>,
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub genre_ids: Vec<u32>,
    #[serde(default)]
    pub adult: bool,
    pub original_language: Option<String>,
}

impl Movie {
    pub fn new(id: u64, title: impl Into<String>, media_type: MediaType) -> Self {
        Self {
            id,
            title: title.into(),
            original_title: None,
            overview: None,
            poster_path: None,
            backdrop_path: None,
            media_type,
            vote_average: None,
            vote_count: None,
            popularity: None,
            release_date: None,
            genre_ids: Vec::new(),
            adult: false,
            original_language: None,
        }
    }

    pub fn poster_url(&self, size: &str) -> Option<String> {
        self.poster_path
            .as_deref()
            .map(|path| build_image_url(path, size))
    }

    pub fn backdrop_url(&self, size: &str) -> Option<String> {
        self.backdrop_path
            .as_deref()
            .map(|path| build_image_url(path, size))
    }

    pub fn release_year(&self) -> Option<i32> {
        use chrono::Datelike;
        self.release_date.map(|date| date.year())
    }
}

/// Build a full image URL from a TMDB file path such as `/abc.jpg`
pub fn build_image_url(path: &str, size: &str) -> String {
    format!("{}/{}{}", IMAGE_BASE_URL, size, path)
}

/// One page of trending results as returned by the repository
///
/// Entries may be absent when the upstream item could not be represented.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MovieList {
    pub page: u32,
    #[serde(default)]
    pub results: Vec<Option<Movie>>,
    pub total_pages: u32,
    pub total_results: u32,
}

impl MovieList {
    pub fn new(results: Vec<Option<Movie>>) -> Self {
        let total = results.len() as u32;
        Self {
            page: 1,
            results,
            total_pages: 1,
            total_results: total,
        }
    }

    pub fn from_movies(movies: Vec<Movie>) -> Self {
        Self::new(movies.into_iter().map(Some).collect())
    }

    /// Present entries only, in their original order
    pub fn into_movies(self) -> Vec<Movie> {
        self.results.into_iter().flatten().collect()
    }
}

/// Parameters of a single trending fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovieRequest {
    pub media_type: MediaType,
    pub time_window: TimeWindow,
}

impl MovieRequest {
    pub const fn new(media_type: MediaType, time_window: TimeWindow) -> Self {
        Self {
            media_type,
            time_window,
        }
    }
}
