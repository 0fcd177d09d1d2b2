/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use chrono::NaiveDate;
use plasma_lib::modules::trending::{MediaType, Movie};

pub struct MovieFactory {
    id: u64,
    title: String,
    media_type: MediaType,
    overview: Option<String>,
    poster_path: Option<String>,
    vote_average: Option<f32>,
    release_date: Option<NaiveDate>,
}

impl MovieFactory {
    pub fn movie(id: u64) -> Self {
        Self {
            id,
            title: format!("Movie {}", id),
            media_type: MediaType::Movie,
            overview: None,
            poster_path: None,
            vote_average: None,
            release_date: None,
        }
    }

    pub fn tv(id: u64) -> Self {
        Self {
            title: format!("Show {}", id),
            media_type: MediaType::Tv,
            ..Self::movie(id)
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_overview(mut self, overview: &str) -> Self {
        self.overview = Some(overview.to_string());
        self
    }

    pub fn with_poster(mut self, path: &str) -> Self {
        self.poster_path = Some(path.to_string());
        self
    }

    pub fn with_vote_average(mut self, vote: f32) -> Self {
        self.vote_average = Some(vote);
        self
    }

    pub fn released(mut self, year: i32, month: u32, day: u32) -> Self {
        self.release_date = NaiveDate::from_ymd_opt(year, month, day);
        self
    }

    pub fn build(self) -> Movie {
        let mut movie = Movie::new(self.id, self.title, self.media_type);
        movie.overview = self.overview;
        movie.poster_path = self.poster_path;
        movie.vote_average = self.vote_average;
        movie.release_date = self.release_date;
        movie
    }

    /// `count` movies with ids starting at `first_id`
    pub fn batch(first_id: u64, count: usize) -> Vec<Movie> {
        (0..count as u64)
            .map(|offset| Self::movie(first_id + offset).build())
            .collect()
    }
}
