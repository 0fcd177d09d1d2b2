use chrono::NaiveDate;

use super::models::{TmdbTrendingResponse, TrendingItem};
use crate::log_debug;
use crate::modules::trending::domain::{MediaType, Movie, MovieList};

/// Converts TMDB trending payloads into domain lists
#[derive(Debug, Clone, Default)]
pub struct TmdbMapper;

impl TmdbMapper {
    pub fn new() -> Self {
        Self
    }

    /// Map a whole page; entries that cannot become a `Movie` stay as `None`
    pub fn map_response(&self, response: TmdbTrendingResponse, requested: MediaType) -> MovieList {
        let results: Vec<Option<Movie>> = response
            .results
            .into_iter()
            .map(|raw| {
                serde_json::from_value::<TrendingItem>(raw)
                    .ok()
                    .and_then(|item| self.map_item(item, requested))
            })
            .collect();

        let skipped = results.iter().filter(|entry| entry.is_none()).count();
        if skipped > 0 {
            log_debug!("TMDB: {} trending entries could not be mapped", skipped);
        }

        MovieList {
            page: response.page,
            results,
            total_pages: response.total_pages,
            total_results: response.total_results,
        }
    }

    pub fn map_item(&self, item: TrendingItem, requested: MediaType) -> Option<Movie> {
        let media_type = Self::resolve_media_type(&item, requested)?;

        let name = non_blank(item.name);
        let movie_title = non_blank(item.title);
        let (title, original_title, date) = match media_type {
            MediaType::Tv => (
                name.or(movie_title),
                non_blank(item.original_name).or(non_blank(item.original_title)),
                item.first_air_date.or(item.release_date),
            ),
            _ => (
                movie_title.or(name),
                non_blank(item.original_title).or(non_blank(item.original_name)),
                item.release_date.or(item.first_air_date),
            ),
        };

        let title = title?;

        Some(Movie {
            id: item.id,
            title,
            original_title,
            overview: item.overview.filter(|o| !o.trim().is_empty()),
            poster_path: item.poster_path,
            backdrop_path: item.backdrop_path,
            media_type,
            vote_average: item.vote_average,
            vote_count: item.vote_count,
            popularity: item.popularity,
            release_date: date.as_deref().and_then(Self::parse_date),
            genre_ids: item.genre_ids.unwrap_or_default(),
            adult: item.adult.unwrap_or(false),
            original_language: item.original_language,
        })
    }

    /// Explicit `media_type` wins; `person` and unknown kinds are not titles
    fn resolve_media_type(item: &TrendingItem, requested: MediaType) -> Option<MediaType> {
        match item.media_type.as_deref() {
            Some(kind) => match kind.parse::<MediaType>() {
                Ok(MediaType::All) | Err(_) => None,
                Ok(concrete) => Some(concrete),
            },
            None => match requested {
                MediaType::Movie | MediaType::Tv => Some(requested),
                MediaType::All if item.title.is_some() => Some(MediaType::Movie),
                MediaType::All if item.name.is_some() => Some(MediaType::Tv),
                MediaType::All => None,
            },
        }
    }

    fn parse_date(raw: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(value: serde_json::Value) -> TrendingItem {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn maps_movie_fields() {
        let movie = TmdbMapper::new()
            .map_item(
                item(json!({
                    "id": 438631,
                    "media_type": "movie",
                    "title": "Dune",
                    "original_title": "Dune",
                    "overview": "Paul Atreides...",
                    "poster_path": "/d5NXSklXo0qyIYkgV94XAgMIckC.jpg",
                    "release_date": "2021-09-15",
                    "vote_average": 7.8,
                    "genre_ids": [878, 12]
                })),
                MediaType::All,
            )
            .unwrap();

        assert_eq!(movie.id, 438631);
        assert_eq!(movie.title, "Dune");
        assert_eq!(movie.media_type, MediaType::Movie);
        assert_eq!(movie.release_date, NaiveDate::from_ymd_opt(2021, 9, 15));
        assert_eq!(movie.genre_ids, vec![878, 12]);
        assert!(!movie.adult);
    }

    #[test]
    fn maps_tv_name_and_air_date() {
        let show = TmdbMapper::new()
            .map_item(
                item(json!({
                    "id": 1396,
                    "name": "Breaking Bad",
                    "original_name": "Breaking Bad",
                    "first_air_date": "2008-01-20"
                })),
                MediaType::Tv,
            )
            .unwrap();

        assert_eq!(show.title, "Breaking Bad");
        assert_eq!(show.media_type, MediaType::Tv);
        assert_eq!(show.release_year(), Some(2008));
    }

    #[test]
    fn people_are_not_titles() {
        let mapped = TmdbMapper::new().map_item(
            item(json!({ "id": 287, "media_type": "person", "name": "Brad Pitt" })),
            MediaType::All,
        );
        assert!(mapped.is_none());
    }

    #[test]
    fn untitled_items_are_dropped() {
        let mapped = TmdbMapper::new().map_item(
            item(json!({ "id": 1, "media_type": "movie", "title": "   " })),
            MediaType::Movie,
        );
        assert!(mapped.is_none());
    }

    #[test]
    fn blank_name_falls_back_to_title() {
        let show = TmdbMapper::new()
            .map_item(
                item(json!({
                    "id": 60625,
                    "media_type": "tv",
                    "name": "  ",
                    "title": "Rick and Morty",
                    "original_name": "",
                    "original_title": "Rick and Morty"
                })),
                MediaType::All,
            )
            .unwrap();

        assert_eq!(show.title, "Rick and Morty");
        assert_eq!(show.original_title.as_deref(), Some("Rick and Morty"));
        assert_eq!(show.media_type, MediaType::Tv);
    }

    #[test]
    fn bad_dates_are_ignored() {
        let movie = TmdbMapper::new()
            .map_item(
                item(json!({ "id": 5, "title": "Soon", "release_date": "" })),
                MediaType::Movie,
            )
            .unwrap();
        assert_eq!(movie.release_date, None);
    }

    #[test]
    fn response_keeps_positions_of_unmappable_entries() {
        let response: TmdbTrendingResponse = serde_json::from_value(json!({
            "page": 1,
            "results": [
                { "id": 1, "media_type": "movie", "title": "Alien" },
                { "id": 2, "media_type": "person", "name": "Sigourney Weaver" },
                { "media_type": "movie", "title": "No id" },
                null,
                { "id": 3, "media_type": "tv", "name": "Andor" }
            ],
            "total_pages": 10,
            "total_results": 200
        }))
        .unwrap();

        let list = TmdbMapper::new().map_response(response, MediaType::All);
        assert_eq!(list.results.len(), 5);
        assert_eq!(list.total_pages, 10);
        assert_eq!(list.total_results, 200);

        let titles: Vec<String> = list.into_movies().into_iter().map(|m| m.title).collect();
        assert_eq!(titles, vec!["Alien".to_string(), "Andor".to_string()]);
    }
}
