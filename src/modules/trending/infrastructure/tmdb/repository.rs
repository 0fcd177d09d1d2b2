use async_trait::async_trait;
use std::sync::Arc;

use super::mapper::TmdbMapper;
use super::models::TmdbTrendingResponse;
use crate::modules::trending::domain::{MediaType, MovieList, MovieRepository, TimeWindow};
use crate::modules::trending::infrastructure::http_client::RateLimitClient;
use crate::modules::trending::infrastructure::search_terms::SearchTermStore;
use crate::shared::config::{AppConfig, TmdbConfig};
use crate::shared::errors::{AppError, AppResult};
use crate::log_info;

/// `MovieRepository` backed by the TMDB REST API and an in-memory search history
pub struct TmdbMovieRepository {
    http_client: RateLimitClient,
    config: TmdbConfig,
    mapper: TmdbMapper,
    search_terms: Arc<SearchTermStore>,
}

impl TmdbMovieRepository {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_client(
            RateLimitClient::for_tmdb(&config.tmdb),
            config.tmdb.clone(),
            Arc::new(SearchTermStore::new(config.search_term_capacity)),
        )
    }

    /// Create repository with custom HTTP client and store (for testing)
    pub fn with_client(
        http_client: RateLimitClient,
        config: TmdbConfig,
        search_terms: Arc<SearchTermStore>,
    ) -> Self {
        Self {
            http_client,
            config,
            mapper: TmdbMapper::new(),
            search_terms,
        }
    }

    pub fn search_terms(&self) -> Arc<SearchTermStore> {
        Arc::clone(&self.search_terms)
    }

    pub fn can_make_request_now(&self) -> bool {
        self.http_client.can_make_request_now()
    }

    pub fn trending_endpoint(media_type: MediaType, time_window: TimeWindow) -> String {
        format!("/trending/{}/{}", media_type.as_path(), time_window.as_path())
    }

    /// Build URL with API key and additional query parameters
    pub fn build_url_with_params(&self, endpoint: &str, params: &[(&str, String)]) -> String {
        let mut url = format!(
            "{}{}?api_key={}",
            self.config.base_url,
            endpoint,
            urlencoding::encode(&self.config.api_key)
        );
        for (key, value) in params {
            if *key != "api_key" {
                url.push_str(&format!("&{}={}", key, urlencoding::encode(value)));
            }
        }
        url
    }
}

#[async_trait]
impl MovieRepository for TmdbMovieRepository {
    async fn fetch_trending_movies(
        &self,
        page: u32,
        media_type: MediaType,
        time_window: TimeWindow,
    ) -> AppResult<MovieList> {
        if page == 0 {
            return Err(AppError::InvalidInput("Page numbers start at 1".to_string()));
        }

        let endpoint = Self::trending_endpoint(media_type, time_window);
        let url = self.build_url_with_params(
            &endpoint,
            &[
                ("page", page.to_string()),
                ("language", self.config.language.clone()),
            ],
        );

        log_info!("TMDB: Fetching trending {} for the {}", media_type, time_window);

        let response: TmdbTrendingResponse = self.http_client.get(&url, &endpoint).await?;
        let list = self.mapper.map_response(response, media_type);

        log_info!(
            "TMDB: Trending {}/{} page {} returned {} entries",
            media_type,
            time_window,
            list.page,
            list.results.len()
        );
        Ok(list)
    }

    async fn add_search_term(&self, term: &str) -> AppResult<()> {
        self.search_terms.add(term).await
    }
}
