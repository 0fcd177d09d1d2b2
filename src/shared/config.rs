/// Runtime configuration for the trending backend
///
/// Values come from the process environment (after loading a `.env` file if
/// one exists). Only the TMDB API key is required; everything else falls back
/// to production defaults.
use crate::shared::errors::{AppError, AppResult};
use std::str::FromStr;

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_TMDB_LANGUAGE: &str = "en-US";

#[derive(Debug, Clone, PartialEq)]
pub struct TmdbConfig {
    pub api_key: String,
    pub base_url: String,
    pub language: String,
    /// Sustained request rate allowed by the client-side limiter
    pub requests_per_second: f64,
    /// Burst capacity of the limiter
    pub burst: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub tmdb: TmdbConfig,
    /// Page requested for every trending category
    pub trending_page: u32,
    /// Maximum number of remembered search terms
    pub search_term_capacity: usize,
}

impl TmdbConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_TMDB_BASE_URL.to_string(),
            language: DEFAULT_TMDB_LANGUAGE.to_string(),
            requests_per_second: 4.0,
            burst: 8,
        }
    }
}

impl AppConfig {
    pub fn new(tmdb: TmdbConfig) -> Self {
        Self {
            tmdb,
            trending_page: 1,
            search_term_capacity: 50,
        }
    }

    /// Load configuration from the environment, reading `.env` first
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("TMDB_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                AppError::ConfigurationError("TMDB_API_KEY must be set".to_string())
            })?;

        let mut tmdb = TmdbConfig::new(api_key);
        if let Some(base_url) = lookup("TMDB_BASE_URL") {
            tmdb.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(language) = lookup("TMDB_LANGUAGE") {
            tmdb.language = language;
        }
        if let Some(rate) = parse_var::<f64>(&lookup, "TMDB_REQUESTS_PER_SECOND")? {
            // the limiter period (1 / rate) has to fit in a Duration
            if !rate.is_finite() || rate <= 0.0 || 1.0 / rate >= u64::MAX as f64 {
                return Err(AppError::ConfigurationError(format!(
                    "TMDB_REQUESTS_PER_SECOND must be a positive finite rate, got {}",
                    rate
                )));
            }
            tmdb.requests_per_second = rate;
        }
        if let Some(burst) = parse_var::<u32>(&lookup, "TMDB_BURST")? {
            tmdb.burst = burst.max(1);
        }

        let mut config = Self::new(tmdb);
        if let Some(page) = parse_var::<u32>(&lookup, "TRENDING_PAGE")? {
            if page == 0 {
                return Err(AppError::ConfigurationError(
                    "TRENDING_PAGE starts at 1".to_string(),
                ));
            }
            config.trending_page = page;
        }
        if let Some(capacity) = parse_var::<usize>(&lookup, "SEARCH_TERM_CAPACITY")? {
            config.search_term_capacity = capacity;
        }

        Ok(config)
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> AppResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().map(Some).map_err(|e| {
            AppError::ConfigurationError(format!("Invalid value for {}: {} ({})", key, raw, e))
        }),
        None => Ok(None),
    }
}
