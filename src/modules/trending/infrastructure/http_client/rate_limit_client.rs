//! HTTP client with client-side rate limiting and retries
//!
//! Every request waits on a governor limiter before going out, and
//! retryable failures are re-attempted according to the `RetryPolicy`.

use super::retry_policy::{is_retryable_error, is_retryable_status, RateLimitInfo, RetryPolicy};
use crate::shared::config::TmdbConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;
use crate::{log_error, log_warn};
use governor::{Quota, RateLimiter as GovernorRateLimiter};
use reqwest::{Client, Response};
use std::num::NonZeroU32;
use std::time::{Duration, Instant};
use tokio::time::sleep;

type DirectRateLimiter = GovernorRateLimiter<
    governor::state::direct::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
    governor::middleware::NoOpMiddleware,
>;

const USER_AGENT: &str = "plasma/1.0";

pub struct RateLimitClient {
    client: Client,
    rate_limiter: DirectRateLimiter,
    retry_policy: RetryPolicy,
    provider_name: String,
}

impl RateLimitClient {
    /// Client tuned for TMDB using the configured request budget
    pub fn for_tmdb(config: &TmdbConfig) -> Self {
        Self::new(
            "TMDB",
            RetryPolicy::tmdb(),
            Self::create_rate_limiter(config.requests_per_second, config.burst),
        )
    }

    pub fn new(provider_name: &str, retry_policy: RetryPolicy, rate_limiter: DirectRateLimiter) -> Self {
        Self {
            client: Client::new(),
            rate_limiter,
            retry_policy,
            provider_name: provider_name.to_string(),
        }
    }

    /// Create a rate limiter with specified requests per second and burst capacity
    pub fn create_rate_limiter(requests_per_second: f64, burst_size: u32) -> DirectRateLimiter {
        let burst = NonZeroU32::new(burst_size.max(1)).unwrap_or(NonZeroU32::MIN);

        // rates whose period cannot be represented fall back to `burst` per second
        let quota = Duration::try_from_secs_f64(1.0 / requests_per_second)
            .ok()
            .and_then(Quota::with_period)
            .map(|quota| quota.allow_burst(burst))
            .unwrap_or_else(|| Quota::per_second(burst));

        GovernorRateLimiter::direct(quota)
    }

    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    /// GET a JSON document, waiting for the limiter and retrying transient failures
    pub async fn get<T>(&self, url: &str, endpoint: &str) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let attempts = self.retry_policy.max_retries + 1;
        let started = Instant::now();
        LogContext::api_call(&self.provider_name, endpoint, "started", None);

        for attempt in 0..attempts {
            self.rate_limiter.until_ready().await;

            let response = match self.send(url).await {
                Ok(response) => response,
                Err(e) => {
                    if is_retryable_error(&e) && attempt + 1 < attempts {
                        let delay = self.retry_policy.calculate_delay(attempt, None);
                        log_warn!(
                            "{} request failed (attempt {}/{}): {}. Retrying in {:?}",
                            self.provider_name,
                            attempt + 1,
                            attempts,
                            e,
                            delay
                        );
                        sleep(delay).await;
                        continue;
                    }
                    log_error!("{} request to {} failed: {}", self.provider_name, endpoint, e);
                    return Err(AppError::from(e));
                }
            };

            let status = response.status().as_u16();
            if response.status().is_success() {
                let parsed = self.parse_response(response).await;
                let elapsed = started.elapsed().as_millis() as u64;
                let outcome = if parsed.is_ok() { "ok" } else { "unparseable" };
                LogContext::api_call(&self.provider_name, endpoint, outcome, Some(elapsed));
                return parsed;
            }

            if is_retryable_status(status) && attempt + 1 < attempts {
                let retry_after = RateLimitInfo::from_headers(response.headers()).retry_after;
                let delay = self.retry_policy.calculate_delay(attempt, retry_after);
                log_warn!(
                    "{} returned {} (attempt {}/{}). Retrying in {:?}",
                    self.provider_name,
                    status,
                    attempt + 1,
                    attempts,
                    delay
                );
                sleep(delay).await;
                continue;
            }

            log_error!("{} returned {} for {}", self.provider_name, status, endpoint);
            let detail = format!("{} API returned error for {}", self.provider_name, endpoint);
            return Err(AppError::from_status(status, &detail));
        }

        Err(AppError::ExternalServiceError(format!(
            "{} request failed after {} attempts",
            self.provider_name, attempts
        )))
    }

    async fn send(&self, url: &str) -> Result<Response, reqwest::Error> {
        self.client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .send()
            .await
    }

    async fn parse_response<T>(&self, response: Response) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response_text = response.text().await.map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to read {} response: {}",
                self.provider_name, e
            ))
        })?;

        serde_json::from_str(&response_text).map_err(|e| {
            let snippet: String = response_text.chars().take(200).collect();
            AppError::SerializationError(format!(
                "Failed to parse {} response: {}. Response: {}",
                self.provider_name, e, snippet
            ))
        })
    }

    /// Check if a request can be made now without waiting
    pub fn can_make_request_now(&self) -> bool {
        self.rate_limiter.check().is_ok()
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }
}
