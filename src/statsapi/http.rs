//! HTTP client for the Stats API with retry and throttling.
//!
//! All requests go through [`StatsApiClient::get_json`], which retries
//! transient failures (connect/read timeouts, transport errors, 429 and 5xx
//! responses) with exponential backoff and surfaces everything else
//! immediately. Malformed JSON is a fatal decode error for the request and is
//! never retried.

use crate::cli::types::{GamePk, LeagueId};
use crate::error::{Result, StatsError};
use crate::statsapi::types::{
    Boxscore, LeaguesResponse, LiveFeed, ScheduleResponse, TeamsResponse, VenuesResponse,
};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, warn};


/// Production base URL for the Stats API.
pub const STATSAPI_BASE_URL: &str = "https://statsapi.mlb.com";

/// Extra sections hydrated into the live feed.
pub const LIVE_FEED_HYDRATIONS: &str = "credits,alignment,flags,officials,preState";

/// Exponential-backoff retry policy: attempt `n` (zero-based) waits
/// `base_delay * 2^n` before the next try.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total request attempts, including the first.
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            base_delay: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// Backoff delay after the `failures`-th consecutive failure (zero-based).
    pub fn delay_for(&self, failures: u32) -> Duration {
        self.base_delay * 2u32.saturating_pow(failures)
    }

    /// Total time spent waiting after `failures` consecutive failures.
    pub fn total_backoff(&self, failures: u32) -> Duration {
        (0..failures).map(|n| self.delay_for(n)).sum()
    }
}

/// Explicit fetcher configuration, passed at construction.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub base_url: String,
    pub retry: RetryPolicy,
    /// Fixed inter-request delay between games.
    pub throttle: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: STATSAPI_BASE_URL.to_string(),
            retry: RetryPolicy::default(),
            throttle: Duration::from_secs(1),
        }
    }
}

/// HTTP client wrapper for the Stats API endpoints.
pub struct StatsApiClient {
    client: Client,
    config: FetchConfig,
}

impl StatsApiClient {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Sleep for the configured inter-request delay.
    pub async fn throttle(&self) {
        tokio::time::sleep(self.config.throttle).await;
    }

    /// GET `base_url + path` with `query`, returning the decoded JSON body.
    pub async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}{}", self.config.base_url, path);
        let response = self.get_with_retry(&url, query).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get_with_retry(&self, url: &str, query: &[(&str, String)]) -> Result<reqwest::Response> {
        let retry = &self.config.retry;
        let mut attempt: u32 = 0;
        loop {
            debug!(url, attempt = attempt + 1, "GET");
            let failure = match self.client.get(url).query(query).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }
                    if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
                        format!("status {status}")
                    } else {
                        return Err(StatsError::Status {
                            code: status,
                            url: url.to_string(),
                        });
                    }
                }
                // Invalid request construction cannot succeed on retry.
                Err(e) if e.is_builder() => return Err(e.into()),
                Err(e) => e.to_string(),
            };

            attempt += 1;
            if attempt >= retry.max_attempts {
                error!(url, attempts = attempt, %failure, "giving up");
                return Err(StatsError::RetriesExhausted {
                    url: url.to_string(),
                    attempts: attempt,
                });
            }
            let delay = retry.delay_for(attempt - 1);
            warn!(
                url,
                attempt,
                max_attempts = retry.max_attempts,
                ?delay,
                %failure,
                "request failed, retrying"
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// `GET /api/v1/schedule` with the given query parameters.
    pub async fn schedule(&self, query: &[(&str, String)]) -> Result<ScheduleResponse> {
        let body = self.get_json("/api/v1/schedule", query).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// `GET /api/v1.1/game/{pk}/feed/live`, hydrated.
    pub async fn live_feed(&self, game_pk: GamePk) -> Result<LiveFeed> {
        let path = format!("/api/v1.1/game/{game_pk}/feed/live");
        let query = [("hydrate", LIVE_FEED_HYDRATIONS.to_string())];
        let body = self.get_json(&path, &query).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// `GET /api/v1/game/{pk}/boxscore`.
    pub async fn boxscore(&self, game_pk: GamePk) -> Result<Boxscore> {
        let path = format!("/api/v1/game/{game_pk}/boxscore");
        let body = self.get_json(&path, &[]).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// `GET /api/v1/league`.
    pub async fn leagues(&self) -> Result<LeaguesResponse> {
        let body = self.get_json("/api/v1/league", &[]).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// `GET /api/v1/teams` for one league.
    pub async fn teams(&self, league_id: LeagueId) -> Result<TeamsResponse> {
        let query = [("leagueIds", league_id.to_string())];
        let body = self.get_json("/api/v1/teams", &query).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// `GET /api/v1/venues`.
    pub async fn venues(&self) -> Result<VenuesResponse> {
        let body = self.get_json("/api/v1/venues", &[]).await?;
        Ok(serde_json::from_value(body)?)
    }
}
