use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::fmt::Debug;
use tracing::{debug, warn};

use crate::{
    error::ClientError,
    model::{ForecastDay, Location, Suggestion},
};

pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// Number of days requested from the forecast endpoint.
pub const FORECAST_DAYS: u8 = 6;

/// Queries shorter than this never leave the process.
pub const MIN_QUERY_CHARS: usize = 3;

/// Abstraction over the upstream weather service, so the UI can be driven
/// by a stub in tests.
#[async_trait]
pub trait WeatherService: Send + Sync + Debug {
    /// Look up candidate locations for a partial city name.
    async fn search(&self, query: &str) -> Result<Vec<Suggestion>, ClientError>;

    /// Fetch the 6-day forecast for a resolved location.
    async fn forecast(&self, location: &Location) -> Result<Vec<ForecastDay>, ClientError>;
}

/// WeatherAPI.com HTTP client.
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the client at a different host; tests use this with a mock server.
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self { api_key, base_url: base_url.into(), http: Client::new() }
    }

    async fn get_json<T>(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<T, ClientError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}/{endpoint}", self.base_url);

        // The key travels as a query parameter, so the full URL must never
        // reach a log line.
        let res = self.http.get(url).query(query).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            warn!(endpoint, %status, "weather service returned an error status");
            return Err(ClientError::api(status, &body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl WeatherService for WeatherApiClient {
    async fn search(&self, query: &str) -> Result<Vec<Suggestion>, ClientError> {
        // Client-side gate: short queries resolve to the empty list with no
        // network call.
        if query.chars().count() < MIN_QUERY_CHARS {
            return Ok(Vec::new());
        }

        debug!(query, "requesting location suggestions");

        // The whole response array is the suggestion list, untransformed.
        self.get_json("search.json", &[("key", self.api_key.as_str()), ("q", query)]).await
    }

    async fn forecast(&self, location: &Location) -> Result<Vec<ForecastDay>, ClientError> {
        debug!(city = %location.name, "requesting {FORECAST_DAYS}-day forecast");

        let days = FORECAST_DAYS.to_string();
        let parsed: ForecastResponse = self
            .get_json(
                "forecast.json",
                &[
                    ("key", self.api_key.as_str()),
                    ("q", location.name.as_str()),
                    ("days", days.as_str()),
                ],
            )
            .await?;

        if parsed.forecast.forecastday.is_empty() {
            return Err(ClientError::EmptyForecast);
        }

        Ok(parsed.forecast.forecastday)
    }
}

/// Envelope around the only part of the forecast payload we consume.
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    forecast: ForecastBlock,
}

#[derive(Debug, Deserialize)]
struct ForecastBlock {
    forecastday: Vec<ForecastDay>,
}
