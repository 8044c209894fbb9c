use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::{config::DEFAULT_OPENWEATHER_BASE_URL, model::CurrentConditions};

use super::{ProviderError, WeatherProvider};

/// Client for the OpenWeather `/weather` current-conditions endpoint.
///
/// Requests metric units and Brazilian Portuguese descriptions. A single
/// attempt is made per call with the HTTP client's default timeouts.
#[derive(Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_OPENWEATHER_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    async fn fetch_current(&self, location: &str) -> Result<CurrentConditions, ProviderError> {
        let url = format!("{}/weather", self.base_url);
        debug!(location, "requesting current conditions");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", location),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
                ("lang", "pt_br"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if status == StatusCode::NOT_FOUND {
            return Err(ProviderError::NotFound(location.to_string()));
        }

        if !status.is_success() {
            return Err(ProviderError::Status { status, body: truncate_body(&body) });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

// Keeps the API key out of logs.
impl std::fmt::Debug for OpenWeatherProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherProvider").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_conditions(&self, location: &str) -> Result<CurrentConditions, ProviderError> {
        self.fetch_current(location).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
