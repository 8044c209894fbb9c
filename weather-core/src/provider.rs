use crate::{Config, model::CurrentConditions, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::fmt::Debug;
use thiserror::Error;

pub mod openweather;

/// Failure of a single upstream lookup.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Location not found: {0}")]
    NotFound(String),

    #[error("Upstream request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid upstream payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ProviderError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::NotFound(_))
    }
}

/// Source of current weather conditions for a free-text location
/// (`"Lisboa"` or `"Lisboa,PT"`).
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_conditions(&self, location: &str) -> Result<CurrentConditions, ProviderError>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let ow = config.openweather()?;
    Ok(Box::new(OpenWeatherProvider::with_base_url(ow.api_key.clone(), ow.base_url.clone())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_config_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = provider_from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("No OpenWeather API key configured"));
    }

    #[test]
    fn provider_from_config_works_when_configured() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());

        assert!(provider_from_config(&cfg).is_ok());
    }

    #[test]
    fn only_not_found_is_not_found() {
        assert!(ProviderError::NotFound("x".into()).is_not_found());

        let status = ProviderError::Status { status: StatusCode::BAD_GATEWAY, body: String::new() };
        assert!(!status.is_not_found());
    }
}
