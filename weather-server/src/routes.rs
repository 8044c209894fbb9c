use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    routing::get,
};
use serde::Deserialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::debug;

use weather_core::{
    AlertResult, CityWeather, WeatherProvider, WeatherSummary, report,
};

use crate::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    provider: Arc<dyn WeatherProvider>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LocationQuery {
    pub city: Option<String>,
    pub country: Option<String>,
}

impl LocationQuery {
    /// Both parameters must be present and non-empty. Values are not trimmed.
    fn require(self) -> Result<(String, String), ApiError> {
        match (self.city, self.country) {
            (Some(city), Some(country)) if !city.is_empty() && !country.is_empty() => {
                Ok((city, country))
            }
            _ => Err(ApiError::MissingCityOrCountry),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct BatchQuery {
    pub cities: Option<String>,
}

impl BatchQuery {
    fn require(self) -> Result<Vec<String>, ApiError> {
        match self.cities {
            Some(raw) if !raw.is_empty() => Ok(split_cities(&raw)),
            _ => Err(ApiError::MissingCities),
        }
    }
}

/// Splits on `,` keeping order, duplicates and empty segments as-is.
fn split_cities(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

pub fn router(provider: Arc<dyn WeatherProvider>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/weather", get(get_weather))
        .route("/multiple", get(get_multiple))
        .route("/alert", get(get_alert))
        .with_state(AppState { provider })
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn get_weather(
    State(state): State<AppState>,
    query: Result<Query<LocationQuery>, QueryRejection>,
) -> Result<Json<WeatherSummary>, ApiError> {
    let (city, country) = location_params(query)?;

    report::summary(state.provider.as_ref(), &city, &country)
        .await
        .map(Json)
        .map_err(|e| {
            if e.is_not_found() {
                ApiError::CityNotFound
            } else {
                ApiError::WeatherUnavailable
            }
        })
}

async fn get_multiple(
    State(state): State<AppState>,
    query: Result<Query<BatchQuery>, QueryRejection>,
) -> Result<Json<Vec<CityWeather>>, ApiError> {
    let cities = query
        .inspect_err(|e| debug!(error = %e, "rejected batch query"))
        .map_err(|_| ApiError::MissingCities)?
        .0
        .require()?;

    report::batch(state.provider.as_ref(), &cities)
        .await
        .map(Json)
        .map_err(|_| ApiError::BatchUnavailable)
}

// Not-found is deliberately reported as a generic failure on this route.
async fn get_alert(
    State(state): State<AppState>,
    query: Result<Query<LocationQuery>, QueryRejection>,
) -> Result<Json<AlertResult>, ApiError> {
    let (city, country) = location_params(query)?;

    report::alert(state.provider.as_ref(), &city, &country)
        .await
        .map(Json)
        .map_err(|_| ApiError::WeatherUnavailable)
}

fn location_params(
    query: Result<Query<LocationQuery>, QueryRejection>,
) -> Result<(String, String), ApiError> {
    query
        .inspect_err(|e| debug!(error = %e, "rejected location query"))
        .map_err(|_| ApiError::MissingCityOrCountry)?
        .0
        .require()
}
