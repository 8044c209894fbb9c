//! Request-scoped operations built on top of a [`WeatherProvider`].

use tracing::warn;

use crate::{
    model::{AlertResult, CityWeather, TemperatureAlert, WeatherSummary},
    provider::{ProviderError, WeatherProvider},
};

/// Free-text location understood by the provider: `city,country`.
pub fn qualified_location(city: &str, country: &str) -> String {
    format!("{city},{country}")
}

/// Current summary for a city qualified by country.
pub async fn summary(
    provider: &dyn WeatherProvider,
    city: &str,
    country: &str,
) -> Result<WeatherSummary, ProviderError> {
    let location = qualified_location(city, country);
    let conditions = provider.current_conditions(&location).await.inspect_err(|e| {
        warn!(%location, error = %e, "weather lookup failed");
    })?;

    Ok(WeatherSummary::from(&conditions))
}

/// Looks up each city by bare name, one at a time and in input order.
///
/// The first failure aborts the batch; later cities are never requested.
pub async fn batch(
    provider: &dyn WeatherProvider,
    cities: &[String],
) -> Result<Vec<CityWeather>, ProviderError> {
    let mut results = Vec::with_capacity(cities.len());

    for city in cities {
        let conditions = provider.current_conditions(city).await.inspect_err(|e| {
            warn!(%city, error = %e, "batch lookup failed, aborting");
        })?;

        results.push(CityWeather {
            city: city.clone(),
            temperature: conditions.temperature(),
            weather: conditions.condition(),
        });
    }

    Ok(results)
}

/// Temperature alert for a city qualified by country.
pub async fn alert(
    provider: &dyn WeatherProvider,
    city: &str,
    country: &str,
) -> Result<AlertResult, ProviderError> {
    let location = qualified_location(city, country);
    let conditions = provider.current_conditions(&location).await.inspect_err(|e| {
        warn!(%location, error = %e, "alert lookup failed");
    })?;

    let temperature = conditions.temperature();
    Ok(AlertResult {
        city: city.to_string(),
        temperature,
        alert: TemperatureAlert::classify(temperature),
    })
}
