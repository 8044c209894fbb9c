//! Core library for the weather gateway.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The upstream provider abstraction and its OpenWeather client
//! - Response shaping for single-city, batch and alert lookups
//!
//! It is used by `weather-server`, but has no dependency on any HTTP framework.

pub mod config;
pub mod model;
pub mod provider;
pub mod report;

pub use config::{Config, OpenWeatherConfig, ServerConfig};
pub use model::{AlertResult, CityWeather, CurrentConditions, TemperatureAlert, WeatherSummary};
pub use provider::{ProviderError, WeatherProvider, provider_from_config};
