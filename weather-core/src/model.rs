use serde::{Deserialize, Serialize};

/// Placeholder used when the provider reports no condition description.
pub const UNKNOWN_CONDITION: &str = "Desconhecido";

/// Multiplier from metres per second to kilometres per hour.
pub const MPS_TO_KMH: f64 = 3.6;

/// Raw current-conditions payload as returned by the provider.
///
/// Every level is optional: the provider omits whole sections (e.g. `rain`
/// when it is dry) and extraction falls back to defaults instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CurrentConditions {
    #[serde(default)]
    pub main: Option<MainConditions>,
    #[serde(default)]
    pub wind: Option<Wind>,
    #[serde(default)]
    pub rain: Option<Rain>,
    #[serde(default)]
    pub weather: Option<Vec<ConditionDescriptor>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MainConditions {
    #[serde(default)]
    pub temp: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Wind {
    /// Metres per second.
    #[serde(default)]
    pub speed: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Rain {
    /// Volume over the last hour, in millimetres.
    #[serde(default, rename = "1h")]
    pub one_hour: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConditionDescriptor {
    #[serde(default)]
    pub description: Option<String>,
}

impl CurrentConditions {
    /// Temperature in °C, or 0.
    pub fn temperature(&self) -> f64 {
        self.main.as_ref().and_then(|m| m.temp).unwrap_or(0.0)
    }

    /// Relative humidity in %, or 0.
    pub fn humidity(&self) -> f64 {
        self.main.as_ref().and_then(|m| m.humidity).unwrap_or(0.0)
    }

    /// Wind speed converted to km/h, or 0.
    pub fn wind_speed_kmh(&self) -> f64 {
        self.wind.as_ref().and_then(|w| w.speed).map(|mps| mps * MPS_TO_KMH).unwrap_or(0.0)
    }

    /// Rain over the last hour in mm, or 0.
    pub fn rain_last_hour_mm(&self) -> f64 {
        self.rain.as_ref().and_then(|r| r.one_hour).unwrap_or(0.0)
    }

    /// Description of the first reported condition, or [`UNKNOWN_CONDITION`].
    pub fn condition(&self) -> String {
        self.weather
            .as_ref()
            .and_then(|w| w.first())
            .and_then(|w| w.description.clone())
            .unwrap_or_else(|| UNKNOWN_CONDITION.to_string())
    }
}

/// Simplified payload of `GET /weather`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSummary {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub rain_chance: f64,
    pub weather_condition: String,
}

impl From<&CurrentConditions> for WeatherSummary {
    fn from(c: &CurrentConditions) -> Self {
        Self {
            temperature: c.temperature(),
            humidity: c.humidity(),
            wind_speed: c.wind_speed_kmh(),
            rain_chance: c.rain_last_hour_mm(),
            weather_condition: c.condition(),
        }
    }
}

/// One element of the `GET /multiple` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityWeather {
    pub city: String,
    pub temperature: f64,
    pub weather: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureAlert {
    #[serde(rename = "Quente")]
    Hot,
    #[serde(rename = "Frio")]
    Cold,
    #[serde(rename = "Agradável")]
    Pleasant,
}

impl TemperatureAlert {
    pub const HOT_ABOVE_C: f64 = 30.0;
    pub const COLD_BELOW_C: f64 = 10.0;

    /// Both thresholds are exclusive: 10 and 30 are pleasant.
    pub fn classify(temperature: f64) -> Self {
        if temperature > Self::HOT_ABOVE_C {
            TemperatureAlert::Hot
        } else if temperature < Self::COLD_BELOW_C {
            TemperatureAlert::Cold
        } else {
            TemperatureAlert::Pleasant
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureAlert::Hot => "Quente",
            TemperatureAlert::Cold => "Frio",
            TemperatureAlert::Pleasant => "Agradável",
        }
    }
}

impl std::fmt::Display for TemperatureAlert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of `GET /alert`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertResult {
    pub city: String,
    pub temperature: f64,
    pub alert: TemperatureAlert,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> CurrentConditions {
        serde_json::from_value(value).expect("payload should deserialize")
    }

    #[test]
    fn empty_payload_yields_defaults() {
        let summary = WeatherSummary::from(&parse(json!({})));

        assert_eq!(
            summary,
            WeatherSummary {
                temperature: 0.0,
                humidity: 0.0,
                wind_speed: 0.0,
                rain_chance: 0.0,
                weather_condition: "Desconhecido".into(),
            }
        );
    }

    #[test]
    fn null_and_empty_sections_yield_defaults() {
        let c = parse(json!({
            "main": null,
            "wind": {},
            "rain": { "3h": 4.0 },
            "weather": []
        }));

        assert_eq!(c.temperature(), 0.0);
        assert_eq!(c.wind_speed_kmh(), 0.0);
        assert_eq!(c.rain_last_hour_mm(), 0.0);
        assert_eq!(c.condition(), UNKNOWN_CONDITION);
    }

    #[test]
    fn full_payload_is_extracted() {
        let c = parse(json!({
            "name": "Lisboa",
            "main": { "temp": 21.5, "humidity": 64, "feels_like": 21.0 },
            "wind": { "speed": 10 },
            "rain": { "1h": 0.4 },
            "weather": [
                { "description": "chuva leve", "main": "Rain" },
                { "description": "nublado" }
            ]
        }));

        let summary = WeatherSummary::from(&c);
        assert_eq!(summary.temperature, 21.5);
        assert_eq!(summary.humidity, 64.0);
        assert_eq!(summary.wind_speed, 36.0);
        assert_eq!(summary.rain_chance, 0.4);
        assert_eq!(summary.weather_condition, "chuva leve");
    }

    #[test]
    fn summary_serializes_with_camel_case_keys() {
        let summary = WeatherSummary::from(&parse(json!({ "wind": { "speed": 10 } })));
        let value = serde_json::to_value(&summary).unwrap();

        assert_eq!(
            value,
            json!({
                "temperature": 0.0,
                "humidity": 0.0,
                "windSpeed": 36.0,
                "rainChance": 0.0,
                "weatherCondition": "Desconhecido"
            })
        );
    }

    #[test]
    fn alert_thresholds_are_exclusive() {
        assert_eq!(TemperatureAlert::classify(30.0), TemperatureAlert::Pleasant);
        assert_eq!(TemperatureAlert::classify(10.0), TemperatureAlert::Pleasant);
        assert_eq!(TemperatureAlert::classify(30.1), TemperatureAlert::Hot);
        assert_eq!(TemperatureAlert::classify(9.9), TemperatureAlert::Cold);
        assert_eq!(TemperatureAlert::classify(0.0), TemperatureAlert::Cold);
    }

    #[test]
    fn alert_serializes_in_portuguese() {
        let result = AlertResult {
            city: "Lisboa".into(),
            temperature: 31.0,
            alert: TemperatureAlert::Hot,
        };

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "city": "Lisboa", "temperature": 31.0, "alert": "Quente" })
        );
        assert_eq!(
            serde_json::to_value(TemperatureAlert::Pleasant).unwrap(),
            json!("Agradável")
        );
        assert_eq!(TemperatureAlert::Cold.to_string(), "Frio");
    }
}
