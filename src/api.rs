//! Open-Meteo API client

use std::time::Duration;

use serde::Deserialize;

use crate::state::WeatherSnapshot;

/// Melbourne, Australia. The location is fixed; there is no lookup flow.
pub const LATITUDE: f64 = -37.81;
pub const LONGITUDE: f64 = 144.96;

/// Upstream does not bound the request; a dead network would otherwise pin a
/// tile in Loading for the whole session.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// API response from Open-Meteo
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentConditions,
    current_units: CurrentUnits,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temperature_2m: f32,
    weather_code: i32,
}

#[derive(Debug, Deserialize)]
struct CurrentUnits {
    temperature_2m: String,
}

/// Fetch error type. The two variants track what went wrong for debugging;
/// the rendered message is the same for both.
#[derive(Debug)]
pub enum FetchError {
    /// Request could not be completed, or the server returned a non-success status
    Request(reqwest::Error),
    /// Response body did not match the expected snapshot shape
    Parse(reqwest::Error),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // One static user-facing message for every failure kind
        f.write_str("Failed to fetch weather data")
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Request(e) | FetchError::Parse(e) => Some(e),
        }
    }
}

/// Forecast endpoint for the fixed location, requesting current temperature
/// and weather code.
pub fn forecast_url() -> String {
    format!(
        "https://api.open-meteo.com/v1/forecast?latitude={}&longitude={}&current=temperature_2m,weather_code",
        LATITUDE, LONGITUDE
    )
}

/// Fetch current conditions from Open-Meteo.
pub async fn fetch_current_weather() -> Result<WeatherSnapshot, FetchError> {
    fetch_current_weather_from(&forecast_url()).await
}

/// Fetch current conditions from an explicit endpoint URL. Tests point this
/// at a local server; production goes through [`fetch_current_weather`].
pub async fn fetch_current_weather_from(url: &str) -> Result<WeatherSnapshot, FetchError> {
    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(FetchError::Request)?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(FetchError::Request)?
        .error_for_status()
        .map_err(FetchError::Request)?;

    let data: ForecastResponse = response.json().await.map_err(FetchError::Parse)?;

    Ok(WeatherSnapshot {
        temperature: data.current.temperature_2m,
        weather_code: data.current.weather_code,
        temperature_unit: data.current_units.temperature_2m,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_url_encodes_fixed_location() {
        let url = forecast_url();
        assert!(url.starts_with("https://api.open-meteo.com/v1/forecast?"));
        assert!(url.contains("latitude=-37.81"));
        assert!(url.contains("longitude=144.96"));
        assert!(url.contains("current=temperature_2m,weather_code"));
    }

    #[test]
    fn test_response_shape_deserializes() {
        // Missing `current` must be a deserialization error, not a default.
        assert!(serde_json::from_str::<ForecastResponse>("{}").is_err());

        let response_shape: Result<ForecastResponse, _> = serde_json::from_str(
            r#"{"current":{"temperature_2m":22.4,"weather_code":1},"current_units":{"temperature_2m":"°C"}}"#,
        );
        let snapshot = response_shape.unwrap();
        assert_eq!(snapshot.current.temperature_2m, 22.4);
        assert_eq!(snapshot.current.weather_code, 1);
        assert_eq!(snapshot.current_units.temperature_2m, "°C");
    }
}
