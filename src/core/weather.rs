use crate::domain::model::{Coordinates, WeatherReport};
use crate::domain::ports::WeatherProvider;
use crate::utils::error::{AdvisorError, Result};
use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
pub const UNKNOWN_LOCATION: &str = "Unknown Location";

#[derive(Debug, Clone)]
pub struct WeatherClientConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl WeatherClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// OpenWeatherMap client: current conditions, then reverse geocoding for the
/// place name. Neither call is retried.
#[derive(Clone)]
pub struct OpenWeatherClient {
    config: WeatherClientConfig,
    client: Client,
}

impl OpenWeatherClient {
    pub fn new(config: WeatherClientConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn check_preconditions(&self, at: Coordinates) -> Result<()> {
        if self.config.api_key.trim().is_empty() {
            return Err(AdvisorError::WeatherPreconditionError {
                message: "Weather API key not provided".to_string(),
            });
        }
        if !(-90.0..=90.0).contains(&at.latitude) || !(-180.0..=180.0).contains(&at.longitude) {
            return Err(AdvisorError::WeatherPreconditionError {
                message: format!(
                    "Location coordinates out of range: {}, {}",
                    at.latitude, at.longitude
                ),
            });
        }
        Ok(())
    }

    async fn fetch_conditions(&self, at: Coordinates) -> Result<CurrentWeather> {
        let url = self.url("/data/2.5/weather");
        tracing::debug!("📡 Requesting current weather from {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", at.latitude.to_string()),
                ("lon", at.longitude.to_string()),
                ("appid", self.config.api_key.clone()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await?;

        tracing::debug!("📡 Weather response status: {}", response.status());
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AdvisorError::WeatherApiError { status, body });
        }

        Ok(response.json().await?)
    }

    /// Any failure here falls back to an unknown location.
    async fn reverse_geocode(&self, at: Coordinates) -> (String, String) {
        match self.fetch_place(at).await {
            Ok(Some(place)) => (
                place
                    .name
                    .filter(|n| !n.is_empty())
                    .unwrap_or_else(|| UNKNOWN_LOCATION.to_string()),
                place.country.unwrap_or_default(),
            ),
            Ok(None) => (UNKNOWN_LOCATION.to_string(), String::new()),
            Err(e) => {
                tracing::warn!("Reverse geocoding failed: {}", e);
                (UNKNOWN_LOCATION.to_string(), String::new())
            }
        }
    }

    async fn fetch_place(&self, at: Coordinates) -> Result<Option<Place>> {
        let response = self
            .client
            .get(self.url("/geo/1.0/reverse"))
            .query(&[
                ("lat", at.latitude.to_string()),
                ("lon", at.longitude.to_string()),
                ("appid", self.config.api_key.clone()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::debug!("Reverse geocoding returned {}", response.status());
            return Ok(None);
        }

        let places: Vec<Place> = response.json().await?;
        Ok(places.into_iter().next())
    }
}

#[async_trait::async_trait]
impl WeatherProvider for OpenWeatherClient {
    fn name(&self) -> &'static str {
        "openweathermap"
    }

    async fn current_weather(&self, at: Coordinates) -> Result<WeatherReport> {
        self.check_preconditions(at)?;

        let conditions = self.fetch_conditions(at).await?;
        let (location, country) = self.reverse_geocode(at).await;

        let report = conditions.into_report(location, country);
        tracing::info!("🌤️ Current weather for {} loaded", report.location);
        Ok(report)
    }
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    main: MainReadings,
    #[serde(default)]
    wind: Option<Wind>,
    #[serde(default)]
    weather: Vec<Condition>,
    #[serde(default)]
    visibility: Option<f64>,
    #[serde(default)]
    rain: Option<Rain>,
    #[serde(default)]
    dt: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
    feels_like: f64,
    humidity: f64,
    pressure: f64,
}

#[derive(Debug, Deserialize)]
struct Wind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct Rain {
    #[serde(rename = "1h", default)]
    one_hour: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct Place {
    name: Option<String>,
    country: Option<String>,
}

impl CurrentWeather {
    fn into_report(self, location: String, country: String) -> WeatherReport {
        let condition = self.weather.into_iter().next();
        WeatherReport {
            location,
            country,
            temperature: self.main.temp.round() as i64,
            feels_like: self.main.feels_like.round() as i64,
            humidity: self.main.humidity.round().clamp(0.0, 100.0) as u8,
            rainfall: self.rain.and_then(|r| r.one_hour).unwrap_or(0.0),
            // m/s to km/h
            wind_speed: self.wind.map(|w| (w.speed * 3.6).round() as i64).unwrap_or(0),
            description: condition
                .as_ref()
                .map(|c| c.description.clone())
                .unwrap_or_default(),
            icon: condition.map(|c| c.icon).unwrap_or_default(),
            pressure: self.main.pressure.round().max(0.0) as u32,
            // metres to km
            visibility: self.visibility.map(|v| (v / 1000.0).round() as i64).unwrap_or(0),
            observed_at: self.dt.and_then(|dt| DateTime::from_timestamp(dt, 0)),
        }
    }
}
