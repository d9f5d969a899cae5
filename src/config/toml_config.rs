use crate::core::weather::{WeatherClientConfig, DEFAULT_BASE_URL};
use crate::core::ConfigProvider;
use crate::domain::model::{BandMatching, Coordinates, OutputFormat};
use crate::utils::error::{AdvisorError, Result};
use crate::utils::i18n::Language;
use crate::utils::logger::DEFAULT_LEVEL;
use crate::utils::validation::{
    validate_non_empty_string, validate_one_of, validate_path, validate_positive_number,
    validate_range, validate_required_field, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const DEFAULT_TOP_CROPS: usize = 3;
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub band_matching: BandMatching,
    pub top_crops: Option<usize>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherConfig {
    pub enabled: Option<bool>,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub formats: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AdvisorError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AdvisorError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| AdvisorError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn weather_enabled(&self) -> bool {
        self.weather.enabled.unwrap_or(false)
    }

    pub fn log_json(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .unwrap_or(DEFAULT_LEVEL)
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(top) = self.analysis.top_crops {
            validate_positive_number("analysis.top_crops", top, 1)?;
        }
        if let Some(language) = &self.analysis.language {
            validate_one_of("analysis.language", language.trim(), &["en", "hi"])?;
        }

        if let Some(path) = &self.output.path {
            validate_path("output.path", path)?;
        }
        if let Some(formats) = &self.output.formats {
            if formats.is_empty() {
                return Err(AdvisorError::InvalidConfigValueError {
                    field: "output.formats".to_string(),
                    value: String::new(),
                    reason: "At least one output format is required".to_string(),
                });
            }
            for format in formats {
                validate_one_of("output.formats", format, &OutputFormat::NAMES)?;
            }
        }

        if let Some(level) = self.logging.as_ref().and_then(|l| l.level.as_deref()) {
            validate_one_of("logging.level", level, &["error", "warn", "info", "debug", "trace"])?;
        }

        if self.weather_enabled() {
            self.validate_weather()?;
        }

        Ok(())
    }

    fn validate_weather(&self) -> Result<()> {
        let weather = &self.weather;
        if let Some(base_url) = &weather.base_url {
            validate_url("weather.base_url", base_url)?;
        }

        let api_key = validate_required_field("weather.api_key", &weather.api_key)?;
        validate_non_empty_string("weather.api_key", api_key)?;
        if api_key.contains("${") {
            return Err(AdvisorError::ConfigValidationError {
                field: "weather.api_key".to_string(),
                message: format!("Environment variable in {} is not set", api_key),
            });
        }

        let latitude = validate_required_field("weather.latitude", &weather.latitude)?;
        validate_range("weather.latitude", *latitude, -90.0, 90.0)?;
        let longitude = validate_required_field("weather.longitude", &weather.longitude)?;
        validate_range("weather.longitude", *longitude, -180.0, 180.0)?;

        if let Some(timeout) = weather.timeout_seconds {
            validate_positive_number("weather.timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }

    /// `None` when the weather lookup is disabled.
    pub fn weather_client_config(&self) -> Option<WeatherClientConfig> {
        if !self.weather_enabled() {
            return None;
        }
        Some(WeatherClientConfig {
            base_url: self
                .weather
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key: self.weather.api_key.clone().unwrap_or_default(),
            timeout: Duration::from_secs(
                self.weather.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            ),
        })
    }
}

impl ConfigProvider for TomlConfig {
    fn output_path(&self) -> &str {
        self.output.path.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn output_formats(&self) -> Vec<OutputFormat> {
        match &self.output.formats {
            Some(formats) => formats
                .iter()
                .filter_map(|f| OutputFormat::from_name(f))
                .collect(),
            None => vec![OutputFormat::Json],
        }
    }

    fn band_matching(&self) -> BandMatching {
        self.analysis.band_matching
    }

    fn top_crops(&self) -> usize {
        self.analysis.top_crops.unwrap_or(DEFAULT_TOP_CROPS)
    }

    fn language(&self) -> Language {
        self.analysis
            .language
            .as_deref()
            .and_then(Language::from_code)
            .unwrap_or_default()
    }

    fn coordinates(&self) -> Option<Coordinates> {
        if !self.weather_enabled() {
            return None;
        }
        Some(Coordinates {
            latitude: self.weather.latitude?,
            longitude: self.weather.longitude?,
        })
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
