use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Missing soil value: {field}")]
    MissingField { field: String },

    #[error("Invalid soil value '{value}' for {field}: {reason}")]
    InvalidSoilValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Soil report row {row}: {source}")]
    CsvRowError {
        row: usize,
        #[source]
        source: Box<AdvisorError>,
    },

    #[error("Weather API error: {status}")]
    WeatherApiError { status: u16, body: String },

    #[error("Weather request not possible: {message}")]
    WeatherPreconditionError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Input,
    Storage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl AdvisorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ApiError(_) | Self::WeatherApiError { .. } => ErrorCategory::Network,
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. }
            | Self::WeatherPreconditionError { .. } => ErrorCategory::Configuration,
            Self::MissingField { .. }
            | Self::InvalidSoilValue { .. }
            | Self::CsvError(_)
            | Self::CsvRowError { .. } => ErrorCategory::Input,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::Storage,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // weather is auxiliary to the soil report
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ApiError(_) => "Check network connectivity and try again",
            Self::WeatherApiError { status: 401, .. } => "Check that the weather API key is valid",
            Self::WeatherApiError { .. } => "The weather service rejected the request; try again later",
            Self::WeatherPreconditionError { .. } => {
                "Provide a weather API key and valid latitude/longitude"
            }
            Self::MissingField { .. } => "Fill in all six soil parameters",
            Self::InvalidSoilValue { .. } => "Enter each soil value as a plain number within its range",
            Self::CsvError(_) | Self::CsvRowError { .. } => {
                "Check the soil report columns: nitrogen, phosphorus, potassium, ph, organic_carbon, moisture"
            }
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. } => "Review the configuration file and command-line flags",
            Self::IoError(_) => "Check that the output path exists and is writable",
            Self::SerializationError(_) => "Report this issue; the analysis could not be serialized",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MissingField { field } => format!("Please enter a value for {}", field),
            Self::InvalidSoilValue { field, value, reason } => {
                format!("'{}' is not a valid {} value ({})", value, field, reason)
            }
            Self::CsvRowError { row, source } => {
                format!("Row {} of the soil report: {}", row, source.user_friendly_message())
            }
            Self::WeatherApiError { status, .. } => {
                format!("Weather service returned status {}", status)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AdvisorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_high_severity() {
        let err = AdvisorError::MissingField {
            field: "nitrogen".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.user_friendly_message(), "Please enter a value for nitrogen");
    }

    #[test]
    fn test_weather_errors_are_medium_severity() {
        let err = AdvisorError::WeatherApiError {
            status: 401,
            body: String::new(),
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.recovery_suggestion().contains("API key"));
    }

    #[test]
    fn test_row_error_wraps_inner_message() {
        let err = AdvisorError::CsvRowError {
            row: 3,
            source: Box::new(AdvisorError::MissingField {
                field: "ph".to_string(),
            }),
        };
        assert_eq!(
            err.user_friendly_message(),
            "Row 3 of the soil report: Please enter a value for ph"
        );
    }
}
