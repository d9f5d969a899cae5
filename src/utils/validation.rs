use crate::utils::error::{AdvisorError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl ToString, reason: impl Into<String>) -> AdvisorError {
    AdvisorError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(invalid(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(invalid(field_name, url_str, format!("Invalid URL format: {}", e))),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    Ok(())
}

pub fn validate_positive_number<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min_value: T,
) -> Result<()> {
    if value < min_value {
        return Err(invalid(
            field_name,
            value,
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| AdvisorError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(invalid(
            field_name,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(invalid(
            field_name,
            value,
            format!("Supported values: {}", allowed.join(", ")),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("weather.base_url", "https://api.openweathermap.org").is_ok());
        assert!(validate_url("weather.base_url", "http://127.0.0.1:8080").is_ok());
        assert!(validate_url("weather.base_url", "").is_err());
        assert!(validate_url("weather.base_url", "invalid-url").is_err());
        assert!(validate_url("weather.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("analysis.top_crops", 3, 1).is_ok());
        assert!(validate_positive_number("analysis.top_crops", 0, 1).is_err());
        assert!(validate_positive_number("weather.timeout_seconds", u64::MAX, 1u64).is_ok());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("weather.latitude", 19.07, -90.0, 90.0).is_ok());
        assert!(validate_range("weather.latitude", 91.0, -90.0, 90.0).is_err());
        assert!(validate_range("weather.longitude", -180.0, -180.0, 180.0).is_ok());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("output.formats", "json", &["json", "csv", "text"]).is_ok());
        assert!(validate_one_of("output.formats", "xml", &["json", "csv", "text"]).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("key".to_string());
        let missing: Option<String> = None;
        assert_eq!(validate_required_field("weather.api_key", &present).unwrap(), "key");
        assert!(matches!(
            validate_required_field("weather.api_key", &missing),
            Err(AdvisorError::MissingConfigError { .. })
        ));
    }
}
