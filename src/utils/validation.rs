use crate::utils::error::{ApiError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ApiError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => {
            match url.scheme() {
                "http" | "https" => {}
                scheme => {
                    return Err(ApiError::InvalidConfigValue {
                        field: field_name.to_string(),
                        value: url_str.to_string(),
                        reason: format!("Unsupported URL scheme: {}", scheme),
                    })
                }
            }
            if url.cannot_be_a_base() || url.host_str().is_none() {
                return Err(ApiError::InvalidConfigValue {
                    field: field_name.to_string(),
                    value: url_str.to_string(),
                    reason: "URL must include a host".to_string(),
                });
            }
            if url.query().is_some() || url.fragment().is_some() {
                return Err(ApiError::InvalidConfigValue {
                    field: field_name.to_string(),
                    value: url_str.to_string(),
                    reason: "Base URL must not carry a query or fragment".to_string(),
                });
            }
            Ok(())
        }
        Err(e) => Err(ApiError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
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
        return Err(ApiError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api.base_url", "https://api.umrahflex.com/api").is_ok());
        assert!(validate_url("api.base_url", "http://localhost:8000").is_ok());
        assert!(validate_url("api.base_url", "").is_err());
        assert!(validate_url("api.base_url", "invalid-url").is_err());
        assert!(validate_url("api.base_url", "ftp://example.com").is_err());
        assert!(validate_url("api.base_url", "https://example.com/api?x=1").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("id", "42").is_ok());
        assert!(validate_non_empty_string("id", "   ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("ui.toast_seconds", 3u64, 1, 60).is_ok());
        assert!(validate_range("ui.toast_seconds", 0u64, 1, 60).is_err());
        assert!(validate_range("ui.toast_seconds", 61u64, 1, 60).is_err());
    }
}
