use crate::utils::error::{DiscoveryError, Result};
use chrono::NaiveDate;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(DiscoveryError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(DiscoveryError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(DiscoveryError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// The API version is a release date such as `2023-03-31`.
pub fn validate_version_date(field_name: &str, version: &str) -> Result<()> {
    NaiveDate::parse_from_str(version, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|e| DiscoveryError::InvalidConfigValue {
            field: field_name.to_string(),
            value: version.to_string(),
            reason: format!("Expected a YYYY-MM-DD date: {}", e),
        })
}

/// Rejects credentials that still carry template braces or wrapping quotes.
pub fn validate_credential(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(DiscoveryError::Config {
            message: format!("{} cannot be empty", field_name),
        });
    }

    let has_braces = value.starts_with('{') || value.ends_with('}');
    let has_quotes = value.starts_with('"') || value.ends_with('"');
    if has_braces || has_quotes {
        return Err(DiscoveryError::Config {
            message: format!(
                "{} cannot start or end with curly brackets or quotes. Remove them from the value",
                field_name
            ),
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
        return Err(DiscoveryError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Required request parameters: a blank string is treated as missing.
pub(crate) fn require<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    if value.is_empty() {
        return Err(DiscoveryError::missing(name));
    }
    Ok(value)
}
