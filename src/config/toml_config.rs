use crate::core::discovery::DEFAULT_SERVICE_URL;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{DiscoveryError, Result};
use crate::utils::validation::{validate_range, validate_url, validate_version_date, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// Connection settings for a Discovery instance.
///
/// ```toml
/// [service]
/// url = "https://api.us-south.discovery.watson.cloud.ibm.com/instances/${INSTANCE_ID}"
/// version = "2023-03-31"
/// timeout_seconds = 30
///
/// [headers]
/// X-Watson-Learning-Opt-Out = "true"
/// ```
///
/// Credentials are never read from this file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub service: ServiceSection,
    pub headers: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSection {
    pub url: Option<String>,
    pub version: String,
    pub timeout_seconds: Option<u64>,
    pub disable_ssl_verification: Option<bool>,
}

impl ServiceConfig {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            service: ServiceSection {
                url: None,
                version: version.into(),
                timeout_seconds: None,
                disable_ssl_verification: None,
            },
            headers: None,
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;

        toml::from_str(&processed).map_err(|e| DiscoveryError::ConfigValidation {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DiscoveryError::Config {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_url("service.url", self.service_url())?;
        validate_version_date("service.version", &self.service.version)?;

        if let Some(timeout) = self.service.timeout_seconds {
            validate_range("service.timeout_seconds", timeout, 1, 3600)?;
        }

        Ok(())
    }
}

impl ConfigProvider for ServiceConfig {
    fn service_url(&self) -> &str {
        self.service.url.as_deref().unwrap_or(DEFAULT_SERVICE_URL)
    }

    fn version(&self) -> &str {
        &self.service.version
    }

    fn timeout(&self) -> Option<Duration> {
        self.service.timeout_seconds.map(Duration::from_secs)
    }

    fn disable_ssl_verification(&self) -> bool {
        self.service.disable_ssl_verification.unwrap_or(false)
    }

    fn default_headers(&self) -> HashMap<String, String> {
        self.headers.clone().unwrap_or_default()
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[service]
url = "https://api.eu-de.discovery.watson.cloud.ibm.com/instances/abc"
version = "2023-03-31"
timeout_seconds = 45
disable_ssl_verification = true

[headers]
X-Watson-Learning-Opt-Out = "true"
"#;

        let config = ServiceConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.service_url(),
            "https://api.eu-de.discovery.watson.cloud.ibm.com/instances/abc"
        );
        assert_eq!(config.version(), "2023-03-31");
        assert_eq!(config.timeout(), Some(Duration::from_secs(45)));
        assert!(config.disable_ssl_verification());
        assert_eq!(
            config.default_headers().get("X-Watson-Learning-Opt-Out"),
            Some(&"true".to_string())
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = ServiceConfig::from_toml_str("[service]\nversion = \"2023-03-31\"\n").unwrap();
        assert_eq!(config.service_url(), DEFAULT_SERVICE_URL);
        assert_eq!(config.timeout(), None);
        assert!(!config.disable_ssl_verification());
        assert!(config.default_headers().is_empty());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("DISCOVERY_TEST_INSTANCE", "inst-42");
        let toml_content = r#"
[service]
url = "https://api.example.com/instances/${DISCOVERY_TEST_INSTANCE}"
version = "2023-03-31"
"#;
        let config = ServiceConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.service_url(),
            "https://api.example.com/instances/inst-42"
        );
    }

    #[test]
    fn test_unset_env_var_is_kept() {
        let processed =
            ServiceConfig::substitute_env_vars("url = \"${DISCOVERY_TEST_UNSET_VAR}\"").unwrap();
        assert_eq!(processed, "url = \"${DISCOVERY_TEST_UNSET_VAR}\"");
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = ServiceConfig::new("2023/03/31");
        assert!(config.validate().is_err());

        config.service.version = "2023-03-31".to_string();
        config.service.timeout_seconds = Some(0);
        assert!(config.validate().is_err());

        config.service.timeout_seconds = Some(30);
        config.service.url = Some("ftp://example.com".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_version_is_a_parse_error() {
        let err = ServiceConfig::from_toml_str("[service]\nurl = \"https://x.example.com\"\n")
            .unwrap_err();
        assert!(matches!(err, DiscoveryError::ConfigValidation { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[service]\nversion = \"2023-03-31\"\ntimeout_seconds = 10").unwrap();

        let config = ServiceConfig::from_file(file.path()).unwrap();
        assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ServiceConfig::from_file("/nonexistent/discovery.toml").unwrap_err();
        assert!(matches!(err, DiscoveryError::Io(_)));
    }
}
