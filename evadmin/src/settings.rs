use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Language code (`en`, `es`). Falls back to the process locale.
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Settings {
    /// Reads `config.toml` (or `$EVADMIN_CONFIG`) and `EVADMIN_*` variables.
    pub fn new() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("EVADMIN_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("EVADMIN").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.api_url.is_empty() {
            return Err("api_url is required".to_string());
        }
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err("api_url must be a valid HTTP(S) URL".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than zero".to_string());
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            language: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "evadmin-settings-{}-{}.toml",
            name,
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_file_values_are_read() {
        let path = temp_config(
            "file",
            "api_url = \"https://events.example.com/api\"\nlanguage = \"es\"\nrequest_timeout_secs = 3\n",
        );

        let settings = Settings::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(settings.api_url, "https://events.example.com/api");
        assert_eq!(settings.language.as_deref(), Some("es"));
        assert_eq!(settings.request_timeout(), Duration::from_secs(3));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut settings = Settings::default();
        assert!(settings.validate().is_ok());

        settings.api_url = "ftp://example.com".to_string();
        assert!(settings.validate().is_err());

        settings.api_url = String::new();
        assert!(settings.validate().is_err());

        settings = Settings {
            request_timeout_secs: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
