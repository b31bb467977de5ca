use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{AppError, AppResult};
use crate::models::pagination::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: PromotionsApiConfig,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotionsApiConfig {
    pub base_url: String,
    pub token: String,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Config {
    /// Loads `config.toml` (path overridable via `CONFIG_PATH`), falling back
    /// to environment variables when the file is absent. Env vars override
    /// file values either way.
    pub fn from_toml() -> AppResult<Self> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        use std::io::ErrorKind;

        let mut config: Config = match std::fs::read_to_string(&config_path) {
            Ok(config_str) => toml::from_str(&config_str)
                .map_err(|e| AppError::ConfigError(format!("failed to parse {config_path}: {e}")))?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let base_url = env::var("PROMOTIONS_BASE_URL").map_err(|_| {
                    AppError::ConfigError(format!(
                        "PROMOTIONS_BASE_URL not set and {config_path} not found"
                    ))
                })?;
                let token = env::var("PROMOTIONS_API_TOKEN").map_err(|_| {
                    AppError::ConfigError(format!(
                        "PROMOTIONS_API_TOKEN not set and {config_path} not found"
                    ))
                })?;
                Config {
                    api: PromotionsApiConfig { base_url, token },
                    page_size: DEFAULT_PAGE_SIZE,
                }
            }
            Err(e) => {
                return Err(AppError::ConfigError(format!(
                    "failed to read {config_path}: {e}"
                )));
            }
        };

        if let Ok(v) = env::var("PROMOTIONS_BASE_URL") {
            config.api.base_url = v;
        }
        if let Ok(v) = env::var("PROMOTIONS_API_TOKEN") {
            config.api.token = v;
        }
        if let Ok(v) = env::var("PROMOTIONS_PAGE_SIZE")
            && let Ok(n) = v.parse()
        {
            config.page_size = n;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_toml() {
        let config: Config = toml::from_str(
            r#"
            page_size = 25

            [api]
            base_url = "https://api.example.test"
            token = "secret"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://api.example.test");
        assert_eq!(config.page_size, 25);
    }

    #[test]
    fn test_page_size_defaults() {
        let config: Config = toml::from_str(
            r#"
            [api]
            base_url = "https://api.example.test"
            token = "secret"
            "#,
        )
        .unwrap();
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }
}
