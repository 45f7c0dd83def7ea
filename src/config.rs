use serde::{Deserialize, Serialize};

const DEFAULT_API_URL: &str = "http://localhost:4000";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_URL"),
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
            option_env!("LOG_LEVEL"),
        )
    }

    fn from_values(
        api_url: Option<&str>,
        environment: Option<&str>,
        enable_logging: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_url: api_url
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_url),
            environment: environment.unwrap_or("development").to_string(),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: log_level.unwrap_or("info").to_string(),
        }
    }

    /// URL base del backend RRHH
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Nivel de log para wasm_logger (info si el valor no es válido)
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_env_missing() {
        let config = AppConfig::from_values(None, None, None, None);
        assert_eq!(config.api_url(), "http://localhost:4000");
        assert!(!config.is_production());
        assert!(config.is_logging_enabled());
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_api_url_trailing_slash_is_trimmed() {
        let config = AppConfig::from_values(Some("https://rrhh.example.com/"), Some("production"), Some("false"), Some("debug"));
        assert_eq!(config.api_url(), "https://rrhh.example.com");
        assert!(config.is_production());
        assert!(!config.is_logging_enabled());
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_values(Some("  "), None, Some("quizas"), Some("ruidoso"));
        assert_eq!(config.api_url(), "http://localhost:4000");
        assert!(config.is_logging_enabled());
        assert_eq!(config.log_level(), log::Level::Info);
    }
}
