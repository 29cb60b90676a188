use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_REDIRECT_DELAY_MS: u32 = 1500;
pub const DEFAULT_FLASH_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: String,
    /// Espera antes de navegar tras un guardado exitoso
    pub redirect_delay_ms: u32,
    /// Duración de los mensajes flash (p.ej. "Employee deleted successfully.")
    pub flash_duration_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS,
            flash_duration_ms: DEFAULT_FLASH_DURATION_MS,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_BASE_URL"),
            option_env!("LOG_LEVEL"),
            option_env!("REDIRECT_DELAY_MS"),
            option_env!("FLASH_DURATION_MS"),
        )
    }

    fn from_values(
        api_base_url: Option<&str>,
        log_level: Option<&str>,
        redirect_delay_ms: Option<&str>,
        flash_duration_ms: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: api_base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_base_url),
            log_level: log_level
                .map(|level| level.trim().to_lowercase())
                .filter(|level| !level.is_empty())
                .unwrap_or(defaults.log_level),
            redirect_delay_ms: redirect_delay_ms
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.redirect_delay_ms),
            flash_duration_ms: flash_duration_ms
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.flash_duration_ms),
        }
    }

    /// Nivel máximo para wasm_logger; valores desconocidos caen a Info
    pub fn log_level(&self) -> log::Level {
        match self.log_level.as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
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
    fn missing_values_fall_back_to_defaults() {
        let config = AppConfig::from_values(None, None, None, None);
        assert_eq!(config.api_base_url, "http://localhost:8080/api");
        assert_eq!(config.redirect_delay_ms, 1500);
        assert_eq!(config.flash_duration_ms, 3000);
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn trailing_slash_is_trimmed_and_bad_numbers_ignored() {
        let config = AppConfig::from_values(
            Some("https://worklog.example.com/api/"),
            Some(" DEBUG "),
            Some("abc"),
            Some("500"),
        );
        assert_eq!(config.api_base_url, "https://worklog.example.com/api");
        assert_eq!(config.log_level(), log::Level::Debug);
        assert_eq!(config.redirect_delay_ms, 1500);
        assert_eq!(config.flash_duration_ms, 500);
    }
}
