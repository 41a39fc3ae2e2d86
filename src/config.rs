//! Application Configuration
//!
//! Resolved when the bundle is built: the browser has no process
//! environment, so values are baked in with `option_env!`.
//!
//! - `MOODS_BACKEND_URL`: recommendation API base URL
//! - `MOODS_USER_ID`: user id sent with every request
//! - `MOODS_LOG`: console log level (`error`, `warn`, `info`, `debug`, `trace`, `off`)

use log::LevelFilter;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";
pub const DEFAULT_USER_ID: &str = "demo_user";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub backend_url: String,
    pub user_id: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("MOODS_BACKEND_URL"),
            option_env!("MOODS_USER_ID"),
            option_env!("MOODS_LOG"),
        )
    }

    pub fn from_values(backend_url: Option<&str>, user_id: Option<&str>, log_level: Option<&str>) -> Self {
        let backend_url = non_blank(backend_url)
            .unwrap_or(DEFAULT_BACKEND_URL)
            .trim_end_matches('/')
            .to_string();
        let user_id = non_blank(user_id).unwrap_or(DEFAULT_USER_ID).to_string();
        let log_level = non_blank(log_level)
            .and_then(|level| level.parse().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self { backend_url, user_id, log_level }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.backend_url, "http://localhost:8001");
        assert_eq!(config.user_id, "demo_user");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(
            Some("https://moods.example.com/"),
            Some("alice"),
            Some("DEBUG"),
        );
        assert_eq!(config.backend_url, "https://moods.example.com");
        assert_eq!(config.user_id, "alice");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_blank_and_invalid_values_fall_back() {
        let config = AppConfig::from_values(Some("  "), Some(""), Some("loud"));
        assert_eq!(config, AppConfig::default());
    }
}
