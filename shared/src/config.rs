//! ==============================================================================
//! config.rs - runtime configuration
//! ==============================================================================
//!
//! values are baked in at build time through environment variables:
//!     ONLY_MENU_API_BASE      base url of the menu api (default "/api/")
//!     ONLY_MENU_USE_BACKEND  "1"/"true" talks to the menu api
//!     ONLY_MENU_LOG           log level name (default "info")
//!
//! ==============================================================================

use log::Level;

pub const DEFAULT_API_BASE: &str = "/api/";
pub const DEFAULT_USERNAME_KEY: &str = "username";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// always ends with '/'
    pub api_base: String,
    /// post uploads to the api and list its menus
    pub use_backend: bool,
    /// local storage key holding the last logged in user
    pub username_key: String,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            use_backend: false,
            username_key: DEFAULT_USERNAME_KEY.to_string(),
            log_level: Level::Info,
        }
    }
}

impl Config {
    /// config from the build environment
    pub fn from_build_env() -> Self {
        Self::from_vars(
            option_env!("ONLY_MENU_API_BASE"),
            option_env!("ONLY_MENU_USE_BACKEND"),
            option_env!("ONLY_MENU_LOG"),
        )
    }

    /// unset or unparseable values keep their defaults
    pub fn from_vars(api_base: Option<&str>, use_backend: Option<&str>, log: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(base) = api_base.map(str::trim).filter(|b| !b.is_empty()) {
            config.api_base = if base.ends_with('/') {
                base.to_string()
            } else {
                format!("{}/", base)
            };
        }

        if let Some(flag) = use_backend {
            config.use_backend = matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }

        if let Some(level) = log.and_then(|l| l.trim().parse::<Level>().ok()) {
            config.log_level = level;
        }

        config
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path.trim_start_matches('/'))
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(None, None, None);
        assert_eq!(config, Config::default());
        assert_eq!(config.endpoint("upload"), "/api/upload");
    }

    #[test]
    fn test_api_base_gets_trailing_slash() {
        let config = Config::from_vars(Some("https://menus.example.com/api"), None, None);
        assert_eq!(config.endpoint("/menus"), "https://menus.example.com/api/menus");
    }

    #[test]
    fn test_sync_flag_and_level() {
        let config = Config::from_vars(None, Some("TRUE"), Some("debug"));
        assert!(config.use_backend);
        assert_eq!(config.log_level, Level::Debug);

        let config = Config::from_vars(None, Some("nope"), Some("loud"));
        assert!(!config.use_backend);
        assert_eq!(config.log_level, Level::Info);
    }
}
