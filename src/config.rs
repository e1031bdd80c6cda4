//! Application configuration.
//!
//! Read once at startup from environment variables with sensible
//! defaults; served globally through a `OnceLock`.

use std::env;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }

    /// `APP_ENV=production` selects production; anything else is
    /// development.
    pub fn from_env() -> Self {
        match env::var("APP_ENV").as_deref() {
            Ok("production") => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub app_name: String,
    pub version: String,
    /// Map collaborator defaults
    pub map: MapConfig,
    /// The category list discounts and the merchant profile validate against
    pub categories: Vec<String>,
    pub logging: LoggingConfig,
}

/// Defaults handed to the external map surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Fallback center when a branch has no coordinate yet (Bakı)
    pub default_lat: f64,
    pub default_lng: f64,
    pub style: String,
    pub zoom: u8,
    /// Ambient access token; an editor may still pass its own
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub log_to_stdout: bool,
    pub json_format: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let environment = Environment::from_env();

        Self {
            environment,
            app_name: env::var("APP_NAME").unwrap_or_else(|_| "Merchant Console".to_string()),
            version: env!("CARGO_PKG_VERSION").to_string(),

            map: MapConfig {
                default_lat: 40.4093,
                default_lng: 49.8671,
                style: env::var("MAP_STYLE")
                    .unwrap_or_else(|_| "mapbox://styles/mapbox/streets-v12".to_string()),
                zoom: 14,
                access_token: env::var("MAPBOX_TOKEN").ok(),
            },

            categories: vec![
                "Yemək və İçki".to_string(),
                "Geyim".to_string(),
                "Elektronika".to_string(),
                "Gözəllik".to_string(),
                "İdman".to_string(),
                "Əyləncə".to_string(),
            ],

            logging: LoggingConfig {
                level: env::var("RUST_LOG").unwrap_or_else(|_| {
                    if environment.is_production() {
                        "warn".to_string()
                    } else {
                        "debug".to_string()
                    }
                }),
                log_to_stdout: env::var("LOG_TO_STDOUT")
                    .map(|s| s == "true")
                    .unwrap_or(true),
                json_format: environment.is_production(),
            },
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        Self::default()
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }

    pub fn is_known_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}

static GLOBAL_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Load the configuration into the global slot (idempotent).
pub fn init_config() -> &'static AppConfig {
    GLOBAL_CONFIG.get_or_init(AppConfig::load)
}

/// The global configuration, loading it on first access.
pub fn get_config() -> &'static AppConfig {
    GLOBAL_CONFIG.get_or_init(AppConfig::load)
}
