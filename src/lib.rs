pub mod advisory;
pub mod commands;
pub mod config;
pub mod editor;
pub mod errors;
pub mod filter;
pub mod geo;
pub mod logger;
pub mod models;
pub mod notifications;
pub mod settings;
pub mod store;
pub mod validation;

use std::sync::{Mutex, MutexGuard};

use advisory::{Advisory, AdvisoryQueue};
use errors::AppError;
use notifications::NotificationCenter;
use settings::SettingsStore;
use store::repository::Repository;
use store::seed::{self, SeedData};

/// Aplikasiyanın qlobal state-i — bütün əmrlər bunun üzərindən işləyir.
pub struct AppState {
    pub repo: Mutex<Repository>,
    pub notifications: Mutex<NotificationCenter>,
    pub settings: Mutex<SettingsStore>,
    pub advisories: Mutex<AdvisoryQueue>,
}

impl AppState {
    pub fn new(data: SeedData) -> Self {
        Self {
            repo: Mutex::new(Repository::new(data.discounts, data.branches, data.profile)),
            notifications: Mutex::new(NotificationCenter::new(data.notifications)),
            settings: Mutex::new(SettingsStore::new()),
            advisories: Mutex::new(AdvisoryQueue::new()),
        }
    }

    /// State seeded with the built-in mock data set.
    pub fn seeded() -> Self {
        Self::new(seed::seed_data())
    }

    pub fn repo(&self) -> Result<MutexGuard<'_, Repository>, AppError> {
        self.repo
            .lock()
            .map_err(|_| AppError::Internal("repository lock poisoned".into()))
    }

    pub fn notifications(&self) -> Result<MutexGuard<'_, NotificationCenter>, AppError> {
        self.notifications
            .lock()
            .map_err(|_| AppError::Internal("notification lock poisoned".into()))
    }

    pub fn settings(&self) -> Result<MutexGuard<'_, SettingsStore>, AppError> {
        self.settings
            .lock()
            .map_err(|_| AppError::Internal("settings lock poisoned".into()))
    }

    /// Queue a toast advisory for the presentation layer.
    pub fn advise(&self, advisory: Advisory) -> Result<(), AppError> {
        self.advisories
            .lock()
            .map_err(|_| AppError::Internal("advisory lock poisoned".into()))?
            .push(advisory);
        Ok(())
    }

    /// Drain pending toast advisories.
    pub fn drain_advisories(&self) -> Result<Vec<Advisory>, AppError> {
        Ok(self
            .advisories
            .lock()
            .map_err(|_| AppError::Internal("advisory lock poisoned".into()))?
            .drain())
    }
}

/// Initialize configuration, logging and the seeded application state.
pub fn bootstrap() -> AppState {
    let cfg = config::init_config();

    if let Err(e) = logger::init_global_logger() {
        eprintln!("Warning: failed to initialize logger: {}", e);
    }

    log_info!("APP", "Application starting", serde_json::json!({
        "version": cfg.version,
        "environment": cfg.environment.as_str(),
    }));

    AppState::seeded()
}
