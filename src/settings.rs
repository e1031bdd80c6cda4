//! App-wide presentation settings (theme, language).
//!
//! Shared across the whole view tree, so the store is explicit state with
//! one update channel: the presentation subscribes and gets called back on
//! every change instead of reading ambient globals.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// UI language — literal label substitution only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Az,
    En,
    Ru,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub theme: Theme,
    pub language: Language,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            language: Language::Az,
        }
    }
}

type Subscriber = Box<dyn Fn(&AppSettings) + Send>;

pub struct SettingsStore {
    settings: AppSettings,
    subscribers: Vec<Subscriber>,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self {
            settings: AppSettings::default(),
            subscribers: Vec::new(),
        }
    }

    pub fn current(&self) -> AppSettings {
        self.settings
    }

    /// Register a callback invoked after every settings change.
    pub fn subscribe(&mut self, subscriber: impl Fn(&AppSettings) + Send + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    fn notify(&self) {
        for subscriber in &self.subscribers {
            subscriber(&self.settings);
        }
    }

    pub fn set_theme(&mut self, theme: Theme) -> AppSettings {
        self.settings.theme = theme;
        self.notify();
        self.settings
    }

    pub fn toggle_theme(&mut self) -> AppSettings {
        self.set_theme(self.settings.theme.toggled())
    }

    pub fn set_language(&mut self, language: Language) -> AppSettings {
        self.settings.language = language;
        self.notify();
        self.settings
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}
