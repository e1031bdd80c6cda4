use crate::errors::AppError;
use crate::settings::{AppSettings, Language, Theme};
use crate::AppState;

pub fn get_settings(state: &AppState) -> Result<AppSettings, AppError> {
    Ok(state.settings()?.current())
}

/// İşıqlı/qaranlıq rejim açarı
pub fn toggle_theme(state: &AppState) -> Result<AppSettings, AppError> {
    Ok(state.settings()?.toggle_theme())
}

pub fn set_theme(state: &AppState, theme: Theme) -> Result<AppSettings, AppError> {
    Ok(state.settings()?.set_theme(theme))
}

/// Tətbiq dili (az / en / ru)
pub fn set_language(state: &AppState, language: Language) -> Result<AppSettings, AppError> {
    Ok(state.settings()?.set_language(language))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_light_and_azerbaijani() {
        let state = AppState::seeded();
        let settings = get_settings(&state).unwrap();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.language, Language::Az);
    }

    #[test]
    fn toggle_theme_roundtrip() {
        let state = AppState::seeded();
        assert_eq!(toggle_theme(&state).unwrap().theme, Theme::Dark);
        assert_eq!(toggle_theme(&state).unwrap().theme, Theme::Light);
    }

    #[test]
    fn language_selection_persists() {
        let state = AppState::seeded();
        set_language(&state, Language::Ru).unwrap();
        assert_eq!(get_settings(&state).unwrap().language, Language::Ru);
    }
}
