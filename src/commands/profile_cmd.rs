use crate::advisory::Advisory;
use crate::editor::FormDraft;
use crate::errors::AppError;
use crate::models::profile::{MerchantProfile, UpdateProfilePayload};
use crate::AppState;

pub fn get_profile(state: &AppState) -> Result<MerchantProfile, AppError> {
    Ok(state.repo()?.profile())
}

/// Brend profilini tam-form commit ilə yenilə
pub fn update_profile(
    state: &AppState,
    payload: UpdateProfilePayload,
) -> Result<MerchantProfile, AppError> {
    let existing = state.repo()?.profile();

    let mut draft = FormDraft::seeded(existing);
    draft.edit(|p| {
        p.brand_name = payload.brand_name.clone();
        p.description = payload.description.clone();
        p.category = payload.category.clone();
        p.email = payload.email.clone();
        p.phone = payload.phone.clone();
        p.website = payload.website.clone();
        p.social_links = payload.social_links.clone();
        p.logo = payload.logo.clone();
    });

    let committed = draft.commit()?;
    let saved = state.repo()?.save_profile(committed);

    crate::log_info!("PROFILE", "merchant profile updated");
    state.advise(Advisory::success(
        "Profil yeniləndi",
        "Brend məlumatlarınız uğurla saxlanıldı.",
    ))?;

    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload_from(profile: &MerchantProfile) -> UpdateProfilePayload {
        UpdateProfilePayload {
            brand_name: profile.brand_name.clone(),
            description: profile.description.clone(),
            category: profile.category.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            website: profile.website.clone(),
            social_links: profile.social_links.clone(),
            logo: profile.logo.clone(),
        }
    }

    #[test]
    fn update_replaces_the_stored_profile() {
        let state = AppState::seeded();
        let mut payload = payload_from(&get_profile(&state).unwrap());
        payload.brand_name = "Araz Supermarket".to_string();

        let saved = update_profile(&state, payload).unwrap();
        assert_eq!(saved.brand_name, "Araz Supermarket");
        assert_eq!(
            get_profile(&state).unwrap().brand_name,
            "Araz Supermarket"
        );
    }

    #[test]
    fn invalid_email_aborts_without_partial_write() {
        let state = AppState::seeded();
        let before = get_profile(&state).unwrap();

        let mut payload = payload_from(&before);
        payload.brand_name = "Dəyişmiş Ad".to_string();
        payload.email = "pis-email".to_string();

        let err = update_profile(&state, payload).unwrap_err();
        match err {
            AppError::Validation(errors) => assert_eq!(errors.fields(), vec!["email"]),
            other => panic!("expected validation error, got {other}"),
        }

        // No partial write: the staged brand name change did not land.
        assert_eq!(get_profile(&state).unwrap().brand_name, before.brand_name);
    }
}
