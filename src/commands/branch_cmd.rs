use crate::advisory::Advisory;
use crate::editor::FormDraft;
use crate::errors::AppError;
use crate::filter;
use crate::models::branch::{
    Branch, BranchStatus, CreateBranchPayload, UpdateBranchPayload,
};
use crate::store::repository::next_id;
use crate::AppState;

/// Filial siyahısı — ad və ya ünvan üzrə axtarışla
pub fn get_branches(state: &AppState, search: &str) -> Result<Vec<Branch>, AppError> {
    let repo = state.repo()?;
    let snapshot = repo.branches.list();
    drop(repo);

    Ok(filter::filter_branches(&snapshot, search))
}

pub fn get_branch(state: &AppState, id: &str) -> Result<Branch, AppError> {
    state
        .repo()?
        .branches
        .get(id)
        .ok_or_else(|| AppError::NotFound("Filial tapılmadı".into()))
}

/// Yeni filial yarat
pub fn create_branch(state: &AppState, payload: CreateBranchPayload) -> Result<Branch, AppError> {
    let branch = Branch {
        id: next_id(),
        name: payload.name,
        address: payload.address,
        phone: payload.phone,
        lat: payload.lat,
        lng: payload.lng,
        status: BranchStatus::Active,
    };

    let committed = FormDraft::seeded(branch).commit()?;
    let saved = state.repo()?.branches.save(committed);

    crate::log_info!("BRANCH", "branch created", serde_json::json!({
        "id": saved.id,
    }));
    state.advise(Advisory::success(
        "Filial yaradıldı",
        "Yeni filial uğurla əlavə olundu.",
    ))?;

    Ok(saved)
}

/// Mövcud filialı tam-form commit ilə yenilə
pub fn update_branch(
    state: &AppState,
    id: &str,
    payload: UpdateBranchPayload,
) -> Result<Branch, AppError> {
    let existing = state
        .repo()?
        .branches
        .get(id)
        .ok_or_else(|| AppError::NotFound("Filial tapılmadı".into()))?;

    let mut draft = FormDraft::seeded(existing);
    draft.edit(|b| {
        b.name = payload.name.clone();
        b.address = payload.address.clone();
        b.phone = payload.phone.clone();
        b.lat = payload.lat;
        b.lng = payload.lng;
        b.status = if payload.is_active {
            BranchStatus::Active
        } else {
            BranchStatus::Inactive
        };
    });

    let committed = draft.commit()?;
    let saved = state.repo()?.branches.save(committed);

    crate::log_info!("BRANCH", "branch updated", serde_json::json!({
        "id": saved.id,
    }));
    state.advise(Advisory::success(
        "Filial yeniləndi",
        "Dəyişikliklər uğurla saxlanıldı.",
    ))?;

    Ok(saved)
}

/// Filialın statusunu aktiv/deaktiv arasında dəyiş
pub fn toggle_branch(state: &AppState, id: &str) -> Result<BranchStatus, AppError> {
    let mut repo = state.repo()?;
    let mut branch = repo
        .branches
        .get(id)
        .ok_or_else(|| AppError::NotFound("Filial tapılmadı".into()))?;

    branch.status = branch.status.toggled();
    let new_status = branch.status;
    repo.branches.save(branch);
    drop(repo);

    crate::log_info!("BRANCH", "branch status toggled", serde_json::json!({
        "id": id,
        "status": new_status.as_str(),
    }));

    Ok(new_status)
}
