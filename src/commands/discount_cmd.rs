use chrono::{NaiveDate, Utc};
use serde::Serialize;

use crate::advisory::Advisory;
use crate::editor::FormDraft;
use crate::errors::AppError;
use crate::filter::{self, DiscountQuery};
use crate::models::branch::Branch;
use crate::models::discount::{
    normalize_branches, CreateDiscountPayload, Discount, DiscountStatus, UpdateDiscountPayload,
};
use crate::store::repository::next_id;
use crate::AppState;

/// Endirim + onun törədilmiş statusu — cədvəl sətri üçün.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountView {
    #[serde(flatten)]
    pub discount: Discount,
    pub status: DiscountStatus,
}

impl DiscountView {
    fn build(discount: Discount, today: NaiveDate) -> Result<Self, AppError> {
        let status = discount.status(today)?;
        Ok(Self { discount, status })
    }
}

/// Detal səhifəsi: endirim + həll olunmuş filiallar.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountDetails {
    #[serde(flatten)]
    pub view: DiscountView,
    pub branches: Vec<Branch>,
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Endirim siyahısı — axtarış və status filtri ilə
pub fn get_discounts(
    state: &AppState,
    query: &DiscountQuery,
) -> Result<Vec<DiscountView>, AppError> {
    let repo = state.repo()?;
    let snapshot = repo.discounts.list();
    drop(repo);

    let today = today();
    filter::filter_discounts(&snapshot, query, today)?
        .into_iter()
        .map(|d| DiscountView::build(d, today))
        .collect()
}

/// Bir endirimin detalları, filialları həll olunmuş halda
pub fn get_discount(state: &AppState, id: &str) -> Result<DiscountDetails, AppError> {
    let repo = state.repo()?;
    let discount = repo
        .discounts
        .get(id)
        .ok_or_else(|| AppError::NotFound("Endirim tapılmadı".into()))?;
    let branches = repo.resolve_branches(&discount.branches);
    drop(repo);

    Ok(DiscountDetails {
        view: DiscountView::build(discount, today())?,
        branches,
    })
}

/// Yeni endirim yarat — həmişə qaralama kimi başlayır
pub fn create_discount(
    state: &AppState,
    payload: CreateDiscountPayload,
) -> Result<DiscountView, AppError> {
    let discount = Discount {
        id: next_id(),
        title: payload.title,
        description: payload.description,
        category: payload.category,
        discount_percent: payload.discount_percent,
        start_date: payload.start_date,
        end_date: payload.end_date,
        branches: normalize_branches(payload.branches),
        is_draft: true,
        views: 0,
        favorites: 0,
        nearby_clicks: 0,
        image: payload.image,
    };

    let committed = FormDraft::seeded(discount).commit()?;
    let saved = state.repo()?.discounts.save(committed);

    crate::log_info!("DISCOUNT", "discount created", serde_json::json!({
        "id": saved.id,
    }));
    state.advise(Advisory::success(
        "Endirim yaradıldı",
        "Endirim qaralama kimi saxlanıldı.",
    ))?;

    DiscountView::build(saved, today())
}

/// Mövcud endirimi tam-form commit ilə yenilə
pub fn update_discount(
    state: &AppState,
    id: &str,
    payload: UpdateDiscountPayload,
) -> Result<DiscountView, AppError> {
    let existing = state
        .repo()?
        .discounts
        .get(id)
        .ok_or_else(|| AppError::NotFound("Endirim tapılmadı".into()))?;

    // Counters and the draft flag are not form fields; the working copy
    // keeps them from the repository value.
    let mut draft = FormDraft::seeded(existing);
    draft.edit(|d| {
        d.title = payload.title.clone();
        d.description = payload.description.clone();
        d.category = payload.category.clone();
        d.discount_percent = payload.discount_percent;
        d.start_date = payload.start_date;
        d.end_date = payload.end_date;
        d.branches = normalize_branches(payload.branches.clone());
        d.image = payload.image.clone();
    });

    let committed = draft.commit()?;
    let saved = state.repo()?.discounts.save(committed);

    crate::log_info!("DISCOUNT", "discount updated", serde_json::json!({
        "id": saved.id,
    }));
    state.advise(Advisory::success(
        "Endirim yeniləndi",
        "Dəyişikliklər uğurla saxlanıldı.",
    ))?;

    DiscountView::build(saved, today())
}

/// Qaralamanı dərc et — draft bayrağını sıfırlayır
pub fn publish_discount(state: &AppState, id: &str) -> Result<DiscountView, AppError> {
    let existing = state
        .repo()?
        .discounts
        .get(id)
        .ok_or_else(|| AppError::NotFound("Endirim tapılmadı".into()))?;

    let mut draft = FormDraft::seeded(existing);
    draft.edit(|d| d.is_draft = false);

    let committed = draft.commit()?;
    let saved = state.repo()?.discounts.save(committed);

    crate::log_info!("DISCOUNT", "discount published", serde_json::json!({
        "id": saved.id,
    }));
    state.advise(Advisory::success(
        "Endirim dərc olundu",
        "Endirim artıq istifadəçilərə görünür.",
    ))?;

    DiscountView::build(saved, today())
}
