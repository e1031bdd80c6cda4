use chrono::{Duration, NaiveDate, Utc};
use serde::Serialize;

use crate::commands::discount_cmd::DiscountView;
use crate::errors::AppError;
use crate::models::discount::DiscountStatus;
use crate::AppState;

/// İdarə paneli üçün ümumi göstəricilər.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub active_discounts: usize,
    pub upcoming_discounts: usize,
    /// Active discounts ending within the next 7 days
    pub expiring_discounts: usize,
    pub total_views: u64,
    pub total_favorites: u64,
    pub total_nearby_clicks: u64,
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// İdarə paneli statistikası
pub fn get_dashboard_stats(state: &AppState) -> Result<DashboardStats, AppError> {
    let snapshot = state.repo()?.discounts.list();
    let today = today();
    let expiring_cutoff = today + Duration::days(7);

    let mut stats = DashboardStats {
        active_discounts: 0,
        upcoming_discounts: 0,
        expiring_discounts: 0,
        total_views: 0,
        total_favorites: 0,
        total_nearby_clicks: 0,
    };

    for discount in &snapshot {
        match discount.status(today)? {
            DiscountStatus::Active => {
                stats.active_discounts += 1;
                if discount.end_date <= expiring_cutoff {
                    stats.expiring_discounts += 1;
                }
            }
            DiscountStatus::Upcoming => stats.upcoming_discounts += 1,
            DiscountStatus::Draft | DiscountStatus::Expired => {}
        }

        stats.total_views += u64::from(discount.views);
        stats.total_favorites += u64::from(discount.favorites);
        stats.total_nearby_clicks += u64::from(discount.nearby_clicks);
    }

    Ok(stats)
}

/// Son endirimlər — panelin qısa siyahısı üçün
pub fn get_recent_discounts(state: &AppState, limit: usize) -> Result<Vec<DiscountView>, AppError> {
    let snapshot = state.repo()?.discounts.list();
    let today = today();

    snapshot
        .into_iter()
        .take(limit)
        .map(|d| {
            let status = d.status(today)?;
            Ok(DiscountView {
                discount: d,
                status,
            })
        })
        .collect()
}
