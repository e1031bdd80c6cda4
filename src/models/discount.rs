use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Endirimin həyat dövrü statusu — tarixlərdən törədilir.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountStatus {
    Draft,
    Upcoming,
    Active,
    Expired,
}

impl DiscountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountStatus::Draft => "draft",
            DiscountStatus::Upcoming => "upcoming",
            DiscountStatus::Active => "active",
            DiscountStatus::Expired => "expired",
        }
    }

    /// UI label shown on the status badge
    pub fn label(&self) -> &'static str {
        match self {
            DiscountStatus::Draft => "Qaralama",
            DiscountStatus::Upcoming => "Gələcək",
            DiscountStatus::Active => "Aktiv",
            DiscountStatus::Expired => "Bitmiş",
        }
    }
}

/// Derive a discount's lifecycle status from its draft flag and date range.
///
/// The draft flag dominates the dates. Both range boundaries are inclusive,
/// so a single-day discount evaluated on its date is `Active`. An inverted
/// range is a data error here; the editors reject it before an entity can
/// be committed.
pub fn derive_status(
    is_draft: bool,
    start: NaiveDate,
    end: NaiveDate,
    today: NaiveDate,
) -> Result<DiscountStatus, AppError> {
    if is_draft {
        return Ok(DiscountStatus::Draft);
    }

    if start > end {
        return Err(AppError::Internal(format!(
            "inverted discount date range: {} > {}",
            start, end
        )));
    }

    if today < start {
        Ok(DiscountStatus::Upcoming)
    } else if today > end {
        Ok(DiscountStatus::Expired)
    } else {
        Ok(DiscountStatus::Active)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub discount_percent: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Branch ids this discount applies to (unique, order irrelevant)
    pub branches: Vec<String>,
    /// Explicit draft flag — overrides date-based status derivation
    pub is_draft: bool,
    /// Read-only analytics counters, mutated by external collaborators
    pub views: u32,
    pub favorites: u32,
    pub nearby_clicks: u32,
    /// Image reference (URI or data blob)
    pub image: String,
}

impl Discount {
    pub fn status(&self, today: NaiveDate) -> Result<DiscountStatus, AppError> {
        derive_status(self.is_draft, self.start_date, self.end_date, today)
    }
}

/// Drop duplicate branch ids, keeping first-seen order.
pub fn normalize_branches(branches: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(branches.len());
    for id in branches {
        if !seen.contains(&id) {
            seen.push(id);
        }
    }
    seen
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDiscountPayload {
    pub title: String,
    pub description: String,
    pub category: String,
    pub discount_percent: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub branches: Vec<String>,
    pub image: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDiscountPayload {
    pub title: String,
    pub description: String,
    pub category: String,
    pub discount_percent: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub branches: Vec<String>,
    pub image: String,
}
