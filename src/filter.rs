//! List filtering for the discount and branch tables.
//!
//! Both filters take a snapshot, apply the search and status predicates
//! ANDed together and return a subsequence in the original order.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::branch::Branch;
use crate::models::discount::{Discount, DiscountStatus};

/// Status dropdown value; `All` bypasses the status predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Draft,
    Upcoming,
    Active,
    Expired,
}

impl StatusFilter {
    fn matches(&self, status: DiscountStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Draft => status == DiscountStatus::Draft,
            StatusFilter::Upcoming => status == DiscountStatus::Upcoming,
            StatusFilter::Active => status == DiscountStatus::Active,
            StatusFilter::Expired => status == DiscountStatus::Expired,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: StatusFilter,
}

/// Case-insensitive substring match. An empty needle accepts everything.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Filter discounts by title search and derived status.
pub fn filter_discounts(
    items: &[Discount],
    query: &DiscountQuery,
    today: NaiveDate,
) -> Result<Vec<Discount>, AppError> {
    let needle = query.search.trim();

    let mut out = Vec::new();
    for discount in items {
        if !contains_ci(&discount.title, needle) {
            continue;
        }
        if !query.status.matches(discount.status(today)?) {
            continue;
        }
        out.push(discount.clone());
    }

    Ok(out)
}

/// Filter branches by search against name or address — a branch passes
/// when either field contains the term.
pub fn filter_branches(items: &[Branch], search: &str) -> Vec<Branch> {
    let needle = search.trim();

    items
        .iter()
        .filter(|branch| {
            contains_ci(&branch.name, needle) || contains_ci(&branch.address, needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::seed_data;
    use chrono::Utc;

    fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    #[test]
    fn empty_query_is_identity() {
        let data = seed_data();
        let filtered = filter_discounts(&data.discounts, &DiscountQuery::default(), today())
            .unwrap();

        assert_eq!(filtered.len(), data.discounts.len());
        let ids: Vec<&str> = filtered.iter().map(|d| d.id.as_str()).collect();
        let expected: Vec<&str> = data.discounts.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn search_is_case_insensitive() {
        let data = seed_data();
        let found = filter_branches(&data.branches, "niz");
        assert!(found.iter().any(|b| b.name == "Nizami Filialı"));

        let found = filter_branches(&data.branches, "NIZAMI");
        assert!(found.iter().any(|b| b.name == "Nizami Filialı"));
    }

    #[test]
    fn branch_search_matches_address_too() {
        let data = seed_data();
        let found = filter_branches(&data.branches, "sumqayıt");
        // "Sumqayıt Filialı" matches on name, and its address also contains
        // the city, but a pure-address term must match as well.
        assert!(!found.is_empty());

        let found = filter_branches(&data.branches, "xoyski");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Gənclik Filialı");
    }

    #[test]
    fn predicates_are_anded() {
        let data = seed_data();
        let query = DiscountQuery {
            search: "endirim".to_string(),
            status: StatusFilter::Expired,
        };
        let filtered = filter_discounts(&data.discounts, &query, today()).unwrap();

        for discount in &filtered {
            assert!(discount.title.to_lowercase().contains("endirim"));
            assert_eq!(
                discount.status(today()).unwrap(),
                crate::models::discount::DiscountStatus::Expired
            );
        }
    }

    #[test]
    fn status_filter_draft_only() {
        let data = seed_data();
        let query = DiscountQuery {
            search: String::new(),
            status: StatusFilter::Draft,
        };
        let filtered = filter_discounts(&data.discounts, &query, today()).unwrap();
        assert!(filtered.iter().all(|d| d.is_draft));
        assert!(!filtered.is_empty());
    }

    #[test]
    fn filtering_twice_yields_identical_output() {
        let data = seed_data();
        let query = DiscountQuery {
            search: "50".to_string(),
            status: StatusFilter::Active,
        };
        let a = filter_discounts(&data.discounts, &query, today()).unwrap();
        let b = filter_discounts(&data.discounts, &query, today()).unwrap();

        let ids_a: Vec<&str> = a.iter().map(|d| d.id.as_str()).collect();
        let ids_b: Vec<&str> = b.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids_a, ids_b);
    }
}
