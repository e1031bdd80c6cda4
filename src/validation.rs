//! Input validation module
//!
//! Centralized field validation for:
//! - Discount forms (title, category, percent, date range)
//! - Branch forms (name, address, phone, coordinates)
//! - Merchant profile forms (brand name, email, phone)
//!
//! Messages are the user-facing Azerbaijani strings the presentation
//! layer shows inline next to the failing field.

use chrono::NaiveDate;

use crate::errors::FieldErrors;
use crate::models::branch::Branch;
use crate::models::discount::Discount;
use crate::models::profile::MerchantProfile;

/// Validation result type
pub type ValidationResult = Result<(), String>;

/// Whole-entity validation run by an editor at commit time. Collects
/// every failing field instead of stopping at the first.
pub trait Validate {
    fn validate(&self) -> FieldErrors;
}

impl Validate for Discount {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        errors.check("title", validate_title(&self.title));
        errors.check("category", validate_category(&self.category));
        errors.check("discountPercent", validate_discount_percent(self.discount_percent));
        errors.check("startDate", validate_date_range(self.start_date, self.end_date));
        errors
    }
}

impl Validate for Branch {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        errors.check("name", validate_required(&self.name, "Filial adı"));
        errors.check("address", validate_required(&self.address, "Ünvan"));
        errors.check("phone", validate_phone(&self.phone));
        errors.check("lat", validate_latitude(self.lat));
        errors.check("lng", validate_longitude(self.lng));
        errors
    }
}

impl Validate for MerchantProfile {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        errors.check("brandName", validate_required(&self.brand_name, "Brend adı"));
        errors.check("email", validate_email(&self.email));
        errors.check("phone", validate_phone(&self.phone));
        errors
    }
}

/// Validate a required text field
pub fn validate_required(value: &str, label: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return Err(format!("{} boş ola bilməz", label));
    }

    Ok(())
}

/// Validate a discount title
/// - Length: 2-120 characters
pub fn validate_title(title: &str) -> ValidationResult {
    let trimmed = title.trim();

    if trimmed.is_empty() {
        return Err("Başlıq boş ola bilməz".into());
    }

    if trimmed.chars().count() < 2 || trimmed.chars().count() > 120 {
        return Err("Başlıq 2-120 simvol olmalıdır".into());
    }

    Ok(())
}

/// Validate a category against the configured list
pub fn validate_category(category: &str) -> ValidationResult {
    if category.trim().is_empty() {
        return Err("Kateqoriya seçilməlidir".into());
    }

    if !crate::config::get_config().is_known_category(category) {
        return Err(format!("Naməlum kateqoriya: {}", category));
    }

    Ok(())
}

/// Validate a discount percent, domain [1, 100]
pub fn validate_discount_percent(percent: i32) -> ValidationResult {
    if !(1..=100).contains(&percent) {
        return Err("Endirim faizi 1-100 aralığında olmalıdır".into());
    }

    Ok(())
}

/// Validate a discount date range (inclusive, start must not pass end)
pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> ValidationResult {
    if start > end {
        return Err("Başlama tarixi bitmə tarixindən sonra ola bilməz".into());
    }

    Ok(())
}

/// Validate a phone number
/// - 8-15 digits after stripping separators
pub fn validate_phone(phone: &str) -> ValidationResult {
    let trimmed = phone.trim();

    if trimmed.is_empty() {
        return Err("Telefon boş ola bilməz".into());
    }

    if !trimmed.chars().all(|c| c.is_numeric() || "+- ()".contains(c)) {
        return Err("Telefon nömrəsi düzgün formatda deyil".into());
    }

    let digits = trimmed.chars().filter(|c| c.is_numeric()).count();

    if !(8..=15).contains(&digits) {
        return Err("Telefon nömrəsi 8-15 rəqəm olmalıdır".into());
    }

    Ok(())
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    let trimmed = email.trim();

    if trimmed.is_empty() {
        return Err("E-poçt boş ola bilməz".into());
    }

    let Some((local, domain)) = trimmed.split_once('@') else {
        return Err("E-poçt '@' simvolu ehtiva etməlidir".into());
    };

    if local.is_empty() || local.len() > 64 || domain.contains('@') {
        return Err("E-poçt formatı düzgün deyil".into());
    }

    if !domain.contains('.') {
        return Err("E-poçt domeni düzgün deyil".into());
    }

    Ok(())
}

/// Validate a latitude, domain [-90, 90]
pub fn validate_latitude(lat: f64) -> ValidationResult {
    if lat.is_nan() || !(-90.0..=90.0).contains(&lat) {
        return Err("Enlik -90 ilə 90 aralığında olmalıdır".into());
    }

    Ok(())
}

/// Validate a longitude, domain [-180, 180]
pub fn validate_longitude(lng: f64) -> ValidationResult {
    if lng.is_nan() || !(-180.0..=180.0).contains(&lng) {
        return Err("Uzunluq -180 ilə 180 aralığında olmalıdır".into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank() {
        assert!(validate_required("  ", "Ad").is_err());
        assert!(validate_required("Nizami Filialı", "Ad").is_ok());
    }

    #[test]
    fn percent_bounds_are_inclusive() {
        assert!(validate_discount_percent(0).is_err());
        assert!(validate_discount_percent(1).is_ok());
        assert!(validate_discount_percent(100).is_ok());
        assert!(validate_discount_percent(101).is_err());
    }

    #[test]
    fn date_range_allows_single_day() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert!(validate_date_range(day, day).is_ok());
        assert!(validate_date_range(day.succ_opt().unwrap(), day).is_err());
    }

    #[test]
    fn coordinates_out_of_bounds() {
        assert!(validate_latitude(95.0).is_err());
        assert!(validate_latitude(-90.0).is_ok());
        assert!(validate_longitude(180.0).is_ok());
        assert!(validate_longitude(-181.0).is_err());
        assert!(validate_latitude(f64::NAN).is_err());
    }

    #[test]
    fn phone_digit_counting() {
        assert!(validate_phone("+994 50 123 45 67").is_ok());
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("phone").is_err());
    }

    #[test]
    fn email_basic_shape() {
        assert!(validate_email("info@bolt.az").is_ok());
        assert!(validate_email("bolt.az").is_err());
        assert!(validate_email("a@b").is_err());
    }
}
