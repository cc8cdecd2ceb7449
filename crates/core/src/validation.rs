//! Input validation rules applied to create/update payloads.
//!
//! Every check runs before a request is forwarded upstream, so a rejected
//! payload never costs a round trip.

use crate::error::CoreError;
use crate::types::{DbId, Decimal};

/// Lowest accepted review rating.
pub const MIN_RATING: i32 = 1;

/// Highest accepted review rating.
pub const MAX_RATING: i32 = 5;

/// Payload-level checks, implemented by every create/update DTO.
pub trait Validate {
    fn validate(&self) -> Result<(), CoreError>;
}

/// Reject empty or whitespace-only values for a required text field.
pub fn require_non_blank(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be blank")));
    }
    Ok(())
}

/// Same as [`require_non_blank`], but only when the field is present.
pub fn optional_non_blank(field: &str, value: Option<&str>) -> Result<(), CoreError> {
    match value {
        Some(v) => require_non_blank(field, v),
        None => Ok(()),
    }
}

/// Validate a URL slug: lowercase ASCII letters and digits separated by
/// single hyphens, with no leading or trailing hyphen.
///
/// ```
/// use axelin_core::validation::validate_slug;
///
/// assert!(validate_slug("large-language-models").is_ok());
/// assert!(validate_slug("LLMs").is_err());
/// assert!(validate_slug("a--b").is_err());
/// ```
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    let well_formed = !slug.is_empty()
        && slug
            .split('-')
            .all(|part| {
                !part.is_empty()
                    && part
                        .chars()
                        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            });

    if !well_formed {
        return Err(CoreError::Validation(format!(
            "slug '{slug}' must be lowercase letters and digits separated by single hyphens"
        )));
    }
    Ok(())
}

/// Review ratings are whole stars from [`MIN_RATING`] to [`MAX_RATING`].
pub fn validate_rating(rating: i32) -> Result<(), CoreError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(CoreError::Validation(format!(
            "rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )));
    }
    Ok(())
}

/// An update must change at least one column; `present` holds one flag per
/// field of the payload.
pub fn require_any_field(present: &[bool]) -> Result<(), CoreError> {
    if !present.contains(&true) {
        return Err(CoreError::Validation(
            "update must set at least one field".to_string(),
        ));
    }
    Ok(())
}

/// Monetary amounts may be zero (free products) but never negative.
///
/// The sign is read from the literal digits, so values beyond `f64` range
/// are judged the same way as small ones.
pub fn validate_non_negative(field: &str, value: &Decimal) -> Result<(), CoreError> {
    if is_negative(&value.to_string()) {
        return Err(CoreError::Validation(format!(
            "{field} must not be negative, got {value}"
        )));
    }
    Ok(())
}

/// `-` followed by a mantissa with at least one non-zero digit. `-0`,
/// `-0.00` and `-0e9` are zero.
fn is_negative(literal: &str) -> bool {
    let Some(unsigned) = literal.strip_prefix('-') else {
        return false;
    };
    unsigned
        .split(['e', 'E'])
        .next()
        .is_some_and(|mantissa| mantissa.chars().any(|c| matches!(c, '1'..='9')))
}

/// A category cannot be re-parented onto itself.
pub fn validate_parent(id: DbId, parent_id: Option<DbId>) -> Result<(), CoreError> {
    if parent_id == Some(id) {
        return Err(CoreError::Validation(format!(
            "category {id} cannot be its own parent"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_rejected() {
        assert!(require_non_blank("name", "LLMs").is_ok());
        assert!(require_non_blank("name", "").is_err());
        assert!(require_non_blank("name", "   \t").is_err());
    }

    #[test]
    fn optional_blank_only_checked_when_present() {
        assert!(optional_non_blank("name", None).is_ok());
        assert!(optional_non_blank("name", Some("x")).is_ok());
        assert!(optional_non_blank("name", Some(" ")).is_err());
    }

    #[test]
    fn blank_error_names_the_field() {
        let err = require_non_blank("title", "").unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: title must not be blank");
    }

    #[test]
    fn slug_rules() {
        assert!(validate_slug("gpt4").is_ok());
        assert!(validate_slug("image-generation-2").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("-leading").is_err());
        assert!(validate_slug("trailing-").is_err());
        assert!(validate_slug("has space").is_err());
        assert!(validate_slug("Upper").is_err());
        assert!(validate_slug("under_score").is_err());
    }

    #[test]
    fn rating_bounds_inclusive() {
        assert!(validate_rating(MIN_RATING).is_ok());
        assert!(validate_rating(MAX_RATING).is_ok());
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
        assert!(validate_rating(-3).is_err());
    }

    #[test]
    fn negative_amounts_rejected() {
        let zero: Decimal = serde_json::from_str("0").unwrap();
        let price: Decimal = serde_json::from_str("19.99").unwrap();
        let negative: Decimal = serde_json::from_str("-0.01").unwrap();

        assert!(validate_non_negative("price", &zero).is_ok());
        assert!(validate_non_negative("price", &price).is_ok());
        assert!(validate_non_negative("price", &negative).is_err());
    }

    #[test]
    fn sign_read_from_digits_beyond_f64_range() {
        let amount = |literal: &str| -> Decimal { serde_json::from_str(literal).unwrap() };

        assert!(validate_non_negative("price", &amount("-1e400")).is_err());
        assert!(validate_non_negative("price", &amount("-0.000000000000000000001")).is_err());
        assert!(validate_non_negative("price", &amount("1e400")).is_ok());
        assert!(validate_non_negative("price", &amount("-0.00")).is_ok());
        assert!(validate_non_negative("price", &amount("-0e5")).is_ok());
    }

    #[test]
    fn empty_update_rejected() {
        assert!(require_any_field(&[]).is_err());
        assert!(require_any_field(&[false, false]).is_err());
        assert!(require_any_field(&[false, true]).is_ok());
    }

    #[test]
    fn self_parent_rejected() {
        assert!(validate_parent(3, None).is_ok());
        assert!(validate_parent(3, Some(1)).is_ok());
        assert!(validate_parent(3, Some(3)).is_err());
    }
}
