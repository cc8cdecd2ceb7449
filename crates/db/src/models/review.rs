//! Product review models and DTOs.

use axelin_core::error::CoreError;
use axelin_core::patch::nullable;
use axelin_core::types::{DbId, EntityUuid, Timestamp};
use axelin_core::validation::{require_any_field, validate_rating, Validate};
use serde::{Deserialize, Serialize};

/// A row from the `reviews` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: DbId,
    pub product_id: EntityUuid,
    pub reviewer_id: EntityUuid,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReview {
    pub product_id: EntityUuid,
    pub reviewer_id: EntityUuid,
    pub rating: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Only the rating and comment of a review can change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateReview {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub comment: Option<Option<String>>,
}

impl Validate for CreateReview {
    fn validate(&self) -> Result<(), CoreError> {
        validate_rating(self.rating)
    }
}

impl Validate for UpdateReview {
    fn validate(&self) -> Result<(), CoreError> {
        require_any_field(&[self.rating.is_some(), self.comment.is_some()])?;
        match self.rating {
            Some(rating) => validate_rating(rating),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_checked_on_create_and_update() {
        let create = CreateReview {
            product_id: EntityUuid::nil(),
            reviewer_id: EntityUuid::nil(),
            rating: 6,
            comment: None,
        };
        assert!(create.validate().is_err());

        assert!(UpdateReview::default().validate().is_err());
        let clear_comment: UpdateReview =
            serde_json::from_value(serde_json::json!({ "comment": null })).unwrap();
        assert!(clear_comment.validate().is_ok());
        let update = UpdateReview {
            rating: Some(0),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }
}
