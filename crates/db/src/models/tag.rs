//! Tag models and DTOs.

use axelin_core::error::CoreError;
use axelin_core::patch::nullable;
use axelin_core::types::DbId;
use axelin_core::validation::{
    optional_non_blank, require_any_field, require_non_blank, validate_slug, Validate,
};
use serde::{Deserialize, Serialize};

/// A row from the `tags` table. `slug` is unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

/// DTO for creating a tag. Both `name` and `slug` are required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTag {
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// DTO for updating a tag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
}

impl Validate for CreateTag {
    fn validate(&self) -> Result<(), CoreError> {
        require_non_blank("name", &self.name)?;
        validate_slug(&self.slug)
    }
}

impl Validate for UpdateTag {
    fn validate(&self) -> Result<(), CoreError> {
        require_any_field(&[
            self.name.is_some(),
            self.slug.is_some(),
            self.description.is_some(),
        ])?;
        optional_non_blank("name", self.name.as_deref())?;
        match &self.slug {
            Some(slug) => validate_slug(slug),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_needs_slug() {
        let missing_slug = serde_json::from_value::<CreateTag>(serde_json::json!({ "name": "GPT" }));
        assert!(missing_slug.is_err());

        let tag: CreateTag =
            serde_json::from_value(serde_json::json!({ "name": "GPT", "slug": "gpt" })).unwrap();
        assert!(tag.validate().is_ok());
    }

    #[test]
    fn update_rejects_bad_slug() {
        let input = UpdateTag {
            slug: Some("Not A Slug".into()),
            ..Default::default()
        };
        assert!(input.validate().is_err());
    }
}
