//! Category models and DTOs.
//!
//! Categories form a two-level tree through the optional `parent_id`.

use axelin_core::error::CoreError;
use axelin_core::patch::nullable;
use axelin_core::types::DbId;
use axelin_core::validation::{
    optional_non_blank, require_any_field, require_non_blank, validate_slug, Validate,
};
use serde::{Deserialize, Serialize};

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub parent_id: Option<DbId>,
    pub description: Option<String>,
    pub slug: Option<String>,
}

/// A main category with its sub-categories embedded
/// (`select=*,sub_categories:categories(*)`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTree {
    pub id: DbId,
    pub name: String,
    pub parent_id: Option<DbId>,
    pub description: Option<String>,
    pub slug: Option<String>,
    #[serde(default)]
    pub sub_categories: Vec<Category>,
}

/// DTO for creating a category. `parent_id` makes it a sub-category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<DbId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// DTO for updating a category. Absent fields are left unchanged; an explicit
/// `null` clears a nullable column (`parent_id: null` promotes to a main category).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Option<DbId>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub slug: Option<Option<String>>,
}

impl Validate for CreateCategory {
    fn validate(&self) -> Result<(), CoreError> {
        require_non_blank("name", &self.name)?;
        if let Some(slug) = &self.slug {
            validate_slug(slug)?;
        }
        Ok(())
    }
}

impl Validate for UpdateCategory {
    fn validate(&self) -> Result<(), CoreError> {
        require_any_field(&[
            self.name.is_some(),
            self.parent_id.is_some(),
            self.description.is_some(),
            self.slug.is_some(),
        ])?;
        optional_non_blank("name", self.name.as_deref())?;
        if let Some(Some(slug)) = &self.slug {
            validate_slug(slug)?;
        }
        Ok(())
    }
}
