//! AI tool catalog models and DTOs.

use axelin_core::error::CoreError;
use axelin_core::patch::nullable;
use axelin_core::types::{DbId, Timestamp};
use axelin_core::validation::{optional_non_blank, require_any_field, require_non_blank, Validate};
use serde::{Deserialize, Serialize};

/// A row from the `ai_tools` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiTool {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub website_url: Option<String>,
    pub logo_url: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAiTool {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAiTool {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub website_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<Option<String>>,
}

impl Validate for CreateAiTool {
    fn validate(&self) -> Result<(), CoreError> {
        require_non_blank("name", &self.name)
    }
}

impl Validate for UpdateAiTool {
    fn validate(&self) -> Result<(), CoreError> {
        require_any_field(&[
            self.name.is_some(),
            self.description.is_some(),
            self.website_url.is_some(),
            self.logo_url.is_some(),
        ])?;
        optional_non_blank("name", self.name.as_deref())
    }
}
