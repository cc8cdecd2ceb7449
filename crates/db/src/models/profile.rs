//! Public user profiles.
//!
//! A profile's id is the auth user's id, so unlike most tables it is
//! supplied by the caller on create.

use axelin_core::error::CoreError;
use axelin_core::patch::nullable;
use axelin_core::types::{EntityUuid, Timestamp};
use axelin_core::validation::{optional_non_blank, require_any_field, require_non_blank, Validate};
use serde::{Deserialize, Serialize};

/// A row from the `profiles` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: EntityUuid,
    pub username: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProfile {
    pub id: EntityUuid,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub bio: Option<Option<String>>,
}

impl Validate for CreateProfile {
    fn validate(&self) -> Result<(), CoreError> {
        require_non_blank("username", &self.username)
    }
}

impl Validate for UpdateProfile {
    fn validate(&self) -> Result<(), CoreError> {
        require_any_field(&[
            self.username.is_some(),
            self.avatar_url.is_some(),
            self.bio.is_some(),
        ])?;
        optional_non_blank("username", self.username.as_deref())
    }
}
