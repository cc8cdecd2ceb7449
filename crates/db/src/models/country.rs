//! Country reference data.

use axelin_core::error::CoreError;
use axelin_core::types::DbId;
use axelin_core::validation::{optional_non_blank, require_any_field, require_non_blank, Validate};
use serde::{Deserialize, Serialize};

/// A row from the `countries` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub id: DbId,
    pub name: String,
    /// ISO 3166-1 code, e.g. `KR`.
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCountry {
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCountry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl Validate for CreateCountry {
    fn validate(&self) -> Result<(), CoreError> {
        require_non_blank("name", &self.name)?;
        require_non_blank("code", &self.code)
    }
}

impl Validate for UpdateCountry {
    fn validate(&self) -> Result<(), CoreError> {
        require_any_field(&[self.name.is_some(), self.code.is_some()])?;
        optional_non_blank("name", self.name.as_deref())?;
        optional_non_blank("code", self.code.as_deref())
    }
}
