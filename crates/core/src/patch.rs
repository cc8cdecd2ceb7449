//! Serde support for partial-update payloads.
//!
//! A nullable column in an update DTO has three states: absent (leave the
//! column alone), `null` (clear it) and a value. They map onto
//! `Option<Option<T>>` as `None`, `Some(None)` and `Some(Some(v))`.
//!
//! ```
//! use axelin_core::patch::nullable;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Update {
//!     #[serde(default, deserialize_with = "nullable")]
//!     bio: Option<Option<String>>,
//! }
//!
//! let absent: Update = serde_json::from_str("{}").unwrap();
//! let cleared: Update = serde_json::from_str(r#"{"bio":null}"#).unwrap();
//! assert_eq!(absent.bio, None);
//! assert_eq!(cleared.bio, Some(None));
//! ```

use serde::{Deserialize, Deserializer};

/// `deserialize_with` target for `Option<Option<T>>` fields.
///
/// Only runs when the key is present, so an explicit `null` becomes
/// `Some(None)`. Pair it with `#[serde(default)]` for the absent case.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
