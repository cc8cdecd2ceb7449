//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` + `Deserialize` entity struct matching the PostgREST row
//! - A create DTO without server-assigned fields
//! - An update DTO (all `Option` fields, absent ones are not sent)

pub mod ai_tool;
pub mod category;
pub mod country;
pub mod order;
pub mod order_item;
pub mod product;
pub mod profile;
pub mod review;
pub mod tag;
