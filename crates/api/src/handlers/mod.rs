//! Request handlers.
//!
//! [`crud`] holds the generic list/get/create/update/delete handlers that
//! every resource shares. The remaining submodules add the table-specific
//! queries, delegating to the matching repository in `axelin_db` and mapping
//! errors via [`crate::error::AppError`].

pub mod categories;
pub mod crud;
pub mod orders;
pub mod products;
pub mod tags;
