//! Domain primitives shared by every Axelin crate.
//!
//! Pure logic only: the error taxonomy, common type aliases and the input
//! validation rules applied before anything is forwarded upstream.

pub mod error;
pub mod patch;
pub mod types;
pub mod validation;
