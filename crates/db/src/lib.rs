//! Data-access layer over the Supabase PostgREST API.
//!
//! `models` holds the row and DTO types for each table; `repositories`
//! binds each table to [`axelin_postgrest::Resource`] and adds the
//! filtered queries the API exposes beyond plain CRUD.

pub mod models;
pub mod repositories;

pub use axelin_postgrest::{PostgrestClient, PostgrestConfig, PostgrestError};
