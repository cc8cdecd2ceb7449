//! Typed client for a Supabase / PostgREST REST endpoint.
//!
//! [`PostgrestClient`] owns one preconfigured [`reqwest::Client`] (base URL,
//! `apikey` and bearer headers, timeouts). [`EntityProxy`] layers the five
//! CRUD operations on top of it for any table described by a [`Resource`].

pub mod client;
pub mod config;
pub mod error;
pub mod proxy;
pub mod query;

pub use client::PostgrestClient;
pub use config::PostgrestConfig;
pub use error::PostgrestError;
pub use proxy::{EntityProxy, Resource};
pub use query::{Order, Query};
