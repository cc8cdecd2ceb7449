//! Error taxonomy for outbound PostgREST calls.
//!
//! "Not found" is deliberately absent: singular lookups return `Ok(None)`
//! so callers can tell an empty result apart from a failed call.

/// Errors from the PostgREST client layer.
#[derive(Debug, thiserror::Error)]
pub enum PostgrestError {
    /// The client could not be built from the supplied configuration.
    #[error("Invalid PostgREST configuration: {0}")]
    Config(String),

    /// The HTTP request itself failed (connect, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status code.
    #[error("PostgREST error ({status}): {body}")]
    Upstream {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Raw response body (PostgREST error JSON, usually).
        body: String,
    },

    /// A 2xx response whose body does not match the expected shape.
    #[error("Failed to decode PostgREST response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        /// Raw body for debugging.
        body: String,
    },

    /// A write asked for `return=representation` but got no rows back.
    #[error("PostgREST returned no representation for {table}")]
    EmptyRepresentation { table: &'static str },
}

impl PostgrestError {
    /// `true` when the failure was a connect or read timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(err) if err.is_timeout())
    }
}
