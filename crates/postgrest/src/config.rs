use std::fmt;
use std::time::Duration;

/// Default connect timeout for outbound calls.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default total request timeout for outbound calls.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Path under the project URL where Supabase exposes PostgREST.
const REST_PATH: &str = "/rest/v1";

/// Connection settings for one PostgREST backend.
///
/// Passed by value into [`crate::PostgrestClient::new`]; nothing is read
/// from the environment here.
#[derive(Clone)]
pub struct PostgrestConfig {
    /// Project base URL, e.g. `https://abc.supabase.co`.
    pub url: String,
    /// API key sent as both `apikey` and bearer token.
    pub api_key: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl PostgrestConfig {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_timeouts(mut self, connect: Duration, request: Duration) -> Self {
        self.connect_timeout = connect;
        self.request_timeout = request;
        self
    }

    /// Base URL of the REST API, without a trailing slash.
    ///
    /// ```
    /// use axelin_postgrest::PostgrestConfig;
    ///
    /// let config = PostgrestConfig::new("https://abc.supabase.co/", "key");
    /// assert_eq!(config.rest_base(), "https://abc.supabase.co/rest/v1");
    /// ```
    pub fn rest_base(&self) -> String {
        format!("{}{REST_PATH}", self.url.trim_end_matches('/'))
    }
}

// The API key must never end up in logs.
impl fmt::Debug for PostgrestConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostgrestConfig")
            .field("url", &self.url)
            .field("api_key", &"<redacted>")
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
