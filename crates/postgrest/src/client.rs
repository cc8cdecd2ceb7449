//! HTTP plumbing for PostgREST table endpoints.
//!
//! Wraps a single [`reqwest::Client`] preconfigured with the backend's auth
//! headers and timeouts. Each method is exactly one round trip.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::PostgrestConfig;
use crate::error::PostgrestError;
use crate::query::Query;

/// Header asking PostgREST to echo the affected rows.
const PREFER: &str = "Prefer";
const RETURN_REPRESENTATION: &str = "return=representation";

/// Client bound to one PostgREST base URL.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct PostgrestClient {
    http: reqwest::Client,
    rest_base: String,
}

impl PostgrestClient {
    /// Build a client with `apikey`, `Authorization: Bearer` and
    /// `Content-Type: application/json` set on every request.
    pub fn new(config: &PostgrestConfig) -> Result<Self, PostgrestError> {
        let mut api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| PostgrestError::Config("API key is not a valid header value".into()))?;
        api_key.set_sensitive(true);

        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| PostgrestError::Config("API key is not a valid header value".into()))?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("apikey", api_key);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self::with_client(http, config.rest_base()))
    }

    /// Reuse an existing [`reqwest::Client`]. The caller is responsible for
    /// its default headers.
    pub fn with_client(http: reqwest::Client, rest_base: String) -> Self {
        Self { http, rest_base }
    }

    pub fn rest_base(&self) -> &str {
        &self.rest_base
    }

    /// `GET /<table>?<query>` decoded as an array of rows.
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: Query,
    ) -> Result<Vec<T>, PostgrestError> {
        let response = self
            .http
            .get(self.table_url(table))
            .query(&query.into_pairs())
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// `POST /<table>` with `Prefer: return=representation`.
    pub async fn insert<B, T>(&self, table: &str, body: &B) -> Result<Vec<T>, PostgrestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.table_url(table))
            .header(PREFER, RETURN_REPRESENTATION)
            .json(body)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// `PATCH /<table>?<query>` with `Prefer: return=representation`.
    pub async fn update<B, T>(
        &self,
        table: &str,
        query: Query,
        body: &B,
    ) -> Result<Vec<T>, PostgrestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .patch(self.table_url(table))
            .query(&query.into_pairs())
            .header(PREFER, RETURN_REPRESENTATION)
            .json(body)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// `DELETE /<table>?<query>`; the body, if any, is discarded.
    pub async fn delete(&self, table: &str, query: Query) -> Result<(), PostgrestError> {
        let response = self
            .http
            .delete(self.table_url(table))
            .query(&query.into_pairs())
            .send()
            .await?;

        Self::check_status(response).await
    }

    /// Reachability check against the REST root.
    pub async fn ping(&self) -> Result<(), PostgrestError> {
        let response = self
            .http
            .get(format!("{}/", self.rest_base))
            .send()
            .await?;

        Self::check_status(response).await
    }

    // ---- private helpers ----

    fn table_url(&self, table: &str) -> String {
        format!("{}/{table}", self.rest_base)
    }

    /// Return the response unchanged on 2xx, otherwise an
    /// [`PostgrestError::Upstream`] carrying the status and body text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, PostgrestError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(status = status.as_u16(), %body, "PostgREST returned an error");
            return Err(PostgrestError::Upstream {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Decode a successful JSON body, keeping the raw text on failure.
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, PostgrestError> {
        let response = Self::ensure_success(response).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| {
            tracing::warn!(error = %source, "PostgREST response did not match expected shape");
            PostgrestError::Decode { source, body }
        })
    }

    async fn check_status(response: reqwest::Response) -> Result<(), PostgrestError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}
