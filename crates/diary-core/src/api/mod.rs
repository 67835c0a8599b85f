//! Remote entry repository (HTTP+JSON).
//!
//! The remote API is a plain unauthenticated collection endpoint:
//! `GET/POST {base}/entries/` and `PUT/DELETE {base}/entries/{id}/`. All
//! filtering happens client-side on the full fetched set, so the client
//! consumes no query parameters.

use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::{Entry, EntryId, EntryPayload};

/// Trait for remote entry storage operations.
///
/// The store is generic over this seam; tests drive it with an in-memory
/// implementation instead of a live server. Create and update responses carry
/// the written record, but callers only use them as a success signal — the
/// collection is refetched afterwards.
#[allow(async_fn_in_trait)]
pub trait EntryRepository {
    /// Fetch the full entry collection
    async fn list(&self) -> Result<Vec<Entry>>;

    /// Create a new entry
    async fn create(&self, payload: &EntryPayload) -> Result<()>;

    /// Update an existing entry keyed by `id`
    async fn update(&self, id: EntryId, payload: &EntryPayload) -> Result<()>;

    /// Delete an entry keyed by `id`
    async fn delete(&self, id: EntryId) -> Result<()>;
}

/// HTTP implementation of [`EntryRepository`].
#[derive(Clone)]
pub struct HttpEntryRepository {
    base_url: String,
    client: reqwest::Client,
}

impl HttpEntryRepository {
    /// Create a repository against the given API base URL.
    ///
    /// The base URL must include an `http://` or `https://` scheme; trailing
    /// slashes are normalized away.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = normalize_base_url(base_url.into())?;
        Ok(Self {
            base_url,
            client: reqwest::Client::builder().build()?,
        })
    }

    /// The normalized base URL this repository talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/entries/", self.base_url)
    }

    fn entry_url(&self, id: EntryId) -> String {
        format!("{}/entries/{id}/", self.base_url)
    }
}

impl EntryRepository for HttpEntryRepository {
    async fn list(&self) -> Result<Vec<Entry>> {
        let response = self
            .client
            .get(self.collection_url())
            .header("Accept", "application/json")
            .send()
            .await?;
        let response = ensure_success(response).await?;
        Ok(response.json::<Vec<Entry>>().await?)
    }

    async fn create(&self, payload: &EntryPayload) -> Result<()> {
        let response = self
            .client
            .post(self.collection_url())
            .json(payload)
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn update(&self, id: EntryId, payload: &EntryPayload) -> Result<()> {
        let response = self
            .client
            .put(self.entry_url(id))
            .json(payload)
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn delete(&self, id: EntryId) -> Result<()> {
        let response = self.client.delete(self.entry_url(id)).send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}

async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = parse_api_error(status, &body);
    tracing::debug!("entry API call failed: {message}");
    Err(Error::Api(message))
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    detail: Option<String>,
    message: Option<String>,
}

fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(message) = payload.detail.or(payload.message) {
            return format!("{} ({})", message.trim(), status.as_u16());
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("{} ({})", trimmed, status.as_u16())
    }
}

fn normalize_base_url(raw: String) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidBaseUrl("must not be empty".to_string()));
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.trim_end_matches('/').to_string())
    } else {
        Err(Error::InvalidBaseUrl(
            "must include http:// or https://".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_base_url_rejects_invalid_values() {
        assert!(normalize_base_url(String::new()).is_err());
        assert!(normalize_base_url("  ".to_string()).is_err());
        assert!(normalize_base_url("api.example.com".to_string()).is_err());
    }

    #[test]
    fn normalize_base_url_trims_trailing_slash() {
        assert_eq!(
            normalize_base_url(" http://127.0.0.1:8000/ ".to_string()).unwrap(),
            "http://127.0.0.1:8000"
        );
    }

    #[test]
    fn repository_builds_collection_and_entry_urls() {
        let repository = HttpEntryRepository::new("http://localhost:8000/").unwrap();
        assert_eq!(
            repository.collection_url(),
            "http://localhost:8000/entries/"
        );
        assert_eq!(
            repository.entry_url(EntryId::new(5)),
            "http://localhost:8000/entries/5/"
        );
    }

    #[test]
    fn parse_api_error_prefers_detail_field() {
        let message = parse_api_error(StatusCode::NOT_FOUND, r#"{"detail": "Not found."}"#);
        assert_eq!(message, "Not found. (404)");
    }

    #[test]
    fn parse_api_error_falls_back_to_plain_body() {
        let message = parse_api_error(StatusCode::BAD_GATEWAY, "upstream down");
        assert_eq!(message, "upstream down (502)");
    }

    #[test]
    fn parse_api_error_handles_empty_body() {
        let message = parse_api_error(StatusCode::INTERNAL_SERVER_ERROR, "  ");
        assert_eq!(message, "HTTP 500");
    }
}
