//! HTTP client for the recommendation, insights, and podcast backend.

mod types;

pub use types::{
    Citation, Insights, PodcastMeta, PublicConfig, Recommendation, format_duration,
};

use crate::context::ContextQuery;
use reqwest::Url;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};
use types::RecommendationsResponse;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("{detail}")]
    Status { status: u16, detail: String },
    #[error("invalid backend URL: {0}")]
    Url(String),
}

impl BackendError {
    fn from_status(status: u16, body: &str) -> Self {
        BackendError::Status {
            status,
            detail: error_detail(status, body),
        }
    }
}

/// Prefer the server's `detail` field, falling back to the status code.
fn error_detail(status: u16, body: &str) -> String {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("detail").cloned());
    match detail {
        Some(serde_json::Value::String(detail)) if !detail.trim().is_empty() => detail,
        Some(serde_json::Value::Null) | None => {
            format!("request failed with status code {status}")
        }
        Some(serde_json::Value::String(_)) => format!("request failed with status code {status}"),
        Some(other) => other.to_string(),
    }
}

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    #[serde(flatten)]
    query: &'a ContextQuery,
    k: u32,
}

#[derive(Debug, Serialize)]
struct PodcastRequest<'a> {
    #[serde(flatten)]
    query: &'a ContextQuery,
    k: u32,
    speakers: u32,
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: Url,
}

impl BackendClient {
    pub fn new(api_base_url: &str) -> Result<Self, BackendError> {
        let normalized = format!("{}/", api_base_url.trim().trim_end_matches('/'));
        let base_url = Url::parse(&normalized).map_err(|e| BackendError::Url(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(BackendError::Url(normalized));
        }
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, BackendError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| BackendError::Url(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Where the viewer should fetch a stored document from.
    pub fn document_url(&self, document_id: &str) -> Result<Url, BackendError> {
        self.endpoint(&["document_library", document_id])
    }

    pub async fn public_config(&self) -> Result<PublicConfig, BackendError> {
        let url = self.endpoint(&["config", "public"])?;
        debug!(%url, "GET public config");
        let response = self.http.get(url).send().await?;
        Self::decode(response).await
    }

    pub async fn recommendations(
        &self,
        query: &ContextQuery,
        k: u32,
    ) -> Result<Vec<Recommendation>, BackendError> {
        let response: RecommendationsResponse = self
            .post_json(&["recommendations"], &QueryRequest { query, k })
            .await?;
        Ok(response.results)
    }

    pub async fn insights(&self, query: &ContextQuery, k: u32) -> Result<Insights, BackendError> {
        self.post_json(&["insights"], &QueryRequest { query, k })
            .await
    }

    pub async fn generate_podcast(
        &self,
        query: &ContextQuery,
        k: u32,
        speakers: u32,
    ) -> Result<PodcastMeta, BackendError> {
        self.post_json(
            &["podcast"],
            &PodcastRequest {
                query,
                k,
                speakers,
            },
        )
        .await
    }

    async fn post_json<B, T>(&self, segments: &[&str], body: &B) -> Result<T, BackendError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        debug!(%url, "POST");
        let response = self.http.post(url).json(body).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, BackendError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = BackendError::from_status(status.as_u16(), &body);
            if let BackendError::Status { status, detail } = &err {
                warn!(status, %detail, "Backend rejected request");
            }
            return Err(err);
        }
        Ok(response.json::<T>().await?)
    }
}
