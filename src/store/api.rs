//! The injected data-fetching client.
//!
//! Loaders never talk to the network directly; they go through an
//! [`ApiClient`] handed to the store at construction time. The server
//! variant targets the upstream API origin, the client variant issues
//! same-origin requests that the reverse proxy forwards upstream.

use async_trait::async_trait;
use url::Url;

/// Errors from the data-fetching client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
	/// The request could not be issued or the transport failed.
	#[error("api request failed: {0}")]
	Request(#[from] reqwest::Error),
	/// The upstream answered with a non-success status.
	#[error("api responded with status {0}")]
	Status(http::StatusCode),
	/// The path could not be joined onto the base URL.
	#[error("invalid api path: {0}")]
	InvalidPath(String),
	/// The data source could not be reached at all.
	#[error("api unavailable")]
	Unavailable,
}

/// Asynchronous JSON fetcher injected into the store.
#[async_trait]
pub trait ApiClient: Send + Sync {
	/// Issues a GET for the given absolute path (e.g. `/api/list.json`)
	/// and returns the decoded JSON body.
	async fn get_json(&self, path: &str) -> Result<serde_json::Value, ApiError>;
}

/// Server-side client: resolves paths against the upstream API origin.
#[derive(Debug, Clone)]
pub struct UpstreamApiClient {
	base: Url,
	http: reqwest::Client,
}

impl UpstreamApiClient {
	/// Creates a client targeting the given upstream origin.
	pub fn new(base: Url) -> Self {
		Self {
			base,
			http: reqwest::Client::new(),
		}
	}
}

#[async_trait]
impl ApiClient for UpstreamApiClient {
	async fn get_json(&self, path: &str) -> Result<serde_json::Value, ApiError> {
		let url = self
			.base
			.join(path)
			.map_err(|_| ApiError::InvalidPath(path.to_string()))?;

		let response = self.http.get(url).send().await?;
		let status = response.status();
		if !status.is_success() {
			return Err(ApiError::Status(
				http::StatusCode::from_u16(status.as_u16())
					.unwrap_or(http::StatusCode::BAD_GATEWAY),
			));
		}

		Ok(response.json().await?)
	}
}

/// Client-side variant: issues same-origin requests, relying on the
/// reverse proxy to forward `/api/*` upstream.
#[derive(Debug, Clone, Default)]
pub struct BrowserApiClient {
	http: reqwest::Client,
}

impl BrowserApiClient {
	/// Creates a same-origin client.
	pub fn new() -> Self {
		Self::default()
	}
}

#[async_trait]
impl ApiClient for BrowserApiClient {
	async fn get_json(&self, path: &str) -> Result<serde_json::Value, ApiError> {
		let response = self.http.get(path).send().await?;
		let status = response.status();
		if !status.is_success() {
			return Err(ApiError::Status(
				http::StatusCode::from_u16(status.as_u16())
					.unwrap_or(http::StatusCode::BAD_GATEWAY),
			));
		}

		Ok(response.json().await?)
	}
}
