//! Reverse proxy for `/api/*`.
//!
//! Browser-issued data requests hit the render server same-origin and
//! are forwarded to the upstream API origin with the `/api` prefix
//! preserved, so server loaders and browser fetches see the same paths.

use bytes::Bytes;
use http::{Method, StatusCode};
use url::Url;

use crate::error::IsorenderError;
use crate::http::{Request, Response};

/// Forwards API requests to the upstream origin.
#[derive(Debug, Clone)]
pub struct ApiProxy {
	upstream: Url,
	http: reqwest::Client,
}

impl ApiProxy {
	/// Creates a proxy targeting the given upstream origin.
	pub fn new(upstream: Url) -> Self {
		Self {
			upstream,
			http: reqwest::Client::new(),
		}
	}

	/// Forwards one request upstream and relays status, content type,
	/// and body. The app only reads through GET; anything else is
	/// answered with 405 rather than blindly forwarded.
	pub async fn forward(&self, request: &Request) -> Result<Response, IsorenderError> {
		if request.method != Method::GET && request.method != Method::HEAD {
			return Ok(Response::new(StatusCode::METHOD_NOT_ALLOWED));
		}

		let target = self
			.upstream
			.join(&request.path_and_query())
			.map_err(|_| IsorenderError::Render(format!("bad proxy path: {}", request.path)))?;

		tracing::debug!(target = %target, "proxying api request");

		match self.http.get(target).send().await {
			Ok(upstream_response) => {
				let status = StatusCode::from_u16(upstream_response.status().as_u16())
					.unwrap_or(StatusCode::BAD_GATEWAY);
				let content_type = upstream_response
					.headers()
					.get(http::header::CONTENT_TYPE)
					.and_then(|v| v.to_str().ok())
					.unwrap_or("application/json")
					.to_string();
				let body = upstream_response.bytes().await.unwrap_or_else(|_| Bytes::new());
				Ok(Response::new(status).with_body(body, &content_type))
			}
			Err(err) => {
				tracing::warn!(error = %err, "upstream api unreachable");
				Ok(Response::new(StatusCode::BAD_GATEWAY))
			}
		}
	}
}
