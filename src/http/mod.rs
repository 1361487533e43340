//! Thin request/response wrappers over hyper's types, plus the handler
//! seam the server loop drives.

use async_trait::async_trait;
use bytes::Bytes;
use http::header::{CONTENT_TYPE, HeaderMap, HeaderValue, LOCATION};
use http::{Method, StatusCode};
use http_body_util::Full;

use crate::error::IsorenderError;

/// An inbound HTTP request, reduced to what the SSR pipeline needs.
#[derive(Debug, Clone)]
pub struct Request {
	/// Request method.
	pub method: Method,
	/// Path component of the URI.
	pub path: String,
	/// Raw query string, if any.
	pub query: Option<String>,
	/// Request headers.
	pub headers: HeaderMap,
}

impl Request {
	/// Creates a GET request for the given path. Mostly for tests.
	pub fn get(path: impl Into<String>) -> Self {
		Self {
			method: Method::GET,
			path: path.into(),
			query: None,
			headers: HeaderMap::new(),
		}
	}

	/// Path plus query string, as the upstream proxy needs it.
	pub fn path_and_query(&self) -> String {
		match &self.query {
			Some(query) => format!("{}?{}", self.path, query),
			None => self.path.clone(),
		}
	}
}

/// An outbound HTTP response.
#[derive(Debug)]
pub struct Response {
	/// Status code.
	pub status: StatusCode,
	/// Response headers.
	pub headers: HeaderMap,
	/// Response body.
	pub body: Bytes,
}

impl Response {
	/// Creates an empty response with the given status.
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}

	/// 200 with an HTML body.
	pub fn html(body: impl Into<String>) -> Self {
		Self::new(StatusCode::OK).with_html_body(body)
	}

	/// 404 with an HTML body (the not-found page is still a complete
	/// document).
	pub fn not_found_html(body: impl Into<String>) -> Self {
		Self::new(StatusCode::NOT_FOUND).with_html_body(body)
	}

	/// Redirect with a `Location` header. Permanent maps to 301.
	pub fn redirect(url: &str, permanent: bool) -> Self {
		let status = if permanent {
			StatusCode::MOVED_PERMANENTLY
		} else {
			StatusCode::FOUND
		};
		let mut response = Self::new(status);
		if let Ok(value) = HeaderValue::from_str(url) {
			response.headers.insert(LOCATION, value);
		}
		response
	}

	/// 500 with a generic error page.
	pub fn internal_error() -> Self {
		Self::new(StatusCode::INTERNAL_SERVER_ERROR)
			.with_html_body("<!DOCTYPE html><html><body><h1>Internal Server Error</h1></body></html>")
	}

	/// Sets the body and `text/html` content type.
	pub fn with_html_body(mut self, body: impl Into<String>) -> Self {
		self.headers.insert(
			CONTENT_TYPE,
			HeaderValue::from_static("text/html; charset=utf-8"),
		);
		self.body = Bytes::from(body.into());
		self
	}

	/// Sets a raw body with the given content type.
	pub fn with_body(mut self, body: Bytes, content_type: &str) -> Self {
		if let Ok(value) = HeaderValue::from_str(content_type) {
			self.headers.insert(CONTENT_TYPE, value);
		}
		self.body = body;
		self
	}

	/// Converts into a hyper response.
	pub fn into_hyper(self) -> hyper::Response<Full<Bytes>> {
		let mut builder = hyper::Response::builder().status(self.status);
		if let Some(headers) = builder.headers_mut() {
			*headers = self.headers;
		}
		builder
			.body(Full::new(self.body))
			.unwrap_or_else(|_| hyper::Response::new(Full::new(Bytes::new())))
	}

	/// Body as UTF-8, for assertions.
	pub fn body_string(&self) -> String {
		String::from_utf8_lossy(&self.body).into_owned()
	}
}

/// The request-handling seam driven by the server loop.
#[async_trait]
pub trait Handler: Send + Sync {
	/// Handles one request.
	async fn handle(&self, request: Request) -> Result<Response, IsorenderError>;
}
