//! In-memory test doubles shared by unit and integration tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::store::{ApiClient, ApiError};

/// An [`ApiClient`] backed by canned responses.
///
/// Paths without a registered response return [`ApiError::Unavailable`],
/// which is also how a client built with [`FakeApiClient::failing`]
/// behaves for every path.
pub struct FakeApiClient {
	responses: Mutex<HashMap<String, serde_json::Value>>,
	requests: AtomicUsize,
	fail: bool,
}

impl FakeApiClient {
	pub fn new() -> Self {
		Self {
			responses: Mutex::new(HashMap::new()),
			requests: AtomicUsize::new(0),
			fail: false,
		}
	}

	/// A client whose every request fails, standing in for an
	/// unreachable upstream.
	pub fn failing() -> Self {
		Self { fail: true, ..Self::new() }
	}

	/// Registers a canned JSON response for a path.
	pub fn with_response(self, path: &str, body: serde_json::Value) -> Self {
		self.responses.lock().insert(path.to_string(), body);
		self
	}

	/// Number of requests made so far, for asserting that hydration
	/// does not refetch.
	pub fn request_count(&self) -> usize {
		self.requests.load(Ordering::SeqCst)
	}
}

impl Default for FakeApiClient {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl ApiClient for FakeApiClient {
	async fn get_json(&self, path: &str) -> Result<serde_json::Value, ApiError> {
		self.requests.fetch_add(1, Ordering::SeqCst);
		if self.fail {
			return Err(ApiError::Unavailable);
		}
		self.responses
			.lock()
			.get(path)
			.cloned()
			.ok_or(ApiError::Unavailable)
	}
}
