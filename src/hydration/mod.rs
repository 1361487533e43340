//! Client-side hydration.
//!
//! On load the client reads the embedded state payload from the
//! designated script element, constructs a client-variant store seeded
//! with it, and re-renders the same route table over the existing
//! markup. Data already present in the snapshot is never re-fetched
//! merely because of hydration; views fetch only when their expected
//! data is absent.

#[cfg(all(target_family = "wasm", target_os = "unknown"))]
mod dom;

#[cfg(all(target_family = "wasm", target_os = "unknown"))]
pub use dom::boot;

use std::sync::Arc;

use crate::ssr::{STATE_ELEMENT_ID, StateError, StatePayload};
use crate::store::{ApiClient, AppState, Store};

/// Errors that can occur during hydration.
#[derive(Debug, thiserror::Error)]
pub enum HydrationError {
	/// The hydration root element was not found.
	#[error("hydration root element not found: {0}")]
	RootNotFound(String),
	/// The embedded state could not be parsed or validated.
	#[error("embedded state rejected: {0}")]
	State(#[from] StateError),
	/// The browser document was not available.
	#[error("document not available")]
	NoDocument,
}

/// Extracts the embedded state payload from a rendered document.
///
/// Returns `Ok(None)` when the document carries no payload (the page
/// was not server-rendered); the caller falls back to an empty state.
/// A present but invalid payload is an error: better to hydrate from
/// nothing than from a shape this build does not understand.
pub fn read_payload(html: &str) -> Result<Option<StatePayload>, HydrationError> {
	let marker = format!("id=\"{}\"", STATE_ELEMENT_ID);
	let Some(marker_at) = html.find(&marker) else {
		return Ok(None);
	};

	let after_marker = &html[marker_at..];
	let Some(open_end) = after_marker.find('>') else {
		return Ok(None);
	};
	let content = &after_marker[open_end + 1..];
	let Some(close_at) = content.find("</script>") else {
		return Ok(None);
	};

	Ok(Some(StatePayload::from_json(&content[..close_at])?))
}

/// Constructs the client store from an optional embedded payload.
///
/// Seeding is pure reconstruction: no fetch is triggered here, whatever
/// the snapshot contains.
pub fn hydrate_store(client: Arc<dyn ApiClient>, payload: Option<StatePayload>) -> Arc<Store> {
	let snapshot: Option<AppState> = payload.map(|p| p.state);
	Store::client(client, snapshot)
}
