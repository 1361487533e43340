//! The embedded state payload: the one-shot handoff from render time to
//! hydrate time.
//!
//! The server writes a single well-defined JSON payload into one
//! designated script element; the client reads that element by its
//! fixed id and validates the shape before constructing the store.
//! This is the sole contract between the server renderer and the
//! client hydrator.

use serde::{Deserialize, Serialize};

use crate::store::AppState;

/// The DOM id of the designated state script element.
pub const STATE_ELEMENT_ID: &str = "isorender-state";

/// Current payload shape version. The hydrator rejects anything else.
pub const STATE_PAYLOAD_VERSION: u32 = 1;

/// Errors from payload serialization and validation.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
	/// The embedded text is not valid JSON for the payload shape.
	#[error("state payload malformed: {0}")]
	Malformed(#[from] serde_json::Error),
	/// The payload declares a version this build does not understand.
	#[error("unsupported state payload version {0}")]
	UnsupportedVersion(u32),
}

/// The serialized store snapshot plus its shape version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatePayload {
	/// Shape version of the payload.
	pub version: u32,
	/// The store state at the moment of render.
	pub state: AppState,
}

impl StatePayload {
	/// Wraps a store snapshot in the current payload version.
	pub fn new(state: AppState) -> Self {
		Self {
			version: STATE_PAYLOAD_VERSION,
			state,
		}
	}

	/// Serializes the payload to JSON.
	pub fn to_json(&self) -> Result<String, StateError> {
		Ok(serde_json::to_string(self)?)
	}

	/// Emits the designated script element with the escaped payload.
	pub fn to_script_tag(&self) -> String {
		let json = self.to_json().unwrap_or_else(|_| "{}".to_string());
		format!(
			r#"<script id="{}" type="application/json">{}</script>"#,
			STATE_ELEMENT_ID,
			escape_json_for_script(&json)
		)
	}

	/// Parses and validates an embedded payload.
	pub fn from_json(json: &str) -> Result<Self, StateError> {
		let payload: StatePayload = serde_json::from_str(json)?;
		if payload.version != STATE_PAYLOAD_VERSION {
			return Err(StateError::UnsupportedVersion(payload.version));
		}
		Ok(payload)
	}
}

/// Escapes JSON content for safe embedding in HTML script tags.
///
/// HTML parsers don't understand JSON string context: a literal
/// `</script>` inside a string value would close the tag and allow
/// injection. Replacing `</` with `<\/` is invisible to the JSON parser
/// (`\/` is a legal string escape) and opaque to the HTML parser.
pub(crate) fn escape_json_for_script(json: &str) -> String {
	json.replace("</", "<\\/")
}
