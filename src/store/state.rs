//! Application state: the serializable slices shared across the wire.
//!
//! The state must stay JSON-serializable at all times because it
//! crosses the server->client boundary as embedded text. Mutation only
//! happens through dispatched actions; nothing holds interior
//! references into it.

use serde::{Deserialize, Serialize};

/// One item of the home list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
	/// Stable identifier, also the reconciliation key.
	pub id: String,
	/// Display title.
	pub title: String,
}

impl ListItem {
	/// Creates a new list item.
	pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			title: title.into(),
		}
	}
}

/// The `home` slice: a list of items and a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeState {
	/// Items shown on the home page.
	pub list: Vec<ListItem>,
	/// Name greeted on the home page.
	pub name: String,
}

impl Default for HomeState {
	fn default() -> Self {
		Self {
			list: Vec::new(),
			name: "guest".to_string(),
		}
	}
}

/// The whole application state, one named slice per owner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
	/// The home page slice.
	pub home: HomeState,
}

/// Names of the state slices, used as ownership keys for loaders.
///
/// Each loader owns exactly one slice; the route table builder rejects
/// a second loader for an already-owned slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slice {
	/// The `home` slice.
	Home,
}

impl std::fmt::Display for Slice {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Slice::Home => write!(f, "home"),
		}
	}
}
