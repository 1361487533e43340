//! Actions and thunks for the home slice.

use std::sync::Arc;

use serde::Deserialize;

use super::state::{AppState, ListItem};
use super::Store;
use crate::preload::LoaderError;

/// A state update dispatched to the store.
///
/// Actions are the only way state changes; each variant names the slice
/// it touches.
#[derive(Debug, Clone)]
pub enum Action {
	/// Replaces the home list.
	ChangeHomeList(Vec<ListItem>),
	/// Replaces the home display name.
	ChangeHomeName(String),
}

/// Applies an action to the state. Pure; no I/O.
pub(super) fn reduce(state: &mut AppState, action: Action) {
	match action {
		Action::ChangeHomeList(list) => state.home.list = list,
		Action::ChangeHomeName(name) => state.home.name = name,
	}
}

/// The fixed degraded-mode list substituted when the upstream fetch
/// fails. Documented contract: a failing data source never prevents the
/// page from rendering.
pub fn placeholder_list() -> Vec<ListItem> {
	vec![
		ListItem::new("1", "1111"),
		ListItem::new("2", "2222"),
		ListItem::new("3", "3333"),
	]
}

#[derive(Deserialize)]
struct ListResponse {
	data: Vec<ListItem>,
}

/// Thunk: fetches the home list through the store's injected client and
/// dispatches the result.
///
/// Fetch or decode failure is recovered locally by dispatching the
/// placeholder list; the error never reaches the request handler.
pub async fn get_home_list(store: Arc<Store>) -> Result<(), LoaderError> {
	let list = match store.api_client().get_json("/api/list.json").await {
		Ok(value) => match serde_json::from_value::<ListResponse>(value) {
			Ok(response) => response.data,
			Err(err) => {
				tracing::warn!(error = %err, "home list response malformed, using placeholder");
				placeholder_list()
			}
		},
		Err(err) => {
			tracing::warn!(error = %err, "home list fetch failed, using placeholder");
			placeholder_list()
		}
	};

	store.dispatch(Action::ChangeHomeList(list));
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::FakeApiClient;

	#[test]
	fn test_reduce_change_home_list() {
		let mut state = AppState::default();
		reduce(
			&mut state,
			Action::ChangeHomeList(vec![ListItem::new("1", "1111")]),
		);
		assert_eq!(state.home.list.len(), 1);
		assert_eq!(state.home.list[0].title, "1111");
	}

	#[test]
	fn test_placeholder_list_shape() {
		let list = placeholder_list();
		let titles: Vec<_> = list.iter().map(|i| i.title.as_str()).collect();
		assert_eq!(titles, ["1111", "2222", "3333"]);
	}

	#[tokio::test]
	async fn test_get_home_list_success() {
		let client = FakeApiClient::new().with_response(
			"/api/list.json",
			serde_json::json!({"data": [{"id": "1", "title": "1111"}]}),
		);
		let store = Store::server(Arc::new(client));

		get_home_list(store.clone()).await.unwrap();
		assert_eq!(store.state().home.list, vec![ListItem::new("1", "1111")]);
	}

	#[tokio::test]
	async fn test_get_home_list_failure_dispatches_placeholder() {
		let store = Store::server(Arc::new(FakeApiClient::failing()));

		get_home_list(store.clone()).await.unwrap();
		assert_eq!(store.state().home.list, placeholder_list());
	}

	#[tokio::test]
	async fn test_get_home_list_malformed_dispatches_placeholder() {
		let client =
			FakeApiClient::new().with_response("/api/list.json", serde_json::json!({"nope": 1}));
		let store = Store::server(Arc::new(client));

		get_home_list(store.clone()).await.unwrap();
		assert_eq!(store.state().home.list, placeholder_list());
	}
}
