//! The demo application: its route table and views.

mod views;

pub use views::{home, home_redirect, layout, login, not_found};

use std::sync::Arc;

use crate::preload::LoaderFn;
use crate::router::{RouteEntry, RouteTable, RouterError};
use crate::store::{get_home_list, Slice, Store};

/// The application route table.
///
/// One shell route wraps the pages; the catch-all sits last so every
/// path still renders a full document. The home entry owns the `home`
/// slice through its loader.
pub fn routes() -> Result<RouteTable, RouterError> {
	let home_loader: LoaderFn = Arc::new(|store| Box::pin(get_home_list(store)));

	RouteTable::new(vec![
		RouteEntry::new("/", layout())
			.child(
				RouteEntry::new("/", home())
					.exact()
					.with_loader(Slice::Home, home_loader),
			)
			.child(RouteEntry::new("/login", login()).exact())
			.child(RouteEntry::new("/home", home_redirect()).exact())
			.child(RouteEntry::new("*", not_found())),
	])
}

/// Client-side counterpart of the server preload: fetches only the
/// slices the embedded payload left empty, so hydration never refetches
/// data the server already rendered.
pub async fn ensure_home_loaded(store: Arc<Store>) {
	if store.state().home.list.is_empty() {
		let _ = get_home_list(store).await;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::store::{Action, ListItem};
	use crate::testing::FakeApiClient;

	#[test]
	fn test_routes_build_cleanly() {
		let table = routes().unwrap();
		assert_eq!(table.matches("/").len(), 2);
		assert_eq!(table.matches("/login").len(), 2);
		assert_eq!(table.matches("/nonexistent-path").len(), 2);
	}

	#[tokio::test]
	async fn test_ensure_home_loaded_skips_populated_slice() {
		let client = Arc::new(FakeApiClient::new());
		let store = Store::client(client.clone(), None);
		store.dispatch(Action::ChangeHomeList(vec![ListItem::new("1", "seeded")]));

		ensure_home_loaded(store.clone()).await;

		assert_eq!(client.request_count(), 0);
		assert_eq!(store.state().home.list[0].title, "seeded");
	}

	#[tokio::test]
	async fn test_ensure_home_loaded_fetches_empty_slice() {
		let client = Arc::new(
			FakeApiClient::new().with_response(
				"/api/list.json",
				serde_json::json!({"data": [{"id": "9", "title": "fresh"}]}),
			),
		);
		let store = Store::client(client.clone(), None);

		ensure_home_loaded(store.clone()).await;

		assert_eq!(client.request_count(), 1);
		assert_eq!(store.state().home.list[0].title, "fresh");
	}
}
