//! Request-scoped application store.
//!
//! The store owns exactly one [`AppState`] per request (server) or per
//! page load (client). Server-side stores are discarded after the
//! response is sent; nothing is shared across requests, so state can
//! never leak between unrelated users.

mod actions;
mod api;
mod state;

pub use actions::{Action, get_home_list, placeholder_list};
pub use api::{ApiClient, ApiError, BrowserApiClient, UpstreamApiClient};
pub use state::{AppState, HomeState, ListItem, Slice};

use std::sync::Arc;

use parking_lot::Mutex;

/// A subscription callback invoked after every dispatch.
pub type Listener = Arc<dyn Fn(&AppState) + Send + Sync>;

/// The application store: state container plus injected data client.
pub struct Store {
	state: Mutex<AppState>,
	client: Arc<dyn ApiClient>,
	listeners: Mutex<Vec<Listener>>,
}

impl std::fmt::Debug for Store {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Store")
			.field("state", &*self.state.lock())
			.field("listeners", &self.listeners.lock().len())
			.finish()
	}
}

impl Store {
	/// Builds a server-variant store with empty initial state.
	///
	/// One per in-flight request; never shared across requests.
	pub fn server(client: Arc<dyn ApiClient>) -> Arc<Self> {
		Arc::new(Self {
			state: Mutex::new(AppState::default()),
			client,
			listeners: Mutex::new(Vec::new()),
		})
	}

	/// Builds a client-variant store, pre-seeded with the snapshot
	/// embedded by the server. Falls back to the empty state when the
	/// page was not server-rendered.
	pub fn client(client: Arc<dyn ApiClient>, snapshot: Option<AppState>) -> Arc<Self> {
		Arc::new(Self {
			state: Mutex::new(snapshot.unwrap_or_default()),
			client,
			listeners: Mutex::new(Vec::new()),
		})
	}

	/// Dispatches an action, applying it to the state and notifying
	/// subscribers.
	pub fn dispatch(&self, action: Action) {
		let snapshot = {
			let mut state = self.state.lock();
			actions::reduce(&mut state, action);
			state.clone()
		};
		// Listeners run with no lock held, so a listener may itself
		// dispatch or subscribe without deadlocking.
		let listeners: Vec<Listener> = self.listeners.lock().clone();
		for listener in &listeners {
			listener(&snapshot);
		}
	}

	/// Returns a snapshot of the current state.
	pub fn state(&self) -> AppState {
		self.state.lock().clone()
	}

	/// Runs an async thunk against this store. Thunks do their own I/O
	/// through [`Store::api_client`] and dispatch plain actions.
	pub async fn dispatch_thunk<F, Fut, T>(self: &Arc<Self>, thunk: F) -> T
	where
		F: FnOnce(Arc<Self>) -> Fut,
		Fut: std::future::Future<Output = T>,
	{
		thunk(self.clone()).await
	}

	/// Registers a listener called after every dispatch.
	pub fn subscribe(&self, listener: impl Fn(&AppState) + Send + Sync + 'static) {
		self.listeners.lock().push(Arc::new(listener));
	}

	/// The injected data-fetching client.
	pub fn api_client(&self) -> &Arc<dyn ApiClient> {
		&self.client
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::FakeApiClient;
	use std::sync::atomic::{AtomicUsize, Ordering};

	fn test_client() -> Arc<dyn ApiClient> {
		Arc::new(FakeApiClient::new())
	}

	#[test]
	fn test_server_store_starts_empty() {
		let store = Store::server(test_client());
		assert_eq!(store.state(), AppState::default());
	}

	#[test]
	fn test_client_store_seeded_from_snapshot() {
		let mut snapshot = AppState::default();
		snapshot.home.name = "alex".to_string();
		let store = Store::client(test_client(), Some(snapshot.clone()));
		assert_eq!(store.state(), snapshot);
	}

	#[test]
	fn test_client_store_without_snapshot_falls_back_to_empty() {
		let store = Store::client(test_client(), None);
		assert_eq!(store.state(), AppState::default());
	}

	#[test]
	fn test_dispatch_updates_state() {
		let store = Store::server(test_client());
		store.dispatch(Action::ChangeHomeName("sam".to_string()));
		assert_eq!(store.state().home.name, "sam");
	}

	#[test]
	fn test_subscribe_sees_every_dispatch() {
		let store = Store::server(test_client());
		let calls = Arc::new(AtomicUsize::new(0));
		let counted = calls.clone();
		store.subscribe(move |_| {
			counted.fetch_add(1, Ordering::SeqCst);
		});

		store.dispatch(Action::ChangeHomeName("a".to_string()));
		store.dispatch(Action::ChangeHomeName("b".to_string()));
		assert_eq!(calls.load(Ordering::SeqCst), 2);
	}

	#[test]
	fn test_stores_are_isolated() {
		let first = Store::server(test_client());
		let second = Store::server(test_client());
		first.dispatch(Action::ChangeHomeName("leak?".to_string()));
		assert_eq!(second.state().home.name, "guest");
	}

	#[test]
	fn test_listener_may_dispatch_reentrantly() {
		let store = Store::server(test_client());
		let inner = store.clone();
		store.subscribe(move |state| {
			if state.home.name == "first" {
				inner.dispatch(Action::ChangeHomeName("second".to_string()));
			}
		});

		store.dispatch(Action::ChangeHomeName("first".to_string()));
		assert_eq!(store.state().home.name, "second");
	}

	#[tokio::test]
	async fn test_dispatch_thunk_runs_against_this_store() {
		let store = Store::server(test_client());
		store
			.dispatch_thunk(|store| async move {
				store.dispatch(Action::ChangeHomeName("from thunk".to_string()));
			})
			.await;
		assert_eq!(store.state().home.name, "from thunk");
	}
}
