//! Data preload phase.
//!
//! Given the matched entries for a request path, runs every attached
//! loader against the request store and waits for all of them to
//! settle. Loader failure is treated as completion, not as request
//! failure: a single failing data source never prevents the page from
//! rendering, and the UI renders a degraded state from whatever the
//! store ends up holding.

use std::sync::Arc;
use std::time::Duration;

use futures::future::{BoxFuture, join_all};

use crate::router::RouteMatch;
use crate::store::{ApiError, Store};

/// Errors a loader may surface. Always absorbed by the preload phase;
/// the variants exist for logging.
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
	/// The underlying fetch failed.
	#[error(transparent)]
	Api(#[from] ApiError),
	/// Anything else the loader wants to report.
	#[error("{0}")]
	Other(String),
}

/// A route loader: populates its slice of the store before rendering.
pub type LoaderFn =
	Arc<dyn Fn(Arc<Store>) -> BoxFuture<'static, Result<(), LoaderError>> + Send + Sync>;

/// Runs every matched loader concurrently and resolves once all have
/// settled or the deadline expires.
///
/// Loaders are assumed independent (each owns a distinct slice, which
/// the route table enforces at construction), so no ordering is
/// guaranteed between their completions. On deadline expiry rendering
/// proceeds with whatever state has settled so far; unresolved loaders
/// count as failed, consistent with the absorption policy.
pub async fn preload(matches: &[RouteMatch<'_>], store: &Arc<Store>, deadline: Duration) {
	let futures: Vec<_> = matches
		.iter()
		.filter_map(|m| m.entry.loader())
		.map(|loader| {
			let slice = loader.slice();
			let fut = (loader.run())(store.clone());
			async move {
				if let Err(err) = fut.await {
					tracing::warn!(slice = %slice, error = %err, "loader failed, continuing");
				}
			}
		})
		.collect();

	if futures.is_empty() {
		return;
	}

	if tokio::time::timeout(deadline, join_all(futures)).await.is_err() {
		tracing::warn!(
			deadline_ms = deadline.as_millis() as u64,
			"preload deadline expired, rendering with settled state"
		);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::component::{IntoPage, PageElement};
	use crate::router::{RouteEntry, RouteTable, ViewFn};
	use crate::store::{Action, ListItem, Slice};
	use crate::testing::FakeApiClient;

	fn plain_view() -> ViewFn {
		Arc::new(|_scope, outlet| PageElement::new("div").child(outlet).into_page())
	}

	fn store() -> Arc<Store> {
		Store::server(Arc::new(FakeApiClient::new()))
	}

	#[tokio::test]
	async fn test_preload_runs_matched_loaders() {
		let loader: LoaderFn = Arc::new(|store| {
			Box::pin(async move {
				store.dispatch(Action::ChangeHomeList(vec![ListItem::new("1", "one")]));
				Ok(())
			})
		});
		let table = RouteTable::new(vec![
			RouteEntry::new("/", plain_view())
				.child(RouteEntry::new("/", plain_view()).exact().with_loader(Slice::Home, loader)),
		])
		.unwrap();

		let store = store();
		preload(&table.matches("/"), &store, Duration::from_secs(1)).await;
		assert_eq!(store.state().home.list.len(), 1);
	}

	#[tokio::test]
	async fn test_loader_failure_is_absorbed() {
		let loader: LoaderFn =
			Arc::new(|_store| Box::pin(async { Err(LoaderError::Other("boom".into())) }));
		let table = RouteTable::new(vec![
			RouteEntry::new("/", plain_view()).with_loader(Slice::Home, loader),
		])
		.unwrap();

		let store = store();
		// Must resolve normally despite the failing loader.
		preload(&table.matches("/"), &store, Duration::from_secs(1)).await;
	}

	#[tokio::test]
	async fn test_deadline_bounds_slow_loader() {
		let loader: LoaderFn = Arc::new(|_store| {
			Box::pin(async {
				tokio::time::sleep(Duration::from_secs(30)).await;
				Ok(())
			})
		});
		let table = RouteTable::new(vec![
			RouteEntry::new("/", plain_view()).with_loader(Slice::Home, loader),
		])
		.unwrap();

		let store = store();
		let started = std::time::Instant::now();
		preload(&table.matches("/"), &store, Duration::from_millis(50)).await;
		assert!(started.elapsed() < Duration::from_secs(5));
	}

	#[tokio::test]
	async fn test_no_loaders_resolves_immediately() {
		let table = RouteTable::new(vec![RouteEntry::new("/", plain_view())]).unwrap();
		let store = store();
		preload(&table.matches("/"), &store, Duration::from_millis(1)).await;
	}
}
