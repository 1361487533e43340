//! Server render to client hydration: the state handshake end to end.

use std::sync::Arc;
use std::time::Duration;

use isorender::app;
use isorender::hydration::{HydrationError, read_payload};
use isorender::ssr::{RenderContext, STATE_ELEMENT_ID, STATE_PAYLOAD_VERSION, SsrRenderer};
use isorender::store::Store;
use isorender::testing::FakeApiClient;

async fn render_home(client: FakeApiClient) -> String {
	let table = app::routes().unwrap();
	let store = Store::server(Arc::new(client));

	let matches = table.matches("/");
	isorender::preload(&matches, &store, Duration::from_secs(1)).await;

	let mut ctx = RenderContext::new();
	SsrRenderer::new().render_page(&store, &table, "/", &mut ctx)
}

#[tokio::test]
async fn hydrated_store_matches_server_snapshot() {
	let html = render_home(FakeApiClient::new().with_response(
		"/api/list.json",
		serde_json::json!({"data": [{"id": "1", "title": "1111"}]}),
	))
	.await;

	let payload = read_payload(&html).unwrap().unwrap();
	assert_eq!(payload.version, STATE_PAYLOAD_VERSION);

	let client = Arc::new(FakeApiClient::new());
	let store = isorender::hydration::hydrate_store(client.clone(), Some(payload.clone()));

	assert_eq!(store.state(), payload.state);
	assert_eq!(store.state().home.list[0].title, "1111");
	assert_eq!(client.request_count(), 0);
}

#[tokio::test]
async fn hydration_skips_fetch_for_populated_slice() {
	let html = render_home(FakeApiClient::new().with_response(
		"/api/list.json",
		serde_json::json!({"data": [{"id": "1", "title": "server-rendered"}]}),
	))
	.await;

	let payload = read_payload(&html).unwrap().unwrap();
	let client = Arc::new(FakeApiClient::new());
	let store = isorender::hydration::hydrate_store(client.clone(), Some(payload));

	app::ensure_home_loaded(store.clone()).await;

	assert_eq!(client.request_count(), 0);
	assert_eq!(store.state().home.list[0].title, "server-rendered");
}

#[tokio::test]
async fn degraded_server_state_still_hydrates() {
	let html = render_home(FakeApiClient::failing()).await;
	let payload = read_payload(&html).unwrap().unwrap();

	// The placeholder list crossed the wire like any other state.
	assert_eq!(payload.state.home.list.len(), 3);
	assert_eq!(payload.state.home.list[0].title, "1111");
}

#[test]
fn future_payload_version_is_rejected() {
	let html = format!(
		"<script id=\"{STATE_ELEMENT_ID}\" type=\"application/json\">{{\"version\":999,\"state\":{{\"home\":{{\"list\":[],\"name\":\"guest\"}}}}}}</script>"
	);
	assert!(matches!(
		read_payload(&html),
		Err(HydrationError::State(_))
	));
}

#[test]
fn document_without_payload_yields_none() {
	assert!(
		read_payload("<!DOCTYPE html><html><body><div id=\"root\"></div></body></html>")
			.unwrap()
			.is_none()
	);
}
