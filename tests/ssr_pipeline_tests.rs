//! End-to-end render pipeline: match, preload, render, respond.

use std::sync::Arc;
use std::time::Duration;

use http::StatusCode;
use http::header::LOCATION;
use isorender::app;
use isorender::http::{Handler, Request};
use isorender::server::SsrHandler;
use isorender::ssr::{STATE_ELEMENT_ID, SsrRenderer};
use isorender::testing::FakeApiClient;

fn handler(client: FakeApiClient) -> SsrHandler {
	SsrHandler::new(
		Arc::new(app::routes().unwrap()),
		Arc::new(client),
		SsrRenderer::new(),
		Duration::from_secs(1),
	)
}

#[tokio::test]
async fn home_renders_fetched_items() {
	let client = FakeApiClient::new().with_response(
		"/api/list.json",
		serde_json::json!({"data": [{"id": "1", "title": "1111"}]}),
	);
	let response = handler(client).handle(Request::get("/")).await.unwrap();

	assert_eq!(response.status, StatusCode::OK);
	let body = response.body_string();
	assert!(body.starts_with("<!DOCTYPE html>"));
	assert!(body.contains("1111"));
	assert!(body.contains("name is guest"));
}

#[tokio::test]
async fn unreachable_upstream_degrades_to_placeholder_list() {
	let response = handler(FakeApiClient::failing())
		.handle(Request::get("/"))
		.await
		.unwrap();

	assert_eq!(response.status, StatusCode::OK);
	let body = response.body_string();
	assert!(body.contains("1111"));
	assert!(body.contains("2222"));
	assert!(body.contains("3333"));
}

#[tokio::test]
async fn rendered_document_embeds_state_payload() {
	let client = FakeApiClient::new().with_response(
		"/api/list.json",
		serde_json::json!({"data": [{"id": "7", "title": "seventh"}]}),
	);
	let response = handler(client).handle(Request::get("/")).await.unwrap();
	let body = response.body_string();

	assert!(body.contains(&format!(
		"<script id=\"{STATE_ELEMENT_ID}\" type=\"application/json\">"
	)));
	let payload = isorender::hydration::read_payload(&body).unwrap().unwrap();
	assert_eq!(payload.state.home.list.len(), 1);
	assert_eq!(payload.state.home.list[0].title, "seventh");
}

#[tokio::test]
async fn unknown_path_responds_404_with_full_document() {
	let response = handler(FakeApiClient::new())
		.handle(Request::get("/nonexistent-path"))
		.await
		.unwrap();

	assert_eq!(response.status, StatusCode::NOT_FOUND);
	let body = response.body_string();
	assert!(body.starts_with("<!DOCTYPE html>"));
	assert!(body.contains("Page not found"));
}

#[tokio::test]
async fn retired_home_path_redirects_permanently() {
	let response = handler(FakeApiClient::new())
		.handle(Request::get("/home"))
		.await
		.unwrap();

	assert_eq!(response.status, StatusCode::MOVED_PERMANENTLY);
	assert_eq!(
		response.headers.get(LOCATION).and_then(|v| v.to_str().ok()),
		Some("/")
	);
	assert!(response.body_string().is_empty());
}

#[tokio::test]
async fn login_page_renders_without_loader() {
	let client = FakeApiClient::new();
	let response = handler(client).handle(Request::get("/login")).await.unwrap();

	assert_eq!(response.status, StatusCode::OK);
	let body = response.body_string();
	assert!(body.contains("<title>Login</title>"));
	assert!(body.contains("login-form"));
}

#[tokio::test]
async fn styles_are_merged_into_single_block() {
	let response = handler(FakeApiClient::new())
		.handle(Request::get("/"))
		.await
		.unwrap();
	let body = response.body_string();

	assert_eq!(body.matches("<style>").count(), 1);
	// Layout styles precede page styles, matching render order.
	let layout_at = body.find(".app-nav").unwrap();
	let home_at = body.find(".home-greeting").unwrap();
	assert!(layout_at < home_at);
}
