//! Top-level dispatch: SSR, API proxy, and static assets from one handler.

use std::sync::Arc;

use http::StatusCode;
use isorender::app;
use isorender::http::{Handler, Request};
use isorender::server::ServerHandler;
use isorender::testing::FakeApiClient;
use isorender::ServerConfig;

fn handler_with_static_dir(dir: std::path::PathBuf) -> ServerHandler {
	let config = ServerConfig {
		static_dir: dir,
		// A port nothing listens on, so proxied requests fail fast.
		upstream_api: "http://127.0.0.1:9".parse().unwrap(),
		..ServerConfig::default()
	};
	ServerHandler::new(
		&config,
		Arc::new(app::routes().unwrap()),
		Arc::new(FakeApiClient::new()),
	)
}

fn scratch_dir(name: &str) -> std::path::PathBuf {
	let dir = std::env::temp_dir().join(format!("isorender-{}-{}", name, std::process::id()));
	std::fs::create_dir_all(&dir).unwrap();
	dir
}

#[tokio::test]
async fn bundle_file_is_served_with_content_type() {
	let dir = scratch_dir("bundle");
	std::fs::write(dir.join("index.js"), "console.log('hi');").unwrap();

	let response = handler_with_static_dir(dir)
		.handle(Request::get("/index.js"))
		.await
		.unwrap();

	assert_eq!(response.status, StatusCode::OK);
	assert_eq!(
		response
			.headers
			.get(http::header::CONTENT_TYPE)
			.and_then(|v| v.to_str().ok()),
		Some("application/javascript")
	);
	assert!(response.body_string().contains("console.log"));
}

#[tokio::test]
async fn missing_asset_falls_through_to_ssr() {
	let dir = scratch_dir("fallthrough");

	let response = handler_with_static_dir(dir)
		.handle(Request::get("/login"))
		.await
		.unwrap();

	assert_eq!(response.status, StatusCode::OK);
	assert!(response.body_string().contains("<title>Login</title>"));
}

#[tokio::test]
async fn unreachable_upstream_api_maps_to_bad_gateway() {
	let dir = scratch_dir("proxy");

	let response = handler_with_static_dir(dir)
		.handle(Request::get("/api/list.json"))
		.await
		.unwrap();

	assert_eq!(response.status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn api_prefix_never_reaches_the_renderer() {
	let dir = scratch_dir("prefix");

	let response = handler_with_static_dir(dir)
		.handle(Request::get("/api/does-not-exist"))
		.await
		.unwrap();

	// Proxied (and failed), not rendered as the catch-all page.
	assert_eq!(response.status, StatusCode::BAD_GATEWAY);
	assert!(!response.body_string().contains("Page not found"));
}
