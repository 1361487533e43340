//! The SSR request handler and the top-level dispatch.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::ServerConfig;
use crate::error::IsorenderError;
use crate::http::{Handler, Request, Response};
use crate::preload::preload;
use crate::router::RouteTable;
use crate::ssr::{RenderContext, SsrRenderer};
use crate::store::{ApiClient, Store};

use super::proxy::ApiProxy;
use super::static_files::StaticFiles;

/// Renders one page per request: fresh store, match, preload, render,
/// then pick the response from the render context.
pub struct SsrHandler {
	table: Arc<RouteTable>,
	client: Arc<dyn ApiClient>,
	renderer: SsrRenderer,
	preload_timeout: std::time::Duration,
}

impl SsrHandler {
	/// Creates the handler over a validated route table.
	pub fn new(
		table: Arc<RouteTable>,
		client: Arc<dyn ApiClient>,
		renderer: SsrRenderer,
		preload_timeout: std::time::Duration,
	) -> Self {
		Self {
			table,
			client,
			renderer,
			preload_timeout,
		}
	}
}

#[async_trait]
impl Handler for SsrHandler {
	async fn handle(&self, request: Request) -> Result<Response, IsorenderError> {
		// One store per in-flight request; discarded with the response.
		let store = Store::server(self.client.clone());

		let matches = self.table.matches(&request.path);
		preload(&matches, &store, self.preload_timeout).await;

		let mut ctx = RenderContext::new();
		let html = self
			.renderer
			.render_page(&store, &self.table, &request.path, &mut ctx);

		if let Some(redirect) = ctx.redirect() {
			tracing::info!(path = %request.path, to = %redirect.url, "redirecting");
			return Ok(Response::redirect(&redirect.url, redirect.permanent));
		}
		if ctx.is_not_found() {
			tracing::info!(path = %request.path, "not found");
			return Ok(Response::not_found_html(html));
		}

		tracing::debug!(path = %request.path, "rendered");
		Ok(Response::html(html))
	}
}

/// Top-level handler: `/api/*` goes to the reverse proxy, static assets
/// are served from the bundle directory, everything else is rendered.
pub struct ServerHandler {
	ssr: SsrHandler,
	proxy: ApiProxy,
	statics: StaticFiles,
}

impl ServerHandler {
	/// Wires the full request pipeline from configuration.
	pub fn new(
		config: &ServerConfig,
		table: Arc<RouteTable>,
		client: Arc<dyn ApiClient>,
	) -> Self {
		Self {
			ssr: SsrHandler::new(
				table,
				client,
				SsrRenderer::new(),
				config.preload_timeout,
			),
			proxy: ApiProxy::new(config.upstream_api.clone()),
			statics: StaticFiles::new(config.static_dir.clone()),
		}
	}
}

#[async_trait]
impl Handler for ServerHandler {
	async fn handle(&self, request: Request) -> Result<Response, IsorenderError> {
		if request.path.starts_with("/api/") {
			return self.proxy.forward(&request).await;
		}

		if let Some(response) = self.statics.serve(&request.path).await? {
			return Ok(response);
		}

		self.ssr.handle(request).await
	}
}
