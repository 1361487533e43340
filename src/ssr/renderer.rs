//! Server renderer: matched views to one complete HTML document.

use crate::router::{RouteTable, render_routes};
use crate::store::Store;

use super::context::RenderContext;
use super::state::StatePayload;

/// Options for document assembly.
#[derive(Debug, Clone)]
pub struct DocumentOptions {
	/// Language attribute for the `<html>` element.
	pub lang: String,
	/// The id of the root element the client hydrates into.
	pub root_id: String,
	/// The fixed script tag for the built client bundle.
	pub bundle_src: String,
	/// Title used when no view contributed one.
	pub default_title: String,
}

impl Default for DocumentOptions {
	fn default() -> Self {
		Self {
			lang: "en".to_string(),
			root_id: "root".to_string(),
			bundle_src: "/index.js".to_string(),
			default_title: "isorender".to_string(),
		}
	}
}

/// The server-side document renderer.
///
/// This type never fails: any error raised while rendering a view is a
/// fatal request failure surfaced by the caller as a 500, not something
/// the renderer recovers from.
#[derive(Debug, Clone, Default)]
pub struct SsrRenderer {
	options: DocumentOptions,
}

impl SsrRenderer {
	/// Creates a renderer with default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a renderer with custom options.
	pub fn with_options(options: DocumentOptions) -> Self {
		Self { options }
	}

	/// Renders the matched view tree for `path` into a complete HTML
	/// document: markup, head contributions, collected style fragments,
	/// and the embedded state snapshot.
	///
	/// Redirect and not-found signals raised by views land in `ctx`;
	/// the request handler inspects them to pick the response.
	pub fn render_page(
		&self,
		store: &Store,
		table: &RouteTable,
		path: &str,
		ctx: &mut RenderContext,
	) -> String {
		let matches = table.matches(path);
		if matches.is_empty() {
			ctx.set_not_found();
		}

		let markup = render_routes(&matches, store, ctx).render_to_string();

		// Snapshot after preload + render so the client sees exactly
		// what the server rendered from.
		let payload = StatePayload::new(store.state());

		self.wrap_document(&markup, ctx, &payload)
	}

	fn wrap_document(&self, markup: &str, ctx: &RenderContext, payload: &StatePayload) -> String {
		let mut html = String::with_capacity(markup.len() + 1024);

		html.push_str("<!DOCTYPE html>\n");
		html.push_str(&format!("<html lang=\"{}\">\n", self.options.lang));

		html.push_str("<head>\n");
		html.push_str("<meta charset=\"UTF-8\">\n");
		html.push_str(
			"<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
		);

		let title = ctx.head().title().unwrap_or(&self.options.default_title);
		html.push_str(&format!(
			"<title>{}</title>\n",
			crate::component::html_escape(title)
		));

		for meta in ctx.head().meta_tags() {
			html.push_str(&meta.to_html());
		}

		if !ctx.styles().is_empty() {
			html.push_str("<style>\n");
			html.push_str(&ctx.styles().join("\n"));
			html.push_str("\n</style>\n");
		}

		html.push_str("</head>\n");

		html.push_str("<body>\n");
		html.push_str(&format!("<div id=\"{}\">", self.options.root_id));
		html.push_str(markup);
		html.push_str("</div>\n");

		html.push_str(&format!(
			"<script src=\"{}\"></script>\n",
			self.options.bundle_src
		));

		html.push_str(&payload.to_script_tag());
		html.push('\n');

		html.push_str("</body>\n");
		html.push_str("</html>");

		html
	}
}
