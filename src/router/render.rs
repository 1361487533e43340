//! Rendering matched routes into one page tree.

use super::{RouteMatch, ViewScope};
use crate::component::Page;
use crate::ssr::RenderContext;
use crate::store::Store;

/// Renders a matched branch: each entry's view receives the content
/// rendered by its nested entries as the outlet, so the layout ends up
/// wrapping the page.
///
/// Views run leaf-to-root to build the outlet chain, but every entry
/// writes into its own context, and those are folded into `ctx` in
/// root-to-leaf match order. Layout styles therefore precede page
/// styles in the cascade, and a page title overrides the layout's
/// default rather than the reverse.
pub fn render_routes(matches: &[RouteMatch<'_>], store: &Store, ctx: &mut RenderContext) -> Page {
	let mut outlet = Page::Empty;
	let mut entry_ctxs: Vec<RenderContext> = Vec::with_capacity(matches.len());
	for matched in matches.iter().rev() {
		let mut entry_ctx = RenderContext::new();
		let mut scope = ViewScope {
			store,
			params: &matched.params,
			ctx: &mut entry_ctx,
		};
		outlet = (matched.entry.view())(&mut scope, outlet);
		entry_ctxs.push(entry_ctx);
	}
	for entry_ctx in entry_ctxs.into_iter().rev() {
		ctx.merge(entry_ctx);
	}
	outlet
}
