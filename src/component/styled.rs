//! Style-fragment composition.
//!
//! Wraps a view with a CSS fragment: when rendered server-side the
//! fragment is appended to the render context (and ends up in the
//! document's single `<style>` block); on the client the markup already
//! carries the styles, so the wrapper contributes nothing.

use std::sync::Arc;

use crate::router::ViewFn;

/// Wraps a view so that rendering it also contributes `css` to the
/// render context. Explicit composition, no subclassing: the returned
/// view delegates to the inner one unchanged.
pub fn styled(view: ViewFn, css: &'static str) -> ViewFn {
	Arc::new(move |scope, outlet| {
		#[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
		scope.ctx.push_style(css);
		view(scope, outlet)
	})
}
