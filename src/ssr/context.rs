//! Per-request render context.
//!
//! Rendering produces a string, not a structured result, so out-of-band
//! signals (redirects, not-found, style fragments, head metadata)
//! travel through this mutable bag instead. One context per render
//! pass; nothing else touches it concurrently.

use crate::component::Head;

/// How a recorded redirect should be materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectAction {
	/// Replace the current location.
	Replace,
}

/// A redirect recorded by a view during rendering.
///
/// The renderer has already begun producing string output and cannot
/// change status codes mid-stream, so views record the intent here and
/// the request handler issues the actual HTTP redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
	/// The action to take.
	pub action: RedirectAction,
	/// Target URL.
	pub url: String,
	/// Whether the redirect is permanent (301 vs 302).
	pub permanent: bool,
}

/// Out-of-band side channel for one server render pass.
#[derive(Debug, Default)]
pub struct RenderContext {
	redirect: Option<Redirect>,
	not_found: bool,
	styles: Vec<String>,
	head: Head,
}

impl RenderContext {
	/// Creates a fresh context for one request.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records a permanent redirect to the given URL.
	pub fn redirect_replace(&mut self, url: impl Into<String>) {
		self.redirect = Some(Redirect {
			action: RedirectAction::Replace,
			url: url.into(),
			permanent: true,
		});
	}

	/// Returns the recorded redirect, if any.
	pub fn redirect(&self) -> Option<&Redirect> {
		self.redirect.as_ref()
	}

	/// Flags the current path as not matching any real page.
	pub fn set_not_found(&mut self) {
		self.not_found = true;
	}

	/// Whether the not-found flag was raised.
	pub fn is_not_found(&self) -> bool {
		self.not_found
	}

	/// Appends a style fragment contributed by a view. Order of
	/// contribution is preserved in the document.
	pub fn push_style(&mut self, css: impl Into<String>) {
		self.styles.push(css.into());
	}

	/// The collected style fragments, in contribution order.
	pub fn styles(&self) -> &[String] {
		&self.styles
	}

	/// Folds another context's contributions into this one.
	///
	/// Call order defines precedence: a title or redirect in `other`
	/// replaces one already present, style fragments and meta tags
	/// append, the not-found flag is sticky.
	pub(crate) fn merge(&mut self, other: RenderContext) {
		if other.redirect.is_some() {
			self.redirect = other.redirect;
		}
		self.not_found |= other.not_found;
		self.styles.extend(other.styles);
		self.head.merge(other.head);
	}

	/// Mutable access to the head contributions.
	pub fn head_mut(&mut self) -> &mut Head {
		&mut self.head
	}

	/// The collected head contributions.
	pub fn head(&self) -> &Head {
		&self.head
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_context_starts_clean() {
		let ctx = RenderContext::new();
		assert!(ctx.redirect().is_none());
		assert!(!ctx.is_not_found());
		assert!(ctx.styles().is_empty());
		assert!(ctx.head().title().is_none());
	}

	#[test]
	fn test_redirect_replace_is_permanent() {
		let mut ctx = RenderContext::new();
		ctx.redirect_replace("/");
		let redirect = ctx.redirect().unwrap();
		assert_eq!(redirect.action, RedirectAction::Replace);
		assert_eq!(redirect.url, "/");
		assert!(redirect.permanent);
	}

	#[test]
	fn test_styles_preserve_contribution_order() {
		let mut ctx = RenderContext::new();
		ctx.push_style(".layout {}");
		ctx.push_style(".home {}");
		assert_eq!(ctx.styles(), [".layout {}", ".home {}"]);
	}
}
