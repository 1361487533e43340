//! The route table: a static, ordered tree of path patterns, each
//! associated with a view and an optional data loader.
//!
//! Defined once at process start and immutable thereafter; the same
//! table drives the server renderer and the client hydrator.

mod pattern;
mod render;

pub use pattern::{PathPattern, RouteParams};
pub use render::render_routes;

use std::collections::HashSet;
use std::sync::Arc;

use crate::component::Page;
use crate::preload::LoaderFn;
use crate::ssr::RenderContext;
use crate::store::{Slice, Store};

/// Errors raised while building or using a route table.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RouterError {
	/// A catch-all entry was followed by further siblings.
	#[error("catch-all route must be the last sibling (found before `{0}`)")]
	CatchAllNotLast(String),
	/// Two loaders claimed the same state slice.
	#[error("slice `{0}` already has an owning loader")]
	DuplicateSliceOwner(String),
}

/// Everything a view can reach while rendering.
pub struct ViewScope<'a> {
	/// The request-scoped store (views read state through it).
	pub store: &'a Store,
	/// Path parameters extracted for this entry.
	pub params: &'a RouteParams,
	/// The out-of-band render context.
	pub ctx: &'a mut RenderContext,
}

/// A view factory: given the render scope and the already-rendered
/// child content (the outlet), produces this entry's page.
pub type ViewFn = Arc<dyn Fn(&mut ViewScope<'_>, Page) -> Page + Send + Sync>;

/// A route-associated loader together with the slice it owns.
#[derive(Clone)]
pub struct RouteLoader {
	slice: Slice,
	run: LoaderFn,
}

impl RouteLoader {
	/// Creates a loader owning the given slice.
	pub fn new(slice: Slice, run: LoaderFn) -> Self {
		Self { slice, run }
	}

	/// The slice this loader owns.
	pub fn slice(&self) -> Slice {
		self.slice
	}

	/// The loader function.
	pub fn run(&self) -> &LoaderFn {
		&self.run
	}
}

/// One entry of the route tree.
#[derive(Clone)]
pub struct RouteEntry {
	pattern: PathPattern,
	exact: bool,
	view: ViewFn,
	loader: Option<RouteLoader>,
	children: Vec<RouteEntry>,
}

impl std::fmt::Debug for RouteEntry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RouteEntry")
			.field("pattern", &self.pattern.as_str())
			.field("exact", &self.exact)
			.field("has_loader", &self.loader.is_some())
			.field("children", &self.children.len())
			.finish()
	}
}

impl RouteEntry {
	/// Creates an entry for the given pattern.
	pub fn new(pattern: &str, view: ViewFn) -> Self {
		Self {
			pattern: PathPattern::new(pattern),
			exact: false,
			view,
			loader: None,
			children: Vec::new(),
		}
	}

	/// Requires the pattern to match the whole path, not just a prefix.
	pub fn exact(mut self) -> Self {
		self.exact = true;
		self
	}

	/// Attaches the data loader owning the given slice.
	pub fn with_loader(mut self, slice: Slice, run: LoaderFn) -> Self {
		self.loader = Some(RouteLoader::new(slice, run));
		self
	}

	/// Appends a child entry. Children are evaluated in declaration
	/// order; the first structural match wins.
	pub fn child(mut self, entry: RouteEntry) -> Self {
		self.children.push(entry);
		self
	}

	/// The entry's pattern.
	pub fn pattern(&self) -> &PathPattern {
		&self.pattern
	}

	/// The entry's loader, if any.
	pub fn loader(&self) -> Option<&RouteLoader> {
		self.loader.as_ref()
	}

	/// The entry's view factory.
	pub fn view(&self) -> &ViewFn {
		&self.view
	}
}

/// A matched entry along the request path, with extracted parameters.
#[derive(Debug)]
pub struct RouteMatch<'a> {
	/// The matched entry.
	pub entry: &'a RouteEntry,
	/// Parameters captured from the path.
	pub params: RouteParams,
}

/// The immutable route tree, validated at construction.
#[derive(Debug)]
pub struct RouteTable {
	entries: Vec<RouteEntry>,
}

impl RouteTable {
	/// Builds and validates a route table.
	///
	/// Validation enforces the structural invariants: the catch-all
	/// entry must be the last of its siblings, and every state slice
	/// has at most one owning loader anywhere in the tree.
	pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouterError> {
		let mut owned: HashSet<Slice> = HashSet::new();
		Self::validate_level(&entries, &mut owned)?;
		Ok(Self { entries })
	}

	fn validate_level(
		entries: &[RouteEntry],
		owned: &mut HashSet<Slice>,
	) -> Result<(), RouterError> {
		let mut seen_catch_all = false;
		for entry in entries {
			if seen_catch_all {
				return Err(RouterError::CatchAllNotLast(
					entry.pattern.as_str().to_string(),
				));
			}
			if entry.pattern.is_catch_all() {
				seen_catch_all = true;
			}
			if let Some(loader) = &entry.loader
				&& !owned.insert(loader.slice())
			{
				return Err(RouterError::DuplicateSliceOwner(loader.slice().to_string()));
			}
			Self::validate_level(&entry.children, owned)?;
		}
		Ok(())
	}

	/// Walks the tree depth-first and returns the matched entries in
	/// root-to-leaf order, so layout-level entries precede nested page
	/// entries. At each level the first structurally matching sibling
	/// wins.
	pub fn matches(&self, path: &str) -> Vec<RouteMatch<'_>> {
		let mut out = Vec::new();
		Self::match_level(&self.entries, path, &mut out);
		out
	}

	fn match_level<'a>(entries: &'a [RouteEntry], path: &str, out: &mut Vec<RouteMatch<'a>>) {
		for entry in entries {
			if let Some(params) = entry.pattern.matches(path, entry.exact) {
				out.push(RouteMatch { entry, params });
				Self::match_level(&entry.children, path, out);
				return;
			}
		}
	}
}
