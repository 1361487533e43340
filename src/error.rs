//! Error taxonomy.
//!
//! Loader failures never appear here: they are absorbed inside the
//! preload phase (degraded rendering, not request failure). What
//! remains is the fatal side: route-table construction, proxy and
//! static-file I/O, and render failures surfaced as 500s.

use crate::router::RouterError;

/// Top-level error type for the server side of the crate.
#[derive(Debug, thiserror::Error)]
pub enum IsorenderError {
	/// Route table construction or lookup failed.
	#[error(transparent)]
	Router(#[from] RouterError),
	/// The upstream proxy request failed.
	#[error("proxy request failed: {0}")]
	Proxy(#[from] reqwest::Error),
	/// Static file I/O failed.
	#[error("static file error: {0}")]
	Io(#[from] std::io::Error),
	/// A view raised an unrecoverable error during rendering.
	#[error("render failed: {0}")]
	Render(String),
	/// Server configuration was invalid.
	#[error("invalid configuration: {0}")]
	Config(String),
}
