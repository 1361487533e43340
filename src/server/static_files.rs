//! Static asset serving for the built client bundle.

use std::path::{Component, Path, PathBuf};

use bytes::Bytes;
use http::StatusCode;

use crate::error::IsorenderError;
use crate::http::Response;

/// Serves files from the bundle output directory.
#[derive(Debug, Clone)]
pub struct StaticFiles {
	dir: PathBuf,
}

impl StaticFiles {
	/// Creates a server rooted at `dir`.
	pub fn new(dir: PathBuf) -> Self {
		Self { dir }
	}

	/// Serves the file at `path` if it exists under the root.
	///
	/// Returns `Ok(None)` when the path does not correspond to a file,
	/// letting the caller fall through to SSR. Paths escaping the root
	/// are refused outright.
	pub async fn serve(&self, path: &str) -> Result<Option<Response>, IsorenderError> {
		let relative = path.trim_start_matches('/');
		if relative.is_empty() {
			return Ok(None);
		}

		let candidate = Path::new(relative);
		if candidate
			.components()
			.any(|c| !matches!(c, Component::Normal(_)))
		{
			return Ok(Some(Response::new(StatusCode::FORBIDDEN)));
		}

		let full = self.dir.join(candidate);
		match tokio::fs::read(&full).await {
			Ok(contents) => Ok(Some(
				Response::new(StatusCode::OK)
					.with_body(Bytes::from(contents), content_type_for(&full)),
			)),
			Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
			Err(err) if err.kind() == std::io::ErrorKind::IsADirectory => Ok(None),
			Err(err) => Err(err.into()),
		}
	}
}

fn content_type_for(path: &Path) -> &'static str {
	match path.extension().and_then(|e| e.to_str()) {
		Some("js") => "application/javascript",
		Some("css") => "text/css",
		Some("html") => "text/html; charset=utf-8",
		Some("json") => "application/json",
		Some("wasm") => "application/wasm",
		Some("svg") => "image/svg+xml",
		Some("png") => "image/png",
		Some("ico") => "image/x-icon",
		_ => "application/octet-stream",
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn test_missing_file_falls_through() {
		let statics = StaticFiles::new(PathBuf::from("definitely-missing-dir"));
		let response = statics.serve("/index.js").await.unwrap();
		assert!(response.is_none());
	}

	#[tokio::test]
	async fn test_traversal_is_refused() {
		let statics = StaticFiles::new(PathBuf::from("dist"));
		let response = statics.serve("/../etc/passwd").await.unwrap().unwrap();
		assert_eq!(response.status, StatusCode::FORBIDDEN);
	}

	#[tokio::test]
	async fn test_root_path_falls_through() {
		let statics = StaticFiles::new(PathBuf::from("dist"));
		assert!(statics.serve("/").await.unwrap().is_none());
	}

	#[test]
	fn test_content_types() {
		assert_eq!(
			content_type_for(Path::new("index.js")),
			"application/javascript"
		);
		assert_eq!(content_type_for(Path::new("style.css")), "text/css");
		assert_eq!(
			content_type_for(Path::new("weird.bin")),
			"application/octet-stream"
		);
	}
}
