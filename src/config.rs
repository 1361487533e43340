//! Server configuration, environment-driven with defaults.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::IsorenderError;

/// Runtime configuration for the SSR server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
	/// Address the HTTP server binds to.
	pub listen_addr: SocketAddr,
	/// Origin of the upstream API the proxy and server loaders target.
	pub upstream_api: Url,
	/// Directory the built client bundle is served from.
	pub static_dir: PathBuf,
	/// Upper bound on the data preload phase; on expiry rendering
	/// proceeds with whatever state has settled.
	pub preload_timeout: Duration,
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self {
			listen_addr: ([127, 0, 0, 1], 3000).into(),
			// The upstream API origin the original deployment proxied to.
			upstream_api: Url::parse("http://localhost:4000").expect("static url"),
			static_dir: PathBuf::from("dist"),
			preload_timeout: Duration::from_millis(5000),
		}
	}
}

impl ServerConfig {
	/// Builds the configuration from `ISORENDER_*` environment
	/// variables, falling back to defaults for anything unset.
	pub fn from_env() -> Result<Self, IsorenderError> {
		let mut config = Self::default();

		if let Ok(value) = std::env::var("ISORENDER_LISTEN") {
			config.listen_addr = value
				.parse()
				.map_err(|_| IsorenderError::Config(format!("bad listen address: {value}")))?;
		}
		if let Ok(value) = std::env::var("ISORENDER_UPSTREAM_API") {
			config.upstream_api = Url::parse(&value)
				.map_err(|_| IsorenderError::Config(format!("bad upstream url: {value}")))?;
		}
		if let Ok(value) = std::env::var("ISORENDER_STATIC_DIR") {
			config.static_dir = PathBuf::from(value);
		}
		if let Ok(value) = std::env::var("ISORENDER_PRELOAD_TIMEOUT_MS") {
			let millis: u64 = value
				.parse()
				.map_err(|_| IsorenderError::Config(format!("bad preload timeout: {value}")))?;
			config.preload_timeout = Duration::from_millis(millis);
		}

		Ok(config)
	}
}
