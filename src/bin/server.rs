//! The SSR server binary.

use std::sync::Arc;

use isorender::server::{HttpServer, ServerHandler};
use isorender::store::UpstreamApiClient;
use isorender::{IsorenderError, ServerConfig, app};

#[tokio::main]
async fn main() -> Result<(), IsorenderError> {
	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
		)
		.init();

	let config = ServerConfig::from_env()?;
	let table = Arc::new(app::routes()?);
	let client = Arc::new(UpstreamApiClient::new(config.upstream_api.clone()));

	tracing::info!(upstream = %config.upstream_api, "starting isorender server");

	let handler = Arc::new(ServerHandler::new(&config, table, client));
	HttpServer::new(handler).listen(config.listen_addr).await
}
