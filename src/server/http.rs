//! HTTP server loop: accept connections, drive the handler.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::{TcpListener, TcpStream};

use crate::error::IsorenderError;
use crate::http::{Handler, Request, Response};

/// The HTTP server: one spawned task per connection.
pub struct HttpServer {
	handler: Arc<dyn Handler>,
}

impl HttpServer {
	/// Creates a server over the given handler.
	pub fn new(handler: Arc<dyn Handler>) -> Self {
		Self { handler }
	}

	/// Binds and serves until an accept error occurs.
	pub async fn listen(self, addr: SocketAddr) -> Result<(), IsorenderError> {
		let listener = TcpListener::bind(addr).await?;
		tracing::info!(%addr, "listening");

		loop {
			let (stream, peer) = listener.accept().await?;
			let handler = self.handler.clone();

			tokio::task::spawn(async move {
				if let Err(err) = Self::handle_connection(stream, handler).await {
					tracing::warn!(%peer, error = %err, "connection error");
				}
			});
		}
	}

	async fn handle_connection(
		stream: TcpStream,
		handler: Arc<dyn Handler>,
	) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
		let io = TokioIo::new(stream);
		let service = service_fn(move |hyper_request: hyper::Request<hyper::body::Incoming>| {
			let handler = handler.clone();
			async move {
				let request = Request {
					method: hyper_request.method().clone(),
					path: hyper_request.uri().path().to_string(),
					query: hyper_request.uri().query().map(|q| q.to_string()),
					headers: hyper_request.headers().clone(),
				};

				let response = match handler.handle(request).await {
					Ok(response) => response,
					Err(err) => {
						// Render failures are fatal for the request,
						// never for the server.
						tracing::error!(error = %err, "request failed");
						Response::internal_error()
					}
				};

				Ok::<_, Infallible>(response.into_hyper())
			}
		});

		http1::Builder::new().serve_connection(io, service).await?;
		Ok(())
	}
}
