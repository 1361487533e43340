//! Server-side request handling: SSR dispatch, API proxy, static files.

mod handler;
mod http;
mod proxy;
mod static_files;

pub use handler::{ServerHandler, SsrHandler};
pub use http::HttpServer;
pub use proxy::ApiProxy;
pub use static_files::StaticFiles;
