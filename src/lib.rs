//! isorender - Isomorphic Server-Side Rendering
//!
//! A small isomorphic web stack: the same route table, views and store
//! drive both the server renderer and the client hydrator.
//!
//! ## Architecture
//!
//! - [`router`]: the static route tree matched root-to-leaf per request
//! - [`store`]: the request-scoped state container with injected data client
//! - [`preload`]: concurrent, failure-absorbing data loading before render
//! - [`component`]: the page tree, head contributions and styled views
//! - [`ssr`]: document rendering with the embedded state payload
//! - [`hydration`]: client boot from the embedded payload (wasm target)
//! - [`server`]: the HTTP front end with SSR dispatch, API proxy and statics
//! - [`app`]: the demo application wired through all of the above
//!
//! ## Rendering a request
//!
//! ```ignore
//! use std::sync::Arc;
//! use isorender::ssr::{RenderContext, SsrRenderer};
//! use isorender::store::{Store, UpstreamApiClient};
//!
//! let table = isorender::app::routes()?;
//! let client = Arc::new(UpstreamApiClient::new("http://localhost:4000".parse()?));
//! let store = Store::server(client);
//!
//! let matches = table.matches("/");
//! isorender::preload::preload(&matches, &store, std::time::Duration::from_secs(5)).await;
//!
//! let mut ctx = RenderContext::new();
//! let html = SsrRenderer::new().render_page(&store, &table, "/", &mut ctx);
//! ```

pub mod app;
pub mod component;
pub mod config;
pub mod error;
pub mod http;
pub mod hydration;
pub mod preload;
pub mod router;
pub mod server;
pub mod ssr;
pub mod store;
pub mod testing;

pub use component::{Head, IntoPage, MetaTag, Page, PageElement, styled};
pub use config::ServerConfig;
pub use error::IsorenderError;
pub use preload::{LoaderError, LoaderFn, preload};
pub use router::{RouteEntry, RouteTable, RouterError, ViewFn, ViewScope};
pub use ssr::{RenderContext, SsrRenderer, StatePayload};
pub use store::{Action, AppState, Slice, Store};
