//! Server-side rendering: render context, document assembly, and the
//! embedded state payload.

mod context;
mod renderer;
mod state;

pub use context::{Redirect, RedirectAction, RenderContext};
pub use renderer::{DocumentOptions, SsrRenderer};
pub use state::{STATE_ELEMENT_ID, STATE_PAYLOAD_VERSION, StateError, StatePayload};
