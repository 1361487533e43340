//! View tree for server rendering and client hydration.
//!
//! The same `Page` tree is produced on both sides: serialized to a
//! string by the server renderer, reconciled against existing DOM by
//! the client hydrator.

mod head;
mod page;
mod styled;

pub use head::{Head, MetaTag};
pub(crate) use page::html_escape;
pub use page::{IntoPage, Page, PageElement};
pub use styled::styled;
