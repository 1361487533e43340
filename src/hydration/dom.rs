//! Browser entry point: attach the view tree to server-rendered markup.
//!
//! Reuses the existing DOM nodes where they already match the rendered
//! tree (reconciliation, not replacement); only mismatching nodes are
//! rebuilt.

use std::sync::Arc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Node};

use super::{HydrationError, hydrate_store, read_payload};
use crate::component::Page;
use crate::router::{RouteTable, render_routes};
use crate::ssr::{RenderContext, STATE_ELEMENT_ID, StatePayload};
use crate::store::{ApiClient, Store};

/// Hydrates the application: reads the embedded payload, seeds the
/// client store, renders the route table for the current location, and
/// reconciles the result against the existing markup under `root_id`.
///
/// Returns the seeded store so the caller can keep dispatching.
pub fn boot(
	table: &RouteTable,
	client: Arc<dyn ApiClient>,
	root_id: &str,
) -> Result<Arc<Store>, HydrationError> {
	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or(HydrationError::NoDocument)?;

	let payload = read_embedded_payload(&document)?;
	let store = hydrate_store(client, payload);

	let path = document
		.location()
		.and_then(|l| l.pathname().ok())
		.unwrap_or_else(|| "/".to_string());

	let mut ctx = RenderContext::new();
	let page = render_routes(&table.matches(&path), &store, &mut ctx);

	let root = document
		.get_element_by_id(root_id)
		.ok_or_else(|| HydrationError::RootNotFound(root_id.to_string()))?;
	reconcile_children(&document, &root, std::slice::from_ref(&page));

	Ok(store)
}

/// Reads the designated state element from the live document.
fn read_embedded_payload(document: &Document) -> Result<Option<StatePayload>, HydrationError> {
	let Some(element) = document.get_element_by_id(STATE_ELEMENT_ID) else {
		return Ok(None);
	};
	let Some(json) = element.text_content() else {
		return Ok(None);
	};
	Ok(Some(StatePayload::from_json(&json)?))
}

/// Reconciles the children of `parent` against the expected pages.
///
/// Matching element nodes are kept (attributes refreshed, children
/// recursed into); text nodes have their content updated in place;
/// anything else is replaced. Surplus DOM nodes are removed, missing
/// ones created.
fn reconcile_children(document: &Document, parent: &Element, expected: &[Page]) {
	let flat = flatten(expected);
	let existing = parent.child_nodes();

	for (index, page) in flat.iter().enumerate() {
		let current = existing.item(index as u32);
		match (page, current) {
			(Page::Element(el), Some(node)) => {
				let matches_tag = node
					.dyn_ref::<Element>()
					.map(|e| e.tag_name().eq_ignore_ascii_case(el.tag_name()))
					.unwrap_or(false);
				if matches_tag {
					let element = node.unchecked_into::<Element>();
					for (name, value) in el.attrs() {
						let _ = element.set_attribute(name, value);
					}
					reconcile_children(document, &element, el.child_pages());
				} else {
					replace_node(document, parent, &node, page);
				}
			}
			(Page::Text(text), Some(node)) => {
				if node.text_content().as_deref() != Some(text.as_ref()) {
					node.set_text_content(Some(text));
				}
			}
			(_, Some(node)) => {
				replace_node(document, parent, &node, page);
			}
			(_, None) => {
				if let Some(created) = create_node(document, page) {
					let _ = parent.append_child(&created);
				}
			}
		}
	}

	// Drop surplus nodes the render no longer produces.
	while existing.length() as usize > flat.len() {
		if let Some(extra) = existing.item(existing.length() - 1) {
			let _ = parent.remove_child(&extra);
		} else {
			break;
		}
	}
}

/// Flattens fragments so reconciliation sees the same node sequence the
/// server serialized.
fn flatten(pages: &[Page]) -> Vec<&Page> {
	let mut out = Vec::new();
	for page in pages {
		match page {
			Page::Fragment(children) => out.extend(flatten(children)),
			Page::Empty => {}
			other => out.push(other),
		}
	}
	out
}

fn replace_node(document: &Document, parent: &Element, current: &Node, page: &Page) {
	if let Some(created) = create_node(document, page) {
		let _ = parent.replace_child(&created, current);
	} else {
		let _ = parent.remove_child(current);
	}
}

fn create_node(document: &Document, page: &Page) -> Option<Node> {
	match page {
		Page::Element(el) => {
			let element = document.create_element(el.tag_name()).ok()?;
			for (name, value) in el.attrs() {
				let _ = element.set_attribute(name, value);
			}
			reconcile_children(document, &element, el.child_pages());
			Some(element.into())
		}
		Page::Text(text) => Some(document.create_text_node(text).into()),
		Page::Fragment(_) | Page::Empty => None,
	}
}
