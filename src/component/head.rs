//! Document head contributions collected during a render pass.
//!
//! Views contribute a title and meta tags through the render context;
//! the server renderer splices the merged result into the `<head>` of
//! the final document.

use crate::component::page::html_escape;

/// A `<meta>` tag contributed by a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
	/// The `name` attribute.
	pub name: String,
	/// The `content` attribute.
	pub content: String,
}

impl MetaTag {
	/// Creates a new meta tag.
	pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			content: content.into(),
		}
	}

	/// Renders the tag to HTML.
	pub fn to_html(&self) -> String {
		format!(
			"<meta name=\"{}\" content=\"{}\">\n",
			html_escape(&self.name),
			html_escape(&self.content)
		)
	}
}

/// Page metadata collected during one render pass.
///
/// Last writer wins for the title, mirroring how nested views override
/// their layout's default.
#[derive(Debug, Clone, Default)]
pub struct Head {
	title: Option<String>,
	meta_tags: Vec<MetaTag>,
}

impl Head {
	/// Creates an empty head.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the document title.
	pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
		self.title = Some(title.into());
		self
	}

	/// Adds a meta tag.
	pub fn add_meta(&mut self, name: impl Into<String>, content: impl Into<String>) -> &mut Self {
		self.meta_tags.push(MetaTag::new(name, content));
		self
	}

	/// Returns the contributed title, if any.
	pub fn title(&self) -> Option<&str> {
		self.title.as_deref()
	}

	/// Returns the contributed meta tags.
	pub fn meta_tags(&self) -> &[MetaTag] {
		&self.meta_tags
	}

	/// Folds another head into this one: a title in `other` wins,
	/// meta tags append.
	pub(crate) fn merge(&mut self, other: Head) {
		if let Some(title) = other.title {
			self.title = Some(title);
		}
		self.meta_tags.extend(other.meta_tags);
	}
}
