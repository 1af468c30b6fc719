use crate::widgets::html_escape;

/// Stylesheet and script URLs a page pulls in beyond its own chrome.
///
/// Views contribute assets (a rich-text editor, say) and the page
/// template renders them; merging is order-preserving and deduplicated so
/// two views asking for the same script load it once. Protocol-relative
/// URLs (`//cdn...`) pass through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Media {
	css: Vec<String>,
	js: Vec<String>,
}

impl Media {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_css(mut self, href: impl Into<String>) -> Self {
		self.add_css(href);
		self
	}

	pub fn with_js(mut self, src: impl Into<String>) -> Self {
		self.add_js(src);
		self
	}

	pub fn add_css(&mut self, href: impl Into<String>) {
		let href = href.into();
		if !self.css.contains(&href) {
			self.css.push(href);
		}
	}

	pub fn add_js(&mut self, src: impl Into<String>) {
		let src = src.into();
		if !self.js.contains(&src) {
			self.js.push(src);
		}
	}

	pub fn extend(&mut self, other: &Media) {
		for href in &other.css {
			self.add_css(href.clone());
		}
		for src in &other.js {
			self.add_js(src.clone());
		}
	}

	pub fn css(&self) -> &[String] {
		&self.css
	}

	pub fn js(&self) -> &[String] {
		&self.js
	}

	pub fn is_empty(&self) -> bool {
		self.css.is_empty() && self.js.is_empty()
	}

	/// `<link rel="stylesheet">` tags, one per line.
	pub fn render_css(&self) -> String {
		self.css
			.iter()
			.map(|href| format!("<link rel=\"stylesheet\" href=\"{}\">\n", html_escape(href)))
			.collect()
	}

	/// `<script src>` tags, one per line.
	pub fn render_js(&self) -> String {
		self.js
			.iter()
			.map(|src| format!("<script src=\"{}\"></script>\n", html_escape(src)))
			.collect()
	}
}
