//! Form Widgets and HTML Rendering
//!
//! Widgets turn a field descriptor plus a stored value into an HTML form
//! control. Every attribute interpolated into markup is entity-escaped.

use std::collections::HashMap;

use crate::field::{FieldDescriptor, FieldResult};

pub mod hidden;

pub use hidden::HiddenInput;

/// Base widget trait
pub trait Widget: Send + Sync {
	/// Render the widget as HTML
	///
	/// `value` is the stored value for the field, if the form has one;
	/// `attrs` carries extra HTML attributes (CSS classes, data-*, ARIA).
	fn render(
		&self,
		field: &FieldDescriptor,
		value: Option<&serde_json::Value>,
		attrs: &HashMap<String, String>,
	) -> FieldResult<String>;
}

/// HTML escape utility
pub fn html_escape(s: &str) -> String {
	s.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
}

/// Append extra attributes in sorted key order, so rendered markup is
/// deterministic regardless of map iteration order.
pub(crate) fn push_attrs(html: &mut String, attrs: &HashMap<String, String>) {
	let mut extra: Vec<_> = attrs.iter().collect();
	extra.sort();
	for (key, val) in extra {
		html.push_str(&format!(r#" {}="{}""#, key, html_escape(val)));
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_html_escape() {
		assert_eq!(html_escape("<script>"), "&lt;script&gt;");
		assert_eq!(html_escape("A & B"), "A &amp; B");
		assert_eq!(html_escape(r#"He said "hi""#), "He said &quot;hi&quot;");
	}

	#[test]
	fn test_push_attrs_sorted() {
		let mut attrs = HashMap::new();
		attrs.insert("data-id".to_string(), "123".to_string());
		attrs.insert("class".to_string(), "form-control".to_string());

		let mut html = String::new();
		push_attrs(&mut html, &attrs);
		assert_eq!(html, r#" class="form-control" data-id="123""#);
	}
}
