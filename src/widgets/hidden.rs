//! Hidden input widget

use std::collections::HashMap;

use crate::field::{FieldDescriptor, FieldResult};
use crate::widgets::{Widget, html_escape, push_attrs};

/// Hidden input widget
///
/// Renders a single `<input type="hidden">` carrying the field's value in
/// transport form. The input name takes the field's marshaller suffix
/// (`qty:int`, `price:float`), so the submitted string can be converted
/// back to the declared type on the way in.
#[derive(Debug, Clone)]
pub struct HiddenInput;

impl HiddenInput {
	/// Create a new hidden input widget
	pub fn new() -> Self {
		Self
	}
}

impl Default for HiddenInput {
	fn default() -> Self {
		Self::new()
	}
}

impl Widget for HiddenInput {
	fn render(
		&self,
		field: &FieldDescriptor,
		value: Option<&serde_json::Value>,
		attrs: &HashMap<String, String>,
	) -> FieldResult<String> {
		let marshalled = match value {
			Some(v) => field.field_type.marshal(v)?,
			None => String::new(),
		};

		let mut html = format!(
			r#"<input type="hidden" name="{}" value="{}""#,
			html_escape(&field.html_name()),
			html_escape(&marshalled)
		);

		if field.required {
			html.push_str(r#" required="required""#);
		}

		push_attrs(&mut html, attrs);

		html.push_str(" />");
		Ok(html)
	}
}
