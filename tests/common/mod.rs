//! Shared fixtures for widget rendering tests

use cms_forms::{FieldDescriptor, FieldType, Form};
use scraper::{ElementRef, Html, Selector};
use serde_json::json;

/// A form pre-populated with one value per supported field type
pub fn fake_form() -> Form {
	Form::new()
		.set("char_field", json!("abc"))
		.set("int_field", json!(5))
		.set("float_field", json!(5.0))
		.set("selection_str_field", json!("1"))
		.set("selection_integer_field", json!(2))
		.set("selection_float_field", json!(4.0))
		.set("many2one_field", json!(10))
}

/// A plain, non-required field descriptor
pub fn fake_field(name: &str, field_type: FieldType) -> FieldDescriptor {
	FieldDescriptor::new(name, field_type)
}

/// Parse rendered markup as a document fragment
pub fn parse_fragment(markup: &str) -> Html {
	Html::parse_fragment(markup)
}

/// Find all input elements with the given name attribute
pub fn find_inputs<'a>(doc: &'a Html, name: &str) -> Vec<ElementRef<'a>> {
	let selector = Selector::parse(&format!(r#"input[name="{}"]"#, name))
		.expect("valid input selector");
	doc.select(&selector).collect()
}
