use std::collections::HashMap;

/// Form value container
///
/// Holds the current values of the record being edited, keyed by field
/// name. Widgets read values out of it at render time; there is no
/// binding or validation lifecycle here.
#[derive(Debug, Clone, Default)]
pub struct Form {
	values: HashMap<String, serde_json::Value>,
}

impl Form {
	/// Create a new empty form
	///
	/// # Examples
	///
	/// ```
	/// use cms_forms::Form;
	///
	/// let form = Form::new();
	/// assert!(form.value("missing").is_none());
	/// ```
	pub fn new() -> Self {
		Self {
			values: HashMap::new(),
		}
	}

	/// Create a form pre-populated with values
	///
	/// # Examples
	///
	/// ```
	/// use cms_forms::Form;
	/// use std::collections::HashMap;
	/// use serde_json::json;
	///
	/// let mut values = HashMap::new();
	/// values.insert("name".to_string(), json!("John"));
	///
	/// let form = Form::with_values(values);
	/// assert_eq!(form.value("name"), Some(&json!("John")));
	/// ```
	pub fn with_values(values: HashMap<String, serde_json::Value>) -> Self {
		Self { values }
	}

	/// Set a field value
	///
	/// # Examples
	///
	/// ```
	/// use cms_forms::Form;
	/// use serde_json::json;
	///
	/// let form = Form::new().set("qty", json!(5));
	/// assert_eq!(form.value("qty"), Some(&json!(5)));
	/// ```
	pub fn set(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
		self.values.insert(name.into(), value);
		self
	}

	/// Get the stored value for a field, if any
	pub fn value(&self, name: &str) -> Option<&serde_json::Value> {
		self.values.get(name)
	}

	/// All stored values
	pub fn values(&self) -> &HashMap<String, serde_json::Value> {
		&self.values
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_form_set_and_value() {
		let form = Form::new()
			.set("char_field", json!("abc"))
			.set("int_field", json!(5));

		assert_eq!(form.value("char_field"), Some(&json!("abc")));
		assert_eq!(form.value("int_field"), Some(&json!(5)));
		assert!(form.value("other_field").is_none());
	}

	#[test]
	fn test_form_set_overwrites() {
		let form = Form::new().set("qty", json!(1)).set("qty", json!(2));
		assert_eq!(form.value("qty"), Some(&json!(2)));
	}
}
