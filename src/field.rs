//! Field descriptors and value marshalling
//!
//! A [`FieldDescriptor`] carries the metadata a widget needs to render a
//! model field: its declared type, selection options and constraints. The
//! declared type also fixes how a stored value travels through an HTML
//! form: numeric types get a marshaller suffix on the input name
//! (`qty:int`, `price:float`) so the submitted string can be converted
//! back to its original type on the way in.

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum FieldError {
	#[error("Expected a {expected} value, got {got}")]
	TypeMismatch {
		expected: &'static str,
		got: &'static str,
	},
	#[error("Value {value} is not one of the declared choices")]
	UnknownChoice { value: String },
}

pub type FieldResult<T> = Result<T, FieldError>;

/// Typed key of a selection option
///
/// Selection fields keep their keys typed rather than stringly: the key
/// type decides the marshaller suffix of the rendered input name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChoiceKey {
	Str(String),
	Int(i64),
	Float(f64),
}

impl ChoiceKey {
	/// Marshaller suffix implied by the key type, if any
	pub fn marshaller(&self) -> Option<&'static str> {
		match self {
			ChoiceKey::Str(_) => None,
			ChoiceKey::Int(_) => Some("int"),
			ChoiceKey::Float(_) => Some("float"),
		}
	}

	/// Transport string for this key
	pub fn marshal(&self) -> String {
		match self {
			ChoiceKey::Str(s) => s.clone(),
			ChoiceKey::Int(i) => i.to_string(),
			ChoiceKey::Float(f) => format_float(*f),
		}
	}

	fn matches(&self, value: &serde_json::Value) -> bool {
		match self {
			ChoiceKey::Str(s) => value.as_str() == Some(s),
			ChoiceKey::Int(i) => value.as_i64() == Some(*i),
			ChoiceKey::Float(f) => value.as_f64() == Some(*f),
		}
	}
}

impl From<&str> for ChoiceKey {
	fn from(value: &str) -> Self {
		ChoiceKey::Str(value.to_string())
	}
}

impl From<String> for ChoiceKey {
	fn from(value: String) -> Self {
		ChoiceKey::Str(value)
	}
}

impl From<i64> for ChoiceKey {
	fn from(value: i64) -> Self {
		ChoiceKey::Int(value)
	}
}

impl From<f64> for ChoiceKey {
	fn from(value: f64) -> Self {
		ChoiceKey::Float(value)
	}
}

/// A single selection option: a typed key and its human-readable label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
	pub key: ChoiceKey,
	pub label: String,
}

impl Choice {
	/// Create a new choice
	///
	/// # Examples
	///
	/// ```
	/// use cms_forms::field::{Choice, ChoiceKey};
	///
	/// let choice = Choice::new(1, "A");
	/// assert_eq!(choice.key, ChoiceKey::Int(1));
	/// assert_eq!(choice.label, "A");
	/// ```
	pub fn new(key: impl Into<ChoiceKey>, label: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			label: label.into(),
		}
	}
}

/// Declared type category of a model field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum FieldType {
	Char,
	Integer,
	Float,
	Selection { choices: Vec<Choice> },
	Many2one { comodel: String },
}

impl FieldType {
	/// Marshaller suffix appended to the HTML input name
	///
	/// The suffix depends only on the declared type category: integers and
	/// relational references marshal as `int`, floats as `float`, plain
	/// strings carry no suffix. Selection fields take the suffix from the
	/// key type of their declared choices.
	///
	/// # Examples
	///
	/// ```
	/// use cms_forms::field::FieldType;
	///
	/// assert_eq!(FieldType::Char.marshaller(), None);
	/// assert_eq!(FieldType::Integer.marshaller(), Some("int"));
	/// assert_eq!(FieldType::Float.marshaller(), Some("float"));
	/// ```
	pub fn marshaller(&self) -> Option<&'static str> {
		match self {
			FieldType::Char => None,
			FieldType::Integer | FieldType::Many2one { .. } => Some("int"),
			FieldType::Float => Some("float"),
			FieldType::Selection { choices } => {
				choices.first().and_then(|choice| choice.key.marshaller())
			}
		}
	}

	/// Serialize a stored value to its transport string
	///
	/// The stored value must fit the declared type: a string for `Char`, an
	/// integer for `Integer` and `Many2one`, a number for `Float`, and one
	/// of the declared keys for `Selection`. Anything else is a
	/// [`FieldError`].
	///
	/// # Examples
	///
	/// ```
	/// use cms_forms::field::FieldType;
	/// use serde_json::json;
	///
	/// assert_eq!(FieldType::Integer.marshal(&json!(5)).unwrap(), "5");
	/// assert_eq!(FieldType::Float.marshal(&json!(5.0)).unwrap(), "5.0");
	/// assert!(FieldType::Integer.marshal(&json!("abc")).is_err());
	/// ```
	pub fn marshal(&self, value: &serde_json::Value) -> FieldResult<String> {
		match self {
			FieldType::Char => value
				.as_str()
				.map(str::to_string)
				.ok_or_else(|| FieldError::TypeMismatch {
					expected: "string",
					got: json_type(value),
				}),
			FieldType::Integer | FieldType::Many2one { .. } => value
				.as_i64()
				.map(|i| i.to_string())
				.ok_or_else(|| FieldError::TypeMismatch {
					expected: "integer",
					got: json_type(value),
				}),
			FieldType::Float => value
				.as_f64()
				.map(format_float)
				.ok_or_else(|| FieldError::TypeMismatch {
					expected: "number",
					got: json_type(value),
				}),
			FieldType::Selection { choices } => choices
				.iter()
				.find(|choice| choice.key.matches(value))
				.map(|choice| choice.key.marshal())
				.ok_or_else(|| FieldError::UnknownChoice {
					value: value.to_string(),
				}),
		}
	}
}

/// Field metadata consumed by widgets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
	pub name: String,
	pub field_type: FieldType,
	pub label: Option<String>,
	pub required: bool,
	pub help_text: Option<String>,
}

impl FieldDescriptor {
	/// Create a new descriptor with the given name and type
	///
	/// # Examples
	///
	/// ```
	/// use cms_forms::field::{FieldDescriptor, FieldType};
	///
	/// let field = FieldDescriptor::new("char_field", FieldType::Char);
	/// assert_eq!(field.name, "char_field");
	/// assert!(!field.required);
	/// ```
	pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
		Self {
			name: name.into(),
			field_type,
			label: None,
			required: false,
			help_text: None,
		}
	}

	/// Mark the field as required
	///
	/// # Examples
	///
	/// ```
	/// use cms_forms::field::{FieldDescriptor, FieldType};
	///
	/// let field = FieldDescriptor::new("char_field", FieldType::Char).required();
	/// assert!(field.required);
	/// ```
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	/// Set the label for the field
	///
	/// # Examples
	///
	/// ```
	/// use cms_forms::field::{FieldDescriptor, FieldType};
	///
	/// let field = FieldDescriptor::new("qty", FieldType::Integer).with_label("Quantity");
	/// assert_eq!(field.label, Some("Quantity".to_string()));
	/// ```
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Set the help text for the field
	pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
		self.help_text = Some(help_text.into());
		self
	}

	/// HTML name attribute for this field, marshaller suffix included
	///
	/// # Examples
	///
	/// ```
	/// use cms_forms::field::{FieldDescriptor, FieldType};
	///
	/// let field = FieldDescriptor::new("int_field", FieldType::Integer);
	/// assert_eq!(field.html_name(), "int_field:int");
	///
	/// let field = FieldDescriptor::new("char_field", FieldType::Char);
	/// assert_eq!(field.html_name(), "char_field");
	/// ```
	pub fn html_name(&self) -> String {
		match self.field_type.marshaller() {
			Some(suffix) => format!("{}:{}", self.name, suffix),
			None => self.name.clone(),
		}
	}
}

/// Format a float the way serde_json serializes it, keeping the trailing
/// `.0` on whole numbers (`5.0`, not `5`).
fn format_float(value: f64) -> String {
	match serde_json::Number::from_f64(value) {
		Some(n) => n.to_string(),
		// NaN and infinities have no JSON representation
		None => value.to_string(),
	}
}

fn json_type(value: &serde_json::Value) -> &'static str {
	match value {
		serde_json::Value::Null => "null",
		serde_json::Value::Bool(_) => "boolean",
		serde_json::Value::Number(_) => "number",
		serde_json::Value::String(_) => "string",
		serde_json::Value::Array(_) => "array",
		serde_json::Value::Object(_) => "object",
	}
}
