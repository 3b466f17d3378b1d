//! Form widget rendering for CMS front-end forms
//!
//! This crate provides the rendering side of a CMS form builder:
//! - Field descriptors carrying the declared type, selection options and
//!   constraints of a model field
//! - A form value container standing in for the record being edited
//! - Widgets that serialize typed values into HTML form controls, with
//!   marshaller suffixes (`:int`, `:float`) on the input name so submitted
//!   strings convert back to their original types

pub mod field;
pub mod form;
pub mod widgets;

pub use field::{Choice, ChoiceKey, FieldDescriptor, FieldError, FieldResult, FieldType};
pub use form::Form;
pub use widgets::{HiddenInput, Widget, html_escape};
