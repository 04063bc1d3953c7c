//! Core types for schema construction.
//!
//! Every field that is unset is left out of the emitted JSON, so a missing
//! bound never turns into a spurious `0`.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::condition::ConditionalStructure;
use crate::ui::Ui;

/// Structural type of a property (`"type"` in JSON Schema).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    String,
    Number,
    Boolean,
    Array,
    Object,
}

impl PropertyType {
    /// Returns the JSON Schema type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::String => "string",
            PropertyType::Number => "number",
            PropertyType::Boolean => "boolean",
            PropertyType::Array => "array",
            PropertyType::Object => "object",
        }
    }
}

/// One field's type and constraint descriptor.
///
/// `kind` is optional because matching fragments inside conditional blocks
/// (e.g. `{"const": "beach"}`) carry no type of their own.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<PropertyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Property>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Property>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    /// Holds the property's own title when it was built as required.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub enum_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(rename = "const", skip_serializing_if = "Option::is_none")]
    pub constant: Option<Value>,
}

impl Property {
    /// Create an empty property of the given kind.
    pub fn of_kind(kind: PropertyType) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    /// Create an object property holding the given fields.
    pub fn object(properties: BTreeMap<String, Property>) -> Self {
        Self {
            properties,
            ..Self::of_kind(PropertyType::Object)
        }
    }

    /// Create an array property whose elements are objects with the given fields.
    pub fn array(item_properties: BTreeMap<String, Property>) -> Self {
        Self {
            items: Some(Box::new(Self::object(item_properties))),
            ..Self::of_kind(PropertyType::Array)
        }
    }

    /// Create a type-less `{"const": value}` fragment for use in `if` conditions.
    pub fn constant(value: impl Into<Value>) -> Self {
        Self {
            constant: Some(value.into()),
            ..Self::default()
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the allowed literal values.
    pub fn with_enum<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }
}

/// The root object schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub properties: BTreeMap<String, Property>,
    #[serde(rename = "allOf", skip_serializing_if = "Vec::is_empty")]
    pub all_of: Vec<ConditionalStructure>,
}

impl Schema {
    /// Create an empty object schema.
    pub fn new(title: Option<String>) -> Self {
        Self {
            title,
            kind: PropertyType::Object,
            properties: BTreeMap::new(),
            all_of: Vec::new(),
        }
    }
}

/// A finished schema paired with its optional UI document.
///
/// Schema fields sit at the top level; the UI document, when present,
/// is emitted under `"ui"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormDocument {
    #[serde(flatten)]
    pub schema: Schema,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui: Option<Ui>,
}

impl FormDocument {
    /// Pair a schema with a UI document.
    pub fn new(schema: Schema, ui: Option<Ui>) -> Self {
        Self { schema, ui }
    }
}

impl From<Schema> for FormDocument {
    fn from(schema: Schema) -> Self {
        Self { schema, ui: None }
    }
}
