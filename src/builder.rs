//! Fluent schema assembler.

use std::collections::BTreeMap;

use crate::condition::{Condition, ConditionalStructure};
use crate::property;
use crate::types::{FormDocument, Property, PropertyType, Schema};
use crate::ui::Ui;

/// Accumulates properties and conditional blocks into a [`Schema`].
///
/// Every operation is total. Duplicate names overwrite the earlier entry.
/// Methods that declare a top-level field also record its name in the
/// display order, which may therefore hold duplicates.
///
/// ```
/// use form_schema::{property, SchemaBuilder};
///
/// let mut builder = SchemaBuilder::titled("Signup");
/// builder
///     .add_property("email", property::email("Email"))
///     .add_property("pass", property::password("Password", 8));
///
/// let schema = builder.build();
/// assert_eq!(schema.properties.len(), 2);
/// assert_eq!(builder.display_order(), ["email", "pass"]);
/// ```
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    schema: Schema,
    display_order: Vec<String>,
    conditions: Vec<ConditionalStructure>,
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaBuilder {
    /// Create a builder for an untitled object schema.
    pub fn new() -> Self {
        Self {
            schema: Schema::new(None),
            display_order: Vec::new(),
            conditions: Vec::new(),
        }
    }

    /// Create a builder for an object schema with a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            schema: Schema::new(Some(title.into())),
            ..Self::new()
        }
    }

    fn insert(&mut self, name: String, property: Property) {
        if self.schema.properties.contains_key(&name) {
            tracing::trace!(name = %name, "overwriting property");
        }
        self.schema.properties.insert(name, property);
    }

    /// Declare a property and append it to the display order.
    pub fn add_property(&mut self, name: impl Into<String>, property: Property) -> &mut Self {
        let name = name.into();
        self.insert(name.clone(), property);
        self.display_order.push(name);
        self
    }

    /// Declare a property without touching the display order.
    pub fn set_property(&mut self, name: impl Into<String>, property: Property) -> &mut Self {
        self.insert(name.into(), property);
        self
    }

    /// Declare an array whose items are objects with the given fields.
    pub fn add_array_property(
        &mut self,
        name: impl Into<String>,
        item_properties: BTreeMap<String, Property>,
    ) -> &mut Self {
        self.add_property(name, Property::array(item_properties))
    }

    /// Merge fields into the object property at `parent`, creating an empty
    /// object there first if needed. Existing sibling fields are kept.
    ///
    /// Nested fields are not top-level display entries, so the display order
    /// is left alone.
    pub fn add_nested_properties(
        &mut self,
        parent: impl Into<String>,
        fields: BTreeMap<String, Property>,
    ) -> &mut Self {
        let target = self
            .schema
            .properties
            .entry(parent.into())
            .or_insert_with(|| Property::of_kind(PropertyType::Object));
        target.properties.extend(fields);
        self
    }

    /// Append a conditional block. Blocks are not deduplicated or checked.
    pub fn add_condition(&mut self, condition: ConditionalStructure) -> &mut Self {
        self.conditions.push(condition);
        self
    }

    /// Append a conditional block built from its parts.
    pub fn add_conditional_structure(
        &mut self,
        if_properties: BTreeMap<String, Property>,
        then_properties: BTreeMap<String, Property>,
        then_required: Vec<String>,
    ) -> &mut Self {
        let then = Condition {
            properties: then_properties,
            required: then_required,
        };
        self.add_condition(ConditionalStructure::new(
            Condition::from_properties(if_properties),
            then,
        ))
    }

    /// Shorthand for [`property::string`] followed by [`add_property`](Self::add_property).
    pub fn string(
        &mut self,
        name: impl Into<String>,
        title: &str,
        required: bool,
        min_length: i64,
        max_length: i64,
        default: &str,
    ) -> &mut Self {
        let prop = property::string(title, required, min_length, max_length, default);
        self.add_property(name, prop)
    }

    /// Shorthand for [`property::number`] followed by [`add_property`](Self::add_property).
    pub fn number(
        &mut self,
        name: impl Into<String>,
        title: &str,
        required: bool,
        minimum: Option<f64>,
        maximum: Option<f64>,
        default: f64,
    ) -> &mut Self {
        let prop = property::number(title, required, minimum, maximum, default);
        self.add_property(name, prop)
    }

    /// Shorthand for [`property::boolean`] followed by [`add_property`](Self::add_property).
    pub fn boolean(
        &mut self,
        name: impl Into<String>,
        title: &str,
        required: bool,
        default: bool,
    ) -> &mut Self {
        let prop = property::boolean(title, required, default);
        self.add_property(name, prop)
    }

    /// Names in the order they were declared, duplicates included.
    pub fn display_order(&self) -> &[String] {
        &self.display_order
    }

    /// A UI document whose order is the tracked display order.
    pub fn tracked_ui(&self) -> Ui {
        Ui {
            order: self.display_order.clone(),
            ..Ui::default()
        }
    }

    /// Finalize into a schema. The builder stays usable.
    pub fn build(&self) -> Schema {
        let mut schema = self.schema.clone();
        schema.all_of = self.conditions.clone();
        tracing::debug!(
            properties = schema.properties.len(),
            conditions = schema.all_of.len(),
            "built schema"
        );
        schema
    }

    /// Finalize into a document paired with `ui`.
    pub fn build_with_ui(&self, ui: Ui) -> FormDocument {
        FormDocument::new(self.build(), Some(ui))
    }
}
