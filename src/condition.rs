//! Conditional `if`/`then` blocks.
//!
//! Blocks are stored as pre-built pairs and emitted as independent `allOf`
//! members. They are never evaluated here.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::types::Property;

/// One side of a conditional block: properties to match or add, plus
/// the names they make required.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Condition {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Property>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl Condition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a condition from an existing property mapping.
    pub fn from_properties(properties: BTreeMap<String, Property>) -> Self {
        Self {
            properties,
            required: Vec::new(),
        }
    }

    /// Add or replace one property.
    pub fn property(mut self, name: impl Into<String>, property: Property) -> Self {
        self.properties.insert(name.into(), property);
        self
    }

    /// Append a required name. Duplicates are kept.
    pub fn require(mut self, name: impl Into<String>) -> Self {
        self.required.push(name.into());
        self
    }
}

/// An `if`/`then` pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConditionalStructure {
    #[serde(rename = "if")]
    pub if_: Condition,
    pub then: Condition,
}

impl ConditionalStructure {
    pub fn new(if_: Condition, then: Condition) -> Self {
        Self { if_, then }
    }

    /// Apply `then` when `discriminator` equals `value`.
    ///
    /// ```
    /// use form_schema::{property, Condition, ConditionalStructure};
    ///
    /// let block = ConditionalStructure::when(
    ///     "holidayType",
    ///     "beach",
    ///     Condition::new().property("sunscreen", property::boolean("Sunscreen", false, true)),
    /// );
    /// let value = serde_json::to_value(&block).unwrap();
    /// assert_eq!(value["if"]["properties"]["holidayType"]["const"], "beach");
    /// ```
    pub fn when(discriminator: impl Into<String>, value: impl Into<Value>, then: Condition) -> Self {
        Self {
            if_: Condition::new().property(discriminator, Property::constant(value)),
            then,
        }
    }
}
