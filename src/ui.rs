//! UI document: display order and widget hints for a form renderer.
//!
//! Kept apart from [`Schema`](crate::Schema) so a schema can be produced and
//! inspected without any UI concerns. Names are not checked against the
//! schema; see [`lint`](crate::lint) for that.

use std::collections::BTreeMap;

use serde::ser::{Error as _, SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;

/// Key holding the display order inside the UI document.
pub const ORDER_KEY: &str = "ui:order";

/// Widget hint for a single property.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UiProperty {
    #[serde(rename = "ui:widget", skip_serializing_if = "Option::is_none")]
    pub widget: Option<String>,
    #[serde(rename = "ui:options", skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, Value>,
}

impl UiProperty {
    /// Hint that selects a widget by name (e.g. `"range"`, `"password"`).
    pub fn widget(widget: impl Into<String>) -> Self {
        Self {
            widget: Some(widget.into()),
            options: BTreeMap::new(),
        }
    }

    /// Add or replace one widget option.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

/// The UI sidecar.
///
/// Serializes as `{"ui:order": [...], "<name>": {...}, ...}`. A hint stored
/// under [`ORDER_KEY`] would clash with the order entry, so serialization
/// fails for it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ui {
    pub order: Vec<String>,
    pub properties: BTreeMap<String, UiProperty>,
}

impl Serialize for Ui {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.properties.contains_key(ORDER_KEY) {
            return Err(S::Error::custom(format!(
                "widget hint name \"{}\" is reserved for the display order",
                ORDER_KEY
            )));
        }

        let len = self.properties.len() + usize::from(!self.order.is_empty());
        let mut map = serializer.serialize_map(Some(len))?;
        if !self.order.is_empty() {
            map.serialize_entry(ORDER_KEY, &self.order)?;
        }
        for (name, hint) in &self.properties {
            map.serialize_entry(name, hint)?;
        }
        map.end()
    }
}

impl Ui {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the display order wholesale.
    pub fn set_order<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.order = names.into_iter().map(Into::into).collect();
        self
    }

    /// Insert or overwrite the hint for `name`.
    pub fn add_property(&mut self, name: impl Into<String>, hint: UiProperty) -> &mut Self {
        let name = name.into();
        if self.properties.contains_key(&name) {
            tracing::trace!(name = %name, "overwriting ui hint");
        }
        self.properties.insert(name, hint);
        self
    }
}
