//! Form Schema Builder
//!
//! Fluent construction of JSON Schema documents plus a UI sidecar in the
//! shape react-jsonschema-form expects.
//!
//! The builder never rejects input: every operation succeeds and reproduces
//! its arguments in the output. Use [`lint`] afterwards if you want the
//! document checked.
//!
//! # Example
//!
//! ```
//! use form_schema::{property, Condition, ConditionalStructure, SchemaBuilder, Ui, UiProperty};
//!
//! let mut builder = SchemaBuilder::titled("Trip");
//! builder
//!     .string("name", "Name", true, 3, 10, "")
//!     .number("budget", "Budget", false, None, None, 42.0)
//!     .add_property(
//!         "kind",
//!         property::enum_string("Kind", vec!["snow", "beach"], vec!["Snow", "Beach"]),
//!     )
//!     .add_condition(ConditionalStructure::when(
//!         "kind",
//!         "beach",
//!         Condition::new().property("towels", property::number("Towels", false, None, None, 0.0)),
//!     ));
//!
//! let mut ui = Ui::new();
//! ui.set_order(["kind", "name", "budget"]);
//! ui.add_property("budget", UiProperty::widget("range"));
//!
//! let doc = builder.build_with_ui(ui);
//! let json = serde_json::to_value(&doc).unwrap();
//!
//! assert_eq!(json["properties"]["name"]["minLength"], 3);
//! // `required` lives on the leaf and holds the field's own title
//! assert_eq!(json["properties"]["name"]["required"][0], "Name");
//! assert!(json["properties"]["budget"].get("minimum").is_none());
//! assert_eq!(json["allOf"][0]["if"]["properties"]["kind"]["const"], "beach");
//! assert_eq!(json["ui"]["budget"]["ui:widget"], "range");
//! ```
//!
//! # Output shape
//!
//! | Key | Present when |
//! |-----|--------------|
//! | `title` | builder created with [`SchemaBuilder::titled`] |
//! | `type` | always (`"object"`) |
//! | `properties` | always |
//! | `allOf` | at least one conditional block |
//! | `ui` | document built with [`SchemaBuilder::build_with_ui`] |

mod builder;
mod condition;
mod error;
mod linter;
mod output;
pub mod property;
pub mod samples;
mod types;
mod ui;

pub use builder::SchemaBuilder;
pub use condition::{Condition, ConditionalStructure};
pub use error::OutputError;
pub use linter::{lint, Diagnostic, LintResult, Severity};
pub use output::{dump, to_json, write_file};
pub use types::{FormDocument, Property, PropertyType, Schema};
pub use ui::{Ui, UiProperty, ORDER_KEY};
