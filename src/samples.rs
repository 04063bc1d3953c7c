//! Bundled sample forms.
//!
//! Each sample can be pasted into the react-jsonschema-form playground to
//! check how a renderer treats the builder's output.

use std::collections::BTreeMap;

use crate::builder::SchemaBuilder;
use crate::condition::{Condition, ConditionalStructure};
use crate::property::{self, nested_properties};
use crate::types::{FormDocument, Property, PropertyType};
use crate::ui::{Ui, UiProperty};

/// Names accepted by [`sample`].
pub const SAMPLE_NAMES: &[&str] = &["simple", "showcase", "conditional"];

/// Look up a sample by name.
pub fn sample(name: &str) -> Option<FormDocument> {
    match name {
        "simple" => Some(simple()),
        "showcase" => Some(showcase()),
        "conditional" => Some(conditional()),
        _ => None,
    }
}

/// One required bounded string and one number.
pub fn simple() -> FormDocument {
    let mut builder = SchemaBuilder::titled("HEY");
    builder
        .string("exampleString", "Example String", true, 3, 10, "default value")
        .number("exampleNumber", "Example Num", true, None, None, 11.0);

    let mut ui = Ui::new();
    ui.set_order(["exampleString", "exampleNumber"]);
    builder.build_with_ui(ui)
}

/// Every property constructor, nested objects, arrays and widget hints.
pub fn showcase() -> FormDocument {
    let mut builder = SchemaBuilder::titled("New Demo");
    let mut ui = Ui::new();

    builder
        .string("exampleString", "Example String", true, 3, 10, "default value")
        .number("exampleNumber", "Example Number", true, None, None, 11.0)
        .add_property(
            "exampleEnumString",
            property::enum_string("Example Enum String", vec!["a", "b"], vec!["Option A", "Option B"]),
        )
        .add_property(
            "exampleEnumNumber",
            property::enum_number("Example Enum Number", vec![1.0, 2.0], vec!["One", "Two"]),
        )
        .add_property(
            "ratio",
            property::number("Ratio", false, Some(0.0), Some(1.0), 0.5),
        )
        .boolean("subscribe", "Subscribe", false, true);

    let (steps, steps_hint) = property::number_with_widget(
        "Integer Range Steps",
        false,
        Some(0.0),
        Some(100.0),
        Some(10.0),
        50.0,
        "range",
        BTreeMap::new(),
    );
    builder.add_property("integerRangeSteps", steps);
    ui.add_property("integerRangeSteps", steps_hint);

    builder.add_nested_properties(
        "nestedObject",
        nested_properties([
            ("email", property::email("Email")),
            ("name", property::string("test", true, 0, 100, "Aidan")),
        ]),
    );

    builder
        .add_array_property(
            "tasks",
            nested_properties([
                ("title", property::string("Task Title", true, 0, 0, "")),
                ("done", property::number("Done", false, None, None, 0.0)),
            ]),
        )
        .add_property("uri", property::uri("URI"))
        .add_property("pass1", property::password("Password", 8));

    ui.set_order([
        "exampleString",
        "exampleNumber",
        "exampleEnumString",
        "exampleEnumNumber",
        "ratio",
        "subscribe",
        "integerRangeSteps",
        "nestedObject",
        "tasks",
        "uri",
        "pass1",
    ]);
    ui.add_property(
        "pass1",
        UiProperty::widget("password").option("help", "Hint: Make it strong!"),
    );

    builder.build_with_ui(ui)
}

/// Extra fields that appear depending on the chosen holiday type.
pub fn conditional() -> FormDocument {
    let mut builder = SchemaBuilder::titled("IF/THEN");
    builder.add_property(
        "holidayType",
        Property::of_kind(PropertyType::String)
            .with_title("Holiday Type")
            .with_enum(["snow", "beach"]),
    );

    let cap = Some(8.0);
    let beach = nested_properties([
        ("a", property::number("want a new aa", false, None, cap, 1.0)),
        ("b", property::number("want a new bb", false, None, cap, 1.0)),
    ]);
    builder.add_condition(ConditionalStructure::when(
        "holidayType",
        "beach",
        Condition::from_properties(beach.clone()),
    ));

    let snow = Condition::new()
        .property("a", property::string("want a new aa str", false, 1, 100, "hey"))
        .property("bb", beach["b"].clone())
        .require("a");
    builder.add_condition(ConditionalStructure::when("holidayType", "snow", snow));

    builder.build_with_ui(builder.tracked_ui())
}
