//! Integration tests for schema construction.

use form_schema::{
    property, samples, to_json, Condition, ConditionalStructure, FormDocument, Property,
    PropertyType, SchemaBuilder, Ui, UiProperty,
};
use serde_json::{json, Value};

fn as_json(doc: &FormDocument) -> Value {
    serde_json::to_value(doc).unwrap()
}

// === Property Factory Tests ===

mod property_factory {
    use super::*;

    #[test]
    fn string_bounds_emitted_only_when_positive() {
        for (min, max) in [(0, 0), (3, 0), (0, 10), (3, 10), (-1, -1)] {
            let value = serde_json::to_value(property::string("S", false, min, max, "")).unwrap();
            assert_eq!(value.get("minLength").is_some(), min > 0, "min {}", min);
            assert_eq!(value.get("maxLength").is_some(), max > 0, "max {}", max);
        }
    }

    #[test]
    fn required_quirk_is_single_title() {
        let props = [
            property::string("Title A", true, 0, 0, ""),
            property::number("Title B", true, None, None, 0.0),
            property::boolean("Title C", true, false),
        ];
        for prop in props {
            let title = prop.title.clone().unwrap();
            assert_eq!(prop.required, vec![title]);
        }
    }

    #[test]
    fn zero_defaults_reach_the_output() {
        let count = serde_json::to_value(property::number("Count", false, None, None, 0.0)).unwrap();
        assert_eq!(count["default"], 0.0);

        let agree = serde_json::to_value(property::boolean("Agree", false, false)).unwrap();
        assert_eq!(agree["default"], false);

        let note = serde_json::to_value(property::string("Note", false, 0, 0, "")).unwrap();
        assert_eq!(note["default"], "");
    }

    #[test]
    fn kinds_only_populate_their_fields() {
        let num = property::number("N", false, Some(1.0), Some(2.0), 1.5);
        assert!(num.min_length.is_none() && num.pattern.is_none() && num.format.is_none());

        let text = property::string("S", false, 1, 2, "x");
        assert!(text.minimum.is_none() && text.maximum.is_none() && text.multiple_of.is_none());

        let flag = property::boolean("B", false, true);
        assert!(flag.min_length.is_none() && flag.minimum.is_none() && flag.enum_values.is_none());
    }

    #[test]
    fn malformed_inputs_are_reproduced() {
        let value =
            serde_json::to_value(property::number("N", false, Some(10.0), Some(1.0), 0.0)).unwrap();
        assert_eq!(value["minimum"], 10.0);
        assert_eq!(value["maximum"], 1.0);

        let value = serde_json::to_value(property::enum_string("E", vec!["a"], vec![])).unwrap();
        assert_eq!(value["enum"], json!(["a"]));
        assert!(value.get("enumNames").is_none());
    }
}

// === Assembler Tests ===

mod assembler {
    use super::*;

    #[test]
    fn round_trip_scenario() {
        let mut builder = SchemaBuilder::titled("HEY");
        builder
            .string("exampleString", "Example String", true, 3, 10, "default value")
            .number("exampleNumber", "Example Number", false, None, None, 42.0);

        let doc = FormDocument::from(builder.build());
        let text = to_json(&doc, true).unwrap();
        let parsed: Value = serde_json::from_str(&text).unwrap();

        let s = &parsed["properties"]["exampleString"];
        assert_eq!(s["minLength"], 3);
        assert_eq!(s["maxLength"], 10);
        assert_eq!(s["required"], json!(["Example String"]));
        assert_eq!(s["default"], "default value");

        let n = &parsed["properties"]["exampleNumber"];
        assert!(n.get("minimum").is_none());
        assert!(n.get("maximum").is_none());
        assert!(n.get("required").is_none());
        assert_eq!(n["default"], 42.0);

        assert_eq!(parsed["type"], "object");
        assert_eq!(parsed["title"], "HEY");
        assert!(parsed.get("allOf").is_none());
        assert!(parsed.get("ui").is_none());
    }

    #[test]
    fn duplicate_names_last_write_wins() {
        let mut builder = SchemaBuilder::new();
        builder
            .add_property("dup", property::email("First"))
            .add_property("other", property::uri("Other"))
            .add_property("dup", property::uri("Second"));

        let schema = builder.build();
        assert_eq!(schema.properties["dup"].title.as_deref(), Some("Second"));
        assert_eq!(builder.display_order(), ["dup", "other", "dup"]);
    }

    #[test]
    fn nested_properties_create_then_merge() {
        let mut builder = SchemaBuilder::new();
        builder.add_nested_properties(
            "nestedObject",
            property::nested_properties([
                ("email", property::email("Email")),
                ("name", property::string("test", true, 0, 100, "Aidan")),
            ]),
        );
        let first = builder.build();
        assert_eq!(
            serde_json::to_value(&first.properties["nestedObject"]).unwrap(),
            json!({
                "type": "object",
                "properties": {
                    "email": { "type": "string", "title": "Email", "format": "email" },
                    "name": {
                        "type": "string",
                        "title": "test",
                        "default": "Aidan",
                        "maxLength": 100,
                        "required": ["test"]
                    }
                }
            })
        );

        builder.add_nested_properties(
            "nestedObject",
            property::nested_properties([("email", property::uri("Web"))]),
        );
        let second = builder.build();
        let nested = &second.properties["nestedObject"].properties;
        assert_eq!(nested["email"], property::uri("Web"));
        assert_eq!(nested["name"], first.properties["nestedObject"].properties["name"]);
    }

    #[test]
    fn array_property_shape() {
        let x = property::string("X", false, 0, 5, "");
        let mut builder = SchemaBuilder::new();
        builder.add_array_property("list", property::nested_properties([("x", x.clone())]));

        let value = serde_json::to_value(builder.build()).unwrap();
        let list = &value["properties"]["list"];
        assert_eq!(list["type"], "array");
        assert_eq!(list["items"]["type"], "object");
        assert_eq!(
            list["items"]["properties"],
            json!({ "x": serde_json::to_value(&x).unwrap() })
        );
    }

    #[test]
    fn chained_on_temporary_builder() {
        let schema = SchemaBuilder::titled("IF/THEN")
            .set_property(
                "holidayType",
                Property::of_kind(PropertyType::String).with_enum(["snow", "beach"]),
            )
            .build();
        assert_eq!(schema.properties.len(), 1);
    }
}

// === Conditional Block Tests ===

mod conditionals {
    use super::*;

    #[test]
    fn beach_scenario() {
        let a = property::number("want a new aa", false, None, Some(8.0), 1.0);
        let mut builder = SchemaBuilder::new();
        builder
            .set_property(
                "holidayType",
                Property::of_kind(PropertyType::String).with_enum(["snow", "beach"]),
            )
            .add_condition(ConditionalStructure::new(
                Condition::new().property("holidayType", Property::constant("beach")),
                Condition::new().property("a", a.clone()),
            ));

        let value = serde_json::to_value(builder.build()).unwrap();
        assert_eq!(value["allOf"][0]["if"]["properties"]["holidayType"]["const"], "beach");
        assert_eq!(
            value["allOf"][0]["then"]["properties"]["a"],
            serde_json::to_value(&a).unwrap()
        );
        assert!(value["allOf"][0]["then"].get("required").is_none());
    }

    #[test]
    fn blocks_are_independent_all_of_members() {
        let doc = samples::conditional();
        let value = as_json(&doc);
        let all_of = value["allOf"].as_array().unwrap();
        assert_eq!(all_of.len(), 2);
        assert_eq!(all_of[1]["if"]["properties"]["holidayType"]["const"], "snow");
        assert_eq!(all_of[1]["then"]["required"], json!(["a"]));
        assert!(value.get("if").is_none());
    }

    #[test]
    fn emitted_conditionals_drive_a_validator() {
        let schema = serde_json::to_value(samples::conditional().schema).unwrap();
        let validator = jsonschema::validator_for(&schema).unwrap();

        assert!(validator.is_valid(&json!({ "holidayType": "beach", "a": 3 })));
        assert!(!validator.is_valid(&json!({ "holidayType": "beach", "a": 9 })));
        assert!(validator.is_valid(&json!({ "holidayType": "snow", "a": "skis" })));
        assert!(!validator.is_valid(&json!({ "holidayType": "snow", "a": 3 })));
        assert!(!validator.is_valid(&json!({ "holidayType": "snow" })));
        assert!(!validator.is_valid(&json!({ "holidayType": "desert" })));
    }
}

// === UI Document Tests ===

mod ui_document {
    use super::*;

    #[test]
    fn order_is_replaced_wholesale() {
        let mut ui = Ui::new();
        ui.set_order(["a", "b"]);
        ui.set_order(["b"]);

        let doc = SchemaBuilder::new().build_with_ui(ui);
        assert_eq!(as_json(&doc)["ui"]["ui:order"], json!(["b"]));
    }

    #[test]
    fn hints_need_no_schema_property() {
        let mut ui = Ui::new();
        ui.add_property("ghost", UiProperty::widget("range").option("step", 5));

        let doc = SchemaBuilder::new().build_with_ui(ui);
        let value = as_json(&doc);
        assert_eq!(value["ui"]["ghost"]["ui:widget"], "range");
        assert_eq!(value["ui"]["ghost"]["ui:options"]["step"], 5);
        assert!(value["properties"].get("ghost").is_none());
    }

    #[test]
    fn schema_is_untouched_by_ui() {
        let mut builder = SchemaBuilder::new();
        builder.boolean("flag", "Flag", false, true);
        let plain = builder.build();

        let mut ui = builder.tracked_ui();
        ui.add_property("flag", UiProperty::widget("radio"));
        let doc = builder.build_with_ui(ui);
        assert_eq!(doc.schema, plain);
    }
}

// === Sample Document Tests ===

mod sample_documents {
    use super::*;

    #[test]
    fn showcase_shape() {
        let value = as_json(&samples::showcase());
        assert_eq!(value["title"], "New Demo");
        assert_eq!(value["properties"]["integerRangeSteps"]["multipleOf"], 10.0);
        assert_eq!(value["properties"]["tasks"]["items"]["type"], "object");
        assert!(value["properties"]["pass1"].get("format").is_none());
        assert_eq!(value["properties"]["uri"]["format"], "uri");
        assert_eq!(value["ui"]["integerRangeSteps"]["ui:widget"], "range");
        assert_eq!(
            value["ui"]["pass1"]["ui:options"]["help"],
            "Hint: Make it strong!"
        );
        assert_eq!(value["ui"]["ui:order"].as_array().unwrap().len(), 11);
    }

    #[test]
    fn showcase_schema_compiles() {
        let mut schema = serde_json::to_value(samples::showcase().schema).unwrap();
        // pattern uses lookaheads, which not every regex engine accepts
        schema["properties"]["pass1"]
            .as_object_mut()
            .unwrap()
            .remove("pattern");
        let validator = jsonschema::validator_for(&schema).unwrap();

        assert!(validator.is_valid(&json!({ "ratio": 0.25, "integerRangeSteps": 30 })));
        assert!(!validator.is_valid(&json!({ "ratio": 2 })));
        assert!(!validator.is_valid(&json!({ "integerRangeSteps": 35 })));
        assert!(!validator.is_valid(&json!({ "exampleString": "ab" })));
        assert!(!validator.is_valid(&json!({ "exampleEnumString": "c" })));
    }

    #[test]
    fn simple_keeps_explicit_order() {
        let value = as_json(&samples::simple());
        assert_eq!(
            value["ui"]["ui:order"],
            json!(["exampleString", "exampleNumber"])
        );
        assert_eq!(value["properties"]["exampleNumber"]["required"], json!(["Example Num"]));
    }
}
