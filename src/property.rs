//! Property constructors.
//!
//! All constructors are pure and infallible. Inputs are never checked for
//! consistency: a `min_length` above `max_length` is emitted as given.
//!
//! When `required` is true the property's own title is stored in its
//! `required` list. Consumers of the emitted documents rely on that shape,
//! so it is kept as is.
//!
//! Defaults are always emitted, zero values (`""`, `0`, `false`) included.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::types::{Property, PropertyType};
use crate::ui::UiProperty;

/// Pattern requiring an uppercase letter, a digit and a non-alphanumeric character.
pub const PASSWORD_PATTERN: &str = r"^(?=.*[A-Z])(?=.*\d)(?=.*[^A-Za-z\d]).+$";

/// Description attached to [`password`] properties.
pub const PASSWORD_DESCRIPTION: &str =
    "Must contain at least one uppercase letter, one number, and one special character.";

fn scalar(kind: PropertyType, title: &str, required: bool, default: Value) -> Property {
    Property {
        title: Some(title.to_string()),
        default: Some(default),
        required: if required {
            vec![title.to_string()]
        } else {
            Vec::new()
        },
        ..Property::of_kind(kind)
    }
}

/// A string with optional length bounds. A bound of `0` or less means "none".
pub fn string(
    title: &str,
    required: bool,
    min_length: i64,
    max_length: i64,
    default: &str,
) -> Property {
    let mut prop = scalar(PropertyType::String, title, required, Value::from(default));
    if min_length > 0 {
        prop.min_length = Some(min_length);
    }
    if max_length > 0 {
        prop.max_length = Some(max_length);
    }
    prop
}

/// A number with optional bounds.
pub fn number(
    title: &str,
    required: bool,
    minimum: Option<f64>,
    maximum: Option<f64>,
    default: f64,
) -> Property {
    Property {
        minimum,
        maximum,
        ..scalar(PropertyType::Number, title, required, Value::from(default))
    }
}

/// A number with a `multipleOf` step, paired with the widget hint to register
/// in the [`Ui`](crate::Ui) under the same name.
#[allow(clippy::too_many_arguments)]
pub fn number_with_widget(
    title: &str,
    required: bool,
    minimum: Option<f64>,
    maximum: Option<f64>,
    multiple_of: Option<f64>,
    default: f64,
    widget: &str,
    options: BTreeMap<String, Value>,
) -> (Property, UiProperty) {
    let mut prop = number(title, required, minimum, maximum, default);
    prop.multiple_of = multiple_of;
    let hint = UiProperty {
        widget: Some(widget.to_string()),
        options,
    };
    (prop, hint)
}

pub fn boolean(title: &str, required: bool, default: bool) -> Property {
    scalar(PropertyType::Boolean, title, required, Value::Bool(default))
}

/// A string restricted to `options`, labelled by `enum_names` position by position.
pub fn enum_string<S: Into<String>>(title: &str, options: Vec<S>, enum_names: Vec<S>) -> Property {
    Property {
        title: Some(title.to_string()),
        enum_names: enum_names.into_iter().map(Into::into).collect(),
        ..Property::of_kind(PropertyType::String)
    }
    .with_enum(options.into_iter().map(Into::<String>::into))
}

/// A number restricted to `options`, labelled by `enum_names` position by position.
pub fn enum_number<S: Into<String>>(title: &str, options: Vec<f64>, enum_names: Vec<S>) -> Property {
    Property {
        title: Some(title.to_string()),
        enum_names: enum_names.into_iter().map(Into::into).collect(),
        ..Property::of_kind(PropertyType::Number)
    }
    .with_enum(options)
}

fn formatted(title: &str, format: &str) -> Property {
    Property {
        title: Some(title.to_string()),
        format: Some(format.to_string()),
        ..Property::of_kind(PropertyType::String)
    }
}

pub fn email(title: &str) -> Property {
    formatted(title, "email")
}

pub fn uri(title: &str) -> Property {
    formatted(title, "uri")
}

/// A string with a fixed complexity pattern. `min_length` is always emitted.
pub fn password(title: &str, min_length: i64) -> Property {
    Property {
        title: Some(title.to_string()),
        description: Some(PASSWORD_DESCRIPTION.to_string()),
        min_length: Some(min_length),
        pattern: Some(PASSWORD_PATTERN.to_string()),
        ..Property::of_kind(PropertyType::String)
    }
}

/// Collect `(name, property)` pairs into a mapping for nested, array or
/// conditional use. Later duplicates win.
pub fn nested_properties<I, K>(fields: I) -> BTreeMap<String, Property>
where
    I: IntoIterator<Item = (K, Property)>,
    K: Into<String>,
{
    fields.into_iter().map(|(k, p)| (k.into(), p)).collect()
}
