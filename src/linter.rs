//! Document linting - static checks on a finished form document.
//!
//! The builder accepts anything; this pass reports what a form renderer or
//! schema validator would later trip over:
//! - contradictory bounds (`minLength > maxLength`, `minimum > maximum`)
//! - `enumNames` that do not line up with `enum`
//! - negative lengths and non-positive `multipleOf`
//! - UI entries and conditions that name no schema property
//! - widget hints under the reserved `ui:order` key

use std::collections::HashSet;

use serde::Serialize;

use crate::types::{FormDocument, Property, Schema};
use crate::ui::{Ui, ORDER_KEY};

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A single diagnostic message from linting.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: String,
    /// JSON pointer into the emitted document (e.g. "/properties/age/minimum")
    pub path: String,
    pub message: String,
}

/// Result of linting one document.
#[derive(Debug, Clone, Serialize)]
pub struct LintResult {
    pub errors: usize,
    pub warnings: usize,
    /// Whether warnings counted as failures.
    pub strict: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

impl LintResult {
    /// Returns true if there are no errors, and no warnings in strict mode.
    pub fn is_ok(&self) -> bool {
        self.errors == 0 && (!self.strict || self.warnings == 0)
    }
}

/// Lint a document. If `strict` is true, warnings are treated as errors.
pub fn lint(document: &FormDocument, strict: bool) -> LintResult {
    let mut diagnostics = Vec::new();

    check_schema(&document.schema, &mut diagnostics);
    if let Some(ui) = &document.ui {
        check_ui(ui, &document.schema, &mut diagnostics);
    }

    let errors = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count();
    let warnings = diagnostics.len() - errors;
    tracing::debug!(errors, warnings, "linted document");

    LintResult {
        errors,
        warnings,
        strict,
        diagnostics,
    }
}

/// Escape a key for use as a JSON pointer segment (RFC 6901).
fn pointer_segment(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}

fn push(diagnostics: &mut Vec<Diagnostic>, severity: Severity, code: &str, path: String, message: String) {
    diagnostics.push(Diagnostic {
        severity,
        code: code.to_string(),
        path,
        message,
    });
}

fn check_schema(schema: &Schema, diagnostics: &mut Vec<Diagnostic>) {
    for (name, prop) in &schema.properties {
        let path = format!("/properties/{}", pointer_segment(name));
        check_property(prop, &path, diagnostics);
    }

    for (i, block) in schema.all_of.iter().enumerate() {
        for (name, prop) in &block.if_.properties {
            let path = format!("/allOf/{}/if/properties/{}", i, pointer_segment(name));
            if !schema.properties.contains_key(name) {
                push(
                    diagnostics,
                    Severity::Warning,
                    "W004",
                    path.clone(),
                    format!("condition references unknown property: {}", name),
                );
            }
            check_property(prop, &path, diagnostics);
        }
        for (name, prop) in &block.then.properties {
            let path = format!("/allOf/{}/then/properties/{}", i, pointer_segment(name));
            check_property(prop, &path, diagnostics);
        }
    }
}

/// Recursively check one property and everything nested under it.
fn check_property(prop: &Property, path: &str, diagnostics: &mut Vec<Diagnostic>) {
    for (key, bound) in [("minLength", prop.min_length), ("maxLength", prop.max_length)] {
        if let Some(n) = bound.filter(|n| *n < 0) {
            push(
                diagnostics,
                Severity::Error,
                "E004",
                format!("{}/{}", path, key),
                format!("{} must not be negative, got {}", key, n),
            );
        }
    }

    if let (Some(min), Some(max)) = (prop.min_length, prop.max_length) {
        if min > max {
            push(
                diagnostics,
                Severity::Error,
                "E001",
                path.to_string(),
                format!("minLength {} exceeds maxLength {}", min, max),
            );
        }
    }

    if let (Some(min), Some(max)) = (prop.minimum, prop.maximum) {
        if min > max {
            push(
                diagnostics,
                Severity::Error,
                "E002",
                path.to_string(),
                format!("minimum {} exceeds maximum {}", min, max),
            );
        }
    }

    if !prop.enum_names.is_empty() {
        let values = prop.enum_values.as_ref().map_or(0, Vec::len);
        if values != prop.enum_names.len() {
            push(
                diagnostics,
                Severity::Error,
                "E003",
                format!("{}/enumNames", path),
                format!(
                    "{} enumNames for {} enum values",
                    prop.enum_names.len(),
                    values
                ),
            );
        }
    }

    if let Some(step) = prop.multiple_of.filter(|s| *s <= 0.0) {
        push(
            diagnostics,
            Severity::Error,
            "E005",
            format!("{}/multipleOf", path),
            format!("multipleOf must be greater than 0, got {}", step),
        );
    }

    if let Some(items) = &prop.items {
        check_property(items, &format!("{}/items", path), diagnostics);
    }
    for (name, child) in &prop.properties {
        let child_path = format!("{}/properties/{}", path, pointer_segment(name));
        check_property(child, &child_path, diagnostics);
    }
}

fn check_ui(ui: &Ui, schema: &Schema, diagnostics: &mut Vec<Diagnostic>) {
    let mut seen = HashSet::new();
    for (i, name) in ui.order.iter().enumerate() {
        let path = format!("/ui/ui:order/{}", i);
        if !schema.properties.contains_key(name) {
            push(
                diagnostics,
                Severity::Warning,
                "W001",
                path.clone(),
                format!("ui:order names unknown property: {}", name),
            );
        }
        if !seen.insert(name.as_str()) {
            push(
                diagnostics,
                Severity::Warning,
                "W002",
                path,
                format!("duplicate ui:order entry: {}", name),
            );
        }
    }

    for name in ui.properties.keys() {
        if name == ORDER_KEY {
            push(
                diagnostics,
                Severity::Error,
                "E006",
                format!("/ui/{}", pointer_segment(name)),
                format!("widget hint uses reserved key: {}", name),
            );
            continue;
        }
        if !schema.properties.contains_key(name) {
            push(
                diagnostics,
                Severity::Warning,
                "W003",
                format!("/ui/{}", pointer_segment(name)),
                format!("widget hint for unknown property: {}", name),
            );
        }
    }
}
