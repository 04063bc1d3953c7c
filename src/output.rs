//! JSON output for finished documents.

use std::io::Write;
use std::path::Path;

use serde::ser::Error as _;
use serde::Serialize;

use crate::error::OutputError;
use crate::types::FormDocument;

/// Serialize a document to a JSON string.
///
/// Pretty output uses 4-space indentation, which pastes cleanly into the
/// react-jsonschema-form playground.
pub fn to_json(document: &FormDocument, pretty: bool) -> Result<String, OutputError> {
    if !pretty {
        return serde_json::to_string(document).map_err(|source| OutputError::Serialize { source });
    }

    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(Vec::new(), formatter);
    document
        .serialize(&mut ser)
        .map_err(|source| OutputError::Serialize { source })?;
    String::from_utf8(ser.into_inner()).map_err(|e| OutputError::Serialize {
        source: serde_json::Error::custom(e),
    })
}

/// Write the pretty-printed document followed by a newline.
pub fn dump<W: Write>(document: &FormDocument, mut writer: W) -> Result<(), OutputError> {
    let json = to_json(document, true)?;
    writeln!(writer, "{}", json).map_err(|source| OutputError::Stream { source })
}

/// Write the document to `path`.
pub fn write_file(document: &FormDocument, path: &Path, pretty: bool) -> Result<(), OutputError> {
    let json = to_json(document, pretty)?;
    std::fs::write(path, json).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "wrote document");
    Ok(())
}
