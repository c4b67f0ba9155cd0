//! JSON rendering of bound records, to a string or a kept temporary file.

use crate::record::{DynamicRecord, Value};
use anyhow::Result;
use serde_json::{Map, Value as Json};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn to_json(value: &Value) -> Json {
    match value {
        Value::Bool(v) => Json::from(*v),
        Value::Int(v) => Json::from(*v),
        Value::Str(v) => Json::from(v.as_str()),
        Value::StrList(v) => Json::from(v.clone()),
        Value::IntList(v) => Json::from(v.clone()),
        Value::Unsupported(_) => Json::Null,
    }
}

/// Render a record as a JSON object, keys in declaration order.
pub fn render_json(record: &DynamicRecord) -> Json {
    let map: Map<String, Json> = record
        .entries()
        .map(|(name, value)| (name.to_string(), to_json(value)))
        .collect();
    Json::Object(map)
}

/// Render a record as pretty-printed JSON text.
pub fn render_json_string(record: &DynamicRecord) -> Result<String> {
    let mut text = serde_json::to_string_pretty(&render_json(record))?;
    text.push('\n');
    Ok(text)
}

/// Write the rendered record to a temporary file and return its path.
///
/// The file persists until it is deleted by the caller.
pub fn write_output(record: &DynamicRecord) -> Result<PathBuf> {
    let mut file = NamedTempFile::new()?;
    file.write_all(render_json_string(record)?.as_bytes())?;
    let path = file.into_temp_path().keep()?;
    Ok(path)
}
