//! JSON schemas describing records declared at runtime.

use crate::marker::is_marker;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading or validating a schema.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse JSON schema: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("failed to read schema file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("duplicate field name: {0}")]
    DuplicateName(String),

    #[error("duplicate option name '{option}' on field '{field}'")]
    DuplicateOption { field: String, option: String },

    #[error("field '{0}' has an empty option name")]
    EmptyOption(String),

    #[error("invalid option name '{option}' on field '{field}': -{option} is not an option marker")]
    InvalidOption { field: String, option: String },
}

/// Declaration of a single field.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldSpec {
    /// Field name, used as the key in the output
    pub name: String,
    /// Option name, bound to the flag `-<option>`
    pub option: Option<String>,
    /// Type shape: "bool", "int", "string", "string-list" or "int-list"
    #[serde(rename = "type")]
    pub field_type: String,
}

/// A record declared as JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct Schema {
    /// Name of the record
    pub name: Option<String>,
    /// Fields in declaration order
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl Schema {
    /// Parse a JSON string into a Schema.
    pub fn from_json(json: &str) -> Result<Schema, ConfigError> {
        let schema: Schema = serde_json::from_str(json)?;
        Ok(schema)
    }

    /// Read and parse a JSON schema file.
    pub fn from_file(path: &Path) -> Result<Schema, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Validate the schema.
    ///
    /// Fields without an option name and fields of unknown type are left
    /// alone here; binding reports those.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut names = HashSet::new();
        let mut options = HashSet::new();

        for field in &self.fields {
            if !names.insert(&field.name) {
                return Err(ConfigError::DuplicateName(field.name.clone()));
            }

            let option = match field.option {
                Some(ref option) => option,
                None => continue,
            };

            if option.is_empty() {
                return Err(ConfigError::EmptyOption(field.name.clone()));
            }
            // Every option must also end the value run of the option before it.
            if option.starts_with('-') || !is_marker(&format!("-{}", option)) {
                return Err(ConfigError::InvalidOption {
                    field: field.name.clone(),
                    option: option.clone(),
                });
            }
            if !options.insert(option) {
                return Err(ConfigError::DuplicateOption {
                    field: field.name.clone(),
                    option: option.clone(),
                });
            }
        }

        Ok(())
    }
}
