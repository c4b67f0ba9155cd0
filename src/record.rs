//! Records declared at runtime from a [`Schema`].

use crate::config::{FieldSpec, Schema};
use crate::field::{Field, Slot, Target};

/// Value held by one field of a [`DynamicRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Str(String),
    StrList(Vec<String>),
    IntList(Vec<i64>),
    /// A declared type no option parser handles. Holds the declared type.
    Unsupported(String),
}

impl Value {
    /// The zero value for a declared field type.
    pub fn zero(field_type: &str) -> Value {
        match field_type {
            "bool" => Value::Bool(false),
            "int" => Value::Int(0),
            "string" => Value::Str(String::new()),
            "string-list" => Value::StrList(Vec::new()),
            "int-list" => Value::IntList(Vec::new()),
            other => Value::Unsupported(other.to_string()),
        }
    }

    fn slot(&mut self) -> Slot<'_> {
        match self {
            Value::Bool(v) => Slot::Bool(v),
            Value::Int(v) => Slot::Int(v),
            Value::Str(v) => Slot::Str(v),
            Value::StrList(v) => Slot::StrList(v),
            Value::IntList(v) => Slot::IntList(v),
            Value::Unsupported(declared) => Slot::Unsupported(declared.as_str()),
        }
    }
}

/// A record whose fields come from a [`Schema`] instead of a Rust struct.
#[derive(Debug, Clone)]
pub struct DynamicRecord {
    specs: Vec<FieldSpec>,
    values: Vec<Value>,
}

impl DynamicRecord {
    /// Create a record with every field at its zero value.
    pub fn new(schema: &Schema) -> Self {
        let specs = schema.fields.clone();
        let values = specs
            .iter()
            .map(|spec| Value::zero(&spec.field_type))
            .collect();
        Self { specs, values }
    }

    /// Look up a field value by field name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.specs
            .iter()
            .position(|spec| spec.name == name)
            .map(|i| &self.values[i])
    }

    /// Field names and values in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.specs
            .iter()
            .map(|spec| spec.name.as_str())
            .zip(self.values.iter())
    }
}

impl Target for DynamicRecord {
    fn fields(&mut self) -> Option<Vec<Field<'_>>> {
        let fields = self
            .specs
            .iter()
            .zip(self.values.iter_mut())
            .map(|(spec, value)| {
                Field::from_slot(&spec.name, spec.option.as_deref(), value.slot())
            })
            .collect();
        Some(fields)
    }
}
