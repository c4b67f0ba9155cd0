//! flagbind - bind single-dash command-line flags to the fields of a record.
//!
//! A record lists its fields, each with an option name, and the binder picks
//! an option parser per field from the field's type: a presence flag for
//! `bool`, a single value for integers and strings, and a run of values for
//! lists of strings or integers. Records are either Rust structs (see
//! [`record!`]) or declared at runtime from a JSON [`Schema`].

pub mod binder;
pub mod config;
pub mod error;
pub mod field;
pub mod marker;
pub mod option;
pub mod output;
pub mod record;

pub use binder::{parse, parse_from};
pub use config::{ConfigError, FieldSpec, Schema};
pub use error::{BoxError, ParseError};
pub use field::{Field, Slot, Target};
pub use marker::is_marker;
pub use option::{
    bool_option_parser, list_option_parser, unary_option_parser, BoolOptionParser,
    ListOptionParser, OptionParser, UnaryOptionParser,
};
pub use output::{render_json, render_json_string, write_output};
pub use record::{DynamicRecord, Value};
