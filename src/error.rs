//! Error taxonomy shared by the option parsers and the binder.

use thiserror::Error;

/// Boxed cause carried by conversion failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while binding flags to a record.
///
/// Every error is fatal to the bind that produced it.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unsupported data type {type_name}: bind target must be a record")]
    UnsupportedDataType { type_name: String },

    #[error("field '{field}' has no option name")]
    MissingTag { field: String },

    #[error("field '{field}' has unsupported option type {type_name}")]
    UnsupportedOptionType { field: String, type_name: String },

    #[error("too many arguments for option -{option}: {count} unexpected")]
    TooManyArguments { option: String, count: usize },

    #[error("missing argument for option -{option}")]
    MissingArgument { option: String },

    #[error("option -{option} needs at least one argument")]
    AtLeastOneArgument { option: String },

    #[error("illegal value for option -{option}")]
    IllegalValue {
        option: String,
        #[source]
        source: BoxError,
    },

    #[error("illegal list values for option -{option}")]
    IllegalListValues {
        option: String,
        #[source]
        source: BoxError,
    },
}
