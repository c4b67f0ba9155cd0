//! Option parsers: strategies that pull one named option out of a token list.
//!
//! Each parser is bound once to a default value (and, for value-taking
//! options, a conversion function) and can then be asked for any option name
//! against any token list. Parsers keep no state between calls.

use crate::error::{BoxError, ParseError};
use crate::marker::is_marker;
use std::str::FromStr;
use tracing::trace;

/// A strategy that extracts the value of option `name` from `tokens`.
pub trait OptionParser<T> {
    fn parse(&self, tokens: &[String], name: &str) -> Result<T, ParseError>;
}

/// Find `-name` and return the run of value tokens following it.
///
/// The run stops at the next marker token or the end of the list. Returns
/// `None` if the option is not present at all.
fn option_values<'t>(tokens: &'t [String], name: &str) -> Option<&'t [String]> {
    let flag = format!("-{}", name);
    let start = tokens.iter().position(|token| *token == flag)? + 1;

    let rest = &tokens[start..];
    let end = rest
        .iter()
        .position(|token| is_marker(token))
        .unwrap_or(rest.len());

    trace!(option = name, values = ?&rest[..end], "captured option values");
    Some(&rest[..end])
}

/// Parser for presence-only options. Absent means `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolOptionParser;

/// Create a parser for a boolean option.
pub fn bool_option_parser() -> BoolOptionParser {
    BoolOptionParser
}

impl OptionParser<bool> for BoolOptionParser {
    fn parse(&self, tokens: &[String], name: &str) -> Result<bool, ParseError> {
        match option_values(tokens, name) {
            None => Ok(false),
            Some([]) => Ok(true),
            Some(extra) => Err(ParseError::TooManyArguments {
                option: name.to_string(),
                count: extra.len(),
            }),
        }
    }
}

/// Parser for options taking exactly one value.
#[derive(Debug, Clone)]
pub struct UnaryOptionParser<T, F> {
    default: T,
    convert: F,
}

/// Create a parser for a single-value option.
///
/// `convert` is only called with exactly one token.
pub fn unary_option_parser<T, F, E>(default: T, convert: F) -> UnaryOptionParser<T, F>
where
    F: Fn(&[String]) -> Result<T, E>,
    E: Into<BoxError>,
{
    UnaryOptionParser { default, convert }
}

impl<T, F, E> OptionParser<T> for UnaryOptionParser<T, F>
where
    T: Clone,
    F: Fn(&[String]) -> Result<T, E>,
    E: Into<BoxError>,
{
    fn parse(&self, tokens: &[String], name: &str) -> Result<T, ParseError> {
        let values = match option_values(tokens, name) {
            None => return Ok(self.default.clone()),
            Some(values) => values,
        };

        match values.len() {
            0 => Err(ParseError::MissingArgument {
                option: name.to_string(),
            }),
            1 => (self.convert)(values).map_err(|e| ParseError::IllegalValue {
                option: name.to_string(),
                source: e.into(),
            }),
            n => Err(ParseError::TooManyArguments {
                option: name.to_string(),
                count: n - 1,
            }),
        }
    }
}

/// Parser for options taking one or more values.
#[derive(Debug, Clone)]
pub struct ListOptionParser<T, F> {
    default: Vec<T>,
    convert: F,
}

/// Create a parser for a list option.
///
/// `convert` receives the whole run of values at once, in order.
pub fn list_option_parser<T, F, E>(default: Vec<T>, convert: F) -> ListOptionParser<T, F>
where
    F: Fn(&[String]) -> Result<Vec<T>, E>,
    E: Into<BoxError>,
{
    ListOptionParser { default, convert }
}

impl<T, F, E> OptionParser<Vec<T>> for ListOptionParser<T, F>
where
    T: Clone,
    F: Fn(&[String]) -> Result<Vec<T>, E>,
    E: Into<BoxError>,
{
    fn parse(&self, tokens: &[String], name: &str) -> Result<Vec<T>, ParseError> {
        match option_values(tokens, name) {
            None => Ok(self.default.clone()),
            Some([]) => Err(ParseError::AtLeastOneArgument {
                option: name.to_string(),
            }),
            Some(values) => (self.convert)(values).map_err(|e| ParseError::IllegalListValues {
                option: name.to_string(),
                source: e.into(),
            }),
        }
    }
}

/// Convert a single token with [`FromStr`], e.g. a decimal integer.
pub fn decimal<T>(values: &[String]) -> Result<T, BoxError>
where
    T: FromStr,
    T::Err: Into<BoxError>,
{
    match values {
        [value] => value.parse::<T>().map_err(Into::<BoxError>::into),
        _ => Err(format!("expected exactly one value, got {}", values.len()).into()),
    }
}

/// Take a single token as-is.
pub fn identity(values: &[String]) -> Result<String, BoxError> {
    match values {
        [value] => Ok(value.clone()),
        _ => Err(format!("expected exactly one value, got {}", values.len()).into()),
    }
}

/// Convert every token with [`FromStr`], failing on the first bad one.
pub fn decimals<T>(values: &[String]) -> Result<Vec<T>, BoxError>
where
    T: FromStr,
    T::Err: Into<BoxError>,
{
    values
        .iter()
        .map(|value| value.parse::<T>().map_err(Into::<BoxError>::into))
        .collect()
}

/// Take every token as-is.
pub fn identities(values: &[String]) -> Result<Vec<String>, BoxError> {
    Ok(values.to_vec())
}
