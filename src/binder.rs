//! Binding tokens to the fields of a record.

use crate::error::ParseError;
use crate::field::{Slot, Target};
use crate::option::{
    bool_option_parser, decimal, decimals, identities, identity, list_option_parser,
    unary_option_parser, OptionParser,
};
use tracing::debug;

/// Bind `tokens` to the fields of `target`.
///
/// Fields are visited in declaration order. Each field's type picks the
/// option parser and its option name picks the flag. The first failure
/// aborts the bind; fields assigned before it keep their new values, so
/// discard `target` on error if that matters.
pub fn parse<T: Target + ?Sized>(target: &mut T, tokens: &[String]) -> Result<(), ParseError> {
    let type_name = target.type_name();
    let fields = target
        .fields()
        .ok_or_else(|| ParseError::UnsupportedDataType {
            type_name: type_name.to_string(),
        })?;

    for field in fields {
        let option = field.option.ok_or_else(|| ParseError::MissingTag {
            field: field.name.to_string(),
        })?;

        debug!(
            field = field.name,
            option,
            shape = field.slot.shape(),
            "binding field"
        );

        if let Err(e) = bind_slot(field.name, field.slot, tokens, option) {
            debug!(field = field.name, error = %e, "bind aborted");
            return Err(e);
        }
    }

    Ok(())
}

/// Convenience wrapper over [`parse`] for any iterator of string-like tokens.
pub fn parse_from<T, I, S>(target: &mut T, tokens: I) -> Result<(), ParseError>
where
    T: Target + ?Sized,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
    parse(target, &tokens)
}

/// Pick the option parser for a slot's shape, run it and store the result.
fn bind_slot(
    field: &str,
    slot: Slot<'_>,
    tokens: &[String],
    option: &str,
) -> Result<(), ParseError> {
    match slot {
        Slot::Bool(value) => {
            *value = bool_option_parser().parse(tokens, option)?;
        }
        Slot::Int(value) => {
            *value = unary_option_parser(0, decimal::<i64>).parse(tokens, option)?;
        }
        Slot::Int32(value) => {
            *value = unary_option_parser(0, decimal::<i32>).parse(tokens, option)?;
        }
        Slot::Str(value) => {
            *value = unary_option_parser(String::new(), identity).parse(tokens, option)?;
        }
        Slot::StrList(value) => {
            *value = list_option_parser(Vec::new(), identities).parse(tokens, option)?;
        }
        Slot::IntList(value) => {
            *value = list_option_parser(Vec::new(), decimals::<i64>).parse(tokens, option)?;
        }
        Slot::Int32List(value) => {
            *value = list_option_parser(Vec::new(), decimals::<i32>).parse(tokens, option)?;
        }
        Slot::Unsupported(type_name) => {
            return Err(ParseError::UnsupportedOptionType {
                field: field.to_string(),
                type_name: type_name.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;
    use std::error::Error as _;

    fn args(s: &[&str]) -> Vec<String> {
        s.iter().map(|s| s.to_string()).collect()
    }

    crate::record! {
        #[derive(Debug, Default, PartialEq)]
        struct Options {
            #[option("l")]
            logging: bool,
            #[option("p")]
            port: i64,
            #[option("d")]
            directory: String,
        }
    }

    crate::record! {
        #[derive(Debug, Default, PartialEq)]
        struct Untagged {
            #[option("l")]
            logging: bool,
            port: i64,
            #[option("d")]
            directory: String,
        }
    }

    crate::record! {
        #[derive(Debug, Default, PartialEq)]
        struct Lists {
            #[option("g")]
            list: Vec<String>,
            #[option("d")]
            digits: Vec<i64>,
        }
    }

    crate::record! {
        #[derive(Debug, Default, PartialEq)]
        struct BoolList {
            #[option("k")]
            list: Vec<bool>,
        }
    }

    fn options(logging: bool, port: i64, directory: &str) -> Options {
        Options {
            logging,
            port,
            directory: directory.to_string(),
        }
    }

    #[test]
    fn test_bind_no_flags() {
        let mut actual = Options::default();
        parse(&mut actual, &args(&[])).unwrap();
        assert_eq!(actual, Options::default());
    }

    #[test]
    fn test_bind_bool_only() {
        let mut actual = Options::default();
        parse(&mut actual, &args(&["-l"])).unwrap();
        assert_eq!(actual, options(true, 0, ""));
    }

    #[test]
    fn test_bind_int_only() {
        let mut actual = Options::default();
        parse(&mut actual, &args(&["-p", "8080"])).unwrap();
        assert_eq!(actual, options(false, 8080, ""));
    }

    #[test]
    fn test_bind_string_only() {
        let mut actual = Options::default();
        parse(&mut actual, &args(&["-d", "/usr/logs"])).unwrap();
        assert_eq!(actual, options(false, 0, "/usr/logs"));
    }

    #[test]
    fn test_bind_multiple_flags() {
        let mut actual = Options::default();
        parse(&mut actual, &args(&["-l", "-p", "9090", "-d", "/usr/vars"])).unwrap();
        assert_eq!(actual, options(true, 9090, "/usr/vars"));
    }

    #[test]
    fn test_bind_overwrites_existing_values() {
        let mut actual = options(true, 1, "/tmp");
        parse(&mut actual, &args(&["-p", "2"])).unwrap();
        assert_eq!(actual, options(false, 2, ""));
    }

    #[test]
    fn test_bind_missing_tag() {
        let mut actual = Untagged::default();
        let result = parse(&mut actual, &args(&["-l", "-p", "9090", "-d", "/usr/vars"]));
        assert!(matches!(
            result,
            Err(ParseError::MissingTag { ref field }) if field == "port"
        ));
        // Fields before the untagged one are already bound, later ones are not.
        assert_eq!(
            actual,
            Untagged {
                logging: true,
                port: 0,
                directory: String::new(),
            }
        );
    }

    #[test]
    fn test_bind_missing_tag_without_tokens() {
        let mut actual = Untagged::default();
        let result = parse(&mut actual, &args(&[]));
        assert!(matches!(result, Err(ParseError::MissingTag { .. })));
    }

    #[test]
    fn test_bind_unsupported_option_type() {
        let mut actual = BoolList::default();
        let result = parse(&mut actual, &args(&["-k", "true", "false", "true"]));
        match result {
            Err(ParseError::UnsupportedOptionType { field, type_name }) => {
                assert_eq!(field, "list");
                assert!(type_name.contains("Vec<bool>"));
            }
            other => panic!("Expected UnsupportedOptionType, got {:?}", other),
        }
        assert!(actual.list.is_empty());
    }

    #[test]
    fn test_bind_list_values() {
        let mut actual = Lists::default();
        parse(
            &mut actual,
            &args(&["-g", "this", "is", "a", "list", "-d", "1", "-3", "2"]),
        )
        .unwrap();
        assert_eq!(
            actual,
            Lists {
                list: args(&["this", "is", "a", "list"]),
                digits: vec![1, -3, 2],
            }
        );
    }

    #[test]
    fn test_bind_non_record_target() {
        let mut actual = 0i64;
        let result = parse(&mut actual, &args(&["-p", "1"]));
        assert!(matches!(
            result,
            Err(ParseError::UnsupportedDataType { ref type_name }) if type_name == "i64"
        ));
        assert_eq!(actual, 0);
    }

    #[test]
    fn test_bind_first_error_wins() {
        let mut actual = Options::default();
        let result = parse(&mut actual, &args(&["-l", "x", "-p"]));
        assert!(matches!(result, Err(ParseError::TooManyArguments { .. })));
        assert_eq!(actual, Options::default());
    }

    #[test]
    fn test_bind_illegal_value_keeps_cause() {
        let mut actual = Options::default();
        let err = parse(&mut actual, &args(&["-l", "-p", "9x8y"])).unwrap_err();
        assert!(matches!(err, ParseError::IllegalValue { ref option, .. } if option == "p"));
        assert!(err.source().unwrap().is::<std::num::ParseIntError>());
        assert!(actual.logging);
    }

    #[test]
    fn test_bind_illegal_list_values() {
        let mut actual = Lists::default();
        let result = parse(&mut actual, &args(&["-d", "1", "two"]));
        assert!(matches!(result, Err(ParseError::IllegalListValues { .. })));
    }

    #[test]
    fn test_same_tokens_bind_several_shapes() {
        let tokens = args(&["-l", "-p", "7", "-g", "a", "b"]);

        let mut scalars = Options::default();
        parse(&mut scalars, &tokens).unwrap();
        assert_eq!(scalars, options(true, 7, ""));

        let mut lists = Lists::default();
        parse(&mut lists, &tokens).unwrap();
        assert_eq!(lists.list, args(&["a", "b"]));
        assert!(lists.digits.is_empty());
    }

    #[test]
    fn test_parse_from_str_tokens() {
        let mut actual = Options::default();
        parse_from(&mut actual, ["-p", "80"]).unwrap();
        assert_eq!(actual.port, 80);
    }

    struct Manual {
        width: i32,
        sizes: Vec<i32>,
    }

    impl Target for Manual {
        fn fields(&mut self) -> Option<Vec<Field<'_>>> {
            Some(vec![
                Field::new("width", Some("w"), &mut self.width),
                Field::new("sizes", Some("s"), &mut self.sizes),
            ])
        }
    }

    #[test]
    fn test_bind_hand_written_target() {
        let mut actual = Manual {
            width: 3,
            sizes: vec![],
        };
        parse(&mut actual, &args(&["-s", "1", "2", "-w", "-40"])).unwrap();
        assert_eq!(actual.width, -40);
        assert_eq!(actual.sizes, vec![1, 2]);
    }
}
