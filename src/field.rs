//! Field metadata: how a record exposes its bind points to the binder.
//!
//! A record implements [`Target`] by listing its fields in declaration order.
//! Each [`Field`] carries the field name, the option name it is bound to (if
//! one was declared) and a [`Slot`] describing the field's type shape with a
//! mutable borrow of the value. The [`record!`](crate::record) macro writes
//! the `Target` impl for plain structs.

use std::any::{type_name, Any};

/// A mutable view of a field, classified by type shape.
#[derive(Debug)]
pub enum Slot<'a> {
    Bool(&'a mut bool),
    Int(&'a mut i64),
    Int32(&'a mut i32),
    Str(&'a mut String),
    StrList(&'a mut Vec<String>),
    IntList(&'a mut Vec<i64>),
    Int32List(&'a mut Vec<i32>),
    /// A type with no option parser. Holds the type name for diagnostics.
    Unsupported(&'a str),
}

impl<'a> Slot<'a> {
    /// Classify `value` by its concrete type.
    pub fn of<T: Any>(value: &'a mut T) -> Self {
        let value: &'a mut dyn Any = value;

        let slot = if value.is::<bool>() {
            value.downcast_mut::<bool>().map(Slot::Bool)
        } else if value.is::<i64>() {
            value.downcast_mut::<i64>().map(Slot::Int)
        } else if value.is::<i32>() {
            value.downcast_mut::<i32>().map(Slot::Int32)
        } else if value.is::<String>() {
            value.downcast_mut::<String>().map(Slot::Str)
        } else if value.is::<Vec<String>>() {
            value.downcast_mut::<Vec<String>>().map(Slot::StrList)
        } else if value.is::<Vec<i64>>() {
            value.downcast_mut::<Vec<i64>>().map(Slot::IntList)
        } else if value.is::<Vec<i32>>() {
            value.downcast_mut::<Vec<i32>>().map(Slot::Int32List)
        } else {
            None
        };

        slot.unwrap_or_else(|| Slot::Unsupported(type_name::<T>()))
    }

    /// Short name of the shape, used in logs.
    pub fn shape(&self) -> &'static str {
        match self {
            Slot::Bool(_) => "bool",
            Slot::Int(_) | Slot::Int32(_) => "int",
            Slot::Str(_) => "string",
            Slot::StrList(_) => "string-list",
            Slot::IntList(_) | Slot::Int32List(_) => "int-list",
            Slot::Unsupported(_) => "unsupported",
        }
    }
}

/// One bind point of a record.
#[derive(Debug)]
pub struct Field<'a> {
    pub name: &'a str,
    pub option: Option<&'a str>,
    pub slot: Slot<'a>,
}

impl<'a> Field<'a> {
    /// Describe a field backed by a concrete value.
    pub fn new<T: Any>(name: &'a str, option: Option<&'a str>, value: &'a mut T) -> Self {
        Self {
            name,
            option,
            slot: Slot::of(value),
        }
    }

    /// Describe a field from an already classified slot.
    pub fn from_slot(name: &'a str, option: Option<&'a str>, slot: Slot<'a>) -> Self {
        Self { name, option, slot }
    }
}

/// Something the binder can be pointed at.
///
/// Records return their fields from [`Target::fields`]. Every other type
/// keeps the default, which marks it as not being a record.
pub trait Target {
    fn fields(&mut self) -> Option<Vec<Field<'_>>> {
        None
    }

    fn type_name(&self) -> &'static str {
        type_name::<Self>()
    }
}

macro_rules! non_record {
    ($($ty:ty),* $(,)?) => {
        $(impl Target for $ty {})*
    };
}

non_record!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    String, str,
);

impl<T> Target for Vec<T> {}
impl<T> Target for Option<T> {}
impl<T> Target for [T] {}

/// Declare a struct whose fields bind to single-dash options.
///
/// Fields marked `#[option("x")]` bind to `-x`. Unmarked fields are allowed
/// by the macro but fail the bind, since every field needs an option name.
///
/// ```
/// flagbind::record! {
///     #[derive(Debug, Default)]
///     pub struct Options {
///         #[option("l")]
///         pub logging: bool,
///         #[option("p")]
///         pub port: i64,
///     }
/// }
///
/// let mut options = Options::default();
/// let tokens = vec!["-l".to_string(), "-p".to_string(), "8080".to_string()];
/// flagbind::parse(&mut options, &tokens).unwrap();
/// assert!(options.logging);
/// assert_eq!(options.port, 8080);
/// ```
#[macro_export]
macro_rules! record {
    (@option $option:literal) => {
        ::std::option::Option::Some($option)
    };
    (@option) => {
        ::std::option::Option::None
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[option($option:literal)])?
                $fvis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $($fvis $field: $ty,)*
        }

        impl $crate::Target for $name {
            fn fields(&mut self) -> ::std::option::Option<::std::vec::Vec<$crate::Field<'_>>> {
                ::std::option::Option::Some(::std::vec![
                    $(
                        $crate::Field::new(
                            ::std::stringify!($field),
                            $crate::record!(@option $($option)?),
                            &mut self.$field,
                        ),
                    )*
                ])
            }
        }
    };
}
