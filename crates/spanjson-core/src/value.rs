//! The tagged value tree produced by the parser.
//!
//! A [`Value`] holds exactly one of seven variants, fixed when it is built.
//! Containers own their children outright; trees are assembled bottom-up
//! from freshly parsed values, so they are always acyclic.
//!
//! Typed access comes in two flavours:
//!
//! - [`Value::is`] / [`Value::try_get`] / [`Value::into_inner`] never panic.
//! - [`Value::get`] / [`Value::get_mut`] treat a wrong variant as a caller
//!   bug and panic with the [`TypeMismatch`] message.
//!
//! There is no implicit coercion: an `Int` is not readable as `f64`.

use std::collections::HashMap;
use std::fmt;

use crate::error::TypeMismatch;

/// Ordered sequence of values, in source order.
pub type List = Vec<Value>;

/// String-keyed mapping. Key order carries no meaning.
pub type Dict = HashMap<String, Value>;

/// A parsed JSON value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(List),
    Dict(Dict),
}

/// Names the active variant of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Int,
    Float,
    String,
    List,
    Dict,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::List => "list",
            Kind::Dict => "dict",
        };
        f.write_str(name)
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A payload type that can be extracted from a [`Value`].
///
/// Implemented for `()` (the `Null` variant), `bool`, `i64`, `f64`,
/// `String`, [`List`] and [`Dict`]. Sealed: the set of variants is closed.
pub trait Variant: sealed::Sealed + Sized {
    const KIND: Kind;

    #[doc(hidden)]
    fn from_ref(value: &Value) -> Option<&Self>;

    #[doc(hidden)]
    fn from_mut(value: &mut Value) -> Option<&mut Self>;

    #[doc(hidden)]
    fn from_owned(value: Value) -> std::result::Result<Self, Value>;
}

impl sealed::Sealed for () {}

impl Variant for () {
    const KIND: Kind = Kind::Null;

    fn from_ref(value: &Value) -> Option<&Self> {
        match value {
            Value::Null => Some(&()),
            _ => None,
        }
    }

    fn from_mut(value: &mut Value) -> Option<&mut Self> {
        match value {
            // Zero-sized: leaking a unit box never allocates.
            Value::Null => Some(Box::leak(Box::new(()))),
            _ => None,
        }
    }

    fn from_owned(value: Value) -> std::result::Result<Self, Value> {
        match value {
            Value::Null => Ok(()),
            other => Err(other),
        }
    }
}

macro_rules! payload_variant {
    ($ty:ty, $variant:ident) => {
        impl sealed::Sealed for $ty {}

        impl Variant for $ty {
            const KIND: Kind = Kind::$variant;

            fn from_ref(value: &Value) -> Option<&Self> {
                match value {
                    Value::$variant(inner) => Some(inner),
                    _ => None,
                }
            }

            fn from_mut(value: &mut Value) -> Option<&mut Self> {
                match value {
                    Value::$variant(inner) => Some(inner),
                    _ => None,
                }
            }

            fn from_owned(value: Value) -> std::result::Result<Self, Value> {
                match value {
                    Value::$variant(inner) => Ok(inner),
                    other => Err(other),
                }
            }
        }
    };
}

payload_variant!(bool, Bool);
payload_variant!(i64, Int);
payload_variant!(f64, Float);
payload_variant!(String, String);
payload_variant!(List, List);
payload_variant!(Dict, Dict);

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::String(_) => Kind::String,
            Value::List(_) => Kind::List,
            Value::Dict(_) => Kind::Dict,
        }
    }

    /// Returns whether the active variant holds a `T`.
    pub fn is<T: Variant>(&self) -> bool {
        self.kind() == T::KIND
    }

    /// Borrow the payload as `T`.
    ///
    /// # Panics
    ///
    /// Panics with a [`TypeMismatch`] message when the active variant is not
    /// `T`. Use [`Value::try_get`] when the variant is not known up front.
    pub fn get<T: Variant>(&self) -> &T {
        match self.try_get::<T>() {
            Ok(inner) => inner,
            Err(mismatch) => panic!("{mismatch}"),
        }
    }

    /// Mutably borrow the payload as `T`.
    ///
    /// # Panics
    ///
    /// Panics with a [`TypeMismatch`] message when the active variant is not
    /// `T`.
    pub fn get_mut<T: Variant>(&mut self) -> &mut T {
        match self.try_get_mut::<T>() {
            Ok(inner) => inner,
            Err(mismatch) => panic!("{mismatch}"),
        }
    }

    pub fn try_get<T: Variant>(&self) -> std::result::Result<&T, TypeMismatch> {
        T::from_ref(self).ok_or_else(|| self.mismatch::<T>())
    }

    pub fn try_get_mut<T: Variant>(&mut self) -> std::result::Result<&mut T, TypeMismatch> {
        let found = self.kind();
        T::from_mut(self).ok_or(TypeMismatch {
            expected: T::KIND,
            found,
        })
    }

    /// Move the payload out as `T`.
    pub fn into_inner<T: Variant>(self) -> std::result::Result<T, TypeMismatch> {
        T::from_owned(self).map_err(|value| value.mismatch::<T>())
    }

    fn mismatch<T: Variant>(&self) -> TypeMismatch {
        TypeMismatch {
            expected: T::KIND,
            found: self.kind(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    pub fn is_dict(&self) -> bool {
        matches!(self, Value::Dict(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the float payload. `Int` values yield `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Value::Dict(dict) => Some(dict),
            _ => None,
        }
    }
}

/// Dict entries ordered by key, for output that must not depend on hash
/// order.
pub(crate) fn sorted_entries(dict: &Dict) -> Vec<(&String, &Value)> {
    let mut entries: Vec<_> = dict.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    entries
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<List> for Value {
    fn from(items: List) -> Self {
        Value::List(items)
    }
}

impl From<Dict> for Value {
    fn from(dict: Dict) -> Self {
        Value::Dict(dict)
    }
}
