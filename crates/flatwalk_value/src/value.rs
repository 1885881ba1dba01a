//! The runtime value graph.

use std::borrow::Cow;
use std::fmt;

use crate::{Complex, Kind, Map, Mapping, Pointer, Primitive, Record, Slice};

/// A runtime-typed value of any shape.
///
/// Values are classified into exactly one [`Kind`] and the walker dispatches
/// on the variant. Only [`Pointer`], [`Slice`] and [`Map`] share structure;
/// everything else is owned, so records and arrays are plain trees and
/// cycles can only pass through handles.
///
/// Equality is structural for owned variants and by identity for handles,
/// which keeps it total on cyclic graphs.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The invalid/empty value. Visiting it emits nothing; the walker also
    /// hands it to callbacks as the nil placeholder.
    #[default]
    Nil,
    Primitive(Primitive),
    /// A value that cannot be introspected, carrying only its type name.
    Opaque(String),
    Reference(Pointer),
    Record(Record),
    /// Fixed-length sequence.
    Array(Vec<Value>),
    /// Variable-length, nullable sequence.
    Slice(Slice),
    Map(Map),
    /// Polymorphic container. `None` is an unset interface.
    Interface(Option<Box<Value>>),
}

impl Value {
    /// Returns the shape of this value.
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Nil => Kind::Nil,
            Value::Primitive(p) => p.kind(),
            Value::Opaque(_) => Kind::Opaque,
            Value::Reference(_) => Kind::Reference,
            Value::Record(_) => Kind::Record,
            Value::Array(_) => Kind::Array,
            Value::Slice(_) => Kind::Slice,
            Value::Map(_) => Kind::Map,
            Value::Interface(_) => Kind::Interface,
        }
    }

    /// Returns the kind left after stripping one reference's static pointee.
    pub fn terminal_kind(&self) -> Kind {
        match self {
            Value::Reference(p) => p.pointee(),
            other => other.kind(),
        }
    }

    /// Returns a human readable type name.
    pub fn type_name(&self) -> Cow<'_, str> {
        match self {
            Value::Nil => Cow::Borrowed("nil"),
            Value::Primitive(p) => Cow::Borrowed(p.type_name()),
            Value::Opaque(name) => Cow::Borrowed(name),
            Value::Reference(p) => Cow::Owned(format!("&{}", p.pointee())),
            Value::Record(r) => Cow::Borrowed(r.type_name()),
            Value::Array(items) => Cow::Owned(format!("[{}]", items.len())),
            Value::Slice(_) => Cow::Borrowed("[]"),
            Value::Map(m) => Cow::Owned(format!("map[{}]", m.key_kind())),
            Value::Interface(_) => Cow::Borrowed("interface"),
        }
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn as_primitive(&self) -> Option<&Primitive> {
        match self {
            Value::Primitive(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        self.as_primitive().and_then(Primitive::as_text)
    }

    pub fn as_pointer(&self) -> Option<&Pointer> {
        match self {
            Value::Reference(p) => Some(p),
            _ => None,
        }
    }

    /// Wraps a value in a set interface.
    pub fn interface(value: impl Into<Value>) -> Self {
        Value::Interface(Some(Box::new(value.into())))
    }

    /// Wraps a value in a fresh reference.
    pub fn pointer(value: impl Into<Value>) -> Self {
        Value::Reference(Pointer::new(value))
    }

    /// A fixed-length sequence.
    pub fn array<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }

    /// A fresh variable-length sequence.
    pub fn slice<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Value::Slice(Slice::new(items.into_iter().map(Into::into).collect()))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("<nil>"),
            Value::Primitive(p) => write!(f, "{}", p),
            Value::Opaque(name) => write!(f, "<{}>", name),
            Value::Reference(p) => match p.identity() {
                Some(id) => write!(f, "{}", id),
                None => f.write_str("<nil>"),
            },
            Value::Record(r) => {
                write!(f, "{}{{", r.type_name())?;
                for (i, field) in r.fields().iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}:{}", field.name, field.value)?;
                }
                f.write_str("}")
            }
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Slice(s) if s.is_nil() => f.write_str("<nil>"),
            Value::Slice(s) => write!(f, "[len {}]", s.len()),
            Value::Map(m) if m.is_nil() => f.write_str("<nil>"),
            Value::Map(m) => write!(f, "map[len {}]", m.len()),
            Value::Interface(Some(inner)) => write!(f, "{}", inner),
            Value::Interface(None) => f.write_str("<nil>"),
        }
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::Primitive(Primitive::from(v))
                }
            }
        )*
    };
}

impl_from_scalar!(
    bool,
    i8,
    i16,
    i32,
    i64,
    isize,
    u8,
    u16,
    u32,
    u64,
    usize,
    f32,
    f64,
    Complex<f32>,
    Complex<f64>,
    String,
    &str,
);

impl From<Primitive> for Value {
    fn from(p: Primitive) -> Self {
        Value::Primitive(p)
    }
}

impl From<Record> for Value {
    fn from(r: Record) -> Self {
        Value::Record(r)
    }
}

impl From<Pointer> for Value {
    fn from(p: Pointer) -> Self {
        Value::Reference(p)
    }
}

impl From<Slice> for Value {
    fn from(s: Slice) -> Self {
        Value::Slice(s)
    }
}

impl From<Map> for Value {
    fn from(m: Map) -> Self {
        Value::Map(m)
    }
}

impl From<Mapping> for Value {
    fn from(m: Mapping) -> Self {
        Value::Map(Map::new(m))
    }
}
