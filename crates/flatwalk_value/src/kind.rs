//! Shape classification for values.

use serde::{Deserialize, Serialize};

/// The coarse shape of a [`Value`](crate::Value).
///
/// Every value is classified into exactly one kind. The walker dispatches on
/// the value itself, but kinds are what policies reason about: whether a
/// dereferenced target is worth descending into, or whether a nil reference
/// stood in for a container or a scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub enum Kind {
    /// Absent value.
    Nil,

    // Scalars
    /// Boolean.
    Bool,
    /// Signed integer of any width.
    Int,
    /// Unsigned integer of any width.
    Uint,
    /// Floating point number.
    Float,
    /// Complex number.
    Complex,
    /// UTF-8 text.
    Text,

    // Containers
    /// Value that cannot be introspected.
    Opaque,
    /// Nullable indirection.
    Reference,
    /// Named fields in declaration order.
    Record,
    /// Fixed-length sequence.
    Array,
    /// Variable-length, nullable sequence.
    Slice,
    /// Key to value mapping.
    Map,
    /// Polymorphic container whose dynamic value is unwrapped on visit.
    Interface,
}

impl Kind {
    /// Returns true for shapes that hold other values.
    ///
    /// References are not complex: they are resolved before this question
    /// is asked about whatever they point at.
    #[inline]
    pub const fn is_complex(&self) -> bool {
        matches!(
            self,
            Kind::Opaque | Kind::Record | Kind::Array | Kind::Slice | Kind::Map | Kind::Interface
        )
    }

    /// Returns true for primitive leaf shapes.
    #[inline]
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            Kind::Bool | Kind::Int | Kind::Uint | Kind::Float | Kind::Complex | Kind::Text
        )
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Kind::Nil => "nil",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float => "float",
            Kind::Complex => "complex",
            Kind::Text => "text",
            Kind::Opaque => "opaque",
            Kind::Reference => "reference",
            Kind::Record => "record",
            Kind::Array => "array",
            Kind::Slice => "slice",
            Kind::Map => "map",
            Kind::Interface => "interface",
        };
        write!(f, "{}", name)
    }
}
