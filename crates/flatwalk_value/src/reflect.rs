//! Conversion of ordinary Rust data into a [`Value`].
//!
//! [`Reflect`] is the registration table that maps concrete types onto the
//! closed set of shapes the walker understands. Std types are covered here;
//! user records implement it by describing their fields with [`Record`].
//!
//! # Example
//!
//! ```rust
//! use flatwalk_value::{Kind, Record, Reflect, Value};
//!
//! struct Point {
//!     x: i32,
//!     y: i32,
//!     label: Option<String>,
//! }
//!
//! impl Reflect for Point {
//!     const KIND: Kind = Kind::Record;
//!
//!     fn reflect(&self) -> Value {
//!         Record::new("Point")
//!             .field("X", self.x.reflect())
//!             .field("Y", self.y.reflect())
//!             .private("label", self.label.reflect())
//!             .into()
//!     }
//! }
//!
//! let value = Point { x: 1, y: 2, label: None }.reflect();
//! assert_eq!(value.kind(), Kind::Record);
//! ```

use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;

use crate::{Key, KeyKind, Kind, Map, Mapping, Pointer, Primitive, Slice, Value};

/// Types that can describe themselves as a [`Value`].
pub trait Reflect {
    /// The static shape of `Self`.
    const KIND: Kind;

    /// The static shape after stripping every level of indirection.
    ///
    /// Only indirections override this; a nil reference uses it to tell a
    /// missing container from a missing scalar.
    const POINTEE: Kind = Self::KIND;

    fn reflect(&self) -> Value;
}

/// Types usable as map keys.
pub trait ReflectKey {
    const KEY_KIND: KeyKind;

    fn reflect_key(&self) -> Key;
}

macro_rules! impl_reflect_scalar {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Reflect for $ty {
                const KIND: Kind = Kind::$kind;

                fn reflect(&self) -> Value {
                    Value::Primitive(Primitive::from(*self))
                }
            }
        )*
    };
}

impl_reflect_scalar! {
    bool => Bool,
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    isize => Int,
    u8 => Uint,
    u16 => Uint,
    u32 => Uint,
    u64 => Uint,
    usize => Uint,
    f32 => Float,
    f64 => Float,
    crate::Complex<f32> => Complex,
    crate::Complex<f64> => Complex,
}

impl Reflect for char {
    const KIND: Kind = Kind::Text;

    fn reflect(&self) -> Value {
        Value::Primitive(Primitive::Text(self.to_string()))
    }
}

impl Reflect for String {
    const KIND: Kind = Kind::Text;

    fn reflect(&self) -> Value {
        Value::Primitive(Primitive::Text(self.clone()))
    }
}

impl Reflect for str {
    const KIND: Kind = Kind::Text;

    fn reflect(&self) -> Value {
        Value::Primitive(Primitive::Text(self.to_string()))
    }
}

impl Reflect for Value {
    const KIND: Kind = Kind::Interface;

    fn reflect(&self) -> Value {
        self.clone()
    }
}

impl<T: Reflect + ?Sized> Reflect for &T {
    const KIND: Kind = T::KIND;
    const POINTEE: Kind = T::POINTEE;

    fn reflect(&self) -> Value {
        (**self).reflect()
    }
}

/// `None` is a nil reference; `Some` is a fresh reference.
impl<T: Reflect> Reflect for Option<T> {
    const KIND: Kind = Kind::Reference;
    const POINTEE: Kind = T::POINTEE;

    fn reflect(&self) -> Value {
        match self {
            Some(inner) => Value::Reference(Pointer::new(inner.reflect())),
            None => Value::Reference(Pointer::nil(T::POINTEE)),
        }
    }
}

impl<T: Reflect + ?Sized> Reflect for Box<T> {
    const KIND: Kind = Kind::Reference;
    const POINTEE: Kind = T::POINTEE;

    fn reflect(&self) -> Value {
        Value::Reference(Pointer::new((**self).reflect()))
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    const KIND: Kind = Kind::Slice;

    fn reflect(&self) -> Value {
        Value::Slice(Slice::new(self.iter().map(Reflect::reflect).collect()))
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    const KIND: Kind = Kind::Array;

    fn reflect(&self) -> Value {
        Value::Array(self.iter().map(Reflect::reflect).collect())
    }
}

fn reflect_map<'a, K, V, I>(entries: I) -> Value
where
    K: ReflectKey + 'a,
    V: Reflect + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    let entries = entries
        .into_iter()
        .map(|(k, v)| (k.reflect_key(), v.reflect()))
        .collect();
    Value::Map(Map::new(Mapping::from_keyed(K::KEY_KIND, entries)))
}

impl<K: ReflectKey, V: Reflect, S> Reflect for HashMap<K, V, S> {
    const KIND: Kind = Kind::Map;

    fn reflect(&self) -> Value {
        reflect_map(self.iter())
    }
}

impl<K: ReflectKey, V: Reflect> Reflect for BTreeMap<K, V> {
    const KIND: Kind = Kind::Map;

    fn reflect(&self) -> Value {
        reflect_map(self.iter())
    }
}

impl<K: ReflectKey, V: Reflect, S> Reflect for IndexMap<K, V, S> {
    const KIND: Kind = Kind::Map;

    fn reflect(&self) -> Value {
        reflect_map(self.iter())
    }
}

impl ReflectKey for String {
    const KEY_KIND: KeyKind = KeyKind::Text;

    fn reflect_key(&self) -> Key {
        Key::Text(self.clone())
    }
}

impl ReflectKey for &str {
    const KEY_KIND: KeyKind = KeyKind::Text;

    fn reflect_key(&self) -> Key {
        Key::Text((*self).to_string())
    }
}

impl ReflectKey for bool {
    const KEY_KIND: KeyKind = KeyKind::Bool;

    fn reflect_key(&self) -> Key {
        Key::Bool(*self)
    }
}

macro_rules! impl_reflect_key_int {
    ($($ty:ty => $kind:ident / $variant:ident as $wide:ty),* $(,)?) => {
        $(
            impl ReflectKey for $ty {
                const KEY_KIND: KeyKind = KeyKind::$kind;

                fn reflect_key(&self) -> Key {
                    Key::$variant(<$wide>::from(*self))
                }
            }
        )*
    };
}

impl_reflect_key_int! {
    i8 => Int / Int as i64,
    i16 => Int / Int as i64,
    i32 => Int / Int as i64,
    i64 => Int / Int as i64,
    u8 => Uint / Uint as u64,
    u16 => Uint / Uint as u64,
    u32 => Uint / Uint as u64,
    u64 => Uint / Uint as u64,
}
