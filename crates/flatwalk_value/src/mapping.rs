//! Map keys and map contents.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{Value, ValueError};

/// The declared kind of a map's keys.
///
/// Only text-keyed maps contribute path segments; other maps are carried in
/// the graph but skipped during traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyKind {
    Text,
    Int,
    Uint,
    Bool,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyKind::Text => "text",
            KeyKind::Int => "int",
            KeyKind::Uint => "uint",
            KeyKind::Bool => "bool",
        };
        write!(f, "{}", name)
    }
}

/// A map key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Text(String),
    Int(i64),
    Uint(u64),
    Bool(bool),
}

impl Key {
    /// Returns the kind of this key.
    pub const fn kind(&self) -> KeyKind {
        match self {
            Key::Text(_) => KeyKind::Text,
            Key::Int(_) => KeyKind::Int,
            Key::Uint(_) => KeyKind::Uint,
            Key::Bool(_) => KeyKind::Bool,
        }
    }

    /// Returns the key text for text keys.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Key::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Text(s) => f.write_str(s),
            Key::Int(v) => write!(f, "{}", v),
            Key::Uint(v) => write!(f, "{}", v),
            Key::Bool(v) => write!(f, "{}", v),
        }
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Text(s)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Text(s.to_string())
    }
}

impl From<i64> for Key {
    fn from(v: i64) -> Self {
        Key::Int(v)
    }
}

impl From<u64> for Key {
    fn from(v: u64) -> Self {
        Key::Uint(v)
    }
}

impl From<bool> for Key {
    fn from(v: bool) -> Self {
        Key::Bool(v)
    }
}

/// Contents of a map: entries in insertion order plus the declared key kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Mapping {
    key_kind: KeyKind,
    entries: IndexMap<Key, Value>,
}

impl Mapping {
    /// Creates an empty map with the given key kind.
    pub fn new(key_kind: KeyKind) -> Self {
        Self {
            key_kind,
            entries: IndexMap::new(),
        }
    }

    /// Creates an empty text-keyed map.
    pub fn text() -> Self {
        Self::new(KeyKind::Text)
    }

    /// Builds a text-keyed map from `(key, value)` pairs.
    pub fn from_text_entries<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            key_kind: KeyKind::Text,
            entries: entries
                .into_iter()
                .map(|(k, v)| (Key::Text(k.into()), v.into()))
                .collect(),
        }
    }

    /// Builds a map from entries whose keys are all of `key_kind`.
    pub(crate) fn from_keyed(key_kind: KeyKind, entries: IndexMap<Key, Value>) -> Self {
        debug_assert!(entries.keys().all(|key| key.kind() == key_kind));
        Self { key_kind, entries }
    }

    /// Returns the declared key kind.
    #[inline]
    pub fn key_kind(&self) -> KeyKind {
        self.key_kind
    }

    /// Inserts an entry, returning the previous value for the key.
    ///
    /// Fails if the key's kind differs from the declared key kind.
    pub fn insert(
        &mut self,
        key: impl Into<Key>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, ValueError> {
        let key = key.into();
        if key.kind() != self.key_kind {
            return Err(ValueError::KeyKindMismatch {
                expected: self.key_kind,
                found: key.kind(),
            });
        }
        Ok(self.entries.insert(key, value.into()))
    }

    /// Looks up a value by key.
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.entries.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
