//! Records: named fields in declaration order.

use serde::{Deserialize, Serialize};

use crate::Value;

/// Whether a field is part of a record's public surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

/// A named field of a record.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub visibility: Visibility,
    pub value: Value,
}

impl Field {
    #[inline]
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}

/// A record value.
///
/// # Example
///
/// ```rust
/// use flatwalk_value::{Record, Value};
///
/// let record = Record::new("Point")
///     .field("x", 1_i32)
///     .field("y", 2_i32)
///     .private("cache", Value::Nil);
///
/// assert_eq!(record.fields().len(), 3);
/// assert!(!record.fields()[2].is_public());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    type_name: String,
    fields: Vec<Field>,
}

impl Record {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a public field.
    pub fn field(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with_field(name, Visibility::Public, value)
    }

    /// Appends a private field.
    pub fn private(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with_field(name, Visibility::Private, value)
    }

    /// Appends a field with explicit visibility.
    pub fn with_field(
        mut self,
        name: impl Into<String>,
        visibility: Visibility,
        value: impl Into<Value>,
    ) -> Self {
        self.fields.push(Field {
            name: name.into(),
            visibility,
            value: value.into(),
        });
        self
    }

    #[inline]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Fields in declaration order.
    #[inline]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.value)
    }
}
