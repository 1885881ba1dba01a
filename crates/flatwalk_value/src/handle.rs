//! Shared, nullable handles with identity.
//!
//! References, slices and maps are the only places a value graph can share
//! structure, and therefore the only places it can form cycles. Each handle
//! wraps an optional `Rc<RefCell<_>>`: `None` is the null state, cloning
//! keeps identity, and `RefCell` lets callers close a cycle after building
//! its parts.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::{Kind, Mapping, Value, ValueError};

/// Opaque identity token of a shared allocation.
///
/// Two handles have equal identities iff they point at the same allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identity(usize);

impl Identity {
    fn of<T>(rc: &Rc<T>) -> Self {
        Self(Rc::as_ptr(rc).cast::<()>() as usize)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// A nullable reference to a value.
#[derive(Clone)]
pub struct Pointer {
    target: Option<Rc<RefCell<Value>>>,
    pointee: Kind,
}

impl Pointer {
    /// Creates a reference to `value`.
    pub fn new(value: impl Into<Value>) -> Self {
        let value = value.into();
        let pointee = value.terminal_kind();
        Self {
            target: Some(Rc::new(RefCell::new(value))),
            pointee,
        }
    }

    /// Creates a null reference whose terminal pointee has kind `pointee`.
    pub fn nil(pointee: Kind) -> Self {
        Self {
            target: None,
            pointee,
        }
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        self.target.is_none()
    }

    /// The static kind left after stripping every level of indirection.
    ///
    /// Fixed at construction, like a declared type: [`replace`](Self::replace)
    /// does not change it.
    #[inline]
    pub fn pointee(&self) -> Kind {
        self.pointee
    }

    pub fn identity(&self) -> Option<Identity> {
        self.target.as_ref().map(Identity::of)
    }

    /// Borrows the target. Returns `None` for a null reference.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::Busy`] if the target is mutably borrowed.
    pub fn try_get(&self) -> Option<Result<Ref<'_, Value>, ValueError>> {
        self.target
            .as_ref()
            .map(|cell| cell.try_borrow().map_err(|_| ValueError::Busy("reference")))
    }

    /// Replaces the target, returning the previous one.
    pub fn replace(&self, value: impl Into<Value>) -> Result<Value, ValueError> {
        let cell = self
            .target
            .as_ref()
            .ok_or(ValueError::NilHandle("reference"))?;
        let mut slot = cell
            .try_borrow_mut()
            .map_err(|_| ValueError::Busy("reference"))?;
        Ok(std::mem::replace(&mut *slot, value.into()))
    }
}

impl PartialEq for Pointer {
    fn eq(&self, other: &Self) -> bool {
        match (&self.target, &other.target) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => self.pointee == other.pointee,
            _ => false,
        }
    }
}

impl fmt::Debug for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.identity() {
            Some(id) => write!(f, "Pointer({})", id),
            None => write!(f, "Pointer(nil {})", self.pointee),
        }
    }
}

/// A nullable, variable-length sequence.
#[derive(Clone, Default)]
pub struct Slice(Option<Rc<RefCell<Vec<Value>>>>);

impl Slice {
    pub fn new(items: Vec<Value>) -> Self {
        Self(Some(Rc::new(RefCell::new(items))))
    }

    /// Creates a null slice.
    pub fn nil() -> Self {
        Self(None)
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        self.0.is_none()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.0.as_ref().map(Identity::of)
    }

    /// Number of elements. A null slice has none.
    pub fn len(&self) -> usize {
        self.0
            .as_ref()
            .and_then(|cell| cell.try_borrow().ok().map(|items| items.len()))
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrows the elements. Returns `None` for a null slice.
    pub fn try_get(&self) -> Option<Result<Ref<'_, Vec<Value>>, ValueError>> {
        self.0
            .as_ref()
            .map(|cell| cell.try_borrow().map_err(|_| ValueError::Busy("slice")))
    }

    /// Appends an element.
    pub fn push(&self, value: impl Into<Value>) -> Result<(), ValueError> {
        let cell = self.0.as_ref().ok_or(ValueError::NilHandle("slice"))?;
        cell.try_borrow_mut()
            .map_err(|_| ValueError::Busy("slice"))?
            .push(value.into());
        Ok(())
    }
}

impl PartialEq for Slice {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl fmt::Debug for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.identity() {
            Some(id) => write!(f, "Slice({}, len {})", id, self.len()),
            None => write!(f, "Slice(nil)"),
        }
    }
}

/// A nullable map.
#[derive(Clone)]
pub struct Map {
    mapping: Option<Rc<RefCell<Mapping>>>,
    key_kind: crate::KeyKind,
}

impl Map {
    pub fn new(mapping: Mapping) -> Self {
        Self {
            key_kind: mapping.key_kind(),
            mapping: Some(Rc::new(RefCell::new(mapping))),
        }
    }

    /// Creates an empty text-keyed map.
    pub fn text() -> Self {
        Self::new(Mapping::text())
    }

    /// Creates a null map with the given key kind.
    pub fn nil(key_kind: crate::KeyKind) -> Self {
        Self {
            mapping: None,
            key_kind,
        }
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        self.mapping.is_none()
    }

    #[inline]
    pub fn key_kind(&self) -> crate::KeyKind {
        self.key_kind
    }

    pub fn identity(&self) -> Option<Identity> {
        self.mapping.as_ref().map(Identity::of)
    }

    pub fn len(&self) -> usize {
        self.mapping
            .as_ref()
            .and_then(|cell| cell.try_borrow().ok().map(|m| m.len()))
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrows the contents. Returns `None` for a null map.
    pub fn try_get(&self) -> Option<Result<Ref<'_, Mapping>, ValueError>> {
        self.mapping
            .as_ref()
            .map(|cell| cell.try_borrow().map_err(|_| ValueError::Busy("map")))
    }

    /// Inserts an entry, returning the previous value for the key.
    pub fn insert(
        &self,
        key: impl Into<crate::Key>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, ValueError> {
        let cell = self.mapping.as_ref().ok_or(ValueError::NilHandle("map"))?;
        cell.try_borrow_mut()
            .map_err(|_| ValueError::Busy("map"))?
            .insert(key, value)
    }
}

impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        match (&self.mapping, &other.mapping) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => self.key_kind == other.key_kind,
            _ => false,
        }
    }
}

impl fmt::Debug for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.identity() {
            Some(id) => write!(f, "Map({}, len {})", id, self.len()),
            None => write!(f, "Map(nil, {} keys)", self.key_kind),
        }
    }
}
