//! Breadcrumb from the walk root to the current value.

use std::fmt;

/// Ordered path segments from the root to a value.
///
/// The walker owns one buffer per call and pushes/pops segments in stack
/// order. Callbacks only ever see `&Path`, so a path cannot change under a
/// callback that is still looking at it; keeping one past the callback
/// requires an explicit copy ([`Clone`] or [`Path::to_vec`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// Creates an empty (root) path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty path with room for `capacity` segments.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            segments: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.segments.iter()
    }

    /// Joins the segments with `delimiter`.
    pub fn join(&self, delimiter: &str) -> String {
        self.segments.join(delimiter)
    }

    /// Copies the segments out.
    pub fn to_vec(&self) -> Vec<String> {
        self.segments.clone()
    }

    #[inline]
    pub(crate) fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    #[inline]
    pub(crate) fn pop(&mut self) {
        self.segments.pop();
    }
}

impl<S: Into<String>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Renders the path joined with `.`.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join("."))
    }
}
