//! Depth-first, pre-order traversal of a value graph.
//!
//! The walker dispatches on a value's shape, applies [`Options`], prunes
//! cycles through a per-call [`VisitSet`], and reports `(path, value)` pairs
//! to a callback. A callback returning `ControlFlow::Break(())` stops the
//! whole walk: every recursion site propagates it with `?`, so no further
//! callbacks run.

use std::borrow::Cow;
use std::ops::ControlFlow;

use flatwalk_value::{Identity, KeyKind, Map, Pointer, Record, Slice, Value};
use tracing::{debug, trace};

use crate::options::{Options, PointerPolicy};
use crate::path::Path;
use crate::visited::VisitSet;

/// Result type for walk callbacks.
///
/// - `ControlFlow::Continue(())` - keep walking
/// - `ControlFlow::Break(())` - stop the entire walk
pub type VisitResult = ControlFlow<()>;

/// Initial segment capacity of the shared path buffer.
const PATH_CAPACITY: usize = 16;

/// Walks `root` depth-first, calling `callback` for every reported value.
///
/// Records are visited in field declaration order, arrays and slices in
/// index order, and maps in insertion order (or key order with
/// [`Options::sort_map_keys`]). References are reported or followed
/// according to [`Options::pointer_policy`].
///
/// # Example
///
/// ```rust
/// use std::ops::ControlFlow;
/// use flatwalk::{Options, walk};
/// use flatwalk_value::Value;
///
/// let root = Value::slice([1_i32, 2, 3]);
/// let mut seen = Vec::new();
/// walk(&root, &Options::default(), |path, value| {
///     seen.push(format!("{}={}", path, value));
///     ControlFlow::Continue(())
/// });
/// assert_eq!(seen, ["0=1", "1=2", "2=3"]);
/// ```
pub fn walk<F>(root: &Value, options: &Options, callback: F)
where
    F: FnMut(&Path, &Value) -> VisitResult,
{
    Walker::new(options, callback).run(root);
}

/// Outcome of a completed walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WalkSummary {
    pub emitted: usize,
    pub stopped: bool,
}

pub(crate) struct Walker<'o, F> {
    options: &'o Options,
    callback: F,
    emitted: usize,
    /// Segment substituted for the empty path, fixed once per walk.
    root_segment: Option<String>,
    /// Set below a private field. References there are followed, never
    /// handed to the callback.
    sealed: bool,
}

impl<'o, F> Walker<'o, F>
where
    F: FnMut(&Path, &Value) -> VisitResult,
{
    pub(crate) fn new(options: &'o Options, callback: F) -> Self {
        Self {
            options,
            callback,
            emitted: 0,
            root_segment: None,
            sealed: false,
        }
    }

    pub(crate) fn run(mut self, root: &Value) -> WalkSummary {
        debug!(
            "Walking {} value (policy {:?}, expand_unexported={}, sort_map_keys={})",
            root.kind(),
            self.options.pointer_policy,
            self.options.expand_unexported,
            self.options.sort_map_keys
        );

        self.root_segment = self.options.root_name.segment(root).map(Cow::into_owned);

        let visited = VisitSet::new();
        let mut path = Path::with_capacity(PATH_CAPACITY);
        let stopped = self.visit(root, &mut path, &visited).is_break();

        debug_assert!(visited.is_empty(), "visit set must unwind with the walk");
        debug_assert!(path.is_root(), "path must unwind with the walk");

        debug!("Walk finished: {} values (stopped={})", self.emitted, stopped);
        WalkSummary {
            emitted: self.emitted,
            stopped,
        }
    }

    fn visit(&mut self, value: &Value, path: &mut Path, visited: &VisitSet) -> VisitResult {
        match value {
            Value::Nil => ControlFlow::Continue(()),
            Value::Primitive(_) => self.emit(value, path),
            Value::Opaque(type_name) => {
                trace!("Opaque {} at {:?}", type_name, path.join("."));
                self.visit_inaccessible(path)
            }
            Value::Interface(Some(inner)) => self.visit(inner, path, visited),
            Value::Interface(None) => self.visit(&Value::Nil, path, visited),
            Value::Reference(pointer) => self.visit_reference(value, pointer, path, visited),
            Value::Record(record) => self.visit_record(record, path, visited),
            Value::Array(items) => self.visit_elements(items, path, visited),
            Value::Slice(slice) => self.visit_slice(slice, path, visited),
            Value::Map(map) => self.visit_map(map, path, visited),
        }
    }

    /// Reports `value` at `path`, naming the root if asked to.
    fn emit(&mut self, value: &Value, path: &mut Path) -> VisitResult {
        self.emitted += 1;
        if path.is_root()
            && let Some(segment) = &self.root_segment
        {
            path.push(segment.as_str());
            let flow = (self.callback)(path, value);
            path.pop();
            return flow;
        }
        (self.callback)(path, value)
    }

    /// Pushes `segment`, visits `value`, and pops again on every exit path.
    fn descend(
        &mut self,
        segment: impl Into<String>,
        value: &Value,
        path: &mut Path,
        visited: &VisitSet,
    ) -> VisitResult {
        path.push(segment);
        let flow = self.visit(value, path, visited);
        path.pop();
        flow
    }

    fn visit_nil_container(&mut self, path: &mut Path) -> VisitResult {
        if self.options.add_nil_containers {
            return self.emit(&Value::Nil, path);
        }
        ControlFlow::Continue(())
    }

    fn visit_nil_field(&mut self, path: &mut Path) -> VisitResult {
        if self.options.add_nil_fields {
            return self.emit(&Value::Nil, path);
        }
        ControlFlow::Continue(())
    }

    /// A value that exists but cannot be read is treated as a missing scalar.
    fn visit_inaccessible(&mut self, path: &mut Path) -> VisitResult {
        self.visit_nil_field(path)
    }

    fn visit_record(&mut self, record: &Record, path: &mut Path, visited: &VisitSet) -> VisitResult {
        for field in record.fields() {
            if field.is_public() {
                self.descend(field.name.as_str(), &field.value, path, visited)?;
            } else if self.options.expand_unexported {
                let outer = std::mem::replace(&mut self.sealed, true);
                let flow = self.descend(field.name.as_str(), &field.value, path, visited);
                self.sealed = outer;
                flow?;
            }
        }
        ControlFlow::Continue(())
    }

    fn visit_elements(&mut self, items: &[Value], path: &mut Path, visited: &VisitSet) -> VisitResult {
        for (index, item) in items.iter().enumerate() {
            self.descend(index.to_string(), item, path, visited)?;
        }
        ControlFlow::Continue(())
    }

    fn visit_slice(&mut self, slice: &Slice, path: &mut Path, visited: &VisitSet) -> VisitResult {
        let (Some(id), Some(items)) = (slice.identity(), slice.try_get()) else {
            return self.visit_nil_container(path);
        };
        let Some(_open) = enter(visited, id, path) else {
            return ControlFlow::Continue(());
        };
        let Ok(items) = items else {
            trace!("Slice {} is busy at {:?}", id, path.join("."));
            return self.visit_inaccessible(path);
        };
        self.visit_elements(&items, path, visited)
    }

    fn visit_map(&mut self, map: &Map, path: &mut Path, visited: &VisitSet) -> VisitResult {
        let (Some(id), Some(mapping)) = (map.identity(), map.try_get()) else {
            return self.visit_nil_container(path);
        };
        let Some(_open) = enter(visited, id, path) else {
            return ControlFlow::Continue(());
        };
        if map.key_kind() != KeyKind::Text {
            trace!(
                "Skipping map with {} keys at {:?}",
                map.key_kind(),
                path.join(".")
            );
            return ControlFlow::Continue(());
        }
        let Ok(mapping) = mapping else {
            trace!("Map {} is busy at {:?}", id, path.join("."));
            return self.visit_inaccessible(path);
        };

        let mut entries: Vec<(&str, &Value)> = mapping
            .iter()
            .filter_map(|(key, value)| key.as_text().map(|text| (text, value)))
            .collect();
        if self.options.sort_map_keys {
            entries.sort_by(|a, b| a.0.cmp(b.0));
        }
        for (key, value) in entries {
            self.descend(key, value, path, visited)?;
        }
        ControlFlow::Continue(())
    }

    /// Follows one level of the reference chain that started at `origin`,
    /// keeping its identity open until the rest of the chain and whatever it
    /// leads to have been visited.
    fn visit_reference(
        &mut self,
        origin: &Value,
        pointer: &Pointer,
        path: &mut Path,
        visited: &VisitSet,
    ) -> VisitResult {
        let (Some(id), Some(target)) = (pointer.identity(), pointer.try_get()) else {
            return if pointer.pointee().is_complex() {
                self.visit_nil_container(path)
            } else {
                self.visit_nil_field(path)
            };
        };
        let Some(_open) = enter(visited, id, path) else {
            return ControlFlow::Continue(());
        };
        let Ok(target) = target else {
            trace!("Reference {} is busy at {:?}", id, path.join("."));
            return self.visit_inaccessible(path);
        };

        match &*target {
            Value::Reference(next) => self.visit_reference(origin, next, path, visited),
            target => self.follow(origin, target, path, visited),
        }
    }

    /// Applies the pointer policy to a fully dereferenced target.
    ///
    /// A sealed reference cannot be reported, so every policy falls back to
    /// visiting its target.
    fn follow(
        &mut self,
        origin: &Value,
        target: &Value,
        path: &mut Path,
        visited: &VisitSet,
    ) -> VisitResult {
        if self.sealed {
            return self.visit(target, path, visited);
        }
        match self.options.pointer_policy {
            PointerPolicy::JustReference => self.emit(origin, path),
            PointerPolicy::JustValue => self.visit(target, path, visited),
            PointerPolicy::Both => {
                self.emit(origin, path)?;
                self.visit(target, path, visited)
            }
            PointerPolicy::FollowComplexOnly => {
                if target.kind().is_complex() {
                    self.visit(target, path, visited)
                } else {
                    self.emit(origin, path)
                }
            }
        }
    }
}

/// Opens `id`, logging when it is already open on the current path.
fn enter<'s>(
    visited: &'s VisitSet,
    id: Identity,
    path: &Path,
) -> Option<crate::visited::OpenGuard<'s>> {
    let guard = visited.enter(id);
    if guard.is_none() {
        trace!("Pruning cycle through {} at {:?}", id, path.join("."));
    }
    guard
}

/// Collects every `(path, value)` pair a walk reports, for assertions.
#[cfg(test)]
pub(crate) fn collect(root: &Value, options: &Options) -> Vec<(Vec<String>, Value)> {
    let mut out = Vec::new();
    walk(root, options, |path, value| {
        out.push((path.to_vec(), value.clone()));
        ControlFlow::Continue(())
    });
    out
}
