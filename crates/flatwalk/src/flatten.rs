//! Collecting a walk into a flat mapping.

use std::ops::ControlFlow;

use flatwalk_value::{Reflect, Value};
use indexmap::IndexMap;
use tracing::debug;

use crate::options::Options;
use crate::path::Path;
use crate::walker::{VisitResult, Walker, walk};

/// Joined paths to values, in the order the walk reported them.
pub type FlatMap = IndexMap<String, Value>;

/// Flattens `root` into a mapping from delimited paths to values.
///
/// Paths are joined with [`Options::delimiter`]. If two distinct paths join
/// to the same key, the value reported last wins.
///
/// # Example
///
/// ```rust
/// use flatwalk::{Options, flatten};
/// use flatwalk_value::{Record, Value};
///
/// let root = Value::from(
///     Record::new("T")
///         .field("A", 5_i32)
///         .field("S", Record::new("Inner").field("D", "x")),
/// );
///
/// let flat = flatten(&root, &Options::default());
/// assert_eq!(flat["A"], Value::from(5_i32));
/// assert_eq!(flat["S.D"], Value::from("x"));
/// ```
pub fn flatten(root: &Value, options: &Options) -> FlatMap {
    let mut flat = FlatMap::new();
    let summary = Walker::new(options, |path: &Path, value: &Value| {
        flat.insert(path.join(&options.delimiter), value.clone());
        ControlFlow::Continue(())
    })
    .run(root);

    let collisions = summary.emitted - flat.len();
    if collisions > 0 {
        debug!(
            "Flatten: {} paths collapsed onto existing keys with delimiter {:?}",
            collisions, options.delimiter
        );
    }
    flat
}

/// Flattens any [`Reflect`] value.
pub fn flatten_reflect<T: Reflect + ?Sized>(root: &T, options: &Options) -> FlatMap {
    flatten(&root.reflect(), options)
}

/// Walks any [`Reflect`] value. See [`walk`].
pub fn walk_reflect<T, F>(root: &T, options: &Options, callback: F)
where
    T: Reflect + ?Sized,
    F: FnMut(&Path, &Value) -> VisitResult,
{
    walk(&root.reflect(), options, callback);
}
