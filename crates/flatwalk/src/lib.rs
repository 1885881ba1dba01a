//! # flatwalk
//!
//! Depth-first traversal and flattening of runtime value graphs.
//!
//! This crate provides:
//! - [`walk`]: a pre-order stream of `(path, value)` callbacks with early stop
//! - [`flatten`]: the same walk collected into a delimited-path mapping
//! - [`Options`]: the policies that shape a walk (private fields, nil
//!   placeholders, map key order, reference reporting, root naming)
//!
//! Cyclic graphs are safe: a handle already open on the current path is
//! pruned, while the same handle reached from a disjoint branch is walked
//! again.
//!
//! ## Example
//!
//! ```rust
//! use flatwalk::{Options, PointerPolicy, flatten};
//! use flatwalk_value::{Map, Record, Value};
//!
//! let tags = Map::text();
//! tags.insert("env", "prod").unwrap();
//!
//! let root = Value::from(
//!     Record::new("Service")
//!         .field("Name", "api")
//!         .field("Port", Value::pointer(8080_u16))
//!         .field("Tags", tags.clone())
//!         .private("secret", "hunter2"),
//! );
//! // Close a cycle; it is pruned rather than followed forever.
//! tags.insert("self", tags.clone()).unwrap();
//!
//! let options = Options::new()
//!     .sort_map_keys(true)
//!     .pointer_policy(PointerPolicy::JustValue);
//! let flat = flatten(&root, &options);
//!
//! assert_eq!(flat["Name"], Value::from("api"));
//! assert_eq!(flat["Port"], Value::from(8080_u16));
//! assert_eq!(flat["Tags.env"], Value::from("prod"));
//! assert!(!flat.contains_key("secret"));
//! assert_eq!(flat.len(), 3);
//! ```

mod error;
mod flatten;
mod options;
mod path;
mod visited;
mod walker;

pub use error::FlatwalkError;
pub use flatten::{FlatMap, flatten, flatten_reflect, walk_reflect};
pub use options::{Options, PointerPolicy, RootName};
pub use path::Path;
pub use walker::{VisitResult, walk};

pub use flatwalk_value as value;
