//! # flatwalk_value
//!
//! Runtime value graph for flatwalk.
//!
//! This crate provides the shapes the walker dispatches on. A [`Value`] is a
//! closed tagged union: primitives, records, fixed arrays, and the three
//! shared handle types ([`Pointer`], [`Slice`], [`Map`]) that carry identity
//! and may be null.
//!
//! ## Architecture
//!
//! - Owned variants form trees; only handles share structure
//! - Handles are `Rc<RefCell<_>>`, so graphs may be cyclic
//! - [`Identity`] tokens compare allocations, not contents
//! - [`Reflect`] maps concrete Rust types onto shapes before a walk
//!
//! ## Example
//!
//! ```rust
//! use flatwalk_value::{Map, Record, Value};
//!
//! let map = Map::text();
//! map.insert("key", "value").unwrap();
//!
//! let root = Value::from(
//!     Record::new("Config")
//!         .field("Name", "demo")
//!         .field("Extra", map.clone()),
//! );
//!
//! // Handles can point back at themselves.
//! map.insert("again", map.clone()).unwrap();
//! assert_eq!(map.len(), 2);
//! # let _ = root;
//! ```

mod error;
mod handle;
mod json;
mod kind;
mod mapping;
mod primitive;
mod record;
mod reflect;
mod value;

pub use error::ValueError;
pub use handle::{Identity, Map, Pointer, Slice};
pub use kind::Kind;
pub use mapping::{Key, KeyKind, Mapping};
pub use primitive::{Complex, Primitive};
pub use record::{Field, Record, Visibility};
pub use reflect::{Reflect, ReflectKey};
pub use value::Value;
