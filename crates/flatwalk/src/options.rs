//! Traversal options.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use flatwalk_value::Value;
use serde::{Deserialize, Serialize};

use crate::FlatwalkError;

/// How references are reported during a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PointerPolicy {
    /// Report the reference itself and do not descend.
    JustReference,
    /// Descend into the target; never report the reference.
    JustValue,
    /// Report the reference, then descend into the target at the same path.
    Both,
    /// Descend into complex targets; report the reference for scalar ones.
    #[default]
    FollowComplexOnly,
}

/// What path a value emitted at the root is reported under.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RootName {
    /// The empty path.
    #[default]
    Empty,
    /// A single segment holding the emitted value's type name.
    TypeName,
    /// A single fixed segment.
    Placeholder(String),
}

impl RootName {
    /// Returns the segment to report `value` under when emitted at the root.
    pub fn segment<'v>(&self, value: &'v Value) -> Option<Cow<'v, str>> {
        match self {
            RootName::Empty => None,
            RootName::TypeName => Some(value.type_name()),
            RootName::Placeholder(name) => Some(Cow::Owned(name.clone())),
        }
    }
}

/// Options controlling a walk.
///
/// Resolved once per top-level call and read-only afterwards.
///
/// # Example
///
/// ```rust
/// use flatwalk::{Options, PointerPolicy};
///
/// let options = Options::new()
///     .expand_unexported(true)
///     .sort_map_keys(true)
///     .delimiter("/")
///     .pointer_policy(PointerPolicy::JustValue);
///
/// assert_eq!(options.delimiter, "/");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Options {
    /// Whether to descend into private record fields.
    /// Default: false
    pub expand_unexported: bool,
    /// Separator used when joining a path into a flat key.
    /// Default: "."
    pub delimiter: String,
    /// Whether null maps, slices and references to containers are reported.
    /// Default: false
    pub add_nil_containers: bool,
    /// Whether null references to scalars and inaccessible values are reported.
    /// Default: false
    pub add_nil_fields: bool,
    /// Whether map keys are visited in lexicographic order.
    /// Default: false (insertion order)
    pub sort_map_keys: bool,
    /// How references are reported.
    /// Default: `FollowComplexOnly`
    pub pointer_policy: PointerPolicy,
    /// Path used for values emitted at the root.
    /// Default: `Empty`
    pub root_name: RootName,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            expand_unexported: false,
            delimiter: ".".to_string(),
            add_nil_containers: false,
            add_nil_fields: false,
            sort_map_keys: false,
            pointer_policy: PointerPolicy::default(),
            root_name: RootName::default(),
        }
    }
}

impl Options {
    /// Creates options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables descending into private fields.
    pub fn expand_unexported(mut self, yes: bool) -> Self {
        self.expand_unexported = yes;
        self
    }

    /// Enables or disables placeholders for null containers.
    pub fn add_nil_containers(mut self, yes: bool) -> Self {
        self.add_nil_containers = yes;
        self
    }

    /// Enables or disables placeholders for null scalars.
    pub fn add_nil_fields(mut self, yes: bool) -> Self {
        self.add_nil_fields = yes;
        self
    }

    /// Sets the path delimiter.
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Enables or disables sorted map key order.
    pub fn sort_map_keys(mut self, yes: bool) -> Self {
        self.sort_map_keys = yes;
        self
    }

    /// Sets the reference reporting policy.
    pub fn pointer_policy(mut self, policy: PointerPolicy) -> Self {
        self.pointer_policy = policy;
        self
    }

    /// Sets the root naming behaviour.
    pub fn root_name(mut self, root_name: RootName) -> Self {
        self.root_name = root_name;
        self
    }

    /// Loads options from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FlatwalkError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Parses options from a JSON object.
    ///
    /// Missing fields take their defaults; unknown fields are rejected.
    pub fn from_json(json: &str) -> Result<Self, FlatwalkError> {
        serde_json::from_str(json)
            .map_err(|e| FlatwalkError::config(format!("Invalid options: {}", e)))
    }
}
