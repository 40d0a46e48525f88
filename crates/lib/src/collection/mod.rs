//! Path-addressed nested key/value container.
//!
//! [`PathMap`] stores a tree of [`Mapping`]s addressed with slash-delimited
//! string paths such as `"three/A-one"`. Each component of a path is one
//! descent step into a nested mapping.
//!
//! # Copies and aliases
//!
//! Reads come in two flavours:
//!
//! - **Copies** ([`PathMap::get`], [`PathMap::get_or`], [`PathMap::all`])
//!   return owned snapshots. Changing a snapshot never changes the container.
//! - **Aliases** ([`PathMap::get_ref`], [`PathMap::root_ref`]) return
//!   `&mut` references into the container's storage. Writes through an alias
//!   land in the container, including writes to deeper levels reached from the
//!   alias with [`Mapping::get_path_mut`]. The borrow checker keeps every other
//!   access to the container out while an alias is alive, so an alias can
//!   never observe or race with a concurrent mutation.
//!
//! # Outcomes
//!
//! Missing paths, refused overwrites and malformed JSON are ordinary
//! outcomes. The boolean methods (`set`, `unset_item`, `load_from_json`)
//! report them as `false`; the `try_*` methods return a [`CollectionError`]
//! describing which case occurred. No method panics on bad input.
//!
//! # Usage
//!
//! ```
//! use pathmap::collection::{PathMap, Value};
//!
//! let mut map = PathMap::new();
//! assert!(map.set("three/A-one", "31", false));
//! assert!(!map.set("three/A-one", "32", false)); // occupied
//!
//! assert_eq!(map.get("three/A-one"), Some(Value::from("31")));
//! assert_eq!(map.get_or("three/Z", "dflt"), Value::from("dflt"));
//!
//! if let Some(value) = map.get_ref("three/A-one") {
//!     *value = Value::from("changed");
//! }
//! assert_eq!(map.get("three/A-one"), Some(Value::from("changed")));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

mod errors;
mod mapping;
pub mod path;
mod value;

pub use errors::CollectionError;
pub use mapping::Mapping;
pub use path::{Path, PathBuf};
pub use value::Value;

// Re-export the macro from crate root
pub use crate::path;

/// A tree of nested mappings navigated with slash-delimited paths.
///
/// The root is always a [`Mapping`]; a scalar can never sit at the top level.
///
/// ```
/// # use pathmap::collection::{Mapping, PathMap, Value};
/// let map = PathMap::from(
///     Mapping::new()
///         .with("one", "1")
///         .with("two", "2")
///         .with("three", Mapping::new().with("A", "31")),
/// );
///
/// assert_eq!(map.get("three/A"), Some(Value::from("31")));
/// assert!(map.has("three/A"));
/// assert_eq!(map.count(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathMap {
    root: Mapping,
}

impl PathMap {
    /// Creates a new empty container
    pub fn new() -> Self {
        Self {
            root: Mapping::new(),
        }
    }

    /// Creates a container from JSON text whose top level is an object.
    pub fn from_json(text: &str) -> Result<Self, CollectionError> {
        parse_mapping(text).map(Self::from)
    }

    /// Returns a copy of the value at `path`, or `None` if any segment is missing.
    ///
    /// The empty path addresses nothing; use [`PathMap::all`] for the whole tree.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<Value> {
        self.lookup(path).cloned()
    }

    /// Returns a copy of the value at `path`, or `default` if any segment is missing.
    pub fn get_or(&self, path: impl AsRef<Path>, default: impl Into<Value>) -> Value {
        self.get(path).unwrap_or_else(|| default.into())
    }

    /// Returns a copy of the entire tree.
    pub fn all(&self) -> Mapping {
        self.root.clone()
    }

    /// Borrows the value at `path` without copying it.
    pub fn lookup(&self, path: impl AsRef<Path>) -> Option<&Value> {
        self.root.get_path(path)
    }

    /// Borrows the whole tree without copying it.
    pub fn as_mapping(&self) -> &Mapping {
        &self.root
    }

    /// Returns a live alias to the value at `path`.
    ///
    /// Returns `None` if any segment is missing. There is no default: a
    /// missing location has no storage to alias.
    pub fn get_ref(&mut self, path: impl AsRef<Path>) -> Option<&mut Value> {
        self.root.get_path_mut(path)
    }

    /// Returns a live alias to the whole tree.
    pub fn root_ref(&mut self) -> &mut Mapping {
        &mut self.root
    }

    /// Writes `value` at `path`, creating missing intermediate mappings.
    ///
    /// Returns `false` without changing anything when the path is empty,
    /// when an intermediate segment holds a scalar, or when the terminal is
    /// occupied and `overwrite` is `false`.
    pub fn set(&mut self, path: impl AsRef<Path>, value: impl Into<Value>, overwrite: bool) -> bool {
        self.try_set(path, value, overwrite).is_ok()
    }

    /// Writes `value` at `path` with Result error handling.
    ///
    /// Returns the replaced value when `overwrite` displaced one.
    pub fn try_set(
        &mut self,
        path: impl AsRef<Path>,
        value: impl Into<Value>,
        overwrite: bool,
    ) -> Result<Option<Value>, CollectionError> {
        let path = path.as_ref();
        self.root
            .insert_path(path, value, overwrite)
            .inspect_err(|err| tracing::debug!(path = %path, error = %err, "Set refused"))
    }

    /// Removes the value at `path` from its immediate parent.
    ///
    /// Returns `false` without changing anything if any segment is missing.
    pub fn unset_item(&mut self, path: impl AsRef<Path>) -> bool {
        self.try_unset(path).is_ok()
    }

    /// Removes the value at `path`, returning it.
    pub fn try_unset(&mut self, path: impl AsRef<Path>) -> Result<Value, CollectionError> {
        let path = path.as_ref();
        self.root
            .remove_path(path)
            .inspect_err(|err| tracing::trace!(path = %path, error = %err, "Unset missed"))
    }

    /// Returns true if every segment of `path` resolves.
    ///
    /// A key holding `null` is present.
    pub fn has(&self, path: impl AsRef<Path>) -> bool {
        self.root.contains_path(path)
    }

    /// Returns the number of top-level keys.
    pub fn count(&self) -> usize {
        self.root.len()
    }

    /// Returns true if there are no top-level keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Removes everything.
    pub fn clear(&mut self) -> &mut Self {
        self.root.clear();
        self
    }

    /// Shallow merge: every top-level key of `other` replaces the same key here.
    ///
    /// Replaced subtrees are discarded whole, not combined. Keys only present
    /// here are untouched; keys only present in `other` are appended.
    ///
    /// ```
    /// # use pathmap::collection::{Mapping, PathMap, Value};
    /// let mut a = PathMap::from(Mapping::new().with("c", Mapping::new().with("ca", "4").with("cb", "5")));
    /// let b = PathMap::from(Mapping::new().with("c", Mapping::new().with("ca", "not 4")));
    ///
    /// a.fast_merge(&b);
    /// assert_eq!(a.get("c/ca"), Some(Value::from("not 4")));
    /// assert!(!a.has("c/cb"));
    /// ```
    pub fn fast_merge(&mut self, other: &PathMap) -> &mut Self {
        self.merge_mapping(other.root.clone());
        self
    }

    fn merge_mapping(&mut self, other: Mapping) {
        tracing::trace!(incoming = other.len(), existing = self.count(), "Fast merge");
        self.root.extend(other);
    }

    /// Creates an independent container seeded with a copy of the subtree at `path`.
    ///
    /// A missing path or a scalar at `path` yields an empty container, since
    /// the root of a `PathMap` is always a mapping.
    pub fn split(&self, path: impl AsRef<Path>) -> PathMap {
        match self.lookup(path) {
            Some(Value::Map(map)) => PathMap::from(map.clone()),
            _ => PathMap::new(),
        }
    }

    /// Encodes the whole tree as JSON text.
    ///
    /// Keys appear in insertion order, so the output is deterministic.
    pub fn to_json_string(&self) -> String {
        serde_json::Value::from(&self.root).to_string()
    }

    /// Loads JSON text, replacing the tree (`overwrite`) or fast-merging into it.
    ///
    /// Returns `false` and leaves the container unchanged if the text is not
    /// a JSON object.
    pub fn load_from_json(&mut self, text: &str, overwrite: bool) -> bool {
        self.try_load_from_json(text, overwrite).is_ok()
    }

    /// Loads JSON text with Result error handling.
    pub fn try_load_from_json(&mut self, text: &str, overwrite: bool) -> Result<(), CollectionError> {
        let parsed = parse_mapping(text)?;
        if overwrite {
            self.root = parsed;
        } else {
            self.merge_mapping(parsed);
        }
        Ok(())
    }

    /// Replaces every top-level value with `transform(value)`.
    ///
    /// Keys and nested levels are not visited separately.
    pub fn map<F>(&mut self, mut transform: F)
    where
        F: FnMut(Value) -> Value,
    {
        for value in self.root.values_mut() {
            *value = transform(std::mem::take(value));
        }
    }

    /// Gets a value by path with type conversion using TryFrom
    ///
    /// Returns `None` if the path is missing or the conversion fails.
    ///
    /// ```
    /// # use pathmap::collection::PathMap;
    /// let mut map = PathMap::new();
    /// map.set("three/C-three/int", 10, false);
    ///
    /// assert_eq!(map.get_as::<i64>("three/C-three/int"), Some(10));
    /// assert_eq!(map.get_as::<bool>("three/C-three/int"), None);
    /// ```
    pub fn get_as<'a, T>(&'a self, path: impl AsRef<Path>) -> Option<T>
    where
        T: TryFrom<&'a Value, Error = CollectionError>,
    {
        T::try_from(self.lookup(path)?).ok()
    }

    /// Deserializes the value at `path` into any `Deserialize` type.
    pub fn get_json<T>(&self, path: impl AsRef<Path>) -> crate::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let path = path.as_ref();
        let value = self
            .lookup(path)
            .ok_or_else(|| CollectionError::PathNotFound {
                path: path.as_str().to_string(),
            })?;
        Ok(serde_json::from_value(serde_json::Value::from(value))?)
    }

    /// Serializes `value` and writes the result at `path` like [`PathMap::try_set`].
    pub fn set_json<T>(
        &mut self,
        path: impl AsRef<Path>,
        value: &T,
        overwrite: bool,
    ) -> crate::Result<Option<Value>>
    where
        T: Serialize + ?Sized,
    {
        let value = Value::from(serde_json::to_value(value)?);
        Ok(self.try_set(path, value, overwrite)?)
    }

    /// Returns an iterator over the top-level entries
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.root.iter()
    }

    /// Returns an iterator over the top-level keys
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.root.keys()
    }
}

#[cfg(feature = "fs")]
impl PathMap {
    /// Creates a container from a JSON file.
    pub fn from_json_file(file: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let text = std::fs::read_to_string(file)?;
        Ok(Self::from_json(&text)?)
    }

    /// Loads a JSON file, replacing or fast-merging like [`PathMap::load_from_json`].
    ///
    /// Returns `false` if the file cannot be read or does not hold a JSON object.
    pub fn load_from_json_file(&mut self, file: impl AsRef<std::path::Path>, overwrite: bool) -> bool {
        self.try_load_from_json_file(file, overwrite).is_ok()
    }

    /// Loads a JSON file with Result error handling.
    pub fn try_load_from_json_file(
        &mut self,
        file: impl AsRef<std::path::Path>,
        overwrite: bool,
    ) -> crate::Result<()> {
        let file = file.as_ref();
        let text = std::fs::read_to_string(file).inspect_err(|err| {
            tracing::debug!(file = %file.display(), error = %err, "Failed to read JSON file");
        })?;
        self.try_load_from_json(&text, overwrite)?;
        Ok(())
    }
}

/// Decodes JSON text into a mapping, rejecting non-object top levels.
fn parse_mapping(text: &str) -> Result<Mapping, CollectionError> {
    let json: serde_json::Value = serde_json::from_str(text).map_err(|err| {
        tracing::debug!(error = %err, "Rejected malformed JSON");
        CollectionError::ParseFailed {
            reason: err.to_string(),
        }
    })?;

    match json {
        serde_json::Value::Object(object) => Ok(Mapping::from(object)),
        other => {
            let actual = json_type_name(&other);
            tracing::debug!(actual, "Rejected non-object JSON document");
            Err(CollectionError::NotAnObject {
                actual: actual.to_string(),
            })
        }
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl From<Mapping> for PathMap {
    fn from(root: Mapping) -> Self {
        Self { root }
    }
}

impl From<PathMap> for Mapping {
    fn from(map: PathMap) -> Self {
        map.root
    }
}

impl fmt::Display for PathMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json_string())
    }
}
