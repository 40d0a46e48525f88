//! One level of a nested collection.
//!
//! [`Mapping`] is an insertion-ordered, string-keyed map of [`Value`]s. It
//! owns the path-walking logic, so the same lookups work on the root of a
//! [`PathMap`](super::PathMap) and on any nested mapping reached through a
//! live alias.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{CollectionError, Path, Value};

/// An insertion-ordered map from string keys to [`Value`]s.
///
/// Keys keep the position of their first insertion; overwriting a key does
/// not move it, and removing a key preserves the order of the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mapping {
    entries: IndexMap<String, Value>,
}

impl Mapping {
    /// Creates a new empty mapping
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Returns the number of direct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Gets a direct child by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Gets a mutable reference to a direct child by key
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Inserts a direct child, returning the previous value if present
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Removes a direct child, keeping the order of the remaining keys
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Returns true if the direct key exists
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes every key
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut Value)> {
        self.entries.iter_mut()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Value> {
        self.entries.values_mut()
    }

    /// Builder method to insert a value and return self
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Gets a value by path.
    ///
    /// Returns `None` for the empty path, for a missing segment, or when an
    /// intermediate segment holds a scalar.
    ///
    /// ```
    /// # use pathmap::collection::{Mapping, Value};
    /// let map = Mapping::new().with("three", Mapping::new().with("A-one", "31"));
    /// assert_eq!(map.get_path("three/A-one"), Some(&Value::from("31")));
    /// assert!(map.get_path("three/Z").is_none());
    /// ```
    pub fn get_path(&self, path: impl AsRef<Path>) -> Option<&Value> {
        let mut components = path.as_ref().components();
        let mut current = self.entries.get(components.next()?)?;

        for segment in components {
            current = match current {
                Value::Map(map) => map.entries.get(segment)?,
                _ => return None,
            };
        }

        Some(current)
    }

    /// Gets a mutable reference to a value by path.
    ///
    /// Writes through the returned reference land directly in this mapping.
    pub fn get_path_mut(&mut self, path: impl AsRef<Path>) -> Option<&mut Value> {
        let mut components = path.as_ref().components();
        let mut current = self.entries.get_mut(components.next()?)?;

        for segment in components {
            current = match current {
                Value::Map(map) => map.entries.get_mut(segment)?,
                _ => return None,
            };
        }

        Some(current)
    }

    /// Returns true if every segment of the path resolves.
    ///
    /// A key holding `null` still counts as present.
    pub fn contains_path(&self, path: impl AsRef<Path>) -> bool {
        self.get_path(path).is_some()
    }

    /// Writes a value at a path, creating missing intermediate mappings.
    ///
    /// Returns the replaced value, if any. Nothing is created or changed when
    /// this returns an error: a scalar can only block the walk while every
    /// earlier segment already existed, and the terminal can only be occupied
    /// when the whole parent chain already existed.
    pub fn insert_path(
        &mut self,
        path: impl AsRef<Path>,
        value: impl Into<Value>,
        overwrite: bool,
    ) -> Result<Option<Value>, CollectionError> {
        let path = path.as_ref();
        let segments: Vec<&str> = path.components().collect();
        let Some((last, parents)) = segments.split_last() else {
            return Err(CollectionError::InvalidPath {
                reason: "empty path".to_string(),
            });
        };

        let mut current = self;
        for segment in parents {
            let entry = current
                .entries
                .entry((*segment).to_string())
                .or_insert_with(|| Value::Map(Mapping::new()));
            current = match entry {
                Value::Map(map) => map,
                other => {
                    return Err(CollectionError::NotAMapping {
                        path: path.as_str().to_string(),
                        segment: (*segment).to_string(),
                        actual: other.type_name().to_string(),
                    });
                }
            };
        }

        if let Some(slot) = current.entries.get_mut(*last) {
            if !overwrite {
                return Err(CollectionError::OverwriteRefused {
                    path: path.as_str().to_string(),
                });
            }
            return Ok(Some(std::mem::replace(slot, value.into())));
        }

        current.entries.insert((*last).to_string(), value.into());
        Ok(None)
    }

    /// Removes the value at a path from its immediate parent.
    pub fn remove_path(&mut self, path: impl AsRef<Path>) -> Result<Value, CollectionError> {
        let path = path.as_ref();
        let segments: Vec<&str> = path.components().collect();
        let Some((last, parents)) = segments.split_last() else {
            return Err(CollectionError::InvalidPath {
                reason: "empty path".to_string(),
            });
        };

        let not_found = || CollectionError::PathNotFound {
            path: path.as_str().to_string(),
        };

        let mut current = self;
        for segment in parents {
            current = match current.entries.get_mut(*segment) {
                Some(Value::Map(map)) => map,
                _ => return Err(not_found()),
            };
        }

        current.entries.shift_remove(*last).ok_or_else(not_found)
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", serde_json::Value::from(self))
    }
}

impl FromIterator<(String, Value)> for Mapping {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<(String, Value)> for Mapping {
    fn extend<T: IntoIterator<Item = (String, Value)>>(&mut self, iter: T) {
        self.entries.extend(iter);
    }
}

impl IntoIterator for Mapping {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for Mapping {
    fn from(object: serde_json::Map<String, serde_json::Value>) -> Self {
        object
            .into_iter()
            .map(|(key, value)| (key, Value::from(value)))
            .collect()
    }
}

impl From<&Mapping> for serde_json::Value {
    fn from(map: &Mapping) -> Self {
        serde_json::Value::Object(
            map.entries
                .iter()
                .map(|(key, value)| (key.clone(), serde_json::Value::from(value)))
                .collect(),
        )
    }
}
