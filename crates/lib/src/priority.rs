//! Priority-ordered key/value map.
//!
//! [`PriorityMap`] associates each key with a value and an integer priority,
//! and always enumerates entries in ascending priority order. The order is
//! rebuilt synchronously inside every mutating call, so no caller can observe
//! a stale order.
//!
//! Rebuilding is a full stable sort, O(n log n) per mutation. That is fine for
//! the small registries this type is meant for (hooks, handlers, menu
//! entries); it is the known ceiling for large key counts.

use indexmap::IndexMap;

/// A stored value together with its priority.
#[derive(Debug, Clone, PartialEq)]
struct PriorityEntry<V> {
    priority: i64,
    value: V,
}

/// A flat map whose keys are ordered by ascending priority.
///
/// Entries with equal priority keep the order in which their keys were first
/// inserted. Re-setting an existing key changes its value and priority but
/// not its insertion position.
///
/// # Examples
///
/// ```
/// use pathmap::PriorityMap;
///
/// let mut hooks = PriorityMap::new();
/// hooks.set("a", 10, "test1");
/// hooks.set("b", 20, "test2");
/// hooks.set("c", 5, "test3");
///
/// assert_eq!(hooks.keys(), ["c", "a", "b"]);
/// assert_eq!(hooks.values(), vec![&"test3", &"test1", &"test2"]);
/// ```
#[derive(Debug, Clone)]
pub struct PriorityMap<V> {
    elements: IndexMap<String, PriorityEntry<V>>,
    sorted_keys: Vec<String>,
}

impl<V> PriorityMap<V> {
    /// Creates a new empty map
    pub fn new() -> Self {
        Self {
            elements: IndexMap::new(),
            sorted_keys: Vec::new(),
        }
    }

    /// Inserts or replaces `key`, returning the previous value if present.
    pub fn set(&mut self, key: impl Into<String>, priority: i64, value: V) -> Option<V> {
        let old = self
            .elements
            .insert(key.into(), PriorityEntry { priority, value })
            .map(|entry| entry.value);
        self.rebuild_sorted_keys();
        old
    }

    /// Gets the value stored under `key`
    pub fn get(&self, key: &str) -> Option<&V> {
        self.elements.get(key).map(|entry| &entry.value)
    }

    /// Gets the value stored under `key`, or `default` if it is absent
    pub fn get_or<'a>(&'a self, key: &str, default: &'a V) -> &'a V {
        self.get(key).unwrap_or(default)
    }

    /// Gets the priority of `key`
    pub fn priority(&self, key: &str) -> Option<i64> {
        self.elements.get(key).map(|entry| entry.priority)
    }

    /// Returns true if `key` is present
    pub fn has(&self, key: &str) -> bool {
        self.elements.contains_key(key)
    }

    /// Removes `key`, returning its value if it was present.
    pub fn unset(&mut self, key: &str) -> Option<V> {
        let removed = self.elements.shift_remove(key).map(|entry| entry.value);
        if removed.is_some() {
            self.rebuild_sorted_keys();
        }
        removed
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.sorted_keys.clear();
    }

    /// Returns the number of entries
    pub fn count(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if there are no entries
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the keys in priority order.
    pub fn keys(&self) -> &[String] {
        &self.sorted_keys
    }

    /// Returns the values in priority order.
    pub fn values(&self) -> Vec<&V> {
        self.iter().map(|(_, value)| value).collect()
    }

    /// Returns an iterator over `(key, value)` pairs in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.sorted_keys.iter().filter_map(|key| {
            self.elements
                .get(key)
                .map(|entry| (key.as_str(), &entry.value))
        })
    }

    /// Replaces every value with `transform(&value)`, visiting in priority order.
    ///
    /// Keys and priorities are unchanged, so the order stays valid.
    pub fn map<F>(&mut self, mut transform: F)
    where
        F: FnMut(&V) -> V,
    {
        for key in &self.sorted_keys {
            if let Some(entry) = self.elements.get_mut(key) {
                entry.value = transform(&entry.value);
            }
        }
    }

    /// Calls `visitor` once per entry in priority order.
    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(&str, &V),
    {
        for (key, value) in self.iter() {
            visitor(key, value);
        }
    }

    /// Calls `visitor` once per entry in priority order, passing `args` along.
    pub fn for_each_with_args<A, F>(&self, mut visitor: F, args: &A)
    where
        A: ?Sized,
        F: FnMut(&str, &V, &A),
    {
        for (key, value) in self.iter() {
            visitor(key, value, args);
        }
    }

    fn rebuild_sorted_keys(&mut self) {
        let mut order: Vec<(i64, &String)> = self
            .elements
            .iter()
            .map(|(key, entry)| (entry.priority, key))
            .collect();
        // Stable: equal priorities stay in insertion order
        order.sort_by_key(|(priority, _)| *priority);

        self.sorted_keys = order.into_iter().map(|(_, key)| key.clone()).collect();
        tracing::trace!(count = self.sorted_keys.len(), "Rebuilt priority order");
    }
}

impl<V> Default for PriorityMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, i64, V)> for PriorityMap<V> {
    fn from_iter<T: IntoIterator<Item = (K, i64, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.elements.extend(
            iter.into_iter()
                .map(|(key, priority, value)| (key.into(), PriorityEntry { priority, value })),
        );
        map.rebuild_sorted_keys();
        map
    }
}
