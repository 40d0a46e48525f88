//! Path types for slash-delimited access into nested mappings.
//!
//! A path such as `"three/C-three/int"` addresses one descent step per
//! component. The [`Path`]/[`PathBuf`] pair follows the same borrowed/owned
//! pattern as `std::path::Path`/`std::path::PathBuf`.
//!
//! Paths are taken literally. There is no trimming, no escaping and no
//! collapsing of repeated separators: `"a//b"` has the three components
//! `"a"`, `""` and `"b"`, and an empty component is an ordinary map key.
//! The only path that can never address anything is the empty string.
//!
//! # Usage
//!
//! ```rust
//! use pathmap::collection::{Path, PathBuf};
//!
//! let path = Path::new("three/A-one");
//! assert_eq!(path.components().collect::<Vec<_>>(), vec!["three", "A-one"]);
//!
//! let built = PathBuf::new().push("three").push("A-one");
//! assert_eq!(built.as_str(), "three/A-one");
//! ```

use std::{
    borrow::Borrow,
    convert::Infallible,
    fmt,
    hash::{Hash, Hasher},
    ops::Deref,
    str::FromStr,
};

/// Separator between path components.
pub const SEPARATOR: char = '/';

/// A borrowed path.
///
/// This type is unsized and always used behind a reference, like `str`.
/// Every string is a syntactically valid `Path`; only the empty path is
/// rejected by the operations that need at least one component.
#[derive(Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Path {
    inner: str,
}

/// An owned path that can be built incrementally.
///
/// A path with no components and a path whose only component is `""` share
/// the text `""`; `started` tells them apart while building, so that a
/// leading empty component is kept once more components follow.
#[derive(Debug, Clone, Default)]
pub struct PathBuf {
    inner: String,
    started: bool,
}

impl Path {
    /// Wraps a string slice as a `Path`.
    pub fn new(s: &str) -> &Path {
        // SAFETY: Path is a repr(transparent) wrapper around str
        unsafe { &*(s as *const str as *const Path) }
    }

    /// Returns an iterator over the components.
    ///
    /// The empty path yields nothing; every other path yields one item per
    /// separator plus one, empty components included.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        let skip = self.inner.is_empty();
        self.inner.split(SEPARATOR).filter(move |_| !skip)
    }

    /// Returns the number of components in the path.
    pub fn len(&self) -> usize {
        if self.inner.is_empty() {
            0
        } else {
            self.inner.matches(SEPARATOR).count() + 1
        }
    }

    /// Returns `true` for the empty path.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Converts this `Path` to an owned `PathBuf`.
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf::from(self.as_str())
    }
}

impl PathBuf {
    /// Creates a new empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a path fragment.
    ///
    /// The fragment is taken verbatim, so `push("a/b")` appends two
    /// components and `push("")` appends one empty component.
    ///
    /// ```rust
    /// # use pathmap::collection::PathBuf;
    /// let path = PathBuf::new().push("three").push("C-three/int");
    /// assert_eq!(path.len(), 3);
    ///
    /// let leading = PathBuf::new().push("").push("a");
    /// assert_eq!(leading.as_str(), "/a");
    /// ```
    pub fn push(mut self, fragment: impl AsRef<str>) -> Self {
        if self.started {
            self.inner.push(SEPARATOR);
        }
        self.inner.push_str(fragment.as_ref());
        self.started = true;
        self
    }

    /// Joins this path with another path.
    pub fn join(self, other: impl AsRef<Path>) -> Self {
        let other = other.as_ref();
        if other.is_empty() {
            return self;
        }
        self.push(other.as_str())
    }
}

impl Deref for PathBuf {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        Path::new(&self.inner)
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for PathBuf {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for str {
    fn as_ref(&self) -> &Path {
        Path::new(self)
    }
}

impl AsRef<Path> for String {
    fn as_ref(&self) -> &Path {
        Path::new(self)
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for PathBuf {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl Borrow<Path> for PathBuf {
    fn borrow(&self) -> &Path {
        self
    }
}

impl ToOwned for Path {
    type Owned = PathBuf;

    fn to_owned(&self) -> PathBuf {
        self.to_path_buf()
    }
}

impl FromStr for PathBuf {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Path::new(s).to_path_buf())
    }
}

impl From<&str> for PathBuf {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<String> for PathBuf {
    fn from(inner: String) -> Self {
        Self {
            started: !inner.is_empty(),
            inner,
        }
    }
}

impl PartialEq for PathBuf {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for PathBuf {}

// Must hash like the borrowed `Path`
impl Hash for PathBuf {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Path::hash(self, state);
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inner.is_empty() {
            write!(f, "(empty path)")
        } else {
            write!(f, "{}", &self.inner)
        }
    }
}

impl fmt::Display for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&**self, f)
    }
}

/// Constructs a path.
///
/// - `path!()` - empty `PathBuf`
/// - `path!("three/A-one")` - single literal, returns `&'static Path`
/// - `path!("three", key, "int")` - components joined with `/` into a `PathBuf`
///
/// ```rust
/// # use pathmap::path;
/// let key = "C-three";
/// let path = path!("three", key, "int");
/// assert_eq!(path.as_str(), "three/C-three/int");
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::collection::PathBuf::new()
    };

    ($single:literal) => {
        $crate::collection::Path::new($single)
    };

    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let path = $crate::collection::PathBuf::new().push($first.to_string());
        $(
            let path = path.push($rest.to_string());
        )*
        path
    }};
}
