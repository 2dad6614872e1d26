//! Path types for addressing nodes in a [`Hierarchy`](super::Hierarchy).
//!
//! A path is a non-empty, dot-delimited sequence of component names, resolved
//! left to right from the hierarchy root. The [`Path`]/[`PathBuf`] pair follows
//! the same borrowed/owned pattern as `std::path::Path`/`PathBuf`.
//!
//! Unlike free-form keys inside a payload, paths are validated when they are
//! constructed: the empty string and empty components (from a leading,
//! trailing, or doubled delimiter) are rejected with a [`PathError`].
//!
//! # Usage
//!
//! ```rust
//! use adh::hierarchy::{Path, PathBuf};
//! use std::str::FromStr;
//!
//! let path = PathBuf::from_str("wing.spar.material")?;
//! assert_eq!(path.depth(), 3);
//! assert_eq!(path.last(), "material");
//!
//! // Borrowed paths validate without allocating
//! let borrowed = Path::new("wing.spar")?;
//! assert!(path.starts_with(borrowed));
//!
//! assert!(Path::new("wing..spar").is_err());
//! # Ok::<(), adh::hierarchy::PathError>(())
//! ```

use std::{borrow::Borrow, fmt, ops::Deref, str::FromStr};

use thiserror::Error;

use crate::constants::DELIMITER;

/// Error type for path validation failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The path string was empty.
    #[error("Path cannot be empty")]
    Empty,

    /// A leading, trailing, or doubled delimiter produced an empty component.
    #[error("Path '{path}' has an empty component at position {position}")]
    EmptyComponent { path: String, position: usize },

    /// A standalone component failed validation.
    #[error("Invalid component '{component}': {reason}")]
    InvalidComponent { component: String, reason: String },
}

impl PathError {
    /// Returns the offending path or component text.
    pub fn input(&self) -> &str {
        match self {
            PathError::Empty => "",
            PathError::EmptyComponent { path, .. } => path,
            PathError::InvalidComponent { component, .. } => component,
        }
    }
}

impl From<PathError> for crate::Error {
    fn from(err: PathError) -> Self {
        crate::Error::Hierarchy(super::HierarchyError::InvalidPath(err))
    }
}

/// Checks that `input` is a well-formed path.
///
/// ```rust
/// # use adh::hierarchy::path::validate_path;
/// assert!(validate_path("wing").is_ok());
/// assert!(validate_path("wing.spar").is_ok());
/// assert!(validate_path("").is_err());
/// assert!(validate_path(".wing").is_err());
/// assert!(validate_path("wing.").is_err());
/// assert!(validate_path("wing..spar").is_err());
/// ```
pub fn validate_path(input: &str) -> Result<(), PathError> {
    if input.is_empty() {
        return Err(PathError::Empty);
    }

    match input.split(DELIMITER).position(str::is_empty) {
        Some(position) => Err(PathError::EmptyComponent {
            path: input.to_string(),
            position,
        }),
        None => Ok(()),
    }
}

/// A single validated path component.
///
/// Components are non-empty and never contain the delimiter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Component {
    inner: String,
}

impl Component {
    /// Creates a new component from a string.
    ///
    /// # Errors
    /// Returns an error if the component is empty or contains a dot.
    pub fn new(s: impl Into<String>) -> Result<Self, PathError> {
        let s = s.into();

        if s.is_empty() {
            return Err(PathError::InvalidComponent {
                component: s,
                reason: "components cannot be empty".to_string(),
            });
        }

        if s.contains(DELIMITER) {
            return Err(PathError::InvalidComponent {
                component: s,
                reason: "components cannot contain dots".to_string(),
            });
        }

        Ok(Component { inner: s })
    }

    /// Returns the component as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for Component {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl FromStr for Component {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Component::new(s)
    }
}

impl TryFrom<&str> for Component {
    type Error = PathError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Component::new(s)
    }
}

/// A borrowed, validated path.
///
/// This type is unsized and must always be used behind a reference. Every
/// `&Path` is non-empty and free of empty components.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Path {
    inner: str,
}

/// An owned, validated path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PathBuf {
    inner: String,
}

impl Path {
    /// Validates `s` and borrows it as a `Path`.
    pub fn new(s: &str) -> Result<&Path, PathError> {
        validate_path(s)?;
        // SAFETY: validated above
        Ok(unsafe { Path::from_str_unchecked(s) })
    }

    /// Creates a Path from a string without validation.
    ///
    /// # Safety
    /// The caller must ensure the string is non-empty and contains no empty
    /// components. `Path` has the same layout as `str`.
    pub(crate) unsafe fn from_str_unchecked(s: &str) -> &Path {
        unsafe { &*(s as *const str as *const Path) }
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns an iterator over the path components.
    pub fn components(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.inner.split(DELIMITER)
    }

    /// Returns the number of components (always at least one).
    pub fn depth(&self) -> usize {
        self.inner.matches(DELIMITER).count() + 1
    }

    /// Returns the final component.
    pub fn last(&self) -> &str {
        self.split_last().1
    }

    /// Returns the parent path, or `None` for a direct child of the root.
    pub fn parent(&self) -> Option<&Path> {
        self.split_last().0
    }

    /// Splits the path into its parent (if any) and final component.
    pub fn split_last(&self) -> (Option<&Path>, &str) {
        match self.inner.rfind(DELIMITER) {
            // SAFETY: a prefix of a valid path ending before a delimiter is valid
            Some(idx) => (
                Some(unsafe { Path::from_str_unchecked(&self.inner[..idx]) }),
                &self.inner[idx + 1..],
            ),
            None => (None, &self.inner),
        }
    }

    /// Returns the path made of the first `count` components.
    ///
    /// `count` is clamped to `1..=depth()`.
    pub fn prefix(&self, count: usize) -> &Path {
        let count = count.max(1);
        let end = self
            .inner
            .match_indices(DELIMITER)
            .nth(count - 1)
            .map_or(self.inner.len(), |(idx, _)| idx);
        // SAFETY: a prefix ending before a delimiter is valid
        unsafe { Path::from_str_unchecked(&self.inner[..end]) }
    }

    /// Returns true if `base` is this path or one of its ancestors.
    ///
    /// Comparison is component-wise, so `wing.spar` does not start with `wing.sp`.
    pub fn starts_with(&self, base: &Path) -> bool {
        let mut ours = self.components();
        base.components().all(|component| ours.next() == Some(component))
    }

    /// Appends a validated component, producing a new owned path.
    pub fn join(&self, component: &Component) -> PathBuf {
        self.to_path_buf().push_component(component.clone())
    }

    /// Converts this `Path` to an owned `PathBuf`.
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf {
            inner: self.inner.to_string(),
        }
    }
}

impl PathBuf {
    /// Parses and validates a path string.
    pub fn parse(s: impl Into<String>) -> Result<Self, PathError> {
        let inner = s.into();
        validate_path(&inner)?;
        Ok(Self { inner })
    }

    /// Creates a path from a single component.
    pub fn from_component(component: Component) -> Self {
        Self {
            inner: component.inner,
        }
    }

    /// Adds a validated component to the end of this path.
    pub fn push_component(mut self, component: Component) -> Self {
        self.inner.push(DELIMITER);
        self.inner.push_str(&component.inner);
        self
    }

    /// Appends another path to the end of this one.
    pub fn append(mut self, other: impl AsRef<Path>) -> Self {
        self.inner.push(DELIMITER);
        self.inner.push_str(other.as_ref().as_str());
        self
    }

    /// Consumes the path, returning the underlying string.
    pub fn into_string(self) -> String {
        self.inner
    }
}

impl Deref for PathBuf {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        // SAFETY: PathBuf is only constructed from validated strings
        unsafe { Path::from_str_unchecked(&self.inner) }
    }
}

impl AsRef<Path> for PathBuf {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
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
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PathBuf {
    type Error = PathError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for PathBuf {
    type Error = PathError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<PathBuf> for String {
    fn from(path: PathBuf) -> Self {
        path.inner
    }
}

impl From<&Path> for PathBuf {
    fn from(path: &Path) -> Self {
        path.to_path_buf()
    }
}

impl PartialEq<str> for Path {
    fn eq(&self, other: &str) -> bool {
        &self.inner == other
    }
}

impl PartialEq<&str> for Path {
    fn eq(&self, other: &&str) -> bool {
        &self.inner == *other
    }
}

impl PartialEq<&str> for PathBuf {
    fn eq(&self, other: &&str) -> bool {
        self.inner == *other
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.inner)
    }
}

impl fmt::Display for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

/// A builder for constructing paths one component at a time.
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    inner: String,
}

impl PathBuilder {
    /// Creates a new empty path builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a component to the path.
    pub fn component(self, component: impl Into<String>) -> Result<Self, PathError> {
        Ok(self.push_component(Component::new(component)?))
    }

    /// Adds a validated component to the path.
    pub fn push_component(mut self, component: Component) -> Self {
        if !self.inner.is_empty() {
            self.inner.push(DELIMITER);
        }
        self.inner.push_str(&component.inner);
        self
    }

    /// Builds the final `PathBuf`, failing if no component was added.
    pub fn build(self) -> Result<PathBuf, PathError> {
        if self.inner.is_empty() {
            return Err(PathError::Empty);
        }
        Ok(PathBuf { inner: self.inner })
    }
}

/// Constructs a [`PathBuf`] from individual components.
///
/// Each argument must be a single component; the result is a
/// `Result<PathBuf, PathError>` so invalid components surface as errors.
///
/// ```rust
/// # use adh::path;
/// let spar = "spar";
/// let path = path!("wing", spar, "material")?;
/// assert_eq!(path.as_str(), "wing.spar.material");
///
/// assert!(path!("wing", "").is_err());
/// # Ok::<(), adh::hierarchy::PathError>(())
/// ```
#[macro_export]
macro_rules! path {
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        $crate::hierarchy::path::PathBuilder::new()
            .component($first)
            $(.and_then(|builder| builder.component($rest)))*
            .and_then($crate::hierarchy::path::PathBuilder::build)
    }};
}
