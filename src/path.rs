//! Paths locating values in nested structures.
//!
//! This module provides [`ValuePath`] and [`PathSegment`] for describing
//! where inside a nested value a transformation failure occurred. Paths are
//! always relative to the top-level call: leaf transformers report errors at
//! the root, and container combinators re-root those errors by *prepending*
//! their own segment as the errors bubble outward.

use std::fmt::{self, Display};
use std::sync::OnceLock;

use regex::Regex;

/// A segment of a path into a nested value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// An object member access (e.g. `user`, `email`).
    Field(String),
    /// An array or tuple index access (e.g. `[0]`, `[42]`).
    Index(usize),
}

impl PathSegment {
    /// Creates a new field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

impl From<&str> for PathSegment {
    fn from(name: &str) -> Self {
        PathSegment::Field(name.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(name: String) -> Self {
        PathSegment::Field(name)
    }
}

impl From<usize> for PathSegment {
    fn from(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

/// A path to a value in a nested structure.
///
/// An empty path denotes the top-level value itself. Paths are immutable;
/// every operation returns a new path.
///
/// # Example
///
/// ```rust
/// use turnstile::ValuePath;
///
/// let path = ValuePath::root()
///     .push_field("users")
///     .push_index(0)
///     .push_field("email");
///
/// assert_eq!(path.to_string(), "users[0].email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ValuePath {
    segments: Vec<PathSegment>,
}

impl ValuePath {
    /// Creates an empty path representing the root value.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path with a field segment appended.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(name.into()));
        Self { segments }
    }

    /// Returns a new path with an index segment appended.
    pub fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Returns a new path with the segment placed in front of all existing
    /// segments.
    ///
    /// Containers use this to re-root a member's errors under the member's
    /// own key or index.
    ///
    /// ```rust
    /// use turnstile::ValuePath;
    ///
    /// let inner = ValuePath::root().push_field("email");
    /// assert_eq!(inner.prepend("user").to_string(), "user.email");
    /// ```
    pub fn prepend(&self, segment: impl Into<PathSegment>) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.push(segment.into());
        segments.extend(self.segments.iter().cloned());
        Self { segments }
    }

    /// Returns true if this is the root path (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }
}

/// Matches field names that can be rendered with dot notation.
fn is_identifier(name: &str) -> bool {
    static IDENTIFIER: OnceLock<Regex> = OnceLock::new();
    IDENTIFIER
        .get_or_init(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier pattern"))
        .is_match(name)
}

impl Display for ValuePath {
    /// Renders the path for diagnostics.
    ///
    /// The root path renders as `<root>`. Identifier-like fields use dot
    /// notation (the leading one bare); any other field is bracketed and
    /// JSON-escaped; indices are bracketed. Rendering is cosmetic only;
    /// comparisons should use path equality, never the rendered string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "<root>");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if is_identifier(name) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", name)?;
                }
                PathSegment::Field(name) => {
                    let quoted = serde_json::to_string(name).map_err(|_| fmt::Error)?;
                    write!(f, "[{}]", quoted)?;
                }
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}
