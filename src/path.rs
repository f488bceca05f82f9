//! Issue path representation for locating problems in nested input.
//!
//! This module provides [`PropertyKey`], [`PathSegment`] and [`IssuePath`] for
//! describing where in the validated input an issue applies, plus the two
//! path utilities every aggregation helper builds on: [`resolve_key`] and
//! [`dot_path`].

use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::Issue;

static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(0);

/// An opaque, process-unique property key.
///
/// Two symbols are equal only if one is a clone of the other, regardless of
/// their descriptions. Symbols can never be rendered as a dot path.
#[derive(Debug, Clone)]
pub struct Symbol {
    id: u64,
    description: Option<Arc<str>>,
}

impl Symbol {
    /// Creates a new unique symbol with a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            description: Some(Arc::from(description.into())),
        }
    }

    /// Creates a new unique symbol without a description.
    pub fn anonymous() -> Self {
        Self {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            description: None,
        }
    }

    /// Returns the description given at creation, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description.as_deref().unwrap_or(""))
    }
}

/// A bare property key: a field name, an index, or a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    /// A field/property name (e.g., `user`, `email`)
    Field(String),
    /// A positional index (e.g., `0`, `42`)
    Index(usize),
    /// A non-renderable symbolic key
    Symbol(Symbol),
}

impl PropertyKey {
    /// Returns true if the key can appear in a dot path.
    pub fn is_renderable(&self) -> bool {
        !matches!(self, PropertyKey::Symbol(_))
    }
}

impl Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::Field(name) => write!(f, "{}", name),
            PropertyKey::Index(idx) => write!(f, "{}", idx),
            PropertyKey::Symbol(symbol) => write!(f, "{}", symbol),
        }
    }
}

impl From<&str> for PropertyKey {
    fn from(name: &str) -> Self {
        PropertyKey::Field(name.to_string())
    }
}

impl From<String> for PropertyKey {
    fn from(name: String) -> Self {
        PropertyKey::Field(name)
    }
}

impl From<usize> for PropertyKey {
    fn from(idx: usize) -> Self {
        PropertyKey::Index(idx)
    }
}

impl From<Symbol> for PropertyKey {
    fn from(symbol: Symbol) -> Self {
        PropertyKey::Symbol(symbol)
    }
}

/// One step of an issue path.
///
/// Validators may report either a bare key or a wrapped `{ key }` segment.
/// Both forms are equivalent: equality and hashing only look at the resolved key.
#[derive(Debug, Clone)]
pub enum PathSegment {
    /// A bare property key.
    Key(PropertyKey),
    /// A segment object carrying its key.
    Wrapped {
        /// The key this segment addresses.
        key: PropertyKey,
    },
}

impl PathSegment {
    /// Creates a bare field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Key(PropertyKey::Field(name.into()))
    }

    /// Creates a bare index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Key(PropertyKey::Index(idx))
    }

    /// Creates a bare symbol segment.
    pub fn symbol(symbol: Symbol) -> Self {
        PathSegment::Key(PropertyKey::Symbol(symbol))
    }

    /// Creates a wrapped segment around any key.
    pub fn wrapped(key: impl Into<PropertyKey>) -> Self {
        PathSegment::Wrapped { key: key.into() }
    }

    /// Returns the key this segment addresses.
    pub fn key(&self) -> &PropertyKey {
        match self {
            PathSegment::Key(key) => key,
            PathSegment::Wrapped { key } => key,
        }
    }
}

impl PartialEq for PathSegment {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for PathSegment {}

impl Hash for PathSegment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl From<PropertyKey> for PathSegment {
    fn from(key: PropertyKey) -> Self {
        PathSegment::Key(key)
    }
}

impl From<&str> for PathSegment {
    fn from(name: &str) -> Self {
        PathSegment::field(name)
    }
}

impl From<String> for PathSegment {
    fn from(name: String) -> Self {
        PathSegment::field(name)
    }
}

impl From<usize> for PathSegment {
    fn from(idx: usize) -> Self {
        PathSegment::index(idx)
    }
}

impl From<Symbol> for PathSegment {
    fn from(symbol: Symbol) -> Self {
        PathSegment::symbol(symbol)
    }
}

/// Resolves a path segment to its bare property key.
///
/// Resolution is idempotent: a bare key resolves to itself.
pub fn resolve_key(segment: &PathSegment) -> &PropertyKey {
    segment.key()
}

/// The location of an issue within the validated input.
///
/// An empty path means the issue applies to the whole input.
///
/// # Example
///
/// ```rust
/// use standard_schema::IssuePath;
///
/// let path = IssuePath::root()
///     .push_field("users")
///     .push_index(0)
///     .push_field("email");
///
/// assert_eq!(path.dot_path().as_deref(), Some("users.0.email"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct IssuePath {
    segments: Vec<PathSegment>,
}

impl IssuePath {
    /// Creates an empty path addressing the whole input.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path from existing segments.
    pub fn from_segments(segments: impl IntoIterator<Item = PathSegment>) -> Self {
        Self {
            segments: segments.into_iter().collect(),
        }
    }

    /// Returns a new path with a field segment appended.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        self.push_segment(PathSegment::field(name))
    }

    /// Returns a new path with an index segment appended.
    pub fn push_index(&self, idx: usize) -> Self {
        self.push_segment(PathSegment::index(idx))
    }

    /// Returns a new path with a symbol segment appended.
    pub fn push_symbol(&self, symbol: Symbol) -> Self {
        self.push_segment(PathSegment::symbol(symbol))
    }

    /// Returns a new path with the given segment appended.
    ///
    /// This method does not modify the original path; it returns a new one.
    pub fn push_segment(&self, segment: PathSegment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    /// Inserts a segment at the front of this path.
    pub fn prepend(&mut self, segment: PathSegment) {
        self.segments.insert(0, segment);
    }

    /// Returns true if this path addresses the whole input.
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

    /// Returns the first segment, or None for the root path.
    pub fn first(&self) -> Option<&PathSegment> {
        self.segments.first()
    }

    /// Returns the last segment, or None for the root path.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    /// Renders the path as dot-separated keys.
    ///
    /// Returns `None` for an empty path or when any key is a symbol. A partial
    /// rendering is never produced.
    pub fn dot_path(&self) -> Option<String> {
        if self.segments.is_empty() {
            return None;
        }

        let mut rendered = String::new();
        for segment in &self.segments {
            let key = resolve_key(segment);
            if !key.is_renderable() {
                return None;
            }
            if !rendered.is_empty() {
                rendered.push('.');
            }
            rendered.push_str(&key.to_string());
        }
        Some(rendered)
    }
}

impl Display for IssuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", segment.key())?;
        }
        Ok(())
    }
}

impl FromIterator<PathSegment> for IssuePath {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self::from_segments(iter)
    }
}

/// Returns the dot path of an issue, if its path can be rendered.
pub fn dot_path(issue: &Issue) -> Option<String> {
    issue.path.dot_path()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path_is_empty() {
        let path = IssuePath::root();
        assert!(path.is_root());
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
        assert_eq!(path.dot_path(), None);
    }

    #[test]
    fn test_resolve_bare_and_wrapped() {
        let bare = PathSegment::field("name");
        let wrapped = PathSegment::wrapped("name");

        assert_eq!(resolve_key(&bare), &PropertyKey::Field("name".to_string()));
        assert_eq!(resolve_key(&wrapped), resolve_key(&bare));
        assert_eq!(bare, wrapped);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let segment = PathSegment::wrapped(3usize);
        let once = resolve_key(&segment).clone();
        let twice = resolve_key(&PathSegment::Key(once.clone())).clone();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_nested_dot_path() {
        let path = IssuePath::root()
            .push_field("nested")
            .push_index(0)
            .push_field("dot")
            .push_index(0)
            .push_field("path");
        assert_eq!(path.dot_path().as_deref(), Some("nested.0.dot.0.path"));
    }

    #[test]
    fn test_symbol_blocks_dot_path() {
        let path = IssuePath::root()
            .push_field("foo")
            .push_symbol(Symbol::new("bar"))
            .push_field("baz");
        assert_eq!(path.dot_path(), None);
    }

    #[test]
    fn test_symbols_are_unique() {
        let a = Symbol::new("same");
        let b = Symbol::new("same");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        assert_eq!(a.to_string(), "Symbol(same)");
        assert_eq!(Symbol::anonymous().description(), None);
    }

    #[test]
    fn test_prepend() {
        let mut path = IssuePath::root().push_field("inner");
        path.prepend(PathSegment::index(2));
        assert_eq!(path.dot_path().as_deref(), Some("2.inner"));
        assert_eq!(path.first(), Some(&PathSegment::index(2)));
    }

    #[test]
    fn test_path_immutability() {
        let base = IssuePath::root().push_field("users");
        let path_a = base.push_index(0);
        let path_b = base.push_index(1);

        assert_eq!(base.to_string(), "users");
        assert_eq!(path_a.to_string(), "users.0");
        assert_eq!(path_b.to_string(), "users.1");
    }

    #[test]
    fn test_last_segment() {
        let path = IssuePath::root().push_field("users").push_index(0);
        assert_eq!(path.last(), Some(&PathSegment::Key(PropertyKey::Index(0))));
        assert_eq!(IssuePath::root().last(), None);
    }
}
