//! Validation issue types.
//!
//! This module provides [`Issue`] for a single reported problem and [`Issues`]
//! for the non-empty collection carried by a failed validation.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::path::{IssuePath, PathSegment};
use crate::report::summarize;

/// A single validation problem reported by a schema.
///
/// An issue with an empty path applies to the whole input; otherwise the
/// path locates the offending value.
///
/// # Example
///
/// ```rust
/// use standard_schema::{Issue, IssuePath};
///
/// let issue = Issue::new("Expected string, got number")
///     .with_path(IssuePath::root().push_field("name"));
///
/// assert_eq!(issue.path.dot_path().as_deref(), Some("name"));
/// assert!(!issue.is_form_level());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Human-readable description of the problem.
    pub message: String,
    /// Where the problem is located.
    pub path: IssuePath,
}

impl Issue {
    /// Creates a form-level issue with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: IssuePath::root(),
        }
    }

    /// Creates an issue located at the given path.
    pub fn at(path: IssuePath, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path,
        }
    }

    /// Sets the path and returns self for chaining.
    pub fn with_path(mut self, path: IssuePath) -> Self {
        self.path = path;
        self
    }

    /// Returns true if the issue applies to the whole input.
    pub fn is_form_level(&self) -> bool {
        self.path.is_empty()
    }

    /// Returns the dot path of this issue, if it can be rendered.
    pub fn dot_path(&self) -> Option<String> {
        self.path.dot_path()
    }
}

impl Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&summarize([self]))
    }
}

/// A non-empty, ordered collection of issues.
///
/// A failed validation always reports at least one issue, so `Issues` wraps a
/// `NonEmptyVec<Issue>`. Collections from independent validations combine
/// through `Semigroup`, preserving the order of both sides:
///
/// ```rust
/// use standard_schema::{Issue, Issues};
/// use stillwater::prelude::*;
///
/// let first = Issues::single(Issue::new("too short"));
/// let second = Issues::single(Issue::new("not a number"));
///
/// let combined = first.combine(second);
/// assert_eq!(combined.len(), 2);
/// assert_eq!(combined.first().message, "too short");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Issues(NonEmptyVec<Issue>);

impl Issues {
    /// Creates an `Issues` containing a single issue.
    pub fn single(issue: Issue) -> Self {
        Self(NonEmptyVec::singleton(issue))
    }

    /// Creates an `Issues` from a `NonEmptyVec` of issues.
    pub fn from_non_empty(issues: NonEmptyVec<Issue>) -> Self {
        Self(issues)
    }

    /// Creates an `Issues` from a vec, or `None` if the vec is empty.
    pub fn from_vec(issues: Vec<Issue>) -> Option<Self> {
        NonEmptyVec::from_vec(issues).map(Self)
    }

    /// Returns the number of issues in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the collection is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the contained issues.
    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.0.iter()
    }

    /// Returns the first issue in the collection.
    pub fn first(&self) -> &Issue {
        self.0.head()
    }

    /// Returns all issues located exactly at the given path.
    pub fn at_path(&self, path: &IssuePath) -> Vec<&Issue> {
        self.0.iter().filter(|issue| &issue.path == path).collect()
    }

    /// Returns the issues that apply to the whole input.
    pub fn form_level(&self) -> Vec<&Issue> {
        self.0.iter().filter(|issue| issue.is_form_level()).collect()
    }

    /// Prepends a segment to the path of every issue.
    ///
    /// The issues are owned by this collection, so their paths are rewritten in
    /// place without affecting any other collection.
    pub fn prefixed(self, segment: PathSegment) -> Self {
        let issues: Vec<Issue> = self
            .0
            .into_vec()
            .into_iter()
            .map(|mut issue| {
                issue.path.prepend(segment.clone());
                issue
            })
            .collect();
        // Mapping preserves length, so the vec is still non-empty.
        match NonEmptyVec::from_vec(issues) {
            Some(issues) => Self(issues),
            None => unreachable!("prefixing cannot empty a non-empty collection"),
        }
    }

    /// Converts this collection into a `Vec<Issue>`.
    pub fn into_vec(self) -> Vec<Issue> {
        self.0.into_vec()
    }

    /// Returns a reference to the underlying `NonEmptyVec`.
    pub fn as_non_empty_vec(&self) -> &NonEmptyVec<Issue> {
        &self.0
    }
}

impl Semigroup for Issues {
    fn combine(self, other: Self) -> Self {
        Issues(self.0.combine(other.0))
    }
}

impl Display for Issues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&summarize(self))
    }
}

impl IntoIterator for Issues {
    type Item = Issue;
    type IntoIter = std::vec::IntoIter<Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a Issues {
    type Item = &'a Issue;
    type IntoIter = Box<dyn Iterator<Item = &'a Issue> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.0.iter())
    }
}

impl From<Issue> for Issues {
    fn from(issue: Issue) -> Self {
        Issues::single(issue)
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Issues>();
    assert_sync::<Issues>();
};
