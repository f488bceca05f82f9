//! One-level issue bucketing.

use indexmap::IndexMap;

use super::message_of;
use crate::error::Issue;
use crate::path::{resolve_key, PropertyKey};
use crate::schema::Standard;

/// Issues split into form-level issues and per-field buckets.
///
/// Buckets are keyed by the first key of each issue's path, so an issue at
/// `address.city` lands in the `address` bucket. Buckets appear in the order
/// their first issue was encountered.
#[derive(Debug, Clone, PartialEq)]
pub struct FlattenedIssues<M = String> {
    /// Issues with an empty path.
    pub form_issues: Vec<M>,
    /// Issues grouped by the first key of their path.
    pub field_issues: IndexMap<PropertyKey, Vec<M>>,
}

impl<M> FlattenedIssues<M> {
    /// Returns the issues bucketed under the given key, if any.
    pub fn field(&self, key: impl Into<PropertyKey>) -> Option<&[M]> {
        self.field_issues.get(&key.into()).map(Vec::as_slice)
    }

    /// Returns true if no issue was recorded.
    pub fn is_empty(&self) -> bool {
        self.form_issues.is_empty() && self.field_issues.is_empty()
    }
}

impl<M> Default for FlattenedIssues<M> {
    fn default() -> Self {
        Self {
            form_issues: Vec::new(),
            field_issues: IndexMap::new(),
        }
    }
}

/// Flattens issues, keeping each issue's message.
///
/// # Example
///
/// ```rust
/// use standard_schema::{flatten_issues, Issue, IssuePath};
///
/// let issues = vec![
///     Issue::new("Passwords do not match"),
///     Issue::at(IssuePath::root().push_field("email"), "Invalid email"),
///     Issue::at(IssuePath::root().push_field("email").push_index(0), "Too short"),
/// ];
///
/// let flattened = flatten_issues(&issues);
/// assert_eq!(flattened.form_issues, vec!["Passwords do not match"]);
/// assert_eq!(
///     flattened.field("email"),
///     Some(&["Invalid email".to_string(), "Too short".to_string()][..])
/// );
/// ```
pub fn flatten_issues<'a>(issues: impl IntoIterator<Item = &'a Issue>) -> FlattenedIssues {
    flatten_issues_with(issues, message_of)
}

/// Flattens issues, storing whatever `map_issue` returns for each one.
pub fn flatten_issues_with<'a, M, F>(
    issues: impl IntoIterator<Item = &'a Issue>,
    mut map_issue: F,
) -> FlattenedIssues<M>
where
    F: FnMut(&Issue) -> M,
{
    let mut flattened = FlattenedIssues::default();

    for issue in issues {
        match issue.path.first() {
            Some(segment) => flattened
                .field_issues
                .entry(resolve_key(segment).clone())
                .or_default()
                .push(map_issue(issue)),
            None => flattened.form_issues.push(map_issue(issue)),
        }
    }

    flattened
}

/// Flattens issues reported by `schema`.
///
/// The schema only ties the call to the schema the issues came from; it does
/// not affect the result.
pub fn flatten_issues_for<'a, S>(
    schema: &S,
    issues: impl IntoIterator<Item = &'a Issue>,
) -> FlattenedIssues
where
    S: Standard + ?Sized,
{
    flatten_issues_for_with(schema, issues, message_of)
}

/// Flattens issues reported by `schema` with a custom mapper.
pub fn flatten_issues_for_with<'a, S, M, F>(
    _schema: &S,
    issues: impl IntoIterator<Item = &'a Issue>,
    map_issue: F,
) -> FlattenedIssues<M>
where
    S: Standard + ?Sized,
    F: FnMut(&Issue) -> M,
{
    flatten_issues_with(issues, map_issue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{IssuePath, PathSegment};

    #[test]
    fn test_empty_input() {
        let flattened = flatten_issues(&Vec::<Issue>::new());
        assert!(flattened.is_empty());
        assert_eq!(flattened, FlattenedIssues::default());
    }

    #[test]
    fn test_wrapped_first_segment() {
        let issues = vec![Issue::at(
            IssuePath::from_segments([PathSegment::wrapped("name"), PathSegment::index(2)]),
            "bad",
        )];
        let flattened = flatten_issues(&issues);
        assert_eq!(flattened.field("name"), Some(&["bad".to_string()][..]));
    }

    #[test]
    fn test_bucket_order_follows_first_encounter() {
        let issues = vec![
            Issue::at(IssuePath::root().push_field("b"), "1"),
            Issue::at(IssuePath::root().push_field("a"), "2"),
            Issue::at(IssuePath::root().push_field("b"), "3"),
        ];
        let flattened = flatten_issues(&issues);
        let keys: Vec<_> = flattened.field_issues.keys().map(|k| k.to_string()).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(
            flattened.field("b"),
            Some(&["1".to_string(), "3".to_string()][..])
        );
    }
}
