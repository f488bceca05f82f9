//! Nested issue trees.

use indexmap::IndexMap;
use serde_json::map::Entry;
use serde_json::{Map, Value};

use super::message_of;
use crate::error::Issue;
use crate::path::{resolve_key, PropertyKey};
use crate::schema::Standard;

/// A tree of issues mirroring the paths they were reported at.
///
/// Every node holds the issues located exactly at that node, plus one child
/// per key that some issue's path continues through. The root holds the
/// form-level issues.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedIssues<M = String> {
    /// Issues located exactly at this node (`_issues`).
    pub issues: Vec<M>,
    /// Child nodes in the order they were first visited.
    pub children: IndexMap<PropertyKey, FormattedIssues<M>>,
}

impl<M> FormattedIssues<M> {
    /// Creates an empty node.
    pub fn new() -> Self {
        Self {
            issues: Vec::new(),
            children: IndexMap::new(),
        }
    }

    /// Returns the child node at the given key.
    pub fn child(&self, key: impl Into<PropertyKey>) -> Option<&Self> {
        self.children.get(&key.into())
    }

    /// Follows a sequence of keys from this node.
    pub fn descend<K: Into<PropertyKey>>(&self, keys: impl IntoIterator<Item = K>) -> Option<&Self> {
        keys.into_iter()
            .try_fold(self, |node, key| node.child(key))
    }

    /// Returns true if neither this node nor any descendant holds an issue.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty() && self.children.values().all(FormattedIssues::is_empty)
    }

    /// Renders the tree as a JSON object.
    ///
    /// Each node becomes an object with an `_issues` array and one member per
    /// child, keyed by the child's key. Children whose keys render alike, such
    /// as `Index(0)` and `Field("0")`, merge into one member with their issues
    /// concatenated in child order. A child named `_issues` is written as
    /// `\_issues` so it cannot replace the node's own issues.
    pub fn to_json(&self) -> Value
    where
        M: Clone + Into<Value>,
    {
        let mut object = Map::new();
        object.insert(
            ISSUES_KEY.to_string(),
            Value::Array(self.issues.iter().cloned().map(Into::into).collect()),
        );
        for (key, child) in &self.children {
            merge_member(&mut object, json_key(key), child.to_json());
        }
        Value::Object(object)
    }
}

const ISSUES_KEY: &str = "_issues";

fn json_key(key: &PropertyKey) -> String {
    match key {
        PropertyKey::Field(name) if name.trim_start_matches('\\') == ISSUES_KEY => {
            format!("\\{}", name)
        }
        _ => key.to_string(),
    }
}

/// Inserts a rendered member, merging it into one already at `key`.
///
/// Issue arrays concatenate and child objects merge recursively.
fn merge_member(object: &mut Map<String, Value>, key: String, value: Value) {
    match object.entry(key) {
        Entry::Vacant(slot) => {
            slot.insert(value);
        }
        Entry::Occupied(mut slot) => match (slot.get_mut(), value) {
            (Value::Array(existing), Value::Array(more)) => existing.extend(more),
            (Value::Object(existing), Value::Object(more)) => {
                for (key, value) in more {
                    merge_member(existing, key, value);
                }
            }
            (existing, value) => *existing = value,
        },
    }
}

impl<M> Default for FormattedIssues<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats issues into a tree, keeping each issue's message.
///
/// # Example
///
/// ```rust
/// use standard_schema::{format_issues, Issue, IssuePath};
///
/// let issues = vec![
///     Issue::new("Invalid form"),
///     Issue::at(IssuePath::root().push_field("user").push_field("name"), "Required"),
/// ];
///
/// let formatted = format_issues(&issues);
/// assert_eq!(formatted.issues, vec!["Invalid form"]);
///
/// let name = formatted.descend(["user", "name"]).unwrap();
/// assert_eq!(name.issues, vec!["Required"]);
/// assert!(formatted.child("user").unwrap().issues.is_empty());
/// ```
pub fn format_issues<'a>(issues: impl IntoIterator<Item = &'a Issue>) -> FormattedIssues {
    format_issues_with(issues, message_of)
}

/// Formats issues into a tree, storing whatever `map_issue` returns.
pub fn format_issues_with<'a, M, F>(
    issues: impl IntoIterator<Item = &'a Issue>,
    mut map_issue: F,
) -> FormattedIssues<M>
where
    F: FnMut(&Issue) -> M,
{
    let mut root = FormattedIssues::new();

    for issue in issues {
        let mut cursor = &mut root;
        for segment in issue.path.segments() {
            cursor = cursor
                .children
                .entry(resolve_key(segment).clone())
                .or_insert_with(FormattedIssues::new);
        }
        cursor.issues.push(map_issue(issue));
    }

    root
}

/// Formats issues reported by `schema`.
///
/// The schema only ties the call to the schema the issues came from; it does
/// not affect the result.
pub fn format_issues_for<'a, S>(
    schema: &S,
    issues: impl IntoIterator<Item = &'a Issue>,
) -> FormattedIssues
where
    S: Standard + ?Sized,
{
    format_issues_for_with(schema, issues, message_of)
}

/// Formats issues reported by `schema` with a custom mapper.
pub fn format_issues_for_with<'a, S, M, F>(
    _schema: &S,
    issues: impl IntoIterator<Item = &'a Issue>,
    map_issue: F,
) -> FormattedIssues<M>
where
    S: Standard + ?Sized,
    F: FnMut(&Issue) -> M,
{
    format_issues_with(issues, map_issue)
}
