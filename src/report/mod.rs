//! Turning issues into structures and text that callers can present.
//!
//! - [`flatten_issues`] buckets issues by the first key of their path, which
//!   suits forms that are one level deep.
//! - [`format_issues`] builds a tree mirroring the full path of every issue.
//! - [`summarize`] renders issues as a multi-line report.
//!
//! Both aggregations keep encounter order, and accept an optional mapper that
//! is called exactly once per issue to decide what is stored.

mod flatten;
mod format;
mod summary;

pub use flatten::{
    flatten_issues, flatten_issues_for, flatten_issues_for_with, flatten_issues_with,
    FlattenedIssues,
};
pub use format::{
    format_issues, format_issues_for, format_issues_for_with, format_issues_with, FormattedIssues,
};
pub use summary::summarize;

use crate::error::Issue;

/// The mapper used when none is given: keep only the message.
fn message_of(issue: &Issue) -> String {
    issue.message.clone()
}
