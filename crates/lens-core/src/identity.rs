//! Qualified names and unique ids for test records.

/// Separator between namespace segments, and between a namespace and a class.
pub const NAMESPACE_SEPARATOR: &str = "\\";

/// Join a namespace and a class name, dropping the namespace when it is empty.
///
/// ```
/// use lens_core::qualified_class;
/// assert_eq!(qualified_class("App\\Tests", "UserTest"), "App\\Tests\\UserTest");
/// assert_eq!(qualified_class("", "UserTest"), "UserTest");
/// ```
#[must_use]
pub fn qualified_class(namespace: &str, class: &str) -> String {
    [namespace, class]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(NAMESPACE_SEPARATOR)
}

/// Build the id of a test method: `Qualified\Class::method`.
///
/// Deterministic, so re-extracting an unchanged file yields the same ids.
#[must_use]
pub fn unique_id(qualified_class: &str, method: &str) -> String {
    format!("{qualified_class}::{method}")
}
