//! Grouping a class's test methods into a `TestSuite`.

use lens_core::{TestSuite, qualified_class};

use super::classifier::is_test_candidate;
use super::metadata::{Owner, build_test_case};
use super::span::resolve_span;
use crate::ast::{ClassDecl, Member};

/// Build the suite for one class, or `None` when no member is a test.
pub(super) fn build_suite(class: &ClassDecl, namespace: &str, file: &str) -> Option<TestSuite> {
    let qualified = qualified_class(namespace, &class.name);
    let owner = Owner {
        file,
        namespace,
        class_name: &class.name,
        qualified_class: &qualified,
    };

    let children: Vec<_> = class
        .members
        .iter()
        .filter(|member| is_test_candidate(member))
        .filter_map(Member::as_method)
        .map(|method| build_test_case(method, &owner))
        .collect();

    if children.is_empty() {
        return None;
    }

    let span = resolve_span(&class.span);
    Some(TestSuite {
        file: file.to_string(),
        id: qualified.clone(),
        qualified_class: qualified,
        namespace: namespace.to_string(),
        class_name: class.name.clone(),
        start: span.start,
        end: span.end,
        children,
    })
}
