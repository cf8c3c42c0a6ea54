//! Building a `TestCase` from a qualifying method.

use lens_core::{TestCase, unique_id};

use super::annotations::collect_annotations;
use super::span::resolve_span;
use crate::ast::MethodDecl;

/// Identity of the class a method is declared in.
pub(super) struct Owner<'a> {
    pub file: &'a str,
    pub namespace: &'a str,
    pub class_name: &'a str,
    pub qualified_class: &'a str,
}

pub(super) fn build_test_case(method: &MethodDecl, owner: &Owner<'_>) -> TestCase {
    let span = resolve_span(&method.span);

    TestCase {
        file: owner.file.to_string(),
        id: unique_id(owner.qualified_class, &method.name),
        qualified_class: owner.qualified_class.to_string(),
        namespace: owner.namespace.to_string(),
        class_name: owner.class_name.to_string(),
        method: method.name.clone(),
        annotations: collect_annotations(method),
        start: span.start,
        end: span.end,
    }
}
