//! Test discovery over the [`ast`](crate::ast) model.
//!
//! The walker carries the enclosing namespace down the recursion as an
//! argument, so sibling namespace blocks never see each other's names. Each
//! concrete class is handed to the suite builder, which keeps the methods the
//! classifier accepts and turns them into `TestCase` records.

mod annotations;
mod classifier;
mod metadata;
mod span;
mod suite;

pub use annotations::{AnnotationSource, AttributeSource, DocCommentSource, collect_annotations};
pub use classifier::{is_test_candidate, is_test_method};
pub use span::{ResolvedSpan, resolve_span};

use lens_core::TestSuite;

use crate::ast::{ClassDecl, ClassKind, Node, Program};

/// Extract the test suites declared in one file.
///
/// `file` is copied verbatim into every record. Suites come out in class
/// declaration order; a file without tests yields an empty list.
#[must_use]
pub fn extract(program: &Program, file: &str) -> Vec<TestSuite> {
    let mut suites = Vec::new();
    walk_nodes(&program.children, "", file, &mut suites);
    tracing::debug!(file, suites = suites.len(), "extracted test suites");
    suites
}

fn walk_nodes(nodes: &[Node], namespace: &str, file: &str, suites: &mut Vec<TestSuite>) {
    for node in nodes {
        walk(node, namespace, file, suites);
    }
}

fn walk(node: &Node, namespace: &str, file: &str, suites: &mut Vec<TestSuite>) {
    match node {
        Node::UseGroup => {}
        Node::Namespace(decl) => walk_nodes(&decl.children, &decl.name, file, suites),
        Node::Class(class) => {
            if !holds_tests(class) {
                return;
            }
            if let Some(suite) = suite::build_suite(class, namespace, file) {
                suites.push(suite);
            }
        }
        Node::Container(children) => walk_nodes(children, namespace, file, suites),
    }
}

/// Only concrete classes can be instantiated by PHPUnit.
fn holds_tests(class: &ClassDecl) -> bool {
    if class.kind != ClassKind::Class {
        return false;
    }
    if class.is_abstract {
        tracing::debug!(class = %class.name, "skipping abstract class");
        return false;
    }
    true
}
