//! Docblock and attribute metadata, merged into one [`Annotations`] map.

use std::sync::LazyLock;

use lens_core::{AnnotationKey, Annotations};
use regex::Regex;

use crate::ast::MethodDecl;

/// A syntax that can carry test metadata on a method.
pub trait AnnotationSource {
    fn name(&self) -> &'static str;

    fn collect(&self, method: &MethodDecl) -> Annotations;
}

/// `@depends`, `@dataProvider` and `@testdox` tags in leading comments.
pub struct DocCommentSource;

/// `#[Depends]`, `#[DataProvider]` and `#[TestDox]` attributes.
pub struct AttributeSource;

/// Sources in merge order: docblock values come before attribute values.
const SOURCES: [&dyn AnnotationSource; 2] = [&DocCommentSource, &AttributeSource];

/// Collect the metadata of a method from every source.
#[must_use]
pub fn collect_annotations(method: &MethodDecl) -> Annotations {
    SOURCES
        .iter()
        .fold(Annotations::new(), |mut annotations, source| {
            let found = source.collect(method);
            if !found.is_empty() {
                tracing::trace!(method = %method.name, source = source.name(), "found annotations");
            }
            annotations.merge(found);
            annotations
        })
}

/// One pattern per key. Token tags capture a single run of non-whitespace,
/// free-text tags capture the rest of the line.
static TAG_PATTERNS: LazyLock<Vec<(AnnotationKey, Regex)>> = LazyLock::new(|| {
    AnnotationKey::ALL
        .into_iter()
        .map(|key| {
            let argument = if key.takes_free_text() { r"(.+)" } else { r"(\S+)" };
            let pattern = format!(r"{}[ \t]+{argument}", regex::escape(key.doc_tag()));
            (key, Regex::new(&pattern).expect("tag pattern is valid"))
        })
        .collect()
});

impl AnnotationSource for DocCommentSource {
    fn name(&self) -> &'static str {
        "docblock"
    }

    fn collect(&self, method: &MethodDecl) -> Annotations {
        let mut annotations = Annotations::new();
        for (key, pattern) in TAG_PATTERNS.iter() {
            for comment in &method.comments {
                for line in comment_lines(comment) {
                    annotations.extend(
                        *key,
                        pattern
                            .captures_iter(line)
                            .filter_map(|captures| captures.get(1))
                            .map(|argument| argument.as_str().trim()),
                    );
                }
            }
        }
        annotations
    }
}

impl AnnotationSource for AttributeSource {
    fn name(&self) -> &'static str {
        "attribute"
    }

    fn collect(&self, method: &MethodDecl) -> Annotations {
        let mut annotations = Annotations::new();
        for attribute in &method.attributes {
            if let Some(key) = AnnotationKey::from_attribute(&attribute.name) {
                annotations.extend(key, attribute.arguments.iter().map(String::as_str));
            }
        }
        annotations
    }
}

/// Comment body lines with the comment syntax removed.
///
/// Handles `/** ... */` and `/* ... */` blocks (including the leading `*` of
/// each docblock line), `//` and `#` line comments.
fn comment_lines(raw: &str) -> impl Iterator<Item = &str> {
    let body = raw.trim();
    let body = body
        .strip_prefix("/**")
        .or_else(|| body.strip_prefix("/*"))
        .map_or(body, |inner| inner.strip_suffix("*/").unwrap_or(inner));

    body.lines().map(|line| {
        let line = line.trim();
        let line = line
            .strip_prefix("//")
            .or_else(|| line.strip_prefix('#'))
            .or_else(|| line.strip_prefix('*'))
            .unwrap_or(line);
        line.trim()
    })
}
