use ast_grep_core::{Doc, Node};
use lens_core::Position;

use crate::ast::{Attribute, Span};

pub(super) fn namespace_name<D: Doc>(node: &Node<'_, D>) -> String {
    node.field("name")
        .map(|name| name.text().trim().trim_start_matches('\\').to_string())
        .unwrap_or_default()
}

/// Whether a declaration carries a modifier keyword such as `abstract`.
pub(super) fn has_modifier<D: Doc>(node: &Node<'_, D>, keyword: &str) -> bool {
    node.children().any(|child| {
        child.kind().ends_with("_modifier") && child.text().eq_ignore_ascii_case(keyword)
    })
}

/// Raw text of the comments stacked directly above `anchor`, top to bottom.
pub(super) fn leading_comments<D: Doc>(anchor: &Node<'_, D>) -> Vec<String> {
    let mut comments = Vec::new();
    let mut current = anchor.prev();

    while let Some(prev) = current {
        if prev.kind().as_ref() != "comment" {
            break;
        }
        comments.push(prev.text().to_string());
        current = prev.prev();
    }

    comments.reverse();
    comments
}

/// Comments inside a declaration that sit between its attribute lists and
/// its first modifier or keyword, in source order.
pub(super) fn inner_leading_comments<D: Doc>(node: &Node<'_, D>) -> Vec<String> {
    node.children()
        .take_while(|c| matches!(c.kind().as_ref(), "attribute_list" | "comment"))
        .filter(|c| c.kind().as_ref() == "comment")
        .map(|c| c.text().to_string())
        .collect()
}

/// Attributes of a declaration, in source order.
///
/// Only string literal arguments are kept, unquoted.
pub(super) fn attributes<D: Doc>(node: &Node<'_, D>) -> Vec<Attribute> {
    let mut attrs = Vec::new();
    for list in node
        .children()
        .filter(|c| c.kind().as_ref() == "attribute_list")
    {
        for group in list
            .children()
            .filter(|c| c.kind().as_ref() == "attribute_group")
        {
            for attribute in group
                .children()
                .filter(|c| c.kind().as_ref() == "attribute")
            {
                let name = attribute
                    .children()
                    .find(|c| {
                        matches!(
                            c.kind().as_ref(),
                            "name" | "qualified_name" | "relative_name"
                        )
                    })
                    .map(|n| n.text().trim_start_matches('\\').to_string())
                    .unwrap_or_default();
                if name.is_empty() {
                    continue;
                }
                let arguments = attribute
                    .field("parameters")
                    .map(|args| string_arguments(&args))
                    .unwrap_or_default();
                attrs.push(Attribute { name, arguments });
            }
        }
    }
    attrs
}

fn string_arguments<D: Doc>(args: &Node<'_, D>) -> Vec<String> {
    args.children()
        .filter(|c| c.kind().as_ref() == "argument")
        .filter_map(|arg| {
            arg.children()
                .find(|c| matches!(c.kind().as_ref(), "string" | "encapsed_string"))
                .map(|literal| unquote(literal.text().as_ref()).to_string())
        })
        .collect()
}

fn unquote(literal: &str) -> &str {
    let literal = literal.trim();
    for quote in ['\'', '"'] {
        if let Some(inner) = literal
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    literal
}

pub(super) fn property_names<D: Doc>(node: &Node<'_, D>) -> Vec<String> {
    node.children()
        .filter(|c| c.kind().as_ref() == "property_element")
        .filter_map(|property| {
            property
                .field("name")
                .map(|n| n.text().trim_start_matches('$').to_string())
        })
        .collect()
}

pub(super) fn const_names<D: Doc>(node: &Node<'_, D>) -> Vec<String> {
    node.children()
        .filter(|c| c.kind().as_ref() == "const_element")
        .filter_map(|elem| {
            elem.children()
                .find(|c| c.kind().as_ref() == "name")
                .map(|n| n.text().to_string())
        })
        .collect()
}

pub(super) fn name_list<D: Doc>(node: &Node<'_, D>) -> Vec<String> {
    node.children()
        .filter(|child| {
            matches!(
                child.kind().as_ref(),
                "name" | "qualified_name" | "relative_name" | "namespace_name"
            )
        })
        .map(|child| child.text().to_string())
        .collect()
}

/// Span of a declaration from its first modifier or keyword to one past its
/// closing brace. Attribute lists above the declaration are not included.
pub(super) fn declaration_span<D: Doc>(node: &Node<'_, D>) -> Span {
    let anchor = node
        .children()
        .find(|c| !matches!(c.kind().as_ref(), "attribute_list" | "comment"))
        .unwrap_or_else(|| node.clone());

    let start = anchor.start_pos();
    let end = node.end_pos();
    Span::new(
        position(start.line(), start.column(&anchor)),
        position(end.line(), end.column(node)),
    )
}

/// Tree-sitter rows are zero-based; editors count lines from one.
fn position(row: usize, column: usize) -> Position {
    let line = u32::try_from(row).unwrap_or(u32::MAX - 1) + 1;
    let character = u32::try_from(column).unwrap_or(u32::MAX);
    Position::new(line, character)
}
