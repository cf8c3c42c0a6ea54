//! Lowering an ast-grep PHP tree into the [`ast`](crate::ast) model.
//!
//! The tree-sitter PHP grammar keeps an unbraced `namespace Foo;` as a bare
//! statement followed by its siblings. Lowering nests those siblings under the
//! namespace so extraction only has to deal with one namespace shape.

mod helpers;

use ast_grep_core::{Doc, Node as SyntaxNode};

use crate::ast::{ClassDecl, ClassKind, Member, MethodDecl, NamespaceDecl, Node, Program};

/// Lower the `program` root of a PHP tree.
pub fn lower<D: Doc>(root: &SyntaxNode<'_, D>) -> Program {
    Program {
        children: lower_children(root),
    }
}

fn lower_children<D: Doc>(node: &SyntaxNode<'_, D>) -> Vec<Node> {
    let children: Vec<_> = node.children().collect();
    lower_block(&children)
}

fn lower_block<D: Doc>(nodes: &[SyntaxNode<'_, D>]) -> Vec<Node> {
    let mut lowered = Vec::new();
    let mut index = 0;

    while index < nodes.len() {
        let node = &nodes[index];
        if is_unbraced_namespace(node) {
            let end = nodes[index + 1..]
                .iter()
                .position(|sibling| sibling.kind().as_ref() == "namespace_definition")
                .map_or(nodes.len(), |offset| index + 1 + offset);
            lowered.push(Node::Namespace(NamespaceDecl {
                name: helpers::namespace_name(node),
                children: lower_block(&nodes[index + 1..end]),
            }));
            index = end;
            continue;
        }

        if let Some(node) = lower_node(node) {
            lowered.push(node);
        }
        index += 1;
    }

    lowered
}

fn is_unbraced_namespace<D: Doc>(node: &SyntaxNode<'_, D>) -> bool {
    node.kind().as_ref() == "namespace_definition" && node.field("body").is_none()
}

fn lower_node<D: Doc>(node: &SyntaxNode<'_, D>) -> Option<Node> {
    match node.kind().as_ref() {
        "namespace_definition" => Some(Node::Namespace(NamespaceDecl {
            name: helpers::namespace_name(node),
            children: node
                .field("body")
                .map(|body| lower_children(&body))
                .unwrap_or_default(),
        })),
        "namespace_use_declaration" => Some(Node::UseGroup),
        "class_declaration" | "interface_declaration" | "trait_declaration" | "enum_declaration" => {
            lower_class(node).map(Node::Class)
        }
        "comment" | "php_tag" | "text" | "text_interpolation" => None,
        _ => {
            let children = lower_children(node);
            if children.is_empty() {
                None
            } else {
                Some(Node::Container(children))
            }
        }
    }
}

fn lower_class<D: Doc>(node: &SyntaxNode<'_, D>) -> Option<ClassDecl> {
    let kind = match node.kind().as_ref() {
        "class_declaration" => ClassKind::Class,
        "interface_declaration" => ClassKind::Interface,
        "trait_declaration" => ClassKind::Trait,
        "enum_declaration" => ClassKind::Enum,
        _ => return None,
    };
    let name = node.field("name")?.text().to_string();

    Some(ClassDecl {
        kind,
        name,
        is_abstract: helpers::has_modifier(node, "abstract"),
        members: node
            .field("body")
            .map(|body| lower_members(&body))
            .unwrap_or_default(),
        span: helpers::declaration_span(node),
    })
}

fn lower_members<D: Doc>(body: &SyntaxNode<'_, D>) -> Vec<Member> {
    body.children()
        .flat_map(|child| match child.kind().as_ref() {
            "method_declaration" => lower_method(&child).map(Member::Method).into_iter().collect(),
            "property_declaration" => helpers::property_names(&child)
                .into_iter()
                .map(Member::Property)
                .collect(),
            "const_declaration" => helpers::const_names(&child)
                .into_iter()
                .map(Member::Constant)
                .collect(),
            "use_declaration" => vec![Member::TraitUse(helpers::name_list(&child))],
            _ => Vec::new(),
        })
        .collect()
}

fn lower_method<D: Doc>(node: &SyntaxNode<'_, D>) -> Option<MethodDecl> {
    let name = node.field("name")?.text().to_string();
    let mut comments = helpers::leading_comments(node);
    comments.extend(helpers::inner_leading_comments(node));

    Some(MethodDecl {
        name,
        comments,
        attributes: helpers::attributes(node),
        span: helpers::declaration_span(node),
    })
}

#[cfg(test)]
mod tests;
