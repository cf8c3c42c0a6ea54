use ast_grep_language::{LanguageExt, SupportLang};

use super::*;
pub(super) use crate::ast::ClassDecl;
pub(super) use lens_core::Position;


fn lower_source(source: &str) -> Program {
    let root = SupportLang::Php.ast_grep(source);
    lower(&root.root())
}

/// Every class in the program, flattened in source order, with the namespace
/// it was lowered under.
fn classes(program: &Program) -> Vec<(String, &ClassDecl)> {
    fn visit<'a>(nodes: &'a [Node], namespace: &str, out: &mut Vec<(String, &'a ClassDecl)>) {
        for node in nodes {
            match node {
                Node::Namespace(decl) => visit(&decl.children, &decl.name, out),
                Node::Class(class) => out.push((namespace.to_string(), class)),
                Node::Container(children) => visit(children, namespace, out),
                Node::UseGroup => {}
            }
        }
    }

    let mut out = Vec::new();
    visit(&program.children, "", &mut out);
    out
}

fn find_class<'a>(program: &'a Program, name: &str) -> &'a ClassDecl {
    classes(program)
        .into_iter()
        .map(|(_, class)| class)
        .find(|class| class.name == name)
        .unwrap_or_else(|| panic!("should find class named '{name}'"))
}

fn find_method<'a>(class: &'a ClassDecl, name: &str) -> &'a MethodDecl {
    class
        .members
        .iter()
        .filter_map(Member::as_method)
        .find(|method| method.name == name)
        .unwrap_or_else(|| panic!("should find method named '{name}'"))
}
