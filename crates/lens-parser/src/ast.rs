//! Closed syntax model consumed by extraction.
//!
//! Only the shapes test discovery cares about get their own variant. Anything
//! else that can hold declarations (function bodies, `if` blocks, declare
//! statements) collapses into [`Node::Container`].

use lens_core::Position;

/// One parsed file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Namespace(NamespaceDecl),
    Class(ClassDecl),
    /// `use Foo\Bar;` and grouped imports. Never holds declarations.
    UseGroup,
    Container(Vec<Node>),
}

/// A namespace and everything it scopes.
///
/// For the unbraced `namespace Foo;` form the children are the statements
/// that follow it, up to the next namespace statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceDecl {
    pub name: String,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    Class,
    Interface,
    Trait,
    Enum,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    pub kind: ClassKind,
    pub name: String,
    pub is_abstract: bool,
    pub members: Vec<Member>,
    pub span: Span,
}

impl ClassDecl {
    #[must_use]
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            kind: ClassKind::Class,
            name: name.into(),
            is_abstract: false,
            members: Vec::new(),
            span,
        }
    }

    #[must_use]
    pub const fn with_kind(mut self, kind: ClassKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub const fn abstract_class(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    #[must_use]
    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }
}

/// A declaration in a class body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    Method(MethodDecl),
    Property(String),
    Constant(String),
    /// `use SomeTrait;` inside a class body, with the trait names.
    TraitUse(Vec<String>),
}

impl Member {
    #[must_use]
    pub const fn as_method(&self) -> Option<&MethodDecl> {
        match self {
            Self::Method(method) => Some(method),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    pub name: String,
    /// Raw text of each comment directly above the method, in source order.
    pub comments: Vec<String>,
    pub attributes: Vec<Attribute>,
    pub span: Span,
}

impl MethodDecl {
    #[must_use]
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            comments: Vec::new(),
            attributes: Vec::new(),
            span,
        }
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comments.push(comment.into());
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }
}

/// A PHP attribute such as `#[DataProvider('additionProvider')]`.
///
/// `arguments` holds the unquoted string literal arguments only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub arguments: Vec<String>,
}

impl Attribute {
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            arguments: arguments.into_iter().map(Into::into).collect(),
        }
    }
}

/// Source extent of a declaration as reported by the parser.
///
/// Parsers differ in what they expose: some give an end position, others only
/// the captured text. `start` is always required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Option<Position>,
    pub text: Option<String>,
}

impl Span {
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self {
            start,
            end: Some(end),
            text: None,
        }
    }

    #[must_use]
    pub fn from_text(start: Position, text: impl Into<String>) -> Self {
        Self {
            start,
            end: None,
            text: Some(text.into()),
        }
    }

    #[must_use]
    pub const fn at(start: Position) -> Self {
        Self {
            start,
            end: None,
            text: None,
        }
    }
}
