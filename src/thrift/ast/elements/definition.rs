//! Definitions: consts, typedefs and the [`Definition`] sum type

use super::super::kind::{Category, NodeKind};
use super::super::location::Location;
use super::super::traits::{AstNode, Children};
use super::annotation::Annotations;
use super::bad::{BadNode, Parsed, Recoverable};
use super::const_value::ConstValue;
use super::enumeration::Enum;
use super::field_type::FieldType;
use super::identifier::Identifier;
use super::service::Service;
use super::structure::{Exception, Struct, Union};
use super::tokens::{Comment, Keyword};
use super::trivia::{impl_decorated, Decorated, Trivia};

/// `const i32 MAX_RETRIES = 3`
#[derive(Debug, Clone, PartialEq)]
pub struct Const {
    pub keyword: Keyword,
    pub field_type: Parsed<FieldType>,
    pub identifier: Parsed<Identifier>,
    pub equal: Keyword,
    pub value: Parsed<ConstValue>,
    pub separator: Option<Keyword>,
    pub trivia: Trivia,
    pub location: Location,
}

impl Const {
    pub fn new(
        keyword: Keyword,
        field_type: Parsed<FieldType>,
        identifier: Parsed<Identifier>,
        equal: Keyword,
        value: Parsed<ConstValue>,
        location: Location,
    ) -> Self {
        Self {
            keyword,
            field_type,
            identifier,
            equal,
            value,
            separator: None,
            trivia: Trivia::default(),
            location,
        }
    }

    pub fn with_separator(mut self, separator: Keyword) -> Self {
        self.location = self.location.cover(&separator.location);
        self.separator = Some(separator);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.identifier.node().map(Identifier::text)
    }
}

impl AstNode for Const {
    fn kind(&self) -> NodeKind {
        NodeKind::Const
    }
    fn location(&self) -> &Location {
        &self.location
    }
    fn children(&self) -> Vec<&dyn AstNode> {
        let children = Children::new()
            .node(&self.keyword)
            .node(&self.field_type)
            .node(&self.identifier)
            .node(&self.equal)
            .node(&self.value)
            .opt(self.separator.as_ref());
        self.trivia.collect(children).finish()
    }
    fn is_invalid(&self) -> bool {
        false
    }
    fn display_label(&self) -> String {
        self.name().unwrap_or_default().to_string()
    }
}

impl Recoverable for Const {
    const CATEGORY: Category = Category::Const;
}

/// `typedef i64 UserId`
#[derive(Debug, Clone, PartialEq)]
pub struct Typedef {
    pub keyword: Keyword,
    pub field_type: Parsed<FieldType>,
    pub alias: Parsed<Identifier>,
    pub trivia: Trivia,
    pub location: Location,
}

impl Typedef {
    pub fn new(
        keyword: Keyword,
        field_type: Parsed<FieldType>,
        alias: Parsed<Identifier>,
        location: Location,
    ) -> Self {
        Self {
            keyword,
            field_type,
            alias,
            trivia: Trivia::default(),
            location,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.alias.node().map(Identifier::text)
    }
}

impl AstNode for Typedef {
    fn kind(&self) -> NodeKind {
        NodeKind::Typedef
    }
    fn location(&self) -> &Location {
        &self.location
    }
    fn children(&self) -> Vec<&dyn AstNode> {
        let children = Children::new()
            .node(&self.keyword)
            .node(&self.field_type)
            .node(&self.alias);
        self.trivia.collect(children).finish()
    }
    fn is_invalid(&self) -> bool {
        false
    }
    fn display_label(&self) -> String {
        self.name().unwrap_or_default().to_string()
    }
}

impl Recoverable for Typedef {
    const CATEGORY: Category = Category::Typedef;
}

impl_decorated!(Const, Typedef);

/// A top-level definition
#[derive(Debug, Clone, PartialEq)]
pub enum Definition {
    Const(Const),
    Typedef(Typedef),
    Enum(Enum),
    Struct(Struct),
    Union(Union),
    Exception(Exception),
    Service(Service),
    Bad(BadNode),
}

/// Runs `$body` with `$node` bound to the decorated declaration of each variant.
macro_rules! each_definition {
    ($value:expr, $node:ident => $body:expr, $bad:ident => $bad_body:expr) => {
        match $value {
            Definition::Const($node) => $body,
            Definition::Typedef($node) => $body,
            Definition::Enum($node) => $body,
            Definition::Struct($node) => $body,
            Definition::Union($node) => $body,
            Definition::Exception($node) => $body,
            Definition::Service($node) => $body,
            Definition::Bad($bad) => $bad_body,
        }
    };
}

impl Definition {
    /// Placeholder for a definition that could not be told apart.
    pub fn bad(location: Location) -> Definition {
        Definition::Bad(BadNode::new(Category::Definition, location))
    }

    pub fn is_bad(&self) -> bool {
        matches!(self, Definition::Bad(_))
    }

    /// Declared name, absent for placeholders and for definitions whose name failed to parse.
    pub fn name(&self) -> Option<&str> {
        each_definition!(self, node => node.name(), _bad => None)
    }

    fn as_node(&self) -> &dyn AstNode {
        each_definition!(self, node => node as &dyn AstNode, bad => bad as &dyn AstNode)
    }

    /// See [`Decorated::with_comments`]. Placeholders are returned unchanged.
    pub fn with_comments(self, comments: Vec<Comment>, end_line_comments: Vec<Comment>) -> Self {
        each_definition!(
            self,
            node => node.with_comments(comments, end_line_comments).into(),
            bad => Definition::Bad(bad)
        )
    }

    /// See [`Decorated::with_annotations`]. Placeholders are returned unchanged.
    pub fn with_annotations(self, annotations: Annotations) -> Self {
        each_definition!(
            self,
            node => node.with_annotations(annotations).into(),
            bad => Definition::Bad(bad)
        )
    }
}

impl AstNode for Definition {
    fn kind(&self) -> NodeKind {
        self.as_node().kind()
    }
    fn location(&self) -> &Location {
        each_definition!(self, node => &node.location, bad => &bad.location)
    }
    fn children(&self) -> Vec<&dyn AstNode> {
        self.as_node().children()
    }
    fn is_invalid(&self) -> bool {
        self.as_node().is_invalid()
    }
    fn subtree_invalid(&self) -> bool {
        self.as_node().subtree_invalid()
    }
    fn display_label(&self) -> String {
        self.as_node().display_label()
    }
}

macro_rules! definition_from {
    ($($variant:ident),+) => {
        $(
            impl From<$variant> for Definition {
                fn from(node: $variant) -> Self {
                    Definition::$variant(node)
                }
            }

            impl From<Parsed<$variant>> for Definition {
                fn from(parsed: Parsed<$variant>) -> Self {
                    match parsed {
                        Parsed::Node(node) => Definition::$variant(node),
                        Parsed::Bad(bad) => Definition::Bad(bad),
                    }
                }
            }
        )+
    };
}

definition_from!(Const, Typedef, Enum, Struct, Union, Exception, Service);
