//! Annotation blocks: `(go.tag = "json", deprecated = "true")`

use super::super::kind::{Category, NodeKind};
use super::super::location::Location;
use super::super::traits::{AstNode, Children};
use super::bad::{Parsed, Recoverable};
use super::identifier::Identifier;
use super::literal::Literal;
use super::tokens::Keyword;

/// One `key = "value"` entry
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub identifier: Parsed<Identifier>,
    pub equal: Keyword,
    pub value: Parsed<Literal>,
    /// Trailing `,` or `;`
    pub separator: Option<Keyword>,
    pub location: Location,
}

impl Annotation {
    pub fn new(
        identifier: Parsed<Identifier>,
        equal: Keyword,
        value: Parsed<Literal>,
        separator: Option<Keyword>,
        location: Location,
    ) -> Self {
        Self {
            identifier,
            equal,
            value,
            separator,
            location,
        }
    }

    pub fn key(&self) -> Option<&str> {
        self.identifier.node().map(Identifier::text)
    }

    pub fn value(&self) -> Option<&str> {
        self.value.node().map(Literal::text)
    }
}

impl AstNode for Annotation {
    fn kind(&self) -> NodeKind {
        NodeKind::Annotation
    }
    fn location(&self) -> &Location {
        &self.location
    }
    fn children(&self) -> Vec<&dyn AstNode> {
        Children::new()
            .node(&self.identifier)
            .node(&self.equal)
            .node(&self.value)
            .opt(self.separator.as_ref())
            .finish()
    }
    fn is_invalid(&self) -> bool {
        false
    }
    fn display_label(&self) -> String {
        format!(
            "{} = {}",
            self.key().unwrap_or_default(),
            self.value.node().map(Literal::quoted).unwrap_or_default()
        )
    }
}

impl Recoverable for Annotation {
    const CATEGORY: Category = Category::Annotation;
}

/// Parenthesised list of annotations
#[derive(Debug, Clone, PartialEq)]
pub struct Annotations {
    pub lpar: Keyword,
    pub annotations: Vec<Parsed<Annotation>>,
    pub rpar: Keyword,
    pub location: Location,
}

impl Annotations {
    pub fn new(
        lpar: Keyword,
        annotations: Vec<Parsed<Annotation>>,
        rpar: Keyword,
        location: Location,
    ) -> Self {
        Self {
            lpar,
            annotations,
            rpar,
            location,
        }
    }

    /// Value of the first well-formed annotation named `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.iter()
            .find(|annotation| annotation.key() == Some(key))
            .and_then(Annotation::value)
    }

    /// Well-formed annotations, skipping placeholders.
    pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter().filter_map(Parsed::node)
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}

impl AstNode for Annotations {
    fn kind(&self) -> NodeKind {
        NodeKind::Annotations
    }
    fn location(&self) -> &Location {
        &self.location
    }
    fn children(&self) -> Vec<&dyn AstNode> {
        Children::new()
            .node(&self.lpar)
            .all(&self.annotations)
            .node(&self.rpar)
            .finish()
    }
    fn is_invalid(&self) -> bool {
        false
    }
}

impl Recoverable for Annotations {
    const CATEGORY: Category = Category::Annotations;
}
