//! Quoted string literals
//!
//! Literals appear as include paths, annotation values and `cpp_type` names. Both quote
//! styles are accepted:
//!
//! ```text
//! include "shared.thrift"
//! (go.tag = 'json:"id"')
//! ```
//!
//! The literal node spans the quotes; its [`LiteralValue`] child spans only the text between
//! them.

use super::super::kind::{Category, NodeKind};
use super::super::location::Location;
use super::super::traits::{AstNode, Children};
use super::bad::Recoverable;
use super::tokens::{impl_leaf_node, Comment};

/// Text between the quotes of a literal
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralValue {
    pub text: String,
    pub location: Location,
    pub invalid: bool,
}

impl LiteralValue {
    pub fn new(text: impl Into<String>, location: Location) -> Self {
        Self {
            text: text.into(),
            location,
            invalid: false,
        }
    }

    pub fn bad(location: Location) -> Self {
        Self {
            text: String::new(),
            location,
            invalid: true,
        }
    }
}

impl_leaf_node!(LiteralValue, NodeKind::LiteralValue, text);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quote {
    Single,
    Double,
}

impl Quote {
    pub fn as_char(&self) -> char {
        match self {
            Quote::Single => '\'',
            Quote::Double => '"',
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub comments: Vec<Comment>,
    pub value: LiteralValue,
    pub quote: Quote,
    pub location: Location,
}

impl Literal {
    pub fn new(
        comments: Vec<Comment>,
        value: LiteralValue,
        quote: Quote,
        location: Location,
    ) -> Self {
        Self {
            comments,
            value,
            quote,
            location,
        }
    }

    /// Unquoted text.
    pub fn text(&self) -> &str {
        &self.value.text
    }

    /// Text as written, quotes included.
    pub fn quoted(&self) -> String {
        let quote = self.quote.as_char();
        format!("{}{}{}", quote, self.value.text, quote)
    }
}

impl AstNode for Literal {
    fn kind(&self) -> NodeKind {
        NodeKind::Literal
    }
    fn location(&self) -> &Location {
        &self.location
    }
    fn children(&self) -> Vec<&dyn AstNode> {
        Children::new().all(&self.comments).node(&self.value).finish()
    }
    fn is_invalid(&self) -> bool {
        false
    }
    fn display_label(&self) -> String {
        self.quoted()
    }
}

impl Recoverable for Literal {
    const CATEGORY: Category = Category::Literal;
}
