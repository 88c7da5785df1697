//! Identifiers
//!
//!     An identifier names a declaration (`struct User`), a namespace scope, or a reference
//!     to another declaration (`extends BaseService`, a named field type, a const value).
//!     Names may be dotted: `shared.SharedStruct`.
//!
//!     The identifier node groups the name token with the comments written right before it.
//!     The name token itself is a leaf, [`IdentifierName`].

use super::super::kind::{Category, NodeKind};
use super::super::location::Location;
use super::super::traits::{AstNode, Children};
use super::bad::Recoverable;
use super::field_type::{FieldType, TypeName};
use super::tokens::{impl_leaf_node, Comment};
use std::fmt;

/// The name token of an identifier
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierName {
    pub text: String,
    pub location: Location,
    pub invalid: bool,
}

impl IdentifierName {
    /// An empty name is a failed match.
    pub fn new(text: impl Into<String>, location: Location) -> Self {
        let text = text.into();
        let invalid = text.is_empty();
        Self {
            text,
            location,
            invalid,
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

impl_leaf_node!(IdentifierName, NodeKind::IdentifierName, text);

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub comments: Vec<Comment>,
    pub name: IdentifierName,
    pub location: Location,
}

impl Identifier {
    pub fn new(comments: Vec<Comment>, name: IdentifierName, location: Location) -> Self {
        Self {
            comments,
            name,
            location,
        }
    }

    /// Identifier without leading comments, spanning exactly its name.
    pub fn from_name(name: IdentifierName) -> Self {
        let location = name.location;
        Self::new(Vec::new(), name, location)
    }

    pub fn text(&self) -> &str {
        &self.name.text
    }

    /// Read this identifier as a reference to a named type.
    pub fn to_field_type(&self) -> FieldType {
        let type_name = TypeName::new(self.name.text.clone(), self.name.location);
        FieldType::named(type_name, self.location)
    }
}

impl AstNode for Identifier {
    fn kind(&self) -> NodeKind {
        NodeKind::Identifier
    }
    fn location(&self) -> &Location {
        &self.location
    }
    fn children(&self) -> Vec<&dyn AstNode> {
        Children::new().all(&self.comments).node(&self.name).finish()
    }
    fn is_invalid(&self) -> bool {
        false
    }
    fn display_label(&self) -> String {
        self.name.text.clone()
    }
}

impl Recoverable for Identifier {
    const CATEGORY: Category = Category::Identifier;
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thrift::ast::elements::CommentStyle;
    use crate::thrift::ast::location::{Cursor, Position};

    #[test]
    fn test_identifier_children_in_source_order() {
        let mut cursor = Cursor::new();
        let comment = Comment::new("/* id */", CommentStyle::MultiLine, cursor.advance("/* id */"));
        cursor.advance(" ");
        let name = IdentifierName::new("User", cursor.advance("User"));
        let location = Location::new(Position::START, cursor.position());
        let identifier = Identifier::new(vec![comment], name, location);

        let kinds: Vec<_> = identifier.children().iter().map(|c| c.kind()).collect();
        assert_eq!(kinds, vec![NodeKind::Comment, NodeKind::IdentifierName]);
        assert_eq!(identifier.text(), "User");
        assert!(!identifier.subtree_invalid());
    }

    #[test]
    fn test_empty_name_is_invalid_but_identifier_is_not() {
        let at = Location::empty(Position::new(1, 8, 7));
        let identifier = Identifier::from_name(IdentifierName::new("", at));

        assert!(identifier.name.is_invalid());
        assert!(!identifier.is_invalid());
        assert!(identifier.subtree_invalid());
    }

    #[test]
    fn test_bad_identifier() {
        let bad = Identifier::bad(Location::empty(Position::START));
        assert_eq!(bad.node_type(), "BadIdentifier");
        assert!(bad.is_invalid());
        assert!(bad.children().is_empty());
    }

    #[test]
    fn test_identifier_to_field_type() {
        let mut cursor = Cursor::new();
        let name = IdentifierName::new("shared.Base", cursor.advance("shared.Base"));
        let field_type = Identifier::from_name(name).to_field_type();

        assert_eq!(field_type.type_name(), "shared.Base");
        assert!(field_type.key_type().is_none());
        assert_eq!(field_type.location.end, Position::new(1, 12, 11));
    }
}
