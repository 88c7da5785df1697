//! Fields
//!
//! Fields make up struct, union and exception bodies, function arguments and throws
//! clauses:
//!
//! ```text
//! 1: required string name = "anonymous" (go.tag = "name"),
//! ^  ^        ^      ^    ^ ^           ^                 ^
//! |  |        |      |    | default     annotations       separator
//! |  |        |      |    equal
//! |  |        type   identifier
//! |  qualifier
//! index
//! ```
//!
//! Only the type and the identifier are mandatory.

use super::super::kind::{Category, KeywordKind, NodeKind};
use super::super::location::Location;
use super::super::traits::{AstNode, Children};
use super::bad::{Parsed, Recoverable};
use super::const_value::ConstValue;
use super::field_type::FieldType;
use super::identifier::Identifier;
use super::tokens::{Comment, Keyword};
use super::trivia::{impl_decorated, Trivia};

/// `1:`
#[derive(Debug, Clone, PartialEq)]
pub struct FieldIndex {
    pub comments: Vec<Comment>,
    pub value: i64,
    pub colon: Keyword,
    pub location: Location,
}

impl FieldIndex {
    pub fn new(value: i64, colon: Keyword, comments: Vec<Comment>, location: Location) -> Self {
        Self {
            comments,
            value,
            colon,
            location,
        }
    }
}

impl AstNode for FieldIndex {
    fn kind(&self) -> NodeKind {
        NodeKind::FieldIndex
    }
    fn location(&self) -> &Location {
        &self.location
    }
    fn children(&self) -> Vec<&dyn AstNode> {
        Children::new()
            .all(&self.comments)
            .node(&self.colon)
            .finish()
    }
    fn is_invalid(&self) -> bool {
        false
    }
    fn display_label(&self) -> String {
        self.value.to_string()
    }
}

impl Recoverable for FieldIndex {
    const CATEGORY: Category = Category::FieldIndex;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Requiredness {
    Required,
    Optional,
    /// No qualifier written
    #[default]
    Default,
}

impl Requiredness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Requiredness::Required => "required",
            Requiredness::Optional => "optional",
            Requiredness::Default => "default",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub index: Option<Parsed<FieldIndex>>,
    /// `required` or `optional`
    pub qualifier: Option<Keyword>,
    pub field_type: Parsed<FieldType>,
    pub identifier: Parsed<Identifier>,
    pub equal: Option<Keyword>,
    pub default: Option<Parsed<ConstValue>>,
    pub separator: Option<Keyword>,
    pub trivia: Trivia,
    pub location: Location,
}

impl Field {
    pub fn new(
        index: Option<Parsed<FieldIndex>>,
        qualifier: Option<Keyword>,
        field_type: Parsed<FieldType>,
        identifier: Parsed<Identifier>,
        location: Location,
    ) -> Self {
        Self {
            index,
            qualifier,
            field_type,
            identifier,
            equal: None,
            default: None,
            separator: None,
            trivia: Trivia::default(),
            location,
        }
    }

    /// Attach `= value`.
    pub fn with_default(mut self, equal: Keyword, default: Parsed<ConstValue>) -> Self {
        self.location = self.location.cover(&equal.location).cover(default.location());
        self.equal = Some(equal);
        self.default = Some(default);
        self
    }

    pub fn with_separator(mut self, separator: Keyword) -> Self {
        self.location = self.location.cover(&separator.location);
        self.separator = Some(separator);
        self
    }

    /// Numeric id, when written and well-formed.
    pub fn index(&self) -> Option<i64> {
        self.index.as_ref().and_then(Parsed::node).map(|index| index.value)
    }

    pub fn requiredness(&self) -> Requiredness {
        match &self.qualifier {
            Some(keyword) if keyword.text == "required" => Requiredness::Required,
            Some(keyword) if keyword.text == "optional" => Requiredness::Optional,
            _ => Requiredness::Default,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.identifier.node().map(Identifier::text)
    }
}

impl AstNode for Field {
    fn kind(&self) -> NodeKind {
        NodeKind::Field
    }
    fn location(&self) -> &Location {
        &self.location
    }
    fn children(&self) -> Vec<&dyn AstNode> {
        let children = Children::new()
            .opt(self.index.as_ref())
            .opt(self.qualifier.as_ref())
            .node(&self.field_type)
            .node(&self.identifier)
            .opt(self.equal.as_ref())
            .opt(self.default.as_ref())
            .opt(self.separator.as_ref());
        self.trivia.collect(children).finish()
    }
    fn is_invalid(&self) -> bool {
        false
    }
    fn display_label(&self) -> String {
        let name = self.name().unwrap_or_default();
        match self.index() {
            Some(index) => format!("{}: {}", index, name),
            None => name.to_string(),
        }
    }
}

impl Recoverable for Field {
    const CATEGORY: Category = Category::Field;
}

impl_decorated!(Field);

/// The qualifier keyword, `required` or `optional`.
pub fn qualifier(text: &str, location: Location) -> Keyword {
    Keyword::new(KeywordKind::Required, text, location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thrift::ast::elements::trivia::Decorated;
    use crate::thrift::ast::elements::CommentStyle;
    use crate::thrift::ast::location::Position;
    use crate::thrift::testing::{field, FieldSpec};

    #[test]
    fn test_field_accessors() {
        let field = field(Position::START, &FieldSpec::new(1, "string", "name").required());

        assert_eq!(field.index(), Some(1));
        assert_eq!(field.name(), Some("name"));
        assert_eq!(field.requiredness(), Requiredness::Required);
        assert_eq!(field.display_label(), "1: name");
        assert!(!field.subtree_invalid());
    }

    #[test]
    fn test_field_children_in_source_order() {
        let field = field(Position::START, &FieldSpec::new(3, "i32", "age").optional());
        let kinds: Vec<_> = field.children().iter().map(|c| c.kind()).collect();

        assert_eq!(
            kinds,
            vec![
                NodeKind::FieldIndex,
                NodeKind::Keyword(KeywordKind::Required),
                NodeKind::FieldType,
                NodeKind::Identifier,
            ]
        );
        assert_eq!(field.requiredness(), Requiredness::Optional);
    }

    #[test]
    fn test_end_line_comment_widens_location() {
        let field = field(Position::START, &FieldSpec::new(1, "i64", "id"));
        let end = field.location.end;
        let comment_location = Location::compute(
            Position::new(end.line, end.column + 1, end.offset + 1),
            "// primary key",
        );
        let comment = Comment::new("// primary key", CommentStyle::SingleLine, comment_location);
        let field = field.with_comments(Vec::new(), vec![comment]);

        assert_eq!(field.location.end, comment_location.end);
        assert_eq!(field.end_line_comments().len(), 1);
        let last = field.children().last().map(|c| c.kind());
        assert_eq!(last, Some(NodeKind::Comment));
    }

    #[test]
    fn test_bad_index_keeps_field_valid() {
        let mut field = field(Position::START, &FieldSpec::new(1, "i64", "id"));
        let index_location = field.index.as_ref().map(|i| *i.location()).unwrap();
        field.index = Some(FieldIndex::bad(index_location));

        assert_eq!(field.index(), None);
        assert!(!field.is_invalid());
        assert!(field.subtree_invalid());
        assert_eq!(field.requiredness(), Requiredness::Default);
    }
}
