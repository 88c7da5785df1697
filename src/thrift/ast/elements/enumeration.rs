//! Enums
//!
//! ```text
//! enum Status {
//!   ACTIVE = 1,
//!   DISABLED,        // resolved to 2
//! }
//! ```
//!
//! An enum value keeps the literal that was written (`value_node`) apart from its resolved
//! integer (`value`). The resolved value of an unassigned entry is chosen by whoever builds
//! the tree; [`implicit_value`] gives the usual rule.

use super::super::kind::{Category, NodeKind};
use super::super::location::Location;
use super::super::traits::{AstNode, Children};
use super::bad::{Parsed, Recoverable};
use super::const_value::ConstValue;
use super::identifier::Identifier;
use super::tokens::Keyword;
use super::trivia::{impl_decorated, Trivia};

#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
    pub identifier: Parsed<Identifier>,
    pub equal: Option<Keyword>,
    pub value_node: Option<Parsed<ConstValue>>,
    pub value: i64,
    pub separator: Option<Keyword>,
    pub trivia: Trivia,
    pub location: Location,
}

impl EnumValue {
    pub fn new(identifier: Parsed<Identifier>, value: i64, location: Location) -> Self {
        Self {
            identifier,
            equal: None,
            value_node: None,
            value,
            separator: None,
            trivia: Trivia::default(),
            location,
        }
    }

    /// Value written explicitly as `NAME = literal`.
    pub fn assigned(
        identifier: Parsed<Identifier>,
        equal: Keyword,
        value_node: Parsed<ConstValue>,
        value: i64,
        location: Location,
    ) -> Self {
        Self {
            equal: Some(equal),
            value_node: Some(value_node),
            ..Self::new(identifier, value, location)
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

    pub fn is_explicit(&self) -> bool {
        self.value_node.is_some()
    }
}

impl AstNode for EnumValue {
    fn kind(&self) -> NodeKind {
        NodeKind::EnumValue
    }
    fn location(&self) -> &Location {
        &self.location
    }
    fn children(&self) -> Vec<&dyn AstNode> {
        let children = Children::new()
            .node(&self.identifier)
            .opt(self.equal.as_ref())
            .opt(self.value_node.as_ref())
            .opt(self.separator.as_ref());
        self.trivia.collect(children).finish()
    }
    fn is_invalid(&self) -> bool {
        false
    }
    fn display_label(&self) -> String {
        format!("{} = {}", self.name().unwrap_or_default(), self.value)
    }
}

impl Recoverable for EnumValue {
    const CATEGORY: Category = Category::EnumValue;
}

/// Value of an entry written without `= literal`: one past the previous entry, 0 for the
/// first one.
pub fn implicit_value(previous: Option<&EnumValue>) -> i64 {
    previous.map_or(0, |value| value.value.saturating_add(1))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enum {
    pub keyword: Keyword,
    pub identifier: Parsed<Identifier>,
    pub lcur: Keyword,
    pub values: Vec<Parsed<EnumValue>>,
    pub rcur: Keyword,
    pub trivia: Trivia,
    pub location: Location,
}

impl Enum {
    pub fn new(
        keyword: Keyword,
        identifier: Parsed<Identifier>,
        lcur: Keyword,
        values: Vec<Parsed<EnumValue>>,
        rcur: Keyword,
        location: Location,
    ) -> Self {
        Self {
            keyword,
            identifier,
            lcur,
            values,
            rcur,
            trivia: Trivia::default(),
            location,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.identifier.node().map(Identifier::text)
    }

    pub fn valid_values(&self) -> impl Iterator<Item = &EnumValue> {
        self.values.iter().filter_map(Parsed::node)
    }

    /// Resolved value of the entry named `name`.
    pub fn value_of(&self, name: &str) -> Option<i64> {
        self.valid_values()
            .find(|value| value.name() == Some(name))
            .map(|value| value.value)
    }
}

impl AstNode for Enum {
    fn kind(&self) -> NodeKind {
        NodeKind::Enum
    }
    fn location(&self) -> &Location {
        &self.location
    }
    fn children(&self) -> Vec<&dyn AstNode> {
        let children = Children::new()
            .node(&self.keyword)
            .node(&self.identifier)
            .node(&self.lcur)
            .all(&self.values)
            .node(&self.rcur);
        self.trivia.collect(children).finish()
    }
    fn is_invalid(&self) -> bool {
        false
    }
    fn display_label(&self) -> String {
        self.name().unwrap_or_default().to_string()
    }
}

impl Recoverable for Enum {
    const CATEGORY: Category = Category::Enum;
}

impl_decorated!(Enum, EnumValue);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thrift::ast::location::Position;
    use crate::thrift::testing::enumeration;

    #[test]
    fn test_resolved_values() {
        let status = enumeration(
            Position::START,
            "Status",
            &[("ACTIVE", Some(1)), ("DISABLED", None), ("DELETED", Some(10)), ("GONE", None)],
        );

        assert_eq!(status.value_of("ACTIVE"), Some(1));
        assert_eq!(status.value_of("DISABLED"), Some(2));
        assert_eq!(status.value_of("GONE"), Some(11));
        assert_eq!(status.value_of("MISSING"), None);

        let explicit: Vec<_> = status.valid_values().map(EnumValue::is_explicit).collect();
        assert_eq!(explicit, vec![true, false, true, false]);
    }

    #[test]
    fn test_implicit_first_value_is_zero() {
        let empty = enumeration(Position::START, "E", &[("A", None)]);
        assert_eq!(empty.value_of("A"), Some(0));
        assert_eq!(implicit_value(None), 0);
    }

    #[test]
    fn test_enum_value_children() {
        let status = enumeration(Position::START, "Status", &[("ACTIVE", Some(1))]);
        let value = status.valid_values().next().unwrap();
        let kinds: Vec<_> = value.children().iter().map(|c| c.node_type()).collect();

        assert_eq!(
            kinds,
            vec!["Identifier", "EqualKeyword", "ConstValue", "ListSeparator"]
        );
        assert_eq!(value.display_label(), "ACTIVE = 1");
        assert_eq!(value.location.end, value.separator.as_ref().unwrap().location.end);
        assert!(!status.subtree_invalid());
    }
}
