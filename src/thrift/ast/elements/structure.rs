//! Structs, unions and exceptions
//!
//! The three declarations share one shape, a keyword, a name and a braced field list:
//!
//! ```text
//! struct User {
//!   1: string name
//! }
//! ```
//!
//! A malformed field inside the braces becomes a `BadField` child in its source position;
//! the declaration itself stays valid.

use super::super::kind::{Category, NodeKind};
use super::super::location::Location;
use super::super::traits::{AstNode, Children};
use super::bad::{Parsed, Recoverable};
use super::field::Field;
use super::identifier::Identifier;
use super::tokens::Keyword;
use super::trivia::{impl_decorated, Trivia};

macro_rules! field_container {
    ($(#[$meta:meta])* $name:ident, $kind:expr, $category:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            pub keyword: Keyword,
            pub identifier: Parsed<Identifier>,
            pub lcur: Keyword,
            pub fields: Vec<Parsed<Field>>,
            pub rcur: Keyword,
            pub trivia: Trivia,
            pub location: Location,
        }

        impl $name {
            pub fn new(
                keyword: Keyword,
                identifier: Parsed<Identifier>,
                lcur: Keyword,
                fields: Vec<Parsed<Field>>,
                rcur: Keyword,
                location: Location,
            ) -> Self {
                Self {
                    keyword,
                    identifier,
                    lcur,
                    fields,
                    rcur,
                    trivia: Trivia::default(),
                    location,
                }
            }

            pub fn name(&self) -> Option<&str> {
                self.identifier.node().map(Identifier::text)
            }

            /// Well-formed fields, skipping placeholders.
            pub fn valid_fields(&self) -> impl Iterator<Item = &Field> {
                self.fields.iter().filter_map(Parsed::node)
            }

            pub fn field(&self, name: &str) -> Option<&Field> {
                self.valid_fields().find(|field| field.name() == Some(name))
            }
        }

        impl AstNode for $name {
            fn kind(&self) -> NodeKind {
                $kind
            }
            fn location(&self) -> &Location {
                &self.location
            }
            fn children(&self) -> Vec<&dyn AstNode> {
                let children = Children::new()
                    .node(&self.keyword)
                    .node(&self.identifier)
                    .node(&self.lcur)
                    .all(&self.fields)
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

        impl Recoverable for $name {
            const CATEGORY: Category = $category;
        }

        impl_decorated!($name);
    };
}

field_container!(Struct, NodeKind::Struct, Category::Struct);
field_container!(
    /// A union; at most one field is set at a time
    Union,
    NodeKind::Union,
    Category::Union
);
field_container!(Exception, NodeKind::Exception, Category::Exception);
