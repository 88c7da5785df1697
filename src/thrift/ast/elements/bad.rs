//! Bad nodes
//!
//!     When a construct fails to parse, the grammar engine still gets a node for it: a
//!     placeholder that covers the text it could not make sense of and nothing else. Building
//!     never aborts, so everything around the failure keeps its structure.
//!
//!     A placeholder never has structured children. Recovery is expressed as "this whole
//!     construct is opaque" at the smallest enclosing category, never as a half-filled node
//!     whose fields could be mistaken for valid data. That is enforced by the types: slots
//!     that may fail hold a [`Parsed<T>`], which is either the node or a [`BadNode`] carrying
//!     only its category and location.
//!
//!     A valid node may hold a bad child, e.g. a struct with one malformed field. The struct
//!     stays valid and usable for symbols and formatting, while `subtree_invalid()` on it
//!     surfaces the nested failure for diagnostics:
//!
//!         struct User {            Struct            is_invalid = false
//!           1: string name         ├─ Field                        subtree_invalid = true
//!           2: ??? broken          ├─ BadField       is_invalid = true
//!           3: i32 age             └─ Field
//!         }
//!
//!     Leaf tokens (keywords, comments, names, literal text) do not need the wrapper, they
//!     carry the invalid flag themselves.

use super::super::kind::{Category, NodeKind};
use super::super::location::Location;
use super::super::traits::AstNode;

/// Placeholder for a construct that failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadNode {
    pub category: Category,
    pub location: Location,
}

impl BadNode {
    pub fn new(category: Category, location: Location) -> Self {
        Self { category, location }
    }
}

impl AstNode for BadNode {
    fn kind(&self) -> NodeKind {
        NodeKind::Bad(self.category)
    }
    fn location(&self) -> &Location {
        &self.location
    }
    fn children(&self) -> Vec<&dyn AstNode> {
        Vec::new()
    }
    fn is_invalid(&self) -> bool {
        true
    }
    fn subtree_invalid(&self) -> bool {
        false
    }
}

/// A slot holding either a successfully built node or the placeholder that replaced it
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed<T> {
    Node(T),
    Bad(BadNode),
}

impl<T> Parsed<T> {
    pub fn node(&self) -> Option<&T> {
        match self {
            Parsed::Node(node) => Some(node),
            Parsed::Bad(_) => None,
        }
    }

    pub fn into_node(self) -> Option<T> {
        match self {
            Parsed::Node(node) => Some(node),
            Parsed::Bad(_) => None,
        }
    }

    pub fn bad_node(&self) -> Option<&BadNode> {
        match self {
            Parsed::Node(_) => None,
            Parsed::Bad(bad) => Some(bad),
        }
    }

    pub fn is_bad(&self) -> bool {
        matches!(self, Parsed::Bad(_))
    }
}

impl<T> From<T> for Parsed<T> {
    fn from(node: T) -> Self {
        Parsed::Node(node)
    }
}

impl<T: AstNode> AstNode for Parsed<T> {
    fn kind(&self) -> NodeKind {
        match self {
            Parsed::Node(node) => node.kind(),
            Parsed::Bad(bad) => bad.kind(),
        }
    }
    fn location(&self) -> &Location {
        match self {
            Parsed::Node(node) => node.location(),
            Parsed::Bad(bad) => bad.location(),
        }
    }
    fn children(&self) -> Vec<&dyn AstNode> {
        match self {
            Parsed::Node(node) => node.children(),
            Parsed::Bad(bad) => bad.children(),
        }
    }
    fn is_invalid(&self) -> bool {
        match self {
            Parsed::Node(node) => node.is_invalid(),
            Parsed::Bad(bad) => bad.is_invalid(),
        }
    }
    fn subtree_invalid(&self) -> bool {
        match self {
            Parsed::Node(node) => node.subtree_invalid(),
            Parsed::Bad(bad) => bad.subtree_invalid(),
        }
    }
    fn display_label(&self) -> String {
        match self {
            Parsed::Node(node) => node.display_label(),
            Parsed::Bad(bad) => bad.display_label(),
        }
    }
}

/// Node types with a dedicated placeholder category
pub trait Recoverable: AstNode + Sized {
    const CATEGORY: Category;

    /// The placeholder for this construct, covering whatever text could be attributed to it.
    fn bad(location: Location) -> Parsed<Self> {
        Parsed::Bad(BadNode::new(Self::CATEGORY, location))
    }
}
