//! AST definitions and utilities for thrift
//!
//!     This module provides the syntax tree a thrift front end builds while it parses a file,
//!     along with utilities for tracking source positions, walking trees and looking nodes up
//!     by position.
//!
//! Error tolerance
//!
//!     Editor tooling needs a tree for files that are broken mid-edit. Building never fails:
//!     every construct that does not parse becomes a bad placeholder at the smallest
//!     enclosing category, and everything around it keeps its structure. `is_invalid()` is
//!     exact for the node itself, `subtree_invalid()` reports failures buried below it.
//!
//!     See [bad](elements::bad) for the placeholder model.
//!
//! Lifecycle
//!
//!     Nodes are created once, bottom-up, by the grammar engine and never mutated after the
//!     document is built. Re-parsing a file builds a new [`Document`]; the old one is dropped.
//!     A built document is `Send + Sync` and can be read from several threads at once.
//!
//! ## How Location Tracking Works
//!
//! Every node carries a half-open [`Location`]. Leaf locations come from the text each
//! token matched:
//!
//! ```text
//! Source: "struct Foo {\n  1: string a\n}"
//!
//! Location::compute(1:1, "struct")     -> 1:1..1:7
//! Location::compute(1:1, <whole text>) -> 1:1..3:2
//! ```
//!
//! Composite locations span from their first to their last token, and contain the
//! locations of all their children.
//!
//! ## Modules
//!
//! - `location` - Position and Location types, span arithmetic, offset conversion
//! - `kind` - Static type tags of nodes
//! - `traits` - The node contract (AstNode) and tree walking (Visitor)
//! - `elements` - Node type definitions organized by element type
//! - `lookup` - Position-based node lookup and pre-order traversal
//! - `snapshot` - Normalized intermediate representation for serialization
//! - `error` - Error types for AST operations

pub mod elements;
pub mod error;
pub mod kind;
pub mod location;
pub mod lookup;
pub mod snapshot;
pub mod traits;

// Re-export commonly used types at module root
pub use elements::{
    implicit_value, Annotation, Annotations, BadNode, BaseType, Comment, CommentStyle, Const,
    ConstValue, ConstValueKind, ContainerType, CppInclude, CppType, Decorated, Definition,
    Document, Enum, EnumValue, Exception, Field, FieldIndex, FieldType, Function, FunctionReturn,
    Header, Identifier, IdentifierName, Include, Keyword, Literal, LiteralValue, Namespace, Parsed,
    Quote, Recoverable, Requiredness, Service, Struct, Throws, TopLevel, TypeKind, TypeName,
    Typedef, Union,
};
pub use error::{FormatError, PositionLookupError};
pub use kind::{Category, KeywordKind, NodeKind};
pub use location::{Cursor, Location, Position, SourceMap};
pub use lookup::{find_node_at_position, invalid_nodes, iter_all_nodes, node_path_at_position};
pub use snapshot::{snapshot_from_document, snapshot_node, AstSnapshot, SnapshotOptions};
pub use traits::{walk, AstNode, Visitor};
