//! Element-specific AST node definitions for thrift
//!
//!     This module defines all node types of a thrift tree. It is the entry point for
//!     understanding how a thrift file is represented.
//!
//! Element Types
//!
//!     There are four families of elements: tokens, components, declarations and the document.
//!
//!     Tokens:
//!         Leaves with fixed text and no children: keywords and punctuation, comments, and the
//!         name tokens inside identifiers, literals and type names. Tokens carry their own
//!         invalid flag. See [tokens](tokens).
//!
//!     Components:
//!         Small composites reused by declarations: identifiers, literals, annotation blocks,
//!         field types and const values. See [identifier](identifier), [literal](literal),
//!         [annotation](annotation), [field_type](field_type) and [const_value](const_value).
//!
//!     Declarations:
//!         - Headers: include, cpp_include and namespace. See [header](header).
//!         - Consts and typedefs. See [definition](definition).
//!         - Structs, unions and exceptions, which hold fields. See [structure](structure) and
//!           [field](field).
//!         - Enums, which hold enum values. See [enumeration](enumeration).
//!         - Services, which hold functions, which may declare a throws clause. See
//!           [service](service).
//!
//!     Document:
//!         The root, classifying top-level declarations. See [document](document).
//!
//! Recovery
//!
//!     Every slot where a construct may fail to parse holds a [`Parsed<T>`]: the node, or a bad
//!     placeholder with nothing but a category and a location. See [bad](bad).
//!
//! Children
//!
//!     Each node lists its children in ascending source order: leading comments, keywords,
//!     name, delimiters and nested elements, annotation block, then end-of-line comments. A
//!     child always lies within its parent's location, which is why attaching comments or
//!     annotations after construction widens the parent (see [trivia](trivia)).

pub mod annotation;
pub mod bad;
pub mod const_value;
pub mod definition;
pub mod document;
pub mod enumeration;
pub mod field;
pub mod field_type;
pub mod header;
pub mod identifier;
pub mod literal;
pub mod service;
pub mod structure;
pub mod tokens;
pub mod trivia;

pub use annotation::{Annotation, Annotations};
pub use bad::{BadNode, Parsed, Recoverable};
pub use const_value::{ConstValue, ConstValueKind};
pub use definition::{Const, Definition, Typedef};
pub use document::{Document, TopLevel};
pub use enumeration::{implicit_value, Enum, EnumValue};
pub use field::{Field, FieldIndex, Requiredness};
pub use field_type::{BaseType, ContainerType, CppType, FieldType, TypeKind, TypeName};
pub use header::{CppInclude, Header, Include, Namespace};
pub use identifier::{Identifier, IdentifierName};
pub use literal::{Literal, LiteralValue, Quote};
pub use service::{Function, FunctionReturn, Service, Throws};
pub use structure::{Exception, Struct, Union};
pub use tokens::{Comment, CommentStyle, Keyword};
pub use trivia::{Decorated, Trivia};
