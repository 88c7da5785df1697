//! Document element
//!
//! The document is the root of every tree. It owns the top-level items in one ordered list,
//! [`Document::nodes`], and classifies them into typed buckets when it is built:
//!
//! - headers: includes, cpp includes, namespaces, malformed headers
//! - definitions: consts, typedefs, enums, structs, unions, exceptions, services, malformed
//!   definitions
//! - comments not attached to any declaration
//!
//! The buckets are views: they hold indices into `nodes`, so every item has exactly one owner
//! and the bucket iterators hand out the same instances the ordered list does.
//!
//! `nodes` keeps the order items were given in (headers, then definitions, then comments).
//! `children()` returns the same items sorted by position, like every other node.

use super::super::error::PositionLookupError;
use super::super::kind::NodeKind;
use super::super::location::{Location, Position};
use super::super::lookup;
use super::super::traits::{AstNode, Children};
use super::bad::BadNode;
use super::definition::{Const, Definition, Typedef};
use super::enumeration::Enum;
use super::header::{CppInclude, Header, Include, Namespace};
use super::service::Service;
use super::structure::{Exception, Struct, Union};
use super::tokens::Comment;
use log::{debug, trace};
use std::fmt;

/// A top-level item of a document
#[derive(Debug, Clone, PartialEq)]
pub enum TopLevel {
    Header(Header),
    Definition(Definition),
    Comment(Comment),
}

impl TopLevel {
    fn as_node(&self) -> &dyn AstNode {
        match self {
            TopLevel::Header(header) => header,
            TopLevel::Definition(definition) => definition,
            TopLevel::Comment(comment) => comment,
        }
    }
}

impl AstNode for TopLevel {
    fn kind(&self) -> NodeKind {
        self.as_node().kind()
    }
    fn location(&self) -> &Location {
        match self {
            TopLevel::Header(header) => header.location(),
            TopLevel::Definition(definition) => definition.location(),
            TopLevel::Comment(comment) => &comment.location,
        }
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

#[derive(Debug, Clone, PartialEq, Default)]
struct Buckets {
    includes: Vec<usize>,
    cpp_includes: Vec<usize>,
    namespaces: Vec<usize>,
    bad_headers: Vec<usize>,
    consts: Vec<usize>,
    typedefs: Vec<usize>,
    enums: Vec<usize>,
    structs: Vec<usize>,
    unions: Vec<usize>,
    exceptions: Vec<usize>,
    services: Vec<usize>,
    bad_definitions: Vec<usize>,
    comments: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub filename: Option<String>,
    nodes: Vec<TopLevel>,
    buckets: Buckets,
    pub location: Location,
}

/// Iterator over the items of one bucket, narrowed to the variant the bucket holds.
macro_rules! bucket_iter {
    ($name:ident, $bucket:ident, $item:ty, $pattern:pat => $node:ident) => {
        pub fn $name(&self) -> impl Iterator<Item = &$item> {
            self.buckets
                .$bucket
                .iter()
                .filter_map(move |&index| match &self.nodes[index] {
                    $pattern => Some($node),
                    _ => None,
                })
        }
    };
}

impl Document {
    /// Classify `headers`, `definitions` and unattached `comments` into one document.
    pub fn new(
        headers: Vec<Header>,
        definitions: Vec<Definition>,
        comments: Vec<Comment>,
        location: Location,
    ) -> Self {
        let header_count = headers.len();
        let definition_count = definitions.len();
        let mut nodes = Vec::with_capacity(header_count + definition_count + comments.len());
        let mut buckets = Buckets::default();

        for header in headers {
            let index = nodes.len();
            let bucket = match header.kind() {
                NodeKind::Include => &mut buckets.includes,
                NodeKind::CppInclude => &mut buckets.cpp_includes,
                NodeKind::Namespace => &mut buckets.namespaces,
                _ => &mut buckets.bad_headers,
            };
            trace!("header #{} {} at {}", index, header.node_type(), header.location());
            bucket.push(index);
            nodes.push(TopLevel::Header(header));
        }

        for definition in definitions {
            let index = nodes.len();
            let bucket = match definition.kind() {
                NodeKind::Const => &mut buckets.consts,
                NodeKind::Typedef => &mut buckets.typedefs,
                NodeKind::Enum => &mut buckets.enums,
                NodeKind::Struct => &mut buckets.structs,
                NodeKind::Union => &mut buckets.unions,
                NodeKind::Exception => &mut buckets.exceptions,
                NodeKind::Service => &mut buckets.services,
                _ => &mut buckets.bad_definitions,
            };
            trace!(
                "definition #{} {} at {}",
                index,
                definition.node_type(),
                definition.location()
            );
            bucket.push(index);
            nodes.push(TopLevel::Definition(definition));
        }

        for comment in comments {
            buckets.comments.push(nodes.len());
            nodes.push(TopLevel::Comment(comment));
        }

        debug!(
            "document built: {} headers ({} malformed), {} definitions ({} malformed), {} comments",
            header_count,
            buckets.bad_headers.len(),
            definition_count,
            buckets.bad_definitions.len(),
            buckets.comments.len()
        );

        Self {
            filename: None,
            nodes,
            buckets,
            location,
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Every top-level item, in the order given to [`Document::new`].
    pub fn nodes(&self) -> &[TopLevel] {
        &self.nodes
    }

    pub fn iter_headers(&self) -> impl Iterator<Item = &Header> {
        self.nodes.iter().filter_map(|node| match node {
            TopLevel::Header(header) => Some(header),
            _ => None,
        })
    }

    pub fn iter_definitions(&self) -> impl Iterator<Item = &Definition> {
        self.nodes.iter().filter_map(|node| match node {
            TopLevel::Definition(definition) => Some(definition),
            _ => None,
        })
    }

    bucket_iter!(iter_includes, includes, Include, TopLevel::Header(Header::Include(node)) => node);
    bucket_iter!(iter_cpp_includes, cpp_includes, CppInclude, TopLevel::Header(Header::CppInclude(node)) => node);
    bucket_iter!(iter_namespaces, namespaces, Namespace, TopLevel::Header(Header::Namespace(node)) => node);
    bucket_iter!(iter_bad_headers, bad_headers, BadNode, TopLevel::Header(Header::Bad(node)) => node);
    bucket_iter!(iter_consts, consts, Const, TopLevel::Definition(Definition::Const(node)) => node);
    bucket_iter!(iter_typedefs, typedefs, Typedef, TopLevel::Definition(Definition::Typedef(node)) => node);
    bucket_iter!(iter_enums, enums, Enum, TopLevel::Definition(Definition::Enum(node)) => node);
    bucket_iter!(iter_structs, structs, Struct, TopLevel::Definition(Definition::Struct(node)) => node);
    bucket_iter!(iter_unions, unions, Union, TopLevel::Definition(Definition::Union(node)) => node);
    bucket_iter!(iter_exceptions, exceptions, Exception, TopLevel::Definition(Definition::Exception(node)) => node);
    bucket_iter!(iter_services, services, Service, TopLevel::Definition(Definition::Service(node)) => node);
    bucket_iter!(iter_bad_definitions, bad_definitions, BadNode, TopLevel::Definition(Definition::Bad(node)) => node);
    bucket_iter!(iter_comments, comments, Comment, TopLevel::Comment(node) => node);

    /// First well-formed definition declaring `name`.
    pub fn find_definition(&self, name: &str) -> Option<&Definition> {
        self.iter_definitions()
            .find(|definition| definition.name() == Some(name))
    }

    /// Include whose file stem is `name`, as used by qualified references (`shared.User`).
    pub fn find_include(&self, name: &str) -> Option<&Include> {
        self.iter_includes().find(|include| include.name() == Some(name))
    }

    /// Deepest node containing `pos`.
    pub fn node_at(&self, pos: Position) -> Result<&dyn AstNode, PositionLookupError> {
        if pos.is_invalid() {
            return Err(PositionLookupError::invalid(pos));
        }
        lookup::find_node_at_position(self, pos).ok_or_else(|| PositionLookupError::not_found(pos))
    }

    /// Whether any item failed to parse, at any depth.
    pub fn has_errors(&self) -> bool {
        self.subtree_invalid()
    }

    /// Short description of the nodes at `pos`, root first.
    pub fn format_at_position(&self, pos: Position) -> String {
        let path = lookup::node_path_at_position(self, pos);
        if path.is_empty() {
            return format!("No node at {}", pos);
        }
        path.iter()
            .map(|node| {
                let label = node.display_label();
                if label.is_empty() {
                    node.node_type().to_string()
                } else {
                    format!("{} ({})", node.node_type(), label)
                }
            })
            .collect::<Vec<_>>()
            .join(" > ")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Location::empty(Position::START),
        )
    }
}

impl AstNode for Document {
    fn kind(&self) -> NodeKind {
        NodeKind::Document
    }
    fn location(&self) -> &Location {
        &self.location
    }
    fn children(&self) -> Vec<&dyn AstNode> {
        Children::new().all(&self.nodes).finish()
    }
    fn is_invalid(&self) -> bool {
        false
    }
    fn display_label(&self) -> String {
        self.filename.clone().unwrap_or_default()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Document({} headers, {} definitions, {} comments)",
            self.iter_headers().count(),
            self.iter_definitions().count(),
            self.buckets.comments.len()
        )
    }
}
