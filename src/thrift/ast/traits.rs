//! AST traits - Common interfaces for uniform node access
//!
//! [`AstNode`] is the whole surface the presentation layer sees: position queries, child
//! enumeration, the kind tag and the two validity checks. Every concrete node implements it,
//! and the enums that wrap nodes (`Header`, `Definition`, `TopLevel`, `Parsed`) delegate to
//! the node they hold.

use super::kind::NodeKind;
use super::location::{Location, Position};

/// Common interface for all AST nodes
pub trait AstNode {
    fn kind(&self) -> NodeKind;

    fn location(&self) -> &Location;

    /// Children in ascending source order. Never contains absent entries.
    fn children(&self) -> Vec<&dyn AstNode>;

    /// Whether this node itself failed to parse. Says nothing about descendants.
    fn is_invalid(&self) -> bool;

    /// Position of the first character of this node.
    fn position(&self) -> Position {
        self.location().start
    }

    /// Position immediately after this node.
    fn end(&self) -> Position {
        self.location().end
    }

    fn contains(&self, pos: Position) -> bool {
        self.location().contains(pos)
    }

    /// Whether any descendant failed to parse.
    ///
    /// Recomputed on every call, O(size of the subtree). Callers that check repeatedly
    /// should keep the answer.
    fn subtree_invalid(&self) -> bool {
        self.children()
            .iter()
            .any(|child| child.is_invalid() || child.subtree_invalid())
    }

    fn node_type(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Short human readable label, used by tree renderings.
    fn display_label(&self) -> String {
        String::new()
    }
}

/// Visitor trait for traversing the AST
///
/// `enter` is called before a node's children, `leave` after them. Returning `false` from
/// `enter` skips the children (and the matching `leave`).
///
/// # Example
///
/// ```ignore
/// struct Counter(usize);
///
/// impl Visitor for Counter {
///     fn enter(&mut self, node: &dyn AstNode) -> bool {
///         self.0 += 1;
///         true
///     }
/// }
///
/// let mut counter = Counter(0);
/// walk(&document, &mut counter);
/// ```
pub trait Visitor {
    fn enter(&mut self, _node: &dyn AstNode) -> bool {
        true
    }

    fn leave(&mut self, _node: &dyn AstNode) {}
}

/// Depth-first walk over `node` and its descendants.
pub fn walk(node: &dyn AstNode, visitor: &mut dyn Visitor) {
    if !visitor.enter(node) {
        return;
    }
    for child in node.children() {
        walk(child, visitor);
    }
    visitor.leave(node);
}

/// Collects a node's children and hands them back in source order
pub(crate) struct Children<'a> {
    nodes: Vec<&'a dyn AstNode>,
}

impl<'a> Children<'a> {
    pub(crate) fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub(crate) fn node(mut self, node: &'a dyn AstNode) -> Self {
        self.nodes.push(node);
        self
    }

    pub(crate) fn opt<T: AstNode>(mut self, node: Option<&'a T>) -> Self {
        if let Some(node) = node {
            self.nodes.push(node);
        }
        self
    }

    pub(crate) fn all<T: AstNode>(mut self, nodes: &'a [T]) -> Self {
        self.nodes.extend(nodes.iter().map(|node| node as &dyn AstNode));
        self
    }

    /// Stable sort by start position: nodes pushed in source order stay put, and
    /// synthetic empty-span tokens land where they were attributed.
    pub(crate) fn finish(mut self) -> Vec<&'a dyn AstNode> {
        self.nodes.sort_by_key(|node| node.position());
        self.nodes
    }
}
