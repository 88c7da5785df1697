//! Position-based node lookup and traversal
//!
//! Hover, go-to-definition and diagnostics all start from a cursor position or from the
//! whole tree. These helpers work on any node through the [`AstNode`] contract.

use super::location::Position;
use super::traits::AstNode;

/// Path of nodes containing `pos`, from `root` down to the deepest one.
///
/// Children are searched even when `root` itself does not contain the position, since
/// top-level comments may lie outside a document's location.
pub fn node_path_at_position<'a>(root: &'a dyn AstNode, pos: Position) -> Vec<&'a dyn AstNode> {
    if pos.is_invalid() {
        return Vec::new();
    }
    for child in root.children() {
        let path = node_path_at_position(child, pos);
        if !path.is_empty() {
            let mut nodes: Vec<&dyn AstNode> = Vec::with_capacity(path.len() + 1);
            nodes.push(root);
            nodes.extend(path);
            return nodes;
        }
    }
    if root.contains(pos) {
        vec![root]
    } else {
        Vec::new()
    }
}

/// Deepest node containing `pos`.
pub fn find_node_at_position(root: &dyn AstNode, pos: Position) -> Option<&dyn AstNode> {
    node_path_at_position(root, pos).pop()
}

/// `root` and all of its descendants, depth-first pre-order.
pub fn iter_all_nodes(root: &dyn AstNode) -> Vec<&dyn AstNode> {
    let mut nodes = Vec::new();
    collect(root, &mut nodes);
    nodes
}

fn collect<'a>(node: &'a dyn AstNode, nodes: &mut Vec<&'a dyn AstNode>) {
    nodes.push(node);
    for child in node.children() {
        collect(child, nodes);
    }
}

/// Descendants of `root` that failed to parse, in pre-order. Empty exactly when
/// `root.subtree_invalid()` is false.
pub fn invalid_nodes(root: &dyn AstNode) -> Vec<&dyn AstNode> {
    iter_all_nodes(root)
        .into_iter()
        .skip(1)
        .filter(|node| node.is_invalid())
        .collect()
}
