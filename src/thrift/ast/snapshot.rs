//! AST Snapshot - a normalized intermediate representation of the AST tree
//!
//! This module provides a canonical, format-agnostic representation of a thrift tree
//! suitable for serialization to any output format (JSON, YAML, treeviz).
//!
//! The snapshot captures node types, labels, locations, validity and children, so each
//! serializer only deals with presentation. Snapshots are built through the [`AstNode`]
//! contract alone, which means every node type is covered without a per-type builder.
//!
//! ## Options
//!
//! Keywords and comments make up most of a tree's nodes but rarely matter when reading it.
//! They are left out unless [`SnapshotOptions::include_tokens`] is set.

use super::elements::Document;
use super::kind::NodeKind;
use super::location::Location;
use super::traits::AstNode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A snapshot of an AST node in a normalized, serializable form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AstSnapshot {
    /// Stable type name, e.g. "Struct", "StructKeyword", "BadField"
    pub node_type: String,

    /// The node's display label
    pub label: String,

    pub location: Location,

    /// Whether the node itself failed to parse
    pub invalid: bool,

    /// Additional attributes, sorted by key
    pub attributes: BTreeMap<String, String>,

    pub children: Vec<AstSnapshot>,
}

impl AstSnapshot {
    pub fn new(node_type: impl Into<String>, label: impl Into<String>, location: Location) -> Self {
        Self {
            node_type: node_type.into(),
            label: label.into(),
            location,
            invalid: false,
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_children(mut self, children: Vec<AstSnapshot>) -> Self {
        self.children.extend(children);
        self
    }
}

/// What a snapshot keeps of the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct SnapshotOptions {
    /// Keep keyword, punctuation and comment leaves.
    pub include_tokens: bool,
}

impl SnapshotOptions {
    pub fn with_tokens() -> Self {
        Self {
            include_tokens: true,
        }
    }

    fn keeps(&self, node: &dyn AstNode) -> bool {
        self.include_tokens || !is_token(node.kind())
    }
}

fn is_token(kind: NodeKind) -> bool {
    matches!(kind, NodeKind::Keyword(_) | NodeKind::Comment)
}

/// Snapshot of `node` and the descendants the options keep.
///
/// Validity is gathered in the same pass, dropped tokens included, so `subtree_invalid`
/// is never recomputed per node.
pub fn snapshot_node(node: &dyn AstNode, options: &SnapshotOptions) -> AstSnapshot {
    build(node, options).0
}

/// The snapshot, and whether `node` or any descendant failed to parse.
fn build(node: &dyn AstNode, options: &SnapshotOptions) -> (AstSnapshot, bool) {
    let mut children = Vec::new();
    let mut subtree_invalid = false;
    for child in node.children() {
        let (snapshot, invalid) = build(child, options);
        subtree_invalid |= invalid;
        if options.keeps(child) {
            children.push(snapshot);
        }
    }

    let mut snapshot = AstSnapshot::new(node.node_type(), node.display_label(), *node.location())
        .with_children(children);
    snapshot.invalid = node.is_invalid();
    if subtree_invalid {
        snapshot = snapshot.with_attribute("subtree_invalid", "true");
    }
    let invalid = snapshot.invalid || subtree_invalid;
    (snapshot, invalid)
}

/// Snapshot of a whole document, with its bucket counts as attributes.
pub fn snapshot_from_document(doc: &Document, options: &SnapshotOptions) -> AstSnapshot {
    let mut snapshot = snapshot_node(doc, options)
        .with_attribute("headers", doc.iter_headers().count().to_string())
        .with_attribute("definitions", doc.iter_definitions().count().to_string())
        .with_attribute("comments", doc.iter_comments().count().to_string());
    if let Some(filename) = &doc.filename {
        snapshot = snapshot.with_attribute("filename", filename.clone());
    }
    snapshot
}
