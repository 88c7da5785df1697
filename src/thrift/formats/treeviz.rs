//! Treeviz formatter for thrift trees
//!
//! Treeviz is a one line per node rendering, which makes a tree quick to scan. Nesting is
//! drawn with box connectors, each line carries an icon for its node type and a label
//! truncated to 30 characters. Nodes that failed to parse are marked with `✗`.
//!
//!     ⧉ user.thrift
//!     ├─ ⇲ Include shared.thrift
//!     │ └─ ❝ Literal "shared.thrift"
//!     └─ § Struct User
//!       ├─ ◈ Identifier User
//!       ├─ ◦ Field 1: name
//!       │ ...
//!       └─ ◦ BadField ✗
//!
//! Icons
//!     Headers: Include ⇲, CPPInclude ⇲, Namespace ⌂
//!     Definitions: Const π, Typedef ≡, Enum ☰, EnumValue •, Struct §, Union ∪,
//!         Exception ⚠, Service ⚙, Function ƒ, Throws ↯, Field ◦
//!     Components: FieldType τ, ConstValue ∷, Identifier ◈, Literal ❝, Annotations @,
//!         Annotation @
//!     Tokens: Comment #, keywords ·
//!     Bad placeholders use the icon of the category they stand in for.

use crate::thrift::ast::{snapshot_from_document, AstSnapshot, Document, SnapshotOptions};
use serde::Deserialize;

const LABEL_WIDTH: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct TreevizOptions {
    /// Prefix each line with the node's start line.
    pub show_linum: bool,
    /// Render keyword and comment leaves too.
    pub include_tokens: bool,
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon(node_type: &str) -> &'static str {
    let node_type = node_type.strip_prefix("Bad").unwrap_or(node_type);
    match node_type {
        "Document" => "⧉",
        "Header" => "⇲",
        "Definition" => "§",
        "Include" | "CPPInclude" => "⇲",
        "Namespace" => "⌂",
        "Const" => "π",
        "Typedef" => "≡",
        "Enum" => "☰",
        "EnumValue" => "•",
        "Struct" => "§",
        "Union" => "∪",
        "Exception" => "⚠",
        "Service" => "⚙",
        "Function" => "ƒ",
        "Throws" => "↯",
        "Field" | "FieldIndex" => "◦",
        "FieldType" | "TypeName" | "CppType" => "τ",
        "ConstValue" => "∷",
        "Identifier" | "IdentifierName" => "◈",
        "Literal" | "LiteralValue" => "❝",
        "Annotations" | "Annotation" => "@",
        "Comment" => "#",
        _ if node_type.ends_with("Keyword") || node_type == "ListSeparator" => "·",
        _ => "○",
    }
}

fn node_line(snapshot: &AstSnapshot) -> String {
    let mut line = format!("{} {}", get_icon(&snapshot.node_type), snapshot.node_type);
    if !snapshot.label.is_empty() {
        line.push(' ');
        line.push_str(&truncate(&snapshot.label, LABEL_WIDTH));
    }
    if snapshot.invalid {
        line.push_str(" ✗");
    }
    line
}

fn format_snapshot(
    snapshot: &AstSnapshot,
    prefix: &str,
    is_last: bool,
    options: &TreevizOptions,
    output: &mut String,
) {
    let connector = if is_last { "└─" } else { "├─" };
    let linum = if options.show_linum {
        format!("{:02} ", snapshot.location.start.line)
    } else {
        String::new()
    };
    output.push_str(&format!(
        "{}{}{} {}\n",
        linum,
        prefix,
        connector,
        node_line(snapshot)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    format_children(snapshot, &child_prefix, options, output);
}

fn format_children(
    snapshot: &AstSnapshot,
    prefix: &str,
    options: &TreevizOptions,
    output: &mut String,
) {
    let count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        format_snapshot(child, prefix, i + 1 == count, options, output);
    }
}

/// Render the document's root line, then every kept descendant.
pub fn to_treeviz(doc: &Document, options: &TreevizOptions) -> String {
    let snapshot = snapshot_from_document(
        doc,
        &SnapshotOptions {
            include_tokens: options.include_tokens,
        },
    );

    let mut root = get_icon(&snapshot.node_type).to_string();
    root.push(' ');
    root.push_str(&truncate(
        if snapshot.label.is_empty() {
            &snapshot.node_type
        } else {
            &snapshot.label
        },
        LABEL_WIDTH,
    ));
    root.push('\n');

    format_children(&snapshot, "", options, &mut root);
    root
}
