//! Keyword and comment tokens
//!
//! Keywords cover both reserved words (`struct`, `service`, `throws`...) and punctuation
//! (`{`, `<`, `=`, list separators). They are leaves: fixed text, a location and a flag for
//! tokens the grammar engine had to synthesize or could not match.
//!
//! Comments come in three styles:
//!
//! ```text
//! # shell comment
//! // single line comment
//! /* multi
//!    line comment */
//! ```
//!
//! Shell and single line comments are reproduced verbatim by formatters, multi line comments
//! are reflowed. The comment keeps its full text, markers included.

use super::super::kind::{KeywordKind, NodeKind};
use super::super::location::Location;
use super::super::traits::AstNode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Implements [`AstNode`] for a leaf token struct with `location` and `invalid` fields.
macro_rules! impl_leaf_node {
    ($ty:ty, $kind:expr, $text:ident) => {
        impl $crate::thrift::ast::traits::AstNode for $ty {
            fn kind(&self) -> $crate::thrift::ast::kind::NodeKind {
                $kind
            }
            fn location(&self) -> &$crate::thrift::ast::location::Location {
                &self.location
            }
            fn children(&self) -> Vec<&dyn $crate::thrift::ast::traits::AstNode> {
                Vec::new()
            }
            fn is_invalid(&self) -> bool {
                self.invalid
            }
            fn display_label(&self) -> String {
                self.$text.to_string()
            }
        }
    };
}

pub(crate) use impl_leaf_node;

/// A keyword or punctuation token
#[derive(Debug, Clone, PartialEq)]
pub struct Keyword {
    pub kind: KeywordKind,
    pub text: String,
    pub location: Location,
    pub invalid: bool,
}

impl Keyword {
    pub fn new(kind: KeywordKind, text: impl Into<String>, location: Location) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
            invalid: false,
        }
    }

    /// A keyword with its fixed spelling, e.g. `{` for [`KeywordKind::LCur`]. Kinds without
    /// a fixed spelling (qualifiers, list separators) need [`Keyword::new`].
    pub fn fixed(kind: KeywordKind, location: Location) -> Self {
        Self::new(kind, kind.text().unwrap_or_default(), location)
    }

    /// A keyword that was expected but missing or malformed. Usually located on an empty span
    /// where the token should have been.
    pub fn bad(kind: KeywordKind, location: Location) -> Self {
        Self {
            kind,
            text: String::new(),
            location,
            invalid: true,
        }
    }
}

impl AstNode for Keyword {
    fn kind(&self) -> NodeKind {
        NodeKind::Keyword(self.kind)
    }
    fn location(&self) -> &Location {
        &self.location
    }
    fn children(&self) -> Vec<&dyn AstNode> {
        Vec::new()
    }
    fn is_invalid(&self) -> bool {
        self.invalid
    }
    fn display_label(&self) -> String {
        self.text.clone()
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStyle {
    /// `# ...`
    Shell,
    /// `/* ... */`
    MultiLine,
    /// `// ...`
    #[default]
    SingleLine,
}

impl CommentStyle {
    /// Style of a comment from its leading marker.
    pub fn detect(text: &str) -> Option<CommentStyle> {
        if text.starts_with('#') {
            Some(CommentStyle::Shell)
        } else if text.starts_with("//") {
            Some(CommentStyle::SingleLine)
        } else if text.starts_with("/*") {
            Some(CommentStyle::MultiLine)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CommentStyle::Shell => "shell",
            CommentStyle::MultiLine => "multiline",
            CommentStyle::SingleLine => "singleline",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    /// Full comment text, markers included
    pub text: String,
    pub style: CommentStyle,
    pub location: Location,
    pub invalid: bool,
}

impl Comment {
    pub fn new(text: impl Into<String>, style: CommentStyle, location: Location) -> Self {
        Self {
            text: text.into(),
            style,
            location,
            invalid: false,
        }
    }

    /// Build a comment from its source text, detecting the style. Text without a comment
    /// marker yields a bad comment spanning it.
    pub fn from_source(text: &str, location: Location) -> Self {
        match CommentStyle::detect(text) {
            Some(style) => Self::new(text, style, location),
            None => Self::bad(location),
        }
    }

    /// An unterminated or otherwise malformed comment.
    pub fn bad(location: Location) -> Self {
        Self {
            text: String::new(),
            style: CommentStyle::default(),
            location,
            invalid: true,
        }
    }

    /// Comment text without its markers.
    pub fn body(&self) -> &str {
        match self.style {
            CommentStyle::Shell => self.text.strip_prefix('#').unwrap_or(&self.text),
            CommentStyle::SingleLine => self.text.strip_prefix("//").unwrap_or(&self.text),
            CommentStyle::MultiLine => {
                let inner = self.text.strip_prefix("/*").unwrap_or(&self.text);
                inner.strip_suffix("*/").unwrap_or(inner)
            }
        }
    }
}

impl_leaf_node!(Comment, NodeKind::Comment, text);
