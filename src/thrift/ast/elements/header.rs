//! Headers: includes and namespaces
//!
//! ```text
//! include "shared/base.thrift"
//! cpp_include "<unordered_map>"
//! namespace go example.user
//! ```
//!
//! [`Header`] is the closed set the document classifies; a header that failed to parse is
//! `Header::Bad`, whatever category its placeholder was built for.

use super::super::kind::{Category, NodeKind};
use super::super::location::Location;
use super::super::traits::{AstNode, Children};
use super::annotation::Annotations;
use super::bad::{BadNode, Parsed, Recoverable};
use super::identifier::Identifier;
use super::literal::Literal;
use super::tokens::{Comment, Keyword};
use super::trivia::{impl_decorated, Decorated, Trivia};
use std::path::Path;

macro_rules! include_header {
    ($(#[$meta:meta])* $name:ident, $kind:expr, $category:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            pub keyword: Keyword,
            pub path: Parsed<Literal>,
            pub trivia: Trivia,
            pub location: Location,
        }

        impl $name {
            pub fn new(keyword: Keyword, path: Parsed<Literal>, location: Location) -> Self {
                Self {
                    keyword,
                    path,
                    trivia: Trivia::default(),
                    location,
                }
            }

            /// Included path as written, without quotes.
            pub fn path(&self) -> Option<&str> {
                self.path.node().map(Literal::text)
            }

            /// Stem of the included file: `"shared/base.thrift"` is `base`.
            pub fn name(&self) -> Option<&str> {
                let path = Path::new(self.path()?);
                path.file_stem().and_then(|stem| stem.to_str())
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
                let children = Children::new().node(&self.keyword).node(&self.path);
                self.trivia.collect(children).finish()
            }
            fn is_invalid(&self) -> bool {
                false
            }
            fn display_label(&self) -> String {
                self.path().unwrap_or_default().to_string()
            }
        }

        impl Recoverable for $name {
            const CATEGORY: Category = $category;
        }

        impl_decorated!($name);
    };
}

include_header!(Include, NodeKind::Include, Category::Include);
include_header!(
    /// `cpp_include`, passed through to generated C++ code
    CppInclude,
    NodeKind::CppInclude,
    Category::CppInclude
);

#[derive(Debug, Clone, PartialEq)]
pub struct Namespace {
    pub keyword: Keyword,
    /// Target language, `*` for all of them
    pub scope: Parsed<Identifier>,
    pub name: Parsed<Identifier>,
    pub trivia: Trivia,
    pub location: Location,
}

impl Namespace {
    pub fn new(
        keyword: Keyword,
        scope: Parsed<Identifier>,
        name: Parsed<Identifier>,
        location: Location,
    ) -> Self {
        Self {
            keyword,
            scope,
            name,
            trivia: Trivia::default(),
            location,
        }
    }

    pub fn language(&self) -> Option<&str> {
        self.scope.node().map(Identifier::text)
    }

    pub fn namespace(&self) -> Option<&str> {
        self.name.node().map(Identifier::text)
    }

    pub fn applies_to(&self, language: &str) -> bool {
        matches!(self.language(), Some(scope) if scope == "*" || scope == language)
    }
}

impl AstNode for Namespace {
    fn kind(&self) -> NodeKind {
        NodeKind::Namespace
    }
    fn location(&self) -> &Location {
        &self.location
    }
    fn children(&self) -> Vec<&dyn AstNode> {
        let children = Children::new()
            .node(&self.keyword)
            .node(&self.scope)
            .node(&self.name);
        self.trivia.collect(children).finish()
    }
    fn is_invalid(&self) -> bool {
        false
    }
    fn display_label(&self) -> String {
        format!(
            "{} {}",
            self.language().unwrap_or_default(),
            self.namespace().unwrap_or_default()
        )
    }
}

impl Recoverable for Namespace {
    const CATEGORY: Category = Category::Namespace;
}

impl_decorated!(Namespace);

/// A top-level header
#[derive(Debug, Clone, PartialEq)]
pub enum Header {
    Include(Include),
    CppInclude(CppInclude),
    Namespace(Namespace),
    Bad(BadNode),
}

impl Header {
    /// Placeholder for a header that could not be told apart.
    pub fn bad(location: Location) -> Header {
        Header::Bad(BadNode::new(Category::Header, location))
    }

    pub fn is_bad(&self) -> bool {
        matches!(self, Header::Bad(_))
    }

    fn as_node(&self) -> &dyn AstNode {
        match self {
            Header::Include(include) => include,
            Header::CppInclude(include) => include,
            Header::Namespace(namespace) => namespace,
            Header::Bad(bad) => bad,
        }
    }

    /// See [`Decorated::with_comments`]. Placeholders are returned unchanged.
    pub fn with_comments(self, comments: Vec<Comment>, end_line_comments: Vec<Comment>) -> Header {
        match self {
            Header::Include(include) => include.with_comments(comments, end_line_comments).into(),
            Header::CppInclude(include) => {
                include.with_comments(comments, end_line_comments).into()
            }
            Header::Namespace(namespace) => {
                namespace.with_comments(comments, end_line_comments).into()
            }
            Header::Bad(bad) => Header::Bad(bad),
        }
    }

    /// See [`Decorated::with_annotations`]. Placeholders are returned unchanged.
    pub fn with_annotations(self, annotations: Annotations) -> Header {
        match self {
            Header::Include(include) => include.with_annotations(annotations).into(),
            Header::CppInclude(include) => include.with_annotations(annotations).into(),
            Header::Namespace(namespace) => namespace.with_annotations(annotations).into(),
            Header::Bad(bad) => Header::Bad(bad),
        }
    }
}

impl AstNode for Header {
    fn kind(&self) -> NodeKind {
        self.as_node().kind()
    }
    fn location(&self) -> &Location {
        match self {
            Header::Include(include) => &include.location,
            Header::CppInclude(include) => &include.location,
            Header::Namespace(namespace) => &namespace.location,
            Header::Bad(bad) => &bad.location,
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

macro_rules! header_from {
    ($($variant:ident),+) => {
        $(
            impl From<$variant> for Header {
                fn from(node: $variant) -> Self {
                    Header::$variant(node)
                }
            }

            impl From<Parsed<$variant>> for Header {
                fn from(parsed: Parsed<$variant>) -> Self {
                    match parsed {
                        Parsed::Node(node) => Header::$variant(node),
                        Parsed::Bad(bad) => Header::Bad(bad),
                    }
                }
            }
        )+
    };
}

header_from!(Include, CppInclude, Namespace);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thrift::ast::location::Position;
    use crate::thrift::testing::{include, namespace};
    use rstest::rstest;

    #[rstest]
    #[case("shared/base.thrift", Some("base"))]
    #[case("user.thrift", Some("user"))]
    #[case("../common/v1.types.thrift", Some("v1.types"))]
    #[case("noext", Some("noext"))]
    fn test_include_name(#[case] path: &str, #[case] expected: Option<&str>) {
        let include = include(Position::START, path);
        assert_eq!(include.path(), Some(path));
        assert_eq!(include.name(), expected);
    }

    #[test]
    fn test_include_children() {
        let include = include(Position::START, "shared.thrift");
        let kinds: Vec<_> = include.children().iter().map(|c| c.node_type()).collect();
        assert_eq!(kinds, vec!["IncludeKeyword", "Literal"]);
    }

    #[test]
    fn test_namespace_scope() {
        let ns = namespace(Position::START, "go", "example.user");
        assert_eq!(ns.language(), Some("go"));
        assert_eq!(ns.namespace(), Some("example.user"));
        assert!(ns.applies_to("go"));
        assert!(!ns.applies_to("py"));
        assert!(namespace(Position::START, "*", "all").applies_to("py"));
    }

    #[test]
    fn test_header_conversions() {
        let at = Location::empty(Position::START);
        let header: Header = Include::bad(at).into();
        assert!(header.is_bad());
        assert_eq!(header.node_type(), "BadInclude");

        let header = Header::bad(at);
        assert_eq!(header.node_type(), "BadHeader");
        assert!(header.is_invalid());
        assert!(header.children().is_empty());

        let header: Header = namespace(Position::START, "*", "x").into();
        assert_eq!(header.kind(), NodeKind::Namespace);
    }

    #[test]
    fn test_with_comments_on_bad_header_is_noop() {
        let at = Location::empty(Position::new(4, 1, 30));
        let comment = Comment::from_source("# lost", Location::compute(Position::START, "# lost"));
        let header = Header::bad(at).with_comments(vec![comment], Vec::new());
        assert_eq!(*header.location(), at);
    }
}
