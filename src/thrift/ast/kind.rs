//! Static type tags for AST nodes
//!
//! Every node reports one [`NodeKind`]. Keyword tokens share a single node type and are told
//! apart by [`KeywordKind`]; placeholders for constructs that failed to parse report
//! [`NodeKind::Bad`] with the [`Category`] they stand in for.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Document,

    // Headers
    Include,
    CppInclude,
    Namespace,

    // Definitions
    Const,
    Typedef,
    Enum,
    EnumValue,
    Struct,
    Union,
    Exception,
    Service,
    Function,
    Throws,
    Field,
    FieldIndex,

    // Types and values
    FieldType,
    TypeName,
    CppType,
    ConstValue,

    // Components
    Identifier,
    IdentifierName,
    Literal,
    LiteralValue,
    Annotations,
    Annotation,

    // Trivia and tokens
    Comment,
    Keyword(KeywordKind),

    Bad(Category),
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Document => "Document",
            NodeKind::Include => "Include",
            NodeKind::CppInclude => "CPPInclude",
            NodeKind::Namespace => "Namespace",
            NodeKind::Const => "Const",
            NodeKind::Typedef => "Typedef",
            NodeKind::Enum => "Enum",
            NodeKind::EnumValue => "EnumValue",
            NodeKind::Struct => "Struct",
            NodeKind::Union => "Union",
            NodeKind::Exception => "Exception",
            NodeKind::Service => "Service",
            NodeKind::Function => "Function",
            NodeKind::Throws => "Throws",
            NodeKind::Field => "Field",
            NodeKind::FieldIndex => "FieldIndex",
            NodeKind::FieldType => "FieldType",
            NodeKind::TypeName => "TypeName",
            NodeKind::CppType => "CppType",
            NodeKind::ConstValue => "ConstValue",
            NodeKind::Identifier => "Identifier",
            NodeKind::IdentifierName => "IdentifierName",
            NodeKind::Literal => "Literal",
            NodeKind::LiteralValue => "LiteralValue",
            NodeKind::Annotations => "Annotations",
            NodeKind::Annotation => "Annotation",
            NodeKind::Comment => "Comment",
            NodeKind::Keyword(keyword) => keyword.as_str(),
            NodeKind::Bad(category) => category.bad_name(),
        }
    }

    pub fn is_keyword(&self) -> bool {
        matches!(self, NodeKind::Keyword(_))
    }

    pub fn is_bad(&self) -> bool {
        matches!(self, NodeKind::Bad(_))
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keywords and punctuation tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordKind {
    Include,
    CppInclude,
    Namespace,
    Const,
    Typedef,
    Enum,
    Struct,
    Union,
    Exception,
    Service,
    Extends,
    Oneway,
    Void,
    Throws,
    /// `required` or `optional`; the token text tells which
    Required,
    CppType,
    /// `{`
    LCur,
    /// `}`
    RCur,
    /// `(`
    LPar,
    /// `)`
    RPar,
    /// `[`
    LBrk,
    /// `]`
    RBrk,
    /// `<`
    LPoint,
    /// `>`
    RPoint,
    Colon,
    Comma,
    Equal,
    /// `,` or `;` ending a list element
    ListSeparator,
}

impl KeywordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeywordKind::Include => "IncludeKeyword",
            KeywordKind::CppInclude => "CPPIncludeKeyword",
            KeywordKind::Namespace => "NamespaceKeyword",
            KeywordKind::Const => "ConstKeyword",
            KeywordKind::Typedef => "TypedefKeyword",
            KeywordKind::Enum => "EnumKeyword",
            KeywordKind::Struct => "StructKeyword",
            KeywordKind::Union => "UnionKeyword",
            KeywordKind::Exception => "ExceptionKeyword",
            KeywordKind::Service => "ServiceKeyword",
            KeywordKind::Extends => "ExtendsKeyword",
            KeywordKind::Oneway => "OnewayKeyword",
            KeywordKind::Void => "VoidKeyword",
            KeywordKind::Throws => "ThrowsKeyword",
            KeywordKind::Required => "RequiredKeyword",
            KeywordKind::CppType => "CppTypeKeyword",
            KeywordKind::LCur => "LCurKeyword",
            KeywordKind::RCur => "RCurKeyword",
            KeywordKind::LPar => "LParKeyword",
            KeywordKind::RPar => "RParKeyword",
            KeywordKind::LBrk => "LBrkKeyword",
            KeywordKind::RBrk => "RBrkKeyword",
            KeywordKind::LPoint => "LPointKeyword",
            KeywordKind::RPoint => "RPointKeyword",
            KeywordKind::Colon => "ColonKeyword",
            KeywordKind::Comma => "CommaKeyword",
            KeywordKind::Equal => "EqualKeyword",
            KeywordKind::ListSeparator => "ListSeparator",
        }
    }

    /// Canonical source text, when the keyword has exactly one spelling.
    pub fn text(&self) -> Option<&'static str> {
        let text = match self {
            KeywordKind::Include => "include",
            KeywordKind::CppInclude => "cpp_include",
            KeywordKind::Namespace => "namespace",
            KeywordKind::Const => "const",
            KeywordKind::Typedef => "typedef",
            KeywordKind::Enum => "enum",
            KeywordKind::Struct => "struct",
            KeywordKind::Union => "union",
            KeywordKind::Exception => "exception",
            KeywordKind::Service => "service",
            KeywordKind::Extends => "extends",
            KeywordKind::Oneway => "oneway",
            KeywordKind::Void => "void",
            KeywordKind::Throws => "throws",
            KeywordKind::CppType => "cpp_type",
            KeywordKind::LCur => "{",
            KeywordKind::RCur => "}",
            KeywordKind::LPar => "(",
            KeywordKind::RPar => ")",
            KeywordKind::LBrk => "[",
            KeywordKind::RBrk => "]",
            KeywordKind::LPoint => "<",
            KeywordKind::RPoint => ">",
            KeywordKind::Colon => ":",
            KeywordKind::Comma => ",",
            KeywordKind::Equal => "=",
            KeywordKind::Required | KeywordKind::ListSeparator => return None,
        };
        Some(text)
    }
}

/// Syntactic categories that can be replaced by a bad-node placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Header,
    Definition,
    Include,
    CppInclude,
    Namespace,
    Const,
    Typedef,
    Enum,
    EnumValue,
    Struct,
    Union,
    Exception,
    Service,
    Function,
    Throws,
    Field,
    FieldIndex,
    FieldType,
    ConstValue,
    Identifier,
    Literal,
    Annotations,
    Annotation,
}

impl Category {
    pub fn bad_name(&self) -> &'static str {
        match self {
            Category::Header => "BadHeader",
            Category::Definition => "BadDefinition",
            Category::Include => "BadInclude",
            Category::CppInclude => "BadCPPInclude",
            Category::Namespace => "BadNamespace",
            Category::Const => "BadConst",
            Category::Typedef => "BadTypedef",
            Category::Enum => "BadEnum",
            Category::EnumValue => "BadEnumValue",
            Category::Struct => "BadStruct",
            Category::Union => "BadUnion",
            Category::Exception => "BadException",
            Category::Service => "BadService",
            Category::Function => "BadFunction",
            Category::Throws => "BadThrows",
            Category::Field => "BadField",
            Category::FieldIndex => "BadFieldIndex",
            Category::FieldType => "BadFieldType",
            Category::ConstValue => "BadConstValue",
            Category::Identifier => "BadIdentifier",
            Category::Literal => "BadLiteral",
            Category::Annotations => "BadAnnotations",
            Category::Annotation => "BadAnnotation",
        }
    }

    /// Whether a placeholder of this category stands at header level in a document.
    pub fn is_header(&self) -> bool {
        matches!(
            self,
            Category::Header | Category::Include | Category::CppInclude | Category::Namespace
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(NodeKind::Struct, "Struct")]
    #[case(NodeKind::CppInclude, "CPPInclude")]
    #[case(NodeKind::Keyword(KeywordKind::LCur), "LCurKeyword")]
    #[case(NodeKind::Keyword(KeywordKind::ListSeparator), "ListSeparator")]
    #[case(NodeKind::Bad(Category::Header), "BadHeader")]
    #[case(NodeKind::Bad(Category::FieldIndex), "BadFieldIndex")]
    fn test_kind_names(#[case] kind: NodeKind, #[case] expected: &str) {
        assert_eq!(kind.as_str(), expected);
        assert_eq!(kind.to_string(), expected);
    }

    #[test]
    fn test_kind_predicates() {
        assert!(NodeKind::Keyword(KeywordKind::Void).is_keyword());
        assert!(!NodeKind::Function.is_keyword());
        assert!(NodeKind::Bad(Category::Field).is_bad());
        assert!(!NodeKind::Field.is_bad());
    }

    #[test]
    fn test_keyword_text() {
        assert_eq!(KeywordKind::CppInclude.text(), Some("cpp_include"));
        assert_eq!(KeywordKind::RPoint.text(), Some(">"));
        assert_eq!(KeywordKind::Required.text(), None);
    }

    #[test]
    fn test_header_categories() {
        assert!(Category::Namespace.is_header());
        assert!(Category::Header.is_header());
        assert!(!Category::Struct.is_header());
    }
}
