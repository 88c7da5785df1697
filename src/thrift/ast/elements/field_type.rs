//! Field types
//!
//! A field type is either a single name (a base type such as `i32`, or a reference to a
//! declared type such as `shared.User`) or a container carrying nested types:
//!
//! ```text
//! list<i32>                      key_type = i32
//! set<string>                    key_type = string
//! map<string, list<i32>>         key_type = string, value_type = list<i32>
//! ```
//!
//! Nested types are boxed slots owned by their container, so the nesting depth is limited
//! only by the source text.

use super::super::kind::{Category, NodeKind};
use super::super::location::Location;
use super::super::traits::{AstNode, Children};
use super::annotation::Annotations;
use super::bad::{Parsed, Recoverable};
use super::literal::Literal;
use super::tokens::{impl_leaf_node, Keyword};

/// Name token of a field type (`i32`, `map`, `shared.User`)
#[derive(Debug, Clone, PartialEq)]
pub struct TypeName {
    pub name: String,
    pub location: Location,
    pub invalid: bool,
}

impl TypeName {
    pub fn new(name: impl Into<String>, location: Location) -> Self {
        Self {
            name: name.into(),
            location,
            invalid: false,
        }
    }

    pub fn bad(location: Location) -> Self {
        Self {
            name: String::new(),
            location,
            invalid: true,
        }
    }
}

impl_leaf_node!(TypeName, NodeKind::TypeName, name);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseType {
    Bool,
    Byte,
    I8,
    I16,
    I32,
    I64,
    Double,
    String,
    Binary,
}

impl BaseType {
    pub fn from_name(name: &str) -> Option<BaseType> {
        match name {
            "bool" => Some(BaseType::Bool),
            "byte" => Some(BaseType::Byte),
            "i8" => Some(BaseType::I8),
            "i16" => Some(BaseType::I16),
            "i32" => Some(BaseType::I32),
            "i64" => Some(BaseType::I64),
            "double" => Some(BaseType::Double),
            "string" => Some(BaseType::String),
            "binary" => Some(BaseType::Binary),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BaseType::Bool => "bool",
            BaseType::Byte => "byte",
            BaseType::I8 => "i8",
            BaseType::I16 => "i16",
            BaseType::I32 => "i32",
            BaseType::I64 => "i64",
            BaseType::Double => "double",
            BaseType::String => "string",
            BaseType::Binary => "binary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerType {
    List,
    Set,
    Map,
}

impl ContainerType {
    pub fn from_name(name: &str) -> Option<ContainerType> {
        match name {
            "list" => Some(ContainerType::List),
            "set" => Some(ContainerType::Set),
            "map" => Some(ContainerType::Map),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerType::List => "list",
            ContainerType::Set => "set",
            ContainerType::Map => "map",
        }
    }
}

/// Classification of a field type by its name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Base(BaseType),
    Container(ContainerType),
    /// Reference to a typedef, struct, enum... declared elsewhere
    Named,
}

impl TypeKind {
    pub fn classify(name: &str) -> TypeKind {
        if let Some(base) = BaseType::from_name(name) {
            TypeKind::Base(base)
        } else if let Some(container) = ContainerType::from_name(name) {
            TypeKind::Container(container)
        } else {
            TypeKind::Named
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Base(_) => "base",
            TypeKind::Container(_) => "container",
            TypeKind::Named => "named",
        }
    }
}

/// `cpp_type "std::vector<int>"`
#[derive(Debug, Clone, PartialEq)]
pub struct CppType {
    pub keyword: Keyword,
    pub literal: Parsed<Literal>,
    pub location: Location,
}

impl CppType {
    pub fn new(keyword: Keyword, literal: Parsed<Literal>, location: Location) -> Self {
        Self {
            keyword,
            literal,
            location,
        }
    }
}

impl AstNode for CppType {
    fn kind(&self) -> NodeKind {
        NodeKind::CppType
    }
    fn location(&self) -> &Location {
        &self.location
    }
    fn children(&self) -> Vec<&dyn AstNode> {
        Children::new()
            .node(&self.keyword)
            .node(&self.literal)
            .finish()
    }
    fn is_invalid(&self) -> bool {
        false
    }
    fn display_label(&self) -> String {
        self.literal
            .node()
            .map(|literal| literal.text().to_string())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldType {
    pub type_name: TypeName,
    pub cpp_type: Option<CppType>,
    pub lpoint: Option<Keyword>,
    /// Element type of a list or set, key type of a map
    pub key_type: Option<Box<Parsed<FieldType>>>,
    pub comma: Option<Keyword>,
    /// Value type of a map
    pub value_type: Option<Box<Parsed<FieldType>>>,
    pub rpoint: Option<Keyword>,
    pub annotations: Option<Annotations>,
    pub location: Location,
}

impl FieldType {
    /// A base type or a reference to a declared type.
    pub fn named(type_name: TypeName, location: Location) -> Self {
        Self {
            type_name,
            cpp_type: None,
            lpoint: None,
            key_type: None,
            comma: None,
            value_type: None,
            rpoint: None,
            annotations: None,
            location,
        }
    }

    /// `list<T>` or `set<T>`.
    pub fn collection(
        type_name: TypeName,
        lpoint: Keyword,
        element: Parsed<FieldType>,
        rpoint: Keyword,
        location: Location,
    ) -> Self {
        Self {
            lpoint: Some(lpoint),
            key_type: Some(Box::new(element)),
            rpoint: Some(rpoint),
            ..Self::named(type_name, location)
        }
    }

    /// `map<K, V>`.
    pub fn map(
        type_name: TypeName,
        lpoint: Keyword,
        key: Parsed<FieldType>,
        comma: Keyword,
        value: Parsed<FieldType>,
        rpoint: Keyword,
        location: Location,
    ) -> Self {
        Self {
            lpoint: Some(lpoint),
            key_type: Some(Box::new(key)),
            comma: Some(comma),
            value_type: Some(Box::new(value)),
            rpoint: Some(rpoint),
            ..Self::named(type_name, location)
        }
    }

    pub fn with_cpp_type(mut self, cpp_type: CppType) -> Self {
        self.location = self.location.cover(&cpp_type.location);
        self.cpp_type = Some(cpp_type);
        self
    }

    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.location = self.location.cover(&annotations.location);
        self.annotations = Some(annotations);
        self
    }

    pub fn type_name(&self) -> &str {
        &self.type_name.name
    }

    pub fn type_kind(&self) -> TypeKind {
        TypeKind::classify(&self.type_name.name)
    }

    pub fn is_container(&self) -> bool {
        matches!(self.type_kind(), TypeKind::Container(_))
    }

    /// Nested key or element type. `None` when absent or when it failed to parse; the raw
    /// slot is `self.key_type`.
    pub fn key_type(&self) -> Option<&FieldType> {
        self.key_type.as_deref().and_then(Parsed::node)
    }

    /// Nested map value type, see [`FieldType::key_type`].
    pub fn value_type(&self) -> Option<&FieldType> {
        self.value_type.as_deref().and_then(Parsed::node)
    }
}

impl AstNode for FieldType {
    fn kind(&self) -> NodeKind {
        NodeKind::FieldType
    }
    fn location(&self) -> &Location {
        &self.location
    }
    fn children(&self) -> Vec<&dyn AstNode> {
        Children::new()
            .node(&self.type_name)
            .opt(self.cpp_type.as_ref())
            .opt(self.lpoint.as_ref())
            .opt(self.key_type.as_deref())
            .opt(self.comma.as_ref())
            .opt(self.value_type.as_deref())
            .opt(self.rpoint.as_ref())
            .opt(self.annotations.as_ref())
            .finish()
    }
    fn is_invalid(&self) -> bool {
        false
    }
    fn display_label(&self) -> String {
        let nested = |slot: &Option<Box<Parsed<FieldType>>>| match slot.as_deref() {
            Some(Parsed::Node(field_type)) => field_type.display_label(),
            Some(Parsed::Bad(_)) => "?".to_string(),
            None => String::new(),
        };
        match (&self.key_type, &self.value_type) {
            (Some(_), Some(_)) => format!(
                "{}<{}, {}>",
                self.type_name.name,
                nested(&self.key_type),
                nested(&self.value_type)
            ),
            (Some(_), None) => format!("{}<{}>", self.type_name.name, nested(&self.key_type)),
            _ => self.type_name.name.clone(),
        }
    }
}

impl Recoverable for FieldType {
    const CATEGORY: Category = Category::FieldType;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thrift::ast::kind::KeywordKind;
    use crate::thrift::ast::location::{Cursor, Position};
    use crate::thrift::testing::field_type;

    fn named(cursor: &mut Cursor, name: &str) -> FieldType {
        let location = cursor.advance(name);
        FieldType::named(TypeName::new(name, location), location)
    }

    /// `map<string, list<i32>>`
    fn nested_map() -> FieldType {
        let mut cursor = Cursor::new();
        let map_name = TypeName::new("map", cursor.advance("map"));
        let lpoint = Keyword::fixed(KeywordKind::LPoint, cursor.advance("<"));
        let key = named(&mut cursor, "string");
        let comma = Keyword::fixed(KeywordKind::Comma, cursor.advance(","));
        cursor.advance(" ");

        let list_start = cursor.position();
        let list_name = TypeName::new("list", cursor.advance("list"));
        let inner_lpoint = Keyword::fixed(KeywordKind::LPoint, cursor.advance("<"));
        let element = named(&mut cursor, "i32");
        let inner_rpoint = Keyword::fixed(KeywordKind::RPoint, cursor.advance(">"));
        let list = FieldType::collection(
            list_name,
            inner_lpoint,
            element.into(),
            inner_rpoint,
            Location::new(list_start, cursor.position()),
        );

        let rpoint = Keyword::fixed(KeywordKind::RPoint, cursor.advance(">"));
        FieldType::map(
            map_name,
            lpoint,
            key.into(),
            comma,
            list.into(),
            rpoint,
            Location::new(Position::START, cursor.position()),
        )
    }

    #[test]
    fn test_nested_container_types() {
        let map = nested_map();

        assert_eq!(map.type_name(), "map");
        assert_eq!(map.type_kind(), TypeKind::Container(ContainerType::Map));

        let key = map.key_type().unwrap();
        assert_eq!(key.type_name(), "string");
        assert_eq!(key.type_kind(), TypeKind::Base(BaseType::String));

        let value = map.value_type().unwrap();
        assert_eq!(value.type_name(), "list");
        assert!(value.value_type().is_none());
        assert_eq!(value.key_type().unwrap().type_name(), "i32");
    }

    #[test]
    fn test_map_children_include_comma() {
        let map = nested_map();
        let kinds: Vec<_> = map.children().iter().map(|c| c.kind()).collect();

        assert_eq!(
            kinds,
            vec![
                NodeKind::TypeName,
                NodeKind::Keyword(KeywordKind::LPoint),
                NodeKind::FieldType,
                NodeKind::Keyword(KeywordKind::Comma),
                NodeKind::FieldType,
                NodeKind::Keyword(KeywordKind::RPoint),
            ]
        );
        assert_eq!(map.display_label(), "map<string, list<i32>>");
    }

    #[test]
    fn test_bad_element_type() {
        let mut cursor = Cursor::new();
        let name = TypeName::new("list", cursor.advance("list"));
        let lpoint = Keyword::fixed(KeywordKind::LPoint, cursor.advance("<"));
        let element = FieldType::bad(cursor.advance("@@"));
        let rpoint = Keyword::fixed(KeywordKind::RPoint, cursor.advance(">"));
        let list = FieldType::collection(
            name,
            lpoint,
            element,
            rpoint,
            Location::new(Position::START, cursor.position()),
        );

        assert!(list.key_type().is_none());
        assert!(list.key_type.is_some());
        assert!(!list.is_invalid());
        assert!(list.subtree_invalid());
        assert_eq!(list.display_label(), "list<?>");
    }

    #[test]
    fn test_cpp_type_decoration() {
        let list = field_type(Position::START, "list<i32> cpp_type \"std::vector<int>\"");
        let types: Vec<_> = list.children().iter().map(|c| c.node_type()).collect();
        assert_eq!(
            types,
            vec!["TypeName", "LPointKeyword", "FieldType", "RPointKeyword", "CppType"]
        );

        let cpp = list.cpp_type.as_ref().unwrap();
        let cpp_types: Vec<_> = cpp.children().iter().map(|c| c.node_type()).collect();
        assert_eq!(cpp_types, vec!["CppTypeKeyword", "Literal"]);
        assert_eq!(cpp.display_label(), "std::vector<int>");

        let rpoint_end = list.rpoint.as_ref().unwrap().location.end;
        assert_eq!(rpoint_end, Position::new(1, 10, 9));
        assert_eq!(cpp.position(), Position::new(1, 11, 10));
        assert_eq!(list.end(), cpp.end());
        assert_eq!(list.end(), Position::new(1, 38, 37));
        assert_eq!(list.end().offset, 37);
        assert!(!list.subtree_invalid());
    }

    #[test]
    fn test_bad_cpp_type_literal() {
        let mut list = field_type(Position::START, "list<i32> cpp_type \"std::vector<int>\"");
        let cpp = list.cpp_type.as_mut().unwrap();
        let literal_location = *cpp.literal.location();
        cpp.literal = Literal::bad(literal_location);

        assert!(!cpp.is_invalid());
        assert!(cpp.subtree_invalid());
        assert_eq!(cpp.display_label(), "");
        assert!(!list.is_invalid());
        assert!(list.subtree_invalid());
    }

    #[test]
    fn test_type_kind_classification() {
        assert_eq!(TypeKind::classify("binary"), TypeKind::Base(BaseType::Binary));
        assert_eq!(TypeKind::classify("set"), TypeKind::Container(ContainerType::Set));
        assert_eq!(TypeKind::classify("shared.User"), TypeKind::Named);
        assert_eq!(TypeKind::Named.as_str(), "named");
    }
}
