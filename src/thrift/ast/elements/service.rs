//! Services, functions and throws clauses
//!
//! ```text
//! service UserService extends shared.BaseService {
//!   oneway void ping(),
//!   User get(1: i64 id) throws (1: NotFound missing)
//! }
//! ```

use super::super::kind::{Category, NodeKind};
use super::super::location::Location;
use super::super::traits::{AstNode, Children};
use super::bad::{Parsed, Recoverable};
use super::field::Field;
use super::field_type::FieldType;
use super::identifier::Identifier;
use super::tokens::Keyword;
use super::trivia::{impl_decorated, Trivia};

/// `throws (1: NotFound missing, 2: Denied denied)`
#[derive(Debug, Clone, PartialEq)]
pub struct Throws {
    pub keyword: Keyword,
    pub lpar: Keyword,
    pub fields: Vec<Parsed<Field>>,
    pub rpar: Keyword,
    pub location: Location,
}

impl Throws {
    pub fn new(
        keyword: Keyword,
        lpar: Keyword,
        fields: Vec<Parsed<Field>>,
        rpar: Keyword,
        location: Location,
    ) -> Self {
        Self {
            keyword,
            lpar,
            fields,
            rpar,
            location,
        }
    }

    /// Type names of the declared exceptions.
    pub fn exception_types(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter_map(Parsed::node)
            .filter_map(|field| field.field_type.node())
            .map(FieldType::type_name)
    }
}

impl AstNode for Throws {
    fn kind(&self) -> NodeKind {
        NodeKind::Throws
    }
    fn location(&self) -> &Location {
        &self.location
    }
    fn children(&self) -> Vec<&dyn AstNode> {
        Children::new()
            .node(&self.keyword)
            .node(&self.lpar)
            .all(&self.fields)
            .node(&self.rpar)
            .finish()
    }
    fn is_invalid(&self) -> bool {
        false
    }
}

impl Recoverable for Throws {
    const CATEGORY: Category = Category::Throws;
}

/// What a function returns
#[derive(Debug, Clone, PartialEq)]
pub enum FunctionReturn {
    Void(Keyword),
    Type(Parsed<FieldType>),
}

impl FunctionReturn {
    fn as_node(&self) -> &dyn AstNode {
        match self {
            FunctionReturn::Void(keyword) => keyword,
            FunctionReturn::Type(field_type) => field_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub oneway: Option<Keyword>,
    pub returns: FunctionReturn,
    pub identifier: Parsed<Identifier>,
    pub lpar: Keyword,
    pub arguments: Vec<Parsed<Field>>,
    pub rpar: Keyword,
    pub throws: Option<Parsed<Throws>>,
    pub separator: Option<Keyword>,
    pub trivia: Trivia,
    pub location: Location,
}

impl Function {
    pub fn new(
        oneway: Option<Keyword>,
        returns: FunctionReturn,
        identifier: Parsed<Identifier>,
        lpar: Keyword,
        arguments: Vec<Parsed<Field>>,
        rpar: Keyword,
        location: Location,
    ) -> Self {
        Self {
            oneway,
            returns,
            identifier,
            lpar,
            arguments,
            rpar,
            throws: None,
            separator: None,
            trivia: Trivia::default(),
            location,
        }
    }

    pub fn with_throws(mut self, throws: Parsed<Throws>) -> Self {
        self.location = self.location.cover(throws.location());
        self.throws = Some(throws);
        self
    }

    pub fn with_separator(mut self, separator: Keyword) -> Self {
        self.location = self.location.cover(&separator.location);
        self.separator = Some(separator);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.identifier.node().map(Identifier::text)
    }

    pub fn is_oneway(&self) -> bool {
        self.oneway.is_some()
    }

    pub fn is_void(&self) -> bool {
        matches!(self.returns, FunctionReturn::Void(_))
    }

    pub fn return_type(&self) -> Option<&FieldType> {
        match &self.returns {
            FunctionReturn::Type(field_type) => field_type.node(),
            FunctionReturn::Void(_) => None,
        }
    }
}

impl AstNode for Function {
    fn kind(&self) -> NodeKind {
        NodeKind::Function
    }
    fn location(&self) -> &Location {
        &self.location
    }
    fn children(&self) -> Vec<&dyn AstNode> {
        let children = Children::new()
            .opt(self.oneway.as_ref())
            .node(self.returns.as_node())
            .node(&self.identifier)
            .node(&self.lpar)
            .all(&self.arguments)
            .node(&self.rpar)
            .opt(self.throws.as_ref())
            .opt(self.separator.as_ref());
        self.trivia.collect(children).finish()
    }
    fn is_invalid(&self) -> bool {
        false
    }
    fn display_label(&self) -> String {
        format!("{}()", self.name().unwrap_or_default())
    }
}

impl Recoverable for Function {
    const CATEGORY: Category = Category::Function;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub keyword: Keyword,
    pub identifier: Parsed<Identifier>,
    pub extends_keyword: Option<Keyword>,
    pub extends: Option<Parsed<Identifier>>,
    pub lcur: Keyword,
    pub functions: Vec<Parsed<Function>>,
    pub rcur: Keyword,
    pub trivia: Trivia,
    pub location: Location,
}

impl Service {
    pub fn new(
        keyword: Keyword,
        identifier: Parsed<Identifier>,
        lcur: Keyword,
        functions: Vec<Parsed<Function>>,
        rcur: Keyword,
        location: Location,
    ) -> Self {
        Self {
            keyword,
            identifier,
            extends_keyword: None,
            extends: None,
            lcur,
            functions,
            rcur,
            trivia: Trivia::default(),
            location,
        }
    }

    /// Attach `extends Base`. The clause sits between the name and the opening brace, so the
    /// location is already covering it.
    pub fn with_extends(mut self, keyword: Keyword, base: Parsed<Identifier>) -> Self {
        self.extends_keyword = Some(keyword);
        self.extends = Some(base);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.identifier.node().map(Identifier::text)
    }

    pub fn extends_name(&self) -> Option<&str> {
        self.extends
            .as_ref()
            .and_then(Parsed::node)
            .map(Identifier::text)
    }

    pub fn valid_functions(&self) -> impl Iterator<Item = &Function> {
        self.functions.iter().filter_map(Parsed::node)
    }

    pub fn function(&self, name: &str) -> Option<&Function> {
        self.valid_functions().find(|function| function.name() == Some(name))
    }
}

impl AstNode for Service {
    fn kind(&self) -> NodeKind {
        NodeKind::Service
    }
    fn location(&self) -> &Location {
        &self.location
    }
    fn children(&self) -> Vec<&dyn AstNode> {
        let children = Children::new()
            .node(&self.keyword)
            .node(&self.identifier)
            .opt(self.extends_keyword.as_ref())
            .opt(self.extends.as_ref())
            .node(&self.lcur)
            .all(&self.functions)
            .node(&self.rcur);
        self.trivia.collect(children).finish()
    }
    fn is_invalid(&self) -> bool {
        false
    }
    fn display_label(&self) -> String {
        self.name().unwrap_or_default().to_string()
    }
}

impl Recoverable for Service {
    const CATEGORY: Category = Category::Service;
}

impl_decorated!(Service, Function);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thrift::ast::location::Position;
    use crate::thrift::testing::{service, FieldSpec, FunctionSpec};

    fn user_service() -> Service {
        service(
            Position::START,
            "UserService",
            Some("shared.BaseService"),
            &[
                FunctionSpec::new("ping").oneway(),
                FunctionSpec::new("get")
                    .returns("User")
                    .argument(FieldSpec::new(1, "i64", "id"))
                    .throws(FieldSpec::new(1, "NotFound", "missing")),
            ],
        )
    }

    #[test]
    fn test_service_accessors() {
        let service = user_service();

        assert_eq!(service.name(), Some("UserService"));
        assert_eq!(service.extends_name(), Some("shared.BaseService"));
        assert_eq!(service.valid_functions().count(), 2);

        let ping = service.function("ping").unwrap();
        assert!(ping.is_oneway());
        assert!(ping.is_void());
        assert!(ping.return_type().is_none());
    }

    #[test]
    fn test_function_children_with_throws() {
        let service = user_service();
        let get = service.function("get").unwrap();

        assert_eq!(get.return_type().map(FieldType::type_name), Some("User"));
        let kinds: Vec<_> = get.children().iter().map(|c| c.node_type()).collect();
        assert_eq!(
            kinds,
            vec!["FieldType", "Identifier", "LParKeyword", "Field", "RParKeyword", "Throws"]
        );

        let throws = get.throws.as_ref().and_then(Parsed::node).unwrap();
        assert_eq!(throws.exception_types().collect::<Vec<_>>(), vec!["NotFound"]);
    }

    #[test]
    fn test_service_children_in_source_order() {
        let service = user_service();
        let kinds: Vec<_> = service.children().iter().map(|c| c.node_type()).collect();
        assert_eq!(
            kinds,
            vec![
                "ServiceKeyword",
                "Identifier",
                "ExtendsKeyword",
                "Identifier",
                "LCurKeyword",
                "Function",
                "Function",
                "RCurKeyword"
            ]
        );
        let positions: Vec<_> = service.children().iter().map(|c| c.position()).collect();
        assert!(positions.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_bad_function_and_throws() {
        let at = Location::empty(Position::new(2, 3, 20));
        assert_eq!(Function::bad(at).node_type(), "BadFunction");
        assert_eq!(Throws::bad(at).node_type(), "BadThrows");
        assert!(Throws::bad(at).children().is_empty());
    }
}
