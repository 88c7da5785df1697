//! Testing utilities: tree factories
//!
//!     Building a node by hand means building every token with a location that agrees with
//!     its neighbours. Getting that right once, here, keeps tests short and keeps their
//!     locations honest: every factory lays its node out as real thrift text would be, and
//!     computes each location from that text with a [`Cursor`].
//!
//!     Factories take the position the node starts at and produce the same layout every time:
//!
//!     ```text
//!     include "shared.thrift"
//!     namespace go example
//!     const i32 MAX = 3
//!     typedef i64 UserId
//!     struct User {
//!       1: required string name = "anonymous"
//!       2: ??? broken
//!     }
//!     enum Status {
//!       ACTIVE = 1,
//!       DISABLED,
//!     }
//!     service UserService extends Base {
//!       oneway void ping(),
//!       User get(1: i64 id) throws (1: NotFound missing)
//!     }
//!     (key = "value", other = "x")
//!     ```
//!
//!     Field types may nest containers, `map<string, list<i32>>`, and end in a cpp type,
//!     `list<i32> cpp_type "std::vector<int>"`.
//!
//!     Use [`Source`] to stack nodes line by line into a document.

use super::ast::elements::field::qualifier;
use super::ast::{
    implicit_value, Annotation, Annotations, AstNode, Comment, Const, ConstValue, ConstValueKind,
    CppType, Cursor, Enum, EnumValue, Field, FieldIndex, FieldType, Function, FunctionReturn, Identifier,
    IdentifierName, Include, Keyword, KeywordKind, Literal, LiteralValue, Location, Namespace,
    Parsed, Position, Quote, Recoverable, Requiredness, Service, Struct, Throws, TypeName,
    Typedef,
};

/// Field layout: `{index}: [qualifier ]{type} {name}[ = {default}]`
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub index: i64,
    pub requiredness: Requiredness,
    pub field_type: String,
    pub name: String,
    pub default: Option<String>,
}

impl FieldSpec {
    pub fn new(index: i64, field_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            index,
            requiredness: Requiredness::Default,
            field_type: field_type.into(),
            name: name.into(),
            default: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.requiredness = Requiredness::Required;
        self
    }

    pub fn optional(mut self) -> Self {
        self.requiredness = Requiredness::Optional;
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }
}

/// One line of a struct body
#[derive(Debug, Clone, PartialEq)]
pub enum StructBody {
    Field(FieldSpec),
    /// Text that failed to parse, becomes a bad field
    Broken(&'static str),
}

/// Function layout: `[oneway ]{returns} {name}({arguments})[ throws ({throws})]`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSpec {
    pub name: String,
    pub oneway: bool,
    /// `None` for `void`
    pub returns: Option<String>,
    pub arguments: Vec<FieldSpec>,
    pub throws: Vec<FieldSpec>,
}

impl FunctionSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            oneway: false,
            returns: None,
            arguments: Vec::new(),
            throws: Vec::new(),
        }
    }

    pub fn oneway(mut self) -> Self {
        self.oneway = true;
        self
    }

    pub fn returns(mut self, field_type: impl Into<String>) -> Self {
        self.returns = Some(field_type.into());
        self
    }

    pub fn argument(mut self, field: FieldSpec) -> Self {
        self.arguments.push(field);
        self
    }

    pub fn throws(mut self, field: FieldSpec) -> Self {
        self.throws.push(field);
        self
    }
}

/// Stacks nodes one per line, starting at the top of a source
#[derive(Debug, Clone, Copy, Default)]
pub struct Source {
    cursor: Cursor,
}

impl Source {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    /// Build a node at the current position and move to the line after it.
    pub fn line<T: AstNode>(&mut self, build: impl FnOnce(Position) -> T) -> T {
        let node = build(self.cursor.position());
        self.cursor = Cursor::at(node.end());
        self.cursor.advance("\n");
        node
    }

    /// Skip a line of text, returning where it was.
    pub fn skip(&mut self, text: &str) -> Location {
        let location = self.cursor.advance(text);
        self.cursor.advance("\n");
        location
    }

    /// Everything stacked so far.
    pub fn location(&self) -> Location {
        Location::new(Position::START, self.cursor.position())
    }
}

pub fn include(start: Position, path: &str) -> Include {
    let mut cursor = Cursor::at(start);
    let keyword = fixed(&mut cursor, KeywordKind::Include);
    cursor.advance(" ");
    let path = literal(&mut cursor, path);
    Include::new(keyword, path.into(), span(start, &cursor))
}

pub fn namespace(start: Position, scope: &str, name: &str) -> Namespace {
    let mut cursor = Cursor::at(start);
    let keyword = fixed(&mut cursor, KeywordKind::Namespace);
    cursor.advance(" ");
    let scope = identifier(&mut cursor, scope);
    cursor.advance(" ");
    let name = identifier(&mut cursor, name);
    Namespace::new(keyword, scope.into(), name.into(), span(start, &cursor))
}

pub fn constant(start: Position, field_type: &str, name: &str, value: &str) -> Const {
    let mut cursor = Cursor::at(start);
    let keyword = fixed(&mut cursor, KeywordKind::Const);
    cursor.advance(" ");
    let field_type = type_at(&mut cursor, field_type);
    cursor.advance(" ");
    let identifier = identifier(&mut cursor, name);
    cursor.advance(" ");
    let equal = fixed(&mut cursor, KeywordKind::Equal);
    cursor.advance(" ");
    let value = const_value(&mut cursor, value);
    Const::new(
        keyword,
        field_type.into(),
        identifier.into(),
        equal,
        value.into(),
        span(start, &cursor),
    )
}

pub fn typedef(start: Position, field_type: &str, alias: &str) -> Typedef {
    let mut cursor = Cursor::at(start);
    let keyword = fixed(&mut cursor, KeywordKind::Typedef);
    cursor.advance(" ");
    let field_type = type_at(&mut cursor, field_type);
    cursor.advance(" ");
    let alias = identifier(&mut cursor, alias);
    Typedef::new(keyword, field_type.into(), alias.into(), span(start, &cursor))
}

/// A field type from its text, e.g. `map<string, list<i32>>`.
pub fn field_type(start: Position, text: &str) -> FieldType {
    type_at(&mut Cursor::at(start), text)
}

pub fn field(start: Position, spec: &FieldSpec) -> Field {
    field_at(&mut Cursor::at(start), spec)
}

pub fn structure(start: Position, name: &str, body: &[StructBody]) -> Struct {
    let mut cursor = Cursor::at(start);
    let keyword = fixed(&mut cursor, KeywordKind::Struct);
    cursor.advance(" ");
    let identifier = identifier(&mut cursor, name);
    cursor.advance(" ");
    let lcur = fixed(&mut cursor, KeywordKind::LCur);
    cursor.advance("\n");

    let mut fields = Vec::with_capacity(body.len());
    for line in body {
        cursor.advance("  ");
        let field = match line {
            StructBody::Field(spec) => field_at(&mut cursor, spec).into(),
            StructBody::Broken(text) => Field::bad(cursor.advance(text)),
        };
        fields.push(field);
        cursor.advance("\n");
    }

    let rcur = fixed(&mut cursor, KeywordKind::RCur);
    Struct::new(
        keyword,
        identifier.into(),
        lcur,
        fields,
        rcur,
        span(start, &cursor),
    )
}

/// Enum with one value per line. Values without an explicit literal are resolved from the
/// previous one.
pub fn enumeration(start: Position, name: &str, values: &[(&str, Option<i64>)]) -> Enum {
    let mut cursor = Cursor::at(start);
    let keyword = fixed(&mut cursor, KeywordKind::Enum);
    cursor.advance(" ");
    let enum_name = identifier(&mut cursor, name);
    cursor.advance(" ");
    let lcur = fixed(&mut cursor, KeywordKind::LCur);
    cursor.advance("\n");

    let mut built: Vec<EnumValue> = Vec::with_capacity(values.len());
    for (name, explicit) in values {
        cursor.advance("  ");
        let value_start = cursor.position();
        let name = identifier(&mut cursor, name);
        let value = match explicit {
            Some(value) => {
                cursor.advance(" ");
                let equal = fixed(&mut cursor, KeywordKind::Equal);
                cursor.advance(" ");
                let literal = const_value(&mut cursor, &value.to_string());
                EnumValue::assigned(
                    name.into(),
                    equal,
                    literal.into(),
                    *value,
                    span(value_start, &cursor),
                )
            }
            None => EnumValue::new(
                name.into(),
                implicit_value(built.last()),
                span(value_start, &cursor),
            ),
        };
        let separator = separator(&mut cursor, ",");
        built.push(value.with_separator(separator));
        cursor.advance("\n");
    }

    let rcur = fixed(&mut cursor, KeywordKind::RCur);
    let values = built.into_iter().map(Into::into).collect();
    Enum::new(
        keyword,
        enum_name.into(),
        lcur,
        values,
        rcur,
        span(start, &cursor),
    )
}

pub fn service(
    start: Position,
    name: &str,
    extends: Option<&str>,
    functions: &[FunctionSpec],
) -> Service {
    let mut cursor = Cursor::at(start);
    let keyword = fixed(&mut cursor, KeywordKind::Service);
    cursor.advance(" ");
    let service_name = identifier(&mut cursor, name);
    cursor.advance(" ");
    let extends = extends.map(|base| {
        let keyword = fixed(&mut cursor, KeywordKind::Extends);
        cursor.advance(" ");
        let base = identifier(&mut cursor, base);
        cursor.advance(" ");
        (keyword, base)
    });
    let lcur = fixed(&mut cursor, KeywordKind::LCur);
    cursor.advance("\n");

    let mut built = Vec::with_capacity(functions.len());
    for (i, spec) in functions.iter().enumerate() {
        cursor.advance("  ");
        let mut function = function_at(&mut cursor, spec);
        if i + 1 < functions.len() {
            function = function.with_separator(separator(&mut cursor, ","));
        }
        built.push(function.into());
        cursor.advance("\n");
    }

    let rcur = fixed(&mut cursor, KeywordKind::RCur);
    let service = Service::new(
        keyword,
        service_name.into(),
        lcur,
        built,
        rcur,
        span(start, &cursor),
    );
    match extends {
        Some((keyword, base)) => service.with_extends(keyword, base.into()),
        None => service,
    }
}

/// `(key = "value", ...)`. Values containing a double quote are single-quoted.
pub fn annotations(start: Position, entries: &[(&str, &str)]) -> Annotations {
    let mut cursor = Cursor::at(start);
    let lpar = fixed(&mut cursor, KeywordKind::LPar);
    let mut built = Vec::with_capacity(entries.len());
    for (i, (key, value)) in entries.iter().enumerate() {
        if i > 0 {
            cursor.advance(" ");
        }
        let entry_start = cursor.position();
        let key = identifier(&mut cursor, key);
        cursor.advance(" ");
        let equal = fixed(&mut cursor, KeywordKind::Equal);
        cursor.advance(" ");
        let value = literal(&mut cursor, value);
        let separator = (i + 1 < entries.len()).then(|| separator(&mut cursor, ","));
        let annotation = Annotation::new(
            key.into(),
            equal,
            value.into(),
            separator,
            span(entry_start, &cursor),
        );
        built.push(annotation.into());
    }
    let rpar = fixed(&mut cursor, KeywordKind::RPar);
    Annotations::new(lpar, built, rpar, span(start, &cursor))
}

/// A comment of any style, from its text.
pub fn comment(start: Position, text: &str) -> Comment {
    Comment::from_source(text, Location::compute(start, text))
}

fn span(start: Position, cursor: &Cursor) -> Location {
    Location::new(start, cursor.position())
}

fn fixed(cursor: &mut Cursor, kind: KeywordKind) -> Keyword {
    Keyword::fixed(kind, cursor.advance(kind.text().unwrap_or_default()))
}

fn separator(cursor: &mut Cursor, text: &str) -> Keyword {
    Keyword::new(KeywordKind::ListSeparator, text, cursor.advance(text))
}

fn identifier(cursor: &mut Cursor, text: &str) -> Identifier {
    Identifier::from_name(IdentifierName::new(text, cursor.advance(text)))
}

fn literal(cursor: &mut Cursor, text: &str) -> Literal {
    let quote = if text.contains('"') {
        Quote::Single
    } else {
        Quote::Double
    };
    let mark = quote.as_char().to_string();
    let start = cursor.position();
    cursor.advance(&mark);
    let value = LiteralValue::new(text, cursor.advance(text));
    cursor.advance(&mark);
    Literal::new(Vec::new(), value, quote, span(start, cursor))
}

/// Scalar const value: integer, double, quoted string or identifier.
fn const_value(cursor: &mut Cursor, text: &str) -> ConstValue {
    let location = cursor.advance(text);
    let unquoted = text
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .map(|value| (value, Quote::Double))
        .or_else(|| {
            text.strip_prefix('\'')
                .and_then(|rest| rest.strip_suffix('\''))
                .map(|value| (value, Quote::Single))
        });
    let kind = match unquoted {
        Some((value, quote)) => ConstValueKind::Str {
            value: value.to_string(),
            quote,
        },
        None => ConstValueKind::integer(text)
            .or_else(|| ConstValueKind::double(text))
            .unwrap_or_else(|| ConstValueKind::Ident(text.to_string())),
    };
    ConstValue::new(kind, location)
}

fn type_at(cursor: &mut Cursor, text: &str) -> FieldType {
    if let Some((base, cpp)) = text
        .strip_suffix('"')
        .and_then(|rest| rest.rsplit_once(" cpp_type \""))
    {
        let field_type = type_at(cursor, base);
        cursor.advance(" ");
        let cpp_start = cursor.position();
        let keyword = fixed(cursor, KeywordKind::CppType);
        cursor.advance(" ");
        let literal = literal(cursor, cpp);
        let cpp_type = CppType::new(keyword, literal.into(), span(cpp_start, cursor));
        return field_type.with_cpp_type(cpp_type);
    }

    let start = cursor.position();
    let container = text
        .find('<')
        .and_then(|open| Some((&text[..open], text[open + 1..].strip_suffix('>')?)));
    let Some((name, inner)) = container else {
        let location = cursor.advance(text);
        return FieldType::named(TypeName::new(text, location), location);
    };

    let type_name = TypeName::new(name, cursor.advance(name));
    let lpoint = fixed(cursor, KeywordKind::LPoint);
    match split_top_level(inner) {
        Some((key, value)) => {
            let key = type_at(cursor, key);
            let comma = fixed(cursor, KeywordKind::Comma);
            let trimmed = value.trim_start();
            cursor.advance(&value[..value.len() - trimmed.len()]);
            let value = type_at(cursor, trimmed);
            let rpoint = fixed(cursor, KeywordKind::RPoint);
            FieldType::map(
                type_name,
                lpoint,
                key.into(),
                comma,
                value.into(),
                rpoint,
                span(start, cursor),
            )
        }
        None => {
            let element = type_at(cursor, inner);
            let rpoint = fixed(cursor, KeywordKind::RPoint);
            FieldType::collection(type_name, lpoint, element.into(), rpoint, span(start, cursor))
        }
    }
}

/// Split `K, V` at the comma outside any nested `<...>`.
fn split_top_level(inner: &str) -> Option<(&str, &str)> {
    let mut depth = 0usize;
    for (i, c) in inner.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => return Some((&inner[..i], &inner[i + 1..])),
            _ => {}
        }
    }
    None
}

fn field_at(cursor: &mut Cursor, spec: &FieldSpec) -> Field {
    let start = cursor.position();
    cursor.advance(&spec.index.to_string());
    let colon = fixed(cursor, KeywordKind::Colon);
    let index = FieldIndex::new(spec.index, colon, Vec::new(), span(start, cursor));
    cursor.advance(" ");

    let qualifier = match spec.requiredness {
        Requiredness::Default => None,
        requiredness => {
            let text = requiredness.as_str();
            let keyword = qualifier(text, cursor.advance(text));
            cursor.advance(" ");
            Some(keyword)
        }
    };
    let field_type = type_at(cursor, &spec.field_type);
    cursor.advance(" ");
    let identifier = identifier(cursor, &spec.name);
    let field = Field::new(
        Some(index.into()),
        qualifier,
        field_type.into(),
        identifier.into(),
        span(start, cursor),
    );

    match &spec.default {
        Some(default) => {
            cursor.advance(" ");
            let equal = fixed(cursor, KeywordKind::Equal);
            cursor.advance(" ");
            let value = const_value(cursor, default);
            field.with_default(equal, value.into())
        }
        None => field,
    }
}

/// Fields separated by `, `, each but the last carrying the separator.
fn field_list(cursor: &mut Cursor, specs: &[FieldSpec]) -> Vec<Parsed<Field>> {
    let mut fields = Vec::with_capacity(specs.len());
    for (i, spec) in specs.iter().enumerate() {
        let mut field = field_at(cursor, spec);
        if i + 1 < specs.len() {
            field = field.with_separator(separator(cursor, ","));
            cursor.advance(" ");
        }
        fields.push(field.into());
    }
    fields
}

fn function_at(cursor: &mut Cursor, spec: &FunctionSpec) -> Function {
    let start = cursor.position();
    let oneway = spec.oneway.then(|| {
        let keyword = fixed(cursor, KeywordKind::Oneway);
        cursor.advance(" ");
        keyword
    });
    let returns = match &spec.returns {
        Some(field_type) => FunctionReturn::Type(type_at(cursor, field_type).into()),
        None => FunctionReturn::Void(fixed(cursor, KeywordKind::Void)),
    };
    cursor.advance(" ");
    let identifier = identifier(cursor, &spec.name);
    let lpar = fixed(cursor, KeywordKind::LPar);
    let arguments = field_list(cursor, &spec.arguments);
    let rpar = fixed(cursor, KeywordKind::RPar);
    let function = Function::new(
        oneway,
        returns,
        identifier.into(),
        lpar,
        arguments,
        rpar,
        span(start, cursor),
    );
    if spec.throws.is_empty() {
        return function;
    }

    cursor.advance(" ");
    let throws_start = cursor.position();
    let keyword = fixed(cursor, KeywordKind::Throws);
    cursor.advance(" ");
    let lpar = fixed(cursor, KeywordKind::LPar);
    let fields = field_list(cursor, &spec.throws);
    let rpar = fixed(cursor, KeywordKind::RPar);
    let throws = Throws::new(keyword, lpar, fields, rpar, span(throws_start, cursor));
    function.with_throws(throws.into())
}
