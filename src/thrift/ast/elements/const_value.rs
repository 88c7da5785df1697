//! Constant values
//!
//! Values appear as const initializers, field defaults and enum value assignments:
//!
//! ```text
//! const i32 MAX = 0x7f
//! const list<string> NAMES = ["a", "b"]
//! const map<string, i32> IDS = {"a": 1, "b": 2}
//! 2: i32 retries = DEFAULT_RETRIES
//! ```
//!
//! Integers and doubles keep the text they were written with next to the parsed value. Lists
//! and maps own their items as nested values, and each map entry is a `pair` value holding a
//! key and a value, so traversal and position lookups reach every element of a collection.

use super::super::kind::{Category, NodeKind};
use super::super::location::Location;
use super::super::traits::{AstNode, Children};
use super::bad::{Parsed, Recoverable};
use super::literal::Quote;
use super::tokens::{Comment, Keyword};

#[derive(Debug, Clone, PartialEq)]
pub enum ConstValueKind {
    Integer {
        value: i64,
        text: String,
    },
    Double {
        value: f64,
        text: String,
    },
    Str {
        value: String,
        quote: Quote,
    },
    /// Reference to another const or an enum value, unresolved
    Ident(String),
    List {
        lbrk: Keyword,
        items: Vec<Parsed<ConstValue>>,
        rbrk: Keyword,
    },
    Map {
        lcur: Keyword,
        /// Entries are `Pair` values
        entries: Vec<Parsed<ConstValue>>,
        rcur: Keyword,
    },
    Pair {
        key: Box<Parsed<ConstValue>>,
        colon: Keyword,
        value: Box<Parsed<ConstValue>>,
    },
}

impl ConstValueKind {
    /// Integer from its source text: decimal or `0x` hex, optionally signed.
    pub fn integer(text: impl Into<String>) -> Option<ConstValueKind> {
        let text = text.into();
        let (negative, digits) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text.as_str()),
        };
        let (radix, digits) = match digits
            .strip_prefix("0x")
            .or_else(|| digits.strip_prefix("0X"))
        {
            Some(hex) => (16, hex),
            None => (10, digits),
        };
        // Only one sign, and only in front.
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        let magnitude = i128::from(u64::from_str_radix(digits, radix).ok()?);
        let value = i64::try_from(if negative { -magnitude } else { magnitude }).ok()?;
        Some(ConstValueKind::Integer { value, text })
    }

    pub fn double(text: impl Into<String>) -> Option<ConstValueKind> {
        let text = text.into();
        let value = text.parse::<f64>().ok()?;
        Some(ConstValueKind::Double { value, text })
    }

    /// Tag name of the value.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConstValueKind::Integer { .. } => "i64",
            ConstValueKind::Double { .. } => "double",
            ConstValueKind::Str { .. } => "string",
            ConstValueKind::Ident(_) => "identifier",
            ConstValueKind::List { .. } => "list",
            ConstValueKind::Map { .. } => "map",
            ConstValueKind::Pair { .. } => "pair",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstValue {
    pub comments: Vec<Comment>,
    pub value: ConstValueKind,
    /// `,` or `;` following a list item or map entry
    pub separator: Option<Keyword>,
    pub location: Location,
}

impl ConstValue {
    pub fn new(value: ConstValueKind, location: Location) -> Self {
        Self {
            comments: Vec::new(),
            value,
            separator: None,
            location,
        }
    }

    /// Map entry `key: value`, spanning from the key to the value.
    pub fn pair(key: Parsed<ConstValue>, colon: Keyword, value: Parsed<ConstValue>) -> Self {
        let location = key.location().cover(value.location());
        Self::new(
            ConstValueKind::Pair {
                key: Box::new(key),
                colon,
                value: Box::new(value),
            },
            location,
        )
    }

    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        if let Some(span) = Location::bounding_box(comments.iter().map(|c| &c.location)) {
            self.location = self.location.cover(&span);
        }
        self.comments = comments;
        self
    }

    pub fn with_separator(mut self, separator: Keyword) -> Self {
        self.location = self.location.cover(&separator.location);
        self.separator = Some(separator);
        self
    }

    pub fn type_name(&self) -> &'static str {
        self.value.type_name()
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self.value {
            ConstValueKind::Integer { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Numeric value; integers widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self.value {
            ConstValueKind::Double { value, .. } => Some(value),
            ConstValueKind::Integer { value, .. } => Some(value as f64),
            _ => None,
        }
    }

    /// Contents of a string value, or the name of an identifier value.
    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            ConstValueKind::Str { value, .. } | ConstValueKind::Ident(value) => Some(value),
            _ => None,
        }
    }

    /// Numeric literal as written.
    pub fn raw_text(&self) -> Option<&str> {
        match &self.value {
            ConstValueKind::Integer { text, .. } | ConstValueKind::Double { text, .. } => {
                Some(text)
            }
            _ => None,
        }
    }

    /// Key of a map entry.
    pub fn key(&self) -> Option<&Parsed<ConstValue>> {
        match &self.value {
            ConstValueKind::Pair { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Value of a map entry.
    pub fn pair_value(&self) -> Option<&Parsed<ConstValue>> {
        match &self.value {
            ConstValueKind::Pair { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Items of a list or entries of a map.
    pub fn elements(&self) -> &[Parsed<ConstValue>] {
        match &self.value {
            ConstValueKind::List { items, .. } => items,
            ConstValueKind::Map { entries, .. } => entries,
            _ => &[],
        }
    }
}

impl AstNode for ConstValue {
    fn kind(&self) -> NodeKind {
        NodeKind::ConstValue
    }
    fn location(&self) -> &Location {
        &self.location
    }
    fn children(&self) -> Vec<&dyn AstNode> {
        let children = Children::new().all(&self.comments);
        let children = match &self.value {
            ConstValueKind::List { lbrk, items, rbrk } => {
                children.node(lbrk).all(items).node(rbrk)
            }
            ConstValueKind::Map {
                lcur,
                entries,
                rcur,
            } => children.node(lcur).all(entries).node(rcur),
            ConstValueKind::Pair { key, colon, value } => children
                .node(key.as_ref())
                .node(colon)
                .node(value.as_ref()),
            _ => children,
        };
        children.opt(self.separator.as_ref()).finish()
    }
    fn is_invalid(&self) -> bool {
        false
    }
    fn display_label(&self) -> String {
        match &self.value {
            ConstValueKind::Integer { text, .. } | ConstValueKind::Double { text, .. } => {
                text.clone()
            }
            ConstValueKind::Str { value, quote } => {
                format!("{}{}{}", quote.as_char(), value, quote.as_char())
            }
            ConstValueKind::Ident(name) => name.clone(),
            ConstValueKind::List { items, .. } => format!("[{} items]", items.len()),
            ConstValueKind::Map { entries, .. } => format!("{{{} entries}}", entries.len()),
            ConstValueKind::Pair { key, value, .. } => {
                format!("{}: {}", key.display_label(), value.display_label())
            }
        }
    }
}

impl Recoverable for ConstValue {
    const CATEGORY: Category = Category::ConstValue;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thrift::ast::kind::KeywordKind;
    use crate::thrift::ast::location::{Cursor, Position};
    use crate::thrift::ast::lookup::find_node_at_position;
    use rstest::rstest;

    fn int(cursor: &mut Cursor, text: &str) -> ConstValue {
        let location = cursor.advance(text);
        ConstValue::new(ConstValueKind::integer(text).unwrap(), location)
    }

    fn string(cursor: &mut Cursor, text: &str) -> ConstValue {
        let location = cursor.advance(&format!("\"{}\"", text));
        let value = ConstValueKind::Str {
            value: text.to_string(),
            quote: Quote::Double,
        };
        ConstValue::new(value, location)
    }

    /// `{"a": 1, "b": 2}`
    fn map() -> ConstValue {
        let mut cursor = Cursor::new();
        let lcur = Keyword::fixed(KeywordKind::LCur, cursor.advance("{"));
        let mut entries = Vec::new();
        for (i, (key, value)) in [("a", "1"), ("b", "2")].into_iter().enumerate() {
            if i > 0 {
                cursor.advance(" ");
            }
            let key = string(&mut cursor, key);
            let colon = Keyword::fixed(KeywordKind::Colon, cursor.advance(":"));
            cursor.advance(" ");
            let value = int(&mut cursor, value);
            let mut entry = ConstValue::pair(key.into(), colon, value.into());
            if i == 0 {
                let separator =
                    Keyword::new(KeywordKind::ListSeparator, ",", cursor.advance(","));
                entry = entry.with_separator(separator);
            }
            entries.push(Parsed::Node(entry));
        }
        let rcur = Keyword::fixed(KeywordKind::RCur, cursor.advance("}"));
        let kind = ConstValueKind::Map {
            lcur,
            entries,
            rcur,
        };
        ConstValue::new(kind, Location::new(Position::START, cursor.position()))
    }

    #[rstest]
    #[case("42", 42)]
    #[case("-7", -7)]
    #[case("+3", 3)]
    #[case("0x1F", 31)]
    #[case("-0x10", -16)]
    #[case("-9223372036854775808", i64::MIN)]
    #[case("9223372036854775807", i64::MAX)]
    fn test_integer_keeps_text(#[case] text: &str, #[case] expected: i64) {
        let value = ConstValue::new(
            ConstValueKind::integer(text).unwrap(),
            Location::compute(Position::START, text),
        );
        assert_eq!(value.as_i64(), Some(expected));
        assert_eq!(value.raw_text(), Some(text));
        assert_eq!(value.type_name(), "i64");
    }

    #[rstest]
    #[case("--5")]
    #[case("+-5")]
    #[case("-+5")]
    #[case("-0x-1")]
    #[case("0x+1F")]
    #[case("-")]
    #[case("0x")]
    #[case("9223372036854775808")]
    #[case("-9223372036854775809")]
    fn test_malformed_integer_text_is_rejected(#[case] text: &str) {
        assert!(ConstValueKind::integer(text).is_none());
    }

    #[test]
    fn test_double_and_invalid_numbers() {
        let value = ConstValueKind::double("1e3").unwrap();
        assert_eq!(value.type_name(), "double");
        assert!(ConstValueKind::integer("12abc").is_none());
        assert!(ConstValueKind::double("x").is_none());
    }

    #[test]
    fn test_map_enumerates_entries() {
        let map = map();

        assert_eq!(map.type_name(), "map");
        assert_eq!(map.elements().len(), 2);
        let kinds: Vec<_> = map.children().iter().map(|c| c.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::Keyword(KeywordKind::LCur),
                NodeKind::ConstValue,
                NodeKind::ConstValue,
                NodeKind::Keyword(KeywordKind::RCur),
            ]
        );

        let first = map.elements()[0].node().unwrap();
        assert_eq!(first.type_name(), "pair");
        assert_eq!(first.key().and_then(|k| k.node()).and_then(|k| k.as_str()), Some("a"));
        assert_eq!(first.pair_value().and_then(|v| v.node()).and_then(|v| v.as_i64()), Some(1));
        assert_eq!(first.children().len(), 4);
    }

    #[test]
    fn test_lookup_descends_into_collection() {
        let map = map();
        // `{"a": 1, "b": 2}`, column 7 is the `1`
        let node = find_node_at_position(&map, Position::new(1, 7, 6)).unwrap();
        assert_eq!(node.kind(), NodeKind::ConstValue);
        assert_eq!(node.display_label(), "1");
    }

    #[test]
    fn test_bad_item_inside_list() {
        let mut cursor = Cursor::new();
        let lbrk = Keyword::fixed(KeywordKind::LBrk, cursor.advance("["));
        let good = int(&mut cursor, "1")
            .with_separator(Keyword::new(KeywordKind::ListSeparator, ",", cursor.advance(",")));
        let bad = ConstValue::bad(cursor.advance(" ?"));
        let rbrk = Keyword::fixed(KeywordKind::RBrk, cursor.advance("]"));
        let list = ConstValue::new(
            ConstValueKind::List {
                lbrk,
                items: vec![good.into(), bad],
                rbrk,
            },
            Location::new(Position::START, cursor.position()),
        );

        assert!(!list.is_invalid());
        assert!(list.subtree_invalid());
        assert_eq!(list.display_label(), "[2 items]");
        assert_eq!(list.children()[2].node_type(), "BadConstValue");
    }
}
