//! Span arithmetic: computed locations, half-open containment and chaining

use proptest::prelude::*;
use rstest::rstest;
use thrift_ast::thrift::ast::{location, Cursor, Location, Position, SourceMap};
use thrift_ast::thrift::lexing::tokenize;

#[test]
fn test_single_line_span() {
    let span = Location::compute(Position::START, "include");

    assert_eq!(span.end, Position::new(1, 8, 7));
    assert_eq!(span.end.offset, 7);
}

#[test]
fn test_multi_line_span() {
    let text = "struct Foo {\n  1: string a\n}";
    let span = Location::compute(Position::START, text);

    assert_eq!(span.end.line, 3);
    assert_eq!(span.end.column, 2);
    assert_eq!(span.end.offset, text.len() as isize);
}

#[rstest]
#[case("", 1, 1, 0)]
#[case("é", 1, 2, 2)]
#[case("名前", 1, 3, 6)]
#[case("a\n", 2, 1, 2)]
#[case("a\nñb", 2, 3, 5)]
#[case("\n\n\n", 4, 1, 3)]
fn test_columns_count_runes_offsets_count_bytes(
    #[case] text: &str,
    #[case] line: isize,
    #[case] column: isize,
    #[case] offset: isize,
) {
    let end = Location::compute(Position::START, text).end;

    assert_eq!((end.line, end.column, end.offset), (line, column, offset));
}

#[test]
fn test_contains_is_half_open() {
    let span = Location::compute(Position::new(2, 5, 20), "User");

    assert!(span.contains(span.start));
    assert!(!span.contains(span.end));
    assert!(span.contains(Position::new(2, 8, 23)));
    assert!(!span.contains(Position::new(2, 4, 19)));
    assert!(!location::contains(None, span.start));
    assert!(location::contains(Some(&span), span.start));
}

#[test]
fn test_empty_span_contains_nothing() {
    let span = Location::empty(Position::new(3, 3, 10));

    assert!(span.is_empty());
    assert!(!span.contains(span.start));
}

#[test]
fn test_position_order_ignores_offset() {
    assert_eq!(Position::new(1, 4, 3), Position::new(1, 4, 99));
    assert!(Position::new(1, 9, 8) < Position::new(2, 1, 9));
    assert!(Position::new(2, 3, 0) > Position::new(2, 2, 0));
}

fn text_from(pieces: &'static [&'static str]) -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::sample::select(pieces), 0..40)
        .prop_map(|pieces| pieces.concat())
}

fn source_text() -> impl Strategy<Value = String> {
    text_from(&["struct", " ", "\n", "{", "é", "名", "1: i32 x", "# note"])
}

fn thrift_text() -> impl Strategy<Value = String> {
    text_from(&[
        "struct", " ", "\n", "{", "}", "1: i32 x", "# note", "\"s\"", "map<K, V>", "0x1F", "-2.5",
    ])
}

proptest! {
    #[test]
    fn prop_spans_chain(text in source_text(), split in 0usize..200) {
        let mut split = split.min(text.len());
        while !text.is_char_boundary(split) {
            split -= 1;
        }
        let (head, tail) = text.split_at(split);

        let mut cursor = Cursor::new();
        let first = cursor.advance(head);
        let second = cursor.advance(tail);
        let whole = Location::compute(Position::START, &text);

        prop_assert_eq!(first.end, second.start);
        prop_assert_eq!(second.end, whole.end);
        prop_assert_eq!(second.end.offset, whole.end.offset);
    }

    #[test]
    fn prop_source_map_agrees_with_compute(text in source_text()) {
        let map = SourceMap::new(&text);
        let end = Location::compute(Position::START, &text).end;
        let mapped = map.position_at(text.len()).unwrap();

        prop_assert_eq!(mapped, end);
        prop_assert_eq!(mapped.offset, end.offset);
        prop_assert_eq!(map.offset_of(end.line, end.column), Some(text.len()));
    }

    #[test]
    fn prop_lexemes_match_their_text(text in thrift_text()) {
        let map = SourceMap::new(&text);
        for lexeme in tokenize(&text) {
            let start = lexeme.location.start.offset as usize;
            let end = lexeme.location.end.offset as usize;

            prop_assert_eq!(&text[start..end], lexeme.text.as_str());
            prop_assert_eq!(map.position_at(start), Some(lexeme.location.start));
        }
    }
}
