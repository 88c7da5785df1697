//! Lexing for thrift
//!
//!     A flat token feed for tooling and tests. It is not the grammar: it does not build trees
//!     and knows nothing about where a token is allowed. What it does guarantee is locations.
//!     Every lexeme's location is produced by threading [`Cursor`] through the source,
//!     skipped whitespace included, so a token feed is the reference for how spans chain.
//!
//!     Core tokenization uses a vanilla logos lexer. Input no rule matches comes out as
//!     [`Token::Unknown`] lexemes; tokenizing never fails.
//!
//! Tokens
//!
//!     - keywords: `include`, `cpp_include`, `namespace`, `const`, `typedef`, `enum`,
//!       `struct`, `union`, `exception`, `service`, `extends`, `oneway`, `void`, `throws`,
//!       `cpp_type`, and the qualifiers `required`/`optional`
//!     - punctuation: `{ } ( ) [ ] < > : , ; =`
//!     - identifiers, possibly dotted (`shared.User`)
//!     - integers (decimal or `0x` hex), doubles
//!     - single- and double-quoted strings
//!     - comments in the three styles: `#`, `//` and `/* */`

use super::ast::{Comment, Cursor, Keyword, KeywordKind, Location};
use log::trace;
use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    #[token("include")]
    Include,
    #[token("cpp_include")]
    CppInclude,
    #[token("namespace")]
    Namespace,
    #[token("const")]
    Const,
    #[token("typedef")]
    Typedef,
    #[token("enum")]
    Enum,
    #[token("struct")]
    Struct,
    #[token("union")]
    Union,
    #[token("exception")]
    Exception,
    #[token("service")]
    Service,
    #[token("extends")]
    Extends,
    #[token("oneway")]
    Oneway,
    #[token("void")]
    Void,
    #[token("throws")]
    Throws,
    #[token("cpp_type")]
    CppType,
    #[token("required")]
    #[token("optional")]
    Qualifier,

    #[token("{")]
    LCur,
    #[token("}")]
    RCur,
    #[token("(")]
    LPar,
    #[token(")")]
    RPar,
    #[token("[")]
    LBrk,
    #[token("]")]
    RBrk,
    #[token("<")]
    LPoint,
    #[token(">")]
    RPoint,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("=")]
    Equal,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*(\.[a-zA-Z_][a-zA-Z0-9_]*)*")]
    Identifier,
    #[regex(r"[+-]?[0-9]+")]
    #[regex(r"0[xX][0-9a-fA-F]+")]
    Integer,
    #[regex(r"[+-]?[0-9]*\.[0-9]+([eE][+-]?[0-9]+)?")]
    #[regex(r"[+-]?[0-9]+[eE][+-]?[0-9]+")]
    Double,
    #[regex(r#""[^"]*""#)]
    #[regex(r"'[^']*'")]
    Str,

    #[regex(r"#[^\n]*")]
    #[regex(r"//[^\n]*")]
    #[regex(r"/\*[^*]*\*+([^/*][^*]*\*+)*/")]
    Comment,

    /// Input no other rule matches
    Unknown,
}

impl Token {
    /// Keyword kind this token stands for, if it is a keyword or punctuation.
    pub fn keyword_kind(&self) -> Option<KeywordKind> {
        let kind = match self {
            Token::Include => KeywordKind::Include,
            Token::CppInclude => KeywordKind::CppInclude,
            Token::Namespace => KeywordKind::Namespace,
            Token::Const => KeywordKind::Const,
            Token::Typedef => KeywordKind::Typedef,
            Token::Enum => KeywordKind::Enum,
            Token::Struct => KeywordKind::Struct,
            Token::Union => KeywordKind::Union,
            Token::Exception => KeywordKind::Exception,
            Token::Service => KeywordKind::Service,
            Token::Extends => KeywordKind::Extends,
            Token::Oneway => KeywordKind::Oneway,
            Token::Void => KeywordKind::Void,
            Token::Throws => KeywordKind::Throws,
            Token::CppType => KeywordKind::CppType,
            Token::Qualifier => KeywordKind::Required,
            Token::LCur => KeywordKind::LCur,
            Token::RCur => KeywordKind::RCur,
            Token::LPar => KeywordKind::LPar,
            Token::RPar => KeywordKind::RPar,
            Token::LBrk => KeywordKind::LBrk,
            Token::RBrk => KeywordKind::RBrk,
            Token::LPoint => KeywordKind::LPoint,
            Token::RPoint => KeywordKind::RPoint,
            Token::Colon => KeywordKind::Colon,
            Token::Comma => KeywordKind::Comma,
            Token::Semicolon => KeywordKind::ListSeparator,
            Token::Equal => KeywordKind::Equal,
            Token::Identifier
            | Token::Integer
            | Token::Double
            | Token::Str
            | Token::Comment
            | Token::Unknown => return None,
        };
        Some(kind)
    }
}

/// A token with the text it matched and where it was matched
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    pub token: Token,
    pub text: String,
    pub location: Location,
}

impl Lexeme {
    /// The keyword leaf for this lexeme, if it is a keyword or punctuation.
    pub fn keyword(&self) -> Option<Keyword> {
        self.token
            .keyword_kind()
            .map(|kind| Keyword::new(kind, self.text.as_str(), self.location))
    }

    pub fn comment(&self) -> Option<Comment> {
        (self.token == Token::Comment).then(|| Comment::from_source(&self.text, self.location))
    }
}

/// Tokenize `source` into lexemes with chained locations.
pub fn tokenize(source: &str) -> Vec<Lexeme> {
    let mut cursor = Cursor::new();
    let mut consumed = 0;
    let mut lexemes = Vec::new();

    for (result, span) in Token::lexer(source).spanned() {
        cursor.advance(&source[consumed..span.start]);
        let text = &source[span.clone()];
        let location = cursor.advance(text);
        consumed = span.end;

        let token = result.unwrap_or_else(|_| {
            trace!("unrecognised input {:?} at {}", text, location);
            Token::Unknown
        });
        lexemes.push(Lexeme {
            token,
            text: text.to_string(),
            location,
        });
    }

    lexemes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thrift::ast::Position;
    use rstest::rstest;

    fn tokens(source: &str) -> Vec<Token> {
        tokenize(source).into_iter().map(|lexeme| lexeme.token).collect()
    }

    #[test]
    fn test_struct_declaration() {
        assert_eq!(
            tokens("struct User {\n  1: required string name;\n}"),
            vec![
                Token::Struct,
                Token::Identifier,
                Token::LCur,
                Token::Integer,
                Token::Colon,
                Token::Qualifier,
                Token::Identifier,
                Token::Identifier,
                Token::Semicolon,
                Token::RCur,
            ]
        );
    }

    #[rstest]
    #[case("42", Token::Integer)]
    #[case("-7", Token::Integer)]
    #[case("0xFF", Token::Integer)]
    #[case("3.14", Token::Double)]
    #[case("1e10", Token::Double)]
    #[case("\"text\"", Token::Str)]
    #[case("'it'", Token::Str)]
    #[case("shared.User", Token::Identifier)]
    #[case("cpp_include", Token::CppInclude)]
    #[case("includes", Token::Identifier)]
    #[case("# note", Token::Comment)]
    #[case("// note", Token::Comment)]
    #[case("/* a\n b */", Token::Comment)]
    #[case("/** doc **/", Token::Comment)]
    #[case("/* a * b / c */", Token::Comment)]
    #[case("/**/", Token::Comment)]
    fn test_single_token(#[case] source: &str, #[case] expected: Token) {
        let lexemes = tokenize(source);
        assert_eq!(lexemes.len(), 1);
        assert_eq!(lexemes[0].token, expected);
        assert_eq!(lexemes[0].text, source);
    }

    #[test]
    fn test_locations_chain_through_whitespace() {
        let lexemes = tokenize("enum E {\n  A = 1\n}");

        let a = &lexemes[3];
        assert_eq!(a.text, "A");
        assert_eq!(a.location.start, Position::new(2, 3, 11));
        assert_eq!(a.location.end, Position::new(2, 4, 12));
        let rcur = lexemes.last().unwrap();
        assert_eq!(rcur.location.start, Position::new(3, 1, 17));
    }

    #[test]
    fn test_multiline_comment_location() {
        let lexemes = tokenize("/* a\nbc */ x");

        assert_eq!(lexemes[0].location.end, Position::new(2, 6, 10));
        assert_eq!(lexemes[1].location.start, Position::new(2, 7, 11));
    }

    #[test]
    fn test_block_comments_end_at_first_close() {
        let lexemes = tokenize("/* a */ x /* b */");
        let texts: Vec<_> = lexemes.iter().map(|l| (l.token, l.text.as_str())).collect();

        assert_eq!(
            texts,
            vec![
                (Token::Comment, "/* a */"),
                (Token::Identifier, "x"),
                (Token::Comment, "/* b */"),
            ]
        );
        let comment = lexemes[2].comment().unwrap();
        assert_eq!(comment.body(), " b ");
        assert_eq!(comment.location.start, Position::new(1, 11, 10));
    }

    #[test]
    fn test_unknown_input_is_kept() {
        let lexemes = tokenize("struct @ X");

        assert_eq!(lexemes[1].token, Token::Unknown);
        assert_eq!(lexemes[1].text, "@");
        assert_eq!(lexemes[2].token, Token::Identifier);
    }

    #[test]
    fn test_lexeme_to_nodes() {
        let lexemes = tokenize("required # why");

        let keyword = lexemes[0].keyword().unwrap();
        assert_eq!(keyword.kind, KeywordKind::Required);
        assert_eq!(keyword.text, "required");
        assert!(lexemes[0].comment().is_none());

        let comment = lexemes[1].comment().unwrap();
        assert_eq!(comment.body(), " why");
        assert!(lexemes[1].keyword().is_none());
    }
}
