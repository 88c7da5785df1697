//! Bad placeholders, partial failure and the subtree-invalid check

use proptest::prelude::*;
use thrift_ast::thrift::ast::{
    invalid_nodes, iter_all_nodes, Annotation, Annotations, AstNode, Comment, Const, ConstValue,
    CppInclude, Cursor, Definition, Enum, EnumValue, Exception, Field, FieldIndex, FieldType,
    Function, Header, Identifier, IdentifierName, Include, Keyword, KeywordKind, Literal,
    LiteralValue, Location, Namespace, Position, Recoverable, Service, Struct, Throws, TypeName,
    Typedef, Union,
};
use thrift_ast::thrift::testing::{structure, FieldSpec, StructBody};

fn skipped() -> Location {
    Location::compute(Position::new(4, 3, 40), "1: ??? garbage {{ }")
}

fn assert_opaque(node: &dyn AstNode, expected_type: &str) {
    assert_eq!(node.node_type(), expected_type);
    assert!(node.is_invalid(), "{} should be invalid", expected_type);
    assert!(node.children().is_empty(), "{} should have no children", expected_type);
    assert!(!node.subtree_invalid());
    assert_eq!(*node.location(), skipped());
}

#[test]
fn test_every_composite_bad_constructor_is_opaque() {
    let at = skipped();
    assert_opaque(&Header::bad(at), "BadHeader");
    assert_opaque(&Definition::bad(at), "BadDefinition");
    assert_opaque(&Include::bad(at), "BadInclude");
    assert_opaque(&CppInclude::bad(at), "BadCPPInclude");
    assert_opaque(&Namespace::bad(at), "BadNamespace");
    assert_opaque(&Const::bad(at), "BadConst");
    assert_opaque(&Typedef::bad(at), "BadTypedef");
    assert_opaque(&Enum::bad(at), "BadEnum");
    assert_opaque(&EnumValue::bad(at), "BadEnumValue");
    assert_opaque(&Struct::bad(at), "BadStruct");
    assert_opaque(&Union::bad(at), "BadUnion");
    assert_opaque(&Exception::bad(at), "BadException");
    assert_opaque(&Service::bad(at), "BadService");
    assert_opaque(&Function::bad(at), "BadFunction");
    assert_opaque(&Throws::bad(at), "BadThrows");
    assert_opaque(&Field::bad(at), "BadField");
    assert_opaque(&FieldIndex::bad(at), "BadFieldIndex");
    assert_opaque(&FieldType::bad(at), "BadFieldType");
    assert_opaque(&ConstValue::bad(at), "BadConstValue");
    assert_opaque(&Identifier::bad(at), "BadIdentifier");
    assert_opaque(&Literal::bad(at), "BadLiteral");
    assert_opaque(&Annotations::bad(at), "BadAnnotations");
    assert_opaque(&Annotation::bad(at), "BadAnnotation");
}

#[test]
fn test_every_leaf_bad_constructor_is_invalid() {
    let at = skipped();
    let leaves: Vec<Box<dyn AstNode>> = vec![
        Box::new(Keyword::bad(KeywordKind::RCur, at)),
        Box::new(Comment::bad(at)),
        Box::new(IdentifierName::bad(at)),
        Box::new(LiteralValue::bad(at)),
        Box::new(TypeName::bad(at)),
    ];

    for leaf in &leaves {
        assert!(leaf.is_invalid());
        assert!(leaf.children().is_empty());
        assert_eq!(leaf.display_label(), "");
    }
}

#[test]
fn test_bad_field_inside_valid_struct() {
    let user = structure(
        Position::START,
        "User",
        &[
            StructBody::Field(FieldSpec::new(1, "string", "name")),
            StructBody::Broken("2: ??? age"),
            StructBody::Field(FieldSpec::new(3, "i64", "id")),
        ],
    );

    assert!(!user.is_invalid());
    assert!(user.subtree_invalid());
    assert_eq!(user.valid_fields().count(), 2);

    let types: Vec<_> = user.children().iter().map(|c| c.node_type()).collect();
    assert_eq!(
        types,
        vec![
            "StructKeyword",
            "Identifier",
            "LCurKeyword",
            "Field",
            "BadField",
            "Field",
            "RCurKeyword"
        ]
    );
    let bad = user.children()[4];
    assert_eq!(bad.position(), Position::new(3, 3, 33));
}

#[test]
fn test_bad_leaf_below_valid_identifier() {
    let mut cursor = Cursor::new();
    let name = IdentifierName::new("id", cursor.advance("id"));
    let mut identifier = Identifier::from_name(name);
    identifier.name.invalid = true;

    assert!(!identifier.is_invalid());
    assert!(identifier.subtree_invalid());
    assert_eq!(invalid_nodes(&identifier).len(), 1);
}

fn body_line() -> impl Strategy<Value = StructBody> {
    prop_oneof![
        (1i64..100, "[a-z]{1,8}").prop_map(|(index, name)| {
            StructBody::Field(FieldSpec::new(index, "i32", name))
        }),
        (1i64..100, "[a-z]{1,8}").prop_map(|(index, name)| {
            StructBody::Field(FieldSpec::new(index, "map<string, list<i32>>", name).optional())
        }),
        Just(StructBody::Broken("??? nope")),
        Just(StructBody::Broken("")),
    ]
}

proptest! {
    #[test]
    fn prop_subtree_invalid_iff_invalid_descendant(
        body in proptest::collection::vec(body_line(), 0..8)
    ) {
        let user = structure(Position::START, "User", &body);
        let broken = body.iter().any(|line| matches!(line, StructBody::Broken(_)));

        prop_assert_eq!(user.subtree_invalid(), broken);
        for node in iter_all_nodes(&user) {
            prop_assert_eq!(node.subtree_invalid(), !invalid_nodes(node).is_empty());
        }
    }

    #[test]
    fn prop_children_sorted_and_contained(body in proptest::collection::vec(body_line(), 0..8)) {
        let user = structure(Position::START, "User", &body);

        for node in iter_all_nodes(&user) {
            let children = node.children();
            for pair in children.windows(2) {
                prop_assert!(pair[0].position() <= pair[1].position());
            }
            for child in children {
                prop_assert!(node.location().start <= child.position());
                prop_assert!(child.end() <= node.location().end);
            }
        }
    }
}
