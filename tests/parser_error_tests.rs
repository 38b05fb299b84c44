//! Error paths: fragment ordering rules, class state machine violations,
//! and aggregated multi-violation reports.

use javasrc::parser::parse_type;
use javasrc::{CodeKind, Error, ParseError};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn parse_error(source: &str) -> ParseError {
    match parse_type(source).expect_err("expected failure") {
        Error::Parse(error) => error,
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn two_package_declarations_rejected() {
    let error = parse_error("package com.a;\npackage com.b;");
    assert_eq!(error.kind(), CodeKind::Unknown);
    assert_eq!(error.to_string(), "Encountered two package declarations!");
}

#[test]
fn package_after_class_rejected() {
    let error = parse_error("class A {\n}\npackage com.a;");
    assert_eq!(
        error.to_string(),
        "Encountered a package declaration after a field, method, or class!"
    );
}

#[test]
fn import_after_class_rejected() {
    let error = parse_error("class A {\n}\nimport java.util.List;");
    assert_eq!(
        error.to_string(),
        "Encountered an import statement after a field, method, or class!"
    );
}

#[test]
fn two_javadocs_rejected() {
    let error = parse_error("/** first */\n/** second */");
    assert_eq!(error.to_string(), "Encountered two javadocs!");
}

#[test]
fn javadoc_after_class_rejected() {
    let error = parse_error("class A {\n}\n/** late */");
    assert_eq!(
        error.to_string(),
        "Encountered a javadoc after a field, method, or class!"
    );
}

#[test]
fn annotation_after_class_rejected() {
    let error = parse_error("class A {\n}\n@Entity");
    assert_eq!(
        error.to_string(),
        "Encountered an annotation after a field, method, or class!"
    );
}

#[test]
fn two_outer_classes_rejected() {
    let error = parse_error("class A {\n}\nclass B {\n}");
    assert_eq!(error.to_string(), "Encountered two outer classes!");
}

#[test]
fn field_outside_class_rejected() {
    init_logger();
    let error = parse_error("class A {\n}\nint stray;");
    assert_eq!(error.to_string(), "Encountered a field outside a class!");
}

#[test]
fn class_after_field_rejected() {
    let error = parse_error("int stray;\nclass A {\n}");
    assert_eq!(
        error.to_string(),
        "Encountered a class alongside a field or method!"
    );
}

#[test]
fn two_root_fields_rejected() {
    let error = parse_error("int a;\nint b;");
    assert_eq!(error.to_string(), "Encountered a second field!");
}

#[test]
fn annotations_with_nothing_to_attach_rejected() {
    let error = parse_error("@Entity\n@Table");
    assert_eq!(
        error.to_string(),
        "Encountered annotations with nothing to attach them to!"
    );
}

#[test]
fn floating_javadoc_attaches_to_following_class() {
    let parsed = parse_type("/** Docs. */\nclass A {\n}").expect("failed to parse");
    match parsed {
        javasrc::CodeType::Class(class) => {
            assert!(class.javadoc().is_some());
        }
        other => panic!("expected a class, got {:?}", other),
    }
}

#[test]
fn extends_after_block_open_rejected() {
    let error = parse_error("class Test{ extends\n}");
    assert_eq!(error.kind(), CodeKind::Class);
    assert_eq!(
        error.to_string(),
        "found 'extends' after hitting the block open token!"
    );
}

#[test]
fn block_open_twice_rejected() {
    let error = parse_error("class A { {\n}");
    assert_eq!(error.to_string(), "hit the block open token twice!");
}

#[test]
fn block_closed_before_opened_rejected() {
    let error = parse_error("class Test}");
    assert_eq!(
        error.to_string(),
        "found the block close token before the block open token!"
    );
}

#[test]
fn trailing_javadoc_in_class_rejected() {
    let error = parse_error("class A {\n    /** dangling */\n}");
    assert_eq!(
        error.to_string(),
        "found a javadoc at end of class with nothing to attach!"
    );
}

#[test]
fn trailing_annotations_in_class_rejected() {
    let error = parse_error("class A {\n    @Deprecated\n}");
    assert_eq!(
        error.to_string(),
        "found annotations at end of class with nothing to attach!"
    );
}

#[test]
fn implements_without_a_name_rejected() {
    let error = parse_error("class A implements {\n}");
    assert_eq!(
        error.to_string(),
        "Failed to find an interface name after 'implements'!"
    );
}

#[test]
fn implements_with_dangling_comma_rejected() {
    let error = parse_error("class A implements B, {\n}");
    assert_eq!(error.to_string(), "Failed to find an interface name after ','!");
}

#[test]
fn missing_class_name_rejected() {
    let error = parse_error("class");
    assert!(error.to_string().contains("Failed to find a class name!"));
}

#[test]
fn package_omissions_aggregate_into_one_error() {
    let error = parse_error("package");
    assert_eq!(error.kind(), CodeKind::Package);
    assert_eq!(
        error.to_string(),
        "Failed to find a package name!\nFailed to find a terminating semicolon!"
    );
    assert_eq!(error.violations().len(), 2);
}

#[test]
fn second_visibility_modifier_rejected() {
    let error = parse_error("public private int x;");
    assert_eq!(
        error.to_string(),
        "Encountered a second visibility modifier 'private'!"
    );
}

#[test]
fn duplicate_modifier_rejected() {
    let error = parse_error("static static int x;");
    assert_eq!(error.to_string(), "Encountered duplicate modifier 'static'!");
}

#[test]
fn unterminated_javadoc_rejected() {
    let error = parse_error("/** dangling");
    assert_eq!(error.kind(), CodeKind::Javadoc);
    assert_eq!(error.to_string(), "Failed to find a closing '*/'!");
}

#[test]
fn unclassifiable_input_names_the_failing_token() {
    let error = parse_error("widget gadget gizmo");
    assert_eq!(error.kind(), CodeKind::Unknown);
    assert_eq!(
        error.to_string(),
        "Failed to determine type from token 'gizmo'!"
    );
}
