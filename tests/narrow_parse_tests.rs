//! The narrow per-construct entry points: each parses exactly one construct
//! and answers `None`, never an error, when the text has a different shape
//! or trailing content.

use javasrc::{
    parse_annotation, parse_class, parse_field, parse_import_statement, parse_javadoc,
    parse_method, parse_multi_line_comment, parse_package_declaration, parse_single_line_comment,
    Visibility,
};

#[test]
fn parse_package_declaration_matches_only_packages() {
    let declaration = parse_package_declaration("package com.example;").expect("expected a match");
    assert_eq!(declaration.name(), "com.example");
    assert!(parse_package_declaration("import java.util.List;").is_none());
    assert!(parse_package_declaration("package com.example; class A {\n}").is_none());
    assert!(parse_package_declaration("package").is_none());
}

#[test]
fn parse_import_statement_matches_only_imports() {
    let statement = parse_import_statement("import static java.util.Arrays.asList;")
        .expect("expected a match");
    assert_eq!(statement.name(), "java.util.Arrays.asList");
    assert!(statement.is_static());
    assert!(parse_import_statement("package com.example;").is_none());
}

#[test]
fn parse_javadoc_matches_only_javadocs() {
    let javadoc = parse_javadoc("/** Runs the job. */").expect("expected a match");
    assert!(javadoc.is_condensed());
    assert!(parse_javadoc("/* plain comment */").is_none());
    assert!(parse_javadoc("/** dangling").is_none());
}

#[test]
fn parse_comments_distinguish_their_shapes() {
    let line = parse_single_line_comment("// note").expect("expected a match");
    assert_eq!(line.text(), "note");
    let block = parse_multi_line_comment("/* note */").expect("expected a match");
    assert_eq!(block.lines(), ["note"]);
    assert!(parse_single_line_comment("/* note */").is_none());
    assert!(parse_multi_line_comment("/** javadoc */").is_none());
    assert!(parse_multi_line_comment("// note").is_none());
}

#[test]
fn parse_annotation_matches_only_annotations() {
    let annotation = parse_annotation("@Override").expect("expected a match");
    assert_eq!(annotation.name(), "Override");
    assert!(parse_annotation("class A {\n}").is_none());
    assert!(parse_annotation("@Override int x;").is_none());
}

#[test]
fn parse_field_rejects_method_shapes() {
    let field = parse_field("private int count;").expect("expected a match");
    assert_eq!(field.visibility(), Visibility::Private);
    assert_eq!(field.name(), "count");
    assert!(parse_field("void run() {\n}").is_none());
    assert!(parse_field("not a field at all").is_none());
}

#[test]
fn parse_method_rejects_field_shapes() {
    let method = parse_method("public Worker(int id) {\n}").expect("expected a match");
    assert_eq!(method.name(), "Worker");
    assert!(method.return_type().is_none());
    assert!(parse_method("private int count;").is_none());
}

#[test]
fn parse_class_requires_a_lone_class() {
    let class = parse_class("public class A extends B {\n}").expect("expected a match");
    assert_eq!(class.name(), "A");
    assert_eq!(class.super_class(), Some("B"));
    assert!(parse_class("int x;").is_none());
    assert!(parse_class("class A {\n} class B {\n}").is_none());
}
