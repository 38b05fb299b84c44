//! Round-trip and idempotent-rendering properties.
//!
//! Structural equality is defined as equal canonical renderings, so each
//! check re-parses the rendering and compares the renderings of both values.

use javasrc::parser::parse_type;
use javasrc::{
    Class, CodeType, Field, ImportStatement, Javadoc, Method, Parameter, SingleLineComment, Type,
    Visibility,
};

fn assert_roundtrip(source: &str) {
    let parsed = parse_type(source).expect("failed to parse");
    let rendered = parsed.to_string();
    let reparsed = parse_type(&rendered).expect("failed to re-parse the rendering");
    assert_eq!(reparsed.to_string(), rendered);
    // rendering is a pure function of the value
    assert_eq!(parsed.to_string(), rendered);
}

#[test]
fn package_declaration_roundtrips() {
    assert_roundtrip("package com.example;");
}

#[test]
fn import_statements_roundtrip() {
    assert_roundtrip("import java.util.List;");
    assert_roundtrip("import static java.util.Arrays.asList;");
    assert_roundtrip("import java.util.*;");
}

#[test]
fn comments_roundtrip() {
    assert_roundtrip("// a note");
    assert_roundtrip("/* compact */");
    assert_roundtrip("/*\n * first\n *\n * second\n */");
}

#[test]
fn javadocs_roundtrip() {
    assert_roundtrip("/** Runs the job. */");
    assert_roundtrip(
        "/**\n * Runs the job.\n *\n * @param name the job name\n * @return the exit code\n * @throws IllegalStateException when not ready\n */",
    );
    assert_roundtrip("/**\n * @author A. Hacker\n * @version 1.2\n * @since 0.9\n */");
}

#[test]
fn annotations_roundtrip() {
    assert_roundtrip("@Override");
    assert_roundtrip("@Test(type = String.class, defaultValue = \"\")");
}

#[test]
fn methods_roundtrip() {
    assert_roundtrip("public static void main(String[] args) {\n    run();\n}");
    assert_roundtrip("protected abstract int size();");
    assert_roundtrip("void log(String format, Object... args) throws IOException {\n}");
}

#[test]
fn classes_roundtrip() {
    assert_roundtrip("class Test {\n}");
    assert_roundtrip("public final class Worker extends Base implements Runnable, AutoCloseable {\n}");
    assert_roundtrip(
        "package com.example;\n\nimport java.util.List;\n\npublic class Holder {\n\n    private List<String> items;\n\n    public void add(String item) {\n        items.add(item);\n    }\n}",
    );
}

#[test]
fn built_field_roundtrips_through_source() {
    let built = Field::builder()
        .visibility(Visibility::Private)
        .static_flag(true)
        .final_flag(true)
        .field_type(Type::builder().name("String").build().expect("failed to build"))
        .name("name")
        .value("\"Test\"")
        .build()
        .expect("failed to build");
    let rendered = built.to_string();
    assert_eq!(rendered, "private static final String name = \"Test\"");
    // a field renders without its terminating semicolon; a root parse needs it
    let reparsed = parse_type(&format!("{};", rendered)).expect("failed to re-parse");
    match reparsed {
        CodeType::Field(reparsed) => assert_eq!(reparsed.to_string(), rendered),
        other => panic!("expected a field, got {:?}", other),
    }
}

#[test]
fn built_method_roundtrips_through_source() {
    let built = Method::builder()
        .visibility(Visibility::Public)
        .static_flag(true)
        .return_type(Type::builder().name("void").build().expect("failed to build"))
        .name("main")
        .parameter(
            Parameter::builder()
                .parameter_type(Type::builder().name("String[]").build().expect("failed to build"))
                .name("args")
                .build()
                .expect("failed to build"),
        )
        .body_line("run();")
        .build()
        .expect("failed to build");
    let rendered = built.to_string();
    let reparsed = parse_type(&rendered).expect("failed to re-parse");
    assert_eq!(reparsed.to_string(), rendered);
}

#[test]
fn built_javadoc_roundtrips_through_source() {
    let built = Javadoc::builder()
        .content_line("Runs the job.")
        .param("name", "the job name")
        .returns("the exit code")
        .build()
        .expect("failed to build");
    let rendered = built.to_string();
    let reparsed = parse_type(&rendered).expect("failed to re-parse");
    assert_eq!(reparsed.to_string(), rendered);
}

#[test]
fn built_class_roundtrips_through_source() {
    let inner = Class::builder()
        .inner(true)
        .visibility(Visibility::Public)
        .static_flag(true)
        .name("Inner")
        .build()
        .expect("failed to build");
    let built = Class::builder()
        .package_name("com.example")
        .import(
            ImportStatement::builder()
                .name("java.util.List")
                .build()
                .expect("failed to build"),
        )
        .visibility(Visibility::Public)
        .name("Holder")
        .line_comment(
            SingleLineComment::builder()
                .text("storage")
                .build()
                .expect("failed to build"),
        )
        .field(
            Field::builder()
                .visibility(Visibility::Private)
                .field_type(Type::builder().name("List<String>").build().expect("failed to build"))
                .name("items")
                .build()
                .expect("failed to build"),
        )
        .inner_class(inner)
        .build()
        .expect("failed to build");
    let rendered = built.to_string();
    let reparsed = parse_type(&rendered).expect("failed to re-parse");
    assert_eq!(reparsed.to_string(), rendered);
}

#[test]
fn rendering_is_idempotent() {
    let parsed = parse_type("public class Box<T extends Number> extends Base {\n\n    int size;\n}")
        .expect("failed to parse");
    assert_eq!(parsed.to_string(), parsed.to_string());
}
