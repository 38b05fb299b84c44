use javasrc::parser::parse_type;
use javasrc::{CodeKind, CodeType, Visibility};

#[test]
fn parse_package_declaration_root() {
    let parsed = parse_type("package com.example;").expect("failed to parse");
    assert_eq!(parsed.kind(), CodeKind::Package);
    match parsed {
        CodeType::Package(declaration) => assert_eq!(declaration.name(), "com.example"),
        other => panic!("expected a package declaration, got {:?}", other),
    }
}

#[test]
fn parse_empty_class() {
    let parsed = parse_type("class Test{\n}\n").expect("failed to parse");
    match parsed {
        CodeType::Class(class) => {
            assert_eq!(class.name(), "Test");
            assert_eq!(class.package(), None);
            assert!(class.members().is_empty());
            assert_eq!(class.visibility(), Visibility::PackagePrivate);
        }
        other => panic!("expected a class, got {:?}", other),
    }
}

#[test]
fn parse_annotation_root_renders_identically() {
    let source = "@Test(type = String.class, defaultValue = \"\")";
    let parsed = parse_type(source).expect("failed to parse");
    match &parsed {
        CodeType::Annotation(annotation) => {
            assert_eq!(annotation.name(), "Test");
            assert_eq!(
                annotation.parameters(),
                [
                    ("type".to_string(), "String.class".to_string()),
                    ("defaultValue".to_string(), "\"\"".to_string())
                ]
            );
        }
        other => panic!("expected an annotation, got {:?}", other),
    }
    assert_eq!(parsed.to_string(), source);
}

#[test]
fn parse_field_root_reproduces_input() {
    let parsed =
        parse_type("private static final String name = \"Test\";").expect("failed to parse");
    match &parsed {
        CodeType::Field(field) => {
            assert_eq!(field.visibility(), Visibility::Private);
            assert!(field.is_static());
            assert!(field.is_final());
            assert_eq!(field.field_type().name(), "String");
            assert_eq!(field.name(), "name");
            assert_eq!(field.value(), Some("\"Test\""));
        }
        other => panic!("expected a field, got {:?}", other),
    }
    assert_eq!(parsed.to_string(), "private static final String name = \"Test\"");
}

#[test]
fn parse_method_root() {
    let parsed =
        parse_type("public static void main(String[] args) {\n    run();\n}").expect("failed to parse");
    match parsed {
        CodeType::Method(method) => {
            assert_eq!(method.name(), "main");
            assert!(method.is_static());
            assert_eq!(method.body(), ["run();"]);
        }
        other => panic!("expected a method, got {:?}", other),
    }
}

#[test]
fn parse_full_compilation_unit() {
    let source = r#"
package com.example;

import java.util.List;
import java.util.ArrayList;

/**
 * Holds items.
 */
public class Holder {

    private List<String> items = new ArrayList<>();

    public void add(String item) {
        items.add(item);
    }
}
"#;
    let parsed = parse_type(source).expect("failed to parse");
    match parsed {
        CodeType::Class(class) => {
            assert_eq!(class.package(), Some("com.example"));
            assert_eq!(class.imports().len(), 2);
            assert_eq!(class.imports()[0].name(), "java.util.List");
            assert!(class.javadoc().is_some());
            assert_eq!(class.visibility(), Visibility::Public);
            assert_eq!(class.fields().count(), 1);
            assert_eq!(class.methods().count(), 1);
        }
        other => panic!("expected a class, got {:?}", other),
    }
}

#[test]
fn parse_class_with_inheritance() {
    let source = "public final class Worker extends Base implements Runnable, AutoCloseable {\n}";
    let parsed = parse_type(source).expect("failed to parse");
    match parsed {
        CodeType::Class(class) => {
            assert!(class.is_final());
            assert_eq!(class.super_class(), Some("Base"));
            assert_eq!(class.interfaces(), ["Runnable", "AutoCloseable"]);
        }
        other => panic!("expected a class, got {:?}", other),
    }
}

#[test]
fn parse_generic_class_declaration() {
    let source = "public class Box<T extends Number> {\n}";
    let parsed = parse_type(source).expect("failed to parse");
    match parsed {
        CodeType::Class(class) => {
            assert_eq!(class.name(), "Box");
            assert_eq!(class.type_parameters().len(), 1);
            assert_eq!(class.type_parameters()[0].base().name(), "T");
            assert_eq!(
                class.type_parameters()[0].bound().map(|bound| bound.name()),
                Some("Number")
            );
        }
        other => panic!("expected a class, got {:?}", other),
    }
}

#[test]
fn parse_nested_classes() {
    let source = r#"
public class Outer {

    private int id;

    public static class Inner {

        public void touch() {
        }
    }
}
"#;
    let parsed = parse_type(source).expect("failed to parse");
    match parsed {
        CodeType::Class(class) => {
            assert_eq!(class.name(), "Outer");
            let inner: Vec<_> = class.inner_classes().collect();
            assert_eq!(inner.len(), 1);
            assert_eq!(inner[0].name(), "Inner");
            assert!(inner[0].is_inner());
            assert!(inner[0].is_static());
            assert_eq!(inner[0].methods().count(), 1);
        }
        other => panic!("expected a class, got {:?}", other),
    }
}

#[test]
fn javadoc_and_annotations_attach_to_following_member() {
    let source = r#"
public class Config {

    /**
     * The retry budget.
     */
    @Deprecated
    private int retries = 3;
}
"#;
    let parsed = parse_type(source).expect("failed to parse");
    match parsed {
        CodeType::Class(class) => {
            let field = class.fields().next().expect("missing field");
            assert!(field.javadoc().is_some());
            assert_eq!(field.annotations().len(), 1);
            assert_eq!(field.annotations()[0].name(), "Deprecated");
        }
        other => panic!("expected a class, got {:?}", other),
    }
}

#[test]
fn comments_are_ordered_members() {
    let source = "class Notes {\n\n    // first\n\n    int a;\n\n    /* second */\n\n    int b;\n}";
    let parsed = parse_type(source).expect("failed to parse");
    match parsed {
        CodeType::Class(class) => {
            assert_eq!(class.members().len(), 4);
            let rendered: Vec<String> =
                class.members().iter().map(|member| member.to_string()).collect();
            assert_eq!(rendered[0], "// first");
            assert_eq!(rendered[1], "int a;");
            assert_eq!(rendered[2], "/* second */");
            assert_eq!(rendered[3], "int b;");
        }
        other => panic!("expected a class, got {:?}", other),
    }
}

#[test]
fn whitespace_runs_do_not_change_the_result() {
    let plain = parse_type("package com.example;").expect("failed to parse");
    let spaced = parse_type("  \t package \n\t com.example;  \n").expect("failed to parse");
    assert_eq!(plain, spaced);

    let class_plain = parse_type("public class A extends B {\n}").expect("failed to parse");
    let class_spaced =
        parse_type("\n\npublic\t\tclass   A\n extends\n\t B\t{\n\n\n}\n").expect("failed to parse");
    assert_eq!(class_plain.to_string(), class_spaced.to_string());
}

#[test]
fn empty_input_is_rejected() {
    assert!(parse_type("").is_err());
    assert!(parse_type("   \n\t  ").is_err());
}

#[test]
fn garbage_input_reports_the_failing_token() {
    let error = parse_type("widget gadget gizmo").expect_err("expected failure");
    assert_eq!(
        error.to_string(),
        "Failed to determine type from token 'gizmo'!"
    );
}
