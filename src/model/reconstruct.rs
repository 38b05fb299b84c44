use super::{
    Annotation, Class, ClassMember, CodeType, Field, ImportStatement, Javadoc, Method,
    MultiLineComment, PackageDeclaration, Parameter, SingleLineComment, Type, TypeParameter,
    Visibility,
};

/// Emits Rust source that rebuilds a [`CodeType`] through the builder API.
///
/// The generated snippets end in `.build()?`, so they assume a fallible
/// context at the call site.
pub struct BuilderWriter {
    indent_level: usize,
    output: String,
}

impl Default for BuilderWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl BuilderWriter {
    pub fn new() -> Self {
        Self {
            indent_level: 0,
            output: String::new(),
        }
    }

    pub fn write(&mut self, value: &CodeType) -> String {
        self.output.clear();
        match value {
            CodeType::Package(package) => self.write_package(package, ""),
            CodeType::Import(import) => self.write_import(import, ""),
            CodeType::Javadoc(javadoc) => self.write_javadoc(javadoc, ""),
            CodeType::LineComment(comment) => self.write_line_comment(comment, ""),
            CodeType::BlockComment(comment) => self.write_block_comment(comment, ""),
            CodeType::Annotation(annotation) => self.write_annotation(annotation, ""),
            CodeType::Field(field) => self.write_field(field, ""),
            CodeType::Method(method) => self.write_method(method, ""),
            CodeType::Class(class) => self.write_class(class, ""),
        }
        self.output.trim_end().to_string()
    }

    fn indent(&mut self) {
        self.indent_level += 4;
    }

    fn dedent(&mut self) {
        if self.indent_level >= 4 {
            self.indent_level -= 4;
        }
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.indent_level {
            self.output.push(' ');
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    /// Emit one `.setter(value)` line, with the chain indented one level
    /// below the `builder()` line.
    fn setter(&mut self, text: &str) {
        self.indent();
        self.line(text);
        self.dedent();
    }

    /// Emit a setter that takes a nested built value.
    fn nested(&mut self, setter: &str, write_value: impl FnOnce(&mut Self)) {
        self.indent();
        self.line(&format!(".{}(", setter));
        self.indent();
        write_value(self);
        self.dedent();
        self.line(")");
        self.dedent();
    }

    fn finish(&mut self, suffix: &str) {
        self.setter(&format!(".build()?{}", suffix));
    }

    fn write_package(&mut self, package: &PackageDeclaration, suffix: &str) {
        self.line("PackageDeclaration::builder()");
        self.setter(&format!(".name({})", quoted(package.name())));
        self.finish(suffix);
    }

    fn write_import(&mut self, import: &ImportStatement, suffix: &str) {
        self.line("ImportStatement::builder()");
        self.setter(&format!(".name({})", quoted(import.name())));
        if import.is_static() {
            self.setter(".static_import(true)");
        }
        self.finish(suffix);
    }

    fn write_line_comment(&mut self, comment: &SingleLineComment, suffix: &str) {
        self.line("SingleLineComment::builder()");
        self.setter(&format!(".text({})", quoted(comment.text())));
        self.finish(suffix);
    }

    fn write_block_comment(&mut self, comment: &MultiLineComment, suffix: &str) {
        self.line("MultiLineComment::builder()");
        for line in comment.lines() {
            self.setter(&format!(".line({})", quoted(line)));
        }
        self.finish(suffix);
    }

    fn write_javadoc(&mut self, javadoc: &Javadoc, suffix: &str) {
        self.line("Javadoc::builder()");
        if javadoc.is_condensed() {
            self.setter(".condensed(true)");
        }
        for line in javadoc.content() {
            self.setter(&format!(".content_line({})", quoted(line)));
        }
        if let Some(author) = javadoc.author() {
            self.setter(&format!(".author({})", quoted(author)));
        }
        if let Some(version) = javadoc.version() {
            self.setter(&format!(".version({})", quoted(version)));
        }
        if let Some(since) = javadoc.since() {
            self.setter(&format!(".since({})", quoted(since)));
        }
        for (name, description) in javadoc.params() {
            self.setter(&format!(".param({}, {})", quoted(name), quoted(description)));
        }
        if let Some(returns) = javadoc.returns() {
            self.setter(&format!(".returns({})", quoted(returns)));
        }
        for description in javadoc.throws() {
            self.setter(&format!(".throws({})", quoted(description)));
        }
        self.finish(suffix);
    }

    fn write_annotation(&mut self, annotation: &Annotation, suffix: &str) {
        self.line("Annotation::builder()");
        self.setter(&format!(".name({})", quoted(annotation.name())));
        for (name, value) in annotation.parameters() {
            self.setter(&format!(".parameter({}, {})", quoted(name), quoted(value)));
        }
        self.finish(suffix);
    }

    fn write_type(&mut self, value: &Type, suffix: &str) {
        self.line("Type::builder()");
        self.setter(&format!(".name({})", quoted(value.name())));
        for generic in value.generics() {
            self.nested("generic", |writer| writer.write_type(generic, ","));
        }
        if let Some(canonical) = value.canonical_name() {
            self.setter(&format!(".canonical_name({})", quoted(canonical)));
        }
        self.finish(suffix);
    }

    fn write_type_parameter(&mut self, parameter: &TypeParameter, suffix: &str) {
        self.line("TypeParameter::builder()");
        self.nested("base", |writer| writer.write_type(parameter.base(), ","));
        if let Some(bound) = parameter.bound() {
            self.nested("bound", |writer| writer.write_type(bound, ","));
        }
        self.finish(suffix);
    }

    fn write_parameter(&mut self, parameter: &Parameter, suffix: &str) {
        self.line("Parameter::builder()");
        self.nested("parameter_type", |writer| {
            writer.write_type(parameter.parameter_type(), ",")
        });
        self.setter(&format!(".name({})", quoted(parameter.name())));
        if parameter.is_varargs() {
            self.setter(".varargs(true)");
        }
        self.finish(suffix);
    }

    fn write_visibility(&mut self, visibility: Visibility) {
        let variant = match visibility {
            Visibility::Public => "Public",
            Visibility::Protected => "Protected",
            Visibility::Private => "Private",
            Visibility::PackagePrivate => return,
        };
        self.setter(&format!(".visibility(Visibility::{})", variant));
    }

    fn write_field(&mut self, field: &Field, suffix: &str) {
        self.line("Field::builder()");
        if let Some(comment) = field.section_comment() {
            self.setter(&format!(".section_comment({})", quoted(comment)));
        }
        if let Some(javadoc) = field.javadoc() {
            self.nested("javadoc", |writer| writer.write_javadoc(javadoc, ","));
        }
        for annotation in field.annotations() {
            self.nested("annotation", |writer| writer.write_annotation(annotation, ","));
        }
        self.write_visibility(field.visibility());
        if field.is_static() {
            self.setter(".static_flag(true)");
        }
        if field.is_final() {
            self.setter(".final_flag(true)");
        }
        self.nested("field_type", |writer| writer.write_type(field.field_type(), ","));
        self.setter(&format!(".name({})", quoted(field.name())));
        if let Some(value) = field.value() {
            self.setter(&format!(".value({})", quoted(value)));
        }
        self.finish(suffix);
    }

    fn write_method(&mut self, method: &Method, suffix: &str) {
        self.line("Method::builder()");
        if let Some(comment) = method.section_comment() {
            self.setter(&format!(".section_comment({})", quoted(comment)));
        }
        if let Some(javadoc) = method.javadoc() {
            self.nested("javadoc", |writer| writer.write_javadoc(javadoc, ","));
        }
        for annotation in method.annotations() {
            self.nested("annotation", |writer| writer.write_annotation(annotation, ","));
        }
        self.write_visibility(method.visibility());
        if method.is_abstract() {
            self.setter(".abstract_flag(true)");
        }
        if method.is_static() {
            self.setter(".static_flag(true)");
        }
        if method.is_final() {
            self.setter(".final_flag(true)");
        }
        if let Some(return_type) = method.return_type() {
            self.nested("return_type", |writer| writer.write_type(return_type, ","));
        }
        self.setter(&format!(".name({})", quoted(method.name())));
        for parameter in method.parameters() {
            self.nested("parameter", |writer| writer.write_parameter(parameter, ","));
        }
        for throws in method.throws() {
            self.setter(&format!(".throws({})", quoted(throws)));
        }
        for line in method.body() {
            self.setter(&format!(".body_line({})", quoted(line)));
        }
        self.finish(suffix);
    }

    fn write_class(&mut self, class: &Class, suffix: &str) {
        self.line("Class::builder()");
        if class.is_inner() {
            self.setter(".inner(true)");
        }
        if let Some(package) = class.package() {
            self.setter(&format!(".package_name({})", quoted(package)));
        }
        for import in class.imports() {
            self.nested("import", |writer| writer.write_import(import, ","));
        }
        if let Some(javadoc) = class.javadoc() {
            self.nested("javadoc", |writer| writer.write_javadoc(javadoc, ","));
        }
        for annotation in class.annotations() {
            self.nested("annotation", |writer| writer.write_annotation(annotation, ","));
        }
        self.write_visibility(class.visibility());
        if class.is_abstract() {
            self.setter(".abstract_flag(true)");
        }
        if class.is_static() {
            self.setter(".static_flag(true)");
        }
        if class.is_final() {
            self.setter(".final_flag(true)");
        }
        self.setter(&format!(".name({})", quoted(class.name())));
        for parameter in class.type_parameters() {
            self.nested("type_parameter", |writer| {
                writer.write_type_parameter(parameter, ",")
            });
        }
        if let Some(super_class) = class.super_class() {
            self.setter(&format!(".super_class({})", quoted(super_class)));
        }
        for interface in class.interfaces() {
            self.setter(&format!(".interface({})", quoted(interface)));
        }
        for member in class.members() {
            match member {
                ClassMember::LineComment(comment) => {
                    self.nested("line_comment", |writer| writer.write_line_comment(comment, ","));
                }
                ClassMember::BlockComment(comment) => {
                    self.nested("block_comment", |writer| {
                        writer.write_block_comment(comment, ",")
                    });
                }
                ClassMember::Field(field) => {
                    self.nested("field", |writer| writer.write_field(field, ","));
                }
                ClassMember::Method(method) => {
                    self.nested("method", |writer| writer.write_method(method, ","));
                }
                ClassMember::InnerClass(inner) => {
                    self.nested("inner_class", |writer| writer.write_class(inner, ","));
                }
            }
        }
        self.finish(suffix);
    }
}

fn quoted(value: &str) -> String {
    format!("{:?}", value)
}
