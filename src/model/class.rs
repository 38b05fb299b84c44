use std::fmt;

use super::{
    modifier_prefix, Annotation, BuildError, CodeKind, Field, ImportStatement, Javadoc, Method,
    MultiLineComment, SingleLineComment, TypeParameter, Violation, Visibility,
};

/// One element of a class body, in original declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassMember {
    LineComment(SingleLineComment),
    BlockComment(MultiLineComment),
    Field(Field),
    Method(Method),
    InnerClass(Class),
}

impl fmt::Display for ClassMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassMember::LineComment(comment) => comment.fmt(f),
            ClassMember::BlockComment(comment) => comment.fmt(f),
            ClassMember::Field(field) => write!(f, "{};", field),
            ClassMember::Method(method) => method.fmt(f),
            ClassMember::InnerClass(class) => class.fmt(f),
        }
    }
}

/// A class declaration.
///
/// Only the outer class may carry a package declaration and imports; only an
/// inner class may be static. Members keep their source order so rendering
/// reproduces the original declaration sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    is_inner: bool,
    package: Option<String>,
    imports: Vec<ImportStatement>,
    javadoc: Option<Javadoc>,
    annotations: Vec<Annotation>,
    visibility: Visibility,
    is_abstract: bool,
    is_static: bool,
    is_final: bool,
    name: String,
    type_parameters: Vec<TypeParameter>,
    super_class: Option<String>,
    interfaces: Vec<String>,
    members: Vec<ClassMember>,
}

impl Class {
    pub fn builder() -> ClassBuilder {
        ClassBuilder::default()
    }

    pub fn is_inner(&self) -> bool {
        self.is_inner
    }

    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    pub fn imports(&self) -> &[ImportStatement] {
        &self.imports
    }

    pub fn javadoc(&self) -> Option<&Javadoc> {
        self.javadoc.as_ref()
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_parameters(&self) -> &[TypeParameter] {
        &self.type_parameters
    }

    pub fn super_class(&self) -> Option<&str> {
        self.super_class.as_deref()
    }

    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    pub fn members(&self) -> &[ClassMember] {
        &self.members
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.members.iter().filter_map(|member| match member {
            ClassMember::Field(field) => Some(field),
            _ => None,
        })
    }

    /// Methods in declaration order.
    pub fn methods(&self) -> impl Iterator<Item = &Method> {
        self.members.iter().filter_map(|member| match member {
            ClassMember::Method(method) => Some(method),
            _ => None,
        })
    }

    /// Inner classes in declaration order.
    pub fn inner_classes(&self) -> impl Iterator<Item = &Class> {
        self.members.iter().filter_map(|member| match member {
            ClassMember::InnerClass(class) => Some(class),
            _ => None,
        })
    }

    pub(crate) fn with_javadoc(mut self, javadoc: Javadoc) -> Self {
        self.javadoc = Some(javadoc);
        self
    }

    pub(crate) fn with_annotations(mut self, annotations: Vec<Annotation>) -> Self {
        self.annotations.extend(annotations);
        self
    }

    pub(crate) fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub(crate) fn with_imports(mut self, imports: Vec<ImportStatement>) -> Self {
        self.imports.extend(imports);
        self
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref package) = self.package {
            writeln!(f, "package {};", package)?;
            writeln!(f)?;
        }
        if !self.imports.is_empty() {
            for import in &self.imports {
                writeln!(f, "{}", import)?;
            }
            writeln!(f)?;
        }
        if let Some(ref javadoc) = self.javadoc {
            writeln!(f, "{}", javadoc)?;
        }
        for annotation in &self.annotations {
            writeln!(f, "{}", annotation)?;
        }
        write!(
            f,
            "{}class {}",
            modifier_prefix(self.visibility, self.is_abstract, self.is_static, self.is_final),
            self.name
        )?;
        if !self.type_parameters.is_empty() {
            f.write_str("<")?;
            for (index, parameter) in self.type_parameters.iter().enumerate() {
                if index > 0 {
                    f.write_str(", ")?;
                }
                parameter.fmt(f)?;
            }
            f.write_str(">")?;
        }
        if let Some(ref super_class) = self.super_class {
            write!(f, " extends {}", super_class)?;
        }
        if !self.interfaces.is_empty() {
            write!(f, " implements {}", self.interfaces.join(", "))?;
        }
        writeln!(f, " {{")?;
        for member in &self.members {
            writeln!(f)?;
            for line in member.to_string().lines() {
                if line.is_empty() {
                    writeln!(f)?;
                } else {
                    writeln!(f, "    {}", line)?;
                }
            }
        }
        f.write_str("}")
    }
}

#[derive(Debug, Default)]
pub struct ClassBuilder {
    is_inner: bool,
    package: Option<String>,
    imports: Vec<ImportStatement>,
    javadoc: Option<Javadoc>,
    annotations: Vec<Annotation>,
    visibility: Visibility,
    is_abstract: bool,
    is_static: bool,
    is_final: bool,
    name: Option<String>,
    type_parameters: Vec<TypeParameter>,
    super_class: Option<String>,
    interfaces: Vec<String>,
    members: Vec<ClassMember>,
}

impl ClassBuilder {
    pub fn inner(mut self, is_inner: bool) -> Self {
        self.is_inner = is_inner;
        self
    }

    pub fn package_name(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn import(mut self, import: ImportStatement) -> Self {
        self.imports.push(import);
        self
    }

    pub fn javadoc(mut self, javadoc: Javadoc) -> Self {
        self.javadoc = Some(javadoc);
        self
    }

    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn abstract_flag(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    pub fn static_flag(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn final_flag(mut self, is_final: bool) -> Self {
        self.is_final = is_final;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn type_parameter(mut self, parameter: TypeParameter) -> Self {
        self.type_parameters.push(parameter);
        self
    }

    pub fn super_class(mut self, super_class: impl Into<String>) -> Self {
        self.super_class = Some(super_class.into());
        self
    }

    pub fn interface(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    /// Append any member, preserving declaration order.
    pub fn member(mut self, member: ClassMember) -> Self {
        self.members.push(member);
        self
    }

    pub fn field(self, field: Field) -> Self {
        self.member(ClassMember::Field(field))
    }

    pub fn method(self, method: Method) -> Self {
        self.member(ClassMember::Method(method))
    }

    pub fn inner_class(self, class: Class) -> Self {
        self.member(ClassMember::InnerClass(class))
    }

    pub fn line_comment(self, comment: SingleLineComment) -> Self {
        self.member(ClassMember::LineComment(comment))
    }

    pub fn block_comment(self, comment: MultiLineComment) -> Self {
        self.member(ClassMember::BlockComment(comment))
    }

    pub fn build(self) -> Result<Class, BuildError> {
        let mut problems = Vec::new();
        if self.name.as_deref().map_or(true, str::is_empty) {
            problems.push(Violation::MissingAttribute("name"));
        }
        if self.is_inner && self.package.is_some() {
            problems.push(Violation::Invalid(
                "An inner class cannot carry a package name!".to_string(),
            ));
        }
        if !self.is_inner && self.is_static {
            problems.push(Violation::Invalid(
                "Only an inner class may be static!".to_string(),
            ));
        }
        if self.is_abstract && self.is_final {
            problems.push(Violation::Invalid(
                "A class cannot be both abstract and final!".to_string(),
            ));
        }
        for member in &self.members {
            if let ClassMember::InnerClass(class) = member {
                if !class.is_inner() {
                    problems.push(Violation::Invalid(format!(
                        "Nested class '{}' must be flagged as inner!",
                        class.name()
                    )));
                }
            }
        }
        if !problems.is_empty() {
            return Err(BuildError::new(CodeKind::Class, problems));
        }
        Ok(Class {
            is_inner: self.is_inner,
            package: self.package,
            imports: self.imports,
            javadoc: self.javadoc,
            annotations: self.annotations,
            visibility: self.visibility,
            is_abstract: self.is_abstract,
            is_static: self.is_static,
            is_final: self.is_final,
            name: self.name.unwrap_or_default(),
            type_parameters: self.type_parameters,
            super_class: self.super_class,
            interfaces: self.interfaces,
            members: self.members,
        })
    }
}
