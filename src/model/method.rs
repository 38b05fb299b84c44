use std::fmt;

use super::{
    modifier_prefix, Annotation, BuildError, CodeKind, Javadoc, Parameter, Type, Violation,
    Visibility,
};

/// A method declaration.
///
/// Body lines are opaque source text; they are never parsed further. A
/// method without a return type is constructor-shaped. Abstract methods
/// render with a terminating semicolon instead of a body block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    section_comment: Option<String>,
    javadoc: Option<Javadoc>,
    annotations: Vec<Annotation>,
    visibility: Visibility,
    is_abstract: bool,
    is_static: bool,
    is_final: bool,
    return_type: Option<Type>,
    name: String,
    parameters: Vec<Parameter>,
    throws: Vec<String>,
    body: Vec<String>,
}

impl Method {
    pub fn builder() -> MethodBuilder {
        MethodBuilder::default()
    }

    pub fn section_comment(&self) -> Option<&str> {
        self.section_comment.as_deref()
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

    pub fn return_type(&self) -> Option<&Type> {
        self.return_type.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn throws(&self) -> &[String] {
        &self.throws
    }

    pub fn body(&self) -> &[String] {
        &self.body
    }

    pub(crate) fn with_javadoc(mut self, javadoc: Javadoc) -> Self {
        self.javadoc = Some(javadoc);
        self
    }

    pub(crate) fn with_annotations(mut self, annotations: Vec<Annotation>) -> Self {
        self.annotations.extend(annotations);
        self
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref comment) = self.section_comment {
            writeln!(f, "// {}", comment)?;
        }
        if let Some(ref javadoc) = self.javadoc {
            writeln!(f, "{}", javadoc)?;
        }
        for annotation in &self.annotations {
            writeln!(f, "{}", annotation)?;
        }
        write!(
            f,
            "{}",
            modifier_prefix(self.visibility, self.is_abstract, self.is_static, self.is_final)
        )?;
        if let Some(ref return_type) = self.return_type {
            write!(f, "{} ", return_type)?;
        }
        write!(f, "{}(", self.name)?;
        for (index, parameter) in self.parameters.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            parameter.fmt(f)?;
        }
        f.write_str(")")?;
        if !self.throws.is_empty() {
            write!(f, " throws {}", self.throws.join(", "))?;
        }
        if self.is_abstract {
            return f.write_str(";");
        }
        writeln!(f, " {{")?;
        for line in &self.body {
            if line.is_empty() {
                writeln!(f)?;
            } else {
                writeln!(f, "    {}", line)?;
            }
        }
        f.write_str("}")
    }
}

#[derive(Debug, Default)]
pub struct MethodBuilder {
    section_comment: Option<String>,
    javadoc: Option<Javadoc>,
    annotations: Vec<Annotation>,
    visibility: Visibility,
    is_abstract: bool,
    is_static: bool,
    is_final: bool,
    return_type: Option<Type>,
    name: Option<String>,
    parameters: Vec<Parameter>,
    throws: Vec<String>,
    body: Vec<String>,
}

impl MethodBuilder {
    pub fn section_comment(mut self, comment: impl Into<String>) -> Self {
        self.section_comment = Some(comment.into());
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

    pub fn return_type(mut self, return_type: Type) -> Self {
        self.return_type = Some(return_type);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn throws(mut self, throws: impl Into<String>) -> Self {
        self.throws.push(throws.into());
        self
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    pub fn build(self) -> Result<Method, BuildError> {
        let mut problems = Vec::new();
        if self.name.as_deref().map_or(true, str::is_empty) {
            problems.push(Violation::MissingAttribute("name"));
        }
        if self.is_abstract && !self.body.is_empty() {
            problems.push(Violation::Invalid(
                "An abstract method cannot carry a body!".to_string(),
            ));
        }
        if self.is_abstract && self.is_final {
            problems.push(Violation::Invalid(
                "A method cannot be both abstract and final!".to_string(),
            ));
        }
        if !problems.is_empty() {
            return Err(BuildError::new(CodeKind::Method, problems));
        }
        Ok(Method {
            section_comment: self.section_comment,
            javadoc: self.javadoc,
            annotations: self.annotations,
            visibility: self.visibility,
            is_abstract: self.is_abstract,
            is_static: self.is_static,
            is_final: self.is_final,
            return_type: self.return_type,
            name: self.name.unwrap_or_default(),
            parameters: self.parameters,
            throws: self.throws,
            body: self.body,
        })
    }
}
