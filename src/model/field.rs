use std::fmt;

use super::{
    modifier_prefix, Annotation, BuildError, CodeKind, Javadoc, Type, Violation, Visibility,
};

/// A field declaration.
///
/// The initializer value is kept as raw source text. The canonical rendering
/// carries no trailing semicolon; the class renderer appends it when the
/// field appears as a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    section_comment: Option<String>,
    javadoc: Option<Javadoc>,
    annotations: Vec<Annotation>,
    visibility: Visibility,
    is_static: bool,
    is_final: bool,
    field_type: Type,
    name: String,
    value: Option<String>,
}

impl Field {
    pub fn builder() -> FieldBuilder {
        FieldBuilder::default()
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

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn field_type(&self) -> &Type {
        &self.field_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
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

impl fmt::Display for Field {
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
            "{}{} {}",
            modifier_prefix(self.visibility, false, self.is_static, self.is_final),
            self.field_type,
            self.name
        )?;
        if let Some(ref value) = self.value {
            write!(f, " = {}", value)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct FieldBuilder {
    section_comment: Option<String>,
    javadoc: Option<Javadoc>,
    annotations: Vec<Annotation>,
    visibility: Visibility,
    is_static: bool,
    is_final: bool,
    field_type: Option<Type>,
    name: Option<String>,
    value: Option<String>,
}

impl FieldBuilder {
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

    pub fn static_flag(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn final_flag(mut self, is_final: bool) -> Self {
        self.is_final = is_final;
        self
    }

    pub fn field_type(mut self, field_type: Type) -> Self {
        self.field_type = Some(field_type);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn build(self) -> Result<Field, BuildError> {
        let mut problems = Vec::new();
        if self.field_type.is_none() {
            problems.push(Violation::MissingAttribute("type"));
        }
        if self.name.as_deref().map_or(true, str::is_empty) {
            problems.push(Violation::MissingAttribute("name"));
        }
        match self.field_type {
            Some(field_type) if problems.is_empty() => Ok(Field {
                section_comment: self.section_comment,
                javadoc: self.javadoc,
                annotations: self.annotations,
                visibility: self.visibility,
                is_static: self.is_static,
                is_final: self.is_final,
                field_type,
                name: self.name.unwrap_or_default(),
                value: self.value,
            }),
            _ => Err(BuildError::new(CodeKind::Field, problems)),
        }
    }
}
