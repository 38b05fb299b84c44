use std::fmt;

use super::{BuildError, CodeKind, Violation};

/// An `@Annotation`, with ordered `name = value` parameter pairs.
///
/// A value supplied without a key is stored under the implicit key `value`,
/// and rendering always spells the key out, matching what the parser
/// produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    name: String,
    parameters: Vec<(String, String)>,
}

impl Annotation {
    pub fn builder() -> AnnotationBuilder {
        AnnotationBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[(String, String)] {
        &self.parameters
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name)?;
        if self.parameters.is_empty() {
            return Ok(());
        }
        f.write_str("(")?;
        for (index, (name, value)) in self.parameters.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} = {}", name, value)?;
        }
        f.write_str(")")
    }
}

#[derive(Debug, Default)]
pub struct AnnotationBuilder {
    name: Option<String>,
    parameters: Vec<(String, String)>,
}

impl AnnotationBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.push((name.into(), value.into()));
        self
    }

    /// Shorthand for the single unnamed argument form `@Name(value)`.
    pub fn value(self, value: impl Into<String>) -> Self {
        self.parameter("value", value)
    }

    pub fn build(self) -> Result<Annotation, BuildError> {
        let mut problems = Vec::new();
        if self.name.as_deref().map_or(true, str::is_empty) {
            problems.push(Violation::MissingAttribute("name"));
        }
        if !problems.is_empty() {
            return Err(BuildError::new(CodeKind::Annotation, problems));
        }
        Ok(Annotation {
            name: self.name.unwrap_or_default(),
            parameters: self.parameters,
        })
    }
}
