use std::fmt;

use super::{BuildError, CodeKind, Violation};

/// A `package` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDeclaration {
    name: String,
}

impl PackageDeclaration {
    pub fn builder() -> PackageDeclarationBuilder {
        PackageDeclarationBuilder::default()
    }

    /// Dotted package name, e.g. `com.example`.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for PackageDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "package {};", self.name)
    }
}

#[derive(Debug, Default)]
pub struct PackageDeclarationBuilder {
    name: Option<String>,
}

impl PackageDeclarationBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn build(self) -> Result<PackageDeclaration, BuildError> {
        let mut problems = Vec::new();
        if self.name.as_deref().map_or(true, str::is_empty) {
            problems.push(Violation::MissingAttribute("name"));
        }
        if !problems.is_empty() {
            return Err(BuildError::new(CodeKind::Package, problems));
        }
        Ok(PackageDeclaration {
            name: self.name.unwrap_or_default(),
        })
    }
}
