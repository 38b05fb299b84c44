use std::fmt;

use super::{BuildError, CodeKind, Violation};

/// An `import` statement. Wildcard imports keep the trailing `.*` as part of
/// the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatement {
    name: String,
    is_static: bool,
}

impl ImportStatement {
    pub fn builder() -> ImportStatementBuilder {
        ImportStatementBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }
}

impl fmt::Display for ImportStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_static {
            write!(f, "import static {};", self.name)
        } else {
            write!(f, "import {};", self.name)
        }
    }
}

#[derive(Debug, Default)]
pub struct ImportStatementBuilder {
    name: Option<String>,
    is_static: bool,
}

impl ImportStatementBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn static_import(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn build(self) -> Result<ImportStatement, BuildError> {
        let mut problems = Vec::new();
        if self.name.as_deref().map_or(true, str::is_empty) {
            problems.push(Violation::MissingAttribute("name"));
        }
        if !problems.is_empty() {
            return Err(BuildError::new(CodeKind::Import, problems));
        }
        Ok(ImportStatement {
            name: self.name.unwrap_or_default(),
            is_static: self.is_static,
        })
    }
}
