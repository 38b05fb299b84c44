use std::fmt;

use super::{BuildError, CodeKind, Violation};

/// A type reference: base name plus ordered generic type parameters.
///
/// The canonical (fully-qualified) name is metadata for callers that resolve
/// imports; it does not render and is the only attribute that may be set
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Type {
    name: String,
    generics: Vec<Type>,
    canonical_name: Option<String>,
}

impl Type {
    pub fn builder() -> TypeBuilder {
        TypeBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn generics(&self) -> &[Type] {
        &self.generics
    }

    pub fn canonical_name(&self) -> Option<&str> {
        self.canonical_name.as_deref()
    }

    pub fn set_canonical_name(&mut self, canonical_name: impl Into<String>) {
        self.canonical_name = Some(canonical_name.into());
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if self.generics.is_empty() {
            return Ok(());
        }
        f.write_str("<")?;
        for (index, generic) in self.generics.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            generic.fmt(f)?;
        }
        f.write_str(">")
    }
}

#[derive(Debug, Default)]
pub struct TypeBuilder {
    name: Option<String>,
    generics: Vec<Type>,
    canonical_name: Option<String>,
}

impl TypeBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn generic(mut self, generic: Type) -> Self {
        self.generics.push(generic);
        self
    }

    pub fn canonical_name(mut self, canonical_name: impl Into<String>) -> Self {
        self.canonical_name = Some(canonical_name.into());
        self
    }

    pub fn build(self) -> Result<Type, BuildError> {
        let mut problems = Vec::new();
        if self.name.as_deref().map_or(true, str::is_empty) {
            problems.push(Violation::MissingAttribute("name"));
        }
        if !problems.is_empty() {
            return Err(BuildError::new(CodeKind::Type, problems));
        }
        Ok(Type {
            name: self.name.unwrap_or_default(),
            generics: self.generics,
            canonical_name: self.canonical_name,
        })
    }
}

/// A declared type parameter, e.g. `T` or `T extends Number`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParameter {
    base: Type,
    bound: Option<Type>,
}

impl TypeParameter {
    pub fn builder() -> TypeParameterBuilder {
        TypeParameterBuilder::default()
    }

    pub fn base(&self) -> &Type {
        &self.base
    }

    pub fn bound(&self) -> Option<&Type> {
        self.bound.as_ref()
    }
}

impl fmt::Display for TypeParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.base.fmt(f)?;
        if let Some(ref bound) = self.bound {
            write!(f, " extends {}", bound)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct TypeParameterBuilder {
    base: Option<Type>,
    bound: Option<Type>,
}

impl TypeParameterBuilder {
    pub fn base(mut self, base: Type) -> Self {
        self.base = Some(base);
        self
    }

    pub fn bound(mut self, bound: Type) -> Self {
        self.bound = Some(bound);
        self
    }

    pub fn build(self) -> Result<TypeParameter, BuildError> {
        let mut problems = Vec::new();
        if self.base.is_none() {
            problems.push(Violation::MissingAttribute("type"));
        }
        match self.base {
            Some(base) => Ok(TypeParameter {
                base,
                bound: self.bound,
            }),
            None => Err(BuildError::new(CodeKind::TypeParameter, problems)),
        }
    }
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    parameter_type: Type,
    name: String,
    varargs: bool,
}

impl Parameter {
    pub fn builder() -> ParameterBuilder {
        ParameterBuilder::default()
    }

    pub fn parameter_type(&self) -> &Type {
        &self.parameter_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_varargs(&self) -> bool {
        self.varargs
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.varargs {
            write!(f, "{}... {}", self.parameter_type, self.name)
        } else {
            write!(f, "{} {}", self.parameter_type, self.name)
        }
    }
}

#[derive(Debug, Default)]
pub struct ParameterBuilder {
    parameter_type: Option<Type>,
    name: Option<String>,
    varargs: bool,
}

impl ParameterBuilder {
    pub fn parameter_type(mut self, parameter_type: Type) -> Self {
        self.parameter_type = Some(parameter_type);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn varargs(mut self, varargs: bool) -> Self {
        self.varargs = varargs;
        self
    }

    pub fn build(self) -> Result<Parameter, BuildError> {
        let mut problems = Vec::new();
        if self.parameter_type.is_none() {
            problems.push(Violation::MissingAttribute("type"));
        }
        if self.name.as_deref().map_or(true, str::is_empty) {
            problems.push(Violation::MissingAttribute("name"));
        }
        match self.parameter_type {
            Some(parameter_type) if problems.is_empty() => Ok(Parameter {
                parameter_type,
                name: self.name.unwrap_or_default(),
                varargs: self.varargs,
            }),
            _ => Err(BuildError::new(CodeKind::Parameter, problems)),
        }
    }
}
