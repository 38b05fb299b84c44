//! Code model for parsed Java source
//!
//! This module defines the construct family the parser produces: package and
//! import declarations, comments, javadoc, annotations, types, fields,
//! methods, and classes. Every construct is built through a validating
//! builder and is frozen once built; the parser attaches late-arriving
//! fragments (javadoc, annotations, package info) through crate-internal
//! `with_*` methods that consume and return the value.

mod annotation;
mod class;
mod comment;
mod field;
mod import;
mod javadoc;
mod method;
mod package;
mod reconstruct;
mod types;

pub use annotation::{Annotation, AnnotationBuilder};
pub use class::{Class, ClassBuilder, ClassMember};
pub use comment::{
    MultiLineComment, MultiLineCommentBuilder, SingleLineComment, SingleLineCommentBuilder,
};
pub use field::{Field, FieldBuilder};
pub use import::{ImportStatement, ImportStatementBuilder};
pub use javadoc::{Javadoc, JavadocBuilder};
pub use method::{Method, MethodBuilder};
pub use package::{PackageDeclaration, PackageDeclarationBuilder};
pub use reconstruct::BuilderWriter;
pub use types::{Parameter, ParameterBuilder, Type, TypeBuilder, TypeParameter, TypeParameterBuilder};

use std::fmt;

/// Closed enumeration of the constructs the parser can produce.
///
/// `Type`, `TypeParameter`, and `Parameter` carry no top-level [`CodeType`]
/// variant; they exist so errors raised while assembling those pieces can
/// still name the construct they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeKind {
    Package,
    Import,
    Javadoc,
    LineComment,
    BlockComment,
    Annotation,
    Field,
    Method,
    Class,
    Type,
    TypeParameter,
    Parameter,
    Unknown,
}

impl CodeKind {
    /// Human-readable name used in error messages.
    pub fn standard_name(&self) -> &'static str {
        match self {
            CodeKind::Package => "package declaration",
            CodeKind::Import => "import statement",
            CodeKind::Javadoc => "javadoc",
            CodeKind::LineComment => "single-line comment",
            CodeKind::BlockComment => "multi-line comment",
            CodeKind::Annotation => "annotation",
            CodeKind::Field => "field",
            CodeKind::Method => "method",
            CodeKind::Class => "class",
            CodeKind::Type => "type",
            CodeKind::TypeParameter => "type parameter",
            CodeKind::Parameter => "parameter",
            CodeKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.standard_name())
    }
}

/// Java visibility modifier. Package-private is the default and renders as
/// the empty keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    Public,
    Protected,
    Private,
    #[default]
    PackagePrivate,
}

impl Visibility {
    pub fn keyword(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
            Visibility::PackagePrivate => "",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A single violated parsing or validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A required token or terminator was absent from the source.
    MissingToken(String),
    /// Fragments or tokens appeared in an illegal relative order.
    IllegalOrder(String),
    /// A token could not be classified as any known construct.
    UnknownToken(String),
    /// A required builder attribute was not supplied.
    MissingAttribute(&'static str),
    /// A cross-field or structural constraint was violated; the message is
    /// reported verbatim.
    Invalid(String),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::MissingToken(what) => write!(f, "Failed to find {}!", what),
            Violation::IllegalOrder(what) => write!(f, "Encountered {}!", what),
            Violation::UnknownToken(token) => {
                write!(f, "Failed to determine type from token '{}'!", token)
            }
            Violation::MissingAttribute(attribute) => write!(f, "Must specify {}!", attribute),
            Violation::Invalid(message) => f.write_str(message),
        }
    }
}

/// Error raised when a builder is finalized with missing or conflicting
/// attributes. Every violated rule is collected before failing; the display
/// form joins them with newlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildError {
    kind: CodeKind,
    problems: Vec<Violation>,
}

impl BuildError {
    pub(crate) fn new(kind: CodeKind, problems: Vec<Violation>) -> Self {
        Self { kind, problems }
    }

    /// The construct the failing builder was assembling.
    pub fn kind(&self) -> CodeKind {
        self.kind
    }

    /// Every violated rule, in builder-declaration order.
    pub fn problems(&self) -> &[Violation] {
        &self.problems
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, problem) in self.problems.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", problem)?;
        }
        Ok(())
    }
}

impl std::error::Error for BuildError {}

/// Sum type over every top-level construct the parser can return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeType {
    Package(PackageDeclaration),
    Import(ImportStatement),
    Javadoc(Javadoc),
    LineComment(SingleLineComment),
    BlockComment(MultiLineComment),
    Annotation(Annotation),
    Field(Field),
    Method(Method),
    Class(Class),
}

impl CodeType {
    pub fn kind(&self) -> CodeKind {
        match self {
            CodeType::Package(_) => CodeKind::Package,
            CodeType::Import(_) => CodeKind::Import,
            CodeType::Javadoc(_) => CodeKind::Javadoc,
            CodeType::LineComment(_) => CodeKind::LineComment,
            CodeType::BlockComment(_) => CodeKind::BlockComment,
            CodeType::Annotation(_) => CodeKind::Annotation,
            CodeType::Field(_) => CodeKind::Field,
            CodeType::Method(_) => CodeKind::Method,
            CodeType::Class(_) => CodeKind::Class,
        }
    }

    /// Rust source that rebuilds this value through the builder API.
    pub fn reconstruction_code(&self) -> String {
        BuilderWriter::new().write(self)
    }
}

impl fmt::Display for CodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeType::Package(value) => value.fmt(f),
            CodeType::Import(value) => value.fmt(f),
            CodeType::Javadoc(value) => value.fmt(f),
            CodeType::LineComment(value) => value.fmt(f),
            CodeType::BlockComment(value) => value.fmt(f),
            CodeType::Annotation(value) => value.fmt(f),
            CodeType::Field(value) => value.fmt(f),
            CodeType::Method(value) => value.fmt(f),
            CodeType::Class(value) => value.fmt(f),
        }
    }
}

/// Canonical modifier prefix: visibility, then `abstract`, `static`, `final`,
/// each followed by a single space.
pub(crate) fn modifier_prefix(
    visibility: Visibility,
    is_abstract: bool,
    is_static: bool,
    is_final: bool,
) -> String {
    let mut prefix = String::new();
    if !visibility.keyword().is_empty() {
        prefix.push_str(visibility.keyword());
        prefix.push(' ');
    }
    if is_abstract {
        prefix.push_str("abstract ");
    }
    if is_static {
        prefix.push_str("static ");
    }
    if is_final {
        prefix.push_str("final ");
    }
    prefix
}
