use std::fmt;

use crate::model::{BuildError, CodeKind, Violation};

/// Parse failure for a single construct attempt.
///
/// Carries the construct's tag and every violated rule found during that
/// attempt; the display form joins the violations with newlines. Parsing is
/// fail-fast across constructs, so the first `ParseError` aborts the whole
/// top-level parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: CodeKind,
    violations: Vec<Violation>,
}

impl ParseError {
    pub(crate) fn new(kind: CodeKind, violations: Vec<Violation>) -> Self {
        Self { kind, violations }
    }

    pub(crate) fn single(kind: CodeKind, violation: Violation) -> Self {
        Self::new(kind, vec![violation])
    }

    /// The construct that was being parsed when the attempt failed.
    pub fn kind(&self) -> CodeKind {
        self.kind
    }

    /// Every violated rule, in the order it was detected.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, violation) in self.violations.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<BuildError> for ParseError {
    fn from(error: BuildError) -> Self {
        ParseError::new(error.kind(), error.problems().to_vec())
    }
}
