//! Import statement parser.

use crate::model::{CodeKind, ImportStatement};

use super::error::ParseError;
use super::support::{next_significant, read_dotted_name};
use super::tokenizer::Token;

/// Parse an `import` statement starting at the `import` keyword token.
pub(crate) fn parse_at(
    tokens: &[Token],
    start: usize,
) -> Result<(ImportStatement, usize), ParseError> {
    debug_assert_eq!(tokens[start].text(), "import");
    let mut index = start + 1;
    let mut is_static = false;
    if let Some(next) = next_significant(tokens, index) {
        if tokens[next].text() == "static" {
            is_static = true;
            index = next + 1;
        }
    }
    let (name, next, violations) = read_dotted_name(tokens, index, "an import name");
    if !violations.is_empty() {
        return Err(ParseError::new(CodeKind::Import, violations));
    }
    let statement = ImportStatement::builder()
        .name(name)
        .static_import(is_static)
        .build()
        .map_err(ParseError::from)?;
    Ok((statement, next))
}

#[cfg(test)]
mod tests {
    use super::super::tokenizer::tokenize;
    use super::*;

    #[test]
    fn test_parse_simple_import() {
        let tokens = tokenize("import java.util.List;");
        let (statement, _) = parse_at(&tokens, 0).expect("failed to parse");
        assert_eq!(statement.name(), "java.util.List");
        assert!(!statement.is_static());
    }

    #[test]
    fn test_parse_static_import() {
        let tokens = tokenize("import static java.util.Arrays.asList;");
        let (statement, _) = parse_at(&tokens, 0).expect("failed to parse");
        assert_eq!(statement.name(), "java.util.Arrays.asList");
        assert!(statement.is_static());
    }

    #[test]
    fn test_wildcard_kept_in_name() {
        let tokens = tokenize("import java.util.*;");
        let (statement, _) = parse_at(&tokens, 0).expect("failed to parse");
        assert_eq!(statement.name(), "java.util.*");
    }

    #[test]
    fn test_missing_semicolon_reported() {
        let tokens = tokenize("import java.util.List");
        let error = parse_at(&tokens, 0).expect_err("expected failure");
        assert_eq!(error.to_string(), "Failed to find a terminating semicolon!");
    }
}
