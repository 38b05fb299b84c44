//! Package declaration parser.

use crate::model::{CodeKind, PackageDeclaration};

use super::error::ParseError;
use super::support::read_dotted_name;
use super::tokenizer::Token;

/// Parse a `package` declaration starting at the `package` keyword token.
pub(crate) fn parse_at(
    tokens: &[Token],
    start: usize,
) -> Result<(PackageDeclaration, usize), ParseError> {
    debug_assert_eq!(tokens[start].text(), "package");
    let (name, next, violations) = read_dotted_name(tokens, start + 1, "a package name");
    if !violations.is_empty() {
        return Err(ParseError::new(CodeKind::Package, violations));
    }
    let declaration = PackageDeclaration::builder()
        .name(name)
        .build()
        .map_err(ParseError::from)?;
    Ok((declaration, next))
}

#[cfg(test)]
mod tests {
    use super::super::tokenizer::tokenize;
    use super::*;

    #[test]
    fn test_parse_simple_package() {
        let tokens = tokenize("package com.example;");
        let (declaration, _) = parse_at(&tokens, 0).expect("failed to parse");
        assert_eq!(declaration.name(), "com.example");
    }

    #[test]
    fn test_missing_name_and_semicolon_reported_together() {
        let tokens = tokenize("package");
        let error = parse_at(&tokens, 0).expect_err("expected failure");
        assert_eq!(
            error.to_string(),
            "Failed to find a package name!\nFailed to find a terminating semicolon!"
        );
    }

    #[test]
    fn test_split_name_tokens_concatenate() {
        let tokens = tokenize("package com .\n example ;");
        let (declaration, _) = parse_at(&tokens, 0).expect("failed to parse");
        assert_eq!(declaration.name(), "com.example");
    }
}
