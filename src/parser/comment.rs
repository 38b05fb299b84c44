//! Single-line and multi-line comment parsers.

use crate::model::{CodeKind, MultiLineComment, SingleLineComment, Violation};

use super::error::ParseError;
use super::tokenizer::Token;

/// Parse a `//` comment; consumes up to (not including) the line terminator.
pub(crate) fn parse_line_at(
    tokens: &[Token],
    start: usize,
) -> Result<(SingleLineComment, usize), ParseError> {
    let first = tokens[start].text();
    let mut raw = first.strip_prefix("//").unwrap_or(first).to_string();
    let mut index = start + 1;
    while index < tokens.len() && !tokens[index].is_newline() {
        raw.push_str(tokens[index].text());
        index += 1;
    }
    let comment = SingleLineComment::builder()
        .text(raw.trim())
        .build()
        .map_err(ParseError::from)?;
    Ok((comment, index))
}

/// Parse a `/* ... */` comment starting at its opening token.
pub(crate) fn parse_block_at(
    tokens: &[Token],
    start: usize,
) -> Result<(MultiLineComment, usize), ParseError> {
    let (raw, next) = read_block_comment(tokens, start, CodeKind::BlockComment)?;
    let mut builder = MultiLineComment::builder();
    for line in strip_block_lines(&raw) {
        builder = builder.line(line);
    }
    let comment = builder.build().map_err(ParseError::from)?;
    Ok((comment, next))
}

/// Accumulate raw text from `start` through the token that closes the
/// comment with `*/`.
pub(crate) fn read_block_comment(
    tokens: &[Token],
    start: usize,
    kind: CodeKind,
) -> Result<(String, usize), ParseError> {
    let mut raw = String::new();
    let mut index = start;
    while index < tokens.len() {
        let text = tokens[index].text();
        raw.push_str(text);
        index += 1;
        if text.ends_with("*/") {
            return Ok((raw, index));
        }
    }
    Err(ParseError::single(
        kind,
        Violation::MissingToken("a closing '*/'".to_string()),
    ))
}

/// Strip the comment frame and per-line `*` markers, dropping empty boundary
/// lines but keeping interior blank lines.
pub(crate) fn strip_block_lines(raw: &str) -> Vec<String> {
    let inner = raw
        .strip_prefix("/**")
        .or_else(|| raw.strip_prefix("/*"))
        .unwrap_or(raw);
    let inner = inner.strip_suffix("*/").unwrap_or(inner);
    let mut lines: Vec<String> = inner
        .lines()
        .map(|line| {
            let line = line.trim();
            let line = line.strip_prefix('*').unwrap_or(line);
            line.trim().to_string()
        })
        .collect();
    while lines.first().is_some_and(|line| line.is_empty()) {
        lines.remove(0);
    }
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::super::tokenizer::tokenize;
    use super::*;

    #[test]
    fn test_parse_line_comment() {
        let tokens = tokenize("// hello world\nint x;");
        let (comment, next) = parse_line_at(&tokens, 0).expect("failed to parse");
        assert_eq!(comment.text(), "hello world");
        assert!(tokens[next].is_newline());
    }

    #[test]
    fn test_parse_fused_line_comment() {
        let tokens = tokenize("//terse");
        let (comment, _) = parse_line_at(&tokens, 0).expect("failed to parse");
        assert_eq!(comment.text(), "terse");
    }

    #[test]
    fn test_parse_one_line_block_comment() {
        let tokens = tokenize("/* compact */");
        let (comment, _) = parse_block_at(&tokens, 0).expect("failed to parse");
        assert_eq!(comment.lines(), ["compact"]);
    }

    #[test]
    fn test_parse_expanded_block_comment() {
        let tokens = tokenize("/*\n * first\n *\n * second\n */");
        let (comment, _) = parse_block_at(&tokens, 0).expect("failed to parse");
        assert_eq!(comment.lines(), ["first", "", "second"]);
    }

    #[test]
    fn test_unterminated_block_comment() {
        let tokens = tokenize("/* dangling");
        let error = parse_block_at(&tokens, 0).expect_err("expected failure");
        assert_eq!(error.to_string(), "Failed to find a closing '*/'!");
    }
}
