//! Token-walk helpers shared by the per-construct parsers.

use crate::model::Violation;

use super::tokenizer::Token;

/// Index of the next significant (non-whitespace, non-newline) token at or
/// after `from`.
pub(crate) fn next_significant(tokens: &[Token], from: usize) -> Option<usize> {
    (from..tokens.len()).find(|&index| tokens[index].is_significant())
}

/// Net `<`/`>` nesting depth of a token text.
pub(crate) fn generic_depth(text: &str) -> i32 {
    text.chars().fold(0, |depth, c| match c {
        '<' => depth + 1,
        '>' => depth - 1,
        _ => depth,
    })
}

/// Raw concatenation of token texts in `[from, to)`, whitespace included.
pub(crate) fn concat_raw(tokens: &[Token], from: usize, to: usize) -> String {
    tokens[from..to.min(tokens.len())]
        .iter()
        .map(Token::text)
        .collect()
}

/// Read a name that may span several tokens when generics carry fused
/// commas, e.g. `Map<String,` `Integer>`. Returns the joined text and the
/// index of the next unconsumed token.
pub(crate) fn read_generic_name(tokens: &[Token], start: usize) -> (String, usize) {
    let mut name = tokens[start].text().to_string();
    let mut index = start + 1;
    while generic_depth(&name) > 0 {
        let Some(next) = next_significant(tokens, index) else {
            break;
        };
        name.push(' ');
        name.push_str(tokens[next].text());
        index = next + 1;
    }
    (name, index)
}

/// Split `text` on `separator` at angle-bracket and parenthesis depth zero.
pub(crate) fn split_top_level(text: &str, separator: char) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut depth = 0i32;
    for c in text.chars() {
        match c {
            '<' | '(' => depth += 1,
            '>' | ')' => depth -= 1,
            _ => {}
        }
        if c == separator && depth == 0 {
            pieces.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    pieces.push(current);
    pieces
}

/// Concatenate significant token texts into a dotted name until a token
/// ending in `;`. Used by the package and import parsers; both the missing
/// name and the missing terminator are reported, together when both apply.
pub(crate) fn read_dotted_name(
    tokens: &[Token],
    start: usize,
    missing: &str,
) -> (String, usize, Vec<Violation>) {
    let mut name = String::new();
    let mut violations = Vec::new();
    let mut index = start;
    let mut terminated = false;
    while let Some(next) = next_significant(tokens, index) {
        let text = tokens[next].text();
        index = next + 1;
        if let Some(stripped) = text.strip_suffix(';') {
            name.push_str(stripped);
            terminated = true;
            break;
        }
        name.push_str(text);
    }
    if name.is_empty() {
        violations.push(Violation::MissingToken(missing.to_string()));
    }
    if !terminated {
        violations.push(Violation::MissingToken("a terminating semicolon".to_string()));
    }
    (name, index, violations)
}
