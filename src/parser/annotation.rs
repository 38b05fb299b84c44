//! Annotation parser.

use crate::model::{Annotation, CodeKind, Violation};

use super::error::ParseError;
use super::support::next_significant;
use super::tokenizer::Token;

/// Parse an `@Annotation`, with an optional `(name = value, ...)` argument
/// list, starting at the `@` token.
pub(crate) fn parse_at(tokens: &[Token], start: usize) -> Result<(Annotation, usize), ParseError> {
    let first = tokens[start].text();
    let name = first.strip_prefix('@').unwrap_or(first).to_string();
    let mut violations = Vec::new();
    if name.is_empty() {
        violations.push(Violation::MissingToken("an annotation name".to_string()));
    }
    let mut index = start + 1;
    let mut parameters: Vec<(String, String)> = Vec::new();

    let has_arguments =
        next_significant(tokens, index).is_some_and(|next| tokens[next].text() == "(");
    if has_arguments {
        index = next_significant(tokens, index).unwrap_or(index) + 1;
        let mut closed = false;
        'arguments: loop {
            let Some(lead_index) = next_significant(tokens, index) else {
                break;
            };
            let lead = tokens[lead_index].text();
            index = lead_index + 1;
            if lead == ")" {
                closed = true;
                break;
            }
            if lead == "," {
                continue;
            }
            let named =
                next_significant(tokens, index).is_some_and(|next| tokens[next].text() == "=");
            if !named {
                let value = lead.strip_suffix(',').unwrap_or(lead);
                parameters.push(("value".to_string(), value.to_string()));
                continue;
            }
            index = next_significant(tokens, index).unwrap_or(index) + 1;
            let mut value = String::new();
            let mut depth = 0usize;
            loop {
                let Some(value_index) = next_significant(tokens, index) else {
                    break 'arguments;
                };
                let text = tokens[value_index].text();
                if depth == 0 && text == ")" {
                    break;
                }
                index = value_index + 1;
                if depth == 0 && text == "," {
                    break;
                }
                if text == "(" {
                    depth += 1;
                    push_joined(&mut value, "(");
                    continue;
                }
                if text == ")" {
                    depth -= 1;
                    value.push(')');
                    continue;
                }
                if depth == 0 {
                    if let Some(stripped) = text.strip_suffix(',') {
                        push_joined(&mut value, stripped);
                        break;
                    }
                }
                push_joined(&mut value, text);
            }
            if value.is_empty() {
                violations.push(Violation::MissingToken("a parameter value".to_string()));
            }
            parameters.push((lead.to_string(), value));
        }
        if !closed {
            violations.push(Violation::MissingToken("a closing parenthesis".to_string()));
        }
    }

    if !violations.is_empty() {
        return Err(ParseError::new(CodeKind::Annotation, violations));
    }
    let mut builder = Annotation::builder().name(name);
    for (parameter, value) in parameters {
        builder = builder.parameter(parameter, value);
    }
    let annotation = builder.build().map_err(ParseError::from)?;
    Ok((annotation, index))
}

fn push_joined(value: &mut String, piece: &str) {
    if !value.is_empty() && !value.ends_with('(') {
        value.push(' ');
    }
    value.push_str(piece);
}

#[cfg(test)]
mod tests {
    use super::super::tokenizer::tokenize;
    use super::*;

    #[test]
    fn test_parse_marker_annotation() {
        let tokens = tokenize("@Override");
        let (annotation, _) = parse_at(&tokens, 0).expect("failed to parse");
        assert_eq!(annotation.name(), "Override");
        assert!(annotation.parameters().is_empty());
    }

    #[test]
    fn test_parse_named_parameters() {
        let tokens = tokenize("@Test(type = String.class, defaultValue = \"\")");
        let (annotation, _) = parse_at(&tokens, 0).expect("failed to parse");
        assert_eq!(annotation.name(), "Test");
        assert_eq!(
            annotation.parameters(),
            [
                ("type".to_string(), "String.class".to_string()),
                ("defaultValue".to_string(), "\"\"".to_string())
            ]
        );
        assert_eq!(
            annotation.to_string(),
            "@Test(type = String.class, defaultValue = \"\")"
        );
    }

    #[test]
    fn test_value_only_uses_implicit_key() {
        let tokens = tokenize("@SuppressWarnings(\"unchecked\")");
        let (annotation, _) = parse_at(&tokens, 0).expect("failed to parse");
        assert_eq!(
            annotation.parameters(),
            [("value".to_string(), "\"unchecked\"".to_string())]
        );
        assert_eq!(
            annotation.to_string(),
            "@SuppressWarnings(value = \"unchecked\")"
        );
    }

    #[test]
    fn test_missing_close_paren_reported() {
        let tokens = tokenize("@Test(type = int");
        let error = parse_at(&tokens, 0).expect_err("expected failure");
        assert_eq!(error.to_string(), "Failed to find a closing parenthesis!");
    }
}
