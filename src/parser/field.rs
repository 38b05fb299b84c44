//! Field parser.
//!
//! Runs after any modifier run has been consumed; the current token is the
//! declared type. The initializer, when present, is kept as raw source text
//! up to the terminating semicolon.

use crate::model::{CodeKind, Field, Violation};

use super::error::ParseError;
use super::modifiers::Modifiers;
use super::support::{concat_raw, next_significant, read_generic_name};
use super::tokenizer::Token;
use super::types::parse_type_text;

pub(crate) fn parse_at(
    tokens: &[Token],
    start: usize,
    modifiers: Modifiers,
) -> Result<(Field, usize), ParseError> {
    let mut violations = Vec::new();
    if modifiers.is_abstract {
        violations.push(Violation::Invalid(
            "Encountered illegal modifier 'abstract' for a field!".to_string(),
        ));
    }

    let (type_text, after_type) = read_generic_name(tokens, start);
    let field_type = match parse_type_text(&type_text) {
        Ok(parsed) => Some(parsed),
        Err(problems) => {
            violations.extend(problems);
            None
        }
    };

    let mut index = after_type;
    let mut name = String::new();
    let mut terminated = false;
    let mut at_assign = false;

    match next_significant(tokens, index) {
        None => {
            violations.push(Violation::MissingToken("a field name".to_string()));
            violations.push(Violation::MissingToken("a terminating semicolon".to_string()));
            terminated = true;
        }
        Some(next) => {
            let text = tokens[next].text();
            if text == "=" {
                violations.push(Violation::MissingToken("a field name".to_string()));
                at_assign = true;
                index = next;
            } else if let Some(stripped) = text.strip_suffix(';') {
                if stripped.is_empty() {
                    violations.push(Violation::MissingToken("a field name".to_string()));
                } else {
                    name = stripped.to_string();
                }
                terminated = true;
                index = next + 1;
            } else {
                name = text.to_string();
                index = next + 1;
            }
        }
    }

    let mut value: Option<String> = None;
    if !terminated {
        match next_significant(tokens, index) {
            Some(next) if tokens[next].text() == "=" || at_assign => {
                let assign = if at_assign { index } else { next };
                let value_start = assign + 1;
                let mut cursor = value_start;
                let mut end = None;
                while cursor < tokens.len() {
                    let text = tokens[cursor].text();
                    cursor += 1;
                    if text.ends_with(';') {
                        end = Some(cursor);
                        break;
                    }
                }
                match end {
                    Some(end) => {
                        let raw = concat_raw(tokens, value_start, end);
                        let trimmed = raw.trim();
                        let trimmed = trimmed.strip_suffix(';').unwrap_or(trimmed).trim_end();
                        value = Some(trimmed.to_string());
                        index = end;
                    }
                    None => {
                        violations.push(Violation::MissingToken(
                            "a terminating semicolon".to_string(),
                        ));
                        index = cursor;
                    }
                }
            }
            Some(next) if tokens[next].text() == ";" => {
                index = next + 1;
            }
            Some(next) => {
                violations.push(Violation::Invalid(format!(
                    "Encountered unexpected token '{}' in a field declaration!",
                    tokens[next].text()
                )));
                index = next + 1;
            }
            None => {
                violations.push(Violation::MissingToken("a terminating semicolon".to_string()));
            }
        }
    }

    if !violations.is_empty() {
        return Err(ParseError::new(CodeKind::Field, violations));
    }
    let mut builder = Field::builder()
        .visibility(modifiers.visibility())
        .static_flag(modifiers.is_static)
        .final_flag(modifiers.is_final)
        .name(name);
    if let Some(field_type) = field_type {
        builder = builder.field_type(field_type);
    }
    if let Some(value) = value {
        builder = builder.value(value);
    }
    let field = builder.build().map_err(ParseError::from)?;
    Ok((field, index))
}
