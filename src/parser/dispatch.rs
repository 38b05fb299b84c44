//! Token-driven construct routing.
//!
//! Inspects the next significant token and routes to the matching
//! per-construct parser: exact keyword, prefix sigil, modifier-set
//! membership, or the field-vs-method lookahead when nothing else decides.

use crate::model::{CodeKind, CodeType, Violation};

use super::error::ParseError;
use super::support::{next_significant, read_generic_name};
use super::tokenizer::Token;
use super::{annotation, class, comment, field, import, javadoc, method, modifiers, package};

/// Parse one top-level fragment starting at the significant token `index`.
pub(crate) fn dispatch(tokens: &[Token], index: usize) -> Result<(CodeType, usize), ParseError> {
    let text = tokens[index].text();
    if text == "package" {
        return package::parse_at(tokens, index).map(|(value, next)| (CodeType::Package(value), next));
    }
    if text == "import" {
        return import::parse_at(tokens, index).map(|(value, next)| (CodeType::Import(value), next));
    }
    if text == "class" {
        return class::parse_at(tokens, index, modifiers::Modifiers::default(), false)
            .map(|(value, next)| (CodeType::Class(value), next));
    }
    if text.starts_with("/**") {
        return javadoc::parse_at(tokens, index).map(|(value, next)| (CodeType::Javadoc(value), next));
    }
    if text.starts_with("/*") {
        return comment::parse_block_at(tokens, index)
            .map(|(value, next)| (CodeType::BlockComment(value), next));
    }
    if text.starts_with("//") {
        return comment::parse_line_at(tokens, index)
            .map(|(value, next)| (CodeType::LineComment(value), next));
    }
    if text.starts_with('@') {
        return annotation::parse_at(tokens, index)
            .map(|(value, next)| (CodeType::Annotation(value), next));
    }
    if modifiers::is_modifier(text) {
        return dispatch_with_modifiers(tokens, index);
    }
    dispatch_member(tokens, index, modifiers::Modifiers::default())
}

/// Consume the modifier run, then dispatch the construct it introduces.
pub(crate) fn dispatch_with_modifiers(
    tokens: &[Token],
    index: usize,
) -> Result<(CodeType, usize), ParseError> {
    let (collected, after) = modifiers::parse_at(tokens, index)?;
    let Some(next) = next_significant(tokens, after) else {
        return Err(ParseError::single(
            CodeKind::Unknown,
            Violation::MissingToken("a construct following the modifiers".to_string()),
        ));
    };
    if tokens[next].text() == "class" {
        return class::parse_at(tokens, next, collected, false)
            .map(|(value, position)| (CodeType::Class(value), position));
    }
    dispatch_member(tokens, next, collected)
}

fn dispatch_member(
    tokens: &[Token],
    index: usize,
    collected: modifiers::Modifiers,
) -> Result<(CodeType, usize), ParseError> {
    match classify_member(tokens, index)? {
        MemberShape::Field => {
            field::parse_at(tokens, index, collected).map(|(value, next)| (CodeType::Field(value), next))
        }
        MemberShape::Method => method::parse_at(tokens, index, collected)
            .map(|(value, next)| (CodeType::Method(value), next)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MemberShape {
    Field,
    Method,
}

/// Field-vs-method lookahead. With the current token as the presumed type:
/// a `(` right after means a constructor-shaped method; a token ending in
/// `;` means a field; one token further, `(` means a method and `=` or `;`
/// means a field. Anything else cannot be classified.
pub(crate) fn classify_member(tokens: &[Token], index: usize) -> Result<MemberShape, ParseError> {
    let (_, after_type) = read_generic_name(tokens, index);
    let Some(first) = next_significant(tokens, after_type) else {
        return Err(unknown(tokens[index].text()));
    };
    let first_text = tokens[first].text();
    if first_text == "(" {
        return Ok(MemberShape::Method);
    }
    if first_text.ends_with(';') {
        return Ok(MemberShape::Field);
    }
    let Some(second) = next_significant(tokens, first + 1) else {
        return Err(unknown(first_text));
    };
    let second_text = tokens[second].text();
    if second_text == "(" {
        return Ok(MemberShape::Method);
    }
    if second_text == "=" || second_text.ends_with(';') {
        return Ok(MemberShape::Field);
    }
    Err(unknown(second_text))
}

fn unknown(token: &str) -> ParseError {
    ParseError::single(CodeKind::Unknown, Violation::UnknownToken(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::super::tokenizer::tokenize;
    use super::*;

    #[test]
    fn test_classify_field_by_semicolon() {
        let tokens = tokenize("int count;");
        assert_eq!(classify_member(&tokens, 0).unwrap(), MemberShape::Field);
    }

    #[test]
    fn test_classify_field_by_assignment() {
        let tokens = tokenize("String name = \"x\";");
        assert_eq!(classify_member(&tokens, 0).unwrap(), MemberShape::Field);
    }

    #[test]
    fn test_classify_method_by_parenthesis() {
        let tokens = tokenize("void run() {\n}");
        assert_eq!(classify_member(&tokens, 0).unwrap(), MemberShape::Method);
    }

    #[test]
    fn test_classify_constructor_shape() {
        let tokens = tokenize("Worker(int id) {\n}");
        assert_eq!(classify_member(&tokens, 0).unwrap(), MemberShape::Method);
    }

    #[test]
    fn test_unclassifiable_token_reported_verbatim() {
        let tokens = tokenize("foo bar baz");
        let error = classify_member(&tokens, 0).expect_err("expected failure");
        assert_eq!(error.kind(), CodeKind::Unknown);
        assert_eq!(error.to_string(), "Failed to determine type from token 'baz'!");
    }
}
