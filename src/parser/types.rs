//! Text-level parsing for type references and type parameters.
//!
//! Types arrive as single token texts (`List<String>`) or as generic-aware
//! joins of several tokens (`Map<String, Integer>`), so they are parsed from
//! strings rather than from the token stream.

use crate::model::{Type, TypeParameter, Violation};

use super::support::split_top_level;

/// Parse a type reference such as `int`, `List<String>`, or
/// `Map<K, List<V>>`. Errors are returned as bare violations so the caller
/// can fold them into its own construct error.
pub(crate) fn parse_type_text(text: &str) -> Result<Type, Vec<Violation>> {
    let text = text.trim();
    if text.is_empty() {
        return Err(vec![Violation::MissingToken("a type name".to_string())]);
    }
    let (base, inner) = match text.find('<') {
        Some(open) => {
            if !text.ends_with('>') {
                return Err(vec![Violation::MissingToken(
                    "a closing '>' in the type arguments".to_string(),
                )]);
            }
            (text[..open].trim(), Some(&text[open + 1..text.len() - 1]))
        }
        None => (text, None),
    };
    if base.is_empty() {
        return Err(vec![Violation::MissingToken("a type name".to_string())]);
    }
    let mut builder = Type::builder().name(base);
    if let Some(inner) = inner {
        for piece in split_top_level(inner, ',') {
            let piece = piece.trim();
            // an empty list is the diamond form `<>`
            if piece.is_empty() {
                continue;
            }
            builder = builder.generic(parse_type_text(piece)?);
        }
    }
    builder.build().map_err(|error| error.problems().to_vec())
}

/// Parse a declared type parameter such as `T` or `K extends Comparable<K>`.
pub(crate) fn parse_type_parameter_text(text: &str) -> Result<TypeParameter, Vec<Violation>> {
    let text = text.trim();
    let mut depth = 0i32;
    let mut split_at = None;
    for (offset, c) in text.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth -= 1,
            _ => {}
        }
        if depth == 0 && text[offset..].starts_with(" extends ") {
            split_at = Some(offset);
            break;
        }
    }
    let (base_text, bound_text) = match split_at {
        Some(offset) => (&text[..offset], Some(&text[offset + " extends ".len()..])),
        None => (text, None),
    };
    let mut builder = TypeParameter::builder().base(parse_type_text(base_text)?);
    if let Some(bound_text) = bound_text {
        builder = builder.bound(parse_type_text(bound_text)?);
    }
    builder.build().map_err(|error| error.problems().to_vec())
}

/// Split a declaration name like `Box<T, U extends Number>` into the bare
/// name and its type parameter texts.
pub(crate) fn split_generic_header(text: &str) -> Result<(String, Vec<String>), Vec<Violation>> {
    match text.find('<') {
        None => Ok((text.to_string(), Vec::new())),
        Some(open) => {
            if !text.ends_with('>') {
                return Err(vec![Violation::MissingToken(
                    "a closing '>' in the type parameter list".to_string(),
                )]);
            }
            let base = text[..open].trim().to_string();
            let inner = &text[open + 1..text.len() - 1];
            let pieces = split_top_level(inner, ',')
                .into_iter()
                .map(|piece| piece.trim().to_string())
                .filter(|piece| !piece.is_empty())
                .collect();
            Ok((base, pieces))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_generics() {
        let parsed = parse_type_text("Map<String, List<Integer>>").expect("failed to parse");
        assert_eq!(parsed.name(), "Map");
        assert_eq!(parsed.generics().len(), 2);
        assert_eq!(parsed.generics()[1].name(), "List");
        assert_eq!(parsed.to_string(), "Map<String, List<Integer>>");
    }

    #[test]
    fn test_parse_type_parameter_with_bound() {
        let parsed = parse_type_parameter_text("K extends Comparable<K>").expect("failed to parse");
        assert_eq!(parsed.base().name(), "K");
        assert_eq!(parsed.bound().map(|bound| bound.name()), Some("Comparable"));
    }

    #[test]
    fn test_unbalanced_generics_rejected() {
        assert!(parse_type_text("List<String").is_err());
    }
}
