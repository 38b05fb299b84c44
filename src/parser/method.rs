//! Method parser.
//!
//! Runs after any modifier run has been consumed. Handles both regular
//! methods (`ReturnType name(...)`) and constructor-shaped methods, where
//! the first token is immediately followed by the parameter list. Body
//! lines are captured as opaque source text between the outer braces.

use crate::model::{CodeKind, Method, Parameter, Violation};

use super::error::ParseError;
use super::modifiers::Modifiers;
use super::support::{concat_raw, next_significant, read_generic_name, split_top_level};
use super::tokenizer::Token;
use super::types::parse_type_text;

pub(crate) fn parse_at(
    tokens: &[Token],
    start: usize,
    modifiers: Modifiers,
) -> Result<(Method, usize), ParseError> {
    let mut violations = Vec::new();

    let (first, after_first) = read_generic_name(tokens, start);
    let mut index = after_first;
    let mut return_type_text: Option<String> = None;
    let name: String;
    match next_significant(tokens, index) {
        Some(next) if tokens[next].text() == "(" => {
            // constructor-shaped: the presumed type was the name
            name = first;
            index = next;
        }
        Some(next) => {
            return_type_text = Some(first);
            name = tokens[next].text().to_string();
            index = next + 1;
        }
        None => {
            violations.push(Violation::MissingToken("a method name".to_string()));
            violations.push(Violation::MissingToken("a parameter list".to_string()));
            return Err(ParseError::new(CodeKind::Method, violations));
        }
    }

    let return_type = match return_type_text {
        Some(text) => match parse_type_text(&text) {
            Ok(parsed) => Some(parsed),
            Err(problems) => {
                violations.extend(problems);
                None
            }
        },
        None => None,
    };

    // parameter list
    match next_significant(tokens, index) {
        Some(next) if tokens[next].text() == "(" => index = next + 1,
        _ => {
            violations.push(Violation::MissingToken("a parameter list".to_string()));
            return Err(ParseError::new(CodeKind::Method, violations));
        }
    }
    let mut parameter_text = String::new();
    let mut closed = false;
    while let Some(next) = next_significant(tokens, index) {
        let text = tokens[next].text();
        index = next + 1;
        if text == ")" {
            closed = true;
            break;
        }
        if !parameter_text.is_empty() {
            parameter_text.push(' ');
        }
        parameter_text.push_str(text);
    }
    if !closed {
        violations.push(Violation::MissingToken("a closing parenthesis".to_string()));
        return Err(ParseError::new(CodeKind::Method, violations));
    }
    let mut parameters: Vec<Parameter> = Vec::new();
    for piece in split_top_level(&parameter_text, ',') {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        match parse_parameter_text(piece) {
            Ok(parameter) => parameters.push(parameter),
            Err(problems) => violations.extend(problems),
        }
    }

    // optional throws clause
    let mut throws: Vec<String> = Vec::new();
    if let Some(next) = next_significant(tokens, index) {
        if tokens[next].text() == "throws" {
            index = next + 1;
            let mut throws_text = String::new();
            while let Some(cursor) = next_significant(tokens, index) {
                let text = tokens[cursor].text();
                if text == "{" || text == ";" {
                    break;
                }
                index = cursor + 1;
                if !throws_text.is_empty() {
                    throws_text.push(' ');
                }
                throws_text.push_str(text);
            }
            for piece in split_top_level(&throws_text, ',') {
                let piece = piece.trim();
                if !piece.is_empty() {
                    throws.push(piece.to_string());
                }
            }
            if throws.is_empty() {
                violations.push(Violation::MissingToken(
                    "an exception name after 'throws'".to_string(),
                ));
            }
        }
    }

    // body block or terminating semicolon
    let mut body: Vec<String> = Vec::new();
    match next_significant(tokens, index) {
        Some(next) if tokens[next].text() == "{" => {
            index = next + 1;
            let body_start = index;
            let mut depth = 1usize;
            while index < tokens.len() && depth > 0 {
                match tokens[index].text() {
                    "{" => depth += 1,
                    "}" => depth -= 1,
                    _ => {}
                }
                index += 1;
            }
            if depth > 0 {
                violations.push(Violation::MissingToken("a closing brace".to_string()));
            } else {
                let raw = concat_raw(tokens, body_start, index - 1);
                let mut lines: Vec<String> =
                    raw.lines().map(|line| line.trim().to_string()).collect();
                while lines.first().is_some_and(|line| line.is_empty()) {
                    lines.remove(0);
                }
                while lines.last().is_some_and(|line| line.is_empty()) {
                    lines.pop();
                }
                body = lines;
            }
        }
        Some(next) if tokens[next].text() == ";" => index = next + 1,
        _ => {
            violations.push(Violation::MissingToken(
                "a method body or terminating semicolon".to_string(),
            ));
        }
    }

    if !violations.is_empty() {
        return Err(ParseError::new(CodeKind::Method, violations));
    }
    let mut builder = Method::builder()
        .visibility(modifiers.visibility())
        .abstract_flag(modifiers.is_abstract)
        .static_flag(modifiers.is_static)
        .final_flag(modifiers.is_final)
        .name(name);
    if let Some(return_type) = return_type {
        builder = builder.return_type(return_type);
    }
    for parameter in parameters {
        builder = builder.parameter(parameter);
    }
    for throws_type in throws {
        builder = builder.throws(throws_type);
    }
    for line in body {
        builder = builder.body_line(line);
    }
    let method = builder.build().map_err(ParseError::from)?;
    Ok((method, index))
}

/// Parse one parameter such as `int a`, `Map<K, V> m`, or `String... rest`.
fn parse_parameter_text(text: &str) -> Result<Parameter, Vec<Violation>> {
    let Some((type_part, name_part)) = text.rsplit_once(' ') else {
        return Err(vec![Violation::MissingToken(format!(
            "a name for parameter '{}'",
            text
        ))]);
    };
    let type_part = type_part.trim();
    let (type_part, varargs) = match type_part.strip_suffix("...") {
        Some(stripped) => (stripped.trim_end(), true),
        None => (type_part, false),
    };
    Parameter::builder()
        .parameter_type(parse_type_text(type_part)?)
        .name(name_part.trim())
        .varargs(varargs)
        .build()
        .map_err(|error| error.problems().to_vec())
}

#[cfg(test)]
mod tests {
    use super::super::modifiers;
    use super::super::tokenizer::tokenize;
    use super::*;
    use crate::model::Visibility;

    fn parse(source: &str) -> Method {
        let tokens = tokenize(source);
        let (mods, next) = modifiers::parse_at(&tokens, 0).expect("failed to parse modifiers");
        let start = next_significant(&tokens, next).expect("no method start");
        let (method, _) = parse_at(&tokens, start, mods).expect("failed to parse method");
        method
    }

    #[test]
    fn test_parse_main_method() {
        let method = parse("public static void main(String[] args) {\n    run();\n}");
        assert_eq!(method.visibility(), Visibility::Public);
        assert!(method.is_static());
        assert_eq!(method.return_type().map(|t| t.name()), Some("void"));
        assert_eq!(method.name(), "main");
        assert_eq!(method.parameters().len(), 1);
        assert_eq!(method.parameters()[0].parameter_type().name(), "String[]");
        assert_eq!(method.parameters()[0].name(), "args");
        assert_eq!(method.body(), ["run();"]);
    }

    #[test]
    fn test_parse_constructor_shape() {
        let method = parse("public Worker(int id) {\n}");
        assert_eq!(method.name(), "Worker");
        assert!(method.return_type().is_none());
        assert_eq!(method.parameters().len(), 1);
    }

    #[test]
    fn test_parse_varargs_and_throws() {
        let method = parse("void log(String format, Object... args) throws IOException {\n}");
        assert!(method.parameters()[1].is_varargs());
        assert_eq!(method.parameters()[1].parameter_type().name(), "Object");
        assert_eq!(method.throws(), ["IOException"]);
    }

    #[test]
    fn test_parse_abstract_method() {
        let method = parse("protected abstract int size();");
        assert!(method.is_abstract());
        assert!(method.body().is_empty());
        assert_eq!(method.to_string(), "protected abstract int size();");
    }

    #[test]
    fn test_nested_braces_stay_in_body() {
        let method = parse("void f() {\n    if (x) {\n        y();\n    }\n}");
        assert_eq!(method.body(), ["if (x) {", "y();", "}"]);
    }
}
