//! Class parser.
//!
//! The most involved construct parser. The declaration header walks through
//! name, optional `extends`, and an optional comma-separated `implements`
//! list before the block opens; inside the block the shared dispatch rules
//! apply recursively, so inner classes nest arbitrarily. Javadoc and
//! annotations seen inside the block are held pending and attached to the
//! member that follows them.

use log::debug;

use crate::model::{Annotation, Class, ClassMember, CodeKind, Javadoc, Violation};

use super::dispatch::{classify_member, MemberShape};
use super::error::ParseError;
use super::modifiers::{self, Modifiers};
use super::support::{next_significant, read_generic_name};
use super::tokenizer::Token;
use super::types::{parse_type_parameter_text, split_generic_header};
use super::{annotation, comment, field, javadoc, method};

pub(crate) fn parse_at(
    tokens: &[Token],
    start: usize,
    collected: Modifiers,
    inner: bool,
) -> Result<(Class, usize), ParseError> {
    debug_assert_eq!(tokens[start].text(), "class");
    let mut violations: Vec<Violation> = Vec::new();
    let mut index = start + 1;

    let mut block_open = false;
    let mut closed = false;

    // class name; the token may carry the block tokens fused onto it
    let mut name = String::new();
    match next_significant(tokens, index) {
        None => violations.push(Violation::MissingToken("a class name".to_string())),
        Some(next) => {
            let (raw, after) = read_generic_name(tokens, next);
            index = after;
            name = strip_block_suffix(raw, &mut block_open, &mut closed, &mut violations);
            if name.is_empty() {
                violations.push(Violation::MissingToken("a class name".to_string()));
            }
        }
    }

    let mut super_class: Option<String> = None;
    let mut interfaces: Vec<String> = Vec::new();
    let mut members: Vec<ClassMember> = Vec::new();
    let mut pending_javadoc: Option<Javadoc> = None;
    let mut pending_annotations: Vec<Annotation> = Vec::new();

    while !closed {
        let Some(next) = next_significant(tokens, index) else {
            if !block_open {
                violations.push(Violation::MissingToken("the block open token".to_string()));
            }
            violations.push(Violation::MissingToken("the block close token".to_string()));
            break;
        };
        let text = tokens[next].text();

        if !block_open {
            match text {
                "extends" => {
                    index = next + 1;
                    match next_significant(tokens, index) {
                        None => violations.push(Violation::MissingToken(
                            "a super class name after 'extends'".to_string(),
                        )),
                        Some(name_index) => {
                            let (raw, after) = read_generic_name(tokens, name_index);
                            index = after;
                            let cleaned =
                                strip_block_suffix(raw, &mut block_open, &mut closed, &mut violations);
                            if super_class.is_some() {
                                violations.push(Violation::IllegalOrder(
                                    "a second 'extends' clause".to_string(),
                                ));
                            } else if cleaned.is_empty() {
                                violations.push(Violation::MissingToken(
                                    "a super class name after 'extends'".to_string(),
                                ));
                            } else {
                                super_class = Some(cleaned);
                            }
                        }
                    }
                }
                "implements" => {
                    index = parse_implements(tokens, next + 1, &mut interfaces, &mut violations);
                }
                "{" => {
                    block_open = true;
                    index = next + 1;
                }
                "}" => {
                    violations.push(Violation::Invalid(
                        "found the block close token before the block open token!".to_string(),
                    ));
                    closed = true;
                    index = next + 1;
                }
                other => {
                    violations.push(Violation::UnknownToken(other.to_string()));
                    index = next + 1;
                    break;
                }
            }
            continue;
        }

        // inside the block
        match text {
            "}" => {
                if pending_javadoc.is_some() || !pending_annotations.is_empty() {
                    let what = match (pending_javadoc.is_some(), !pending_annotations.is_empty()) {
                        (true, true) => "a javadoc and annotations",
                        (true, false) => "a javadoc",
                        _ => "annotations",
                    };
                    violations.push(Violation::Invalid(format!(
                        "found {} at end of class with nothing to attach!",
                        what
                    )));
                }
                closed = true;
                index = next + 1;
            }
            "{" => {
                violations.push(Violation::Invalid("hit the block open token twice!".to_string()));
                index = next + 1;
            }
            "extends" => {
                violations.push(Violation::Invalid(
                    "found 'extends' after hitting the block open token!".to_string(),
                ));
                index = next + 1;
            }
            "class" => {
                let (inner_class, after) = parse_at(tokens, next, Modifiers::default(), true)?;
                let inner_class = attach_class(inner_class, &mut pending_javadoc, &mut pending_annotations);
                members.push(ClassMember::InnerClass(inner_class));
                index = after;
            }
            _ if text.starts_with("/**") => {
                let (parsed, after) = javadoc::parse_at(tokens, next)?;
                if pending_javadoc.is_some() {
                    violations.push(Violation::IllegalOrder("two javadocs".to_string()));
                } else {
                    pending_javadoc = Some(parsed);
                }
                index = after;
            }
            _ if text.starts_with("/*") => {
                let (parsed, after) = comment::parse_block_at(tokens, next)?;
                members.push(ClassMember::BlockComment(parsed));
                index = after;
            }
            _ if text.starts_with("//") => {
                let (parsed, after) = comment::parse_line_at(tokens, next)?;
                members.push(ClassMember::LineComment(parsed));
                index = after;
            }
            _ if text.starts_with('@') => {
                let (parsed, after) = annotation::parse_at(tokens, next)?;
                pending_annotations.push(parsed);
                index = after;
            }
            _ => {
                let (member_modifiers, after_modifiers) = if modifiers::is_modifier(text) {
                    modifiers::parse_at(tokens, next)?
                } else {
                    (Modifiers::default(), next)
                };
                let Some(member_start) = next_significant(tokens, after_modifiers) else {
                    violations.push(Violation::MissingToken(
                        "a construct following the modifiers".to_string(),
                    ));
                    break;
                };
                if tokens[member_start].text() == "class" {
                    let (inner_class, after) = parse_at(tokens, member_start, member_modifiers, true)?;
                    let inner_class =
                        attach_class(inner_class, &mut pending_javadoc, &mut pending_annotations);
                    members.push(ClassMember::InnerClass(inner_class));
                    index = after;
                    continue;
                }
                match classify_member(tokens, member_start)? {
                    MemberShape::Field => {
                        let (mut parsed, after) =
                            field::parse_at(tokens, member_start, member_modifiers)?;
                        if let Some(doc) = pending_javadoc.take() {
                            parsed = parsed.with_javadoc(doc);
                        }
                        if !pending_annotations.is_empty() {
                            parsed = parsed.with_annotations(std::mem::take(&mut pending_annotations));
                        }
                        members.push(ClassMember::Field(parsed));
                        index = after;
                    }
                    MemberShape::Method => {
                        let (mut parsed, after) =
                            method::parse_at(tokens, member_start, member_modifiers)?;
                        if let Some(doc) = pending_javadoc.take() {
                            parsed = parsed.with_javadoc(doc);
                        }
                        if !pending_annotations.is_empty() {
                            parsed = parsed.with_annotations(std::mem::take(&mut pending_annotations));
                        }
                        members.push(ClassMember::Method(parsed));
                        index = after;
                    }
                }
            }
        }
    }

    // the declared name may carry type parameters, e.g. `Box<T>`
    let mut base_name = name.clone();
    let mut type_parameter_texts: Vec<String> = Vec::new();
    match split_generic_header(&name) {
        Ok((base, pieces)) => {
            base_name = base;
            type_parameter_texts = pieces;
        }
        Err(problems) => violations.extend(problems),
    }

    if !violations.is_empty() {
        return Err(ParseError::new(CodeKind::Class, violations));
    }

    let mut builder = Class::builder()
        .inner(inner)
        .visibility(collected.visibility())
        .abstract_flag(collected.is_abstract)
        .static_flag(collected.is_static)
        .final_flag(collected.is_final)
        .name(base_name);
    let mut parameter_problems = Vec::new();
    for text in type_parameter_texts {
        match parse_type_parameter_text(&text) {
            Ok(parameter) => builder = builder.type_parameter(parameter),
            Err(problems) => parameter_problems.extend(problems),
        }
    }
    if !parameter_problems.is_empty() {
        return Err(ParseError::new(CodeKind::Class, parameter_problems));
    }
    if let Some(super_class) = super_class {
        builder = builder.super_class(super_class);
    }
    for interface in interfaces {
        builder = builder.interface(interface);
    }
    for member in members {
        builder = builder.member(member);
    }
    let class = builder.build().map_err(ParseError::from)?;
    debug!(
        "parsed class '{}' with {} members",
        class.name(),
        class.members().len()
    );
    Ok((class, index))
}

/// Remove a fused `{`, `}`, or `{}` from the end of a name token, updating
/// the block state accordingly.
fn strip_block_suffix(
    text: String,
    block_open: &mut bool,
    closed: &mut bool,
    violations: &mut Vec<Violation>,
) -> String {
    if let Some(stripped) = text.strip_suffix("{}") {
        *block_open = true;
        *closed = true;
        return stripped.to_string();
    }
    if let Some(stripped) = text.strip_suffix('{') {
        *block_open = true;
        return stripped.to_string();
    }
    if let Some(stripped) = text.strip_suffix('}') {
        violations.push(Violation::Invalid(
            "found the block close token before the block open token!".to_string(),
        ));
        *closed = true;
        return stripped.to_string();
    }
    text
}

fn attach_class(
    mut class: Class,
    pending_javadoc: &mut Option<Javadoc>,
    pending_annotations: &mut Vec<Annotation>,
) -> Class {
    if let Some(doc) = pending_javadoc.take() {
        class = class.with_javadoc(doc);
    }
    if !pending_annotations.is_empty() {
        class = class.with_annotations(std::mem::take(pending_annotations));
    }
    class
}

/// Read the comma-separated interface list after `implements`. Commas may be
/// fused to either neighboring name or stand alone; dangling commas and a
/// missing first name are distinct errors.
fn parse_implements(
    tokens: &[Token],
    from: usize,
    interfaces: &mut Vec<String>,
    violations: &mut Vec<Violation>,
) -> usize {
    let mut index = from;
    let mut need_name = true;
    let mut saw_comma = false;
    while let Some(next) = next_significant(tokens, index) {
        let text = tokens[next].text();
        if text == "{" || text == "}" || text == "extends" {
            break;
        }
        let (joined, after) = read_generic_name(tokens, next);
        index = after;
        for (position, piece) in super::support::split_top_level(&joined, ',')
            .into_iter()
            .enumerate()
        {
            if position > 0 {
                // a ',' boundary between pieces
                if need_name {
                    violations.push(Violation::IllegalOrder(
                        "a ',' without a preceding interface name".to_string(),
                    ));
                }
                saw_comma = true;
                need_name = true;
            }
            let piece = piece.trim();
            if piece.is_empty() {
                continue;
            }
            if !need_name {
                violations.push(Violation::IllegalOrder(format!(
                    "interface name '{}' without a separating comma",
                    piece
                )));
            }
            interfaces.push(piece.to_string());
            need_name = false;
        }
    }
    if need_name {
        let after = if saw_comma || !interfaces.is_empty() {
            "an interface name after ','"
        } else {
            "an interface name after 'implements'"
        };
        violations.push(Violation::MissingToken(after.to_string()));
    }
    index
}
