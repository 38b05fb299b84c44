//! Parser for Java source text.
//!
//! The pipeline is a single pass: the tokenizer splits the raw text into a
//! flat token sequence, the dispatcher routes each significant token to a
//! per-construct parser, and the fragment combinator folds the resulting
//! top-level fragments into one root construct.

pub mod tokenizer;

mod annotation;
mod class;
mod combine;
mod comment;
mod dispatch;
mod error;
mod field;
mod import;
mod javadoc;
mod method;
mod modifiers;
mod package;
mod support;
mod types;

pub use error::ParseError;
pub use tokenizer::{tokenize, Token, TokenKind};

use log::debug;

use crate::model::{
    Annotation, Class, CodeType, Field, ImportStatement, Javadoc, Method, MultiLineComment,
    PackageDeclaration, SingleLineComment,
};

/// Parse Java source text into a single root construct.
///
/// Fails with a structured [`ParseError`] on any malformed input; succeeds
/// with exactly one root value (a package declaration, import statement,
/// field, method, or class).
pub fn parse_type(source: &str) -> crate::Result<CodeType> {
    let tokens = tokenizer::tokenize(source);
    debug!("parse start: {} tokens", tokens.len());
    let fragments = parse_fragments(&tokens)?;
    debug!("parse: {} top-level fragments", fragments.len());
    let root = combine::combine(fragments)?;
    Ok(root)
}

fn parse_fragments(tokens: &[Token]) -> Result<Vec<CodeType>, ParseError> {
    let mut fragments = Vec::new();
    let mut index = 0;
    while let Some(next) = support::next_significant(tokens, index) {
        let (fragment, after) = dispatch::dispatch(tokens, next)?;
        fragments.push(fragment);
        index = after;
    }
    Ok(fragments)
}

/// Run a narrow single-construct parse: the construct must start at the
/// first significant token and nothing significant may follow it.
fn narrow<T>(
    source: &str,
    parse: impl FnOnce(&[Token], usize) -> Option<(T, usize)>,
) -> Option<T> {
    let tokens = tokenizer::tokenize(source);
    let start = support::next_significant(&tokens, 0)?;
    let (value, next) = parse(&tokens, start)?;
    match support::next_significant(&tokens, next) {
        Some(_) => None,
        None => Some(value),
    }
}

/// Parse exactly one package declaration, or `None` if the text is not one.
pub fn parse_package_declaration(source: &str) -> Option<PackageDeclaration> {
    narrow(source, |tokens, start| {
        if tokens[start].text() != "package" {
            return None;
        }
        package::parse_at(tokens, start).ok()
    })
}

/// Parse exactly one import statement, or `None` if the text is not one.
pub fn parse_import_statement(source: &str) -> Option<ImportStatement> {
    narrow(source, |tokens, start| {
        if tokens[start].text() != "import" {
            return None;
        }
        import::parse_at(tokens, start).ok()
    })
}

/// Parse exactly one javadoc, or `None` if the text is not one.
pub fn parse_javadoc(source: &str) -> Option<Javadoc> {
    narrow(source, |tokens, start| {
        if !tokens[start].text().starts_with("/**") {
            return None;
        }
        javadoc::parse_at(tokens, start).ok()
    })
}

/// Parse exactly one `//` comment, or `None` if the text is not one.
pub fn parse_single_line_comment(source: &str) -> Option<SingleLineComment> {
    narrow(source, |tokens, start| {
        if !tokens[start].text().starts_with("//") {
            return None;
        }
        comment::parse_line_at(tokens, start).ok()
    })
}

/// Parse exactly one `/* ... */` comment, or `None` if the text is not one.
pub fn parse_multi_line_comment(source: &str) -> Option<MultiLineComment> {
    narrow(source, |tokens, start| {
        let text = tokens[start].text();
        if !text.starts_with("/*") || text.starts_with("/**") {
            return None;
        }
        comment::parse_block_at(tokens, start).ok()
    })
}

/// Parse exactly one annotation, or `None` if the text is not one.
pub fn parse_annotation(source: &str) -> Option<Annotation> {
    narrow(source, |tokens, start| {
        if !tokens[start].text().starts_with('@') {
            return None;
        }
        annotation::parse_at(tokens, start).ok()
    })
}

/// Parse exactly one field declaration, or `None` if the text is not one.
pub fn parse_field(source: &str) -> Option<Field> {
    narrow(source, |tokens, start| {
        let (collected, after) = modifiers::parse_at(tokens, start).ok()?;
        let member_start = support::next_significant(tokens, after)?;
        match dispatch::classify_member(tokens, member_start).ok()? {
            dispatch::MemberShape::Field => field::parse_at(tokens, member_start, collected).ok(),
            dispatch::MemberShape::Method => None,
        }
    })
}

/// Parse exactly one method declaration, or `None` if the text is not one.
pub fn parse_method(source: &str) -> Option<Method> {
    narrow(source, |tokens, start| {
        let (collected, after) = modifiers::parse_at(tokens, start).ok()?;
        let member_start = support::next_significant(tokens, after)?;
        match dispatch::classify_member(tokens, member_start).ok()? {
            dispatch::MemberShape::Method => method::parse_at(tokens, member_start, collected).ok(),
            dispatch::MemberShape::Field => None,
        }
    })
}

/// Parse exactly one class declaration, or `None` if the text is not one.
pub fn parse_class(source: &str) -> Option<Class> {
    narrow(source, |tokens, start| {
        let (collected, after) = modifiers::parse_at(tokens, start).ok()?;
        let class_start = support::next_significant(tokens, after)?;
        if tokens[class_start].text() != "class" {
            return None;
        }
        class::parse_at(tokens, class_start, collected, false).ok()
    })
}
