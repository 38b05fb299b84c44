//! Javadoc parser.
//!
//! Javadocs use the same frame handling as block comments, then classify
//! each line as free content or one of the recognized block tags. The
//! condensed flag records whether the whole comment sat on one line.

use crate::model::{CodeKind, Javadoc};

use super::comment::{read_block_comment, strip_block_lines};
use super::error::ParseError;
use super::tokenizer::Token;

/// Parse a `/** ... */` javadoc starting at its opening token.
pub(crate) fn parse_at(tokens: &[Token], start: usize) -> Result<(Javadoc, usize), ParseError> {
    let (raw, next) = read_block_comment(tokens, start, CodeKind::Javadoc)?;
    let condensed = !raw.contains('\n');
    let mut builder = Javadoc::builder().condensed(condensed);
    let mut content: Vec<String> = Vec::new();
    for line in strip_block_lines(&raw) {
        if let Some(rest) = tag_value(&line, "@param") {
            let (name, description) = split_first_word(rest);
            builder = builder.param(name, description);
        } else if let Some(rest) = tag_value(&line, "@return") {
            builder = builder.returns(rest);
        } else if let Some(rest) = tag_value(&line, "@throws") {
            builder = builder.throws(rest);
        } else if let Some(rest) = tag_value(&line, "@author") {
            builder = builder.author(rest);
        } else if let Some(rest) = tag_value(&line, "@version") {
            builder = builder.version(rest);
        } else if let Some(rest) = tag_value(&line, "@since") {
            builder = builder.since(rest);
        } else {
            content.push(line);
        }
    }
    // the blank separator line before the tag block is rendering, not content
    while content.last().is_some_and(|line| line.is_empty()) {
        content.pop();
    }
    for line in content {
        builder = builder.content_line(line);
    }
    let javadoc = builder.build().map_err(ParseError::from)?;
    Ok((javadoc, next))
}

fn tag_value<'a>(line: &'a str, tag: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(tag)?;
    if rest.is_empty() || rest.starts_with(' ') {
        Some(rest.trim())
    } else {
        None
    }
}

fn split_first_word(text: &str) -> (&str, &str) {
    match text.split_once(' ') {
        Some((first, rest)) => (first, rest.trim()),
        None => (text, ""),
    }
}
