//! Modifier run collection.
//!
//! A construct may be preceded by any run of modifier keywords, in any
//! order. The run is consumed in one pass that aggregates every exclusivity
//! violation (duplicate modifiers, a second visibility keyword) before the
//! following construct is dispatched.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::model::{CodeKind, Violation, Visibility};

use super::error::ParseError;
use super::support::next_significant;
use super::tokenizer::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModifierKind {
    Visibility(Visibility),
    Abstract,
    Static,
    Final,
}

static MODIFIERS: Lazy<HashMap<&'static str, ModifierKind>> = Lazy::new(|| {
    HashMap::from([
        ("public", ModifierKind::Visibility(Visibility::Public)),
        ("protected", ModifierKind::Visibility(Visibility::Protected)),
        ("private", ModifierKind::Visibility(Visibility::Private)),
        ("abstract", ModifierKind::Abstract),
        ("static", ModifierKind::Static),
        ("final", ModifierKind::Final),
    ])
});

pub(crate) fn is_modifier(text: &str) -> bool {
    MODIFIERS.contains_key(text)
}

/// The modifier set collected in front of a construct.
#[derive(Debug, Clone, Default)]
pub(crate) struct Modifiers {
    pub visibility: Option<Visibility>,
    pub is_abstract: bool,
    pub is_static: bool,
    pub is_final: bool,
}

impl Modifiers {
    pub(crate) fn visibility(&self) -> Visibility {
        self.visibility.unwrap_or_default()
    }
}

/// Consume a run of modifier tokens starting at `start`, returning the
/// collected set and the index after the last modifier.
pub(crate) fn parse_at(tokens: &[Token], start: usize) -> Result<(Modifiers, usize), ParseError> {
    let mut modifiers = Modifiers::default();
    let mut violations = Vec::new();
    let mut index = start;
    while let Some(next) = next_significant(tokens, index) {
        let text = tokens[next].text();
        let Some(kind) = MODIFIERS.get(text) else {
            break;
        };
        match kind {
            ModifierKind::Visibility(visibility) => match modifiers.visibility {
                Some(existing) if existing == *visibility => {
                    violations.push(duplicate(text));
                }
                Some(_) => {
                    violations.push(Violation::IllegalOrder(format!(
                        "a second visibility modifier '{}'",
                        text
                    )));
                }
                None => modifiers.visibility = Some(*visibility),
            },
            ModifierKind::Abstract => {
                if modifiers.is_abstract {
                    violations.push(duplicate(text));
                }
                modifiers.is_abstract = true;
            }
            ModifierKind::Static => {
                if modifiers.is_static {
                    violations.push(duplicate(text));
                }
                modifiers.is_static = true;
            }
            ModifierKind::Final => {
                if modifiers.is_final {
                    violations.push(duplicate(text));
                }
                modifiers.is_final = true;
            }
        }
        index = next + 1;
    }
    if !violations.is_empty() {
        return Err(ParseError::new(CodeKind::Unknown, violations));
    }
    Ok((modifiers, index))
}

fn duplicate(text: &str) -> Violation {
    Violation::IllegalOrder(format!("duplicate modifier '{}'", text))
}
