//! Symbol Classifier - character → terminal
//!
//! Classification is total: every character becomes some terminal, so nothing handed to the
//! classifier is silently lost.

use crate::textree::ast::{Component, Symbol, SymbolKind};

pub fn classify_char(ch: char) -> SymbolKind {
    if ch.is_ascii_punctuation() {
        SymbolKind::Sign
    } else if ch.is_ascii_alphabetic() {
        SymbolKind::Letter
    } else if ch.is_whitespace() {
        SymbolKind::Space
    } else {
        SymbolKind::Generic
    }
}

/// Wrap `ch` in a classified terminal.
pub fn classify(ch: char) -> Component {
    Component::Terminal(Symbol::new(ch, classify_char(ch)))
}

/// Build the terminal for a single-symbol match. Only the first character is used, so a rule
/// that matches more than one character per symbol yields one terminal per match.
pub fn symbol_of(matched: &str) -> Option<Component> {
    matched.chars().next().map(classify)
}
