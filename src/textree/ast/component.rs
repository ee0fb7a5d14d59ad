//! Tree node types
//!
//! Every node is a [`Component`]: either a `Terminal` wrapping one classified character, or a
//! `Composite` owning an ordered list of child components. Which level a composite sits at
//! (text, paragraph, sentence, word) is a tag, not a separate type.

use super::traits::{TextComponent, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The composite levels, from coarsest to finest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Text,
    Paragraph,
    Sentence,
    Word,
}

impl Level {
    pub fn name(&self) -> &'static str {
        match self {
            Level::Text => "Text",
            Level::Paragraph => "Paragraph",
            Level::Sentence => "Sentence",
            Level::Word => "Word",
        }
    }

    /// The level that children of this level are built at, `None` for words (their
    /// children are terminals).
    pub fn finer(&self) -> Option<Level> {
        match self {
            Level::Text => Some(Level::Paragraph),
            Level::Paragraph => Some(Level::Sentence),
            Level::Sentence => Some(Level::Word),
            Level::Word => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classification of a terminal character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    /// ASCII alphabetic character
    Letter,
    /// ASCII punctuation or sign
    Sign,
    /// Whitespace kept as a separator
    Space,
    /// Anything else (digits, non-ASCII characters)
    Generic,
}

impl SymbolKind {
    pub fn name(&self) -> &'static str {
        match self {
            SymbolKind::Letter => "letter",
            SymbolKind::Sign => "sign",
            SymbolKind::Space => "space",
            SymbolKind::Generic => "generic",
        }
    }
}

/// A leaf: one character and its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol {
    ch: char,
    kind: SymbolKind,
}

impl Symbol {
    pub fn new(ch: char, kind: SymbolKind) -> Self {
        Symbol { ch, kind }
    }

    pub fn ch(&self) -> char {
        self.ch
    }

    pub fn kind(&self) -> SymbolKind {
        self.kind
    }
}

impl TextComponent for Symbol {
    fn children(&self) -> &[Component] {
        &[]
    }

    fn write_value(&self, out: &mut String) {
        out.push(self.ch);
    }

    fn node_type(&self) -> &'static str {
        "Symbol"
    }
}

/// An inner node owning its children exclusively.
///
/// Children are only ever populated at construction; there is no mutation API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composite {
    level: Level,
    children: Vec<Component>,
}

impl Composite {
    pub fn new(level: Level, children: Vec<Component>) -> Self {
        Composite { level, children }
    }

    /// A composite with no children, e.g. the root before anything was parsed.
    pub fn empty(level: Level) -> Self {
        Composite::new(level, Vec::new())
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Children that are composites themselves, skipping separator terminals.
    pub fn composites(&self) -> impl Iterator<Item = &Composite> {
        self.children.iter().filter_map(Component::as_composite)
    }

    /// Children that are terminals.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.children.iter().filter_map(Component::as_symbol)
    }

    pub fn into_children(self) -> Vec<Component> {
        self.children
    }
}

impl TextComponent for Composite {
    fn children(&self) -> &[Component] {
        &self.children
    }

    fn write_value(&self, out: &mut String) {
        for child in &self.children {
            child.write_value(out);
        }
    }

    fn node_type(&self) -> &'static str {
        self.level.name()
    }
}

/// The uniform tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    Terminal(Symbol),
    Composite(Composite),
}

impl Component {
    pub fn as_composite(&self) -> Option<&Composite> {
        match self {
            Component::Composite(composite) => Some(composite),
            Component::Terminal(_) => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Component::Terminal(symbol) => Some(symbol),
            Component::Composite(_) => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Component::Terminal(_))
    }

    /// Level of a composite node, `None` for terminals.
    pub fn level(&self) -> Option<Level> {
        self.as_composite().map(Composite::level)
    }

    /// Accept a visitor for traversing this node and its children
    pub fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            Component::Terminal(symbol) => visitor.visit_symbol(symbol),
            Component::Composite(composite) => composite.accept(visitor),
        }
    }
}

impl Composite {
    /// Accept a visitor for traversing this node and its children
    pub fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.enter_composite(self);
        for child in &self.children {
            child.accept(visitor);
        }
        visitor.exit_composite(self);
    }
}

impl TextComponent for Component {
    fn children(&self) -> &[Component] {
        match self {
            Component::Terminal(symbol) => symbol.children(),
            Component::Composite(composite) => composite.children(),
        }
    }

    fn write_value(&self, out: &mut String) {
        match self {
            Component::Terminal(symbol) => symbol.write_value(out),
            Component::Composite(composite) => composite.write_value(out),
        }
    }

    fn node_type(&self) -> &'static str {
        match self {
            Component::Terminal(symbol) => symbol.node_type(),
            Component::Composite(composite) => composite.node_type(),
        }
    }
}

impl From<Symbol> for Component {
    fn from(symbol: Symbol) -> Self {
        Component::Terminal(symbol)
    }
}

impl From<Composite> for Component {
    fn from(composite: Composite) -> Self {
        Component::Composite(composite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Component {
        Symbol::new(ch, SymbolKind::Letter).into()
    }

    fn word(text: &str) -> Component {
        Composite::new(Level::Word, text.chars().map(letter).collect()).into()
    }

    #[test]
    fn test_symbol_value_is_its_character() {
        let symbol = Symbol::new('a', SymbolKind::Letter);
        assert_eq!(symbol.value(), "a");
        assert!(symbol.children().is_empty());
    }

    #[test]
    fn test_composite_value_concatenates_children_in_order() {
        let sentence = Composite::new(
            Level::Sentence,
            vec![
                word("Hi"),
                Symbol::new(' ', SymbolKind::Space).into(),
                word("there"),
            ],
        );
        assert_eq!(sentence.value(), "Hi there");
        assert_eq!(sentence.children().len(), 3);
        assert_eq!(sentence.composites().count(), 2);
        assert_eq!(sentence.symbols().count(), 1);
    }

    #[test]
    fn test_empty_composite() {
        let text = Composite::empty(Level::Text);
        assert!(text.is_empty());
        assert_eq!(text.value(), "");
        assert_eq!(text.node_type(), "Text");
    }

    #[test]
    fn test_component_dispatch() {
        let node = word("ok");
        assert_eq!(node.level(), Some(Level::Word));
        assert!(!node.is_terminal());
        assert_eq!(node.value(), "ok");
        assert_eq!(node.children()[0].node_type(), "Symbol");
        assert_eq!(node.children()[0].level(), None);
    }

    #[test]
    fn test_level_chain_ends_at_word() {
        let mut level = Level::Text;
        let mut seen = vec![level];
        while let Some(next) = level.finer() {
            seen.push(next);
            level = next;
        }
        assert_eq!(
            seen,
            vec![Level::Text, Level::Paragraph, Level::Sentence, Level::Word]
        );
    }
}
