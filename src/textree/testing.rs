//! Fluent assertion API for component trees
//!
//! ```rust
//! assert_tree(parser.tree())
//!     .level(Level::Text)
//!     .composite_count(1)
//!     .composite(0, |paragraph| {
//!         paragraph.level(Level::Paragraph).value("asd.");
//!     });
//! ```
//!
//! `composite(i, ..)` indexes composites only, skipping separator terminals, which is what
//! tests almost always mean by "the second sentence".

use crate::textree::ast::{Component, Composite, Level, SymbolKind, TextComponent};

/// Create an assertion builder for a tree
pub fn assert_tree(tree: &Composite) -> CompositeAssertion<'_> {
    CompositeAssertion {
        node: tree,
        context: tree.level().name().to_string(),
    }
}

pub struct CompositeAssertion<'a> {
    node: &'a Composite,
    context: String,
}

impl<'a> CompositeAssertion<'a> {
    pub fn level(self, expected: Level) -> Self {
        assert_eq!(
            self.node.level(),
            expected,
            "{}: Expected level {}, found {}",
            self.context,
            expected,
            self.node.level()
        );
        self
    }

    pub fn value(self, expected: &str) -> Self {
        let actual = self.node.value();
        assert_eq!(
            actual, expected,
            "{}: Expected value {:?}, found {:?}",
            self.context, expected, actual
        );
        self
    }

    /// Count of all children, separators included.
    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.node.children().len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} children, found {}",
            self.context, expected, actual
        );
        self
    }

    /// Count of composite children.
    pub fn composite_count(self, expected: usize) -> Self {
        let actual = self.node.composites().count();
        assert_eq!(
            actual, expected,
            "{}: Expected {} composite children, found {}",
            self.context, expected, actual
        );
        self
    }

    /// Values of composite children, in order.
    pub fn composite_values(self, expected: &[&str]) -> Self {
        let actual: Vec<String> = self.node.composites().map(|c| c.value()).collect();
        assert_eq!(
            actual, expected,
            "{}: Composite children values differ",
            self.context
        );
        self
    }

    /// Run assertions on the `index`-th composite child.
    pub fn composite<F>(self, index: usize, check: F) -> Self
    where
        F: FnOnce(CompositeAssertion<'a>),
    {
        let child = self.node.composites().nth(index).unwrap_or_else(|| {
            panic!(
                "{}: No composite child at index {}",
                self.context, index
            )
        });
        check(CompositeAssertion {
            node: child,
            context: format!("{}:{}[{}]", self.context, child.level(), index),
        });
        self
    }

    /// Assert the exact sequence of terminal children as (character, kind) pairs.
    pub fn symbols(self, expected: &[(char, SymbolKind)]) -> Self {
        let actual: Vec<(char, SymbolKind)> =
            self.node.symbols().map(|s| (s.ch(), s.kind())).collect();
        assert_eq!(
            actual, expected,
            "{}: Terminal children differ",
            self.context
        );
        self
    }

    /// Every child is a terminal of `kind`.
    pub fn all_symbols(self, kind: SymbolKind) -> Self {
        for (i, child) in self.node.children().iter().enumerate() {
            match child {
                Component::Terminal(symbol) => assert_eq!(
                    symbol.kind(),
                    kind,
                    "{}: Child {} is {:?}, expected {:?}",
                    self.context,
                    i,
                    symbol.kind(),
                    kind
                ),
                Component::Composite(c) => panic!(
                    "{}: Child {} is a {}, expected a terminal",
                    self.context,
                    i,
                    c.level()
                ),
            }
        }
        self
    }
}

/// Every composite's value equals the concatenation of its children's values, recursively.
pub fn assert_partitioned(node: &Composite) {
    let joined: String = node.children().iter().map(|c| c.value()).collect();
    assert_eq!(
        joined,
        node.value(),
        "{}: children do not partition the value",
        node.level()
    );
    for child in node.composites() {
        assert_partitioned(child);
    }
}

/// Every word holds either only signs or no signs at all.
pub fn assert_words_homogeneous(node: &Composite) {
    if node.level() == Level::Word {
        let signs = node
            .symbols()
            .filter(|s| s.kind() == SymbolKind::Sign)
            .count();
        assert!(
            signs == 0 || signs == node.children().len(),
            "Word {:?} mixes signs and other symbols",
            node.value()
        );
        return;
    }
    for child in node.composites() {
        assert_words_homogeneous(child);
    }
}
