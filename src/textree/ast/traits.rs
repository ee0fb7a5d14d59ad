//! AST traits - Common interfaces for uniform node access
//!
//! [`TextComponent`] is the whole inspection contract: ordered children and the reconstructed
//! value. Nothing outside the crate needs level-specific accessors.

use super::component::{Component, Composite, Symbol};

/// Uniform capability set shared by terminals and composites.
pub trait TextComponent {
    /// Ordered children; empty for terminals.
    fn children(&self) -> &[Component];

    /// Append this node's reconstructed text to `out`.
    fn write_value(&self, out: &mut String);

    /// The reconstructed text of this node.
    fn value(&self) -> String {
        let mut out = String::new();
        self.write_value(&mut out);
        out
    }

    fn node_type(&self) -> &'static str;
}

/// Visitor trait for traversing the tree
///
/// Default implementations are empty, so you only need to override the methods you care about.
pub trait Visitor {
    fn enter_composite(&mut self, _composite: &Composite) {}
    fn exit_composite(&mut self, _composite: &Composite) {}
    fn visit_symbol(&mut self, _symbol: &Symbol) {}
}

#[cfg(test)]
mod tests {
    use super::super::component::{Level, SymbolKind};
    use super::*;

    #[test]
    fn test_visitor_traversal() {
        let word = Composite::new(
            Level::Word,
            vec![
                Symbol::new('o', SymbolKind::Letter).into(),
                Symbol::new('k', SymbolKind::Letter).into(),
            ],
        );
        let sentence = Composite::new(
            Level::Sentence,
            vec![word.into(), Symbol::new('!', SymbolKind::Sign).into()],
        );

        struct CountingVisitor {
            entered: Vec<Level>,
            exited: usize,
            symbols: String,
        }

        impl Visitor for CountingVisitor {
            fn enter_composite(&mut self, composite: &Composite) {
                self.entered.push(composite.level());
            }
            fn exit_composite(&mut self, _: &Composite) {
                self.exited += 1;
            }
            fn visit_symbol(&mut self, symbol: &Symbol) {
                self.symbols.push(symbol.ch());
            }
        }

        let mut visitor = CountingVisitor {
            entered: Vec::new(),
            exited: 0,
            symbols: String::new(),
        };
        sentence.accept(&mut visitor);

        assert_eq!(visitor.entered, vec![Level::Sentence, Level::Word]);
        assert_eq!(visitor.exited, 2);
        assert_eq!(visitor.symbols, "ok!");
    }
}
