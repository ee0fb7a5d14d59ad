//! Decomposition Engine
//!
//! One recursive operation builds every level: apply a rule to the text, and turn each match
//! into a child with the builder for the next finer level. Paragraph, sentence and word only
//! differ in which rule and builder are passed in.
//!
//! Separators (text between matches) are kept as classified terminals at the text, paragraph and
//! sentence levels, so a composite's value is always the exact text it was built from. Inside a
//! word they are dropped: a word is exactly the symbols its branch rule matched.

use crate::textree::ast::{Component, Composite, Level};
use crate::textree::classifier::{classify, symbol_of};
use crate::textree::patterns::{PatternLibrary, Rule, RuleKind, Span};
use rayon::prelude::*;
use tracing::instrument;

/// What to do with the text between two matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separators {
    /// Emit one classified terminal per separator character, in place
    Keep,
    /// Discard it
    Drop,
}

fn separator_symbols(gap: &str, separators: Separators, out: &mut Vec<Component>) {
    if separators == Separators::Keep {
        out.extend(gap.chars().map(classify));
    }
}

/// Apply `rule` to `text` and build one child per match, in match order.
///
/// Zero matches is not an error: the result is simply empty (or only separators).
pub fn decompose<F>(text: &str, rule: &Rule, separators: Separators, mut build: F) -> Vec<Component>
where
    F: FnMut(&str) -> Option<Component>,
{
    let mut children = Vec::new();
    for span in rule.spans(text) {
        match span {
            Span::Match(piece) => children.extend(build(piece)),
            Span::Gap(gap) => separator_symbols(gap, separators, &mut children),
        }
    }
    children
}

/// Same contract as [`decompose`], with the matches built concurrently.
///
/// Matches are independent of each other, so the joined result equals the sequential one.
pub fn decompose_par<F>(text: &str, rule: &Rule, separators: Separators, build: F) -> Vec<Component>
where
    F: Fn(&str) -> Option<Component> + Sync + Send,
{
    let spans: Vec<Span> = rule.spans(text).collect();
    let built: Vec<Vec<Component>> = spans
        .par_iter()
        .map(|span| {
            let mut out = Vec::new();
            match span {
                Span::Match(piece) => out.extend(build(piece)),
                Span::Gap(gap) => separator_symbols(gap, separators, &mut out),
            }
            out
        })
        .collect();
    built.into_iter().flatten().collect()
}

/// Wires the pattern library into the level-by-level recursion.
#[derive(Debug, Clone, Copy)]
pub struct Decomposer<'p> {
    patterns: &'p PatternLibrary,
    parallel: bool,
}

impl<'p> Decomposer<'p> {
    pub fn new(patterns: &'p PatternLibrary) -> Self {
        Decomposer {
            patterns,
            parallel: false,
        }
    }

    /// Fan out paragraphs across the rayon pool.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Build the whole tree for already normalized text.
    pub fn text(&self, normalized: &str) -> Composite {
        self.build(Level::Text, normalized)
    }

    /// Build the composite for `text` at `level`, recursing down to symbols.
    #[instrument(level = "trace", skip(self, text), fields(len = text.len()))]
    pub fn build(&self, level: Level, text: &str) -> Composite {
        let children = match level.finer() {
            Some(finer) => {
                let rule = self.patterns.rule(split_rule(level));
                let child = |piece: &str| Some(Component::from(self.build(finer, piece)));
                if self.parallel && level == Level::Text {
                    decompose_par(text, rule, Separators::Keep, child)
                } else {
                    decompose(text, rule, Separators::Keep, child)
                }
            }
            None => decompose(text, self.word_branch(text), Separators::Drop, symbol_of),
        };
        Composite::new(level, children)
    }

    /// A token containing any sign is built entirely from sign matches, otherwise from letter
    /// matches.
    fn word_branch(&self, token: &str) -> &'p Rule {
        let sign = self.patterns.rule(RuleKind::Sign);
        if sign.matches_any(token) {
            sign
        } else {
            self.patterns.rule(RuleKind::Letter)
        }
    }
}

/// The rule that splits a composite level into its children.
fn split_rule(level: Level) -> RuleKind {
    match level {
        Level::Text => RuleKind::Paragraph,
        Level::Paragraph => RuleKind::Sentence,
        Level::Sentence => RuleKind::Word,
        Level::Word => RuleKind::Letter,
    }
}
