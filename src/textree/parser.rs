//! Parser facade
//!
//! Normalizes whitespace, runs the decomposition engine from the paragraph level down and holds
//! the resulting root. Each [`Parser::parse`] call replaces the previous tree.

use crate::textree::ast::{Composite, Level};
use crate::textree::config::TextreeConfig;
use crate::textree::decomposition::Decomposer;
use crate::textree::error::Result;
use crate::textree::patterns::PatternLibrary;
use std::borrow::Cow;
use tracing::debug;

/// Collapse runs of spaces and tabs into a single space, using the built-in rule.
///
/// Newlines and punctuation are left untouched, and the function is idempotent.
pub fn prepare_text(raw: &str) -> String {
    PatternLibrary::default_library().normalize(raw)
}

#[derive(Debug, Clone)]
pub struct Parser {
    patterns: Cow<'static, PatternLibrary>,
    parallel: bool,
    tree: Composite,
}

impl Parser {
    /// A parser over the built-in pattern library.
    pub fn new() -> Self {
        Parser {
            patterns: Cow::Borrowed(PatternLibrary::default_library()),
            parallel: false,
            tree: Composite::empty(Level::Text),
        }
    }

    pub fn with_patterns(patterns: PatternLibrary) -> Self {
        Parser {
            patterns: Cow::Owned(patterns),
            ..Self::new()
        }
    }

    /// Compile the configured patterns and engine settings.
    pub fn from_config(config: &TextreeConfig) -> Result<Self> {
        let patterns = PatternLibrary::from_config(&config.patterns)?;
        Ok(Self::with_patterns(patterns).parallel(config.engine.parallel))
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn patterns(&self) -> &PatternLibrary {
        &self.patterns
    }

    /// Normalize with this parser's own rule.
    pub fn prepare_text(&self, raw: &str) -> String {
        self.patterns.normalize(raw)
    }

    /// Build the tree for `raw`, replacing whatever was parsed before.
    pub fn parse(&mut self, raw: &str) {
        self.tree = self.build(raw);
    }

    /// Build a tree for `raw` without touching the held one.
    pub fn build(&self, raw: &str) -> Composite {
        let normalized = self.prepare_text(raw);
        debug!(
            input_len = raw.len(),
            normalized_len = normalized.len(),
            parallel = self.parallel,
            "parsing text"
        );
        let tree = Decomposer::new(&self.patterns)
            .parallel(self.parallel)
            .text(&normalized);
        debug!(paragraphs = tree.composites().count(), "parsed text");
        tree
    }

    /// The current root; an empty text composite until something is parsed.
    pub fn tree(&self) -> &Composite {
        &self.tree
    }

    pub fn into_tree(self) -> Composite {
        self.tree
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}
