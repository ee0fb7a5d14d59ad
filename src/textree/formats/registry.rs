//! Format registry for tree serialization
//!
//! Each format implements the `Formatter` trait and can be registered with `FormatRegistry`.

use crate::textree::ast::Composite;
use crate::textree::error::{Result, TextreeError};
use std::collections::HashMap;

/// Trait for tree formatters
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "treeviz", "tag")
    fn name(&self) -> &str;

    /// Serialize a tree to this format
    fn serialize(&self, tree: &Composite) -> Result<String>;

    fn description(&self) -> &str {
        ""
    }
}

/// Registry of tree formatters, looked up by name.
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize a tree using the specified format
    pub fn serialize(&self, tree: &Composite, format: &str) -> Result<String> {
        let formatter = self
            .get(format)
            .ok_or_else(|| TextreeError::FormatNotFound(format.to_string()))?;
        formatter.serialize(tree)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in formatters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(super::TreevizFormatter);
        registry.register(super::TagFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
