//! Tree Snapshot - a normalized intermediate representation of the component tree
//!
//! Serializers consume a [`TreeSnapshot`] rather than walking components themselves, so each
//! format only deals with presentation.

use super::component::{Component, Composite, Symbol};
use super::traits::TextComponent;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A snapshot of a tree node in a normalized, serializable form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeSnapshot {
    /// The type of node ("Text", "Paragraph", "Sentence", "Word", "Symbol")
    pub node_type: String,

    /// The reconstructed value of the node
    pub label: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeSnapshot>,
}

impl TreeSnapshot {
    pub fn new(node_type: String, label: String) -> Self {
        Self {
            node_type,
            label,
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: &str, value: String) -> Self {
        self.attributes.insert(key.to_string(), value);
        self
    }

    pub fn with_children(mut self, children: Vec<TreeSnapshot>) -> Self {
        self.children.extend(children);
        self
    }
}

/// Build a snapshot of a composite and all of its descendants
pub fn snapshot_from_composite(composite: &Composite) -> TreeSnapshot {
    let children = composite
        .children()
        .iter()
        .map(snapshot_from_component)
        .collect();
    TreeSnapshot::new(composite.node_type().to_string(), composite.value())
        .with_attribute("children", composite.children().len().to_string())
        .with_children(children)
}

pub fn snapshot_from_symbol(symbol: &Symbol) -> TreeSnapshot {
    TreeSnapshot::new(symbol.node_type().to_string(), symbol.value())
        .with_attribute("kind", symbol.kind().name().to_string())
}

pub fn snapshot_from_component(component: &Component) -> TreeSnapshot {
    match component {
        Component::Terminal(symbol) => snapshot_from_symbol(symbol),
        Component::Composite(composite) => snapshot_from_composite(composite),
    }
}
