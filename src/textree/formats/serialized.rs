//! Data formats (JSON and YAML) built from the tree snapshot

use super::registry::Formatter;
use crate::textree::ast::{snapshot_from_composite, Composite};
use crate::textree::error::Result;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, tree: &Composite) -> Result<String> {
        Ok(serde_json::to_string_pretty(&snapshot_from_composite(tree))?)
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON snapshot of the tree"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, tree: &Composite) -> Result<String> {
        Ok(serde_yaml::to_string(&snapshot_from_composite(tree))?)
    }

    fn description(&self) -> &str {
        "YAML snapshot of the tree"
    }
}
