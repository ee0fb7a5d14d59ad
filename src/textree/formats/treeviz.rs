//! Treeviz formatter
//!
//! One line per node, nesting drawn with box characters, so a tree can be scanned at a glance.
//!
//! <prefix><connector> <icon> <label>
//!
//! Icons:
//!     Text: ⧉
//!     Paragraph: ¶
//!     Sentence: ↵
//!     Word: ◦
//!     Symbol: ·
//!
//! Composite labels are the node's value (newlines and tabs escaped, truncated to 30
//! characters). Symbol labels are the quoted character.

use super::registry::Formatter;
use crate::textree::ast::{snapshot_from_composite, Composite, TreeSnapshot};
use crate::textree::error::Result;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Text" => "⧉",
        "Paragraph" => "¶",
        "Sentence" => "↵",
        "Word" => "◦",
        "Symbol" => "·",
        _ => "○",
    }
}

fn display_label(snapshot: &TreeSnapshot) -> String {
    if snapshot.node_type == "Symbol" {
        return snapshot
            .label
            .chars()
            .next()
            .map(|ch| format!("{ch:?}"))
            .unwrap_or_default();
    }
    let escaped = snapshot.label.replace('\n', "\\n").replace('\t', "\\t");
    truncate(&escaped, 30)
}

fn format_snapshot(
    snapshot: &TreeSnapshot,
    prefix: &str,
    child_index: usize,
    child_count: usize,
) -> String {
    let mut output = String::new();

    let is_last = child_index == child_count - 1;
    let connector = if is_last { "└─" } else { "├─" };

    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        get_icon(&snapshot.node_type),
        display_label(snapshot)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let child_count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        output.push_str(&format_snapshot(child, &child_prefix, i, child_count));
    }

    output
}

pub fn to_treeviz_str(tree: &Composite) -> String {
    let snapshot = snapshot_from_composite(tree);
    let mut output = format!(
        "{} {}\n",
        get_icon(&snapshot.node_type),
        display_label(&snapshot)
    );

    let child_count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        output.push_str(&format_snapshot(child, "", i, child_count));
    }

    output
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, tree: &Composite) -> Result<String> {
        Ok(to_treeviz_str(tree))
    }

    fn description(&self) -> &str {
        "Visual tree representation with indentation and Unicode icons"
    }
}
