//! XML-like tag serialization
//!
//! Composites become nested tags named after their level; symbols become one-line tags named
//! after their kind.
//!
//! ```text
//! <text>
//!   <paragraph>
//!     <sentence>
//!       <word>
//!         <letter>o</letter>
//!         <letter>k</letter>
//!       </word>
//!     </sentence>
//!   </paragraph>
//! </text>
//! ```

use super::registry::Formatter;
use crate::textree::ast::{Composite, Symbol, Visitor};
use crate::textree::error::Result;

struct TagSerializer {
    output: String,
    indent_level: usize,
}

impl TagSerializer {
    fn push_indent(&mut self, s: &str) {
        self.output.push_str(&"  ".repeat(self.indent_level));
        self.output.push_str(s);
    }
}

fn tag_name(composite: &Composite) -> String {
    composite.level().name().to_lowercase()
}

impl Visitor for TagSerializer {
    fn enter_composite(&mut self, composite: &Composite) {
        let tag = tag_name(composite);
        if composite.is_empty() {
            self.push_indent(&format!("<{tag}/>\n"));
        } else {
            self.push_indent(&format!("<{tag}>\n"));
        }
        self.indent_level += 1;
    }

    fn exit_composite(&mut self, composite: &Composite) {
        self.indent_level -= 1;
        if !composite.is_empty() {
            self.push_indent(&format!("</{}>\n", tag_name(composite)));
        }
    }

    fn visit_symbol(&mut self, symbol: &Symbol) {
        let tag = symbol.kind().name();
        let text = escape_xml(&symbol.ch().to_string());
        self.push_indent(&format!("<{tag}>{text}</{tag}>\n"));
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
        .replace('\n', "&#10;")
}

pub fn serialize_tree(tree: &Composite) -> String {
    let mut serializer = TagSerializer {
        output: String::new(),
        indent_level: 0,
    };
    tree.accept(&mut serializer);
    serializer.output
}

pub struct TagFormatter;

impl Formatter for TagFormatter {
    fn name(&self) -> &str {
        "tag"
    }

    fn serialize(&self, tree: &Composite) -> Result<String> {
        Ok(serialize_tree(tree))
    }

    fn description(&self) -> &str {
        "XML-like nested tags, one per node"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::textree::ast::Level;
    use crate::textree::parser::Parser;

    #[test]
    fn test_empty_tree() {
        assert_eq!(serialize_tree(&Composite::empty(Level::Text)), "<text/>\n");
    }

    #[test]
    fn test_sign_word() {
        let tree = Parser::new().build("<&>");
        let output = serialize_tree(&tree);
        assert!(output.contains("<sign>&lt;</sign>"));
        assert!(output.contains("<sign>&amp;</sign>"));
        assert!(output.starts_with("<text>\n  <paragraph>\n    <sentence>\n      <word>\n"));
        assert!(output.ends_with("</text>\n"));
    }

    #[test]
    fn test_separators_are_space_tags() {
        let tree = Parser::new().build("a b");
        assert!(serialize_tree(&tree).contains("<space> </space>"));
    }
}
