//! Document loading utilities
//!
//! `DocumentLoader` reads source text from a file or takes it from a string and hands it to a
//! [`Parser`]. Reading is the only fallible step; parsing never fails.
//!
//! # Example
//!
//! ```rust
//! use textree::textree::loader::DocumentLoader;
//!
//! let tree = DocumentLoader::from_path("notes.txt")?.parse();
//! let tree = DocumentLoader::from_string("Hello world.").parse();
//! ```

use crate::textree::ast::Composite;
use crate::textree::error::{Result, TextreeError};
use crate::textree::parser::Parser;
use std::fs;
use std::path::Path;
use tracing::debug;

pub struct DocumentLoader {
    source: String,
}

impl DocumentLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| TextreeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = source.len(), "loaded source");
        Ok(DocumentLoader { source })
    }

    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Parse with the built-in rules.
    pub fn parse(&self) -> Composite {
        self.parse_with(&Parser::new())
    }

    /// Parse with a configured parser. The parser's held tree is left untouched.
    pub fn parse_with(&self, parser: &Parser) -> Composite {
        parser.build(&self.source)
    }
}
