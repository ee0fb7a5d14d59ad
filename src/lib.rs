//! # textree
//!
//! Decomposes plain text into a strict tree: text → paragraphs → sentences → words → symbols.
//!
//! File Layout
//!
//! src/textree
//!   ├── ast             The component tree (terminals and composites) and its snapshot form
//!   ├── patterns        The rule library that defines every split
//!   ├── classifier      Character → terminal symbol
//!   ├── decomposition   The one recursive engine, parametrized by rule and builder
//!   ├── parser          Normalization + the facade that holds the current tree
//!   ├── loader          Reading sources from disk or memory
//!   ├── config          Layered configuration over embedded defaults
//!   ├── formats         Serializers (treeviz, tag, json, yaml)
//!   └── testing         Fluent assertions used by the test suite
//!
//! Callers inspect results only through [`TextComponent`](textree::ast::TextComponent):
//! `children()` and `value()`.

pub mod textree;
