//! The component tree
//!
//! Text → {Paragraph}* → {Sentence}* → {Word}* → {Symbol}*
//!
//! Every level shares the [`TextComponent`] capabilities. Separator characters (the whitespace
//! between words, sentences and paragraphs) are kept as `Space` terminals next to the composites
//! they separate, so a node's value is always the exact text it was built from.

pub mod component;
pub mod snapshot;
pub mod traits;

pub use component::{Component, Composite, Level, Symbol, SymbolKind};
pub use snapshot::{snapshot_from_component, snapshot_from_composite, TreeSnapshot};
pub use traits::{TextComponent, Visitor};
