//! Output formats for finished trees

pub mod registry;
pub mod serialized;
pub mod tag;
pub mod treeviz;

pub use registry::{FormatRegistry, Formatter};
pub use serialized::{JsonFormatter, YamlFormatter};
pub use tag::TagFormatter;
pub use treeviz::TreevizFormatter;
