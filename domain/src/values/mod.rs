//! Configuration value tree parsed from a chart's values document

pub mod tree;

pub use tree::{ConfigTree, ConfigValue, ValueKind};
