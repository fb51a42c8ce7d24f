//! Configuration value tree

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single value in a chart's configuration document (Value Object)
///
/// Modeled as a tagged variant rather than an untyped document so that
/// recursive traversal and type inference are exhaustive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Sequence(Vec<ConfigValue>),
    Mapping(BTreeMap<String, ConfigValue>),
}

impl ConfigValue {
    pub fn as_mapping(&self) -> Option<&BTreeMap<String, ConfigValue>> {
        match self {
            ConfigValue::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, ConfigValue::Mapping(_))
    }

    /// Question type inferred from this value's runtime kind
    pub fn inferred_type(&self) -> ValueKind {
        match self {
            ConfigValue::Bool(_) => ValueKind::Boolean,
            ConfigValue::Int(_) | ConfigValue::Float(_) => ValueKind::Int,
            _ => ValueKind::String,
        }
    }
}

/// Question type inferred from a configuration value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Boolean,
    Int,
    String,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Boolean => "boolean",
            ValueKind::Int => "int",
            ValueKind::String => "string",
        }
    }
}

/// The parsed top-level configuration document (Entity)
///
/// Read-only after parsing within a single pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigTree(pub BTreeMap<String, ConfigValue>);

impl ConfigTree {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.0.get(key)
    }

    /// Check whether a dotted path exists in the tree.
    ///
    /// A one-segment path is found if the top-level key exists at all,
    /// regardless of the value's type. A multi-segment path requires every
    /// intermediate segment to resolve to a nested mapping; the final
    /// segment only has to exist. The single-segment rule intentionally
    /// ignores the value type for compatibility with existing charts.
    pub fn contains_path(&self, path: &str) -> bool {
        let segments: Vec<&str> = path.split('.').collect();
        match segments.as_slice() {
            [] | [""] => false,
            [key] => self.0.contains_key(*key),
            _ => self.resolve_segments(&segments).is_some(),
        }
    }

    /// Resolve a dotted path to the value at its final segment, if reachable.
    pub fn resolve(&self, path: &str) -> Option<&ConfigValue> {
        let segments: Vec<&str> = path.split('.').collect();
        if segments.is_empty() || segments.iter().any(|s| s.is_empty()) {
            return None;
        }
        self.resolve_segments(&segments)
    }

    fn resolve_segments(&self, segments: &[&str]) -> Option<&ConfigValue> {
        let (last, intermediates) = segments.split_last()?;
        let mut current = &self.0;
        for segment in intermediates {
            current = current.get(*segment)?.as_mapping()?;
        }
        current.get(*last)
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl From<BTreeMap<String, ConfigValue>> for ConfigTree {
    fn from(map: BTreeMap<String, ConfigValue>) -> Self {
        Self(map)
    }
}
