//! File configuration schema

use crate::source::http::DEFAULT_MAX_ARCHIVE_BYTES;
use serde::{Deserialize, Serialize};

/// Top-level configuration document (`chartq.toml`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub source: SourceConfig,
}

/// Settings for chart source resolution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// HTTP fetch timeout in seconds
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,

    /// Upper bound on downloaded archive size in bytes
    #[serde(default = "default_max_archive_bytes")]
    pub max_archive_bytes: u64,

    /// Explicit chart tool binary; `None` probes PATH for `helm`
    #[serde(default)]
    pub helm_binary: Option<String>,
}

fn default_http_timeout_secs() -> u64 {
    30
}

fn default_max_archive_bytes() -> u64 {
    DEFAULT_MAX_ARCHIVE_BYTES
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            http_timeout_secs: default_http_timeout_secs(),
            max_archive_bytes: default_max_archive_bytes(),
            helm_binary: None,
        }
    }
}
