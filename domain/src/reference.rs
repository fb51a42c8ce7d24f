//! Chart reference value object
//!
//! A chart reference is either an HTTP(S) URL pointing at a packaged
//! archive, or an OCI-style address (`oci://host/path[:version]`).
//! Malformed references are rejected here, before any I/O happens.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while parsing a chart reference.
///
/// Messages never echo the raw input, which may carry embedded
/// credentials.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("chart reference must not be empty")]
    Empty,

    #[error("chart reference has an unsupported scheme (expected http, https or oci)")]
    UnsupportedScheme,

    #[error("oci reference is missing a chart path")]
    MissingChartName,
}

/// A validated chart reference (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartReference {
    /// Direct HTTP(S) URL to a .tgz-style archive
    Http(String),
    /// OCI-style address with the derived canonical chart name
    Oci { reference: String, name: String },
}

impl ChartReference {
    /// The reference string as supplied by the caller.
    pub fn as_str(&self) -> &str {
        match self {
            ChartReference::Http(url) => url,
            ChartReference::Oci { reference, .. } => reference,
        }
    }

    /// Canonical chart name for OCI references: the last path segment with
    /// any `:version` suffix stripped.
    fn oci_chart_name(reference: &str) -> Result<String, ReferenceError> {
        let path = reference.trim_start_matches("oci://");
        let last = path
            .split('/')
            .next_back()
            .filter(|s| !s.is_empty())
            .ok_or(ReferenceError::MissingChartName)?;
        let name = last.split(':').next().unwrap_or(last);
        if name.is_empty() {
            return Err(ReferenceError::MissingChartName);
        }
        Ok(name.to_string())
    }
}

impl FromStr for ChartReference {
    type Err = ReferenceError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ReferenceError::Empty);
        }

        if input.starts_with("http://") || input.starts_with("https://") {
            Ok(ChartReference::Http(input.to_string()))
        } else if input.starts_with("oci://") {
            let name = Self::oci_chart_name(input)?;
            Ok(ChartReference::Oci {
                reference: input.to_string(),
                name,
            })
        } else {
            Err(ReferenceError::UnsupportedScheme)
        }
    }
}

impl fmt::Display for ChartReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
