//! Chart source port.
//!
//! Defines the interface for turning a chart reference into a local
//! directory of chart contents. Infrastructure adapters implement this for
//! HTTP archives and OCI references (helm CLI or synthetic fallback).

use async_trait::async_trait;
use chartq_domain::{ChartReference, ReferenceError};
use std::any::Any;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while resolving a chart source.
///
/// Display messages are surfaced to callers, so they carry no local
/// filesystem paths or credentials.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("invalid chart reference: {0}")]
    InvalidReference(#[from] ReferenceError),

    #[error("failed to fetch chart: {0}")]
    Fetch(String),

    #[error("failed to extract chart archive: {0}")]
    Extract(String),
}

/// A resolved chart directory together with its cleanup guard.
///
/// The guard is an owned droppable (typically a temp-dir handle) whose
/// drop deletes the resolved tree. The orchestrator holds the
/// `ResolvedChart` for the whole pipeline run, so cleanup happens exactly
/// once on every exit path.
pub struct ResolvedChart {
    dir: PathBuf,
    _cleanup: Option<Box<dyn Any + Send>>,
}

impl ResolvedChart {
    pub fn new(dir: PathBuf, cleanup: impl Any + Send) -> Self {
        Self {
            dir,
            _cleanup: Some(Box::new(cleanup)),
        }
    }

    /// A resolved directory that outlives the pipeline run (tests, or
    /// caller-managed directories).
    pub fn unmanaged(dir: PathBuf) -> Self {
        Self {
            dir,
            _cleanup: None,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl std::fmt::Debug for ResolvedChart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedChart")
            .field("dir", &self.dir)
            .field("managed", &self._cleanup.is_some())
            .finish()
    }
}

/// Port for resolving a chart reference to a local directory.
#[async_trait]
pub trait ChartSourcePort: Send + Sync {
    async fn resolve(&self, reference: &ChartReference) -> Result<ResolvedChart, SourceError>;
}
