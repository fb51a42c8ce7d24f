//! Chart reader port.
//!
//! Loads the configuration tree and the optional existing question
//! document from a resolved chart directory.

use async_trait::async_trait;
use chartq_domain::{ConfigTree, QuestionSet};
use std::path::Path;
use thiserror::Error;

/// Errors raised while reading chart documents.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("chart configuration is not well-formed: {0}")]
    Parse(String),

    #[error("failed to read chart contents: {0}")]
    Io(String),
}

/// Port for loading chart documents from a resolved directory.
#[async_trait]
pub trait ChartReaderPort: Send + Sync {
    /// Load the configuration tree. A missing values document yields an
    /// empty tree, never an error.
    async fn load_values(&self, dir: &Path) -> Result<ConfigTree, ReadError>;

    /// Load the existing question document, if one exists. Absence is the
    /// normal `Ok(None)` case; malformed content is a `Parse` error.
    async fn load_questions(&self, dir: &Path) -> Result<Option<QuestionSet>, ReadError>;
}
