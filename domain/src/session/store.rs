//! Session store trait
//!
//! Domain-level abstraction over session persistence. The in-memory
//! implementation lives in the infrastructure layer and is injected into
//! the application service rather than reached as ambient state.

use super::entities::Session;
use crate::questions::QuestionSet;
use crate::values::ConfigTree;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("session not found")]
    NotFound,
}

/// Keyed store of processing sessions.
///
/// Concurrent reads may proceed in parallel; a write excludes all other
/// access. Every mutation refreshes the session's `updated_at` timestamp.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Create a session for a processed chart and return it (with a fresh id).
    async fn create(
        &self,
        chart_reference: &str,
        values: ConfigTree,
        questions: QuestionSet,
    ) -> Session;

    /// Fetch a session by id.
    async fn get(&self, id: &str) -> Result<Session, SessionError>;

    /// Replace a session's question set.
    async fn update_questions(&self, id: &str, questions: QuestionSet)
        -> Result<(), SessionError>;

    /// Explicitly delete a session.
    async fn delete(&self, id: &str) -> Result<(), SessionError>;
}
