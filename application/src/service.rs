//! Chart questions service
//!
//! Composes the processing pipeline with an injected session store. This
//! is the surface an HTTP layer (or the CLI) calls: process a reference
//! into a stored session, then read, update, or delete that session.

use crate::ports::chart_reader::ChartReaderPort;
use crate::ports::chart_source::ChartSourcePort;
use crate::use_cases::process_chart::{ProcessChartError, ProcessChartUseCase};
use chartq_domain::{
    ChartReference, QuestionError, QuestionSet, ReferenceError, Session, SessionError,
    SessionStore,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("invalid chart reference: {0}")]
    InvalidReference(#[from] ReferenceError),

    #[error(transparent)]
    Process(#[from] ProcessChartError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("invalid question set: {0}")]
    Validation(#[from] QuestionError),
}

pub struct ChartQuestionsService<S: ChartSourcePort, R: ChartReaderPort> {
    use_case: ProcessChartUseCase<S, R>,
    sessions: Arc<dyn SessionStore>,
}

impl<S: ChartSourcePort, R: ChartReaderPort> ChartQuestionsService<S, R> {
    pub fn new(source: Arc<S>, reader: Arc<R>, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            use_case: ProcessChartUseCase::new(source, reader),
            sessions,
        }
    }

    /// Process a chart reference and record the result as a new session.
    pub async fn process(&self, reference: &str) -> Result<Session, ServiceError> {
        let reference: ChartReference = reference.parse()?;
        let processed = self.use_case.execute(&reference).await?;

        let session = self
            .sessions
            .create(reference.as_str(), processed.values, processed.questions)
            .await;
        info!("Created session {}", session.id);
        Ok(session)
    }

    pub async fn get(&self, session_id: &str) -> Result<Session, ServiceError> {
        Ok(self.sessions.get(session_id).await?)
    }

    /// Replace a session's question set after structural validation.
    pub async fn update_questions(
        &self,
        session_id: &str,
        questions: QuestionSet,
    ) -> Result<(), ServiceError> {
        questions.validate()?;
        self.sessions.update_questions(session_id, questions).await?;
        Ok(())
    }

    pub async fn delete(&self, session_id: &str) -> Result<(), ServiceError> {
        Ok(self.sessions.delete(session_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::chart_reader::ReadError;
    use crate::ports::chart_source::{ResolvedChart, SourceError};
    use async_trait::async_trait;
    use chartq_domain::{ConfigTree, Question};
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, Ordering};
    use tokio::sync::Mutex;

    struct StubSource;

    #[async_trait]
    impl ChartSourcePort for StubSource {
        async fn resolve(
            &self,
            _reference: &ChartReference,
        ) -> Result<ResolvedChart, SourceError> {
            Ok(ResolvedChart::unmanaged(PathBuf::from("chart")))
        }
    }

    struct StubReader;

    #[async_trait]
    impl crate::ports::chart_reader::ChartReaderPort for StubReader {
        async fn load_values(&self, _dir: &Path) -> Result<ConfigTree, ReadError> {
            Ok(ConfigTree::new())
        }

        async fn load_questions(&self, _dir: &Path) -> Result<Option<QuestionSet>, ReadError> {
            Ok(None)
        }
    }

    #[derive(Default)]
    struct MapStore {
        sessions: Mutex<HashMap<String, Session>>,
        counter: AtomicU64,
    }

    #[async_trait]
    impl SessionStore for MapStore {
        async fn create(
            &self,
            chart_reference: &str,
            values: ConfigTree,
            questions: QuestionSet,
        ) -> Session {
            let id = format!("session-{}", self.counter.fetch_add(1, Ordering::SeqCst));
            let session = Session::new(id.clone(), chart_reference, values, questions);
            self.sessions.lock().await.insert(id, session.clone());
            session
        }

        async fn get(&self, id: &str) -> Result<Session, SessionError> {
            self.sessions
                .lock()
                .await
                .get(id)
                .cloned()
                .ok_or(SessionError::NotFound)
        }

        async fn update_questions(
            &self,
            id: &str,
            questions: QuestionSet,
        ) -> Result<(), SessionError> {
            let mut sessions = self.sessions.lock().await;
            let session = sessions.get_mut(id).ok_or(SessionError::NotFound)?;
            session.set_questions(questions);
            Ok(())
        }

        async fn delete(&self, id: &str) -> Result<(), SessionError> {
            self.sessions
                .lock()
                .await
                .remove(id)
                .map(|_| ())
                .ok_or(SessionError::NotFound)
        }
    }

    fn service() -> ChartQuestionsService<StubSource, StubReader> {
        ChartQuestionsService::new(
            Arc::new(StubSource),
            Arc::new(StubReader),
            Arc::new(MapStore::default()),
        )
    }

    #[tokio::test]
    async fn test_process_creates_session_with_defaults() {
        let service = service();
        let session = service.process("https://charts.example.com/app.tgz").await.unwrap();
        assert_eq!(session.questions.len(), 2);
        assert!(service.get(&session.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_reference_fails_before_resolution() {
        let err = service().process("not-a-reference").await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidReference(_)));
    }

    #[tokio::test]
    async fn test_update_rejects_malformed_show_if() {
        let service = service();
        let session = service.process("https://charts.example.com/app.tgz").await.unwrap();

        let broken = QuestionSet::new(vec![
            Question::new("gpu.count", "GPU Count").with_show_if("gpu.enabled"),
        ]);
        let err = service.update_questions(&session.id, broken).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_unknown_session_is_not_found() {
        let err = service().delete("missing").await.unwrap_err();
        assert!(matches!(err, ServiceError::Session(SessionError::NotFound)));
    }
}
