//! In-memory session store.
//!
//! A keyed map behind a reader/writer lock: concurrent reads proceed in
//! parallel, writes are exclusive. Constructed explicitly and injected
//! into the application service rather than reached as ambient state.

use async_trait::async_trait;
use chartq_domain::{ConfigTree, QuestionSet, Session, SessionError, SessionStore};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(
        &self,
        chart_reference: &str,
        values: ConfigTree,
        questions: QuestionSet,
    ) -> Session {
        let session = Session::new(
            Uuid::new_v4().to_string(),
            chart_reference,
            values,
            questions,
        );
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id.clone(), session.clone());
        session
    }

    async fn get(&self, id: &str) -> Result<Session, SessionError> {
        let sessions = self.sessions.read().await;
        sessions.get(id).cloned().ok_or(SessionError::NotFound)
    }

    async fn update_questions(
        &self,
        id: &str,
        questions: QuestionSet,
    ) -> Result<(), SessionError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(id).ok_or(SessionError::NotFound)?;
        session.set_questions(questions);
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), SessionError> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(id).map(|_| ()).ok_or(SessionError::NotFound)
    }
}
