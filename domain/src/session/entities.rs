//! Session domain entity

use crate::questions::QuestionSet;
use crate::values::ConfigTree;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pairs a chart reference with one configuration tree and one question
/// set (Entity). Owned exclusively by the session store; mutated only
/// through question-set updates and deleted only explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub chart_reference: String,
    pub values: ConfigTree,
    pub questions: QuestionSet,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    pub fn new(
        id: impl Into<String>,
        chart_reference: impl Into<String>,
        values: ConfigTree,
        questions: QuestionSet,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            chart_reference: chart_reference.into(),
            values,
            questions,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the question set and refresh the modification timestamp.
    pub fn set_questions(&mut self, questions: QuestionSet) {
        self.questions = questions;
        self.updated_at = Utc::now();
    }
}
