//! Ordered question set and merge semantics

use super::question::{Question, QuestionError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An ordered set of questions, order = display order.
///
/// Serializes as the `questions:` document used by chart installer UIs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionSet {
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn contains_variable(&self, variable: &str) -> bool {
        self.questions.iter().any(|q| q.variable == variable)
    }

    /// Left-biased union keyed by `variable`.
    ///
    /// Existing entries are kept verbatim and first, in their original
    /// order. Defaults whose variable is not already present are appended
    /// in synthesis order. No existing entry is ever mutated or removed,
    /// which makes the operation idempotent.
    pub fn merge(existing: QuestionSet, defaults: QuestionSet) -> QuestionSet {
        let seen: HashSet<String> = existing
            .questions
            .iter()
            .map(|q| q.variable.clone())
            .collect();

        let mut merged = existing.questions;
        for default in defaults.questions {
            if !seen.contains(&default.variable) {
                merged.push(default);
            }
        }

        QuestionSet { questions: merged }
    }

    /// Validate every question in the set, including subquestions.
    pub fn validate(&self) -> Result<(), QuestionError> {
        for question in &self.questions {
            question.validate()?;
        }
        Ok(())
    }
}
