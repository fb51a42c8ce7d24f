//! Process Chart use case
//!
//! Orchestrates the full ingestion pipeline: resolve the chart source,
//! load the configuration tree and any existing question document, then
//! synthesize and merge the question set.

use crate::ports::chart_reader::{ChartReaderPort, ReadError};
use crate::ports::chart_source::{ChartSourcePort, SourceError};
use chartq_domain::{ChartReference, ConfigTree, QuestionSet, synthesize_defaults};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while processing a chart.
///
/// Errors propagate unchanged from the failing stage; nothing is retried
/// and no partial result is produced.
#[derive(Error, Debug)]
pub enum ProcessChartError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Read(#[from] ReadError),
}

/// Result of a successful pipeline run
#[derive(Debug, Clone)]
pub struct ProcessedChart {
    pub values: ConfigTree,
    pub questions: QuestionSet,
}

/// Use case for processing one chart reference end to end.
///
/// The resolved chart directory is held for the whole run and dropped on
/// every exit path, which deletes the temporary tree exactly once.
pub struct ProcessChartUseCase<S: ChartSourcePort, R: ChartReaderPort> {
    source: Arc<S>,
    reader: Arc<R>,
}

impl<S: ChartSourcePort, R: ChartReaderPort> ProcessChartUseCase<S, R> {
    pub fn new(source: Arc<S>, reader: Arc<R>) -> Self {
        Self { source, reader }
    }

    pub async fn execute(
        &self,
        reference: &ChartReference,
    ) -> Result<ProcessedChart, ProcessChartError> {
        info!("Processing chart {}", reference);

        let resolved = self.source.resolve(reference).await?;

        let values = self.reader.load_values(resolved.dir()).await?;
        let existing = self.reader.load_questions(resolved.dir()).await?;

        let defaults = synthesize_defaults(&values);
        let questions = match existing {
            Some(existing) => {
                debug!(
                    "Merging {} existing questions with {} defaults",
                    existing.len(),
                    defaults.len()
                );
                QuestionSet::merge(existing, defaults)
            }
            None => {
                debug!("No existing question document, using defaults");
                defaults
            }
        };

        Ok(ProcessedChart { values, questions })
    }
}
