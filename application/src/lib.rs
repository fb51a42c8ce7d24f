//! Application layer for chartq
//!
//! This crate contains the chart processing use case, the port
//! definitions implemented by infrastructure adapters, and the service
//! that pairs the pipeline with a session store. It depends only on the
//! domain layer.

pub mod ports;
pub mod service;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    chart_reader::{ChartReaderPort, ReadError},
    chart_source::{ChartSourcePort, ResolvedChart, SourceError},
};
pub use service::{ChartQuestionsService, ServiceError};
pub use use_cases::process_chart::{ProcessChartError, ProcessChartUseCase, ProcessedChart};
