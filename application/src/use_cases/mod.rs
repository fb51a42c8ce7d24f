//! Application use cases

pub mod process_chart;

pub use process_chart::{ProcessChartError, ProcessChartUseCase, ProcessedChart};
