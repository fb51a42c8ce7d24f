//! Port definitions implemented by infrastructure adapters

pub mod chart_reader;
pub mod chart_source;

pub use chart_reader::{ChartReaderPort, ReadError};
pub use chart_source::{ChartSourcePort, ResolvedChart, SourceError};
