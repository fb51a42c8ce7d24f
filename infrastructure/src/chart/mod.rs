//! Chart document loading

pub mod reader;

pub use reader::YamlChartReader;
