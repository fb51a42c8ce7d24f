//! Chart source resolution adapters

pub mod http;
pub mod oci;
pub mod resolver;
pub mod synthetic;

pub use http::HttpChartFetcher;
pub use oci::{HelmCliPuller, OciPullStrategy, SyntheticChartWriter};
pub use resolver::ChartSourceResolver;
