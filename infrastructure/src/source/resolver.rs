//! Chart source resolver adapter.
//!
//! Implements the `ChartSourcePort`: HTTP references are downloaded and
//! extracted, OCI references go through the pull strategy selected at
//! construction time (helm CLI when installed, synthetic fallback
//! otherwise).

use super::http::HttpChartFetcher;
use super::oci::{HelmCliPuller, OciPullStrategy, SyntheticChartWriter};
use crate::archive::extract_tar_gz;
use crate::config::SourceConfig;
use async_trait::async_trait;
use chartq_application::ports::chart_source::{ChartSourcePort, ResolvedChart, SourceError};
use chartq_domain::ChartReference;
use std::time::Duration;
use tempfile::TempDir;
use tracing::debug;

pub struct ChartSourceResolver {
    http: HttpChartFetcher,
    oci: Box<dyn OciPullStrategy>,
}

impl ChartSourceResolver {
    /// Build a resolver from configuration, probing for the chart tool
    /// exactly once.
    pub fn from_config(config: &SourceConfig) -> Result<Self, SourceError> {
        let http = HttpChartFetcher::new(
            Duration::from_secs(config.http_timeout_secs),
            config.max_archive_bytes,
        )?;
        let oci: Box<dyn OciPullStrategy> =
            match HelmCliPuller::detect(config.helm_binary.as_deref()) {
                Some(puller) => Box::new(puller),
                None => Box::new(SyntheticChartWriter),
            };
        Ok(Self { http, oci })
    }

    /// Build a resolver with an explicit OCI strategy (tests, embedding).
    pub fn with_strategy(http: HttpChartFetcher, oci: Box<dyn OciPullStrategy>) -> Self {
        Self { http, oci }
    }
}

#[async_trait]
impl ChartSourcePort for ChartSourceResolver {
    async fn resolve(&self, reference: &ChartReference) -> Result<ResolvedChart, SourceError> {
        match reference {
            ChartReference::Http(url) => {
                let archive = self.http.download(url).await?;
                let dest = TempDir::new().map_err(|e| {
                    SourceError::Fetch(format!("could not allocate workspace: {e}"))
                })?;

                extract_tar_gz(archive.path(), dest.path())
                    .map_err(|e| SourceError::Extract(e.to_string()))?;
                debug!("Extracted chart archive");

                // `archive` drops here, deleting the staged download.
                let dir = dest.path().to_path_buf();
                Ok(ResolvedChart::new(dir, dest))
            }
            ChartReference::Oci { reference, name } => self.oci.pull(reference, name).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::http::DEFAULT_MAX_ARCHIVE_BYTES;

    fn resolver() -> ChartSourceResolver {
        let http =
            HttpChartFetcher::new(Duration::from_secs(5), DEFAULT_MAX_ARCHIVE_BYTES).unwrap();
        ChartSourceResolver::with_strategy(http, Box::new(SyntheticChartWriter))
    }

    #[tokio::test]
    async fn test_oci_reference_uses_synthetic_strategy() {
        let reference: ChartReference = "oci://host/charts/x:1.0.0".parse().unwrap();
        let resolved = resolver().resolve(&reference).await.unwrap();
        assert!(resolved.dir().join("values.yaml").exists());
    }
}
