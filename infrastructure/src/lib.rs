//! Infrastructure layer for chartq
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: archive extraction, chart source resolution (HTTP
//! and OCI), YAML document reading, the in-memory session store, and
//! configuration file loading.

pub mod archive;
pub mod chart;
pub mod config;
pub mod session;
pub mod source;

// Re-export commonly used types
pub use archive::{ExtractError, extract_tar_gz};
pub use chart::YamlChartReader;
pub use config::{ConfigLoader, FileConfig, SourceConfig};
pub use session::InMemorySessionStore;
pub use source::{ChartSourceResolver, HelmCliPuller, HttpChartFetcher, SyntheticChartWriter};

#[cfg(test)]
mod pipeline_tests {
    use crate::source::http::DEFAULT_MAX_ARCHIVE_BYTES;

    use super::*;
    use chartq_application::ports::chart_source::SourceError;
    use chartq_application::use_cases::process_chart::{ProcessChartError, ProcessChartUseCase};
    use chartq_domain::ChartReference;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn resolver() -> ChartSourceResolver {
        let http =
            HttpChartFetcher::new(Duration::from_secs(5), DEFAULT_MAX_ARCHIVE_BYTES).unwrap();
        ChartSourceResolver::with_strategy(http, Box::new(SyntheticChartWriter))
    }

    fn use_case() -> ProcessChartUseCase<ChartSourceResolver, YamlChartReader> {
        ProcessChartUseCase::new(Arc::new(resolver()), Arc::new(YamlChartReader::new()))
    }

    /// Serve exactly one HTTP response on a local port.
    async fn serve_once(status_line: &'static str, body: Vec<u8>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let header = format!(
                "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            socket.write_all(header.as_bytes()).await.unwrap();
            socket.write_all(&body).await.unwrap();
        });

        format!("http://{addr}")
    }

    fn chart_archive() -> Vec<u8> {
        let encoder = GzEncoder::new(Vec::new(), Compression::default());
        let mut builder = tar::Builder::new(encoder);
        let values = "service:\n  type: LoadBalancer\npersistence:\n  storageClass: \"\"\n";
        let mut header = tar::Header::new_gnu();
        header.set_size(values.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder
            .append_data(&mut header, "app/values.yaml", values.as_bytes())
            .unwrap();
        builder.into_inner().unwrap().finish().unwrap()
    }

    #[tokio::test]
    async fn test_http_chart_end_to_end() {
        let base = serve_once("200 OK", chart_archive()).await;
        let reference: ChartReference = format!("{base}/app-1.0.0.tgz").parse().unwrap();

        let result = use_case().execute(&reference).await.unwrap();
        let variables: Vec<_> = result
            .questions
            .questions
            .iter()
            .map(|q| q.variable.as_str())
            .collect();
        assert_eq!(
            variables,
            ["name", "namespace", "service.type", "persistence.storageClass"]
        );
    }

    #[tokio::test]
    async fn test_http_404_yields_fetch_error() {
        let base = serve_once("404 Not Found", Vec::new()).await;
        let reference: ChartReference = format!("{base}/nope.tgz").parse().unwrap();

        let err = use_case().execute(&reference).await.unwrap_err();
        match err {
            ProcessChartError::Source(SourceError::Fetch(msg)) => {
                assert!(msg.contains("404"), "unexpected message: {msg}");
            }
            other => panic!("expected fetch error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_oci_fallback_end_to_end() {
        let reference: ChartReference = "oci://host/charts/x:1.0.0".parse().unwrap();

        let result = use_case().execute(&reference).await.unwrap();
        // Generic synthetic preset drives the standard rules
        assert!(result.values.contains_path("replicaCount"));
        assert!(result.questions.contains_variable("service.type"));
        assert!(result.questions.contains_variable("name"));
    }
}
