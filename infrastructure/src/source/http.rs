//! HTTP chart archive fetcher.

use chartq_application::ports::chart_source::SourceError;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;
use tracing::debug;

/// Maximum archive size accepted by default (50 MB)
pub const DEFAULT_MAX_ARCHIVE_BYTES: u64 = 50 * 1024 * 1024;

/// Downloads chart archives over HTTP(S) into scoped temporary files.
pub struct HttpChartFetcher {
    client: reqwest::Client,
    max_bytes: u64,
}

impl HttpChartFetcher {
    pub fn new(timeout: Duration, max_bytes: u64) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Fetch(format!("could not build http client: {e}")))?;
        Ok(Self { client, max_bytes })
    }

    /// Fetch `url` into a temporary file. The file is removed when the
    /// returned handle drops, so callers hold it only for extraction.
    pub async fn download(&self, url: &str) -> Result<NamedTempFile, SourceError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::Fetch(format!("transport failure: {}", e.without_url())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Fetch(format!("HTTP status {status}")));
        }

        if let Some(length) = response.content_length()
            && length > self.max_bytes
        {
            return Err(SourceError::Fetch(format!(
                "archive too large: {length} bytes (limit {})",
                self.max_bytes
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SourceError::Fetch(format!("transport failure: {}", e.without_url())))?;
        if body.len() as u64 > self.max_bytes {
            return Err(SourceError::Fetch(format!(
                "archive too large: {} bytes (limit {})",
                body.len(),
                self.max_bytes
            )));
        }

        debug!("Downloaded chart archive ({} bytes)", body.len());

        let mut file = NamedTempFile::new()
            .map_err(|e| SourceError::Fetch(format!("could not allocate workspace: {e}")))?;
        file.write_all(&body)
            .map_err(|e| SourceError::Fetch(format!("could not stage archive: {e}")))?;
        Ok(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetcher_builds_with_timeout() {
        let fetcher = HttpChartFetcher::new(Duration::from_secs(30), DEFAULT_MAX_ARCHIVE_BYTES);
        assert!(fetcher.is_ok());
    }
}
