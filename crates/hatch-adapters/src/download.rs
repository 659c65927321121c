//! HTTP downloads with a blocking `reqwest` client.

use std::time::Duration;

use tracing::{debug, instrument};

use hatch_core::{
    application::{ApplicationError, ports::Downloader},
    error::{HatchError, HatchResult},
};

/// Fetches whole payloads into memory. Redirects are followed.
#[derive(Debug, Clone)]
pub struct HttpDownloader {
    client: reqwest::blocking::Client,
}

impl HttpDownloader {
    /// Build a client. `timeout` of `None` waits indefinitely.
    pub fn new(timeout: Option<Duration>) -> HatchResult<Self> {
        let builder = reqwest::blocking::Client::builder()
            .user_agent(concat!("hatch/", env!("CARGO_PKG_VERSION")))
            // None also lifts the blocking client's 30s default.
            .timeout(timeout);

        let client = builder.build().map_err(|e| HatchError::Configuration {
            message: format!("Failed to build HTTP client: {e}"),
        })?;
        Ok(Self { client })
    }
}

impl Downloader for HttpDownloader {
    #[instrument(skip(self))]
    fn fetch(&self, url: &str) -> HatchResult<Vec<u8>> {
        let failed = |reason: String| ApplicationError::DownloadFailed {
            url: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| failed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(failed(format!("HTTP {status}")).into());
        }

        let bytes = response.bytes().map_err(|e| failed(e.to_string()))?;
        debug!(bytes = bytes.len(), "Download complete");
        Ok(bytes.to_vec())
    }
}
