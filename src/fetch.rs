//! Blocking HTTP retrieval for homepages and logo images.

use crate::patterns::HomepagePatterns;
use crate::url_utils::normalize_site_url;
use crate::{Error, Result, ScraperConfig};
use log::{debug, info, warn};
use reqwest::blocking::{Client, Response};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

/// Thin wrapper around a blocking `reqwest` client configured from
/// [`ScraperConfig`].
pub struct Fetcher {
    client: Client,
    user_agent: String,
}

impl Fetcher {
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| Error::InitializationError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            user_agent: config.user_agent.clone(),
        })
    }

    fn send(&self, url: &str) -> reqwest::Result<Response> {
        self.client
            .get(url)
            .header("User-Agent", self.user_agent.clone())
            .send()
    }

    fn get(&self, url: &str) -> reqwest::Result<Response> {
        self.send(url)?.error_for_status()
    }

    /// Fetch the homepage of `site` and record its normalized URL in `patterns`.
    ///
    /// Only transport failures are errors: error pages (403, 404, ...) are
    /// returned like any other body, since they often still carry the site's
    /// header and logo. The site is recorded once the body has been read.
    pub fn fetch_homepage_html(&self, site: &str, patterns: &mut HomepagePatterns) -> Result<String> {
        let url = normalize_site_url(site);
        debug!("fetching homepage {}", url);

        let resp = self
            .send(&url)
            .map_err(|e| Error::Load(format!("Failed to fetch {}: {}", url, e)))?;
        if !resp.status().is_success() {
            warn!("homepage {} answered {}; scanning it anyway", url, resp.status());
        }

        let body = resp
            .text()
            .map_err(|e| Error::Load(format!("Failed to read response body: {}", e)))?;

        info!("fetched homepage {} ({} bytes)", url, body.len());
        patterns.record_visit(url);
        Ok(body)
    }

    /// Download `url` fully into memory.
    pub fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let bytes = self
            .get(url)
            .map_err(|e| Error::Network(format!("GET {} failed: {}", url, e)))?
            .bytes()
            .map_err(|e| Error::Network(format!("Failed to read body of {}: {}", url, e)))?;

        debug!("downloaded {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }

    /// Stream `url` into a newly created file at `path`, returning the number
    /// of bytes written.
    ///
    /// The file is created only after the request succeeds. On a failed copy
    /// the partially written file is left in place.
    pub fn fetch_to_file(&self, path: &Path, url: &str) -> Result<u64> {
        let mut resp = self
            .get(url)
            .map_err(|e| Error::Network(format!("GET {} failed: {}", url, e)))?;

        let mut out = BufWriter::new(File::create(path)?);
        let written = resp
            .copy_to(&mut out)
            .map_err(|e| Error::Network(format!("Failed to stream {} to {}: {}", url, path.display(), e)))?;
        out.flush()?;

        debug!("saved {} bytes from {} to {}", written, url, path.display());
        Ok(written)
    }
}
