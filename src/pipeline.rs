//! End-to-end logo scrape: homepage → logo URL → image → average → swatch.

use crate::color::{average_color, AverageColor, AverageMode};
use crate::fetch::Fetcher;
use crate::locator::{locate_logo, LogoLookup};
use crate::patterns::HomepagePatterns;
use crate::swatch::save_swatch;
use crate::{Error, Result, ScraperConfig};
use log::info;
use serde::Serialize;
use std::path::PathBuf;

/// What a single scrape produced.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeReport {
    /// Site as given by the caller
    pub site: String,
    /// Resolved logo URL that was downloaded
    pub logo_url: String,
    /// Averaged logo color
    pub color: AverageColor,
    /// `#rrggbb` form of `color`
    pub hex: String,
    /// How `color` was derived from the channel means
    pub mode: AverageMode,
    /// Where the swatch PNG was written
    pub swatch_path: PathBuf,
    /// Where the raw logo was kept, if requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_path: Option<PathBuf>,
}

/// Runs the scrape pipeline with a shared HTTP client.
pub struct LogoScraper {
    fetcher: Fetcher,
    config: ScraperConfig,
}

impl LogoScraper {
    pub fn new(config: ScraperConfig) -> Result<Self> {
        let fetcher = Fetcher::new(&config)?;
        Ok(Self { fetcher, config })
    }

    /// Locate the logo URL for `site` without downloading it.
    ///
    /// `site` is recorded in `patterns` once its homepage has been fetched.
    pub fn find_logo(&self, site: &str, patterns: &mut HomepagePatterns) -> Result<String> {
        let html = self.fetcher.fetch_homepage_html(site, patterns)?;
        match locate_logo(&html, site, patterns)? {
            LogoLookup::Found(url) => Ok(url),
            LogoLookup::NotFound => Err(Error::LogoNotFound(site.to_string())),
        }
    }

    /// Scrape `site` and write its swatch.
    pub fn scrape(&self, site: &str, patterns: &mut HomepagePatterns) -> Result<ScrapeReport> {
        let logo_url = self.find_logo(site, patterns)?;
        info!("logo for {} is {}", site, logo_url);

        let bytes = match &self.config.save_logo {
            Some(path) => {
                self.fetcher.fetch_to_file(path, &logo_url)?;
                std::fs::read(path)?
            }
            None => self.fetcher.fetch_bytes(&logo_url)?,
        };

        let img = image::load_from_memory(&bytes)
            .map_err(|e| Error::Decode(format!("{}: {}", logo_url, e)))?;
        let color = average_color(&img.to_rgba16(), self.config.average_mode)?;
        let swatch_path = save_swatch(&self.config.output_dir, color)?;

        Ok(ScrapeReport {
            site: site.to_string(),
            logo_url,
            color,
            hex: color.hex(),
            mode: self.config.average_mode,
            swatch_path,
            logo_path: self.config.save_logo.clone(),
        })
    }
}
