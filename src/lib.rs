//! logohue
//!
//! Finds a website's logo by scanning its homepage for a link back to the
//! homepage, downloads the image inside that link, averages its color, and
//! writes a flat 200×200 swatch of that color as `<unix-seconds>.png`.
//!
//! # Example
//!
//! ```no_run
//! use logohue::{HomepagePatterns, LogoScraper, ScraperConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let scraper = LogoScraper::new(ScraperConfig::default())?;
//! let mut patterns = HomepagePatterns::new();
//! let report = scraper.scrape("example.com", &mut patterns)?;
//! println!("{} -> {}", report.logo_url, report.swatch_path.display());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod error;
pub use error::{Error, Result};

pub mod color;
pub mod fetch;
pub mod locator;
pub mod patterns;
pub mod pipeline;
pub mod swatch;
pub mod url_utils;

pub use color::{average_color, AverageColor, AverageMode, Bounds, PixelGrid};
pub use locator::{locate_logo, LogoLookup};
pub use patterns::HomepagePatterns;
pub use pipeline::{LogoScraper, ScrapeReport};

/// Configuration for a [`LogoScraper`]
///
/// # Examples
///
/// ```
/// let cfg = logohue::ScraperConfig::default();
/// assert_eq!(cfg.timeout_ms, 30_000);
/// assert_eq!(cfg.average_mode, logohue::AverageMode::SourceCompat);
/// ```
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// User agent string sent with every request
    pub user_agent: String,
    /// Timeout for each HTTP request in milliseconds
    pub timeout_ms: u64,
    /// Directory the swatch PNG is written into
    pub output_dir: PathBuf,
    /// How channel means become the swatch color
    pub average_mode: AverageMode,
    /// Also keep the downloaded logo at this path
    pub save_logo: Option<PathBuf>,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("Mozilla/5.0 (compatible; logohue/{})", env!("CARGO_PKG_VERSION")),
            timeout_ms: 30000,
            output_dir: PathBuf::from("."),
            average_mode: AverageMode::default(),
            save_logo: None,
        }
    }
}
