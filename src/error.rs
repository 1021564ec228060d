//! Error types for the logo scraping pipeline

use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while locating a logo and rendering its swatch
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to build the HTTP client
    #[error("Initialization failed: {0}")]
    InitializationError(String),

    /// Failed to retrieve a site's homepage
    #[error("Failed to load homepage: {0}")]
    Load(String),

    /// Failed to retrieve a resource (logo image, file download)
    #[error("Network error: {0}")]
    Network(String),

    /// A string could not be parsed as a URL with a host
    #[error("Malformed URL '{url}': {reason}")]
    MalformedUrl { url: String, reason: String },

    /// No homepage-like anchor was found in the document
    #[error("Could not find the logo link on {0}")]
    LogoNotFound(String),

    /// A homepage anchor matched but carried no usable image source
    #[error("Homepage link matched but has no image source: {0}")]
    LogoSourceMissing(String),

    /// The downloaded logo could not be decoded as an image
    #[error("Failed to decode logo image: {0}")]
    Decode(String),

    /// The decoded image has no pixels to average
    #[error("Cannot average an empty image ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    /// Writing the swatch image failed
    #[error("Failed to persist swatch to {path}: {reason}")]
    Persist { path: String, reason: String },

    /// Local file system error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn malformed(url: &str, reason: impl ToString) -> Self {
        Error::MalformedUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}
