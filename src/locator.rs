//! Logo discovery in homepage markup.
//!
//! Sites usually wrap their logo in a link back to the homepage, so the
//! locator looks for the first anchor pointing at something homepage-like and
//! takes the image inside it.

use crate::patterns::HomepagePatterns;
use crate::url_utils::resolve_logo_url;
use crate::{Error, Result};
use log::{debug, warn};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::fmt;
use std::sync::OnceLock;

/// Text reported when no homepage link exists in the document.
pub const NOT_FOUND_SENTINEL: &str = "Could not find the logo link";

/// Outcome of scanning a document for a logo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoLookup {
    /// Absolute URL of the logo image
    Found(String),
    /// No anchor matched a homepage pattern
    NotFound,
}

impl LogoLookup {
    pub fn url(&self) -> Option<&str> {
        match self {
            LogoLookup::Found(u) => Some(u),
            LogoLookup::NotFound => None,
        }
    }
}

impl fmt::Display for LogoLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogoLookup::Found(u) => f.write_str(u),
            LogoLookup::NotFound => f.write_str(NOT_FOUND_SENTINEL),
        }
    }
}

fn src_pattern() -> &'static Regex {
    static SRC: OnceLock<Regex> = OnceLock::new();
    SRC.get_or_init(|| Regex::new(r#"src\s*=\s*"([^"]+)""#).expect("src pattern is valid"))
}

/// Pull the first `src="..."` value out of a markup fragment.
pub fn extract_src(markup: &str) -> Option<&str> {
    src_pattern().captures(markup).and_then(|c| c.get(1)).map(|m| m.as_str())
}

/// Find the logo inside the first homepage-like anchor of `html`.
///
/// Anchors are visited in document order and their attribute values in parser
/// order. The first non-empty value contained in any pattern ends the scan:
/// its first nested `<img src>` is resolved against `site`. When the image is
/// missing or has no `src`, the anchor's inner markup is searched with a
/// `src="..."` pattern (this catches logos inside `<noscript>`). A matched
/// anchor without any source is an error rather than a reason to keep looking.
pub fn locate_logo(html: &str, site: &str, patterns: &HomepagePatterns) -> Result<LogoLookup> {
    let document = Html::parse_document(html);
    let anchor_sel = Selector::parse("a").unwrap();

    for anchor in document.select(&anchor_sel) {
        let matched = anchor
            .value()
            .attrs()
            .find_map(|(name, value)| patterns.matching(value).map(|p| (name, value, p)));

        if let Some((name, value, pattern)) = matched {
            debug!("anchor {}=\"{}\" matched homepage pattern \"{}\"", name, value, pattern);
            let src = image_source(&anchor).ok_or_else(|| Error::LogoSourceMissing(anchor.html()))?;
            let resolved = resolve_logo_url(&src, site)?;
            debug!("logo reference \"{}\" resolved to {}", src, resolved);
            return Ok(LogoLookup::Found(resolved));
        }
    }

    Ok(LogoLookup::NotFound)
}

fn image_source(anchor: &ElementRef<'_>) -> Option<String> {
    let img_sel = Selector::parse("img").unwrap();
    if let Some(src) = anchor
        .select(&img_sel)
        .next()
        .and_then(|img| img.value().attr("src"))
        .filter(|s| !s.is_empty())
    {
        return Some(src.to_string());
    }

    let inner = anchor.inner_html();
    let src = extract_src(&inner)?;
    warn!("no <img src> element under homepage link; using src found in raw markup");
    Some(src.to_string())
}
