//! Homepage link patterns
//!
//! An anchor whose attribute value appears inside one of these patterns is
//! treated as a link back to the site's homepage, which is where logos live.

/// Path conventions that commonly denote a homepage.
pub const DEFAULT_HOMEPAGE_PATTERNS: [&str; 4] = ["/", "default.aspx", "index.html", "home.html"];

/// The pattern set consulted by the logo locator.
///
/// Starts from [`DEFAULT_HOMEPAGE_PATTERNS`] and accumulates every site
/// fetched through it, so later lookups also treat previously visited sites
/// as homepage-like. Entries are never removed.
#[derive(Debug, Clone)]
pub struct HomepagePatterns {
    patterns: Vec<String>,
}

impl HomepagePatterns {
    pub fn new() -> Self {
        Self {
            patterns: DEFAULT_HOMEPAGE_PATTERNS.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Append a visited site URL.
    pub fn record_visit(&mut self, site_url: impl Into<String>) {
        self.patterns.push(site_url.into());
    }

    /// Returns the first pattern that contains `value`, if any.
    ///
    /// Empty values never match even though every string contains "".
    pub fn matching(&self, value: &str) -> Option<&str> {
        if value.is_empty() {
            return None;
        }
        self.patterns.iter().map(String::as_str).find(|p| p.contains(value))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for HomepagePatterns {
    fn default() -> Self {
        Self::new()
    }
}
