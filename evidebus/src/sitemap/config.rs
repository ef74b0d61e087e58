//! Sitemap entry settings and configuration.

use std::fmt;

/// How often a page is expected to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    /// The protocol's spelling of this frequency.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A crawl priority between 0.0 and 1.0, held in tenths.
///
/// # Examples
///
/// ```
/// use evidebus::sitemap::Priority;
///
/// assert_eq!(Priority::from_tenths(8).to_string(), "0.8");
/// assert_eq!(Priority::from_tenths(10).to_string(), "1.0");
/// assert_eq!(Priority::from_tenths(42).to_string(), "1.0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(u8);

impl Priority {
    /// Highest priority.
    pub const MAX: Self = Self(10);

    /// Create a priority from tenths, clamped to 10.
    pub const fn from_tenths(tenths: u8) -> Self {
        if tenths > 10 { Self(10) } else { Self(tenths) }
    }

    /// Returns the priority in tenths.
    pub const fn tenths(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

/// Change frequency and priority shared by a group of entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryStyle {
    pub changefreq: ChangeFreq,
    pub priority: Priority,
}

impl EntryStyle {
    pub const fn new(changefreq: ChangeFreq, priority: Priority) -> Self {
        Self {
            changefreq,
            priority,
        }
    }
}

/// A fixed page of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPage {
    /// Path below the base URL, starting with `/`. `/` is the home page.
    pub path: String,

    pub style: EntryStyle,
}

impl StaticPage {
    pub fn new(path: impl Into<String>, changefreq: ChangeFreq, priority: Priority) -> Self {
        Self {
            path: path.into(),
            style: EntryStyle::new(changefreq, priority),
        }
    }
}

/// Configuration for URL enumeration.
#[derive(Debug, Clone)]
pub struct SitemapConfig {
    /// Site origin, e.g. `https://evidebus.com`. Trailing slashes are ignored.
    pub base_url: String,

    /// Style for per-stop board pages.
    pub board: EntryStyle,

    /// Style for popular route search pages.
    pub search: EntryStyle,
}

impl SitemapConfig {
    /// Create a configuration for a base URL with default entry styles.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// The base URL without trailing slashes.
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            base_url: "https://evidebus.com".to_string(),
            board: EntryStyle::new(ChangeFreq::Daily, Priority::from_tenths(7)),
            search: EntryStyle::new(ChangeFreq::Weekly, Priority::from_tenths(8)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SitemapConfig::default();

        assert_eq!(config.base(), "https://evidebus.com");
        assert_eq!(config.board.changefreq, ChangeFreq::Daily);
        assert_eq!(config.board.priority, Priority::from_tenths(7));
        assert_eq!(config.search.changefreq, ChangeFreq::Weekly);
        assert_eq!(config.search.priority, Priority::from_tenths(8));
    }

    #[test]
    fn base_trims_trailing_slashes() {
        assert_eq!(SitemapConfig::new("https://example.org/").base(), "https://example.org");
        assert_eq!(SitemapConfig::new("https://example.org//").base(), "https://example.org");
    }

    #[test]
    fn changefreq_display() {
        assert_eq!(ChangeFreq::Always.to_string(), "always");
        assert_eq!(ChangeFreq::Monthly.to_string(), "monthly");
        assert_eq!(ChangeFreq::Never.to_string(), "never");
    }

    #[test]
    fn priority_display() {
        assert_eq!(Priority::from_tenths(0).to_string(), "0.0");
        assert_eq!(Priority::from_tenths(5).to_string(), "0.5");
        assert_eq!(Priority::MAX.to_string(), "1.0");
    }

    #[test]
    fn priority_clamps() {
        assert_eq!(Priority::from_tenths(200), Priority::MAX);
        assert_eq!(Priority::from_tenths(200).tenths(), 10);
    }
}
