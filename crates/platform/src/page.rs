//! Page identifiers: every destination the navigation collaborator knows.

use core::fmt;
use core::str::FromStr;

/// A destination page or section of the site.
///
/// Opaque to the controllers: they only hand it to [`Navigate`] and compare
/// it for current-page highlighting.
///
/// [`Navigate`]: crate::Navigate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PageId {
    /// Front page.
    Home,
    /// News feed.
    News,
    /// Picture of the day.
    Photo,
    /// Analysis pieces.
    Analysis,
    /// Investigations.
    Investigation,
    /// Documentaries.
    Documentary,
    /// Video section.
    Video,
    /// Reader participation.
    Participation,
    /// About the newsroom.
    About,
    /// Single article / audio reading.
    Article,
}

impl PageId {
    /// Every page, in declaration order.
    pub const ALL: [PageId; 10] = [
        PageId::Home,
        PageId::News,
        PageId::Photo,
        PageId::Analysis,
        PageId::Investigation,
        PageId::Documentary,
        PageId::Video,
        PageId::Participation,
        PageId::About,
        PageId::Article,
    ];

    /// Stable lowercase form, used in element ids (`news-submenu-0`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::News => "news",
            Self::Photo => "photo",
            Self::Analysis => "analysis",
            Self::Investigation => "investigation",
            Self::Documentary => "documentary",
            Self::Video => "video",
            Self::Participation => "participation",
            Self::About => "about",
            Self::Article => "article",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownPage;

impl fmt::Display for UnknownPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown page identifier")
    }
}

#[cfg(any(test, feature = "std"))]
impl std::error::Error for UnknownPage {}

impl FromStr for PageId {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageId::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or(UnknownPage)
    }
}
