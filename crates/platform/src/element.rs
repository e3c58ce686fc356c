//! Element identifiers, the typed replacement for DOM ids.
//!
//! Every node a widget renders that can receive input or focus carries one
//! of these. Controllers request focus by id, the session dispatches events
//! by id, and the [`fmt::Display`] form reproduces the id strings a browser
//! rendition would use (`news-submenu-0`).

use core::fmt;

use crate::page::PageId;

/// Identifier of a rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    // ── Header ──────────────────────────────────────────────────────────
    /// Site logo (navigates home).
    Logo,
    /// Desktop navigation bar (`role=menubar`).
    Menubar,
    /// Hover wrapper around a submenu-bearing item and its flyout.
    MenuGroup(PageId),
    /// Top-level desktop menu item (a submenu trigger when it has entries).
    MenuItem(PageId),
    /// Desktop flyout (`role=menu`) of a top-level item.
    Submenu(PageId),
    /// Entry `index` of the desktop flyout under `page`.
    SubmenuEntry {
        /// Owning top-level item.
        page: PageId,
        /// Position in the submenu, 0-based.
        index: usize,
    },
    /// Inline search toggle.
    SearchToggle,
    /// Inline search field.
    SearchInput,
    /// Account button.
    Account,
    /// Mobile menu toggle.
    MobileMenuToggle,
    /// Mobile menu panel.
    MobilePanel,
    /// Top-level item inside the mobile panel.
    MobileItem(PageId),
    /// Submenu entry inside the mobile panel.
    MobileSubmenuEntry {
        /// Owning top-level item.
        page: PageId,
        /// Position in the submenu, 0-based.
        index: usize,
    },
    /// Social link `index` of the configured social links.
    Social(usize),
    /// Quick content shortcut (LIRE / VOIR / ÉCOUTE).
    Shortcut(PageId),

    // ── Hero ────────────────────────────────────────────────────────────
    /// Hero section.
    Hero,
    /// Horizontal slide track.
    SlideTrack,
    /// Slide `index` of the carousel.
    Slide(usize),
    /// "Regarder …" control of slide `index`.
    Watch(usize),
    /// Previous-slide control.
    PreviousSlide,
    /// Next-slide control.
    NextSlide,
    /// Autoplay pause/resume control.
    AutoplayToggle,
    /// Hero call-to-action.
    HeroCta,
    /// Secondary "Voir la vidéo" control.
    HeroVideoButton,
    /// Video modal (`role=dialog`).
    Dialog,
    /// Modal close control.
    CloseVideo,
    /// The playable media element inside the modal.
    Video,
}

impl ElementId {
    /// Whether the element lives inside the desktop menubar subtree.
    pub const fn in_menubar(self) -> bool {
        matches!(
            self,
            Self::Menubar
                | Self::MenuGroup(_)
                | Self::MenuItem(_)
                | Self::Submenu(_)
                | Self::SubmenuEntry { .. }
        )
    }

    /// Whether the element lives inside the mobile menu panel.
    pub const fn in_mobile_panel(self) -> bool {
        matches!(
            self,
            Self::MobilePanel | Self::MobileItem(_) | Self::MobileSubmenuEntry { .. }
        )
    }

    /// Whether the element belongs to the hero section.
    pub const fn in_hero(self) -> bool {
        matches!(
            self,
            Self::Hero
                | Self::SlideTrack
                | Self::Slide(_)
                | Self::Watch(_)
                | Self::PreviousSlide
                | Self::NextSlide
                | Self::AutoplayToggle
                | Self::HeroCta
                | Self::HeroVideoButton
                | Self::Dialog
                | Self::CloseVideo
                | Self::Video
        )
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Logo => f.write_str("logo"),
            Self::Menubar => f.write_str("menubar"),
            Self::MenuGroup(page) => write!(f, "{page}-group"),
            Self::MenuItem(page) => write!(f, "{page}-item"),
            Self::Submenu(page) => write!(f, "{page}-submenu"),
            Self::SubmenuEntry { page, index } => write!(f, "{page}-submenu-{index}"),
            Self::SearchToggle => f.write_str("search-toggle"),
            Self::SearchInput => f.write_str("search-input"),
            Self::Account => f.write_str("account"),
            Self::MobileMenuToggle => f.write_str("mobile-menu-toggle"),
            Self::MobilePanel => f.write_str("mobile-panel"),
            Self::MobileItem(page) => write!(f, "mobile-{page}"),
            Self::MobileSubmenuEntry { page, index } => {
                write!(f, "mobile-{page}-submenu-{index}")
            }
            Self::Social(index) => write!(f, "social-{index}"),
            Self::Shortcut(page) => write!(f, "shortcut-{page}"),
            Self::Hero => f.write_str("hero"),
            Self::SlideTrack => f.write_str("slide-track"),
            Self::Slide(index) => write!(f, "slide-{index}"),
            Self::Watch(index) => write!(f, "watch-{index}"),
            Self::PreviousSlide => f.write_str("previous-slide"),
            Self::NextSlide => f.write_str("next-slide"),
            Self::AutoplayToggle => f.write_str("autoplay-toggle"),
            Self::HeroCta => f.write_str("hero-cta"),
            Self::HeroVideoButton => f.write_str("hero-video"),
            Self::Dialog => f.write_str("video-dialog"),
            Self::CloseVideo => f.write_str("close-video"),
            Self::Video => f.write_str("video"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ElementId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::ElementId;
    use crate::page::PageId;

    #[test]
    fn test_submenu_entry_id_matches_dom_form() {
        let id = ElementId::SubmenuEntry {
            page: PageId::News,
            index: 0,
        };
        assert_eq!(id.to_string(), "news-submenu-0");
    }

    #[test]
    fn test_menubar_scope() {
        assert!(ElementId::MenuItem(PageId::News).in_menubar());
        assert!(ElementId::Submenu(PageId::News).in_menubar());
        assert!(!ElementId::MobileItem(PageId::News).in_menubar());
        assert!(!ElementId::SearchToggle.in_menubar());
    }

    #[test]
    fn test_mobile_scope() {
        assert!(ElementId::MobilePanel.in_mobile_panel());
        assert!(ElementId::MobileSubmenuEntry {
            page: PageId::News,
            index: 0
        }
        .in_mobile_panel());
        assert!(!ElementId::MobileMenuToggle.in_mobile_panel());
    }

    #[test]
    fn test_hero_scope_excludes_header() {
        assert!(ElementId::CloseVideo.in_hero());
        assert!(!ElementId::Logo.in_hero());
    }
}
