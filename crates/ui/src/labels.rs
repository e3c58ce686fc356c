//! Accessibility labels and fixed copy.
//!
//! These strings are part of the interaction contract: assistive technology
//! and tests locate controls by them, so any rendering host must use them
//! verbatim.

/// Inline search toggle.
pub const SEARCH_TOGGLE: &str = "Ouvrir la recherche";
/// Placeholder of the inline search field.
pub const SEARCH_PLACEHOLDER: &str = "Rechercher un article, une enquête...";
/// Mobile menu toggle.
pub const MOBILE_MENU_TOGGLE: &str = "Ouvrir le menu mobile";
/// Account button.
pub const ACCOUNT: &str = "Mon compte";
/// Desktop navigation bar.
pub const MAIN_NAVIGATION: &str = "Main navigation";
/// Suffix of a flyout's label (`"Actualités submenu"`).
pub const SUBMENU_SUFFIX: &str = "submenu";

/// Previous-slide control.
pub const PREVIOUS_SLIDE: &str = "Précédent";
/// Next-slide control.
pub const NEXT_SLIDE: &str = "Suivant";
/// Autoplay toggle while autoplay runs.
pub const PAUSE_AUTOPLAY: &str = "Mettre en pause le diaporama";
/// Autoplay toggle while autoplay is paused.
pub const RESUME_AUTOPLAY: &str = "Reprendre le diaporama";
/// Prefix of every slide's watch control (`"Regarder {title}"`).
pub const WATCH_PREFIX: &str = "Regarder";
/// Secondary hero control opening the video.
pub const WATCH_FEATURE: &str = "Voir la vidéo";
/// Modal close control.
pub const CLOSE_VIDEO: &str = "Fermer la vidéo";
/// Hero section region.
pub const HERO_REGION: &str = "À la une";
/// Text shown when the media element cannot play.
pub const VIDEO_FALLBACK: &str = "Votre navigateur ne supporte pas la vidéo.";
