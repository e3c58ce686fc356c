//! Static front-page content: menu, social links, shortcuts, ticker, slides.

use platform::PageId;

use crate::carousel::Slide;
use crate::navigation::{MenuItem, SubmenuEntry};

/// An external social network link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    /// Accessible name, also the visible text.
    pub label: &'static str,
    /// Destination (opened in a new tab).
    pub href: &'static str,
}

/// A quick content shortcut under the header bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    /// Visible text.
    pub label: &'static str,
    /// Destination page.
    pub page: PageId,
}

/// A call-to-action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cta {
    /// Visible text.
    pub label: &'static str,
    /// Destination page.
    pub page: PageId,
}

const NEWS_SUBMENU: [SubmenuEntry; 1] = [SubmenuEntry {
    label: "Images du jour",
    page: PageId::Photo,
}];

/// Top-level menu, in display order.
pub const MENU: [MenuItem; 8] = [
    MenuItem::new("Accueil", PageId::Home),
    MenuItem::with_submenu("Actualités", PageId::News, &NEWS_SUBMENU),
    MenuItem::new("Analyses", PageId::Analysis),
    MenuItem::new("Enquêtes", PageId::Investigation),
    MenuItem::new("Documentaires", PageId::Documentary),
    MenuItem::new("Vidéos", PageId::Video),
    MenuItem::new("Participez", PageId::Participation),
    MenuItem::new("À propos", PageId::About),
];

/// Social links shown in the header actions.
pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "Facebook",
        href: "https://facebook.com",
    },
    SocialLink {
        label: "Instagram",
        href: "https://instagram.com",
    },
    SocialLink {
        label: "TikTok",
        href: "https://tiktok.com",
    },
];

/// Quick content shortcuts.
pub const SHORTCUTS: [Shortcut; 3] = [
    Shortcut {
        label: "LIRE",
        page: PageId::News,
    },
    Shortcut {
        label: "VOIR",
        page: PageId::Video,
    },
    Shortcut {
        label: "ÉCOUTE",
        page: PageId::Article,
    },
];

/// Headlines scrolling in the ticker.
pub const TICKER: [&str; 3] = [
    "ENQUÊTE EXCLUSIVE — Corruption au cœur des marchés publics — Lire maintenant",
    "VIDÉO — Reportage spécial sur la transition écologique — Voir",
    "PODCAST — Entretien avec des témoins — Écoutez",
];

/// Hero call-to-action used when none is configured.
pub const DEFAULT_CTA: Cta = Cta {
    label: "Lire l'enquête",
    page: PageId::Investigation,
};

/// Hero carousel slides.
pub const SLIDES: [Slide; 3] = [
    Slide {
        media_source: "https://www.w3schools.com/html/mov_bbb.mp4",
        poster_image: "https://images.unsplash.com/photo-1654868537177-86c35bb6b226?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1600",
        title: "La corruption au cœur des marchés publics",
        caption: "Notre enquête révèle des pratiques illégales qui coûtent des millions aux contribuables.",
    },
    Slide {
        media_source: "https://www.w3schools.com/html/movie.mp4",
        poster_image: "https://images.unsplash.com/photo-1569163139394-de4e4f43e4e3?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1600",
        title: "Reportage spécial sur la transition écologique",
        caption: "Sur le terrain avec celles et ceux qui transforment leur territoire.",
    },
    Slide {
        media_source: "https://www.w3schools.com/tags/movie.mp4",
        poster_image: "https://images.unsplash.com/photo-1478737270239-2f02b77fc618?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1600",
        title: "Entretien avec des témoins",
        caption: "Ils ont vu, ils racontent : la parole aux témoins de l'affaire.",
    },
];
