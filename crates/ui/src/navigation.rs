//! Header navigation state machine: mobile menu, inline search, flyout
//! submenu, current-page highlighting and submenu keyboard focus.
//!
//! At most one submenu is open at a time ([`MenuState::active_submenu`]).
//! Hover and click write the same field; the last writer wins. A keyboard
//! open additionally schedules a focus move to the first entry, deferred
//! until the next paint so the entry exists when focus is requested. The
//! focus move is best-effort: a missing target drops it silently.

use platform::config::FOCUS_DELAY;
use platform::{Document, Duration, ElementId, Instant, Navigate, OneShot, PageId};

/// One entry of a submenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmenuEntry {
    /// Visible text.
    pub label: &'static str,
    /// Destination page.
    pub page: PageId,
}

/// A top-level menu item.
///
/// An empty `submenu` means the item has none; when present the entries are
/// ordered and the order drives keyboard traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    /// Visible text.
    pub label: &'static str,
    /// Destination page (also identifies the item).
    pub page: PageId,
    /// Flyout entries, in traversal order.
    pub submenu: &'static [SubmenuEntry],
}

impl MenuItem {
    /// A plain item.
    pub const fn new(label: &'static str, page: PageId) -> Self {
        Self {
            label,
            page,
            submenu: &[],
        }
    }

    /// An item with a flyout submenu.
    pub const fn with_submenu(
        label: &'static str,
        page: PageId,
        submenu: &'static [SubmenuEntry],
    ) -> Self {
        Self {
            label,
            page,
            submenu,
        }
    }

    /// Whether the item declares a submenu.
    pub const fn has_submenu(&self) -> bool {
        !self.submenu.is_empty()
    }
}

/// Open/closed state of the header menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    /// Mobile menu panel visibility.
    pub menu_open: bool,
    /// Inline search field visibility.
    pub search_open: bool,
    /// Item whose submenu is expanded. Only ever a submenu-bearing item.
    pub active_submenu: Option<PageId>,
}

/// How a submenu toggle was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Click or tap. Opens without moving focus.
    Pointer,
    /// Enter / Space / ArrowDown on the trigger. Opening moves focus to the
    /// first entry.
    Keyboard,
}

/// Direction of keyboard traversal inside an open submenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the first entry.
    Up,
    /// Towards the last entry.
    Down,
}

/// Subtree an `Escape` key press originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeScope {
    /// Desktop menubar: closes the submenu.
    Menubar,
    /// Mobile panel: closes the submenu and the panel.
    MobilePanel,
}

impl EscapeScope {
    /// The scope `id` belongs to, if `Escape` is handled there at all.
    pub fn of(id: ElementId) -> Option<Self> {
        if id.in_menubar() {
            Some(Self::Menubar)
        } else if id.in_mobile_panel() {
            Some(Self::MobilePanel)
        } else {
            None
        }
    }
}

/// Next focus index inside a submenu of `len` entries, clamped to
/// `[0, len - 1]` (no wraparound).
pub fn next_submenu_index(direction: Direction, current: usize, len: usize) -> usize {
    let last = len.saturating_sub(1);
    match direction {
        Direction::Down => current.saturating_add(1).min(last),
        Direction::Up => current.saturating_sub(1).min(last),
    }
}

/// Header navigation controller.
pub struct NavigationController {
    items: &'static [MenuItem],
    state: MenuState,
    current_page: PageId,
    pending_focus: OneShot<ElementId>,
    focus_delay: Duration,
}

impl NavigationController {
    /// Create a controller over `items` with everything closed.
    pub fn new(items: &'static [MenuItem], current_page: PageId) -> Self {
        Self {
            items,
            state: MenuState::default(),
            current_page,
            pending_focus: OneShot::new(),
            focus_delay: FOCUS_DELAY,
        }
    }

    /// The configured menu items.
    pub fn items(&self) -> &'static [MenuItem] {
        self.items
    }

    /// The item for `page`, if it is a top-level item.
    pub fn item(&self, page: PageId) -> Option<&'static MenuItem> {
        self.items.iter().find(|item| item.page == page)
    }

    /// Current open/closed state.
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// The page currently displayed.
    pub fn current_page(&self) -> PageId {
        self.current_page
    }

    /// Update the page currently displayed (highlighting only).
    pub fn set_current_page(&mut self, page: PageId) {
        self.current_page = page;
    }

    /// Whether `page` is highlighted as current. A submenu trigger is also
    /// current when one of its entries is.
    pub fn is_current(&self, page: PageId) -> bool {
        if page == self.current_page {
            return true;
        }
        self.item(page).is_some_and(|item| {
            item.submenu
                .iter()
                .any(|entry| entry.page == self.current_page)
        })
    }

    /// Whether the submenu of `page` is expanded (`aria-expanded`).
    pub fn is_expanded(&self, page: PageId) -> bool {
        self.state.active_submenu == Some(page)
    }

    /// The element a deferred focus move targets, if one is pending.
    pub fn pending_focus(&self) -> Option<ElementId> {
        self.pending_focus.deadline().and_then(|_| {
            self.state
                .active_submenu
                .map(|page| ElementId::SubmenuEntry { page, index: 0 })
        })
    }

    /// Flip the mobile menu panel.
    pub fn toggle_mobile_menu(&mut self) {
        self.state.menu_open = !self.state.menu_open;
        tracing::debug!(open = self.state.menu_open, "mobile menu toggled");
    }

    /// Flip the inline search field.
    pub fn toggle_search(&mut self) {
        self.state.search_open = !self.state.search_open;
        tracing::debug!(open = self.state.search_open, "search toggled");
    }

    /// Pointer entered the group of `page`: expand its submenu.
    ///
    /// Items without a submenu are ignored.
    pub fn hover_submenu(&mut self, page: PageId) {
        if !self.item(page).is_some_and(MenuItem::has_submenu) {
            return;
        }
        self.set_active(Some(page));
    }

    /// Pointer left a submenu group: collapse, however it was opened.
    pub fn unhover_submenu(&mut self) {
        self.set_active(None);
    }

    /// Toggle the submenu of `page`.
    ///
    /// Returns whether the submenu is open afterwards. A keyboard open
    /// schedules focus on the first entry after the next paint.
    pub fn toggle_submenu(&mut self, page: PageId, gesture: Gesture, now: Instant) -> bool {
        if !self.item(page).is_some_and(MenuItem::has_submenu) {
            return false;
        }
        if self.is_expanded(page) {
            self.set_active(None);
            return false;
        }
        self.set_active(Some(page));
        if gesture == Gesture::Keyboard {
            let first = ElementId::SubmenuEntry { page, index: 0 };
            self.pending_focus.schedule(now, self.focus_delay, first);
            tracing::trace!(target_id = %first, "focus move scheduled");
        }
        true
    }

    /// Move focus inside the open submenu of `page` from entry `current`.
    ///
    /// Returns the index focus was moved to, or `None` when the submenu is
    /// not open. The open submenu itself is left untouched.
    pub fn navigate_submenu_item(
        &self,
        page: PageId,
        direction: Direction,
        current: usize,
        document: &mut dyn Document,
    ) -> Option<usize> {
        if !self.is_expanded(page) {
            return None;
        }
        let len = self.item(page)?.submenu.len();
        let next = next_submenu_index(direction, current, len);
        if let Err(err) = document.focus(ElementId::SubmenuEntry { page, index: next }) {
            tracing::debug!(%err, "focus move dropped");
        }
        Some(next)
    }

    /// `Escape` pressed inside `scope`.
    pub fn close_on_escape(&mut self, scope: EscapeScope) {
        self.set_active(None);
        if scope == EscapeScope::MobilePanel {
            self.state.menu_open = false;
        }
    }

    /// Navigate to `page`, then close every open menu.
    pub fn select_item(&mut self, page: PageId, navigator: &mut dyn Navigate) {
        navigator.navigate(page);
        self.current_page = page;
        self.set_active(None);
        self.state.menu_open = false;
        tracing::debug!(%page, "navigated");
    }

    /// Run the deferred focus move if it is due. Returns `true` when focus
    /// landed on its target.
    pub fn poll(&mut self, now: Instant, document: &mut dyn Document) -> bool {
        let Some(target) = self.pending_focus.take_due(now) else {
            return false;
        };
        match document.focus(target) {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!(%err, "deferred focus dropped");
                false
            }
        }
    }

    fn set_active(&mut self, active: Option<PageId>) {
        if self.state.active_submenu != active {
            // A pending focus move targets the submenu being replaced.
            self.pending_focus.cancel();
        }
        self.state.active_submenu = active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MENU;
    use platform::mocks::{MockDocument, RecordingNavigator};

    const WITH_TWO_SUBMENUS: [MenuItem; 3] = [
        MenuItem::new("Accueil", PageId::Home),
        MenuItem::with_submenu(
            "Actualités",
            PageId::News,
            &[
                SubmenuEntry {
                    label: "Images du jour",
                    page: PageId::Photo,
                },
                SubmenuEntry {
                    label: "Analyses",
                    page: PageId::Analysis,
                },
                SubmenuEntry {
                    label: "Articles",
                    page: PageId::Article,
                },
            ],
        ),
        MenuItem::with_submenu(
            "Vidéos",
            PageId::Video,
            &[SubmenuEntry {
                label: "Documentaires",
                page: PageId::Documentary,
            }],
        ),
    ];

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    fn nav() -> NavigationController {
        NavigationController::new(&WITH_TWO_SUBMENUS, PageId::Home)
    }

    fn entry(page: PageId, index: usize) -> ElementId {
        ElementId::SubmenuEntry { page, index }
    }

    #[test]
    fn test_nav_starts_closed() {
        let nav = NavigationController::new(&MENU, PageId::Home);
        assert_eq!(nav.state(), MenuState::default());
        assert_eq!(nav.current_page(), PageId::Home);
    }

    #[test]
    fn test_toggle_mobile_menu_flips() {
        let mut nav = nav();
        nav.toggle_mobile_menu();
        assert!(nav.state().menu_open);
        nav.toggle_mobile_menu();
        assert!(!nav.state().menu_open);
    }

    #[test]
    fn test_toggle_search_flips() {
        let mut nav = nav();
        nav.toggle_search();
        assert!(nav.state().search_open);
        nav.toggle_search();
        assert!(!nav.state().search_open);
    }

    #[test]
    fn test_toggle_submenu_twice_restores_initial_state() {
        let mut nav = nav();
        let initial = nav.state();
        assert!(nav.toggle_submenu(PageId::News, Gesture::Pointer, at(0)));
        assert!(!nav.toggle_submenu(PageId::News, Gesture::Pointer, at(1)));
        assert_eq!(nav.state(), initial);
    }

    #[test]
    fn test_opening_second_submenu_replaces_first() {
        let mut nav = nav();
        nav.toggle_submenu(PageId::News, Gesture::Pointer, at(0));
        nav.toggle_submenu(PageId::Video, Gesture::Pointer, at(1));
        assert!(!nav.is_expanded(PageId::News));
        assert!(nav.is_expanded(PageId::Video));
    }

    #[test]
    fn test_item_without_submenu_never_active() {
        let mut nav = nav();
        nav.hover_submenu(PageId::Home);
        assert_eq!(nav.state().active_submenu, None);
        assert!(!nav.toggle_submenu(PageId::Home, Gesture::Keyboard, at(0)));
        assert_eq!(nav.state().active_submenu, None);
        assert_eq!(nav.pending_focus(), None);
    }

    #[test]
    fn test_hover_then_leave_closes_click_opened_submenu() {
        let mut nav = nav();
        nav.toggle_submenu(PageId::News, Gesture::Pointer, at(0));
        nav.hover_submenu(PageId::News);
        nav.unhover_submenu();
        assert_eq!(nav.state().active_submenu, None);
    }

    #[test]
    fn test_click_after_hover_closes() {
        // Hover opens, the click that follows toggles it shut: last writer wins.
        let mut nav = nav();
        nav.hover_submenu(PageId::News);
        assert!(!nav.toggle_submenu(PageId::News, Gesture::Pointer, at(0)));
        assert_eq!(nav.state().active_submenu, None);
    }

    #[test]
    fn test_pointer_open_schedules_no_focus() {
        let mut nav = nav();
        nav.toggle_submenu(PageId::News, Gesture::Pointer, at(0));
        assert_eq!(nav.pending_focus(), None);
    }

    #[test]
    fn test_keyboard_open_focuses_first_entry_after_paint() {
        let mut nav = nav();
        let mut doc = MockDocument::new();

        nav.toggle_submenu(PageId::News, Gesture::Keyboard, at(0));
        assert_eq!(nav.pending_focus(), Some(entry(PageId::News, 0)));

        // The paint mounts the entries, then the deferred move runs.
        doc.insert(entry(PageId::News, 0));
        assert!(nav.poll(at(0), &mut doc));
        assert_eq!(doc.focused(), Some(entry(PageId::News, 0)));
        assert_eq!(nav.pending_focus(), None);
    }

    #[test]
    fn test_deferred_focus_on_missing_target_is_dropped() {
        let mut nav = nav();
        let mut doc = MockDocument::new();
        nav.toggle_submenu(PageId::News, Gesture::Keyboard, at(0));
        assert!(!nav.poll(at(0), &mut doc));
        assert_eq!(doc.focused(), None);
        // Dropped, not retried.
        doc.insert(entry(PageId::News, 0));
        assert!(!nav.poll(at(10), &mut doc));
    }

    #[test]
    fn test_superseding_open_cancels_pending_focus() {
        let mut nav = nav();
        let mut doc = MockDocument::new();
        doc.insert(entry(PageId::News, 0));
        doc.insert(entry(PageId::Video, 0));

        nav.toggle_submenu(PageId::News, Gesture::Keyboard, at(0));
        nav.hover_submenu(PageId::Video);
        assert!(!nav.poll(at(0), &mut doc));
        assert_eq!(doc.focus_requests(), 0);
    }

    #[test]
    fn test_arrow_navigation_clamps_without_wraparound() {
        let mut nav = nav();
        let mut doc = MockDocument::new();
        for index in 0..3 {
            doc.insert(entry(PageId::News, index));
        }
        nav.toggle_submenu(PageId::News, Gesture::Pointer, at(0));

        assert_eq!(
            nav.navigate_submenu_item(PageId::News, Direction::Down, 1, &mut doc),
            Some(2)
        );
        assert_eq!(doc.focused(), Some(entry(PageId::News, 2)));
        assert_eq!(
            nav.navigate_submenu_item(PageId::News, Direction::Down, 2, &mut doc),
            Some(2)
        );
        assert_eq!(
            nav.navigate_submenu_item(PageId::News, Direction::Up, 0, &mut doc),
            Some(0)
        );
        assert_eq!(doc.focused(), Some(entry(PageId::News, 0)));
        assert!(nav.is_expanded(PageId::News));
    }

    #[test]
    fn test_arrow_navigation_requires_open_submenu() {
        let nav = nav();
        let mut doc = MockDocument::new();
        assert_eq!(
            nav.navigate_submenu_item(PageId::News, Direction::Down, 0, &mut doc),
            None
        );
        assert_eq!(doc.focus_requests(), 0);
    }

    #[test]
    fn test_next_submenu_index_single_entry() {
        assert_eq!(next_submenu_index(Direction::Down, 0, 1), 0);
        assert_eq!(next_submenu_index(Direction::Up, 0, 1), 0);
    }

    #[test]
    fn test_escape_in_menubar_keeps_mobile_panel() {
        let mut nav = nav();
        nav.toggle_mobile_menu();
        nav.toggle_submenu(PageId::News, Gesture::Pointer, at(0));
        nav.close_on_escape(EscapeScope::Menubar);
        assert_eq!(nav.state().active_submenu, None);
        assert!(nav.state().menu_open);
    }

    #[test]
    fn test_escape_in_mobile_panel_closes_panel() {
        let mut nav = nav();
        nav.toggle_mobile_menu();
        nav.toggle_submenu(PageId::News, Gesture::Pointer, at(0));
        nav.close_on_escape(EscapeScope::MobilePanel);
        assert_eq!(nav.state().active_submenu, None);
        assert!(!nav.state().menu_open);
    }

    #[test]
    fn test_escape_scope_from_element() {
        assert_eq!(
            EscapeScope::of(entry(PageId::News, 0)),
            Some(EscapeScope::Menubar)
        );
        assert_eq!(
            EscapeScope::of(ElementId::MobileItem(PageId::Home)),
            Some(EscapeScope::MobilePanel)
        );
        assert_eq!(EscapeScope::of(ElementId::SearchToggle), None);
    }

    #[test]
    fn test_select_item_navigates_and_closes() {
        let mut nav = nav();
        let mut navigator = RecordingNavigator::new();
        nav.toggle_mobile_menu();
        nav.toggle_submenu(PageId::News, Gesture::Pointer, at(0));

        nav.select_item(PageId::Photo, &mut navigator);
        assert_eq!(navigator.visits(), &[PageId::Photo]);
        assert_eq!(nav.state().active_submenu, None);
        assert!(!nav.state().menu_open);
        assert_eq!(nav.current_page(), PageId::Photo);
    }

    #[test]
    fn test_submenu_trigger_current_when_entry_current() {
        let mut nav = nav();
        nav.set_current_page(PageId::Photo);
        assert!(nav.is_current(PageId::Photo));
        assert!(nav.is_current(PageId::News));
        assert!(!nav.is_current(PageId::Home));
    }
}
