//! Headless session: the single-threaded event loop around a root widget.
//!
//! Every dispatch runs the same cycle:
//!
//! 1. the root handles the event (state mutation only),
//! 2. commit + render ("paint"): media mounts, the tree is rebuilt and the
//!    document's element set follows it,
//! 3. deferred work due at the current instant runs against the painted
//!    document, followed by another paint.
//!
//! Zero-delay tasks therefore observe the elements the triggering event
//! made appear. Time only moves through [`Session::advance`].

use std::collections::HashSet;

use platform::{Document, Duration, ElementId, FocusError, InputEvent, Instant, Key, PageId};

use crate::a11y::{Node, Role};
use crate::page::{FrontPage, PageConfig};
use crate::widget::{EventContext, Widget};

use ui::carousel::CarouselError;

/// Dispatch failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The target is not in the painted tree.
    #[error("element {0} is not rendered")]
    Detached(ElementId),
    /// A key was pressed with nothing focused.
    #[error("no element has focus")]
    NoFocus,
}

/// The painted element set plus keyboard focus.
#[derive(Debug, Default)]
pub struct RenderedDocument {
    present: HashSet<ElementId>,
    focused: Option<ElementId>,
}

impl RenderedDocument {
    /// Follow a freshly rendered tree. Focus on a vanished element is lost.
    pub fn sync(&mut self, tree: &Node) {
        self.present = tree.ids().collect();
        if let Some(focused) = self.focused {
            if !self.present.contains(&focused) {
                tracing::trace!(element = %focused, "focused element removed");
                self.focused = None;
            }
        }
    }

    /// Number of rendered elements with an id.
    pub fn len(&self) -> usize {
        self.present.len()
    }

    /// Whether nothing with an id is rendered.
    pub fn is_empty(&self) -> bool {
        self.present.is_empty()
    }
}

impl Document for RenderedDocument {
    fn contains(&self, id: ElementId) -> bool {
        self.present.contains(&id)
    }

    fn focus(&mut self, id: ElementId) -> Result<(), FocusError> {
        if !self.present.contains(&id) {
            return Err(FocusError::Missing(id));
        }
        self.focused = Some(id);
        Ok(())
    }

    fn focused(&self) -> Option<ElementId> {
        self.focused
    }
}

/// A root widget driven by simulated time and input.
pub struct Session<W: Widget = FrontPage> {
    root: W,
    document: RenderedDocument,
    tree: Node,
    now: Instant,
    navigations: Vec<PageId>,
}

impl Session<FrontPage> {
    /// Front-page session starting at t = 0.
    pub fn front_page(config: PageConfig) -> Result<Self, CarouselError> {
        let start = Instant::from_millis(0);
        Ok(Self::new(FrontPage::new(config, start)?, start))
    }
}

impl<W: Widget> Session<W> {
    /// Start a session on `root` at `start` and paint it.
    pub fn new(root: W, start: Instant) -> Self {
        let mut session = Self {
            root,
            document: RenderedDocument::default(),
            tree: Node::new(Role::Document),
            now: start,
            navigations: Vec::new(),
        };
        session.paint();
        session
    }

    /// Dispatch `event` to `target`. Returns whether a widget consumed it.
    ///
    /// A click also moves focus to its target, as activating a control does.
    pub fn dispatch(&mut self, target: ElementId, event: InputEvent) -> Result<bool, SessionError> {
        if !self.document.contains(target) {
            return Err(SessionError::Detached(target));
        }
        if event == InputEvent::Click {
            let _ = self.document.focus(target);
        }

        let navigations = &mut self.navigations;
        let mut record = |page: PageId| navigations.push(page);
        let mut cx = EventContext {
            now: self.now,
            navigator: &mut record,
            document: &mut self.document,
        };
        let handled = self.root.handle(target, event, &mut cx);
        tracing::debug!(%target, event = event_name(event), handled, "dispatched");

        self.paint();
        self.run_due();
        Ok(handled)
    }

    /// Click `target`.
    pub fn click(&mut self, target: ElementId) -> Result<bool, SessionError> {
        self.dispatch(target, InputEvent::Click)
    }

    /// Press `key` on the focused element.
    pub fn press(&mut self, key: Key) -> Result<bool, SessionError> {
        let target = self.document.focused().ok_or(SessionError::NoFocus)?;
        self.dispatch(target, InputEvent::KeyDown(key))
    }

    /// Move keyboard focus to `target`.
    pub fn focus(&mut self, target: ElementId) -> Result<(), FocusError> {
        self.document.focus(target)
    }

    /// Let `elapsed` pass, running every timer that comes due.
    pub fn advance(&mut self, elapsed: Duration) {
        self.now = self.now.checked_add(elapsed).unwrap_or(self.now);
        self.run_due();
    }

    /// Jump to `now` (ignored if it lies in the past).
    pub fn advance_to(&mut self, now: Instant) {
        if now > self.now {
            self.now = now;
        }
        self.run_due();
    }

    /// Cancel the root's timers.
    pub fn teardown(&mut self) {
        self.root.teardown();
        self.paint();
    }

    /// The current accessibility tree.
    pub fn tree(&self) -> &Node {
        &self.tree
    }

    /// The painted document.
    pub fn document(&self) -> &RenderedDocument {
        &self.document
    }

    /// The focused element.
    pub fn focused(&self) -> Option<ElementId> {
        self.document.focused()
    }

    /// Session time.
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Pages navigated to, oldest first.
    pub fn navigations(&self) -> &[PageId] {
        &self.navigations
    }

    /// The root widget.
    pub fn root(&self) -> &W {
        &self.root
    }

    /// The root widget, mutably. Call [`Session::repaint`] after mutating.
    pub fn root_mut(&mut self) -> &mut W {
        &mut self.root
    }

    /// Commit and re-render after an out-of-band root mutation.
    pub fn repaint(&mut self) {
        self.paint();
    }

    fn paint(&mut self) {
        self.root.commit();
        self.tree = self.root.render();
        self.document.sync(&self.tree);
    }

    fn run_due(&mut self) {
        self.root.poll(self.now, &mut self.document);
        self.paint();
    }
}

fn event_name(event: InputEvent) -> &'static str {
    match event {
        InputEvent::Click => "click",
        InputEvent::PointerEnter => "pointerenter",
        InputEvent::PointerLeave => "pointerleave",
        InputEvent::KeyDown(_) => "keydown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::a11y::Query;
    use platform::MediaHandle;

    fn session() -> Session {
        Session::front_page(PageConfig::default()).unwrap()
    }

    fn entry(index: usize) -> ElementId {
        ElementId::SubmenuEntry {
            page: PageId::News,
            index,
        }
    }

    #[test]
    fn test_initial_paint_populates_document() {
        let session = session();
        assert!(session.document().contains(ElementId::Logo));
        assert!(session.document().contains(ElementId::Watch(2)));
        assert!(!session.document().contains(ElementId::Dialog));
    }

    #[test]
    fn test_dispatch_to_unrendered_element_fails() {
        let mut session = session();
        assert_eq!(
            session.click(ElementId::SearchInput),
            Err(SessionError::Detached(ElementId::SearchInput))
        );
    }

    #[test]
    fn test_press_without_focus_fails() {
        let mut session = session();
        assert_eq!(session.press(Key::Enter), Err(SessionError::NoFocus));
    }

    #[test]
    fn test_keyboard_open_focuses_first_entry_after_paint() {
        let mut session = session();
        session.focus(ElementId::MenuItem(PageId::News)).unwrap();
        assert_eq!(session.press(Key::Enter), Ok(true));
        assert_eq!(session.focused(), Some(entry(0)));
    }

    #[test]
    fn test_click_focuses_and_closes_with_escape() {
        let mut session = session();
        session.click(ElementId::MenuItem(PageId::News)).unwrap();
        assert!(session.document().contains(entry(0)));
        // Pointer open leaves focus on the trigger.
        assert_eq!(session.focused(), Some(ElementId::MenuItem(PageId::News)));

        session.press(Key::Escape).unwrap();
        assert!(!session.document().contains(entry(0)));
    }

    #[test]
    fn test_focus_lost_when_element_unmounts() {
        let mut session = session();
        session.focus(ElementId::MenuItem(PageId::News)).unwrap();
        session.press(Key::ArrowDown).unwrap();
        assert_eq!(session.focused(), Some(entry(0)));
        session.press(Key::Escape).unwrap();
        assert_eq!(session.focused(), None);
    }

    #[test]
    fn test_navigations_recorded() {
        let mut session = session();
        session.click(ElementId::Shortcut(PageId::News)).unwrap();
        session.click(ElementId::HeroCta).unwrap();
        assert_eq!(
            session.navigations(),
            &[PageId::News, PageId::Investigation]
        );
    }

    #[test]
    fn test_autoplay_wraps_after_three_periods() {
        let mut session = session();
        for expected in [1, 2, 0] {
            session.advance(Duration::from_millis(6_000));
            assert_eq!(session.root().hero().carousel().index(), expected);
        }
    }

    #[test]
    fn test_watch_plays_after_delay_and_close_rewinds() {
        let mut session = session();
        session.click(ElementId::Watch(0)).unwrap();
        assert!(session.tree().query_one(&Query::Role(Role::Dialog)).is_ok());
        let video = session.root().hero().modal().handle();
        assert!(video.is_mounted());
        assert!(!video.is_playing());

        session.advance(Duration::from_millis(50));
        assert!(session.root().hero().modal().handle().is_playing());
        session.advance(Duration::from_millis(1_000));

        session.click(ElementId::CloseVideo).unwrap();
        assert!(session.tree().query_one(&Query::Role(Role::Dialog)).is_err());
        let video = session.root().hero().modal().handle();
        assert!(!video.is_playing());
        assert_eq!(video.position_ms(), 0);
    }

    #[test]
    fn test_teardown_stops_autoplay() {
        let mut session = session();
        session.teardown();
        session.advance(Duration::from_millis(60_000));
        assert_eq!(session.root().hero().carousel().index(), 0);
    }
}
