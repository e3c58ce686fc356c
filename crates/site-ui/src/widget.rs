//! The widget seam between controllers and the session event loop.

use platform::{Document, ElementId, InputEvent, Instant, Navigate};

use crate::a11y::Node;

/// Collaborators available while a widget handles an input event.
pub struct EventContext<'a> {
    /// Instant the event was dispatched at.
    pub now: Instant,
    /// Page navigation collaborator.
    pub navigator: &'a mut dyn Navigate,
    /// The document as last painted (focus moves inside the same event).
    pub document: &'a mut dyn Document,
}

/// A stateful component rendered into the accessibility tree.
///
/// The session calls these in a fixed cycle per dispatch:
/// `handle` → `commit` → `render` → `poll` → `commit` → `render`.
pub trait Widget {
    /// Render the current state.
    fn render(&self) -> Node;

    /// Handle `event` targeted at `target`. Returns `true` when consumed.
    fn handle(&mut self, target: ElementId, event: InputEvent, cx: &mut EventContext<'_>) -> bool;

    /// Apply mount/unmount side effects of the last state change, before
    /// the next render.
    fn commit(&mut self) {}

    /// Run timers and deferred work due at `now`.
    fn poll(&mut self, _now: Instant, _document: &mut dyn Document) {}

    /// Cancel every timer. Called once when the widget leaves the page.
    fn teardown(&mut self) {}
}
