//! Rendered-document abstraction (focus and existence checks)

use core::fmt;

use crate::element::ElementId;

/// The rendered element tree as seen by controllers.
///
/// Deferred work (a focus move scheduled before the next paint) must check
/// that its target still exists; [`Document::focus`] performs that check.
pub trait Document {
    /// Whether an element with this id is currently rendered.
    fn contains(&self, id: ElementId) -> bool;

    /// Move keyboard focus to `id`.
    ///
    /// Fails with [`FocusError::Missing`] when the element is not rendered;
    /// focus is left unchanged in that case.
    fn focus(&mut self, id: ElementId) -> Result<(), FocusError>;

    /// The element that currently holds keyboard focus.
    fn focused(&self) -> Option<ElementId>;
}

/// Focus errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusError {
    /// The target element is not in the rendered tree
    Missing(ElementId),
}

#[cfg(any(test, feature = "std"))]
impl std::error::Error for FocusError {}

impl fmt::Display for FocusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(id) => write!(f, "element #{id} is not rendered"),
        }
    }
}
