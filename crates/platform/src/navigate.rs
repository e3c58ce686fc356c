//! Page-navigation collaborator

use crate::page::PageId;

/// Switches the displayed page.
///
/// Consumed, never implemented, by the controllers. Assumed to always
/// succeed from their perspective.
pub trait Navigate {
    /// Navigate to `page`.
    fn navigate(&mut self, page: PageId);
}

impl<F> Navigate for F
where
    F: FnMut(PageId),
{
    fn navigate(&mut self, page: PageId) {
        self(page);
    }
}
