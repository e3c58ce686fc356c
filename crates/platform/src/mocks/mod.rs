//! Mock implementations for testing
//!
//! This module provides mock implementations of the platform seams
//! for use in unit and integration tests.

#![cfg(any(test, feature = "std"))]

use crate::*;

/// Mock rendered document: a set of present element ids plus focus.
pub struct MockDocument {
    present: heapless::Vec<ElementId, 64>,
    focused: Option<ElementId>,
    focus_requests: usize,
}

impl MockDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self {
            present: heapless::Vec::new(),
            focused: None,
            focus_requests: 0,
        }
    }

    /// Mark an element as rendered
    pub fn insert(&mut self, id: ElementId) {
        if !self.present.contains(&id) {
            let _ = self.present.push(id);
        }
    }

    /// Remove an element (drops focus if it held it)
    pub fn remove(&mut self, id: ElementId) {
        self.present.retain(|present| *present != id);
        if self.focused == Some(id) {
            self.focused = None;
        }
    }

    /// Number of focus requests received, successful or not
    pub fn focus_requests(&self) -> usize {
        self.focus_requests
    }
}

impl Default for MockDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for MockDocument {
    fn contains(&self, id: ElementId) -> bool {
        self.present.contains(&id)
    }

    fn focus(&mut self, id: ElementId) -> Result<(), FocusError> {
        self.focus_requests = self.focus_requests.saturating_add(1);
        if self.contains(id) {
            self.focused = Some(id);
            Ok(())
        } else {
            Err(FocusError::Missing(id))
        }
    }

    fn focused(&self) -> Option<ElementId> {
        self.focused
    }
}

/// Navigator that records every requested page
pub struct RecordingNavigator {
    visits: heapless::Vec<PageId, 32>,
}

impl RecordingNavigator {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self {
            visits: heapless::Vec::new(),
        }
    }

    /// Pages navigated to, oldest first
    pub fn visits(&self) -> &[PageId] {
        &self.visits
    }

    /// Most recent page, if any
    pub fn last(&self) -> Option<PageId> {
        self.visits.last().copied()
    }
}

impl Default for RecordingNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigate for RecordingNavigator {
    fn navigate(&mut self, page: PageId) {
        let _ = self.visits.push(page);
    }
}

/// A media command as received by [`MockMedia`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCommand {
    /// `play()`
    Play,
    /// `pause()`
    Pause,
    /// `seek_ms(position)`
    Seek(u64),
}

/// Mock media handle recording the command sequence
pub struct MockMedia {
    attached: bool,
    playing: bool,
    position_ms: u64,
    commands: heapless::Vec<MediaCommand, 32>,
}

impl MockMedia {
    /// Create an attached, paused handle at position 0
    pub fn new() -> Self {
        Self {
            attached: true,
            playing: false,
            position_ms: 0,
            commands: heapless::Vec::new(),
        }
    }

    /// Create a handle that rejects every command as detached
    pub fn detached() -> Self {
        Self {
            attached: false,
            ..Self::new()
        }
    }

    /// Move the position without recording a command (simulated progress)
    pub fn set_position_ms(&mut self, position_ms: u64) {
        self.position_ms = position_ms;
    }

    /// Commands accepted so far, oldest first
    pub fn commands(&self) -> &[MediaCommand] {
        &self.commands
    }

    fn accept(&mut self, command: MediaCommand) -> Result<(), MediaError> {
        if !self.attached {
            return Err(MediaError::Detached);
        }
        let _ = self.commands.push(command);
        Ok(())
    }
}

impl Default for MockMedia {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaHandle for MockMedia {
    fn play(&mut self) -> Result<(), MediaError> {
        self.accept(MediaCommand::Play)?;
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) -> Result<(), MediaError> {
        self.accept(MediaCommand::Pause)?;
        self.playing = false;
        Ok(())
    }

    fn seek_ms(&mut self, position_ms: u64) -> Result<(), MediaError> {
        self.accept(MediaCommand::Seek(position_ms))?;
        self.position_ms = position_ms;
        Ok(())
    }

    fn position_ms(&self) -> u64 {
        self.position_ms
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_document_focus() {
        let mut doc = MockDocument::new();
        let id = ElementId::SearchInput;

        assert_eq!(doc.focus(id), Err(FocusError::Missing(id)));
        assert_eq!(doc.focused(), None);

        doc.insert(id);
        doc.focus(id).unwrap();
        assert_eq!(doc.focused(), Some(id));

        doc.remove(id);
        assert_eq!(doc.focused(), None);
        assert_eq!(doc.focus_requests(), 2);
    }

    #[test]
    fn test_recording_navigator() {
        let mut nav = RecordingNavigator::new();
        nav.navigate(PageId::News);
        nav.navigate(PageId::Photo);
        assert_eq!(nav.visits(), &[PageId::News, PageId::Photo]);
        assert_eq!(nav.last(), Some(PageId::Photo));
    }

    #[test]
    fn test_mock_media() {
        let mut media = MockMedia::new();

        media.play().unwrap();
        assert!(media.is_playing());

        media.pause().unwrap();
        media.seek_ms(0).unwrap();
        assert!(!media.is_playing());
        assert_eq!(
            media.commands(),
            &[MediaCommand::Play, MediaCommand::Pause, MediaCommand::Seek(0)]
        );
    }

    #[test]
    fn test_mock_media_detached_rejects() {
        let mut media = MockMedia::detached();
        assert_eq!(media.play(), Err(MediaError::Detached));
        assert!(!media.is_playing());
        assert!(media.commands().is_empty());
    }
}
