//! Simulated `<video>` element.
//!
//! Wraps a [`PlaybackEngine`] with the mount lifecycle of a rendered media
//! node. While detached every [`MediaHandle`] command fails with
//! [`MediaError::Detached`]; unmounting stops the engine, as removing a media
//! node from a document does.

use platform::{MediaError, MediaHandle};

use crate::engine::{PlaybackEngine, PlaybackError, PlaybackState};

/// A mountable media element backed by a [`PlaybackEngine`].
pub struct VideoElement {
    engine: PlaybackEngine,
    source: Option<&'static str>,
}

impl VideoElement {
    /// Create a detached element with unknown media duration.
    pub fn new() -> Self {
        Self {
            engine: PlaybackEngine::new(),
            source: None,
        }
    }

    /// Create a detached element whose media lasts `duration_ms`.
    pub fn with_duration(duration_ms: u64) -> Self {
        Self {
            engine: PlaybackEngine::with_duration(duration_ms),
            source: None,
        }
    }

    /// Mount the element with `source`. Mounting a different source resets
    /// playback; re-mounting the same source keeps it.
    pub fn mount(&mut self, source: &'static str) {
        if self.source != Some(source) {
            self.engine.stop();
            tracing::trace!(source, "video mounted");
        }
        self.source = Some(source);
    }

    /// Remove the element from the document. Playback stops at position 0.
    pub fn unmount(&mut self) {
        if self.source.take().is_some() {
            self.engine.stop();
            tracing::trace!("video unmounted");
        }
    }

    /// Whether the element is mounted.
    pub fn is_mounted(&self) -> bool {
        self.source.is_some()
    }

    /// The mounted media source.
    pub fn source(&self) -> Option<&'static str> {
        self.source
    }

    /// Current engine state.
    pub fn state(&self) -> PlaybackState {
        self.engine.state()
    }

    /// Simulate `elapsed_ms` of wall-clock time passing.
    pub fn advance(&mut self, elapsed_ms: u64) {
        if self.is_mounted() {
            self.engine.advance(elapsed_ms);
        }
    }

    fn attached(&mut self) -> Result<&mut PlaybackEngine, MediaError> {
        if self.is_mounted() {
            Ok(&mut self.engine)
        } else {
            Err(MediaError::Detached)
        }
    }
}

impl Default for VideoElement {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaHandle for VideoElement {
    fn play(&mut self) -> Result<(), MediaError> {
        match self.attached()?.play() {
            // Playing an already playing element is harmless.
            Ok(()) | Err(PlaybackError::AlreadyPlaying) => Ok(()),
            Err(PlaybackError::NotPlaying) => Err(MediaError::Rejected),
        }
    }

    fn pause(&mut self) -> Result<(), MediaError> {
        match self.attached()?.pause() {
            // Pausing a stopped element leaves it stopped.
            Ok(()) | Err(PlaybackError::NotPlaying) => Ok(()),
            Err(PlaybackError::AlreadyPlaying) => Err(MediaError::Rejected),
        }
    }

    fn seek_ms(&mut self, position_ms: u64) -> Result<(), MediaError> {
        self.attached()?.seek_ms(position_ms);
        Ok(())
    }

    fn position_ms(&self) -> u64 {
        self.engine.position_ms()
    }

    fn is_playing(&self) -> bool {
        self.engine.state() == PlaybackState::Playing
    }
}
