//! Video modal controller.
//!
//! Owns the modal's open state and, exclusively, the media handle shown
//! inside it. The handle is only ever playing while the modal is open:
//!
//! - [`open`](ModalPlaybackController::open) flips the state and schedules
//!   `play` [`PLAY_DELAY`] later, because the media element is mounted by
//!   the render commit that follows the state change.
//! - [`close`](ModalPlaybackController::close) pauses and rewinds *before*
//!   clearing the state, while the handle is still reachable.
//!
//! Commands on a detached handle are dropped; nothing here can fail.

use platform::config::PLAY_DELAY;
use platform::{Duration, Instant, MediaHandle, OneShot};

/// Open/close state of the video modal plus the media handle it drives.
pub struct ModalPlaybackController<M> {
    handle: M,
    open: bool,
    source: Option<&'static str>,
    pending_play: OneShot<()>,
    play_delay: Duration,
}

impl<M: MediaHandle> ModalPlaybackController<M> {
    /// Create a closed modal owning `handle`.
    pub fn new(handle: M) -> Self {
        Self::with_play_delay(handle, PLAY_DELAY)
    }

    /// Create a closed modal with a custom deferred-play delay.
    pub fn with_play_delay(handle: M, play_delay: Duration) -> Self {
        Self {
            handle,
            open: false,
            source: None,
            pending_play: OneShot::new(),
            play_delay,
        }
    }

    /// Open the modal on `media_source` and schedule playback.
    ///
    /// Opening while already open switches the source and re-schedules play.
    pub fn open(&mut self, media_source: &'static str, now: Instant) {
        self.open = true;
        self.source = Some(media_source);
        self.pending_play.schedule(now, self.play_delay, ());
        tracing::debug!(source = media_source, "video modal opened");
    }

    /// Pause, rewind, then close.
    ///
    /// The handle is commanded first: once the modal is closed its media
    /// element is unmounted and can no longer be reached.
    pub fn close(&mut self) {
        self.pending_play.cancel();
        if let Err(err) = self.handle.pause() {
            tracing::debug!(%err, "pause dropped");
        }
        if let Err(err) = self.handle.seek_ms(0) {
            tracing::debug!(%err, "rewind dropped");
        }
        self.open = false;
        self.source = None;
        tracing::debug!("video modal closed");
    }

    /// Fire the deferred play if it is due. Returns `true` when the handle
    /// accepted the command.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.pending_play.take_due(now).is_none() {
            return false;
        }
        if !self.open {
            // Stale: the modal closed before the delay elapsed.
            return false;
        }
        match self.handle.play() {
            Ok(()) => {
                tracing::trace!("deferred play issued");
                true
            }
            Err(err) => {
                tracing::debug!(%err, "deferred play dropped");
                false
            }
        }
    }

    /// Whether the modal is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The media source of the open modal.
    pub fn source(&self) -> Option<&'static str> {
        self.source
    }

    /// Whether a deferred play is waiting.
    pub fn play_pending(&self) -> bool {
        self.pending_play.is_pending()
    }

    /// The owned media handle.
    pub fn handle(&self) -> &M {
        &self.handle
    }

    /// Mutable access to the owned handle, for the owning widget's
    /// mount/unmount commit step. No other component may command it.
    pub fn handle_mut(&mut self) -> &mut M {
        &mut self.handle
    }
}
