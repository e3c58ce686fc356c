//! Playback state machine.
//!
//! `PlaybackEngine` is a pure, `no_std`, allocation-free state machine that
//! tracks whether a media element is stopped, playing, or paused, as well as
//! the current position within the loaded media.
//!
//! It has **no** I/O: it does not decode or render anything. The
//! [`VideoElement`](crate::video::VideoElement) wraps it with a mount
//! lifecycle and exposes it through [`platform::MediaHandle`].

use core::fmt;

/// Current playback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Nothing is playing and the position is at the start.
    Stopped,
    /// Media is actively playing.
    Playing,
    /// Playback is suspended; position is preserved.
    Paused,
}

/// Errors returned by `PlaybackEngine` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackError {
    /// The operation requires a playing or paused engine, but it is stopped.
    NotPlaying,
    /// The engine is already playing; calling `play()` again is rejected.
    AlreadyPlaying,
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPlaying => write!(f, "playback is stopped"),
            Self::AlreadyPlaying => write!(f, "playback is already running"),
        }
    }
}

#[cfg(any(test, feature = "std"))]
impl std::error::Error for PlaybackError {}

/// Pure state machine for media playback control.
///
/// All fields are private; state is mutated only through the method API.
pub struct PlaybackEngine {
    state: PlaybackState,
    position_ms: u64,
    duration_ms: u64,
}

impl PlaybackEngine {
    /// Create a new engine in the `Stopped` state with unknown duration.
    ///
    /// Use [`with_duration`] when the media length is known so that seeking
    /// and progress clamp correctly.
    ///
    /// [`with_duration`]: PlaybackEngine::with_duration
    pub fn new() -> Self {
        Self {
            state: PlaybackState::Stopped,
            position_ms: 0,
            duration_ms: u64::MAX,
        }
    }

    /// Create a new engine with a known media duration in milliseconds.
    pub fn with_duration(duration_ms: u64) -> Self {
        Self {
            state: PlaybackState::Stopped,
            position_ms: 0,
            duration_ms,
        }
    }

    /// Start or resume playback.
    ///
    /// Transitions:
    /// - `Stopped  → Playing`  ✓
    /// - `Paused   → Playing`  ✓
    /// - `Playing  → Playing`  returns `Err(AlreadyPlaying)`
    ///
    /// # Errors
    ///
    /// Returns `Err(PlaybackError::AlreadyPlaying)` when already playing.
    pub fn play(&mut self) -> Result<(), PlaybackError> {
        match self.state {
            PlaybackState::Playing => Err(PlaybackError::AlreadyPlaying),
            PlaybackState::Stopped | PlaybackState::Paused => {
                self.state = PlaybackState::Playing;
                Ok(())
            }
        }
    }

    /// Pause playback, preserving the current position.
    ///
    /// Transitions:
    /// - `Playing → Paused`  ✓
    /// - `Stopped → —`       returns `Err(NotPlaying)`
    /// - `Paused  → Paused`  idempotent, returns `Ok(())`
    ///
    /// # Errors
    ///
    /// Returns `Err(PlaybackError::NotPlaying)` when in the `Stopped` state.
    pub fn pause(&mut self) -> Result<(), PlaybackError> {
        match self.state {
            PlaybackState::Stopped => Err(PlaybackError::NotPlaying),
            PlaybackState::Playing | PlaybackState::Paused => {
                self.state = PlaybackState::Paused;
                Ok(())
            }
        }
    }

    /// Stop playback and reset position to zero.
    ///
    /// Stopping an already-stopped engine is a no-op.
    pub fn stop(&mut self) {
        self.state = PlaybackState::Stopped;
        self.position_ms = 0;
    }

    /// Seek to the given position (milliseconds from the start).
    ///
    /// The position is clamped to `[0, duration_ms]`.
    pub fn seek_ms(&mut self, ms: u64) {
        self.position_ms = ms.min(self.duration_ms);
    }

    /// Let `elapsed_ms` of playback happen.
    ///
    /// Only a playing engine moves. Reaching the end pauses at the end, the
    /// way a `<video>` element without `loop` does.
    pub fn advance(&mut self, elapsed_ms: u64) {
        if self.state != PlaybackState::Playing {
            return;
        }
        self.position_ms = self
            .position_ms
            .saturating_add(elapsed_ms)
            .min(self.duration_ms);
        if self.position_ms == self.duration_ms {
            self.state = PlaybackState::Paused;
        }
    }

    /// Return the current playback position in milliseconds.
    pub fn position_ms(&self) -> u64 {
        self.position_ms
    }

    /// Return the current [`PlaybackState`].
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Return the media duration in milliseconds.
    ///
    /// Returns `u64::MAX` when no duration has been set.
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }
}

impl Default for PlaybackEngine {
    fn default() -> Self {
        Self::new()
    }
}
