//! Playable media abstraction

use core::fmt;

/// A playable media element (the `<video>` inside the hero modal).
///
/// Every command may fail with [`MediaError::Detached`] when the element is
/// not mounted. Callers treat such failures as no-ops.
pub trait MediaHandle {
    /// Start or resume playback.
    fn play(&mut self) -> Result<(), MediaError>;

    /// Pause playback, keeping the position.
    fn pause(&mut self) -> Result<(), MediaError>;

    /// Move the playback position (milliseconds from the start).
    fn seek_ms(&mut self, position_ms: u64) -> Result<(), MediaError>;

    /// Current playback position in milliseconds.
    fn position_ms(&self) -> u64;

    /// Whether the element is currently playing.
    fn is_playing(&self) -> bool;
}

/// Media command errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaError {
    /// The element is not mounted (not yet, or no longer)
    Detached,
    /// The element refused the command (e.g. play already in progress)
    Rejected,
}

#[cfg(any(test, feature = "std"))]
impl std::error::Error for MediaError {}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Detached => write!(f, "media element is not mounted"),
            Self::Rejected => write!(f, "media element rejected the command"),
        }
    }
}
