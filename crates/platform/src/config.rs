//! Application configuration and constants
//!
//! Central configuration values used across the front page. Branding,
//! timing, and capacity limits should reference these constants rather than
//! hardcoding values.

use embassy_time::Duration;

/// The site name shown next to the logo
pub const SITE_NAME: &str = "Œil du Public";

/// The tagline shown under the site name
pub const SITE_TAGLINE: &str = "Journalisme citoyen";

/// Period of the carousel autoplay timer.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(6_000);

/// Delay between opening the video modal and issuing `play`.
///
/// The media element is mounted by the render commit that follows the state
/// change, so an immediate play would hit a detached handle.
pub const PLAY_DELAY: Duration = Duration::from_millis(50);

/// Delay before moving focus into a freshly opened submenu.
///
/// Zero means "after the next paint": the session polls deferred work only
/// once the new tree is rendered.
pub const FOCUS_DELAY: Duration = Duration::from_millis(0);

/// Maximum number of slides a hero carousel accepts.
pub const MAX_SLIDES: usize = 8;
