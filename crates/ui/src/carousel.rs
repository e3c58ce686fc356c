//! Hero carousel: slide index, autoplay timer and the hand-off to the video
//! modal.

use core::fmt;

use platform::config::{AUTOPLAY_INTERVAL, MAX_SLIDES};
use platform::{Duration, Instant, Interval, MediaHandle};
use playback::ModalPlaybackController;

/// One hero slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    /// Video played in the modal.
    pub media_source: &'static str,
    /// Background image.
    pub poster_image: &'static str,
    /// Headline, also used in the watch control's label.
    pub title: &'static str,
    /// Sub-headline.
    pub caption: &'static str,
}

/// Carousel configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselError {
    /// The slide sequence is empty.
    NoSlides,
    /// More slides than the hero lays out.
    TooManySlides(usize),
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSlides => write!(f, "carousel needs at least one slide"),
            Self::TooManySlides(count) => {
                write!(f, "{count} slides exceeds the maximum of {MAX_SLIDES}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CarouselError {}

/// Slide index plus autoplay.
///
/// The index always lies in `[0, slide_count)`. While autoplay is on and the
/// carousel has more than one slide, exactly one recurring timer is armed;
/// otherwise none is.
pub struct CarouselController {
    slides: &'static [Slide],
    index: usize,
    autoplay: bool,
    timer: Interval,
    live: bool,
}

impl CarouselController {
    /// Create a carousel on the first slide with autoplay running.
    pub fn new(slides: &'static [Slide], now: Instant) -> Result<Self, CarouselError> {
        Self::with_interval(slides, AUTOPLAY_INTERVAL, now)
    }

    /// Create a carousel with a custom autoplay period.
    pub fn with_interval(
        slides: &'static [Slide],
        period: Duration,
        now: Instant,
    ) -> Result<Self, CarouselError> {
        if slides.is_empty() {
            return Err(CarouselError::NoSlides);
        }
        if slides.len() > MAX_SLIDES {
            return Err(CarouselError::TooManySlides(slides.len()));
        }
        let mut carousel = Self {
            slides,
            index: 0,
            autoplay: slides.len() > 1,
            timer: Interval::new(period),
            live: true,
        };
        carousel.sync_timer(now);
        Ok(carousel)
    }

    /// Move to the next slide, wrapping to the first.
    pub fn advance(&mut self) {
        self.index = self
            .index
            .saturating_add(1)
            .checked_rem(self.slides.len())
            .unwrap_or(0);
    }

    /// Move to the previous slide, wrapping to the last.
    pub fn retreat(&mut self) {
        self.index = self
            .index
            .checked_sub(1)
            .unwrap_or_else(|| self.slides.len().saturating_sub(1));
    }

    /// Jump to slide `index` (taken modulo the slide count).
    pub fn go_to(&mut self, index: usize) {
        self.index = index.checked_rem(self.slides.len()).unwrap_or(0);
    }

    /// "Next" control: advance and stop autoplay.
    pub fn next(&mut self) {
        self.stop_autoplay();
        self.advance();
    }

    /// "Previous" control: retreat and stop autoplay.
    pub fn previous(&mut self) {
        self.stop_autoplay();
        self.retreat();
    }

    /// Flip autoplay. Turning it back on restarts the period from `now`.
    pub fn toggle_autoplay(&mut self, now: Instant) {
        self.set_autoplay(!self.autoplay, now);
    }

    /// Set autoplay, (re)arming or stopping the timer.
    ///
    /// A single-slide carousel never autoplays, nor does a torn-down one.
    pub fn set_autoplay(&mut self, autoplay: bool, now: Instant) {
        if !self.live {
            return;
        }
        let autoplay = autoplay && self.slides.len() > 1;
        if autoplay == self.autoplay {
            return;
        }
        self.autoplay = autoplay;
        self.sync_timer(now);
        tracing::debug!(autoplay, "carousel autoplay changed");
    }

    /// Drive the autoplay timer. Advances once per elapsed period and
    /// returns how many periods elapsed.
    pub fn tick(&mut self, now: Instant) -> u32 {
        let fired = self.timer.poll(now);
        if fired == 0 {
            return 0;
        }
        let len = self.slides.len();
        let steps = usize::try_from(fired)
            .unwrap_or(usize::MAX)
            .checked_rem(len)
            .unwrap_or(0);
        self.index = self
            .index
            .saturating_add(steps)
            .checked_rem(len)
            .unwrap_or(0);
        tracing::trace!(fired, index = self.index, "autoplay tick");
        fired
    }

    /// Select `slide` and open the modal on its video.
    ///
    /// Autoplay keeps running behind the modal.
    pub fn watch<M: MediaHandle>(
        &mut self,
        slide: usize,
        modal: &mut ModalPlaybackController<M>,
        now: Instant,
    ) {
        self.go_to(slide);
        self.open_active(modal, now);
    }

    /// Open the modal on the active slide's video.
    pub fn open_active<M: MediaHandle>(
        &self,
        modal: &mut ModalPlaybackController<M>,
        now: Instant,
    ) {
        if let Some(slide) = self.active_slide() {
            modal.open(slide.media_source, now);
        }
    }

    /// Stop the timer for good. Later ticks and autoplay changes are no-ops.
    pub fn teardown(&mut self) {
        self.live = false;
        self.autoplay = false;
        self.timer.stop();
    }

    /// Index of the active slide.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether autoplay is on.
    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    /// Whether the autoplay timer is armed.
    pub fn timer_armed(&self) -> bool {
        self.timer.is_armed()
    }

    /// The slides, in order.
    pub fn slides(&self) -> &'static [Slide] {
        self.slides
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// The active slide.
    pub fn active_slide(&self) -> Option<&'static Slide> {
        self.slides.get(self.index)
    }

    /// Whether previous/next/pause controls apply.
    pub fn has_controls(&self) -> bool {
        self.slides.len() > 1
    }

    /// Horizontal offset of the slide track, in percent of one slide.
    pub fn track_offset_percent(&self) -> usize {
        self.index.saturating_mul(100)
    }

    fn stop_autoplay(&mut self) {
        if self.autoplay {
            self.autoplay = false;
            self.timer.stop();
            tracing::debug!("carousel autoplay stopped by manual navigation");
        }
    }

    fn sync_timer(&mut self, now: Instant) {
        if self.autoplay && self.live {
            self.timer.start(now);
        } else {
            self.timer.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SLIDES;
    use platform::mocks::MockMedia;

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    fn carousel() -> CarouselController {
        CarouselController::new(&SLIDES, at(0)).expect("three slides")
    }

    const ONE: [Slide; 1] = [Slide {
        media_source: "https://media.example/one.mp4",
        poster_image: "https://media.example/one.jpg",
        title: "Seule",
        caption: "Une seule diapositive",
    }];

    const NINE: [Slide; 9] = [ONE[0]; 9];

    #[test]
    fn test_new_starts_on_first_slide_with_autoplay() {
        let carousel = carousel();
        assert_eq!(carousel.index(), 0);
        assert!(carousel.autoplay());
        assert!(carousel.timer_armed());
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(
            CarouselController::new(&[], at(0)).err(),
            Some(CarouselError::NoSlides)
        );
    }

    #[test]
    fn test_new_rejects_too_many() {
        assert_eq!(
            CarouselController::new(&NINE, at(0)).err(),
            Some(CarouselError::TooManySlides(9))
        );
    }

    #[test]
    fn test_advance_wraps() {
        let mut carousel = carousel();
        carousel.advance();
        carousel.advance();
        assert_eq!(carousel.index(), 2);
        carousel.advance();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_retreat_wraps_to_last() {
        let mut carousel = carousel();
        carousel.retreat();
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_go_to_takes_modulo() {
        let mut carousel = carousel();
        carousel.go_to(4);
        assert_eq!(carousel.index(), 1);
        assert_eq!(carousel.track_offset_percent(), 100);
    }

    #[test]
    fn test_manual_next_stops_autoplay() {
        let mut carousel = carousel();
        carousel.next();
        assert_eq!(carousel.index(), 1);
        assert!(!carousel.autoplay());
        assert!(!carousel.timer_armed());
        assert_eq!(carousel.tick(at(60_000)), 0);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_manual_previous_stops_autoplay() {
        let mut carousel = carousel();
        carousel.previous();
        assert_eq!(carousel.index(), 2);
        assert!(!carousel.autoplay());
    }

    #[test]
    fn test_tick_advances_each_period() {
        let mut carousel = carousel();
        assert_eq!(carousel.tick(at(5_999)), 0);
        assert_eq!(carousel.tick(at(6_000)), 1);
        assert_eq!(carousel.index(), 1);
        assert_eq!(carousel.tick(at(18_000)), 2);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_toggle_off_then_on_restarts_period() {
        let mut carousel = carousel();
        carousel.toggle_autoplay(at(1_000));
        assert!(!carousel.timer_armed());
        carousel.toggle_autoplay(at(4_000));
        assert!(carousel.timer_armed());
        assert_eq!(carousel.tick(at(6_000)), 0);
        assert_eq!(carousel.tick(at(10_000)), 1);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_teardown_stops_ticks() {
        let mut carousel = carousel();
        carousel.teardown();
        assert!(!carousel.timer_armed());
        carousel.toggle_autoplay(at(0));
        carousel.toggle_autoplay(at(0));
        assert_eq!(carousel.tick(at(60_000)), 0);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_autoplay_cannot_be_resumed_after_teardown() {
        let mut carousel = carousel();
        carousel.teardown();
        assert!(!carousel.autoplay());
        carousel.set_autoplay(true, at(0));
        assert!(!carousel.autoplay());
        assert!(!carousel.timer_armed());
        assert_eq!(carousel.tick(at(60_000)), 0);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_single_slide_never_autoplays() {
        let mut carousel = CarouselController::new(&ONE, at(0)).expect("one slide");
        assert!(!carousel.has_controls());
        assert!(!carousel.autoplay());
        assert!(!carousel.timer_armed());
        carousel.toggle_autoplay(at(0));
        assert!(!carousel.timer_armed());
        carousel.advance();
        carousel.retreat();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_watch_selects_slide_and_opens_modal() {
        let mut carousel = carousel();
        let mut modal = ModalPlaybackController::new(MockMedia::new());
        carousel.watch(2, &mut modal, at(100));
        assert_eq!(carousel.index(), 2);
        assert!(modal.is_open());
        assert_eq!(modal.source(), Some(SLIDES[2].media_source));
        assert!(carousel.autoplay());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            CarouselError::NoSlides.to_string(),
            "carousel needs at least one slide"
        );
    }
}
