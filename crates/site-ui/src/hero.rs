//! Multimedia hero: slide carousel, call-to-action and the video modal.

use platform::config::AUTOPLAY_INTERVAL;
use platform::{Document, Duration, ElementId, InputEvent, Instant, Key, MediaHandle};
use playback::engine::PlaybackState;
use playback::{ModalPlaybackController, VideoElement};
use ui::carousel::{CarouselController, CarouselError, Slide};
use ui::content::{Cta, DEFAULT_CTA, SLIDES};
use ui::labels;

use crate::a11y::{Node, Role};
use crate::widget::{EventContext, Widget};

/// Hero configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroConfig {
    /// Slides, in order. A single slide renders the static variant.
    pub slides: &'static [Slide],
    /// Primary call-to-action.
    pub cta: Cta,
    /// Autoplay period.
    pub autoplay_interval: Duration,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            slides: &SLIDES,
            cta: DEFAULT_CTA,
            autoplay_interval: AUTOPLAY_INTERVAL,
        }
    }
}

impl HeroConfig {
    /// Single-slide hero: no carousel controls, no autoplay.
    pub fn single(slide: &'static Slide, cta: Cta) -> Self {
        Self {
            slides: core::slice::from_ref(slide),
            cta,
            ..Self::default()
        }
    }

    /// Replace the call-to-action.
    pub fn with_cta(mut self, cta: Cta) -> Self {
        self.cta = cta;
        self
    }
}

/// The hero widget.
pub struct MultimediaHero {
    carousel: CarouselController,
    modal: ModalPlaybackController<VideoElement>,
    cta: Cta,
    clock: Instant,
}

impl MultimediaHero {
    /// Build the hero at `now`; autoplay starts immediately.
    pub fn new(config: HeroConfig, now: Instant) -> Result<Self, CarouselError> {
        let carousel =
            CarouselController::with_interval(config.slides, config.autoplay_interval, now)?;
        Ok(Self {
            carousel,
            modal: ModalPlaybackController::new(VideoElement::new()),
            cta: config.cta,
            clock: now,
        })
    }

    /// The carousel controller.
    pub fn carousel(&self) -> &CarouselController {
        &self.carousel
    }

    /// The modal controller and the video element it owns.
    pub fn modal(&self) -> &ModalPlaybackController<VideoElement> {
        &self.modal
    }

    /// Mutable modal access, for hosts simulating media progress.
    pub fn modal_mut(&mut self) -> &mut ModalPlaybackController<VideoElement> {
        &mut self.modal
    }

    fn render_slide(&self, index: usize, slide: &Slide) -> Node {
        let active = index == self.carousel.index();
        Node::new(Role::Group)
            .id(ElementId::Slide(index))
            .attr("aria-roledescription", "slide")
            .flag("aria-hidden", !active)
            .child(
                Node::new(Role::Img)
                    .attr("src", slide.poster_image)
                    .attr("alt", slide.title)
                    .flag("data-fallback", true),
            )
            .child(Node::new(Role::Heading).text(slide.title))
            .child(Node::new(Role::Text).text(slide.caption))
            .child(
                Node::new(Role::Button)
                    .id(ElementId::Watch(index))
                    .label(format!("{} {}", labels::WATCH_PREFIX, slide.title)),
            )
    }

    fn render_controls(&self) -> impl Iterator<Item = Node> {
        let autoplay = self.carousel.autoplay();
        let toggle_label = if autoplay {
            labels::PAUSE_AUTOPLAY
        } else {
            labels::RESUME_AUTOPLAY
        };
        [
            Node::new(Role::Button)
                .id(ElementId::PreviousSlide)
                .label(labels::PREVIOUS_SLIDE),
            Node::new(Role::Button)
                .id(ElementId::NextSlide)
                .label(labels::NEXT_SLIDE),
            Node::new(Role::Button)
                .id(ElementId::AutoplayToggle)
                .label(toggle_label)
                .flag("aria-pressed", !autoplay),
        ]
        .into_iter()
    }

    fn render_dialog(&self) -> Node {
        let video = self.modal.handle();
        let state = match video.state() {
            PlaybackState::Stopped => "stopped",
            PlaybackState::Playing => "playing",
            PlaybackState::Paused => "paused",
        };
        let mut media = Node::new(Role::Video)
            .id(ElementId::Video)
            .text(labels::VIDEO_FALLBACK)
            .attr("controls", "true")
            .attr("data-state", state)
            .attr("data-position-ms", video.position_ms());
        if let Some(source) = self.modal.source() {
            media = media.attr("src", source);
        }
        Node::new(Role::Dialog)
            .id(ElementId::Dialog)
            .attr("aria-modal", "true")
            .child(
                Node::new(Role::Button)
                    .id(ElementId::CloseVideo)
                    .label(labels::CLOSE_VIDEO),
            )
            .child(media)
    }
}

impl Widget for MultimediaHero {
    fn render(&self) -> Node {
        let slides = self
            .carousel
            .slides()
            .iter()
            .enumerate()
            .map(|(index, slide)| self.render_slide(index, slide));
        let track = Node::new(Role::Group)
            .id(ElementId::SlideTrack)
            .attr("data-offset-percent", self.carousel.track_offset_percent())
            .children(slides);

        let mut region = Node::new(Role::Region)
            .id(ElementId::Hero)
            .label(labels::HERO_REGION)
            .child(track);
        if self.carousel.has_controls() {
            region = region.children(self.render_controls());
        }
        region = region
            .child(
                Node::new(Role::Button)
                    .id(ElementId::HeroCta)
                    .label(self.cta.label),
            )
            .child(
                Node::new(Role::Button)
                    .id(ElementId::HeroVideoButton)
                    .label(labels::WATCH_FEATURE),
            );
        if self.modal.is_open() {
            region = region.child(self.render_dialog());
        }
        region
    }

    fn handle(&mut self, target: ElementId, event: InputEvent, cx: &mut EventContext<'_>) -> bool {
        let now = cx.now;
        match (target, event) {
            (ElementId::Watch(index), InputEvent::Click) => {
                self.carousel.watch(index, &mut self.modal, now);
                true
            }
            (ElementId::PreviousSlide, InputEvent::Click) => {
                self.carousel.previous();
                true
            }
            (ElementId::NextSlide, InputEvent::Click) => {
                self.carousel.next();
                true
            }
            (ElementId::AutoplayToggle, InputEvent::Click) => {
                self.carousel.toggle_autoplay(now);
                true
            }
            (ElementId::HeroCta, InputEvent::Click) => {
                cx.navigator.navigate(self.cta.page);
                true
            }
            (ElementId::HeroVideoButton, InputEvent::Click) => {
                self.carousel.open_active(&mut self.modal, now);
                true
            }
            (ElementId::CloseVideo, InputEvent::Click)
            | (
                ElementId::Dialog | ElementId::CloseVideo | ElementId::Video,
                InputEvent::KeyDown(Key::Escape),
            ) => {
                if !self.modal.is_open() {
                    return false;
                }
                self.modal.close();
                true
            }
            _ => false,
        }
    }

    fn commit(&mut self) {
        match self.modal.source() {
            Some(source) if self.modal.is_open() => self.modal.handle_mut().mount(source),
            _ => self.modal.handle_mut().unmount(),
        }
    }

    fn poll(&mut self, now: Instant, _document: &mut dyn Document) {
        if let Some(elapsed) = now.checked_duration_since(self.clock) {
            self.modal.handle_mut().advance(elapsed.as_millis());
        }
        self.clock = now;
        self.carousel.tick(now);
        self.modal.poll(now);
    }

    fn teardown(&mut self) {
        self.carousel.teardown();
        if self.modal.is_open() {
            self.modal.close();
        }
        self.modal.handle_mut().unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::a11y::Query;
    use platform::mocks::{MockDocument, RecordingNavigator};
    use platform::PageId;

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    fn click(hero: &mut MultimediaHero, target: ElementId, now: Instant) -> bool {
        let mut navigator = RecordingNavigator::new();
        let mut document = MockDocument::new();
        let mut cx = EventContext {
            now,
            navigator: &mut navigator,
            document: &mut document,
        };
        let handled = hero.handle(target, InputEvent::Click, &mut cx);
        hero.commit();
        handled
    }

    fn hero() -> MultimediaHero {
        MultimediaHero::new(HeroConfig::default(), at(0)).unwrap()
    }

    #[test]
    fn test_renders_carousel_controls_and_headings() {
        let tree = hero().render();
        assert!(tree.query_one(&Query::Label("Précédent")).is_ok());
        assert!(tree.query_one(&Query::Label("Suivant")).is_ok());
        assert_eq!(tree.query_all(&Query::Role(Role::Heading)).len(), 3);
        assert_eq!(tree.query_all(&Query::LabelPrefix("Regarder")).len(), 3);
        assert_eq!(tree.label.as_deref(), Some(labels::HERO_REGION));
    }

    #[test]
    fn test_slide_images_carry_fallback_flag() {
        let tree = hero().render();
        let images = tree.query_all(&Query::Role(Role::Img));
        assert_eq!(images.len(), 3);
        for (img, slide) in images.iter().zip(SLIDES.iter()) {
            assert_eq!(img.get_attr("src"), Some(slide.poster_image));
            assert_eq!(img.get_attr("alt"), Some(slide.title));
            assert_eq!(img.get_attr("data-fallback"), Some("true"));
        }
    }

    #[test]
    fn test_track_offset_follows_index() {
        let mut hero = hero();
        click(&mut hero, ElementId::NextSlide, at(10));
        let tree = hero.render();
        let track = tree.find_by_id(ElementId::SlideTrack).unwrap();
        assert_eq!(track.get_attr("data-offset-percent"), Some("100"));
        let slide = tree.find_by_id(ElementId::Slide(1)).unwrap();
        assert_eq!(slide.get_attr("aria-hidden"), Some("false"));
    }

    #[test]
    fn test_autoplay_toggle_label_and_pressed_state() {
        let mut hero = hero();
        let tree = hero.render();
        let toggle = tree.query_one(&Query::Label(labels::PAUSE_AUTOPLAY)).unwrap();
        assert_eq!(toggle.get_attr("aria-pressed"), Some("false"));

        click(&mut hero, ElementId::AutoplayToggle, at(10));
        let tree = hero.render();
        let toggle = tree.query_one(&Query::Label(labels::RESUME_AUTOPLAY)).unwrap();
        assert_eq!(toggle.get_attr("aria-pressed"), Some("true"));
    }

    #[test]
    fn test_watch_opens_dialog_and_mounts_video() {
        let mut hero = hero();
        assert!(click(&mut hero, ElementId::Watch(1), at(0)));
        assert_eq!(hero.carousel().index(), 1);
        assert!(hero.modal().handle().is_mounted());
        assert_eq!(hero.modal().handle().source(), Some(SLIDES[1].media_source));

        let tree = hero.render();
        let dialog = tree.query_one(&Query::Role(Role::Dialog)).unwrap();
        assert_eq!(dialog.get_attr("aria-modal"), Some("true"));
    }

    #[test]
    fn test_deferred_play_then_close_rewinds() {
        let mut hero = hero();
        let mut document = MockDocument::new();
        click(&mut hero, ElementId::HeroVideoButton, at(0));
        hero.poll(at(50), &mut document);
        assert!(hero.modal().handle().is_playing());
        hero.poll(at(2_050), &mut document);
        assert_eq!(hero.modal().handle().position_ms(), 2_000);

        click(&mut hero, ElementId::CloseVideo, at(2_050));
        assert!(!hero.modal().is_open());
        assert!(!hero.modal().handle().is_mounted());
        assert_eq!(hero.modal().handle().position_ms(), 0);
        assert!(hero.render().query_one(&Query::Role(Role::Dialog)).is_err());
    }

    #[test]
    fn test_cta_navigates() {
        let mut hero = hero();
        let mut navigator = RecordingNavigator::new();
        let mut document = MockDocument::new();
        let mut cx = EventContext {
            now: at(0),
            navigator: &mut navigator,
            document: &mut document,
        };
        assert!(hero.handle(ElementId::HeroCta, InputEvent::Click, &mut cx));
        assert_eq!(navigator.visits(), &[PageId::Investigation]);
    }

    static FEATURE: Slide = SLIDES[0];

    #[test]
    fn test_single_slide_hides_controls() {
        let config = HeroConfig::single(
            &FEATURE,
            Cta {
                label: "Voir le dossier",
                page: PageId::Documentary,
            },
        );
        let mut hero = MultimediaHero::new(config, at(0)).unwrap();
        let tree = hero.render();
        assert!(tree.query_one(&Query::Label("Précédent")).is_err());
        assert!(tree.query_one(&Query::Label("Suivant")).is_err());
        assert!(tree.query_one(&Query::Label(labels::PAUSE_AUTOPLAY)).is_err());
        assert!(tree.query_one(&Query::Label("Voir le dossier")).is_ok());

        let mut document = MockDocument::new();
        hero.poll(at(60_000), &mut document);
        assert_eq!(hero.carousel().index(), 0);
    }

    #[test]
    fn test_teardown_stops_autoplay_and_modal() {
        let mut hero = hero();
        click(&mut hero, ElementId::Watch(0), at(0));
        hero.teardown();
        assert!(!hero.carousel().timer_armed());
        assert!(!hero.modal().is_open());
        assert!(!hero.modal().handle().is_mounted());
    }
}
