//! The front page: header over the hero.

use platform::{Document, ElementId, InputEvent, Instant, PageId};
use ui::carousel::CarouselError;

use crate::a11y::{Node, Role};
use crate::header::Header;
use crate::hero::{HeroConfig, MultimediaHero};
use crate::widget::{EventContext, Widget};

/// Front-page configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageConfig {
    /// Page highlighted in the header.
    pub current_page: PageId,
    /// Hero configuration.
    pub hero: HeroConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            current_page: PageId::Home,
            hero: HeroConfig::default(),
        }
    }
}

/// Header and hero composed into one widget.
pub struct FrontPage {
    header: Header,
    hero: MultimediaHero,
}

impl FrontPage {
    /// Build the page at `now`.
    pub fn new(config: PageConfig, now: Instant) -> Result<Self, CarouselError> {
        Ok(Self {
            header: Header::new(config.current_page),
            hero: MultimediaHero::new(config.hero, now)?,
        })
    }

    /// The header widget.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// The header widget, mutably.
    pub fn header_mut(&mut self) -> &mut Header {
        &mut self.header
    }

    /// The hero widget.
    pub fn hero(&self) -> &MultimediaHero {
        &self.hero
    }

    /// The hero widget, mutably.
    pub fn hero_mut(&mut self) -> &mut MultimediaHero {
        &mut self.hero
    }
}

impl Widget for FrontPage {
    fn render(&self) -> Node {
        Node::new(Role::Document)
            .child(self.header.render())
            .child(Node::new(Role::Main).child(self.hero.render()))
    }

    fn handle(&mut self, target: ElementId, event: InputEvent, cx: &mut EventContext<'_>) -> bool {
        if target.in_hero() {
            self.hero.handle(target, event, cx)
        } else {
            self.header.handle(target, event, cx)
        }
    }

    fn commit(&mut self) {
        self.header.commit();
        self.hero.commit();
    }

    fn poll(&mut self, now: Instant, document: &mut dyn Document) {
        self.header.poll(now, document);
        self.hero.poll(now, document);
    }

    fn teardown(&mut self) {
        self.header.teardown();
        self.hero.teardown();
    }
}
