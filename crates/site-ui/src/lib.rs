//! Front-page widgets bound to the interaction controllers.
//!
//! Widgets render into an accessibility tree ([`a11y::Node`]) rather than
//! pixels, and a headless [`Session`] drives them through the same
//! event → commit → render → deferred-work cycle a browser would.
//!
//! # Quick start
//!
//! ```no_run
//! use platform::{Duration, ElementId};
//! use site_ui::prelude::*;
//!
//! let mut session = Session::front_page(PageConfig::default()).unwrap();
//! session.click(ElementId::SearchToggle).unwrap();
//! session.advance(Duration::from_millis(6_000));
//! assert_eq!(session.root().hero().carousel().index(), 1);
//! ```

#![warn(clippy::all)]
#![warn(clippy::print_stdout)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::module_name_repetitions)]

pub mod a11y;
pub mod header;
pub mod hero;
pub mod page;
pub mod session;
pub mod widget;

pub use a11y::{Node, Query, QueryError, Role};
pub use header::Header;
pub use hero::{HeroConfig, MultimediaHero};
pub use page::{FrontPage, PageConfig};
pub use session::{RenderedDocument, Session, SessionError};
pub use widget::{EventContext, Widget};

pub mod prelude {
    //! Everything needed to build and drive a page.
    pub use crate::a11y::{Node, Query, Role};
    pub use crate::header::Header;
    pub use crate::hero::{HeroConfig, MultimediaHero};
    pub use crate::page::{FrontPage, PageConfig};
    pub use crate::session::Session;
    pub use crate::widget::{EventContext, Widget};
}
