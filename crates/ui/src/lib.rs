//! Front-page interaction state: header navigation, hero carousel, static
//! content and the accessibility labels both are rendered with.
//!
//! This crate is `no_std` by default; it only uses `core` and the platform
//! seams. Enable `std` for `std::error::Error` impls.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod carousel;
pub mod content;
pub mod labels;
pub mod navigation;

pub use carousel::{CarouselController, CarouselError, Slide};
pub use navigation::{
    Direction, EscapeScope, Gesture, MenuItem, MenuState, NavigationController, SubmenuEntry,
};
