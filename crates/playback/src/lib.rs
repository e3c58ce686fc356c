//! Media playback for the hero video modal: engine, mountable element and modal controller
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(clippy::unwrap_used)]

pub mod engine;
pub mod modal;
pub mod video;

pub use modal::ModalPlaybackController;
pub use video::VideoElement;
