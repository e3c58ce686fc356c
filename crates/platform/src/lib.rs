//! Host abstraction layer for the front-page interaction core
//!
//! This crate provides the trait-based seams every controller talks through,
//! so the state machines run identically under the headless session, the
//! CLI driver, or any other rendering host.
//!
//! # Architecture Layers
//!
//! ```text
//! Driver (frontpage binary / test harness)
//!         ↓
//! Widget bindings (site-ui)
//!         ↓
//! Controllers (ui, playback)
//!         ↓
//! Platform seams (this crate - ids, events, traits, timers)
//! ```
//!
//! # Seams
//!
//! - [`Document`] - focus and existence checks on rendered elements
//! - [`MediaHandle`] - play/pause/seek on a playable media element
//! - [`Navigate`] - the page-navigation collaborator
//!
//! # Identifiers
//!
//! - [`PageId`] - destination pages
//! - [`ElementId`] - every node a widget can render or receive events on
//!
//! # Timing
//!
//! - [`OneShot`] - cancellable deferred task (focus move, deferred play)
//! - [`Interval`] - recurring timer (carousel autoplay)
//!
//! # Features
//!
//! - `std`: expose [`mocks`] to downstream tests
//! - `serde`: `Serialize` for ids (accessibility-tree snapshots)

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(clippy::unreachable)] // no unreachable!() that isn't documented
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::print_stdout)] // prefer tracing over println! in lib code
#![allow(clippy::must_use_candidate)] // plain accessors
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod document;
pub mod element;
pub mod input;
pub mod media;
pub mod navigate;
pub mod page;
pub mod timer;

#[cfg(any(test, feature = "std"))]
pub mod mocks;

pub use document::{Document, FocusError};
pub use element::ElementId;
pub use input::{InputEvent, Key};
pub use media::{MediaError, MediaHandle};
pub use navigate::Navigate;
pub use page::{PageId, UnknownPage};
pub use timer::{Interval, OneShot};

// Time value types used across every controller signature.
pub use embassy_time::{Duration, Instant};
