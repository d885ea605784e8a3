//! An image carousel widget for [iced].
//!
//! A [`Carousel`] shows an ordered list of [`Slide`]s as a horizontally
//! paging strip: drag to flip pages, tap a pane to act on its slide, let
//! the auto-advance timer walk the pages on an interval, or jump straight
//! to a page from the dot indicator. Images load asynchronously from disk,
//! the network, or ready-made handles, with per-pane placeholders and a
//! spinner while a request is in flight. Load failures are swallowed; the
//! pane keeps its placeholder.
//!
//! The component follows iced's state/update/view split. Hosts keep a
//! `Carousel` in their state, hand it a [`Config`] through
//! [`Carousel::configure`], route [`Message`]s into [`Carousel::update`],
//! place [`Carousel::view`] in their layout, and merge
//! [`Carousel::subscription`] into their own. Replacing the configuration
//! wholesale resets the widget; there is no incremental diffing.
//!
//! The lower-level building blocks live in [`widgets`]: the paging
//! [`widgets::Strip`], the dot [`widgets::PageIndicator`], and the
//! [`widgets::Spinner`], each usable on its own.
//!
//! [iced]: https://github.com/iced-rs/iced

mod carousel;
mod config;
mod geometry;
mod loader;
mod motion;
mod pane;
mod slide;
mod timer;
pub mod widgets;

pub use carousel::{Carousel, Message};
pub use config::{Config, TapHandler};
pub use loader::LoadError;
pub use motion::{Easing, Glide};
pub use pane::{LoadPhase, Pane};
pub use slide::{ImageSource, Slide};
pub use timer::SlideTimer;
