//! Whole-widget configuration, supplied wholesale by the owning screen.

use std::fmt;
use std::sync::Arc;

use iced::Color;

use crate::slide::Slide;

/// Callback invoked when a pane is tapped, with the pane index and the
/// slide from the configuration active at tap time.
pub type TapHandler = Arc<dyn Fn(usize, &Slide) + Send + Sync>;

/// Full configuration of the carousel. Passing a new `Config` to
/// [`Carousel::configure`](crate::Carousel::configure) discards all runtime
/// state and rebuilds every pane.
#[derive(Clone, Default)]
pub struct Config {
    /// The slides, in display order. May be empty.
    pub items: Vec<Slide>,
    /// Auto-advance interval in seconds. `None` or a non-positive value
    /// disables auto-scrolling, as does a slide count below two.
    pub auto_scroll_interval: Option<f32>,
    /// Fill behind the panes. `None` leaves the widget transparent.
    pub background: Option<Color>,
    pub on_tap: Option<TapHandler>,
    pub show_page_indicator: bool,
    /// Whether dragging past the first/last pane rubber-bands instead of
    /// stopping hard at the edge.
    pub bounces: bool,
    /// Tint of the active indicator dot. `None` uses the theme default.
    pub active_dot_color: Option<Color>,
    /// Tint of the inactive indicator dots. `None` uses the theme default.
    pub dot_color: Option<Color>,
}

impl Config {
    pub fn new(items: Vec<Slide>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Sets the auto-advance interval in seconds.
    #[must_use]
    pub fn auto_scroll_interval(mut self, seconds: f32) -> Self {
        self.auto_scroll_interval = Some(seconds);
        self
    }

    #[must_use]
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Sets the tap callback. It receives the tapped pane's index and the
    /// corresponding slide.
    #[must_use]
    pub fn on_tap(mut self, handler: impl Fn(usize, &Slide) + Send + Sync + 'static) -> Self {
        self.on_tap = Some(Arc::new(handler));
        self
    }

    #[must_use]
    pub fn show_page_indicator(mut self, show: bool) -> Self {
        self.show_page_indicator = show;
        self
    }

    #[must_use]
    pub fn bounces(mut self, bounces: bool) -> Self {
        self.bounces = bounces;
        self
    }

    #[must_use]
    pub fn active_dot_color(mut self, color: Color) -> Self {
        self.active_dot_color = Some(color);
        self
    }

    #[must_use]
    pub fn dot_color(mut self, color: Color) -> Self {
        self.dot_color = Some(color);
        self
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("items", &self.items.len())
            .field("auto_scroll_interval", &self.auto_scroll_interval)
            .field("background", &self.background)
            .field("on_tap", &self.on_tap.is_some())
            .field("show_page_indicator", &self.show_page_indicator)
            .field("bounces", &self.bounces)
            .field("active_dot_color", &self.active_dot_color)
            .field("dot_color", &self.dot_color)
            .finish()
    }
}
