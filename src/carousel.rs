//! The carousel component.
//!
//! `Carousel` owns the pane list, the authoritative current index, the
//! strip offset, the auto-advance timer, and any in-flight paging
//! animation. Hosts embed it Elm-style: keep one in their state, feed
//! [`Carousel::update`] with [`Message`]s, compose [`Carousel::view`] into
//! their layout, and merge [`Carousel::subscription`].
//!
//! Every gesture, timer tick, and indicator tap funnels into `update`,
//! where scroll-position changes reconcile the current index as
//! `round(offset / pane_width)`.

use std::time::{Duration, Instant};

use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Handle;
use iced::widget::{container, stack};
use iced::{Background, Element, Length, Padding, Size, Subscription, Task};

use log::{debug, warn};

use crate::config::Config;
use crate::geometry;
use crate::loader::{self, LoadError};
use crate::motion::Glide;
use crate::pane::{LoadPhase, Pane};
use crate::timer::SlideTimer;
use crate::widgets::{indicator, PageIndicator, Strip};

/// Duration of an animated move between page boundaries.
const GLIDE_DURATION: Duration = Duration::from_millis(300);
/// Cadence of animation frames while a glide is running.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
/// Clearance between the page indicator and the bottom edge.
const INDICATOR_BOTTOM_PADDING: f32 = 5.0;

/// Events the carousel reacts to.
#[derive(Debug, Clone)]
pub enum Message {
    /// An image request finished. Stamped with the configuration
    /// generation it was issued under; results from replaced
    /// configurations are dropped.
    Loaded {
        generation: u64,
        index: usize,
        result: Result<Handle, LoadError>,
    },
    /// A press on the strip crossed the drag threshold.
    DragStarted,
    /// The strip is being dragged to this raw offset.
    Scrolled(f32),
    /// The drag was released at this raw offset.
    DragEnded(f32),
    /// A pane was tapped without dragging.
    Tapped(usize),
    /// An indicator dot was tapped.
    DotSelected(usize),
    /// The auto-advance delay elapsed. Only honored if the epoch still
    /// matches the live timer.
    AdvanceTick(u64),
    /// Animation frame while a glide is running.
    Animate(Instant),
    /// The strip's bounds changed.
    Resized(Size),
}

/// An image carousel with paging, tap callbacks, auto-advance, and an
/// optional dot page indicator.
#[derive(Debug)]
pub struct Carousel {
    config: Config,
    panes: Vec<Pane>,
    current: usize,
    offset: f32,
    pane_size: Size,
    dragging: bool,
    glide: Option<Glide>,
    rearm_on_settle: bool,
    timer: SlideTimer,
    generation: u64,
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new()
    }
}

impl Carousel {
    /// An empty carousel. Call [`configure`](Self::configure) to give it
    /// slides.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            panes: Vec::new(),
            current: 0,
            offset: 0.0,
            pane_size: Size::ZERO,
            dragging: false,
            glide: None,
            rearm_on_settle: false,
            timer: SlideTimer::new(),
            generation: 0,
        }
    }

    /// Replaces the whole configuration: discards every pane and any
    /// in-flight drag or animation, resets the current index to 0,
    /// re-arms the timer, and kicks off image requests for the new
    /// slides. Returns the task driving those requests and the timer.
    pub fn configure(&mut self, config: Config) -> Task<Message> {
        self.generation += 1;
        self.panes = config.items.iter().cloned().map(Pane::new).collect();
        self.config = config;
        self.current = 0;
        self.offset = 0.0;
        self.dragging = false;
        self.glide = None;
        self.rearm_on_settle = false;

        debug!(
            "carousel configured: {} slide(s), auto-scroll {:?}s",
            self.panes.len(),
            self.config.auto_scroll_interval
        );

        Task::batch([self.spawn_loads(), self.arm_timer()])
    }

    /// The page the carousel currently rests on (or is closest to, while
    /// moving). 0 when empty.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The strip's horizontal offset in pixels.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.panes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    /// Whether the auto-advance timer is armed.
    pub fn is_auto_advancing(&self) -> bool {
        self.timer.is_armed()
    }

    /// Stops auto-advance and any running animation. Call before
    /// discarding the carousel so no scheduled tick lands on a widget
    /// that no longer exists.
    pub fn halt(&mut self) {
        self.timer.disarm();
        self.glide = None;
        self.rearm_on_settle = false;
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Loaded {
                generation,
                index,
                result,
            } => {
                if generation != self.generation {
                    debug!("dropping image result for pane {index} of a replaced configuration");
                    return Task::none();
                }

                if let Some(pane) = self.panes.get_mut(index) {
                    match result {
                        Ok(handle) => pane.phase = LoadPhase::Ready(handle),
                        Err(error) => {
                            warn!("image load failed for pane {index}: {error}");
                            pane.phase = LoadPhase::Failed;
                        }
                    }
                }

                Task::none()
            }
            Message::DragStarted => {
                self.dragging = true;
                self.glide = None;
                self.rearm_on_settle = false;
                self.timer.disarm();

                Task::none()
            }
            Message::Scrolled(raw) => {
                let max = geometry::max_offset(self.panes.len(), self.pane_width());
                self.offset = geometry::constrain(raw, max, self.config.bounces);
                self.reconcile();

                Task::none()
            }
            Message::DragEnded(raw) => {
                self.dragging = false;

                let width = self.pane_width();
                let landing = geometry::page_at(raw, width, self.panes.len());
                let target = geometry::offset_for(landing, width);

                // The timer waits for the settle glide; a release exactly
                // on a boundary has already settled.
                if (target - self.offset).abs() > f32::EPSILON {
                    self.glide = Some(Glide::new(self.offset, target, GLIDE_DURATION));
                    self.rearm_on_settle = true;

                    Task::none()
                } else {
                    self.arm_timer()
                }
            }
            Message::Tapped(index) => {
                if let (Some(handler), Some(slide)) =
                    (&self.config.on_tap, self.config.items.get(index))
                {
                    handler(index, slide);
                }

                Task::none()
            }
            Message::DotSelected(index) => {
                if self.panes.is_empty() {
                    return Task::none();
                }

                // Jump with no transition effect, on a fresh full interval.
                let index = index.min(self.panes.len() - 1);
                self.glide = None;
                self.rearm_on_settle = false;
                self.current = index;
                self.offset = geometry::offset_for(index, self.pane_width());

                self.arm_timer()
            }
            Message::AdvanceTick(epoch) => {
                if !self.timer.accepts(epoch) {
                    debug!("ignoring stale auto-advance tick");
                    return Task::none();
                }

                let next = self.current + 1;
                if next >= self.panes.len() {
                    // Wrap to the first page with no transition effect.
                    self.glide = None;
                    self.offset = 0.0;
                    self.current = 0;
                } else {
                    let target = geometry::offset_for(next, self.pane_width());
                    self.glide = Some(Glide::new(self.offset, target, GLIDE_DURATION));
                }

                self.arm_timer()
            }
            Message::Animate(now) => {
                let Some(glide) = &self.glide else {
                    return Task::none();
                };

                self.offset = glide.sample(now);
                let settled = glide.is_complete(now);
                if settled {
                    self.glide = None;
                }
                self.reconcile();

                if settled && self.rearm_on_settle {
                    self.rearm_on_settle = false;
                    self.arm_timer()
                } else {
                    Task::none()
                }
            }
            Message::Resized(size) => {
                if size == self.pane_size {
                    return Task::none();
                }

                // Keep the page, snap the offset to its boundary under the
                // new pane width. The snap stands in for any settle glide
                // it cut short.
                self.pane_size = size;
                self.glide = None;
                self.offset = geometry::offset_for(self.current, size.width);

                if self.rearm_on_settle {
                    self.rearm_on_settle = false;
                    self.arm_timer()
                } else {
                    Task::none()
                }
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let strip = Strip::new(self.panes.iter().map(|pane| pane.view()), self.offset)
            .on_drag_start(Message::DragStarted)
            .on_scroll(Message::Scrolled)
            .on_drag_end(Message::DragEnded)
            .on_tap(Message::Tapped)
            .on_resize(Message::Resized);

        let mut backdrop = container(strip).width(Length::Fill).height(Length::Fill);
        if let Some(color) = self.config.background {
            backdrop = backdrop.style(move |_theme| container::Style {
                background: Some(Background::Color(color)),
                ..container::Style::default()
            });
        }

        if !self.config.show_page_indicator || self.panes.is_empty() {
            return backdrop.into();
        }

        let mut dots =
            PageIndicator::new(self.panes.len(), self.current).on_select(Message::DotSelected);

        let active = self.config.active_dot_color;
        let inactive = self.config.dot_color;
        if active.is_some() || inactive.is_some() {
            dots = dots.style(move |theme, status| {
                let mut style = indicator::default(theme, status);
                if let Some(color) = active {
                    style.active_dot = color;
                }
                if let Some(color) = inactive {
                    style.dot = color;
                }
                style
            });
        }

        let dots = container(dots)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Bottom)
            .padding(Padding {
                bottom: INDICATOR_BOTTOM_PADDING,
                ..Padding::ZERO
            });

        stack![backdrop, dots]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Animation frames while a glide is running; nothing otherwise. The
    /// auto-advance timer runs on tasks, not subscriptions, so it is not
    /// represented here.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.glide.is_some() {
            iced::time::every(FRAME_INTERVAL).map(Message::Animate)
        } else {
            Subscription::none()
        }
    }

    fn pane_width(&self) -> f32 {
        self.pane_size.width
    }

    /// The single scroll-driven write path of `current`.
    fn reconcile(&mut self) {
        self.current = geometry::page_at(self.offset, self.pane_width(), self.panes.len());
    }

    /// One fire-and-forget load task per pane that needs one, stamped
    /// with the current generation.
    fn spawn_loads(&self) -> Task<Message> {
        let generation = self.generation;

        Task::batch(
            self.panes
                .iter()
                .enumerate()
                .filter(|(_, pane)| pane.is_loading())
                .map(|(index, pane)| {
                    let source = pane.slide.source.clone();

                    Task::perform(loader::load(source), move |result| Message::Loaded {
                        generation,
                        index,
                        result,
                    })
                }),
        )
    }

    /// Re-arms the timer and schedules its tick, or leaves it disarmed
    /// per the configuration.
    fn arm_timer(&mut self) -> Task<Message> {
        match self
            .timer
            .rearm(self.panes.len(), self.config.auto_scroll_interval)
        {
            Some((interval, epoch)) => Task::perform(
                async move { tokio::time::sleep(interval).await },
                move |()| Message::AdvanceTick(epoch),
            ),
            None => Task::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slide::Slide;
    use std::sync::{Arc, Mutex};

    const WIDTH: f32 = 320.0;

    fn handle() -> Handle {
        Handle::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    fn slides(n: usize) -> Vec<Slide> {
        (0..n).map(|_| Slide::new(handle())).collect()
    }

    /// A configured carousel that has already seen its first layout.
    fn ready(n: usize, interval: Option<f32>) -> Carousel {
        let mut carousel = Carousel::new();
        let mut config = Config::new(slides(n));
        if let Some(secs) = interval {
            config = config.auto_scroll_interval(secs);
        }

        let _ = carousel.configure(config);
        let _ = carousel.update(Message::Resized(Size::new(WIDTH, 480.0)));
        carousel
    }

    /// Drives any running glide to its end.
    fn finish_glide(carousel: &mut Carousel) {
        let _ = carousel.update(Message::Animate(Instant::now() + Duration::from_secs(60)));
    }

    #[test]
    fn test_configure_builds_panes_and_resets_index() {
        let carousel = ready(4, None);
        assert_eq!(carousel.len(), 4);
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.offset(), 0.0);
    }

    #[test]
    fn test_reconfigure_discards_position_and_drag() {
        let mut carousel = ready(4, None);
        let _ = carousel.update(Message::DragStarted);
        let _ = carousel.update(Message::Scrolled(2.0 * WIDTH));
        assert_eq!(carousel.current_index(), 2);
        assert!(carousel.dragging);

        let _ = carousel.configure(Config::new(slides(2)));
        assert_eq!(carousel.len(), 2);
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.offset(), 0.0);
        assert!(!carousel.dragging);
    }

    #[test]
    fn test_timer_stays_disarmed_without_enough_slides_or_interval() {
        assert!(!ready(0, Some(3.0)).is_auto_advancing());
        assert!(!ready(1, Some(3.0)).is_auto_advancing());
        assert!(!ready(5, None).is_auto_advancing());
        assert!(!ready(5, Some(0.0)).is_auto_advancing());
        assert!(!ready(5, Some(-1.0)).is_auto_advancing());
        assert!(!ready(5, Some(f32::INFINITY)).is_auto_advancing());
        assert!(!ready(5, Some(1.0e30)).is_auto_advancing());

        // And it stays disarmed: a tick for any epoch changes nothing.
        let mut carousel = ready(5, None);
        let epoch = carousel.timer.epoch();
        let _ = carousel.update(Message::AdvanceTick(epoch));
        let _ = carousel.update(Message::AdvanceTick(epoch + 1));
        assert_eq!(carousel.current_index(), 0);
        assert!(!carousel.is_auto_advancing());
    }

    #[test]
    fn test_tick_advances_and_wraps_without_animation() {
        let mut carousel = ready(3, Some(4.0));
        assert!(carousel.is_auto_advancing());

        let _ = carousel.update(Message::AdvanceTick(carousel.timer.epoch()));
        assert!(carousel.glide.is_some());
        finish_glide(&mut carousel);
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.offset(), WIDTH);

        let _ = carousel.update(Message::AdvanceTick(carousel.timer.epoch()));
        finish_glide(&mut carousel);
        assert_eq!(carousel.current_index(), 2);

        // Third tick wraps to 0 immediately, with no glide.
        let _ = carousel.update(Message::AdvanceTick(carousel.timer.epoch()));
        assert!(carousel.glide.is_none());
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.offset(), 0.0);
        assert!(carousel.is_auto_advancing());
    }

    #[test]
    fn test_stale_tick_is_ignored() {
        let mut carousel = ready(3, Some(4.0));
        let stale = carousel.timer.epoch();

        // A drag bumps the epoch; the old tick must not advance anything.
        let _ = carousel.update(Message::DragStarted);
        let _ = carousel.update(Message::AdvanceTick(stale));
        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.glide.is_none());
    }

    #[test]
    fn test_drag_reconciles_index_continuously() {
        let mut carousel = ready(3, None);
        let _ = carousel.update(Message::DragStarted);

        for k in [0, 1, 2] {
            let _ = carousel.update(Message::Scrolled(k as f32 * WIDTH));
            assert_eq!(carousel.current_index(), k);
        }

        // Positions between boundaries round to the nearest page.
        let _ = carousel.update(Message::Scrolled(0.4 * WIDTH));
        assert_eq!(carousel.current_index(), 0);
        let _ = carousel.update(Message::Scrolled(0.6 * WIDTH));
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_timer_rearms_after_settle_not_at_release() {
        let mut carousel = ready(3, Some(5.0));
        assert!(carousel.is_auto_advancing());

        let _ = carousel.update(Message::DragStarted);
        assert!(!carousel.is_auto_advancing());

        // Released mid-page: the settle glide is still running, so the
        // timer stays down until it lands.
        let _ = carousel.update(Message::Scrolled(200.0));
        let _ = carousel.update(Message::DragEnded(200.0));
        assert!(!carousel.dragging);
        assert!(carousel.glide.is_some());
        assert!(!carousel.is_auto_advancing());

        finish_glide(&mut carousel);
        assert!(carousel.is_auto_advancing());
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_regrab_during_settle_keeps_timer_down() {
        let mut carousel = ready(3, Some(5.0));
        let _ = carousel.update(Message::DragStarted);
        let _ = carousel.update(Message::Scrolled(200.0));
        let _ = carousel.update(Message::DragEnded(200.0));
        assert!(carousel.glide.is_some());

        // Grabbing again cancels the settle glide and its pending re-arm.
        let _ = carousel.update(Message::DragStarted);
        assert!(carousel.glide.is_none());

        let _ = carousel.update(Message::Animate(Instant::now()));
        assert!(!carousel.is_auto_advancing());
    }

    #[test]
    fn test_resize_during_settle_still_rearms_timer() {
        let mut carousel = ready(3, Some(5.0));
        let _ = carousel.update(Message::DragStarted);
        let _ = carousel.update(Message::Scrolled(200.0));
        let _ = carousel.update(Message::DragEnded(200.0));
        assert!(carousel.glide.is_some());
        assert!(!carousel.is_auto_advancing());

        // The resize snap replaces the glide as the settle.
        let _ = carousel.update(Message::Resized(Size::new(500.0, 400.0)));
        assert!(carousel.glide.is_none());
        assert_eq!(carousel.offset(), 500.0);
        assert!(carousel.is_auto_advancing());
    }

    #[test]
    fn test_released_drag_settles_on_nearest_boundary() {
        let mut carousel = ready(3, None);
        let _ = carousel.update(Message::DragStarted);
        let _ = carousel.update(Message::Scrolled(250.0));
        let _ = carousel.update(Message::DragEnded(250.0));

        assert!(carousel.glide.is_some());
        finish_glide(&mut carousel);
        assert_eq!(carousel.offset(), WIDTH);
        assert_eq!(carousel.current_index(), 1);
        assert!(carousel.glide.is_none());
    }

    #[test]
    fn test_release_on_boundary_needs_no_glide() {
        let mut carousel = ready(3, Some(5.0));
        let _ = carousel.update(Message::DragStarted);
        let _ = carousel.update(Message::Scrolled(WIDTH));
        let _ = carousel.update(Message::DragEnded(WIDTH));

        assert!(carousel.glide.is_none());
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.offset(), WIDTH);

        // Nothing left to settle, so the timer comes straight back.
        assert!(carousel.is_auto_advancing());
    }

    #[test]
    fn test_drag_clamps_at_edges_without_bounce() {
        let mut carousel = ready(3, None);
        let _ = carousel.update(Message::DragStarted);

        let _ = carousel.update(Message::Scrolled(-120.0));
        assert_eq!(carousel.offset(), 0.0);

        let _ = carousel.update(Message::Scrolled(5000.0));
        assert_eq!(carousel.offset(), 2.0 * WIDTH);
    }

    #[test]
    fn test_drag_rubber_bands_with_bounce() {
        let mut carousel = Carousel::new();
        let _ = carousel.configure(Config::new(slides(3)).bounces(true));
        let _ = carousel.update(Message::Resized(Size::new(WIDTH, 480.0)));

        let _ = carousel.update(Message::DragStarted);
        let _ = carousel.update(Message::Scrolled(-100.0));
        assert!(carousel.offset() < 0.0 && carousel.offset() > -100.0);

        // Release springs back to the first page.
        let _ = carousel.update(Message::DragEnded(-100.0));
        assert!(carousel.glide.is_some());
        finish_glide(&mut carousel);
        assert_eq!(carousel.offset(), 0.0);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_dot_selection_jumps_without_animation() {
        let mut carousel = ready(4, Some(3.0));
        let before = carousel.timer.epoch();

        let _ = carousel.update(Message::DotSelected(2));
        assert!(carousel.glide.is_none());
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(carousel.offset(), 2.0 * WIDTH);

        // The timer restarts on a fresh full interval.
        assert!(carousel.is_auto_advancing());
        assert!(carousel.timer.epoch() > before);

        // Out-of-range selections clamp.
        let _ = carousel.update(Message::DotSelected(99));
        assert_eq!(carousel.current_index(), 3);
    }

    #[test]
    fn test_tap_invokes_handler_from_active_configuration() {
        let first_taps: Arc<Mutex<Vec<usize>>> = Arc::new(Mutex::new(Vec::new()));
        let second_taps: Arc<Mutex<Vec<usize>>> = Arc::new(Mutex::new(Vec::new()));

        let mut carousel = Carousel::new();
        let log = Arc::clone(&first_taps);
        let _ = carousel.configure(
            Config::new(slides(3)).on_tap(move |index, _slide| log.lock().unwrap().push(index)),
        );

        let _ = carousel.update(Message::Tapped(1));
        assert_eq!(*first_taps.lock().unwrap(), vec![1]);
        assert_eq!(carousel.current_index(), 0);

        // After reconfiguring, only the new handler fires.
        let log = Arc::clone(&second_taps);
        let _ = carousel.configure(
            Config::new(slides(3)).on_tap(move |index, _slide| log.lock().unwrap().push(index)),
        );
        let _ = carousel.update(Message::Tapped(2));

        assert_eq!(*first_taps.lock().unwrap(), vec![1]);
        assert_eq!(*second_taps.lock().unwrap(), vec![2]);
    }

    #[test]
    fn test_tap_without_handler_or_out_of_range_is_a_no_op() {
        let mut carousel = ready(2, None);
        let _ = carousel.update(Message::Tapped(0));
        let _ = carousel.update(Message::Tapped(7));
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_resize_preserves_page_and_snaps_offset() {
        let mut carousel = ready(3, None);
        let _ = carousel.update(Message::DragStarted);
        let _ = carousel.update(Message::Scrolled(2.0 * WIDTH));
        let _ = carousel.update(Message::DragEnded(2.0 * WIDTH));
        assert_eq!(carousel.current_index(), 2);

        let _ = carousel.update(Message::Resized(Size::new(500.0, 400.0)));
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(carousel.offset(), 1000.0);
    }

    #[test]
    fn test_resize_with_same_size_is_idempotent() {
        let mut carousel = ready(3, None);
        let _ = carousel.update(Message::DragStarted);
        let _ = carousel.update(Message::Scrolled(100.0));

        let offset = carousel.offset();
        let index = carousel.current_index();

        let _ = carousel.update(Message::Resized(Size::new(WIDTH, 480.0)));
        let _ = carousel.update(Message::Resized(Size::new(WIDTH, 480.0)));
        assert_eq!(carousel.offset(), offset);
        assert_eq!(carousel.current_index(), index);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut carousel = ready(0, Some(3.0));
        assert!(carousel.is_empty());
        assert!(!carousel.is_auto_advancing());
        assert_eq!(carousel.current_index(), 0);

        let _ = carousel.update(Message::AdvanceTick(carousel.timer.epoch()));
        let _ = carousel.update(Message::DotSelected(0));
        let _ = carousel.update(Message::Tapped(0));
        assert_eq!(carousel.current_index(), 0);

        // The view still builds: an empty strip, no indicator.
        let _ = carousel.view();
    }

    #[test]
    fn test_stale_image_results_are_dropped() {
        let mut carousel = Carousel::new();
        let _ = carousel.configure(Config::new(vec![Slide::new(std::path::PathBuf::from(
            "/tmp/a.png",
        ))]));
        let old_generation = carousel.generation;
        assert!(carousel.panes[0].is_loading());

        let _ = carousel.configure(Config::new(vec![Slide::new(std::path::PathBuf::from(
            "/tmp/b.png",
        ))]));

        let _ = carousel.update(Message::Loaded {
            generation: old_generation,
            index: 0,
            result: Ok(handle()),
        });
        assert!(carousel.panes[0].is_loading());

        let _ = carousel.update(Message::Loaded {
            generation: carousel.generation,
            index: 0,
            result: Ok(handle()),
        });
        assert!(!carousel.panes[0].is_loading());
    }

    #[test]
    fn test_failed_load_marks_pane_failed() {
        let mut carousel = Carousel::new();
        let _ = carousel.configure(Config::new(vec![Slide::new(std::path::PathBuf::from(
            "/tmp/a.png",
        ))]));

        let _ = carousel.update(Message::Loaded {
            generation: carousel.generation,
            index: 0,
            result: Err(LoadError::Decode("not an image".into())),
        });

        assert!(matches!(carousel.panes[0].phase, LoadPhase::Failed));
    }

    #[test]
    fn test_rapid_transitions_leave_one_live_epoch() {
        let mut carousel = ready(4, Some(0.5));
        let mut issued = vec![carousel.timer.epoch()];

        for _ in 0..3 {
            let _ = carousel.update(Message::DragStarted);
            let _ = carousel.update(Message::DragEnded(0.0));
            issued.push(carousel.timer.epoch());

            let _ = carousel.update(Message::DotSelected(1));
            issued.push(carousel.timer.epoch());
        }

        let live: Vec<_> = issued
            .iter()
            .filter(|epoch| carousel.timer.accepts(**epoch))
            .collect();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0], issued.last().unwrap());
    }

    #[test]
    fn test_halt_disarms_and_stops_animation() {
        let mut carousel = ready(3, Some(2.0));
        let epoch = carousel.timer.epoch();
        let _ = carousel.update(Message::AdvanceTick(epoch));
        assert!(carousel.glide.is_some());

        carousel.halt();
        assert!(!carousel.is_auto_advancing());
        assert!(carousel.glide.is_none());
        assert!(!carousel.timer.accepts(epoch));
    }

    #[test]
    fn test_subscription_runs_only_while_gliding() {
        let mut carousel = ready(3, Some(2.0));
        // No glide, no frames.
        let _ = carousel.subscription();
        assert!(carousel.glide.is_none());

        let _ = carousel.update(Message::AdvanceTick(carousel.timer.epoch()));
        assert!(carousel.glide.is_some());

        finish_glide(&mut carousel);
        assert!(carousel.glide.is_none());
    }

    #[test]
    fn test_animate_without_glide_is_a_no_op() {
        let mut carousel = ready(3, None);
        let _ = carousel.update(Message::Animate(Instant::now()));
        assert_eq!(carousel.offset(), 0.0);
        assert_eq!(carousel.current_index(), 0);
    }
}
