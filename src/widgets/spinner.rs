//! A small spinning activity indicator.
//!
//! Shown centered on a pane while its image loads. The widget drives
//! itself by asking for the next frame on every redraw, so it needs no
//! messages or subscriptions from its host.

use std::f32::consts::{FRAC_PI_2, TAU};
use std::time::{Duration, Instant};

use iced::advanced::layout::{self, Limits, Node};
use iced::advanced::renderer::{self, Quad};
use iced::advanced::widget::tree::{self, Tree};
use iced::advanced::{Clipboard, Layout, Shell, Widget};
use iced::mouse::Cursor;
use iced::window;
use iced::{event, Background, Border, Color, Element, Event, Length, Rectangle, Size};

const DOT_COUNT: usize = 8;
const DEFAULT_DIAMETER: f32 = 28.0;
const CYCLE: Duration = Duration::from_millis(900);

pub struct Spinner {
    diameter: f32,
    cycle: Duration,
    color: Color,
}

impl Spinner {
    pub fn new() -> Self {
        Self {
            diameter: DEFAULT_DIAMETER,
            cycle: CYCLE,
            color: Color::WHITE,
        }
    }

    #[must_use]
    pub fn diameter(mut self, diameter: f32) -> Self {
        self.diameter = diameter;
        self
    }

    #[must_use]
    pub fn cycle(mut self, cycle: Duration) -> Self {
        self.cycle = if cycle.is_zero() { CYCLE } else { cycle };
        self
    }

    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

struct State {
    started_at: Instant,
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer> for Spinner
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State {
            started_at: Instant::now(),
        })
    }

    fn size(&self) -> Size<Length> {
        Size {
            width: Length::Fixed(self.diameter),
            height: Length::Fixed(self.diameter),
        }
    }

    fn layout(&self, _tree: &mut Tree, _renderer: &Renderer, limits: &Limits) -> Node {
        layout::atomic(
            limits,
            Length::Fixed(self.diameter),
            Length::Fixed(self.diameter),
        )
    }

    fn on_event(
        &mut self,
        _tree: &mut Tree,
        event: Event,
        _layout: Layout<'_>,
        _cursor: Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) -> event::Status {
        if let Event::Window(window::Event::RedrawRequested(_)) = event {
            shell.request_redraw(window::RedrawRequest::NextFrame);
        }

        event::Status::Ignored
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: Cursor,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_ref::<State>();
        let bounds = layout.bounds();

        let center_x = bounds.x + bounds.width / 2.0;
        let center_y = bounds.y + bounds.height / 2.0;
        let dot = self.diameter / 8.0;
        let orbit = (self.diameter - dot) / 2.0;

        // Darkened disc behind the dots so the spinner stays readable over
        // bright images.
        renderer.fill_quad(
            Quad {
                bounds,
                border: Border {
                    radius: (self.diameter / 2.0).into(),
                    ..Border::default()
                },
                ..Quad::default()
            },
            Background::Color(Color::BLACK.scale_alpha(0.25)),
        );

        let elapsed = state.started_at.elapsed().as_secs_f32();
        let turns = (elapsed / self.cycle.as_secs_f32()).fract();
        let head = turns * DOT_COUNT as f32;

        for i in 0..DOT_COUNT {
            let lag = (head - i as f32).rem_euclid(DOT_COUNT as f32);
            let alpha = 1.0 - 0.85 * (lag / DOT_COUNT as f32);

            let angle = (i as f32 / DOT_COUNT as f32) * TAU - FRAC_PI_2;
            let x = center_x + orbit * angle.cos() - dot / 2.0;
            let y = center_y + orbit * angle.sin() - dot / 2.0;

            renderer.fill_quad(
                Quad {
                    bounds: Rectangle {
                        x,
                        y,
                        width: dot,
                        height: dot,
                    },
                    border: Border {
                        radius: (dot / 2.0).into(),
                        ..Border::default()
                    },
                    ..Quad::default()
                },
                Background::Color(self.color.scale_alpha(alpha)),
            );
        }
    }
}

impl<'a, Message, Theme, Renderer> From<Spinner> for Element<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn from(spinner: Spinner) -> Self {
        Element::new(spinner)
    }
}
