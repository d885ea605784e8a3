//! Dot-style page indicator.
//!
//! One dot per pane, the current pane's dot emphasized. Tapping a dot
//! publishes a selection message; the carousel treats that as a jump
//! without animation.

use iced::advanced::layout::{Limits, Node};
use iced::advanced::renderer::{self, Quad};
use iced::advanced::widget::tree::Tree;
use iced::advanced::{Clipboard, Layout, Shell, Widget};
use iced::mouse::{self, Cursor};
use iced::{
    event, touch, Background, Border, Color, Element, Event, Length, Rectangle, Size, Theme,
};

/// Dot diameter in logical pixels.
const DOT_DIAMETER: f32 = 7.0;
/// Gap between neighboring dots.
const DOT_SPACING: f32 = 9.0;
/// Vertical extent of the widget; dots are centered inside it so taps
/// have something comfortable to land on.
const HIT_HEIGHT: f32 = 20.0;

#[allow(missing_debug_implementations)]
pub struct PageIndicator<'a, Message, Theme = iced::Theme>
where
    Theme: Catalog,
{
    count: usize,
    current: usize,
    diameter: f32,
    spacing: f32,
    on_select: Option<Box<dyn Fn(usize) -> Message + 'a>>,
    class: Theme::Class<'a>,
}

impl<'a, Message, Theme> PageIndicator<'a, Message, Theme>
where
    Theme: Catalog,
{
    /// One dot per page; `current` is clamped to the dot range when drawn.
    pub fn new(count: usize, current: usize) -> Self {
        Self {
            count,
            current,
            diameter: DOT_DIAMETER,
            spacing: DOT_SPACING,
            on_select: None,
            class: Theme::default(),
        }
    }

    /// Sets the message produced when a dot is tapped.
    #[must_use]
    pub fn on_select<F>(mut self, on_select: F) -> Self
    where
        F: 'a + Fn(usize) -> Message,
    {
        self.on_select = Some(Box::new(on_select));
        self
    }

    #[must_use]
    pub fn diameter(mut self, diameter: f32) -> Self {
        self.diameter = diameter;
        self
    }

    #[must_use]
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the style of the indicator.
    #[must_use]
    pub fn style(mut self, style: impl Fn(&Theme, Status) -> Style + 'a) -> Self
    where
        Theme::Class<'a>: From<StyleFn<'a, Theme>>,
    {
        self.class = (Box::new(style) as StyleFn<'a, Theme>).into();
        self
    }

    fn content_width(&self) -> f32 {
        if self.count == 0 {
            return 0.0;
        }

        self.count as f32 * self.diameter + (self.count.saturating_sub(1)) as f32 * self.spacing
    }
}

/// Maps an x position inside the indicator to the dot it falls on.
///
/// Each dot owns its trailing gap so the hit cells tile the whole width.
fn dot_at(x: f32, count: usize, diameter: f32, spacing: f32) -> Option<usize> {
    if count == 0 || x < 0.0 {
        return None;
    }

    let cell = diameter + spacing;
    let index = (x / cell).floor() as usize;

    (index < count).then_some(index)
}

impl<'a, Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for PageIndicator<'a, Message, Theme>
where
    Theme: Catalog,
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        Size {
            width: Length::Shrink,
            height: Length::Shrink,
        }
    }

    fn layout(&self, _tree: &mut Tree, _renderer: &Renderer, limits: &Limits) -> Node {
        // Natural size, capped to the container's width by the limits.
        let intrinsic = Size::new(self.content_width(), HIT_HEIGHT);

        Node::new(limits.resolve(Length::Shrink, Length::Shrink, intrinsic))
    }

    fn on_event(
        &mut self,
        _tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) -> event::Status {
        let Some(on_select) = &self.on_select else {
            return event::Status::Ignored;
        };

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerPressed { .. }) => {
                let bounds = layout.bounds();

                if let Some(position) = cursor.position_over(bounds) {
                    if let Some(index) =
                        dot_at(position.x - bounds.x, self.count, self.diameter, self.spacing)
                    {
                        shell.publish(on_select(index));
                        return event::Status::Captured;
                    }
                }
            }
            _ => {}
        }

        event::Status::Ignored
    }

    fn draw(
        &self,
        _tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        cursor: Cursor,
        _viewport: &Rectangle,
    ) {
        if self.count == 0 {
            return;
        }

        let bounds = layout.bounds();
        let status = if cursor.is_over(bounds) && self.on_select.is_some() {
            Status::Hovered
        } else {
            Status::Active
        };
        let style = theme.style(&self.class, status);

        let current = self.current.min(self.count - 1);
        let y = bounds.y + (bounds.height - self.diameter) / 2.0;
        let cell = self.diameter + self.spacing;

        for i in 0..self.count {
            let dot = Rectangle {
                x: bounds.x + i as f32 * cell,
                y,
                width: self.diameter,
                height: self.diameter,
            };

            if dot.x + dot.width > bounds.x + bounds.width + 0.5 {
                break;
            }

            let color = if i == current {
                style.active_dot
            } else {
                style.dot
            };

            renderer.fill_quad(
                Quad {
                    bounds: dot,
                    border: Border {
                        radius: (self.diameter / 2.0).into(),
                        ..Border::default()
                    },
                    ..Quad::default()
                },
                Background::Color(color),
            );
        }
    }

    fn mouse_interaction(
        &self,
        _tree: &Tree,
        layout: Layout<'_>,
        cursor: Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        if self.on_select.is_some() && cursor.is_over(layout.bounds()) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message, Theme, Renderer> From<PageIndicator<'a, Message, Theme>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: Catalog + 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(indicator: PageIndicator<'a, Message, Theme>) -> Self {
        Element::new(indicator)
    }
}

/// The possible status of a [`PageIndicator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    Hovered,
}

/// The appearance of a [`PageIndicator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Color of the dots for pages other than the current one.
    pub dot: Color,
    /// Color of the current page's dot.
    pub active_dot: Color,
}

/// The theme catalog of a [`PageIndicator`].
pub trait Catalog: Sized {
    type Class<'a>;

    fn default<'a>() -> Self::Class<'a>;

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style;
}

/// A styling function for a [`PageIndicator`].
pub type StyleFn<'a, Theme> = Box<dyn Fn(&Theme, Status) -> Style + 'a>;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Theme>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(default)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

/// The default style of a [`PageIndicator`].
pub fn default(theme: &Theme, status: Status) -> Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.text;

    let dot = match status {
        Status::Active => base.scale_alpha(0.35),
        Status::Hovered => base.scale_alpha(0.55),
    };

    Style {
        dot,
        active_dot: base,
    }
}
