//! The horizontally scrolling pane strip.
//!
//! The strip is a controlled widget: the carousel state owns the offset and
//! passes it in every frame, and the strip reports gestures back through
//! its `on_*` messages instead of scrolling itself. Children are laid out
//! in a row one strip-width each and drawn clipped and translated; they are
//! display-only and receive no pointer events, but window and keyboard
//! events still flow down to the visible panes so a loading spinner can
//! keep scheduling its frames.

use iced::advanced::{
    layout::{Limits, Node},
    overlay, renderer,
    widget::{tree, Operation, Tree},
    Clipboard, Layout, Shell, Widget,
};
use iced::mouse::{self, Cursor};
use iced::{event, touch, Element, Event, Length, Point, Rectangle, Size, Vector};

#[allow(unused_imports)]
use log::{debug, warn};

use crate::geometry;

/// Cursor travel in logical pixels before a press becomes a drag rather
/// than a tap.
const DRAG_THRESHOLD: f32 = 6.0;

/// Events the strip consumes for its own gesture recognition instead of
/// forwarding to the panes.
fn is_pointer(event: &Event) -> bool {
    matches!(event, Event::Mouse(_) | Event::Touch(_))
}

#[allow(missing_debug_implementations)]
pub struct Strip<'a, Message, Theme = iced::Theme, Renderer = iced::Renderer>
where
    Renderer: renderer::Renderer,
{
    children: Vec<Element<'a, Message, Theme, Renderer>>,
    /// Horizontal content offset in pixels; 0 shows the first pane.
    offset: f32,
    on_drag_start: Option<Message>,
    on_scroll: Option<Box<dyn Fn(f32) -> Message + 'a>>,
    on_drag_end: Option<Box<dyn Fn(f32) -> Message + 'a>>,
    on_tap: Option<Box<dyn Fn(usize) -> Message + 'a>>,
    on_resize: Option<Box<dyn Fn(Size) -> Message + 'a>>,
}

impl<'a, Message, Theme, Renderer> Strip<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    pub fn new(
        children: impl IntoIterator<Item = Element<'a, Message, Theme, Renderer>>,
        offset: f32,
    ) -> Self {
        Self {
            children: children.into_iter().collect(),
            offset,
            on_drag_start: None,
            on_scroll: None,
            on_drag_end: None,
            on_tap: None,
            on_resize: None,
        }
    }

    /// Message published once when a press turns into a drag.
    #[must_use]
    pub fn on_drag_start(mut self, message: Message) -> Self {
        self.on_drag_start = Some(message);
        self
    }

    /// Sets the message produced continuously while dragging, carrying the
    /// offset the drag asks for (unclamped).
    #[must_use]
    pub fn on_scroll<F>(mut self, on_scroll: F) -> Self
    where
        F: 'a + Fn(f32) -> Message,
    {
        self.on_scroll = Some(Box::new(on_scroll));
        self
    }

    /// Sets the message produced when a drag is released, carrying the
    /// offset at release.
    #[must_use]
    pub fn on_drag_end<F>(mut self, on_drag_end: F) -> Self
    where
        F: 'a + Fn(f32) -> Message,
    {
        self.on_drag_end = Some(Box::new(on_drag_end));
        self
    }

    /// Sets the message produced when a pane is tapped without dragging.
    #[must_use]
    pub fn on_tap<F>(mut self, on_tap: F) -> Self
    where
        F: 'a + Fn(usize) -> Message,
    {
        self.on_tap = Some(Box::new(on_tap));
        self
    }

    /// Sets the message reporting the strip's bounds, published whenever
    /// they change.
    #[must_use]
    pub fn on_resize<F>(mut self, on_resize: F) -> Self
    where
        F: 'a + Fn(Size) -> Message,
    {
        self.on_resize = Some(Box::new(on_resize));
        self
    }
}

/// Pointer interaction of the strip.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Interaction {
    Idle,
    /// Pressed but not yet past [`DRAG_THRESHOLD`]; releasing here is a tap.
    Pressed { grab_x: f32, start_offset: f32 },
    /// Actively dragging. `current` is the offset the drag is asking for.
    Dragging {
        grab_x: f32,
        start_offset: f32,
        current: f32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct State {
    interaction: Interaction,
    last_size: Option<Size>,
}

impl State {
    fn new() -> Self {
        Self {
            interaction: Interaction::Idle,
            last_size: None,
        }
    }
}

impl<'a, Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Strip<'a, Message, Theme, Renderer>
where
    Message: Clone,
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::new())
    }

    fn children(&self) -> Vec<Tree> {
        self.children.iter().map(Tree::new).collect()
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(&self.children);
    }

    fn size(&self) -> Size<Length> {
        Size {
            width: Length::Fill,
            height: Length::Fill,
        }
    }

    fn layout(&self, tree: &mut Tree, renderer: &Renderer, limits: &Limits) -> Node {
        let size = limits.resolve(Length::Fill, Length::Fill, Size::ZERO);
        let pane_limits = Limits::new(Size::ZERO, size);

        let panes = self
            .children
            .iter()
            .zip(tree.children.iter_mut())
            .enumerate()
            .map(|(i, (pane, tree))| {
                pane.as_widget()
                    .layout(tree, renderer, &pane_limits)
                    .move_to(Point::new(i as f32 * size.width, 0.0))
            })
            .collect();

        Node::with_children(size, panes)
    }

    fn on_event(
        &mut self,
        tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) -> event::Status {
        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds();

        // The host-container contract: report our bounds before any offset
        // math is expected to rely on them.
        if state.last_size != Some(bounds.size()) {
            state.last_size = Some(bounds.size());
            if let Some(on_resize) = &self.on_resize {
                shell.publish(on_resize(bounds.size()));
            }
        }

        // Everything that is not pointer input goes to the panes currently
        // in view; an in-flight pane's spinner answers redraw requests from
        // here. Offscreen panes wake up when a drag or glide reveals them.
        if !is_pointer(&event) {
            let visible = Rectangle {
                x: bounds.x + self.offset,
                ..bounds
            };
            let mut status = event::Status::Ignored;

            for ((pane, pane_tree), pane_layout) in self
                .children
                .iter_mut()
                .zip(tree.children.iter_mut())
                .zip(layout.children())
            {
                let pane_bounds = pane_layout.bounds();
                if pane_bounds.x + pane_bounds.width < visible.x
                    || pane_bounds.x > visible.x + visible.width
                {
                    continue;
                }

                status = status.merge(pane.as_widget_mut().on_event(
                    pane_tree,
                    event.clone(),
                    pane_layout,
                    cursor,
                    renderer,
                    clipboard,
                    shell,
                    viewport,
                ));
            }

            return status;
        }

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerPressed { .. }) => {
                if self.children.is_empty() {
                    return event::Status::Ignored;
                }

                if let Some(position) = cursor.position_over(bounds) {
                    state.interaction = Interaction::Pressed {
                        grab_x: position.x,
                        start_offset: self.offset,
                    };

                    return event::Status::Captured;
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { position })
            | Event::Touch(touch::Event::FingerMoved { position, .. }) => match state.interaction {
                Interaction::Pressed {
                    grab_x,
                    start_offset,
                } => {
                    if (position.x - grab_x).abs() > DRAG_THRESHOLD {
                        let current = start_offset - (position.x - grab_x);
                        state.interaction = Interaction::Dragging {
                            grab_x,
                            start_offset,
                            current,
                        };

                        if let Some(message) = self.on_drag_start.clone() {
                            shell.publish(message);
                        }
                        if let Some(on_scroll) = &self.on_scroll {
                            shell.publish(on_scroll(current));
                        }
                    }

                    return event::Status::Captured;
                }
                Interaction::Dragging {
                    grab_x,
                    start_offset,
                    ..
                } => {
                    let current = start_offset - (position.x - grab_x);
                    state.interaction = Interaction::Dragging {
                        grab_x,
                        start_offset,
                        current,
                    };

                    if let Some(on_scroll) = &self.on_scroll {
                        shell.publish(on_scroll(current));
                    }

                    return event::Status::Captured;
                }
                Interaction::Idle => {}
            },
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerLifted { .. })
            | Event::Touch(touch::Event::FingerLost { .. }) => match state.interaction {
                Interaction::Pressed { grab_x, .. } => {
                    state.interaction = Interaction::Idle;

                    if let Some(on_tap) = &self.on_tap {
                        let release_x = cursor.position().map_or(grab_x, |p| p.x);
                        if let Some(index) = geometry::pane_under(
                            release_x - bounds.x,
                            self.offset,
                            bounds.width,
                            self.children.len(),
                        ) {
                            shell.publish(on_tap(index));
                        }
                    }

                    return event::Status::Captured;
                }
                Interaction::Dragging { current, .. } => {
                    state.interaction = Interaction::Idle;

                    if let Some(on_drag_end) = &self.on_drag_end {
                        shell.publish(on_drag_end(current));
                    }

                    return event::Status::Captured;
                }
                Interaction::Idle => {}
            },
            _ => {}
        }

        event::Status::Ignored
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return;
        }

        // The visible window in content coordinates.
        let visible = Rectangle {
            x: bounds.x + self.offset,
            ..bounds
        };

        // Children live in content space; the pane under the pointer sees
        // the cursor shifted into that space.
        let content_cursor = match cursor.position() {
            Some(position) => Cursor::Available(Point::new(position.x + self.offset, position.y)),
            None => Cursor::Unavailable,
        };

        renderer.with_layer(bounds, |renderer| {
            renderer.with_translation(Vector::new(-self.offset, 0.0), |renderer| {
                for ((pane, tree), pane_layout) in self
                    .children
                    .iter()
                    .zip(&tree.children)
                    .zip(layout.children())
                {
                    let pane_bounds = pane_layout.bounds();
                    if pane_bounds.x + pane_bounds.width < visible.x
                        || pane_bounds.x > visible.x + visible.width
                    {
                        continue;
                    }

                    pane.as_widget().draw(
                        tree,
                        renderer,
                        theme,
                        style,
                        pane_layout,
                        content_cursor,
                        &visible,
                    );
                }
            });
        });
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();

        if matches!(state.interaction, Interaction::Dragging { .. }) {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(layout.bounds()) && !self.children.is_empty() {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }

    fn operate(
        &self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation,
    ) {
        operation.container(None, layout.bounds(), &mut |operation| {
            self.children
                .iter()
                .zip(tree.children.iter_mut())
                .zip(layout.children())
                .for_each(|((pane, tree), pane_layout)| {
                    pane.as_widget().operate(tree, pane_layout, renderer, operation);
                });
        });
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        overlay::from_children(
            &mut self.children,
            tree,
            layout,
            renderer,
            translation - Vector::new(self.offset, 0.0),
        )
    }
}

impl<'a, Message, Theme, Renderer> From<Strip<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(strip: Strip<'a, Message, Theme, Renderer>) -> Self {
        Element::new(strip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_threshold_separates_tap_from_drag() {
        // A release inside the threshold must stay a tap.
        let press = Interaction::Pressed {
            grab_x: 100.0,
            start_offset: 0.0,
        };

        if let Interaction::Pressed { grab_x, .. } = press {
            assert!((105.0_f32 - grab_x).abs() < DRAG_THRESHOLD);
            assert!((110.0_f32 - grab_x).abs() > DRAG_THRESHOLD);
        }
    }

    #[test]
    fn test_drag_offset_moves_against_cursor() {
        // Dragging the pointer right pulls earlier panes into view, so the
        // requested offset decreases.
        let grab_x = 200.0_f32;
        let start_offset = 640.0_f32;

        let rightward = start_offset - (260.0 - grab_x);
        assert_eq!(rightward, 580.0);

        let leftward = start_offset - (140.0 - grab_x);
        assert_eq!(leftward, 700.0);
    }

    #[test]
    fn test_state_starts_idle_with_unknown_size() {
        let state = State::new();
        assert_eq!(state.interaction, Interaction::Idle);
        assert_eq!(state.last_size, None);
    }

    #[test]
    fn test_redraw_requests_flow_to_panes_pointer_input_does_not() {
        use iced::window;
        use std::time::Instant;

        // Window events must reach the panes, otherwise a loading
        // spinner never gets to schedule its next frame.
        assert!(!is_pointer(&Event::Window(window::Event::RedrawRequested(
            Instant::now()
        ))));

        // Pointer input stays with the strip's gesture recognition.
        assert!(is_pointer(&Event::Mouse(mouse::Event::CursorEntered)));
        assert!(is_pointer(&Event::Mouse(mouse::Event::ButtonPressed(
            mouse::Button::Left
        ))));
    }
}
