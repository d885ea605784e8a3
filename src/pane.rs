//! Runtime state of one strip cell: the slide it shows and how far its
//! image load has gotten.

use once_cell::sync::Lazy;

use iced::widget::image::Handle;
use iced::widget::{center, image, stack};
use iced::{ContentFit, Element, Length};

use crate::slide::{ImageSource, Slide};
use crate::widgets::Spinner;

// Shared 1x1 transparent handle for slides with no placeholder.
static BLANK: Lazy<Handle> = Lazy::new(|| Handle::from_rgba(1, 1, vec![0, 0, 0, 0]));

/// How far a pane's image request has gotten.
#[derive(Debug, Clone)]
pub enum LoadPhase {
    /// Request in flight; the placeholder (if any) is displayed.
    Loading,
    /// The decoded image is on screen.
    Ready(Handle),
    /// The request failed; the placeholder stays, as the failure was
    /// already logged.
    Failed,
}

/// One image-bearing cell of the strip. Its position in the carousel's pane
/// list is its index.
#[derive(Debug, Clone)]
pub struct Pane {
    pub slide: Slide,
    pub phase: LoadPhase,
}

impl Pane {
    /// Builds a pane for a slide. Handle sources need no request and start
    /// out ready.
    pub fn new(slide: Slide) -> Self {
        let phase = match &slide.source {
            ImageSource::Handle(handle) => LoadPhase::Ready(handle.clone()),
            _ => LoadPhase::Loading,
        };

        Self { slide, phase }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Loading)
    }

    /// The handle currently on screen: the loaded image, else the
    /// placeholder, else a shared blank.
    pub fn display_handle(&self) -> Handle {
        match &self.phase {
            LoadPhase::Ready(handle) => handle.clone(),
            LoadPhase::Loading | LoadPhase::Failed => self
                .slide
                .placeholder
                .clone()
                .unwrap_or_else(|| BLANK.clone()),
        }
    }

    /// The pane's view fragment: the image filling the cell with aspect
    /// fill, with an activity spinner layered on top while the request is
    /// in flight.
    pub fn view<'a, Message: 'a>(&'a self) -> Element<'a, Message> {
        let picture = image(self.display_handle())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover);

        if self.is_loading() {
            stack![picture, center(Spinner::new())].into()
        } else {
            picture.into()
        }
    }
}
