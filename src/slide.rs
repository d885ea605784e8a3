//! The per-slide data model: an image source plus an optional placeholder.

use std::path::PathBuf;

use iced::widget::image::Handle;

/// Where a slide's image comes from.
///
/// `Path` and `Url` sources are resolved asynchronously by the loader;
/// a `Handle` source is already decoded and displays immediately.
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// An image file on disk.
    Path(PathBuf),
    /// An image fetched over HTTP(S).
    #[cfg(feature = "network")]
    Url(String),
    /// A ready-made iced image handle.
    Handle(Handle),
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        ImageSource::Path(path)
    }
}

impl From<&std::path::Path> for ImageSource {
    fn from(path: &std::path::Path) -> Self {
        ImageSource::Path(path.to_path_buf())
    }
}

impl From<Handle> for ImageSource {
    fn from(handle: Handle) -> Self {
        ImageSource::Handle(handle)
    }
}

/// One slide of the carousel. Immutable once placed in a
/// [`Config`](crate::Config); rebuilding the carousel replaces all slides
/// wholesale.
#[derive(Debug, Clone)]
pub struct Slide {
    pub source: ImageSource,
    /// Shown while the image loads, and kept if the load fails.
    pub placeholder: Option<Handle>,
}

impl Slide {
    pub fn new(source: impl Into<ImageSource>) -> Self {
        Self {
            source: source.into(),
            placeholder: None,
        }
    }

    /// Sets the placeholder shown until the image arrives.
    #[must_use]
    pub fn placeholder(mut self, handle: Handle) -> Self {
        self.placeholder = Some(handle);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_from_path() {
        let slide = Slide::new(PathBuf::from("/tmp/cat.png"));
        assert!(matches!(slide.source, ImageSource::Path(_)));
        assert!(slide.placeholder.is_none());
    }

    #[test]
    fn test_slide_placeholder() {
        let blank = Handle::from_rgba(1, 1, vec![0, 0, 0, 0]);
        let slide = Slide::new(blank.clone()).placeholder(blank);
        assert!(matches!(slide.source, ImageSource::Handle(_)));
        assert!(slide.placeholder.is_some());
    }
}
