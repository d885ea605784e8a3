//! Asynchronous image loading: read or fetch the source bytes, decode them
//! off the UI path, and hand back an RGBA handle for the pane.

#[allow(unused_imports)]
use log::{debug, warn};
use thiserror::Error;

use iced::widget::image::Handle;

use crate::slide::ImageSource;

/// Why a slide's image could not be produced. The carousel logs these and
/// keeps the placeholder; they never surface to the user.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {detail}")]
    Io { path: String, detail: String },
    #[cfg(feature = "network")]
    #[error("failed to fetch {url}: {detail}")]
    Http { url: String, detail: String },
    #[error("failed to decode image: {0}")]
    Decode(String),
}

/// Resolves a slide source to a drawable handle.
pub async fn load(source: ImageSource) -> Result<Handle, LoadError> {
    match source {
        ImageSource::Handle(handle) => Ok(handle),
        ImageSource::Path(path) => {
            debug!("loading image from {}", path.display());

            let bytes = tokio::fs::read(&path).await.map_err(|e| LoadError::Io {
                path: path.display().to_string(),
                detail: e.to_string(),
            })?;

            decode(&bytes)
        }
        #[cfg(feature = "network")]
        ImageSource::Url(url) => {
            debug!("fetching image from {url}");

            let http_error = |e: reqwest::Error| LoadError::Http {
                url: url.clone(),
                detail: e.to_string(),
            };

            let response = reqwest::get(&url)
                .await
                .and_then(|r| r.error_for_status())
                .map_err(http_error)?;
            let bytes = response.bytes().await.map_err(http_error)?;

            decode(&bytes)
        }
    }
}

/// Decodes bytes into an RGBA handle. Decoding here keeps iced's renderer
/// from having to sniff formats at draw time.
fn decode(bytes: &[u8]) -> Result<Handle, LoadError> {
    let decoded = image::load_from_memory(bytes).map_err(|e| LoadError::Decode(e.to_string()))?;
    let rgba = decoded.into_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}
