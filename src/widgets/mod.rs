//! Hand-written widgets backing the carousel: the paging strip, the dot
//! page indicator, and the pane loading spinner.

pub mod indicator;
pub mod spinner;
pub mod strip;

pub use indicator::PageIndicator;
pub use spinner::Spinner;
pub use strip::Strip;
