//! Offset/index math for the paging strip. All functions tolerate a zero
//! pane width (the strip before its first layout) and an empty pane list by
//! degrading to offset 0 / page 0.

/// How much off-edge drag distance survives when bouncing is enabled.
const RUBBER_RESISTANCE: f32 = 0.45;

/// The largest settled offset: the left edge of the last pane.
pub fn max_offset(count: usize, pane_width: f32) -> f32 {
    if count <= 1 || pane_width <= 0.0 {
        0.0
    } else {
        (count - 1) as f32 * pane_width
    }
}

/// The settled offset of page `index`.
pub fn offset_for(index: usize, pane_width: f32) -> f32 {
    index as f32 * pane_width.max(0.0)
}

/// The page nearest to `offset`, clamped into range.
pub fn page_at(offset: f32, pane_width: f32, count: usize) -> usize {
    if count == 0 || pane_width <= 0.0 {
        return 0;
    }

    let page = (offset / pane_width).round().max(0.0) as usize;
    page.min(count - 1)
}

/// Which pane sits under viewport x-coordinate `x` at the given offset.
pub fn pane_under(x: f32, offset: f32, pane_width: f32, count: usize) -> Option<usize> {
    if count == 0 || pane_width <= 0.0 {
        return None;
    }

    let content_x = x + offset;
    if content_x < 0.0 {
        return None;
    }

    let index = (content_x / pane_width).floor() as usize;
    (index < count).then_some(index)
}

/// Keeps a dragged offset within bounds: a hard clamp, or rubber-band
/// resistance past the edges when `bounces` is set.
pub fn constrain(offset: f32, max: f32, bounces: bool) -> f32 {
    if !bounces {
        return offset.clamp(0.0, max);
    }

    if offset < 0.0 {
        offset * RUBBER_RESISTANCE
    } else if offset > max {
        max + (offset - max) * RUBBER_RESISTANCE
    } else {
        offset
    }
}
