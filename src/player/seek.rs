//! Seek-bar geometry.

/// Fraction of the bar left of `click_x`, clamped to `[0, 1]`.
///
/// `None` for a zero-width bar.
pub fn click_fraction(click_x: f64, box_left: f64, box_width: f64) -> Option<f64> {
    if box_width.is_nan() || box_width <= 0.0 {
        return None;
    }
    Some(((click_x - box_left) / box_width).clamp(0.0, 1.0))
}

/// Target position in seconds for a click on the seek bar.
///
/// No-op (`None`) while the total duration is unknown or zero.
pub fn seek_target(
    click_x: f64,
    box_left: f64,
    box_width: f64,
    total: Option<f64>,
) -> Option<f64> {
    let total = total.filter(|t| *t > 0.0 && t.is_finite())?;
    click_fraction(click_x, box_left, box_width).map(|f| f * total)
}

/// Target position after scrubbing `delta` seconds from `position`, kept inside the track.
pub fn scrub_target(position: f64, delta: f64, total: Option<f64>) -> Option<f64> {
    let total = total.filter(|t| *t > 0.0 && t.is_finite())?;
    Some((position + delta).clamp(0.0, total))
}
