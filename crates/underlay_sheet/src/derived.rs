//! Values derived from the top offset
//!
//! Both functions here are pure: they take the offset as an argument and
//! hold no state, so every caller sees the live position, not a cached
//! snapshot. They are evaluated on demand, with no timers and no polling.

/// Dead zone below which the sheet still counts as hidden (px)
///
/// Absorbs both float settling noise near the closed rest value and the
/// parked-offscreen position itself.
pub const VISIBILITY_DEAD_ZONE: f32 = 10.0;

/// Whether a sheet at `top_offset` counts as visible
pub fn is_visible(top_offset: f32, screen_height: f32) -> bool {
    top_offset <= screen_height - VISIBILITY_DEAD_ZONE
}

/// Backdrop dimming for a sheet at `top_offset`
///
/// Linear over `[screen_height - sheet_height, screen_height]` mapped to
/// `[1, 0]`, clamped at the domain edges. A degenerate (zero-height) sheet
/// reads as fully transparent.
pub fn backdrop_opacity(top_offset: f32, screen_height: f32, sheet_height: f32) -> f32 {
    if sheet_height <= f32::EPSILON {
        return 0.0;
    }
    ((screen_height - top_offset) / sheet_height).clamp(0.0, 1.0)
}
