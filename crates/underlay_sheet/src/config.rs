//! Sheet configuration
//!
//! All options are fixed at construction; the running component never
//! re-reads a mutated config. Reconfiguring means constructing a fresh
//! sheet.

use std::sync::Arc;

use underlay_animation::{CurveKind, SpringConfig, TimingConfig};
use underlay_core::Color;

/// Callback fired when the backdrop is tapped
pub type BackdropCallback = Arc<dyn Fn() + Send + Sync>;

/// Visual overrides carried to the render layer
///
/// The core never interprets these; they ride along for whoever draws the
/// sheet and backdrop containers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetStyle {
    pub background: Color,
    pub corner_radius: f32,
}

impl Default for SheetStyle {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            corner_radius: 12.0,
        }
    }
}

/// Per-instance sheet configuration
///
/// # Example
///
/// ```rust
/// use underlay_sheet::SheetConfig;
/// use underlay_animation::{CurveKind, SpringConfig};
///
/// let config = SheetConfig::new(300.0)
///     .animation(CurveKind::Spring)
///     .spring(SpringConfig::snappy())
///     .on_press_backdrop(|| println!("backdrop tapped"));
/// ```
#[derive(Clone)]
pub struct SheetConfig {
    /// Sheet height in pixels; defines the fully-open resting offset.
    /// A zero height collapses the resting range; not validated here.
    pub height: f32,
    /// Which curve kind `show`/`dismiss` and gesture settling use
    pub curve: CurveKind,
    /// Spring parameters, used when `curve` is `Spring`
    pub spring: SpringConfig,
    /// Duration + easing, used when `curve` is `Timing`
    pub timing: TimingConfig,
    /// Fill color of the dimming layer
    pub backdrop_color: Color,
    /// Visual overrides for the sheet container
    pub style: SheetStyle,
    /// Visual overrides for the backdrop container
    pub backdrop_style: SheetStyle,
    /// Forwarded verbatim on backdrop tap; dismiss-on-tap is the owner's
    /// wiring, not ours
    pub on_press_backdrop: Option<BackdropCallback>,
}

impl SheetConfig {
    /// Create a configuration for a sheet of the given height in pixels
    pub fn new(height: f32) -> Self {
        Self {
            height,
            curve: CurveKind::default(),
            spring: SpringConfig::default(),
            timing: TimingConfig::default(),
            backdrop_color: Color::BLACK.with_alpha(0.5),
            style: SheetStyle::default(),
            backdrop_style: SheetStyle {
                background: Color::TRANSPARENT,
                corner_radius: 0.0,
            },
            on_press_backdrop: None,
        }
    }

    /// Select the curve kind (default `Timing`)
    pub fn animation(mut self, curve: CurveKind) -> Self {
        self.curve = curve;
        self
    }

    /// Set spring parameters (used when the curve kind is `Spring`)
    pub fn spring(mut self, spring: SpringConfig) -> Self {
        self.spring = spring;
        self
    }

    /// Set duration and easing (used when the curve kind is `Timing`)
    pub fn timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }

    /// Set the dimming layer color
    pub fn backdrop_color(mut self, color: Color) -> Self {
        self.backdrop_color = color;
        self
    }

    /// Set sheet container style overrides
    pub fn style(mut self, style: SheetStyle) -> Self {
        self.style = style;
        self
    }

    /// Set backdrop container style overrides
    pub fn backdrop_style(mut self, style: SheetStyle) -> Self {
        self.backdrop_style = style;
        self
    }

    /// Set the callback forwarded on backdrop tap
    pub fn on_press_backdrop<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_press_backdrop = Some(Arc::new(callback));
        self
    }
}

impl std::fmt::Debug for SheetConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetConfig")
            .field("height", &self.height)
            .field("curve", &self.curve)
            .field("spring", &self.spring)
            .field("timing", &self.timing)
            .field("backdrop_color", &self.backdrop_color)
            .field("style", &self.style)
            .field("backdrop_style", &self.backdrop_style)
            .field(
                "on_press_backdrop",
                &self.on_press_backdrop.as_ref().map(|_| "…"),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use underlay_animation::Easing;

    #[test]
    fn test_defaults() {
        let config = SheetConfig::new(300.0);
        assert_eq!(config.height, 300.0);
        assert_eq!(config.curve, CurveKind::Timing);
        assert_eq!(config.timing.duration_ms, 300);
        assert_eq!(config.timing.easing, Easing::EaseInOutQuad);
        assert!(config.on_press_backdrop.is_none());
        assert_eq!(config.backdrop_color.a, 0.5);
    }

    #[test]
    fn test_builder_chain() {
        let config = SheetConfig::new(240.0)
            .animation(CurveKind::Spring)
            .spring(SpringConfig::wobbly())
            .backdrop_color(Color::BLACK.with_alpha(0.7));

        assert_eq!(config.curve, CurveKind::Spring);
        assert_eq!(config.spring, SpringConfig::wobbly());
        assert_eq!(config.backdrop_color.a, 0.7);
    }
}
