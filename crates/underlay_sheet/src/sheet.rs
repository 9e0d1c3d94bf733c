//! The bottom-sheet component
//!
//! `BottomSheet` owns the position signal, the motion driver, and the drag
//! gesture controller for one sheet instance. The host wires three things:
//!
//! 1. the frame clock into [`BottomSheet::tick`],
//! 2. recognizer events into [`BottomSheet::handle_event`],
//! 3. the render layer onto [`BottomSheet::top_offset`],
//!    [`BottomSheet::backdrop_opacity`] and the config's styles.
//!
//! Independent instances share nothing; each has its own signal and
//! timeline.

use std::sync::{Arc, Mutex};

use underlay_animation::MotionDriver;
use underlay_core::events::event_types;
use underlay_core::{Event, EventData, Signal, Viewport};

use crate::config::SheetConfig;
use crate::derived;
use crate::gesture::{DragGesture, DragState};
use crate::handle::SheetHandle;

/// Mutable internals shared between the sheet and its handles
pub(crate) struct SheetInner {
    pub(crate) driver: MotionDriver,
    pub(crate) gesture: DragGesture,
}

/// A draggable bottom-sheet overlay instance
///
/// # Example
///
/// ```rust
/// use underlay_core::Viewport;
/// use underlay_sheet::{BottomSheet, SheetConfig};
///
/// let sheet = BottomSheet::new(SheetConfig::new(300.0), Viewport::new(400.0, 800.0));
/// let handle = sheet.handle();
///
/// handle.show().unwrap();
/// while sheet.tick(1.0 / 60.0) {}
///
/// assert!(handle.is_active());
/// assert_eq!(sheet.top_offset(), 500.0);
/// ```
pub struct BottomSheet {
    config: SheetConfig,
    viewport: Viewport,
    position: Signal<f32>,
    inner: Arc<Mutex<SheetInner>>,
}

impl BottomSheet {
    /// Construct a sheet, parked fully closed below the viewport
    pub fn new(config: SheetConfig, viewport: Viewport) -> Self {
        let position = Signal::new(viewport.height);
        let open_offset = viewport.height - config.height;

        let driver = MotionDriver::new(
            position.clone(),
            config.curve,
            config.spring,
            config.timing,
        );
        let gesture = DragGesture::new(position.clone(), open_offset, viewport.height);

        Self {
            config,
            viewport,
            position,
            inner: Arc::new(Mutex::new(SheetInner { driver, gesture })),
        }
    }

    /// Fully-open resting offset (`screen_height - sheet_height`)
    pub fn open_offset(&self) -> f32 {
        self.viewport.height - self.config.height
    }

    /// Fully-closed resting offset (`screen_height`)
    pub fn closed_offset(&self) -> f32 {
        self.viewport.height
    }

    /// Create an imperative handle detached from this instance's lifetime
    pub fn handle(&self) -> SheetHandle {
        SheetHandle {
            inner: Arc::downgrade(&self.inner),
            position: self.position.clone(),
            screen_height: self.viewport.height,
            open_offset: self.open_offset(),
            closed_offset: self.closed_offset(),
        }
    }

    /// Animate toward fully open
    pub fn show(&self) {
        tracing::debug!("show requested");
        self.inner.lock().unwrap().driver.animate_to(self.open_offset());
    }

    /// Animate toward fully closed
    pub fn dismiss(&self) {
        tracing::debug!("dismiss requested");
        self.inner
            .lock()
            .unwrap()
            .driver
            .animate_to(self.closed_offset());
    }

    /// Park fully open with no transition
    pub fn snap_open(&self) {
        self.inner.lock().unwrap().driver.snap_to(self.open_offset());
    }

    /// Park fully closed with no transition
    pub fn snap_closed(&self) {
        self.inner.lock().unwrap().driver.snap_to(self.closed_offset());
    }

    /// Advance the in-flight transition by `dt` seconds.
    ///
    /// Returns `true` while a transition remains active, so a host can stop
    /// scheduling frames for an idle sheet.
    pub fn tick(&self, dt: f32) -> bool {
        let mut inner = self.inner.lock().unwrap();
        let animating = inner.driver.tick(dt);
        if !animating {
            inner.gesture.on_settled();
        }
        animating
    }

    /// Route one recognizer event into the gesture controller or the
    /// backdrop.
    ///
    /// Drag lifecycle events feed the gesture state machine; a pointer
    /// release over the backdrop forwards the configured press callback
    /// verbatim. Everything else is ignored.
    pub fn handle_event(&self, event: &Event) {
        match event.event_type {
            event_types::DRAG_START => {
                let mut inner = self.inner.lock().unwrap();
                let SheetInner { driver, gesture } = &mut *inner;
                gesture.on_start(driver);
            }
            event_types::DRAG => {
                if let EventData::Drag { delta_y, .. } = event.data {
                    self.inner.lock().unwrap().gesture.on_move(delta_y);
                }
            }
            event_types::DRAG_END => {
                let mut inner = self.inner.lock().unwrap();
                let SheetInner { driver, gesture } = &mut *inner;
                gesture.on_end(driver);
            }
            event_types::POINTER_UP => {
                if let EventData::Pointer { x, y } = event.data {
                    if self.backdrop_hit_test(x, y) {
                        if let Some(callback) = &self.config.on_press_backdrop {
                            tracing::debug!("backdrop press at ({x:.0}, {y:.0})");
                            callback();
                        }
                    }
                }
            }
            _ => {}
        }
    }

    /// Current top offset in pixels from the top of the screen
    pub fn top_offset(&self) -> f32 {
        self.position.get()
    }

    /// Visibility derived from the live position
    pub fn is_open(&self) -> bool {
        derived::is_visible(self.position.get(), self.viewport.height)
    }

    /// Backdrop dimming derived from the live position (0.0 to 1.0)
    pub fn backdrop_opacity(&self) -> f32 {
        derived::backdrop_opacity(self.position.get(), self.viewport.height, self.config.height)
    }

    /// Whether `(x, y)` lands on the interactive backdrop region.
    ///
    /// The backdrop only participates in hit-testing while the sheet is
    /// visible; the region is everything above the sheet's top edge.
    pub fn backdrop_hit_test(&self, x: f32, y: f32) -> bool {
        if !self.is_open() {
            return false;
        }
        x >= 0.0 && x <= self.viewport.width && y >= 0.0 && y < self.top_offset()
    }

    /// Whether a transition is currently in flight
    pub fn is_animating(&self) -> bool {
        self.inner.lock().unwrap().driver.is_animating()
    }

    /// Current gesture lifecycle state
    pub fn drag_state(&self) -> DragState {
        self.inner.lock().unwrap().gesture.state()
    }

    /// The live position signal, for render layers that observe instead of
    /// polling
    pub fn position(&self) -> &Signal<f32> {
        &self.position
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SheetConfig;

    fn fixture() -> BottomSheet {
        BottomSheet::new(SheetConfig::new(400.0), Viewport::new(400.0, 800.0))
    }

    fn settle(sheet: &BottomSheet) {
        for _ in 0..120 {
            sheet.tick(1.0 / 60.0);
        }
    }

    #[test]
    fn test_starts_parked_closed() {
        let sheet = fixture();
        assert_eq!(sheet.top_offset(), 800.0);
        assert!(!sheet.is_open());
        assert_eq!(sheet.backdrop_opacity(), 0.0);
        assert_eq!(sheet.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_show_then_dismiss() {
        let sheet = fixture();

        sheet.show();
        assert!(sheet.is_animating());
        settle(&sheet);
        assert_eq!(sheet.top_offset(), 400.0);
        assert!(sheet.is_open());
        assert_eq!(sheet.backdrop_opacity(), 1.0);

        sheet.dismiss();
        settle(&sheet);
        assert_eq!(sheet.top_offset(), 800.0);
        assert!(!sheet.is_open());
        assert_eq!(sheet.backdrop_opacity(), 0.0);
    }

    #[test]
    fn test_snap_skips_animation() {
        let sheet = fixture();
        sheet.snap_open();
        assert!(!sheet.is_animating());
        assert_eq!(sheet.top_offset(), 400.0);

        sheet.snap_closed();
        assert_eq!(sheet.top_offset(), 800.0);
    }

    #[test]
    fn test_backdrop_hit_test_gated_on_visibility() {
        let sheet = fixture();
        // Closed: nothing hit-tests, the backdrop is inert
        assert!(!sheet.backdrop_hit_test(200.0, 100.0));

        sheet.snap_open();
        assert!(sheet.backdrop_hit_test(200.0, 100.0));
        // On the sheet itself, not the backdrop
        assert!(!sheet.backdrop_hit_test(200.0, 500.0));
        // Outside the viewport
        assert!(!sheet.backdrop_hit_test(-1.0, 100.0));
        assert!(!sheet.backdrop_hit_test(500.0, 100.0));
    }

    #[test]
    fn test_tick_reports_idle_after_settle() {
        let sheet = fixture();
        sheet.show();
        let mut frames = 0;
        while sheet.tick(1.0 / 60.0) {
            frames += 1;
            assert!(frames < 1000, "transition never settled");
        }
        assert!(!sheet.is_animating());
        assert!(!sheet.tick(1.0 / 60.0));
    }

    #[test]
    fn test_independent_instances() {
        let a = fixture();
        let b = fixture();

        a.show();
        settle(&a);

        assert!(a.is_open());
        assert!(!b.is_open());
        assert_eq!(b.top_offset(), 800.0);
    }
}
