//! Drag gesture settling
//!
//! Translates the host recognizer's drag lifecycle into writes on the
//! position signal, then hands off to the motion driver at release.
//!
//! The state machine is `Idle -> Dragging -> Settling`. The drag context
//! (position captured at gesture start) lives inside the `Dragging` variant
//! and cannot outlive one gesture. `Settling` is simply "not dragging while
//! the release transition runs"; it collapses back to `Idle` when the
//! driver reports the transition settled.

use underlay_animation::MotionDriver;
use underlay_core::Signal;

/// Gesture lifecycle state
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    /// No gesture in progress
    #[default]
    Idle,
    /// Pointer down and tracking; `start_offset` is the position at
    /// gesture start
    Dragging { start_offset: f32 },
    /// Released; the motion driver is settling toward a rest value
    Settling,
}

/// Consumes drag lifecycle events and drives the position signal
pub struct DragGesture {
    position: Signal<f32>,
    state: DragState,
    /// Fully-open resting offset (`screen_height - sheet_height`)
    open_offset: f32,
    /// Fully-closed resting offset (`screen_height`)
    closed_offset: f32,
}

impl DragGesture {
    pub fn new(position: Signal<f32>, open_offset: f32, closed_offset: f32) -> Self {
        Self {
            position,
            state: DragState::Idle,
            open_offset,
            closed_offset,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Gesture start: capture the drag context and preempt any in-flight
    /// transition. A start while already dragging is ignored.
    pub fn on_start(&mut self, driver: &mut MotionDriver) {
        if self.is_dragging() {
            tracing::trace!("drag start ignored: already dragging");
            return;
        }
        driver.cancel();
        let start_offset = self.position.get();
        self.state = DragState::Dragging { start_offset };
        tracing::debug!("drag start at offset {:.1}", start_offset);
    }

    /// Drag update with the translation since gesture start.
    ///
    /// The candidate position is written only when it has not crossed the
    /// fully-open offset; downward drag is unbounded, including past the
    /// closed rest point. Moves outside a drag lifecycle are ignored.
    pub fn on_move(&mut self, delta_y: f32) {
        let DragState::Dragging { start_offset } = self.state else {
            tracing::trace!("drag move ignored outside a drag");
            return;
        };

        let candidate = start_offset + delta_y;
        if candidate < self.open_offset {
            // Upward overshoot: skip the write, keeping the last applied
            // position
            return;
        }
        tracing::trace!("drag move to {:.1}", candidate);
        self.position.set(candidate);
    }

    /// Gesture end: pick a rest value and hand off to the driver.
    ///
    /// Released past the halfway point toward closed dismisses; anything
    /// nearer stays open. A start immediately followed by an end applies
    /// the same rule to the unmoved position.
    pub fn on_end(&mut self, driver: &mut MotionDriver) {
        if !self.is_dragging() {
            tracing::trace!("drag end ignored outside a drag");
            return;
        }

        let current = self.position.get();
        let halfway = self.closed_offset - (self.closed_offset - self.open_offset) / 2.0;
        let target = if current > halfway {
            self.closed_offset
        } else {
            self.open_offset
        };

        tracing::debug!(
            "drag end at {:.1}, settling toward {:.1}",
            current,
            target
        );
        self.state = DragState::Settling;
        driver.animate_to(target);
    }

    /// Called once the release transition has settled
    pub fn on_settled(&mut self) {
        if self.state == DragState::Settling {
            self.state = DragState::Idle;
        }
    }
}
