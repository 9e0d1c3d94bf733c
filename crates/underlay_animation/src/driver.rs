//! Transition driver
//!
//! `MotionDriver` owns the one in-flight transition for an animated scalar
//! and writes every intermediate value into the scalar's `Signal`. At most
//! one transition is active; starting a new one preempts the old
//! immediately, picking up from the signal's current value, never from the
//! old target. Curve kind and parameters are sampled when a transition
//! starts; changing them never alters a transition already in flight.

use underlay_core::Signal;

use crate::spring::{Spring, SpringConfig};
use crate::tween::{TimingConfig, Tween};

/// Which curve primitive `animate_to` starts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CurveKind {
    /// Physical spring; no fixed duration
    Spring,
    /// Fixed duration with easing (default)
    #[default]
    Timing,
}

/// One in-flight transition
#[derive(Clone, Copy, Debug)]
pub enum Transition {
    Spring(Spring),
    Timed(Tween),
}

impl Transition {
    /// Advance by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        match self {
            Transition::Spring(spring) => spring.step(dt),
            Transition::Timed(tween) => tween.tick(dt * 1000.0),
        }
    }

    /// Current position
    pub fn value(&self) -> f32 {
        match self {
            Transition::Spring(spring) => spring.value(),
            Transition::Timed(tween) => tween.value(),
        }
    }

    /// The rest value this transition converges to
    pub fn target(&self) -> f32 {
        match self {
            Transition::Spring(spring) => spring.target(),
            Transition::Timed(tween) => tween.target(),
        }
    }

    /// Whether the transition has reached its rest state
    pub fn is_settled(&self) -> bool {
        match self {
            Transition::Spring(spring) => spring.is_settled(),
            Transition::Timed(tween) => tween.is_finished(),
        }
    }
}

/// Per-instance animation driver for one scalar signal
pub struct MotionDriver {
    position: Signal<f32>,
    kind: CurveKind,
    spring: SpringConfig,
    timing: TimingConfig,
    active: Option<Transition>,
}

impl MotionDriver {
    pub fn new(
        position: Signal<f32>,
        kind: CurveKind,
        spring: SpringConfig,
        timing: TimingConfig,
    ) -> Self {
        Self {
            position,
            kind,
            spring,
            timing,
            active: None,
        }
    }

    /// Begin a transition of the signal toward `target`
    ///
    /// Preempts any in-flight transition. The replacement starts from the
    /// signal's current value; a spring preempting a spring inherits its
    /// velocity so motion stays continuous.
    pub fn animate_to(&mut self, target: f32) {
        let current = self.position.get();

        let transition = match self.kind {
            CurveKind::Spring => {
                let velocity = match self.active {
                    Some(Transition::Spring(spring)) => spring.velocity(),
                    _ => self.spring.velocity,
                };
                let mut spring = Spring::new(self.spring, current);
                spring.set_velocity(velocity);
                spring.set_target(target);
                Transition::Spring(spring)
            }
            CurveKind::Timing => Transition::Timed(Tween::new(self.timing, current, target)),
        };

        tracing::debug!(
            "animate_to target={:.1} from={:.1} kind={:?}",
            target,
            current,
            self.kind
        );
        self.active = Some(transition);
    }

    /// Jump the signal to `target` with no transition
    pub fn snap_to(&mut self, target: f32) {
        self.active = None;
        self.position.set(target);
    }

    /// Drop the in-flight transition, leaving the signal where it is
    pub fn cancel(&mut self) {
        if self.active.take().is_some() {
            tracing::debug!("transition cancelled at {:.1}", self.position.get());
        }
    }

    /// Advance the in-flight transition by `dt` seconds and publish the new
    /// value. Returns `true` while a transition remains active.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(transition) = self.active.as_mut() else {
            return false;
        };

        transition.step(dt);
        let value = transition.value();
        let settled = transition.is_settled();
        self.position.set(value);
        tracing::trace!("transition value={:.2} settled={}", value, settled);

        if settled {
            self.active = None;
        }
        self.active.is_some()
    }

    /// Whether a transition is currently in flight
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Target of the in-flight transition, if any
    pub fn target(&self) -> Option<f32> {
        self.active.as_ref().map(Transition::target)
    }

    /// The signal this driver writes into
    pub fn position(&self) -> &Signal<f32> {
        &self.position
    }
}
