//! Underlay Animation System
//!
//! Curve primitives and the transition driver for the bottom-sheet overlay.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Timed Curves**: fixed-duration easing that lands exactly on target
//! - **Preemptive Driver**: at most one transition in flight; a new
//!   `animate_to` takes over from the current value, and interrupted
//!   springs inherit velocity

pub mod driver;
pub mod easing;
pub mod spring;
pub mod tween;

pub use driver::{CurveKind, MotionDriver, Transition};
pub use easing::Easing;
pub use spring::{Spring, SpringConfig};
pub use tween::{TimingConfig, Tween};
