//! Underlay Core
//!
//! Foundational primitives for the Underlay bottom-sheet overlay:
//!
//! - **Observable Values**: single-value cells with an instance-scoped
//!   observer registry, no global reactive graph
//! - **Input Events**: the gesture/pointer event model delivered by the
//!   host's recognizer
//! - **Viewport Metrics**: screen dimensions read once at construction
//!
//! # Example
//!
//! ```rust
//! use underlay_core::Signal;
//!
//! let offset = Signal::new(800.0f32);
//!
//! // Observe every write
//! let _id = offset.observe(|v| {
//!     println!("offset is now {v}");
//! });
//!
//! offset.set(500.0);
//! assert_eq!(offset.get(), 500.0);
//! ```

pub mod color;
pub mod events;
pub mod signal;
pub mod viewport;

pub use color::Color;
pub use events::{Event, EventData, EventType};
pub use signal::{ObserverId, Signal};
pub use viewport::Viewport;
