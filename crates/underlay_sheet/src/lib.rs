//! Underlay Sheet
//!
//! A draggable bottom-sheet overlay: a panel sliding up from the bottom
//! edge, shown and dismissed programmatically or by dragging, with a
//! dimming backdrop whose opacity tracks the sheet's position.
//!
//! The component is deliberately render-agnostic. It owns one continuously
//! updated scalar, the sheet's top offset, and everything else is either
//! a writer into that scalar (the motion driver, the drag gesture) or a
//! value derived from it (visibility, backdrop opacity). The host supplies
//! a frame clock, recognizer events, and a render layer that reads the
//! offset each frame.
//!
//! # Example
//!
//! ```rust
//! use underlay_core::{Event, Viewport};
//! use underlay_sheet::{BottomSheet, SheetConfig};
//!
//! let sheet = BottomSheet::new(
//!     SheetConfig::new(300.0).on_press_backdrop(|| println!("tapped")),
//!     Viewport::new(400.0, 800.0),
//! );
//! let handle = sheet.handle();
//!
//! // Programmatic show, driven by the host frame clock
//! handle.show().unwrap();
//! while sheet.tick(1.0 / 60.0) {}
//! assert!(handle.is_active());
//!
//! // User drags the sheet most of the way down and releases
//! sheet.handle_event(&Event::drag_start());
//! sheet.handle_event(&Event::drag(0.0, 200.0));
//! sheet.handle_event(&Event::drag_end());
//! while sheet.tick(1.0 / 60.0) {}
//! assert!(!handle.is_active());
//! ```

pub mod config;
pub mod derived;
pub mod gesture;
pub mod handle;
pub mod sheet;

pub use config::{BackdropCallback, SheetConfig, SheetStyle};
pub use derived::{backdrop_opacity, is_visible, VISIBILITY_DEAD_ZONE};
pub use gesture::{DragGesture, DragState};
pub use handle::{SheetError, SheetHandle};
pub use sheet::BottomSheet;
