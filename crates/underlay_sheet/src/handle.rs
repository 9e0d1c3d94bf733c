//! Imperative control surface
//!
//! `SheetHandle` is a plain, clonable handle object with no render-tree
//! binding. It holds a weak reference to the sheet internals, so an owner
//! can keep a handle past the sheet's lifetime without keeping the sheet
//! alive; commands on a dropped sheet fail with [`SheetError::Detached`].

use std::sync::{Mutex, Weak};

use thiserror::Error;
use underlay_core::Signal;

use crate::derived;
use crate::sheet::SheetInner;

/// Errors from the imperative handle
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SheetError {
    /// The sheet instance behind this handle has been dropped
    #[error("sheet instance has been dropped")]
    Detached,
}

/// Imperative show/dismiss handle for one sheet instance
#[derive(Clone)]
pub struct SheetHandle {
    pub(crate) inner: Weak<Mutex<SheetInner>>,
    pub(crate) position: Signal<f32>,
    pub(crate) screen_height: f32,
    pub(crate) open_offset: f32,
    pub(crate) closed_offset: f32,
}

impl SheetHandle {
    /// Animate the sheet to its fully-open resting offset.
    ///
    /// No already-open guard: calling while shown restarts the curve at the
    /// unchanged target, which is harmless.
    pub fn show(&self) -> Result<(), SheetError> {
        let inner = self.inner.upgrade().ok_or(SheetError::Detached)?;
        tracing::debug!("show requested via handle");
        inner.lock().unwrap().driver.animate_to(self.open_offset);
        Ok(())
    }

    /// Animate the sheet to its fully-closed resting offset
    pub fn dismiss(&self) -> Result<(), SheetError> {
        let inner = self.inner.upgrade().ok_or(SheetError::Detached)?;
        tracing::debug!("dismiss requested via handle");
        inner.lock().unwrap().driver.animate_to(self.closed_offset);
        Ok(())
    }

    /// Visibility at the time of the read: a snapshot, not a
    /// subscription. Callers that need continuous visibility should observe
    /// the position signal instead. Reads `false` once the sheet is
    /// dropped.
    pub fn is_active(&self) -> bool {
        if self.inner.strong_count() == 0 {
            return false;
        }
        derived::is_visible(self.position.get(), self.screen_height)
    }
}

impl std::fmt::Debug for SheetHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetHandle")
            .field("is_active", &self.is_active())
            .field("detached", &(self.inner.strong_count() == 0))
            .finish()
    }
}
