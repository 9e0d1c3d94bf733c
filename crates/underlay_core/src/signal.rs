//! Observable value cells
//!
//! `Signal<T>` holds a single mutable value plus an observer registry scoped
//! to that one cell. Writers call `set` (or `update`); every registered
//! observer is invoked with the new value after the write lands. Readers
//! that want the value at a point in time call `get`; there is no caching
//! layer between a signal and its readers.
//!
//! Observers run on the writer's thread, outside the value lock, so an
//! observer may itself read (or write) the signal without deadlocking.

use std::sync::{Arc, Mutex};

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Unique identifier for a registered observer
    pub struct ObserverId;
}

/// Observer callback, invoked with the new value after every write
type Observer<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct SignalInner<T> {
    value: Mutex<T>,
    observers: Mutex<SlotMap<ObserverId, Observer<T>>>,
}

/// A shared observable value
///
/// Cloning a `Signal` clones the handle, not the value: all clones read and
/// write the same cell. `Signal` is `Send + Sync` for `T: Send`; writes are
/// totally ordered by the inner lock.
pub struct Signal<T> {
    inner: Arc<SignalInner<T>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Send + 'static> Signal<T> {
    /// Create a new signal with an initial value
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(SignalInner {
                value: Mutex::new(initial),
                observers: Mutex::new(SlotMap::with_key()),
            }),
        }
    }

    /// Read the current value
    pub fn get(&self) -> T {
        self.inner.value.lock().unwrap().clone()
    }

    /// Write a new value and notify all observers
    pub fn set(&self, value: T) {
        {
            let mut guard = self.inner.value.lock().unwrap();
            *guard = value.clone();
        }
        self.notify(&value);
    }

    /// Mutate the value in place, then notify all observers
    pub fn update<F: FnOnce(&mut T)>(&self, f: F) {
        let snapshot = {
            let mut guard = self.inner.value.lock().unwrap();
            f(&mut guard);
            guard.clone()
        };
        self.notify(&snapshot);
    }

    /// Register an observer invoked with the new value on every write
    pub fn observe<F>(&self, f: F) -> ObserverId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.inner.observers.lock().unwrap().insert(Arc::new(f))
    }

    /// Remove a previously registered observer
    ///
    /// Returns `false` if the id was already removed.
    pub fn unobserve(&self, id: ObserverId) -> bool {
        self.inner.observers.lock().unwrap().remove(id).is_some()
    }

    /// Number of currently registered observers
    pub fn observer_count(&self) -> usize {
        self.inner.observers.lock().unwrap().len()
    }

    // Snapshot the registry first so callbacks run without holding either
    // lock; an observer may re-enter the signal.
    fn notify(&self, value: &T) {
        let callbacks: SmallVec<[Observer<T>; 4]> = self
            .inner
            .observers
            .lock()
            .unwrap()
            .values()
            .cloned()
            .collect();
        for callback in callbacks {
            callback(value);
        }
    }
}

impl<T: Clone + Send + std::fmt::Debug + 'static> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal").field("value", &self.get()).finish()
    }
}
