use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chaoswheel_core::{WheelSimulation, WheelSnapshot};

/// A wheel that several threads may drive at once.
///
/// Every operation holds the lock for its full duration, so an update never
/// observes a bucket list mid-resize. Clones share the same wheel.
///
/// Prefer [`Driver`] when ticks and input can share one loop; this type is
/// for integrations where a timer thread and an input thread are independent.
///
/// [`Driver`]: crate::Driver
#[derive(Debug, Clone)]
pub struct SharedWheel(Arc<Mutex<WheelSimulation>>);

impl SharedWheel {
    /// Puts `wheel` behind a lock that clones of this handle share.
    #[must_use]
    pub fn new(wheel: WheelSimulation) -> Self {
        Self(Arc::new(Mutex::new(wheel)))
    }

    /// Advances the wheel by `dt` seconds.
    pub fn update(&self, dt: f64) {
        self.lock().update(dt);
    }

    /// Appends an empty bucket.
    pub fn add_bucket(&self) {
        self.lock().add_bucket();
    }

    /// Removes the first bucket unless the wheel is at its minimum.
    pub fn remove_bucket(&self) -> bool {
        self.lock().remove_bucket()
    }

    /// Returns an owned copy of the wheel's visible state.
    #[must_use]
    pub fn snapshot(&self) -> WheelSnapshot {
        self.lock().snapshot()
    }

    /// Number of buckets on the wheel.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.lock().bucket_count()
    }

    // Wheel operations cannot panic part way through a mutation, so a poisoned
    // lock still guards a consistent wheel.
    fn lock(&self) -> MutexGuard<'_, WheelSimulation> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
