//! Core physics for a chaotic waterwheel.
//!
//! A wheel carries evenly spaced buckets on its rim. A fixed source above the
//! top of rotation fills whichever buckets pass beneath it, every bucket drains
//! in proportion to its mass, and gravity acting on the uneven load turns the
//! wheel. The result is the discrete analogue of the Lorenz system.
//!
//! This crate defines:
//!
//! - [`WheelSimulation`] — owns the physical state and advances it with
//!   [`WheelSimulation::update`]
//! - [`Parameters`] — the physical constants of one wheel
//! - [`WheelSnapshot`] — an owned, read-only copy of the state for renderers
//! - [`ConfigurationError`] — the only error, raised at construction
//! - [`Observer`] — receives driver events and optionally returns actions

mod angle;
mod error;
mod inflow;
mod observer;
mod parameters;
mod snapshot;
mod wheel;

pub use angle::wrap_angle;
pub use error::ConfigurationError;
pub use inflow::inflow;
pub use observer::Observer;
pub use parameters::Parameters;
pub use snapshot::WheelSnapshot;
pub use wheel::{DEFAULT_BUCKETS, InitialConditions, MIN_BUCKETS, WheelSimulation};
