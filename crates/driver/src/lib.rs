//! Drives a [`WheelSimulation`] the way an application would.
//!
//! The core simulation assumes a single writer. This crate supplies the two
//! collaborators that sit around it:
//!
//! - [`Driver`] — a tick loop that owns one wheel, applies queued
//!   [`Command`]s at the start of each tick, then advances the wheel by one
//!   fixed step and reports a snapshot to an [`Observer`]
//! - [`SharedWheel`] — a mutex-guarded wheel for integrations where ticks and
//!   input genuinely run on different threads
//!
//! # Example
//!
//! ```
//! use chaoswheel_core::WheelSimulation;
//! use chaoswheel_driver::{Command, Config, Driver, Status};
//!
//! let wheel = WheelSimulation::create(9, Some(1)).unwrap();
//! let mut driver = Driver::new(wheel, Config::default());
//!
//! driver.request(Command::AddBucket);
//! let solution = driver.run_unobserved(100);
//!
//! assert_eq!(solution.status, Status::Complete);
//! assert_eq!(solution.snapshot.bucket_count(), 10);
//! ```
//!
//! [`WheelSimulation`]: chaoswheel_core::WheelSimulation
//! [`Observer`]: chaoswheel_core::Observer

mod action;
mod command;
mod config;
mod driver;
mod event;
mod shared;
mod solution;

pub use action::Action;
pub use command::{Command, CommandSender};
pub use config::{Config, ConfigError, DEFAULT_TICK};
pub use driver::Driver;
pub use event::Event;
pub use shared::SharedWheel;
pub use solution::{Solution, Status};
