//! The waterwheel state and its integrator.
//!
//! Each call to [`WheelSimulation::update`] takes one explicit step:
//!
//! ```text
//! theta      ← wrap(theta + theta_dot·dt)
//! I          = I_wheel + Σ m_i·r²
//! T          = −c·theta_dot + Σ m_i·r·g·sin(theta + i·Δ)
//! theta_dot  ← theta_dot + (T / I)·dt
//! m_i        ← clamp(m_i − k·m_i·dt + q(theta + i·Δ)·dt, 0, capacity)
//! ```
//!
//! where `Δ = 2π / n`. The torque uses the freshly wrapped angle and the masses
//! from before the step; the buckets then fill and drain at the new angle.


use std::f64::consts::TAU;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{ConfigurationError, Parameters, WheelSnapshot, inflow, wrap_angle};

/// Fewest buckets a wheel may carry.
pub const MIN_BUCKETS: usize = 5;

/// Bucket count used when none is requested.
pub const DEFAULT_BUCKETS: usize = 9;

/// Starting angle and angular velocity of a wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialConditions {
    /// Wheel angle in radians. Wrapped into `[0, 2π)` on construction.
    pub theta: f64,
    /// Angular velocity (rad/s).
    pub theta_dot: f64,
}

/// A waterwheel and everything that moves on it.
///
/// The simulation has no terminal state. It evolves for as long as something
/// keeps calling [`update`](Self::update).
#[derive(Debug, Clone, PartialEq)]
pub struct WheelSimulation {
    parameters: Parameters,
    theta: f64,
    theta_dot: f64,
    buckets: Vec<f64>,
}

impl WheelSimulation {
    /// Creates a wheel with default parameters and a random start.
    ///
    /// With `Some(seed)` the starting angle and velocity are reproducible;
    /// with `None` they are drawn from system entropy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::TooFewBuckets`] if `bucket_count` is below
    /// [`MIN_BUCKETS`].
    pub fn create(bucket_count: usize, seed: Option<u64>) -> Result<Self, ConfigurationError> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_parameters(Parameters::default(), bucket_count, &mut rng)
    }

    /// Creates a wheel with custom parameters, drawing its start from `rng`.
    ///
    /// `theta` is uniform on `[0, 2π)` and `theta_dot` uniform on `[-0.5, 0.5)`.
    /// All buckets start empty.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if `bucket_count` is below
    /// [`MIN_BUCKETS`] or any parameter is invalid. Nothing is drawn from
    /// `rng` in that case.
    pub fn with_parameters<R>(
        parameters: Parameters,
        bucket_count: usize,
        rng: &mut R,
    ) -> Result<Self, ConfigurationError>
    where
        R: Rng + ?Sized,
    {
        check_bucket_count(bucket_count)?;
        parameters.validate()?;

        let initial = InitialConditions {
            theta: rng.gen_range(0.0..TAU),
            theta_dot: rng.gen_range(-0.5..0.5),
        };
        Self::with_initial(parameters, bucket_count, initial)
    }

    /// Creates a wheel with a fixed start and empty buckets.
    ///
    /// `initial.theta` is wrapped into `[0, 2π)`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if `bucket_count` is below
    /// [`MIN_BUCKETS`], any parameter is invalid, or either initial value is
    /// not finite.
    pub fn with_initial(
        parameters: Parameters,
        bucket_count: usize,
        initial: InitialConditions,
    ) -> Result<Self, ConfigurationError> {
        check_bucket_count(bucket_count)?;
        parameters.validate()?;

        let InitialConditions { theta, theta_dot } = initial;
        for (name, value) in [("theta", theta), ("theta_dot", theta_dot)] {
            if !value.is_finite() {
                return Err(ConfigurationError::InvalidInitialCondition { name, value });
            }
        }

        log::debug!(
            "created wheel: {bucket_count} buckets, theta = {theta:.4}, theta_dot = {theta_dot:.4}"
        );

        Ok(Self {
            parameters,
            theta: wrap_angle(theta),
            theta_dot,
            buckets: vec![0.0; bucket_count],
        })
    }

    /// Advances the wheel by `dt` seconds.
    ///
    /// The step is explicit and only stable for `dt` small relative to the
    /// damping, gravity and drain time scales. The nominal tick is 0.03 s.
    ///
    /// `dt` must be finite and positive.
    pub fn update(&mut self, dt: f64) {
        debug_assert!(
            dt.is_finite() && dt > 0.0,
            "time step must be finite and positive, got {dt}"
        );

        self.step_rotation(dt);
        self.step_buckets(dt);
    }

    /// Appends an empty bucket.
    ///
    /// Bucket spacing shrinks accordingly from the next update on.
    pub fn add_bucket(&mut self) {
        self.buckets.push(0.0);
    }

    /// Removes the first bucket, discarding its fluid.
    ///
    /// Does nothing once the wheel is down to [`MIN_BUCKETS`]. Returns whether
    /// a bucket was removed; hitting the floor is not a failure.
    pub fn remove_bucket(&mut self) -> bool {
        if self.buckets.len() > MIN_BUCKETS {
            self.buckets.remove(0);
            true
        } else {
            false
        }
    }

    /// Returns an owned copy of the visible state.
    #[must_use]
    pub fn snapshot(&self) -> WheelSnapshot {
        let capacity = self.parameters.bucket_capacity;
        WheelSnapshot {
            theta: self.theta,
            theta_dot: self.theta_dot,
            fills: self.buckets.iter().map(|mass| mass / capacity).collect(),
        }
    }

    /// Fill rate for a bucket at `angle` on this wheel.
    #[must_use]
    pub fn inflow(&self, angle: f64) -> f64 {
        inflow(angle, self.buckets.len(), self.parameters.fill_rate)
    }

    /// Effective moment of inertia: the wheel plus each bucket's fluid as a
    /// point mass on the rim.
    #[must_use]
    pub fn inertia(&self) -> f64 {
        let r = self.parameters.radius;
        self.buckets
            .iter()
            .fold(self.parameters.wheel_inertia, |inertia, mass| {
                inertia + mass * r * r
            })
    }

    /// Net torque: viscous damping plus gravity acting on every bucket.
    #[must_use]
    pub fn torque(&self) -> f64 {
        let Parameters {
            radius,
            damping,
            gravity,
            ..
        } = self.parameters;
        let spacing = self.spacing();

        self.buckets.iter().zip(0_u32..).fold(
            -(damping * self.theta_dot),
            |torque, (mass, i)| {
                torque + mass * radius * gravity * (self.theta + spacing * f64::from(i)).sin()
            },
        )
    }

    /// Angle between neighbouring buckets, `2π / n`.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let n = self.buckets.len() as f64;
        TAU / n
    }

    /// Wheel angle in `[0, 2π)`.
    #[must_use]
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Angular velocity (rad/s).
    #[must_use]
    pub fn theta_dot(&self) -> f64 {
        self.theta_dot
    }

    /// Number of buckets on the wheel.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Fluid mass in each bucket, in bucket order.
    #[must_use]
    pub fn masses(&self) -> &[f64] {
        &self.buckets
    }

    /// Physical constants this wheel was built with.
    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    fn step_rotation(&mut self, dt: f64) {
        self.theta = wrap_angle(self.theta + self.theta_dot * dt);

        let inertia = self.inertia();
        let torque = self.torque();
        self.theta_dot += torque / inertia * dt;
    }

    fn step_buckets(&mut self, dt: f64) {
        let Parameters {
            bucket_capacity,
            drain_rate,
            fill_rate,
            ..
        } = self.parameters;
        let count = self.buckets.len();
        let spacing = self.spacing();
        let theta = self.theta;

        for (mass, i) in self.buckets.iter_mut().zip(0_u32..) {
            let angle = theta + spacing * f64::from(i);
            *mass += *mass * -drain_rate * dt + dt * inflow(angle, count, fill_rate);
            *mass = mass.clamp(0.0, bucket_capacity);
        }
    }
}

fn check_bucket_count(bucket_count: usize) -> Result<(), ConfigurationError> {
    if bucket_count < MIN_BUCKETS {
        return Err(ConfigurationError::TooFewBuckets {
            requested: bucket_count,
            minimum: MIN_BUCKETS,
        });
    }
    Ok(())
}
