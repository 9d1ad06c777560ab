use std::f64::consts::TAU;

/// An owned copy of the wheel's visible state.
///
/// Snapshots are what renderers and observers get to see. They share nothing
/// with the live simulation, so holding one never blocks an update.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct WheelSnapshot {
    /// Wheel angle in `[0, 2π)`.
    pub theta: f64,

    /// Angular velocity (rad/s).
    pub theta_dot: f64,

    /// Fill fraction of each bucket, `mass / capacity`, in bucket order.
    pub fills: Vec<f64>,
}

impl WheelSnapshot {
    /// Returns the number of buckets captured.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.fills.len()
    }

    /// Returns the angular position of bucket `index`, `theta + index·2π/n`.
    ///
    /// The result is not wrapped. Returns `None` if `index` is out of range.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn bucket_angle(&self, index: usize) -> Option<f64> {
        let spacing = TAU / self.fills.len() as f64;
        (index < self.fills.len()).then(|| self.theta + spacing * index as f64)
    }
}
