use chaoswheel_core::WheelSnapshot;

/// What an observer sees of the wheel during a run.
///
/// A run opens with step 0, the wheel as it stood before ticking, and then
/// reports once after every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Ticks taken so far in this run.
    pub step: usize,

    /// The wheel after those ticks.
    pub snapshot: WheelSnapshot,
}
