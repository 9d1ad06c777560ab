use chaoswheel_core::WheelSnapshot;

/// Why a run stopped ticking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The wheel took every tick it was asked for.
    Complete,

    /// An observer halted the wheel with [`Action::StopEarly`].
    ///
    /// [`Action::StopEarly`]: crate::Action::StopEarly
    StoppedByObserver,
}

/// Where the wheel ended up after a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Why the run stopped.
    pub status: Status,

    /// Ticks taken before stopping.
    pub steps: usize,

    /// The wheel after its last tick.
    pub snapshot: WheelSnapshot,
}
