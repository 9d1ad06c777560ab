/// What an observer can ask of a running driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Halt the wheel after the current tick.
    StopEarly,
}
