use std::sync::mpsc;

/// A structural change requested by an input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Append an empty bucket.
    AddBucket,

    /// Remove the first bucket, unless the wheel is at its minimum.
    RemoveBucket,
}

/// A cloneable handle for queuing commands from any thread.
///
/// Commands are applied by the owning [`Driver`] at the start of its next
/// tick, in the order they arrived.
///
/// [`Driver`]: crate::Driver
#[derive(Debug, Clone)]
pub struct CommandSender(mpsc::Sender<Command>);

impl CommandSender {
    pub(crate) fn new(sender: mpsc::Sender<Command>) -> Self {
        Self(sender)
    }

    /// Queues a command for the next tick.
    ///
    /// Returns `false` if the driver has been dropped, in which case there is
    /// no wheel left to change.
    pub fn send(&self, command: Command) -> bool {
        self.0.send(command).is_ok()
    }
}
