use std::{
    sync::mpsc,
    thread,
    time::{Duration, Instant},
};

use chaoswheel_core::{Observer, WheelSimulation, WheelSnapshot};

use crate::{Action, Command, CommandSender, Config, Event, Solution, Status};

/// Owns a wheel and advances it one tick at a time.
///
/// Bucket changes never touch the wheel directly. They are queued, from this
/// thread via [`request`](Self::request) or from any thread via a
/// [`CommandSender`], and applied at the start of the next tick so they can
/// never interleave with an update.
#[derive(Debug)]
pub struct Driver {
    wheel: WheelSimulation,
    config: Config,
    sender: mpsc::Sender<Command>,
    receiver: mpsc::Receiver<Command>,
    step: usize,
}

impl Driver {
    /// Creates a driver for `wheel`.
    #[must_use]
    pub fn new(wheel: WheelSimulation, config: Config) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            wheel,
            config,
            sender,
            receiver,
            step: 0,
        }
    }

    /// Returns a handle that queues commands from other threads.
    #[must_use]
    pub fn commands(&self) -> CommandSender {
        CommandSender::new(self.sender.clone())
    }

    /// Queues a command for the next tick.
    pub fn request(&self, command: Command) {
        self.sender
            .send(command)
            .expect("the receiver lives as long as the driver");
    }

    /// Applies pending commands, advances the wheel by one step, and returns
    /// the new state.
    pub fn tick(&mut self) -> WheelSnapshot {
        while let Ok(command) = self.receiver.try_recv() {
            self.apply(command);
        }

        self.wheel.update(self.config.dt());
        self.step += 1;

        log::trace!(
            "tick {}: theta = {:.4}, theta_dot = {:.4}",
            self.step,
            self.wheel.theta(),
            self.wheel.theta_dot()
        );

        self.wheel.snapshot()
    }

    /// Runs `steps` ticks back to back, reporting each to `observer`.
    ///
    /// The observer first sees the state before any tick (step 0), then one
    /// event per tick. Returning [`Action::StopEarly`] ends the run.
    pub fn run<Obs>(&mut self, steps: usize, observer: Obs) -> Solution
    where
        Obs: Observer<Event, Action>,
    {
        self.drive(Some(steps), None, observer)
    }

    /// Runs `steps` ticks without observation.
    pub fn run_unobserved(&mut self, steps: usize) -> Solution {
        self.run(steps, ())
    }

    /// Runs ticks in real time, one per [`Config::tick_interval`].
    ///
    /// With `max_steps` of `None` the run only ends when the observer returns
    /// [`Action::StopEarly`]. A tick that falls behind schedule runs
    /// immediately, and the schedule restarts from there rather than bursting
    /// to catch up.
    pub fn run_paced<Obs>(&mut self, max_steps: Option<usize>, observer: Obs) -> Solution
    where
        Obs: Observer<Event, Action>,
    {
        let interval = self.config.tick_interval();
        log::info!("starting ticks every {interval:?}");

        let solution = self.drive(max_steps, Some(interval), observer);

        log::info!("stopped after {} ticks ({:?})", solution.steps, solution.status);
        solution
    }

    /// Returns the wheel being driven.
    #[must_use]
    pub fn wheel(&self) -> &WheelSimulation {
        &self.wheel
    }

    /// Consumes the driver and returns its wheel.
    ///
    /// Commands still queued are discarded.
    #[must_use]
    pub fn into_wheel(self) -> WheelSimulation {
        self.wheel
    }

    /// Returns the number of ticks taken over the driver's lifetime.
    #[must_use]
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the time step and tick interval in use.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::AddBucket => {
                self.wheel.add_bucket();
                log::debug!("added bucket, now {}", self.wheel.bucket_count());
            }
            Command::RemoveBucket => {
                if self.wheel.remove_bucket() {
                    log::debug!("removed bucket, now {}", self.wheel.bucket_count());
                } else {
                    log::debug!("kept {} buckets, already at minimum", self.wheel.bucket_count());
                }
            }
        }
    }

    fn drive<Obs>(
        &mut self,
        max_steps: Option<usize>,
        pace: Option<Duration>,
        mut observer: Obs,
    ) -> Solution
    where
        Obs: Observer<Event, Action>,
    {
        let event = Event {
            step: 0,
            snapshot: self.wheel.snapshot(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Solution {
                status: Status::StoppedByObserver,
                steps: 0,
                snapshot: event.snapshot,
            };
        }

        let mut deadline = Instant::now();
        let mut snapshot = event.snapshot;
        let mut step = 0;

        while max_steps.is_none_or(|max| step < max) {
            if let Some(interval) = pace {
                deadline += interval;
                let now = Instant::now();
                if deadline > now {
                    thread::sleep(deadline - now);
                } else {
                    deadline = now;
                }
            }

            step += 1;
            let event = Event {
                step,
                snapshot: self.tick(),
            };

            if let Some(Action::StopEarly) = observer.observe(&event) {
                return Solution {
                    status: Status::StoppedByObserver,
                    steps: step,
                    snapshot: event.snapshot,
                };
            }
            snapshot = event.snapshot;
        }

        Solution {
            status: Status::Complete,
            steps: step,
            snapshot,
        }
    }
}
