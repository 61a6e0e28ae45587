//! The play/pause controller.

use crate::cells::CellSet;
use crate::config::Config;
use crate::error::Error;
use crate::rules::next_generation;
use educe::Educe;
use log::debug;
use std::time::{Duration, Instant};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The controller state.
///
/// Exactly one value at any time, owned by the [`Simulation`]; nothing
/// outside the controller writes it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameState {
    /// Freshly seeded, never played.
    #[default]
    Init,
    /// Stepping is halted until the next [`play`](Simulation::play).
    Paused,
    /// The step loop is running.
    Playing,
}

/// A callback receiving every published `(CellSet, GameState)` snapshot.
pub type Subscriber = Box<dyn FnMut(&CellSet, GameState)>;

/// The controller's repeating timer: a single pending deadline.
///
/// There is at most one deadline at any time, so no sequence of
/// [`play`](Simulation::play)/[`pause`](Simulation::pause) calls can ever
/// run two step chains at once.
#[derive(Clone, Copy, Debug, Default)]
struct Ticker {
    due: Option<Instant>,
}

impl Ticker {
    /// Arms the deadline at `now + delay`, unless one is already pending.
    fn arm(&mut self, now: Instant, delay: Duration) {
        if self.due.is_none() {
            self.due = Some(now + delay);
        }
    }

    /// The pending deadline, if any.
    fn due(&self) -> Option<Instant> {
        self.due
    }

    /// Consumes the deadline if it has passed.
    fn fire(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}

/// The simulation: live cells, controller state, configuration and the
/// step-loop timer, bundled into one owning context.
///
/// The step loop is cooperative. The host event loop asks for the next
/// [`deadline`](Simulation::deadline), sleeps (or polls for input) until
/// then, and calls [`poll`](Simulation::poll). Each `poll` re-checks the
/// state before stepping, so a [`pause`](Simulation::pause) issued between
/// two steps is always observed at the next deadline: the timer fires once
/// more, finds the state is no longer [`GameState::Playing`], and the chain
/// ends without rescheduling.
#[derive(Educe)]
#[educe(Debug)]
pub struct Simulation {
    /// The current generation's live cells.
    cells: CellSet,

    /// The controller state.
    pub(crate) state: GameState,

    /// Configuration, re-read at every scheduling point.
    config: Config,

    /// Number of generations stepped since the seed.
    pub(crate) generation: u64,

    /// The single pending step deadline.
    ticker: Ticker,

    /// Callbacks invoked on every change of the cells or the state.
    #[educe(Debug(ignore))]
    subscribers: Vec<Subscriber>,
}

impl Simulation {
    /// Creates a simulation from a seed and a configuration.
    ///
    /// The initial state is [`GameState::Init`]; nothing is scheduled until
    /// [`play`](Simulation::play) is called.
    pub fn new(cells: CellSet, config: Config) -> Self {
        Simulation {
            cells,
            state: GameState::default(),
            config,
            generation: 0,
            ticker: Ticker::default(),
            subscribers: Vec::new(),
        }
    }

    /// The current generation's live cells.
    pub fn cells(&self) -> &CellSet {
        &self.cells
    }

    /// The controller state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Number of generations stepped since the seed.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Changes the step interval.
    ///
    /// Takes effect at the next scheduling point; an already pending
    /// deadline keeps its original due time.
    ///
    /// # Errors
    ///
    /// [`Error::NonPositiveInterval`] if the interval is zero.
    pub fn set_step_interval(&mut self, interval: Duration) -> Result<(), Error> {
        self.config = self.config.with_step_interval(interval)?;
        Ok(())
    }

    /// Registers a callback for published `(CellSet, GameState)` snapshots.
    ///
    /// The callback fires whenever either value changes: on every
    /// generation, on play/pause transitions, and on reseeding.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&CellSet, GameState) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Starts the step loop.
    ///
    /// A no-op when already playing: the loop is not restarted and no
    /// second chain is spawned. From [`GameState::Init`] or
    /// [`GameState::Paused`], the state becomes [`GameState::Playing`] and
    /// a step is scheduled after the configured interval (or at the still
    /// pending deadline left over from a pause).
    pub fn play(&mut self) {
        if self.state == GameState::Playing {
            debug!("play ignored: already playing");
            return;
        }
        self.state = GameState::Playing;
        self.ticker.arm(Instant::now(), self.config.step_interval());
        debug!("playing from generation {}", self.generation);
        self.publish();
    }

    /// Halts the step loop at the next step boundary.
    ///
    /// A no-op unless currently playing. The pending deadline is not
    /// cancelled; it fires once more, observes the paused state, and the
    /// chain ends. "Requested pause" and "stopped" may thus be up to one
    /// step interval apart.
    pub fn pause(&mut self) {
        if self.state != GameState::Playing {
            debug!("pause ignored: not playing");
            return;
        }
        self.state = GameState::Paused;
        debug!("paused at generation {}", self.generation);
        self.publish();
    }

    /// Advances one generation and publishes the result.
    ///
    /// Usable at any time, in particular for manual stepping while paused.
    pub fn step(&mut self) {
        self.cells = next_generation(&self.cells);
        self.generation += 1;
        self.publish();
    }

    /// Replaces the live cells with an externally produced seed.
    ///
    /// Resets the generation counter and publishes. The controller state
    /// is left untouched.
    pub fn replace_cells(&mut self, cells: CellSet) {
        self.cells = cells;
        self.generation = 0;
        self.publish();
    }

    /// The pending step deadline, for the host event loop's poll timeout.
    pub fn deadline(&self) -> Option<Instant> {
        self.ticker.due()
    }

    /// Runs one cooperative check-then-reschedule step.
    ///
    /// If the deadline has passed and the state is still
    /// [`GameState::Playing`], advances one generation and schedules the
    /// next step `step_interval` after `now`, reading the interval from the
    /// current configuration. If the deadline has passed but the state is
    /// not playing, the chain ends without rescheduling.
    ///
    /// Returns whether a generation was stepped.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.ticker.fire(now) {
            return false;
        }
        if self.state != GameState::Playing {
            return false;
        }
        self.step();
        self.ticker.arm(now, self.config.step_interval());
        true
    }

    fn publish(&mut self) {
        let cells = &self.cells;
        let state = self.state;
        for subscriber in &mut self.subscribers {
            subscriber(cells, state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_holds_a_single_deadline() {
        let mut ticker = Ticker::default();
        let now = Instant::now();
        ticker.arm(now, Duration::from_millis(10));
        let due = ticker.due().unwrap();

        // A second arm while pending does not move the deadline.
        ticker.arm(now, Duration::from_millis(100));
        assert_eq!(ticker.due(), Some(due));
    }

    #[test]
    fn ticker_fires_once_per_arm() {
        let mut ticker = Ticker::default();
        let now = Instant::now();
        ticker.arm(now, Duration::from_millis(10));
        let due = ticker.due().unwrap();

        assert!(!ticker.fire(now));
        assert!(ticker.fire(due));
        assert!(!ticker.fire(due));
        assert_eq!(ticker.due(), None);
    }
}
