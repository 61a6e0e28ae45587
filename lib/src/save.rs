#![cfg(feature = "serde")]
//! Saving and restoring the simulation.

use crate::cells::{CellSet, Coord};
use crate::config::Config;
use crate::error::Error;
use crate::simulation::{GameState, Simulation};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A representation of the simulation which can be easily serialized.
///
/// This is the state-transfer hook for frontends that survive reloads:
/// one snapshot of the current generation, not a history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationSer {
    /// The live cells, sorted for deterministic output.
    cells: Vec<Coord>,

    /// The controller state at save time.
    state: GameState,

    /// The step interval in milliseconds.
    step_interval_ms: u64,

    /// Number of generations stepped since the seed.
    generation: u64,
}

impl Simulation {
    /// Saves the simulation as a [`SimulationSer`].
    pub fn ser(&self) -> SimulationSer {
        let mut cells: Vec<Coord> = self.cells().iter().collect();
        cells.sort_unstable();
        let millis = self.config().step_interval().as_millis();
        SimulationSer {
            cells,
            state: self.state(),
            step_interval_ms: u64::try_from(millis).unwrap_or(u64::MAX),
            generation: self.generation,
        }
    }
}

impl SimulationSer {
    /// Restores the simulation from the snapshot.
    ///
    /// A snapshot taken while playing restores as [`GameState::Paused`]:
    /// restoring never starts a step chain by itself.
    ///
    /// # Errors
    ///
    /// [`Error::NonPositiveInterval`] if the saved interval is zero.
    pub fn restore(&self) -> Result<Simulation, Error> {
        let config = Config::new(Duration::from_millis(self.step_interval_ms))?;
        let cells: CellSet = self.cells.iter().copied().collect();
        let mut simulation = Simulation::new(cells, config);
        simulation.state = match self.state {
            GameState::Playing => GameState::Paused,
            state => state,
        };
        simulation.generation = self.generation;
        Ok(simulation)
    }
}
