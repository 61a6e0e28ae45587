//! Conway's Game of Life on an unbounded grid.
//!
//! The live cells are kept as a sparse set of coordinates
//! ([`CellSet`]), a pure transition function computes each next
//! generation ([`next_generation`], rule B3/S23), and a small play/pause
//! state machine ([`Simulation`]) steps the world at a configurable
//! cadence, publishing `(CellSet, GameState)` snapshots to subscribers.
//!
//! Rendering, input handling and seeding policy live in the frontend
//! crates; this library has no I/O of its own.

mod cells;
mod config;
mod error;
mod rules;
#[cfg(feature = "serde")]
mod save;
mod simulation;

pub use cells::{CellSet, Coord};
pub use config::{Config, DEFAULT_STEP_INTERVAL};
pub use error::Error;
pub use rules::next_generation;
#[cfg(feature = "serde")]
pub use save::SimulationSer;
pub use simulation::{GameState, Simulation, Subscriber};
