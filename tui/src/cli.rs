//! Headless batch mode: seed, run, print, optionally save.

use crate::args::Args;
use lifecast_lib::{CellSet, Config, Coord, Simulation, SimulationSer};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::fs;

pub fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut simulation = seed(args)?;

    for _ in 0..args.generations {
        simulation.step();
    }

    print!("{}", display(simulation.cells()));
    println!(
        "Generation: {}  Population: {}",
        simulation.generation(),
        simulation.cells().population()
    );

    if let Some(path) = &args.save {
        fs::write(path, serde_json::to_string_pretty(&simulation.ser())?)?;
    }
    Ok(())
}

/// Builds the initial simulation: a restored snapshot if `--load` was
/// given, a random scatter otherwise.
pub fn seed(args: &Args) -> Result<Simulation, Box<dyn Error>> {
    if let Some(path) = &args.load {
        let snapshot: SimulationSer = serde_json::from_str(&fs::read_to_string(path)?)?;
        return Ok(snapshot.restore()?);
    }
    let mut rng = rng_from(args.seed);
    let cells = CellSet::random(args.count, args.spread, &mut rng)?;
    Ok(Simulation::new(cells, Config::new(args.interval)?))
}

pub fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Renders the bounding box of the pattern as a `.`/`O` grid.
pub fn display(cells: &CellSet) -> String {
    let (min, max) = match cells.bounds() {
        Some(bounds) => bounds,
        None => return String::from("(empty)\n"),
    };
    let mut out = String::new();
    for y in min.y..=max.y {
        for x in min.x..=max.x {
            out.push(if cells.is_alive(Coord::new(x, y)) {
                'O'
            } else {
                '.'
            });
        }
        out.push('\n');
    }
    out
}
