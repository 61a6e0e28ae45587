//! The terminal frontend.
//!
//! The event loop interleaves input polling with the simulation's
//! cooperative scheduler: the poll timeout is derived from
//! [`Simulation::deadline`], and every wakeup calls [`Simulation::poll`].
//! Redraws are driven by a subscriber on the publish channel, not by
//! peeking at the simulation between steps.

use crate::args::Args;
use crate::cli;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::style::Print;
use crossterm::{cursor, execute, queue, terminal};
use lifecast_lib::{Coord, GameState, Simulation};
use std::cell::Cell;
use std::error::Error;
use std::fs;
use std::io::{self, Stdout, Write};
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Poll timeout while nothing is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(100);
/// Fastest step interval reachable with `+`.
const MIN_INTERVAL: Duration = Duration::from_millis(10);
/// Slowest step interval reachable with `-`.
const MAX_INTERVAL: Duration = Duration::from_secs(2);
/// Cells panned per arrow-key press.
const PAN: i64 = 5;

struct Screen {
    out: Stdout,
    cols: u16,
    rows: u16,
    /// Grid coordinate shown at the center of the viewport.
    center: Coord,
}

impl Screen {
    fn new() -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(Screen {
            out: io::stdout(),
            cols,
            rows,
            center: Coord::new(0, 0),
        })
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
    }

    fn pan(&mut self, dx: i64, dy: i64) {
        self.center.x += dx;
        self.center.y += dy;
    }

    /// Redraws the world under a one-line status bar.
    fn draw(&mut self, simulation: &Simulation) -> io::Result<()> {
        let cells = simulation.cells();
        queue!(self.out, terminal::Clear(terminal::ClearType::All))?;

        let height = self.rows.saturating_sub(1);
        let left = self.center.x - i64::from(self.cols) / 2;
        let top = self.center.y - i64::from(height) / 2;
        for row in 0..height {
            let mut line = String::with_capacity(self.cols as usize);
            for col in 0..self.cols {
                let coord = Coord::new(left + i64::from(col), top + i64::from(row));
                line.push(if cells.is_alive(coord) { 'O' } else { ' ' });
            }
            queue!(self.out, cursor::MoveTo(0, row + 1), Print(line))?;
        }

        let keys = match simulation.state() {
            GameState::Playing => "[space] pause  [+/-] speed  [arrows] pan  [q] quit",
            GameState::Paused => "[space] resume  [n] step  [arrows] pan  [q] quit",
            GameState::Init => "[space] play  [n] step  [arrows] pan  [q] quit",
        };
        let bar = format!(
            "Gen: {}  Cells: {}  Interval: {:?}  {}",
            simulation.generation(),
            cells.population(),
            simulation.config().step_interval(),
            keys,
        );
        queue!(self.out, cursor::MoveTo(0, 0), Print(bar))?;
        self.out.flush()
    }
}

pub fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut simulation = cli::seed(args)?;

    let dirty = Rc::new(Cell::new(true));
    {
        let dirty = Rc::clone(&dirty);
        simulation.subscribe(move |_, _| dirty.set(true));
    }

    terminal::enable_raw_mode()?;
    execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
    let result = event_loop(&mut simulation, &dirty);
    execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result?;

    if let Some(path) = &args.save {
        fs::write(path, serde_json::to_string_pretty(&simulation.ser())?)?;
    }
    Ok(())
}

fn event_loop(simulation: &mut Simulation, dirty: &Cell<bool>) -> io::Result<()> {
    let mut screen = Screen::new()?;

    loop {
        if dirty.replace(false) {
            screen.draw(simulation)?;
        }

        let timeout = match simulation.deadline() {
            Some(deadline) => deadline.saturating_duration_since(Instant::now()),
            None => IDLE_POLL,
        };
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(KeyEvent {
                    code,
                    kind: KeyEventKind::Press,
                    ..
                }) => {
                    if handle_key(code, simulation, &mut screen, dirty) {
                        break;
                    }
                }
                Event::Resize(cols, rows) => {
                    screen.resize(cols, rows);
                    dirty.set(true);
                }
                _ => (),
            }
        }
        simulation.poll(Instant::now());
    }
    Ok(())
}

/// Handles one key press. Returns `true` on quit.
fn handle_key(
    code: KeyCode,
    simulation: &mut Simulation,
    screen: &mut Screen,
    dirty: &Cell<bool>,
) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char(' ') => match simulation.state() {
            GameState::Playing => simulation.pause(),
            _ => simulation.play(),
        },
        KeyCode::Char('n') => {
            if simulation.state() != GameState::Playing {
                simulation.step();
            }
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            adjust_interval(simulation, |i| i / 2);
            dirty.set(true);
        }
        KeyCode::Char('-') => {
            adjust_interval(simulation, |i| i * 2);
            dirty.set(true);
        }
        KeyCode::Left => {
            screen.pan(-PAN, 0);
            dirty.set(true);
        }
        KeyCode::Right => {
            screen.pan(PAN, 0);
            dirty.set(true);
        }
        KeyCode::Up => {
            screen.pan(0, -PAN);
            dirty.set(true);
        }
        KeyCode::Down => {
            screen.pan(0, PAN);
            dirty.set(true);
        }
        _ => (),
    }
    false
}

fn adjust_interval(simulation: &mut Simulation, f: impl Fn(Duration) -> Duration) {
    let next = f(simulation.config().step_interval()).clamp(MIN_INTERVAL, MAX_INTERVAL);
    // `next` is clamped above zero, so this cannot fail.
    let _ = simulation.set_step_interval(next);
}
