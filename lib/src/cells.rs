//! Cells and coordinates on the unbounded grid.

use crate::error::Error;
use rand::Rng;
use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The 8 offsets of the Moore neighborhood, in row-major order.
///
/// The order is fixed so that neighbor enumeration is deterministic.
const NEIGHBORHOOD: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// The coordinates of a cell.
///
/// A plain value type: equality, hashing and ordering are all by value.
/// `i64` leaves plenty of room for gliders that wander off for a very
/// long time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord {
    /// The x-coordinate.
    pub x: i64,
    /// The y-coordinate.
    pub y: i64,
}

impl Coord {
    /// Creates a coordinate.
    pub const fn new(x: i64, y: i64) -> Self {
        Coord { x, y }
    }

    /// The 8 cells of the Moore neighborhood, excluding the cell itself.
    ///
    /// Always enumerated in the same order.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        NEIGHBORHOOD.into_iter().map(move |(dx, dy)| Coord {
            x: self.x + dx,
            y: self.y + dy,
        })
    }
}

impl From<(i64, i64)> for Coord {
    fn from((x, y): (i64, i64)) -> Self {
        Coord { x, y }
    }
}

/// The set of live cells.
///
/// This is the entire simulation state: a coordinate is alive iff it is
/// in the set. The set is sparse, so clusters may be arbitrarily distant
/// from each other without cost.
///
/// A `CellSet` is treated as an immutable value once built;
/// [`next_generation`](crate::next_generation) returns a fresh set instead
/// of mutating its input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellSet {
    cells: HashSet<Coord>,
}

impl CellSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the cell at `coord` is alive.
    pub fn is_alive(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.len()
    }

    /// Whether there are no live cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over the live cells in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }

    /// The bounding box of the live cells, as `(min, max)` corners.
    ///
    /// Returns `None` when the set is empty. Meant for renderers that
    /// need to frame the pattern.
    pub fn bounds(&self) -> Option<(Coord, Coord)> {
        let mut iter = self.cells.iter();
        let &first = iter.next()?;
        let (mut min, mut max) = (first, first);
        for &c in iter {
            min.x = min.x.min(c.x);
            min.y = min.y.min(c.y);
            max.x = max.x.max(c.x);
            max.y = max.y.max(c.y);
        }
        Some((min, max))
    }

    /// Scatters `count` cells uniformly over the square
    /// `[-spread, spread)` × `[-spread, spread)`.
    ///
    /// Coordinates drawn twice collapse into one live cell, so the
    /// resulting population may be less than `count`.
    ///
    /// # Errors
    ///
    /// [`Error::NonPositiveSpread`] if `spread` is not positive.
    pub fn random<R: Rng + ?Sized>(count: usize, spread: i64, rng: &mut R) -> Result<Self, Error> {
        if spread <= 0 {
            return Err(Error::NonPositiveSpread);
        }
        let cells = (0..count)
            .map(|_| Coord {
                x: rng.gen_range(-spread..spread),
                y: rng.gen_range(-spread..spread),
            })
            .collect();
        Ok(CellSet { cells })
    }
}

impl FromIterator<Coord> for CellSet {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        CellSet {
            cells: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn neighbors_are_the_moore_neighborhood() {
        let c = Coord::new(2, -3);
        let neighbors: Vec<_> = c.neighbors().collect();
        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&c));
        for n in &neighbors {
            assert!((n.x - c.x).abs() <= 1 && (n.y - c.y).abs() <= 1);
        }
    }

    #[test]
    fn neighbor_order_is_deterministic() {
        let a: Vec<_> = Coord::new(0, 0).neighbors().collect();
        let b: Vec<_> = Coord::new(0, 0).neighbors().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn construction_dedups() {
        let set: CellSet = [(1, 1), (1, 1), (0, 0)]
            .iter()
            .copied()
            .map(Coord::from)
            .collect();
        assert_eq!(set.population(), 2);
        assert!(set.is_alive(Coord::new(1, 1)));
        assert!(!set.is_alive(Coord::new(2, 2)));
    }

    #[test]
    fn bounds_frame_the_pattern() {
        let set: CellSet = [(-4, 2), (3, -1), (0, 0)]
            .iter()
            .copied()
            .map(Coord::from)
            .collect();
        assert_eq!(set.bounds(), Some((Coord::new(-4, -1), Coord::new(3, 2))));
        assert_eq!(CellSet::new().bounds(), None);
    }

    #[test]
    fn random_scatter_stays_within_spread() {
        let mut rng = StdRng::seed_from_u64(7);
        let set = CellSet::random(200, 10, &mut rng).unwrap();
        assert!(set.population() <= 200);
        assert!(!set.is_empty());
        for c in set.iter() {
            assert!((-10..10).contains(&c.x));
            assert!((-10..10).contains(&c.y));
        }
    }

    #[test]
    fn random_scatter_is_reproducible() {
        let a = CellSet::random(50, 8, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = CellSet::random(50, 8, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn random_rejects_non_positive_spread() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            CellSet::random(10, 0, &mut rng),
            Err(Error::NonPositiveSpread)
        );
        assert_eq!(
            CellSet::random(10, -3, &mut rng),
            Err(Error::NonPositiveSpread)
        );
    }
}
