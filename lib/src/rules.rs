//! The generation transition, rule B3/S23.

use crate::cells::{CellSet, Coord};
use std::collections::HashMap;

/// Computes the next generation of `current` under rule B3/S23.
///
/// The grid is unbounded: any `i64` coordinate is valid, and the work done
/// is proportional to the number of live cells, not to any grid area.
///
/// The function is pure. It never mutates `current`, performs no I/O and
/// keeps no state between calls, so the same input always yields the same
/// output.
pub fn next_generation(current: &CellSet) -> CellSet {
    // Dead cells adjacent to live ones, keyed by coordinate, with the
    // number of distinct live neighbors seen so far. Birth requires the
    // final count to be exactly 3, so this pass must run to completion;
    // there is no correct early exit here.
    let mut birth_counts: HashMap<Coord, u8> = HashMap::new();
    for cell in current.iter() {
        for neighbor in cell.neighbors() {
            if !current.is_alive(neighbor) {
                *birth_counts.entry(neighbor).or_insert(0) += 1;
            }
        }
    }

    let born = birth_counts
        .into_iter()
        .filter(|&(_, count)| count == 3)
        .map(|(coord, _)| coord);

    let surviving = current.iter().filter(|&cell| survives(current, cell));

    // Born cells are dead in `current` by construction, so the two sets
    // are disjoint and the union is a plain one.
    surviving.chain(born).collect()
}

/// Whether a live cell makes it into the next generation.
///
/// Survival needs 2 or 3 live neighbors. The count only grows during the
/// scan, so once it exceeds 3 the cell is dead either way and the scan can
/// stop early.
fn survives(current: &CellSet, cell: Coord) -> bool {
    let mut count = 0;
    for neighbor in cell.neighbors() {
        if current.is_alive(neighbor) {
            count += 1;
            if count > 3 {
                return false;
            }
        }
    }
    count >= 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell_set(cells: &[(i64, i64)]) -> CellSet {
        cells.iter().copied().map(Coord::from).collect()
    }

    #[test]
    fn lone_cells_die_of_isolation() {
        let current = cell_set(&[(0, 0), (5, 5)]);
        assert!(next_generation(&current).is_empty());
    }

    #[test]
    fn dead_cell_is_born_with_exactly_three_neighbors() {
        // (1, 1) has 3 live neighbors.
        let current = cell_set(&[(0, 0), (2, 0), (0, 2)]);
        assert!(next_generation(&current).is_alive(Coord::new(1, 1)));
    }

    #[test]
    fn dead_cell_stays_dead_with_two_or_four_neighbors() {
        let two = cell_set(&[(0, 0), (2, 0)]);
        assert!(!next_generation(&two).is_alive(Coord::new(1, 1)));

        let four = cell_set(&[(0, 0), (2, 0), (0, 2), (2, 2)]);
        assert!(!next_generation(&four).is_alive(Coord::new(1, 1)));
    }

    #[test]
    fn live_cell_survival_band_is_two_to_three() {
        // Center (0, 0) with a varying ring of live neighbors.
        let rings: [&[(i64, i64)]; 5] = [
            &[],
            &[(1, 0)],
            &[(1, 0), (-1, 0)],
            &[(1, 0), (-1, 0), (0, 1)],
            &[(1, 0), (-1, 0), (0, 1), (0, -1)],
        ];
        for (n, ring) in rings.iter().enumerate() {
            let mut cells = ring.to_vec();
            cells.push((0, 0));
            let next = next_generation(&cell_set(&cells));
            let expected = n == 2 || n == 3;
            assert_eq!(
                next.is_alive(Coord::new(0, 0)),
                expected,
                "center with {} neighbors",
                n
            );
        }
    }

    #[test]
    fn overcrowded_cell_dies() {
        // Center with 8 live neighbors.
        let mut cells = vec![(0, 0)];
        cells.extend(Coord::new(0, 0).neighbors().map(|c| (c.x, c.y)));
        let next = next_generation(&cell_set(&cells));
        assert!(!next.is_alive(Coord::new(0, 0)));
    }

    #[test]
    fn empty_world_stays_empty() {
        assert!(next_generation(&CellSet::new()).is_empty());
    }

    #[test]
    fn transition_is_pure() {
        let current = cell_set(&[(0, 0), (1, 0), (2, 0), (10, 10), (11, 10)]);
        let snapshot = current.clone();
        let a = next_generation(&current);
        let b = next_generation(&current);
        assert_eq!(a, b);
        assert_eq!(current, snapshot);
    }

    #[test]
    fn distant_clusters_evolve_independently() {
        let near = cell_set(&[(0, 0), (1, 0), (2, 0)]);
        let far = cell_set(&[(1_000_000_000, -1_000_000_000), (1_000_000_001, -1_000_000_000), (1_000_000_002, -1_000_000_000)]);
        let both: CellSet = near.iter().chain(far.iter()).collect();

        let next = next_generation(&both);
        let expected: CellSet = next_generation(&near)
            .iter()
            .chain(next_generation(&far).iter())
            .collect();
        assert_eq!(next, expected);
    }
}
