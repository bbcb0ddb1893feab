//! Shared workloads for waypoint benchmark suites.

use waypoint_harness::worlds::eight_puzzle::{EightPuzzle, PuzzleMove};
use waypoint_harness::worlds::grid_maze::GridMaze;

/// A named search workload.
pub struct Regime<P> {
    pub name: &'static str,
    pub problem: P,
}

/// Open `n x n` rooms searched corner to corner.
///
/// # Panics
///
/// Panics if a corner falls off its room.
#[must_use]
pub fn open_grid_regimes() -> Vec<Regime<GridMaze>> {
    [("grid_16", 16), ("grid_48", 48), ("grid_96", 96)]
        .into_iter()
        .map(|(name, n)| Regime {
            name,
            problem: GridMaze::open(n, n, (0, 0), (n - 1, n - 1))
                .expect("corners are on the grid"),
        })
        .collect()
}

/// Eight-puzzle instances at increasing scramble depth.
///
/// Each instance is a prefix of one fixed blank walk.
///
/// # Panics
///
/// Panics if the built-in scramble leaves the board.
#[must_use]
pub fn puzzle_regimes() -> Vec<Regime<EightPuzzle>> {
    use PuzzleMove::{Down, Left, Right, Up};
    let walk = [
        Right, Down, Left, Down, Right, Right, Up, Left, Up, Right, Down, Down, Left, Left,
    ];
    [("puzzle_6", 6), ("puzzle_10", 10), ("puzzle_14", 14)]
        .into_iter()
        .map(|(name, len)| Regime {
            name,
            problem: EightPuzzle::scrambled(&walk[..len]).expect("scramble stays on the board"),
        })
        .collect()
}
