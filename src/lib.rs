//! # hill_pathfinding
//!
//! Finds the fewest steps across a 2D elevation grid from a start cell to an end cell, where a
//! move to one of the four axis-aligned neighbours is only legal if it climbs at most
//! [MAX_CLIMB] levels. Descending any number of levels is always allowed.
//!
//! The search is [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) over the implicit grid
//! graph with the [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as
//! heuristic. Cost tables are keyed by coordinate only, so a position has exactly one best-known
//! cost no matter how it was reached.
//!
//! ```
//! use hill_pathfinding::{ElevationGrid, solver::{astar::AstarSolver, GridSolver}};
//!
//! let grid: ElevationGrid = "Sabqponm\nabcryxxl\naccszExk\nacctuvwj\nabdefghi"
//!     .parse()
//!     .unwrap();
//! let solver = AstarSolver::new();
//! assert_eq!(solver.fewest_steps(&grid), 31);
//! ```
mod astar;
pub mod elevation_grid;
pub mod error;
pub mod solver;

pub use crate::astar::SearchContext;
pub use crate::elevation_grid::{Elevation, ElevationGrid};
pub use crate::error::GridError;
pub use grid_util::Point;

/// Largest number of levels a single move may climb.
pub const MAX_CLIMB: u8 = 1;
/// Result reported by [GridSolver::fewest_steps](solver::GridSolver::fewest_steps) when the end
/// cannot be reached.
pub const NO_PATH: i32 = -1;
/// A cell has at most 4 neighbours on a 4-connected grid.
pub const N_SMALLVEC_SIZE: usize = 4;
