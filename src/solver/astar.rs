use grid_util::Point;

use crate::{solver::GridSolver, solver::StepCost, ElevationGrid};

#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f32,
    pub step_cost: StepCost,
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
            step_cost: StepCost::Uniform,
        }
    }
    pub fn with_step_cost(step_cost: StepCost) -> AstarSolver {
        AstarSolver {
            step_cost,
            ..AstarSolver::new()
        }
    }
}

impl GridSolver for AstarSolver {
    /// Manhattan distance times the heuristic factor. Every move costs at least 1 under either
    /// [StepCost], so with a factor of 1.0 this never overestimates.
    fn heuristic(&self, _grid: &ElevationGrid, p1: &Point, p2: &Point) -> i32 {
        (p1.manhattan_distance(p2) as f32 * self.heuristic_factor) as i32
    }

    fn step_cost(&self) -> StepCost {
        self.step_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NO_PATH;

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        let start = Point::new(1, 1);
        let grid = ElevationGrid::from_elevations(&["abc", "def"], start, start).unwrap();
        let solver = AstarSolver::new();
        let path = solver.get_path(&grid).unwrap();
        assert_eq!(path, vec![start]);
        assert_eq!(solver.fewest_steps(&grid), 0);
    }

    /// Asserts that the optimal 6 step solution around the 'z' wall is found.
    #[test]
    fn solve_around_wall() {
        // |S z  |
        // |  z  |
        // |    E|
        let grid = ElevationGrid::from_elevations(
            &["aazaa", "aazaa", "aaaaa"],
            Point::new(0, 0),
            Point::new(4, 2),
        )
        .unwrap();
        let solver = AstarSolver::new();
        let (path, cost) = solver.shortest_path(&grid).unwrap();
        assert_eq!(cost, 6);
        assert_eq!(path.len(), 7);
        assert!(path.iter().all(|p| p.x != 2 || p.y == 2));
    }

    #[test]
    fn climb_too_steep() {
        let grid =
            ElevationGrid::from_elevations(&["ac"], Point::new(0, 0), Point::new(1, 0)).unwrap();
        assert_eq!(AstarSolver::new().fewest_steps(&grid), NO_PATH);
        // Descending is always possible
        let grid =
            ElevationGrid::from_elevations(&["za"], Point::new(0, 0), Point::new(1, 0)).unwrap();
        assert_eq!(AstarSolver::new().fewest_steps(&grid), 1);
    }

    /// Under elevation costs the long route along the 'a' row beats the short one over the hill.
    #[test]
    fn elevation_cost_detour() {
        let grid = ElevationGrid::from_elevations(
            &["abcba", "aaaaa"],
            Point::new(0, 0),
            Point::new(4, 0),
        )
        .unwrap();
        let uniform = AstarSolver::new();
        let weighted = AstarSolver::with_step_cost(StepCost::Elevation);
        let (uniform_path, uniform_cost) = uniform.shortest_path(&grid).unwrap();
        assert_eq!(uniform_cost, 4);
        assert_eq!(uniform_path.len(), 5);
        let (weighted_path, weighted_cost) = weighted.shortest_path(&grid).unwrap();
        assert_eq!(weighted_cost, 6);
        assert_eq!(weighted_path.len(), 7);
        assert_eq!(weighted.get_path_cost(&grid, &weighted_path), 6);
        assert_eq!(uniform.get_path_cost(&grid, &uniform_path), 4);
    }

    /// An inflated heuristic still finds a path, although not necessarily the cheapest.
    #[test]
    fn heuristic_factor() {
        let grid = ElevationGrid::from_elevations(
            &["aazaa", "aazaa", "aaaaa"],
            Point::new(0, 0),
            Point::new(4, 0),
        )
        .unwrap();
        let mut solver = AstarSolver::new();
        solver.heuristic_factor = 2.0;
        let steps = solver.fewest_steps(&grid);
        assert!(steps >= 8);
        assert_eq!(solver.heuristic(&grid, &Point::new(0, 0), &Point::new(4, 0)), 8);
    }
}
