use grid_util::Point;

use crate::{solver::GridSolver, solver::StepCost, ElevationGrid};

/// Uniform-cost search, i.e. A* without a heuristic.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver {
    pub step_cost: StepCost,
}

impl DijkstraSolver {
    pub fn new() -> DijkstraSolver {
        DijkstraSolver::default()
    }
    pub fn with_step_cost(step_cost: StepCost) -> DijkstraSolver {
        DijkstraSolver { step_cost }
    }
}

impl GridSolver for DijkstraSolver {
    fn heuristic(&self, _: &ElevationGrid, _: &Point, _: &Point) -> i32 {
        0
    }

    fn step_cost(&self) -> StepCost {
        self.step_cost
    }
}
