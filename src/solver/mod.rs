use crate::{astar::SearchContext, Elevation, ElevationGrid, NO_PATH, N_SMALLVEC_SIZE};
use grid_util::Point;
use log::{debug, info};
use smallvec::SmallVec;

pub mod astar;
pub mod dijkstra;

/// How much a single move costs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StepCost {
    /// Every move costs 1, so the total cost is the number of steps.
    #[default]
    Uniform,
    /// A move costs the ordinal [level](Elevation::level) of the destination, 1 for `'a'` up to
    /// 26 for `'z'`.
    Elevation,
}

impl StepCost {
    pub fn cost(self, destination: Elevation) -> i32 {
        match self {
            StepCost::Uniform => 1,
            StepCost::Elevation => destination.level(),
        }
    }
}

pub trait GridSolver {
    fn heuristic(&self, grid: &ElevationGrid, p1: &Point, p2: &Point) -> i32;

    fn step_cost(&self) -> StepCost;

    fn successors(
        &self,
        grid: &ElevationGrid,
        node: &Point,
    ) -> SmallVec<[(Point, i32); N_SMALLVEC_SIZE]> {
        grid.neighbours_and_cost(node, self.step_cost())
    }

    /// Sums the step costs along a path, the first point being where the path starts.
    fn get_path_cost(&self, grid: &ElevationGrid, path: &[Point]) -> i32 {
        path.iter()
            .skip(1)
            .map(|p| self.step_cost().cost(grid.elevation(p)))
            .sum()
    }

    /// Computes a cheapest path from the start to the end of the grid, along with its cost. The
    /// path includes both endpoints. Returns [None] if the end cannot be reached.
    fn shortest_path(&self, grid: &ElevationGrid) -> Option<(Vec<Point>, i32)> {
        let start = grid.start();
        let goal = grid.end();
        info!("Searching path from {} to {}", start, goal);
        let mut ct: SearchContext<Point, i32> = SearchContext::new();
        let result = ct.astar(
            &start,
            |node| self.successors(grid, node),
            |point| self.heuristic(grid, point, &goal),
            |point| *point == goal,
        );
        debug!("{} cells received a cost", ct.len());
        result
    }

    fn get_path(&self, grid: &ElevationGrid) -> Option<Vec<Point>> {
        self.shortest_path(grid).map(|(v, _c)| v)
    }

    /// Cost of a cheapest path from start to end, or [NO_PATH] if there is none. With
    /// [StepCost::Uniform] this is the fewest number of steps.
    fn fewest_steps(&self, grid: &ElevationGrid) -> i32 {
        self.shortest_path(grid).map_or(NO_PATH, |(_v, c)| c)
    }
}
