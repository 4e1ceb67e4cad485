use criterion::{criterion_group, criterion_main, Criterion};
use hill_pathfinding::{
    solver::{astar::AstarSolver, dijkstra::DijkstraSolver, GridSolver},
    ElevationGrid, Point,
};
use rand::prelude::*;
use std::hint::black_box;

/// Noisy ramp rising from the start corner towards the end corner.
fn ramp_grid(n: usize, rng: &mut StdRng) -> ElevationGrid {
    let rows = (0..n)
        .map(|y| {
            (0..n)
                .map(|x| {
                    let ramp = (25 * (x + y) / (2 * (n - 1))) as i32;
                    let noise = rng.gen_range(-2..=1);
                    b'a' + (ramp + noise).clamp(0, 25) as u8
                })
                .collect::<Vec<u8>>()
        })
        .collect::<Vec<_>>();
    let end = Point::new(n as i32 - 1, n as i32 - 1);
    ElevationGrid::from_elevations(&rows, Point::new(0, 0), end).unwrap()
}

fn ramp_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    for n in [41, 161] {
        let grid = ramp_grid(n, &mut rng);
        let astar = AstarSolver::new();
        let dijkstra = DijkstraSolver::new();
        c.bench_function(format!("ramp {n}x{n}, A*").as_str(), |b| {
            b.iter(|| black_box(astar.fewest_steps(&grid)))
        });
        c.bench_function(format!("ramp {n}x{n}, Dijkstra").as_str(), |b| {
            b.iter(|| black_box(dijkstra.fewest_steps(&grid)))
        });
    }
}

criterion_group!(benches, ramp_bench);
criterion_main!(benches);
