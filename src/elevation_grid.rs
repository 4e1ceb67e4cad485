use crate::error::GridError;
use crate::solver::StepCost;
use crate::{MAX_CLIMB, N_SMALLVEC_SIZE};
use core::fmt;
use core::str::FromStr;
use grid_util::grid::{Grid, SimpleGrid};
use grid_util::point::Point;
use itertools::{iproduct, Itertools};
use log::info;
use smallvec::{smallvec, SmallVec};

const START_MARKER: u8 = b'S';
const END_MARKER: u8 = b'E';

/// One of the 26 elevation levels, `'a'` being the lowest and `'z'` the highest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Elevation(u8);

impl Elevation {
    pub const LOWEST: Elevation = Elevation(0);
    pub const HIGHEST: Elevation = Elevation(25);

    /// Maps `'a'..='z'` to an elevation.
    pub fn from_letter(byte: u8) -> Option<Elevation> {
        byte.is_ascii_lowercase().then(|| Elevation(byte - b'a'))
    }
    /// Like [from_letter](Self::from_letter), but also accepts the start marker `'S'` (as `'a'`)
    /// and the end marker `'E'` (as `'z'`).
    pub fn from_byte(byte: u8) -> Option<Elevation> {
        match byte {
            START_MARKER => Some(Elevation::LOWEST),
            END_MARKER => Some(Elevation::HIGHEST),
            _ => Elevation::from_letter(byte),
        }
    }
    /// Ordinal level, 1 for `'a'` up to 26 for `'z'`.
    pub fn level(self) -> i32 {
        self.0 as i32 + 1
    }
    pub fn to_letter(self) -> char {
        (b'a' + self.0) as char
    }
    /// Signed number of levels gained when moving from `self` to `other`.
    pub fn climb_to(self, other: Elevation) -> i32 {
        other.0 as i32 - self.0 as i32
    }
}

/// Rectangular grid of elevations with a designated start and end cell. The
/// [x](Point::x) coordinate of a [Point] is the column and [y](Point::y) is the row.
#[derive(Clone, Debug)]
pub struct ElevationGrid {
    grid: SimpleGrid<u8>,
    start: Point,
    end: Point,
    /// Largest climb allowed per move, [MAX_CLIMB] by default.
    pub max_climb: u8,
}

/// Checks that the rows form a non-empty rectangle and returns its (width, height).
fn rectangle_size<R: AsRef<[u8]>>(rows: &[R]) -> Result<(usize, usize), GridError> {
    let width = rows.first().map_or(0, |row| row.as_ref().len());
    if width == 0 {
        return Err(GridError::Empty);
    }
    if let Some((row, found)) = rows
        .iter()
        .map(|r| r.as_ref().len())
        .enumerate()
        .find(|&(_, len)| len != width)
    {
        return Err(GridError::RaggedRow {
            row,
            expected: width,
            found,
        });
    }
    Ok((width, rows.len()))
}

impl ElevationGrid {
    /// Parses the puzzle format: one row of letters per line, with exactly one `'S'` (start,
    /// elevation `'a'`) and exactly one `'E'` (end, elevation `'z'`). Trailing newlines are
    /// ignored; any other empty line is a ragged row.
    pub fn parse(input: &str) -> Result<ElevationGrid, GridError> {
        let rows = input
            .trim_end_matches(|c: char| c == '\n' || c == '\r')
            .lines()
            .map(str::as_bytes)
            .collect::<Vec<_>>();
        let (width, height) = rectangle_size(&rows)?;
        let mut grid = SimpleGrid::new(width, height, Elevation::LOWEST.0);
        let mut start = None;
        let mut end = None;
        for (y, x) in iproduct!(0..height, 0..width) {
            let byte = rows[y][x];
            let point = Point::new(x as i32, y as i32);
            if byte == START_MARKER && start.replace(point).is_some() {
                return Err(GridError::DuplicateStart);
            }
            if byte == END_MARKER && end.replace(point).is_some() {
                return Err(GridError::DuplicateEnd);
            }
            let elevation = Elevation::from_byte(byte).ok_or(GridError::InvalidElevation {
                row: y,
                column: x,
                byte,
            })?;
            grid.set(x, y, elevation.0);
        }
        let start = start.ok_or(GridError::MissingStart)?;
        let end = end.ok_or(GridError::MissingEnd)?;
        info!("Parsed {}x{} grid, start {} end {}", width, height, start, end);
        Ok(ElevationGrid {
            grid,
            start,
            end,
            max_climb: MAX_CLIMB,
        })
    }

    /// Builds a grid from rows of `'a'..='z'` letters with explicitly given start and end cells.
    /// Unlike [parse](Self::parse), start and end may coincide.
    pub fn from_elevations<R: AsRef<[u8]>>(
        rows: &[R],
        start: Point,
        end: Point,
    ) -> Result<ElevationGrid, GridError> {
        let (width, height) = rectangle_size(rows)?;
        let mut grid = SimpleGrid::new(width, height, Elevation::LOWEST.0);
        for (y, row) in rows.iter().enumerate() {
            for (x, &byte) in row.as_ref().iter().enumerate() {
                let elevation = Elevation::from_letter(byte).ok_or(GridError::InvalidElevation {
                    row: y,
                    column: x,
                    byte,
                })?;
                grid.set(x, y, elevation.0);
            }
        }
        for point in [start, end] {
            if !grid.point_in_bounds(point) {
                return Err(GridError::OutOfBounds { point });
            }
        }
        info!("Built {}x{} grid, start {} end {}", width, height, start, end);
        Ok(ElevationGrid {
            grid,
            start,
            end,
            max_climb: MAX_CLIMB,
        })
    }

    pub fn with_max_climb(mut self, max_climb: u8) -> ElevationGrid {
        self.max_climb = max_climb;
        self
    }
    pub fn start(&self) -> Point {
        self.start
    }
    pub fn end(&self) -> Point {
        self.end
    }
    pub fn width(&self) -> usize {
        self.grid.width()
    }
    pub fn height(&self) -> usize {
        self.grid.height()
    }
    pub fn in_bounds(&self, point: &Point) -> bool {
        self.grid.point_in_bounds(*point)
    }
    /// Elevation at an in-bounds point.
    pub fn elevation(&self, point: &Point) -> Elevation {
        debug_assert!(self.in_bounds(point));
        Elevation(self.grid.get_point(*point))
    }

    /// The 4 axis-aligned candidates of a point in the order up, down, left, right, before any
    /// bounds or elevation filtering.
    pub fn neighborhood_points(&self, point: &Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        smallvec![
            Point::new(point.x, point.y - 1),
            Point::new(point.x, point.y + 1),
            Point::new(point.x - 1, point.y),
            Point::new(point.x + 1, point.y),
        ]
    }
    /// A move from `from` to `pos` stays on the grid and climbs at most
    /// [max_climb](Self::max_climb) levels. Any descent is allowed. Nothing can be reached from
    /// outside the grid.
    pub fn can_move_to(&self, pos: Point, from: Point) -> bool {
        self.in_bounds(&from)
            && self.in_bounds(&pos)
            && self.elevation(&from).climb_to(self.elevation(&pos)) <= self.max_climb as i32
    }
    /// Neighbours that can be moved into from `point`, in [neighborhood_points](Self::neighborhood_points) order.
    pub fn neighbours(&self, point: &Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        self.neighborhood_points(point)
            .into_iter()
            .filter(|p| self.can_move_to(*p, *point))
            .collect()
    }
    pub fn neighbours_and_cost(
        &self,
        point: &Point,
        step_cost: StepCost,
    ) -> SmallVec<[(Point, i32); N_SMALLVEC_SIZE]> {
        self.neighbours(point)
            .into_iter()
            .map(|p| (p, step_cost.cost(self.elevation(&p))))
            .collect()
    }
}

impl FromStr for ElevationGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElevationGrid::parse(s)
    }
}

impl fmt::Display for ElevationGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rows = (0..self.height() as i32).map(|y| {
            (0..self.width() as i32)
                .map(|x| {
                    let p = Point::new(x, y);
                    if p == self.start {
                        START_MARKER as char
                    } else if p == self.end {
                        END_MARKER as char
                    } else {
                        self.elevation(&p).to_letter()
                    }
                })
                .collect::<String>()
        });
        write!(f, "{}", rows.format("\n"))
    }
}
