use grid_util::Point;
use thiserror::Error;

/// Reasons an [ElevationGrid](crate::ElevationGrid) cannot be built. A search is never started
/// on a grid that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("Grid has no cells")]
    Empty,

    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Byte {byte:#04x} at row {row}, column {column} is not an elevation")]
    InvalidElevation { row: usize, column: usize, byte: u8 },

    #[error("Grid has no start marker")]
    MissingStart,

    #[error("Grid has no end marker")]
    MissingEnd,

    #[error("Grid has more than one start marker")]
    DuplicateStart,

    #[error("Grid has more than one end marker")]
    DuplicateEnd,

    #[error("{point} lies outside the grid")]
    OutOfBounds { point: Point },
}
