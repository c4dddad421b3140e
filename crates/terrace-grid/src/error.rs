//! Grid construction errors.

/// Errors raised while assembling a map record from caller-supplied data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// The height buffer does not have one entry per grid vertex.
    #[error("expected {expected} heights for the grid, got {actual}")]
    HeightCountMismatch { expected: usize, actual: usize },

    /// The cell buffer does not have one record per grid cell.
    #[error("expected {expected} hex cells for the grid, got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },
}
