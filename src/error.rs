use std::fmt;

/// Errors raised by the percolation grid and the trial statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PercolationError {
    /// Grid size must be at least 1
    InvalidGridSize(i64),
    /// Row or column outside `[1, n]`
    InvalidCoordinates { row: usize, col: usize, n: usize },
    /// Trial count must be at least 1
    InvalidTrialCount(i64),
}

impl fmt::Display for PercolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PercolationError::InvalidGridSize(n) => {
                write!(f, "invalid grid size {n}: it must be >= 1")
            }
            PercolationError::InvalidCoordinates { row, col, n } => write!(
                f,
                "invalid coordinates ({row}, {col}): row and col must be within [1, {n}]"
            ),
            PercolationError::InvalidTrialCount(t) => {
                write!(f, "invalid trial count {t}: it must be >= 1")
            }
        }
    }
}

impl std::error::Error for PercolationError {}

pub type Result<T> = std::result::Result<T, PercolationError>;
