// Library exports for percolation
pub mod error;
pub mod percolation;
pub mod stats;
pub mod union_find;

pub use error::{PercolationError, Result};
pub use percolation::Percolation;
pub use stats::{PercolationStats, StatsConfig, CONFIDENCE_95};
