/// Monte Carlo estimation of the percolation threshold
///
/// Each trial opens uniformly random sites on a fresh grid until it
/// percolates and records the fraction of open sites at that moment.
use crate::error::{PercolationError, Result};
use crate::percolation::Percolation;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// z-value of a two-sided 95% confidence interval
pub const CONFIDENCE_95: f64 = 1.96;

const MAX_PREALLOCATED_TRIALS: usize = 1 << 16;

/// Parameters of a batch of trials
#[derive(Debug, Clone, PartialEq)]
pub struct StatsConfig {
    /// Grid side length n
    pub grid_size: i64,
    /// Number of independent trials t
    pub trials: i64,
    /// z-value used for the confidence interval
    pub confidence_z: f64,
    /// Seed for reproducible runs; entropy-seeded when `None`
    pub seed: Option<u64>,
}

impl StatsConfig {
    pub fn new(grid_size: i64, trials: i64) -> Self {
        StatsConfig {
            grid_size,
            trials,
            confidence_z: CONFIDENCE_95,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_confidence_z(mut self, z: f64) -> Self {
        self.confidence_z = z;
        self
    }
}

/// Run one trial on a fresh n-by-n grid and return the open-site fraction at
/// which it first percolates.
pub fn run_trial<R: Rng + ?Sized>(grid_size: i64, rng: &mut R) -> Result<f64> {
    let mut grid = Percolation::new(grid_size)?;
    let n = grid.size();

    while !grid.percolates() {
        let row = rng.gen_range(1..=n);
        let col = rng.gen_range(1..=n);
        grid.open(row, col)?;
    }

    Ok(grid.number_of_open_sites() as f64 / (n * n) as f64)
}

/// Summary statistics over a batch of percolation thresholds
#[derive(Debug, Clone)]
pub struct PercolationStats {
    thresholds: Vec<f64>,
    mean: f64,
    stddev: f64,
    confidence_z: f64,
}

impl PercolationStats {
    /// Perform `config.trials` independent trials on an n-by-n grid
    pub fn run(config: &StatsConfig) -> Result<Self> {
        // Validate both parameters before doing any work
        Percolation::new(config.grid_size)?;
        if config.trials <= 0 {
            return Err(PercolationError::InvalidTrialCount(config.trials));
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        log::info!(
            "Running {} trials on a {}x{} grid (seed: {:?})",
            config.trials,
            config.grid_size,
            config.grid_size,
            config.seed
        );

        let mut thresholds = Vec::with_capacity(initial_capacity(config.trials));
        for trial in 0..config.trials {
            let threshold = run_trial(config.grid_size, &mut rng)?;
            log::debug!("Trial {}: threshold {threshold:.6}", trial + 1);
            thresholds.push(threshold);
        }

        let stats = Self::from_thresholds(thresholds, config.confidence_z)?;
        log::info!(
            "Mean threshold {:.6} (stddev {:.6}) over {} trials",
            stats.mean,
            stats.stddev,
            stats.trials()
        );
        Ok(stats)
    }

    /// Aggregate thresholds measured elsewhere
    pub fn from_thresholds(thresholds: Vec<f64>, confidence_z: f64) -> Result<Self> {
        if thresholds.is_empty() {
            return Err(PercolationError::InvalidTrialCount(0));
        }

        let mean = mean(&thresholds);
        let stddev = sample_stddev(&thresholds, mean);

        Ok(PercolationStats {
            thresholds,
            mean,
            stddev,
            confidence_z,
        })
    }

    /// Sample mean of percolation threshold
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample standard deviation of percolation threshold
    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    /// Low endpoint of the confidence interval
    pub fn confidence_lo(&self) -> f64 {
        self.mean - self.half_width()
    }

    /// High endpoint of the confidence interval
    pub fn confidence_hi(&self) -> f64 {
        self.mean + self.half_width()
    }

    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    fn half_width(&self) -> f64 {
        self.confidence_z * self.stddev / (self.trials() as f64).sqrt()
    }
}

/// Pre-sized threshold buffer, capped so a huge trial count cannot fail the
/// allocation before any trial runs
fn initial_capacity(trials: i64) -> usize {
    usize::try_from(trials).unwrap_or(0).min(MAX_PREALLOCATED_TRIALS)
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Standard deviation with the n-1 denominator; 0 for a single value
fn sample_stddev(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}
