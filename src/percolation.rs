//! Site percolation on an n-by-n grid
//!
//! Sites are addressed with 1-based `(row, col)` coordinates. Every site maps to
//! a label in `[1, n²]` of a [`UnionFind`]; label `0` is a virtual node wired to
//! the whole top row and label `n² + 1` a virtual node wired to the whole bottom
//! row, so "does the system percolate?" is a single connectivity query.

use crate::error::{PercolationError, Result};
use crate::union_find::UnionFind;

/// Label of the virtual node pre-connected to row 1
pub const VIRTUAL_TOP: usize = 0;

/// Up, down, left, right
const MOVES: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Map 1-based `(row, col)` on an n-by-n grid to its connectivity label.
///
/// This is the only place coordinates are converted; both the open-state
/// table and the union-find are indexed by the returned label.
/// The caller must ensure `1 <= row, col <= n`.
#[inline]
pub fn label(n: usize, row: usize, col: usize) -> usize {
    (row - 1) * n + col
}

/// Label of the virtual node pre-connected to row n
#[inline]
pub fn virtual_bottom(n: usize) -> usize {
    n * n + 1
}

/// Number of labels for an n-by-n grid, `None` if the largest table
/// (one `usize` parent per label) cannot be allocated
fn label_count(n: usize) -> Option<usize> {
    let labels = n.checked_mul(n)?.checked_add(2)?;
    let bytes = labels.checked_mul(std::mem::size_of::<usize>())?;
    (bytes <= isize::MAX as usize).then_some(labels)
}

/// An n-by-n grid of sites that can only be opened, never closed
#[derive(Debug, Clone)]
pub struct Percolation {
    n: usize,
    /// Indexed by label; the two virtual slots stay `false`
    open: Vec<bool>,
    connectivity: UnionFind,
    open_sites: usize,
    /// Set by `open` once top and bottom join; monotonic
    percolated: bool,
}

impl Percolation {
    /// Creates an n-by-n grid with every site blocked.
    ///
    /// Fails with [`PercolationError::InvalidGridSize`] if `n <= 0` or if the
    /// `n² + 2` labels are too many to allocate.
    pub fn new(n: i64) -> Result<Self> {
        let (size, labels) = usize::try_from(n)
            .ok()
            .filter(|&size| size > 0)
            .and_then(|size| Some((size, label_count(size)?)))
            .ok_or(PercolationError::InvalidGridSize(n))?;

        let mut connectivity = UnionFind::new(labels);

        let bottom = virtual_bottom(size);
        for col in 1..=size {
            connectivity.union(VIRTUAL_TOP, label(size, 1, col));
            connectivity.union(bottom, label(size, size, col));
        }

        Ok(Percolation {
            n: size,
            open: vec![false; labels],
            connectivity,
            open_sites: 0,
            percolated: false,
        })
    }

    /// Grid side length
    pub fn size(&self) -> usize {
        self.n
    }

    /// Opens the site `(row, col)` if it is not open already.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let site = self.validate(row, col)?;
        if self.open[site] {
            return Ok(());
        }

        // Neighbour state is read before this site is marked open
        for (r, c) in self.neighbors(row, col) {
            let neighbor = label(self.n, r, c);
            if self.open[neighbor] {
                self.connectivity.union(site, neighbor);
            }
        }

        self.open[site] = true;
        self.open_sites += 1;

        if !self.percolated
            && self
                .connectivity
                .connected(VIRTUAL_TOP, virtual_bottom(self.n))
        {
            self.percolated = true;
            log::trace!(
                "{}x{} grid percolates after {} open sites (opened ({row}, {col}))",
                self.n,
                self.n,
                self.open_sites
            );
        }

        Ok(())
    }

    /// Is the site `(row, col)` open?
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        let site = self.validate(row, col)?;
        Ok(self.open[site])
    }

    /// Is the site `(row, col)` open and connected to the top row?
    ///
    /// The open check is required: blocked top-row sites share a root with
    /// the virtual top from construction. Once the grid percolates, open sites
    /// joined only to the bottom row are full as well, through the virtual
    /// bottom.
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool> {
        let site = self.validate(row, col)?;
        Ok(self.open[site] && self.connectivity.connected(VIRTUAL_TOP, site))
    }

    pub fn number_of_open_sites(&self) -> usize {
        self.open_sites
    }

    /// Does the system percolate?
    ///
    /// Recorded by `open`. On a 1x1 grid both virtual nodes share the single
    /// site from construction, so top and bottom are connected before it opens.
    pub fn percolates(&self) -> bool {
        self.percolated
    }

    /// Check `(row, col)` and return its label
    fn validate(&self, row: usize, col: usize) -> Result<usize> {
        if (1..=self.n).contains(&row) && (1..=self.n).contains(&col) {
            Ok(label(self.n, row, col))
        } else {
            Err(PercolationError::InvalidCoordinates {
                row,
                col,
                n: self.n,
            })
        }
    }

    /// In-bounds orthogonal neighbours of a valid site
    fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
        let n = self.n;
        MOVES.into_iter().filter_map(move |(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            ((1..=n).contains(&r) && (1..=n).contains(&c)).then_some((r, c))
        })
    }
}
