/// Property-based tests for the percolation grid
///
/// Uses proptest to drive random sequences of `open` calls and check the
/// invariants that must hold after every step.
use percolation::{Percolation, PercolationError};
use proptest::prelude::*;

/// Strategy: a grid size and a list of (row, col) picks inside it
fn grid_and_sites() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..12).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((1..=n, 1..=n), 0..(n * n * 2)),
        )
    })
}

/// Property: open count equals the number of distinct sites opened so far
#[test]
fn prop_open_count_matches_distinct_sites() {
    proptest!(|((n, sites) in grid_and_sites())| {
        let mut grid = Percolation::new(n as i64).unwrap();
        let mut seen = std::collections::HashSet::new();

        for (row, col) in sites {
            grid.open(row, col).unwrap();
            seen.insert((row, col));
            prop_assert_eq!(grid.number_of_open_sites(), seen.len());
        }
    });
}

/// Property: opened sites stay open and percolation never reverts
#[test]
fn prop_open_and_percolates_are_monotonic() {
    proptest!(|((n, sites) in grid_and_sites())| {
        let mut grid = Percolation::new(n as i64).unwrap();
        let mut opened = Vec::new();
        let mut percolated = false;

        for (row, col) in sites {
            grid.open(row, col).unwrap();
            opened.push((row, col));

            for &(r, c) in &opened {
                prop_assert!(grid.is_open(r, c).unwrap());
            }
            if percolated {
                prop_assert!(grid.percolates(), "percolation reverted after opening ({}, {})", row, col);
            }
            percolated = grid.percolates();
        }
    });
}

/// Property: every full site is open
#[test]
fn prop_full_implies_open() {
    proptest!(|((n, sites) in grid_and_sites())| {
        let mut grid = Percolation::new(n as i64).unwrap();
        for (row, col) in sites {
            grid.open(row, col).unwrap();
        }

        for row in 1..=n {
            for col in 1..=n {
                if grid.is_full(row, col).unwrap() {
                    prop_assert!(grid.is_open(row, col).unwrap());
                }
            }
        }
    });
}

/// Property: percolates and is_full agree with a flood fill from the open top-row sites
#[test]
fn prop_percolates_matches_flood_fill() {
    proptest!(|((n, sites) in grid_and_sites())| {
        let mut grid = Percolation::new(n as i64).unwrap();
        for (row, col) in sites {
            grid.open(row, col).unwrap();
        }

        let full = flood_fill(&grid, n);
        let bottom_full = full[n - 1].iter().any(|&f| f);
        prop_assert_eq!(grid.percolates(), bottom_full);

        // Once the grid percolates, open sites joined only to the bottom row
        // are full through the virtual bottom (backwash), so equality holds
        // only before that point
        let percolates = grid.percolates();
        for row in 1..=n {
            for col in 1..=n {
                let reachable = full[row - 1][col - 1];
                if percolates {
                    prop_assert!(!reachable || grid.is_full(row, col).unwrap());
                } else {
                    prop_assert_eq!(grid.is_full(row, col).unwrap(), reachable);
                }
            }
        }
    });
}

/// Property: out-of-range coordinates are rejected without changing state
#[test]
fn prop_out_of_range_rejected() {
    proptest!(|(n in 1usize..20, offset in 1usize..5, pick in 0usize..4)| {
        let mut grid = Percolation::new(n as i64).unwrap();
        let (row, col) = match pick {
            0 => (0, 1),
            1 => (n + offset, 1),
            2 => (1, 0),
            _ => (1, n + offset),
        };

        prop_assert_eq!(
            grid.open(row, col),
            Err(PercolationError::InvalidCoordinates { row, col, n })
        );
        prop_assert!(grid.is_open(row, col).is_err());
        prop_assert!(grid.is_full(row, col).is_err());
        prop_assert_eq!(grid.number_of_open_sites(), 0);
        prop_assert!(!grid.percolates());
    });
}

/// Property: non-positive sizes never construct a grid
#[test]
fn prop_non_positive_size_rejected() {
    proptest!(|(n in i64::MIN..=0)| {
        prop_assert_eq!(
            Percolation::new(n).unwrap_err(),
            PercolationError::InvalidGridSize(n)
        );
    });
}

/// Reference answer: which sites are reachable from the top row through open sites
fn flood_fill(grid: &Percolation, n: usize) -> Vec<Vec<bool>> {
    let mut full = vec![vec![false; n]; n];
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for col in 1..=n {
        if grid.is_open(1, col).unwrap() {
            full[0][col - 1] = true;
            stack.push((1, col));
        }
    }

    while let Some((row, col)) = stack.pop() {
        let neighbors = [
            (row.wrapping_sub(1), col),
            (row + 1, col),
            (row, col.wrapping_sub(1)),
            (row, col + 1),
        ];
        for (r, c) in neighbors {
            if (1..=n).contains(&r)
                && (1..=n).contains(&c)
                && !full[r - 1][c - 1]
                && grid.is_open(r, c).unwrap()
            {
                full[r - 1][c - 1] = true;
                stack.push((r, c));
            }
        }
    }

    full
}
