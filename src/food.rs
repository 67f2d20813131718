use std::collections::HashSet;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::{Cell, Grid};

/// Random draws attempted before falling back to enumerating free cells.
pub const MAX_SAMPLING_ATTEMPTS: usize = 100;

/// Picks food cells on the playable interior.
#[derive(Debug, Clone)]
pub struct FoodSpawner {
    rng: StdRng,
}

impl FoodSpawner {
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Returns a free interior cell, or `None` when the interior is full.
    pub fn spawn(&mut self, grid: Grid, occupied: &HashSet<Cell>) -> Option<Cell> {
        let cell = spawn_cell(&mut self.rng, grid, occupied)?;
        debug!("food spawned at ({}, {})", cell.row, cell.col);
        Some(cell)
    }
}

/// Rejection-samples a uniformly random unoccupied interior cell.
///
/// A crowded board makes rejection sampling slow, so after
/// [`MAX_SAMPLING_ATTEMPTS`] misses a uniform pick among the remaining free
/// cells is used instead.
pub fn spawn_cell<R: Rng + ?Sized>(
    rng: &mut R,
    grid: Grid,
    occupied: &HashSet<Cell>,
) -> Option<Cell> {
    let free_count = grid
        .interior_cell_count()
        .saturating_sub(occupied.iter().filter(|cell| grid.is_interior(**cell)).count());
    if free_count == 0 {
        return None;
    }

    for _ in 0..MAX_SAMPLING_ATTEMPTS {
        let candidate = grid.random_interior_cell(rng);
        if !occupied.contains(&candidate) {
            return Some(candidate);
        }
    }

    let candidates: Vec<Cell> = grid
        .interior_cells()
        .filter(|cell| !occupied.contains(cell))
        .collect();
    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}
