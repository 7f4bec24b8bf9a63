//! The Life board: seed placement, generation advance and text rendering

use crate::error::{LifeError, Result};
use crate::pattern::{Cell, Pattern};
use std::fmt;

/// One square snapshot of the board, indexed `[row][col]`
pub type Generation = Vec<Vec<Cell>>;

/// Build a `dim`-sized generation with `pattern` centered and everything
/// else dead.
pub fn build_generation(dim: usize, pattern: &Pattern) -> Result<Generation> {
    if dim == 0 {
        return Err(LifeError::InvalidDimension(dim));
    }
    let p_dim = pattern.side();
    if p_dim > dim {
        return Err(LifeError::InvalidPattern(format!(
            "{}x{} pattern does not fit a {}x{} board",
            p_dim, p_dim, dim, dim
        )));
    }

    let offset = (dim - p_dim) / 2;
    let inside = offset..offset + p_dim;

    let gen = (0..dim)
        .map(|row| {
            (0..dim)
                .map(|col| {
                    if inside.contains(&row) && inside.contains(&col) {
                        pattern.get(row - offset, col - offset)
                    } else {
                        Cell::Dead
                    }
                })
                .collect()
        })
        .collect();
    Ok(gen)
}

/// Board state: the current generation on a `dim` x `dim` torus
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    dim: usize,
    gen: Generation,
    generation: u64,
}

impl Board {
    pub fn new(dim: usize, pattern: &Pattern) -> Result<Self> {
        let gen = build_generation(dim, pattern)?;
        tracing::debug!(dim, pattern_side = pattern.side(), "board built");
        Ok(Self {
            dim,
            gen,
            generation: 0,
        })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of advances applied since construction
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.gen[row][col]
    }

    pub fn cells(&self) -> &Generation {
        &self.gen
    }

    /// Count of live cells
    pub fn population(&self) -> usize {
        self.gen.iter().flatten().filter(|c| c.is_live()).count()
    }

    /// Live cells among the 8 surrounding positions, wrapping at the edges.
    ///
    /// The cell itself is skipped by offset, not by position, so on boards
    /// smaller than 3 a wrapped neighbor may be the cell itself.
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let dim = self.dim as isize;
        let mut count = 0u8;
        for dr in -1isize..=1 {
            for dc in -1isize..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let r = (row as isize + dr).rem_euclid(dim) as usize;
                let c = (col as isize + dc).rem_euclid(dim) as usize;
                if self.gen[r][c].is_live() {
                    count += 1;
                }
            }
        }
        count
    }

    /// Step the board one generation.
    ///
    /// Every cell is computed from the current snapshot into a fresh
    /// generation which then replaces it whole.
    pub fn advance(&mut self) {
        let next: Generation = (0..self.dim)
            .map(|row| (0..self.dim).map(|col| self.fate(row, col)).collect())
            .collect();

        self.gen = next;
        self.generation += 1;
        tracing::trace!(generation = self.generation, "advanced");
    }

    fn fate(&self, row: usize, col: usize) -> Cell {
        match (self.gen[row][col], self.live_neighbors(row, col)) {
            (state, 2) => state,
            (_, 3) => Cell::Live,
            _ => Cell::Dead,
        }
    }

    /// Text snapshot: one line per row, `'O'` live, `' '` dead, each line
    /// newline-terminated
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.dim * (self.dim + 1));
        for row in &self.gen {
            out.extend(row.iter().map(|c| c.glyph()));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
