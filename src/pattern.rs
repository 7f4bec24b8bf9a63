//! Cells, seed patterns and the named pattern catalog

use crate::error::{LifeError, Result};
use std::collections::BTreeMap;

/// Glyph used when rendering a live cell
pub const LIVE_GLYPH: char = 'O';
/// Glyph used when rendering a dead cell
pub const DEAD_GLYPH: char = ' ';

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    Live,
    #[default]
    Dead,
}

use Cell::{Dead as D, Live as L};

impl Cell {
    pub fn is_live(self) -> bool {
        self == Cell::Live
    }

    pub fn glyph(self) -> char {
        match self {
            Cell::Live => LIVE_GLYPH,
            Cell::Dead => DEAD_GLYPH,
        }
    }

    /// Accepts the render glyphs plus the usual plain-text conventions
    pub fn from_glyph(ch: char) -> Option<Cell> {
        match ch {
            'O' | 'o' | '#' | '*' => Some(Cell::Live),
            ' ' | '.' | '_' => Some(Cell::Dead),
            _ => None,
        }
    }
}

/// A square, immutable seed template
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    rows: Vec<Vec<Cell>>,
}

impl Pattern {
    /// Build a pattern from rows, rejecting anything that is not square
    pub fn new(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let side = rows.len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != side) {
            return Err(LifeError::InvalidPattern(format!(
                "pattern is not square: {} rows but row {} has {} cells",
                side,
                i,
                row.len()
            )));
        }
        Ok(Self { rows })
    }

    /// Square by construction, so it cannot fail
    pub fn from_array<const N: usize>(rows: [[Cell; N]; N]) -> Self {
        Self {
            rows: rows.iter().map(|r| r.to_vec()).collect(),
        }
    }

    /// Parse a pattern from text rows.
    ///
    /// Empty lines before and after the body are skipped. Rows shorter than
    /// the widest row are padded with dead cells, since trailing spaces are
    /// easily lost in config files.
    pub fn parse(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
        let start = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
        let end = lines.iter().rposition(|l| !l.is_empty()).map_or(start, |i| i + 1);
        let body = &lines[start..end];

        let width = body.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let mut rows = Vec::with_capacity(body.len());
        for (r, line) in body.iter().enumerate() {
            let mut row = Vec::with_capacity(width);
            for (c, ch) in line.chars().enumerate() {
                let cell = Cell::from_glyph(ch).ok_or_else(|| {
                    LifeError::InvalidPattern(format!(
                        "unexpected character {:?} at row {}, column {}",
                        ch, r, c
                    ))
                })?;
                row.push(cell);
            }
            row.resize(width, Cell::Dead);
            rows.push(row);
        }

        Self::new(rows)
    }

    /// Side length
    pub fn side(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.rows[row][col]
    }
}

/// Named seed patterns, built once at startup and passed by reference
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    patterns: BTreeMap<String, Pattern>,
}

impl Catalog {
    pub fn builtin() -> Self {
        let mut catalog = Self::default();
        catalog.insert(
            "glider",
            Pattern::from_array([[D, L, D], [D, D, L], [L, L, L]]),
        );
        catalog.insert(
            "spaceship",
            Pattern::from_array([
                [D, L, D, D, L],
                [L, D, D, D, D],
                [L, D, D, D, L],
                [L, L, L, L, D],
                [D, D, D, D, D],
            ]),
        );
        catalog.insert(
            "blinker",
            Pattern::from_array([[D, D, D], [L, L, L], [D, D, D]]),
        );
        catalog.insert("block", Pattern::from_array([[L, L], [L, L]]));
        catalog.insert(
            "toad",
            Pattern::from_array([[D, D, D, D], [D, L, L, L], [L, L, L, D], [D, D, D, D]]),
        );
        catalog.insert(
            "beacon",
            Pattern::from_array([[L, L, D, D], [L, L, D, D], [D, D, L, L], [D, D, L, L]]),
        );
        catalog
    }

    /// Add or replace a pattern
    pub fn insert(&mut self, name: impl Into<String>, pattern: Pattern) {
        self.patterns.insert(name.into(), pattern);
    }

    pub fn get(&self, name: &str) -> Result<&Pattern> {
        self.patterns
            .get(name)
            .ok_or_else(|| LifeError::UnknownPattern(name.to_string()))
    }

    /// Pattern names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.patterns.keys().map(String::as_str)
    }
}
