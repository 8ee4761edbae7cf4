//! Square subplot grid sizing and placement.

use histgrid_common::{HistGridError, Result};
use serde::Serialize;

/// A `dimension x dimension` grid holding `count` subplots in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridLayout {
    dimension: usize,
    count: usize,
}

/// Location of one subplot within the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridCell {
    /// 0-based position in the column list.
    pub index: usize,
    /// 0-based row.
    pub row: usize,
    /// 0-based column.
    pub col: usize,
    /// Three-digit `rows cols index` code (`d*100 + d*10 + index+1`).
    pub position_code: usize,
}

/// Smallest `d` with `d * d >= n`.
pub fn grid_dimension(n: usize) -> usize {
    // Float estimate, then corrected so large inputs stay exact.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mut d = (n as f64).sqrt().ceil() as usize;
    while d.saturating_mul(d) < n {
        d += 1;
    }
    while d > 0 && (d - 1) * (d - 1) >= n {
        d -= 1;
    }
    d
}

impl GridLayout {
    /// Lay out `count` subplots. At least one subplot is required.
    pub fn for_count(count: usize) -> Result<Self> {
        if count == 0 {
            return Err(HistGridError::validation_field(
                "At least one column is required",
                "columns",
            ));
        }
        Ok(Self {
            dimension: grid_dimension(count),
            count,
        })
    }

    /// Side length of the grid.
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of populated cells.
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Total cells, populated or not.
    pub const fn capacity(&self) -> usize {
        self.dimension * self.dimension
    }

    /// Cells left empty at the end of the grid.
    pub const fn unused_cells(&self) -> usize {
        self.capacity() - self.count
    }

    /// Cell for the subplot at `index`, or `None` past the populated range.
    pub const fn cell(&self, index: usize) -> Option<GridCell> {
        if index >= self.count {
            return None;
        }
        let d = self.dimension;
        Some(GridCell {
            index,
            row: index / d,
            col: index % d,
            position_code: d * 100 + d * 10 + index + 1,
        })
    }

    /// All populated cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        (0..self.count).filter_map(|i| self.cell(i))
    }
}
