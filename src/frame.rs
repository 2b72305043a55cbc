use crate::color::Rgb;
use crate::mapping::GRID_SIZE;
use crate::{MatrixError, Result};
use serde::Serialize;

/// One full matrix state: 8 rows of 8 cells, `rows[y][x]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Frame {
    rows: [[Rgb; GRID_SIZE]; GRID_SIZE],
}

impl Frame {
    pub const BLACK: Frame = Frame {
        rows: [[Rgb::BLACK; GRID_SIZE]; GRID_SIZE],
    };

    /// Every cell the same color.
    pub fn solid(color: Rgb) -> Self {
        Self {
            rows: [[color; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Build a frame cell by cell from a coordinate function.
    pub fn from_fn(mut f: impl FnMut(u8, u8) -> Rgb) -> Self {
        let mut rows = [[Rgb::BLACK; GRID_SIZE]; GRID_SIZE];
        for (y, row) in rows.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = f(x as u8, y as u8);
            }
        }
        Self { rows }
    }

    /// Fallible variant of [`Frame::from_fn`], for cell sources that touch
    /// I/O or decoding.
    pub fn try_from_fn(mut f: impl FnMut(u8, u8) -> Result<Rgb>) -> Result<Self> {
        let mut rows = [[Rgb::BLACK; GRID_SIZE]; GRID_SIZE];
        for (y, row) in rows.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = f(x as u8, y as u8)?;
            }
        }
        Ok(Self { rows })
    }

    /// Validate untyped row data (e.g. a parsed JSON frame file) into a
    /// frame. Anything other than exactly 8 rows of 8 cells is rejected.
    pub fn from_rows(rows: &[Vec<Rgb>]) -> Result<Self> {
        if rows.len() != GRID_SIZE {
            return Err(MatrixError::InvalidFrameShape(format!(
                "expected {} rows, got {}",
                GRID_SIZE,
                rows.len()
            )));
        }
        let mut cells = [[Rgb::BLACK; GRID_SIZE]; GRID_SIZE];
        for (y, row) in rows.iter().enumerate() {
            if row.len() != GRID_SIZE {
                return Err(MatrixError::InvalidFrameShape(format!(
                    "row {y} has {} cells, expected {}",
                    row.len(),
                    GRID_SIZE
                )));
            }
            cells[y].copy_from_slice(row);
        }
        Ok(Self { rows: cells })
    }

    pub fn rows(&self) -> &[[Rgb; GRID_SIZE]; GRID_SIZE] {
        &self.rows
    }

    pub fn get(&self, x: u8, y: u8) -> Option<Rgb> {
        self.rows
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
    }

    /// Columns reversed: the cell at (x, y) moves to (7 - x, y).
    pub fn flipped_horizontal(&self) -> Self {
        let mut rows = self.rows;
        for row in rows.iter_mut() {
            row.reverse();
        }
        Self { rows }
    }

    /// Rows reversed: the cell at (x, y) moves to (x, 7 - y).
    pub fn flipped_vertical(&self) -> Self {
        let mut rows = self.rows;
        rows.reverse();
        Self { rows }
    }
}

/// Input to [`crate::LedMatrix::set_pixels`]: a materialized grid, or a
/// per-cell generator evaluated lazily so procedural patterns need no
/// intermediate frame.
pub enum PixelSource<'a> {
    Grid(Frame),
    Generator(&'a dyn Fn(u8, u8) -> Rgb),
}
