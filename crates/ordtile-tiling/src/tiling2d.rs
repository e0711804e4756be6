// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Overlapping 2D Tiling
//!
//! Pairs a row tiling with a column tiling. Traversal yields the cartesian
//! product of row windows and column windows in row-major order: the column
//! window varies fastest, and once the column windows are exhausted they
//! restart from the first column window while the row window advances. Each
//! produced tile is an `OrdinalRange2D` pairing the current row window with
//! the current column window.
//!
//! The traversal ends when the row windows are exhausted.

use crate::{
    config::TilingConfig,
    error::ConfigurationError,
    tiling::{OverlappingTiling, Windows},
};
use ordtile_core::{
    num::{
        Ordinal,
        distance::{exact_size_hint, saturate_to_usize},
    },
    range::{OrdinalRange, OrdinalRange2D},
};
use std::iter::FusedIterator;

/// A row tiling paired with a column tiling.
///
/// # Examples
///
/// ```rust
/// # use ordtile_tiling::tiling::OverlappingTiling;
/// # use ordtile_tiling::tiling2d::OverlappingTiling2D;
///
/// let axis = OverlappingTiling::new(0, 10, 4, 1).unwrap();
/// let tiles = OverlappingTiling2D::new(axis, axis);
/// assert_eq!(tiles.rows(), 3);
/// assert_eq!(tiles.cols(), 3);
/// assert_eq!(tiles.len(), 9);
///
/// let first = tiles.iter().next().unwrap();
/// assert_eq!(first.row(), axis.get(0).unwrap());
/// assert_eq!(first.col(), axis.get(0).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlappingTiling2D<R, C = R>
where
    R: Ordinal,
    C: Ordinal,
{
    row: OverlappingTiling<R>,
    col: OverlappingTiling<C>,
}

impl<T> OverlappingTiling2D<T, T>
where
    T: Ordinal,
{
    /// Tiles both domains with the same window configuration.
    pub fn from_config(
        row_domain: OrdinalRange<T>,
        col_domain: OrdinalRange<T>,
        config: TilingConfig<T>,
    ) -> Self {
        Self::new(
            OverlappingTiling::with_config(row_domain, config),
            OverlappingTiling::with_config(col_domain, config),
        )
    }

    /// Creates the 2D tiling of `[row_begin, row_end) x [col_begin, col_end)`
    /// from per-axis window parameters.
    ///
    /// # Errors
    ///
    /// Returns the `ConfigurationError` of the first axis (row, then column)
    /// whose window parameters are invalid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordtile_tiling::tiling2d::OverlappingTiling2D;
    ///
    /// let tiles = OverlappingTiling2D::try_from_bounds(100, 142, 10, 1, 200, 232, 10, 1).unwrap();
    /// assert_eq!((tiles.rows(), tiles.cols(), tiles.len()), (5, 4, 20));
    ///
    /// assert!(OverlappingTiling2D::try_from_bounds(0, 10, 4, 1, 0, 10, 4, 4).is_err());
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn try_from_bounds(
        row_begin: T,
        row_end: T,
        row_unit: T,
        row_overlap: T,
        col_begin: T,
        col_end: T,
        col_unit: T,
        col_overlap: T,
    ) -> Result<Self, ConfigurationError<T>> {
        Ok(Self::new(
            OverlappingTiling::new(row_begin, row_end, row_unit, row_overlap)?,
            OverlappingTiling::new(col_begin, col_end, col_unit, col_overlap)?,
        ))
    }
}

impl<R, C> OverlappingTiling2D<R, C>
where
    R: Ordinal,
    C: Ordinal,
{
    /// Pairs a row tiling with a column tiling.
    pub fn new(row: OverlappingTiling<R>, col: OverlappingTiling<C>) -> Self {
        tracing::trace!(%row, %col, "created overlapping 2D tiling");
        Self { row, col }
    }

    /// Returns the row tiling.
    #[inline]
    pub const fn row_tiling(&self) -> OverlappingTiling<R> {
        self.row
    }

    /// Returns the column tiling.
    #[inline]
    pub const fn col_tiling(&self) -> OverlappingTiling<C> {
        self.col
    }

    /// Returns the number of distinct row windows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.row.len()
    }

    /// Returns the number of distinct column windows.
    #[inline]
    pub fn cols(&self) -> usize {
        self.col.len()
    }

    /// Returns `rows() * cols()`, clamped at `usize::MAX`.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows().saturating_mul(self.cols())
    }

    /// Returns `true` if either axis has an empty domain.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.row.is_empty() || self.col.is_empty()
    }

    /// Returns the tile pairing row window `row_index` with column window
    /// `col_index`, or `None` if either index is out of range.
    #[inline]
    pub fn get(&self, row_index: usize, col_index: usize) -> Option<OrdinalRange2D<R, C>> {
        Some(OrdinalRange2D::new(
            self.row.get(row_index)?,
            self.col.get(col_index)?,
        ))
    }

    /// Creates a row-major iterator over the tiles.
    ///
    /// The iterator owns its row cursor and a copy of the column tiling used
    /// to restart the column sweep; it holds no reference to `self`.
    pub fn iter(&self) -> Tiles<R, C> {
        let mut rows = self.row.iter();
        let cursor = match rows.next() {
            Some(row) if !self.col.is_empty() => TileCursor::Active {
                row,
                cols: self.col.iter(),
            },
            _ => TileCursor::Exhausted,
        };
        Tiles {
            rows,
            col_tiling: self.col,
            cursor,
        }
    }
}

impl<R, C> std::fmt::Display for OverlappingTiling2D<R, C>
where
    R: Ordinal,
    C: Ordinal,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rows {{{}}} x cols {{{}}}", self.row, self.col)
    }
}

impl<R, C> IntoIterator for OverlappingTiling2D<R, C>
where
    R: Ordinal,
    C: Ordinal,
{
    type Item = OrdinalRange2D<R, C>;
    type IntoIter = Tiles<R, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<R, C> IntoIterator for &OverlappingTiling2D<R, C>
where
    R: Ordinal,
    C: Ordinal,
{
    type Item = OrdinalRange2D<R, C>;
    type IntoIter = Tiles<R, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone)]
enum TileCursor<R, C>
where
    R: Ordinal,
    C: Ordinal,
{
    Active {
        row: OrdinalRange<R>,
        cols: Windows<C>,
    },
    Exhausted,
}

/// A row-major iterator over the tiles of an `OverlappingTiling2D`.
#[derive(Debug, Clone)]
pub struct Tiles<R, C = R>
where
    R: Ordinal,
    C: Ordinal,
{
    rows: Windows<R>,
    col_tiling: OverlappingTiling<C>,
    cursor: TileCursor<R, C>,
}

impl<R, C> Tiles<R, C>
where
    R: Ordinal,
    C: Ordinal,
{
    #[inline]
    fn remaining(&self) -> u128 {
        match &self.cursor {
            TileCursor::Exhausted => 0,
            TileCursor::Active { cols, .. } => {
                let per_row = self.col_tiling.iter().remaining();
                cols.remaining()
                    .saturating_add(self.rows.remaining().saturating_mul(per_row))
            }
        }
    }
}

impl<R, C> Iterator for Tiles<R, C>
where
    R: Ordinal,
    C: Ordinal,
{
    type Item = OrdinalRange2D<R, C>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let TileCursor::Active { row, cols } = &mut self.cursor else {
                return None;
            };
            if let Some(col) = cols.next() {
                return Some(OrdinalRange2D::new(*row, col));
            }

            // Column sweep done; the row cursor alone decides termination.
            self.cursor = match self.rows.next() {
                Some(row) => TileCursor::Active {
                    row,
                    cols: self.col_tiling.iter(),
                },
                None => TileCursor::Exhausted,
            };
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        exact_size_hint(self.remaining())
    }
}

impl<R, C> ExactSizeIterator for Tiles<R, C>
where
    R: Ordinal,
    C: Ordinal,
{
    #[inline]
    fn len(&self) -> usize {
        saturate_to_usize(self.remaining())
    }
}

impl<R, C> FusedIterator for Tiles<R, C>
where
    R: Ordinal,
    C: Ordinal,
{
}
