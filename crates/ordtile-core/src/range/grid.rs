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

use crate::{
    num::distance::{exact_size_hint, saturate_to_usize, span},
    range::ordinal::OrdinalRange,
};
use num_traits::PrimInt;
use std::iter::FusedIterator;

/// A `(row, col)` coordinate produced by `OrdinalRange2D`.
///
/// Ordering is lexicographic on `(row, col)`, which is exactly the row-major
/// traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point2D<R, C = R> {
    /// The row coordinate.
    pub row: R,
    /// The column coordinate.
    pub col: C,
}

impl<R, C> Point2D<R, C> {
    /// Creates a new point.
    #[inline]
    pub const fn new(row: R, col: C) -> Self {
        Self { row, col }
    }
}

impl<R, C> From<(R, C)> for Point2D<R, C> {
    #[inline]
    fn from((row, col): (R, C)) -> Self {
        Self { row, col }
    }
}

impl<R, C> From<Point2D<R, C>> for (R, C) {
    #[inline]
    fn from(p: Point2D<R, C>) -> Self {
        (p.row, p.col)
    }
}

impl<R, C> std::fmt::Display for Point2D<R, C>
where
    R: std::fmt::Display,
    C: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The pairing of a row range with a column range.
///
/// Traversal yields every `Point2D { row, col }` of the cartesian product in
/// row-major order: the column varies fastest, and when it runs past the end
/// of the column range it restarts at the column start while the row advances
/// by one.
///
/// # Examples
///
/// ```rust
/// # use ordtile_core::range::{OrdinalRange, OrdinalRange2D, Point2D};
///
/// let grid = OrdinalRange2D::new(OrdinalRange::new(0, 2), OrdinalRange::new(5, 7));
/// assert_eq!(grid.len(), 4);
///
/// let points: Vec<_> = grid.iter().map(<(i32, i32)>::from).collect();
/// assert_eq!(points, vec![(0, 5), (0, 6), (1, 5), (1, 6)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrdinalRange2D<R, C = R>
where
    R: PrimInt,
    C: PrimInt,
{
    row: OrdinalRange<R>,
    col: OrdinalRange<C>,
}

impl<R, C> OrdinalRange2D<R, C>
where
    R: PrimInt,
    C: PrimInt,
{
    /// Pairs a row range with a column range.
    #[inline]
    pub const fn new(row: OrdinalRange<R>, col: OrdinalRange<C>) -> Self {
        Self { row, col }
    }

    /// Creates the pairing of `[row_start, row_end)` and `[col_start, col_end)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordtile_core::range::OrdinalRange2D;
    ///
    /// let grid = OrdinalRange2D::from_bounds(11, 41, 55, 75);
    /// assert_eq!(grid.rows(), 30);
    /// assert_eq!(grid.cols(), 20);
    /// assert_eq!(grid.len(), 600);
    /// ```
    #[inline]
    pub const fn from_bounds(row_start: R, row_end: R, col_start: C, col_end: C) -> Self {
        Self::new(
            OrdinalRange::new(row_start, row_end),
            OrdinalRange::new(col_start, col_end),
        )
    }

    /// Returns the row range.
    #[inline]
    pub const fn row(&self) -> OrdinalRange<R> {
        self.row
    }

    /// Returns the column range.
    #[inline]
    pub const fn col(&self) -> OrdinalRange<C> {
        self.col
    }

    /// Returns the number of rows, `row.len()`.
    #[inline]
    pub fn rows(&self) -> usize {
        self.row.len()
    }

    /// Returns the number of columns, `col.len()`.
    #[inline]
    pub fn cols(&self) -> usize {
        self.col.len()
    }

    /// Returns `rows() * cols()`, clamped at `usize::MAX`.
    #[inline]
    pub fn len(&self) -> usize {
        let rows = span(self.row.start(), self.row.end());
        let cols = span(self.col.start(), self.col.end());
        saturate_to_usize(rows.saturating_mul(cols))
    }

    /// Returns `true` if either axis is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.row.is_empty() || self.col.is_empty()
    }

    /// Returns `true` if `point` lies inside both axis ranges.
    #[inline]
    pub fn contains_point(&self, point: Point2D<R, C>) -> bool {
        self.row.contains_point(point.row) && self.col.contains_point(point.col)
    }

    /// Creates a row-major iterator over all coordinates.
    ///
    /// The iterator owns copies of both axis ranges and can outlive `self`.
    #[inline]
    pub fn iter(&self) -> OrdinalRange2DIter<R, C> {
        let cursor = if self.is_empty() {
            Cursor::Exhausted
        } else {
            Cursor::Active {
                row: self.row.start(),
                col: self.col.start(),
            }
        };
        OrdinalRange2DIter {
            row_end: self.row.end(),
            col_start: self.col.start(),
            col_end: self.col.end(),
            cursor,
        }
    }
}

impl<R, C> std::fmt::Display for OrdinalRange2D<R, C>
where
    R: PrimInt + std::fmt::Display,
    C: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {}", self.row, self.col)
    }
}

impl<R, C> IntoIterator for OrdinalRange2D<R, C>
where
    R: PrimInt,
    C: PrimInt,
{
    type Item = Point2D<R, C>;
    type IntoIter = OrdinalRange2DIter<R, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<R, C> IntoIterator for &OrdinalRange2D<R, C>
where
    R: PrimInt,
    C: PrimInt,
{
    type Item = Point2D<R, C>;
    type IntoIter = OrdinalRange2DIter<R, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor<R, C> {
    Active { row: R, col: C },
    Exhausted,
}

/// A row-major iterator over the coordinates of an `OrdinalRange2D`.
///
/// The iterator is exhausted exactly when the row cursor steps past the end of
/// the row range; the column cursor never takes part in that decision.
#[derive(Debug, Clone)]
pub struct OrdinalRange2DIter<R, C>
where
    R: PrimInt,
    C: PrimInt,
{
    row_end: R,
    col_start: C,
    col_end: C,
    cursor: Cursor<R, C>,
}

impl<R, C> OrdinalRange2DIter<R, C>
where
    R: PrimInt,
    C: PrimInt,
{
    #[inline]
    fn remaining(&self) -> u128 {
        match self.cursor {
            Cursor::Exhausted => 0,
            Cursor::Active { row, col } => {
                let rows_after = span(row, self.row_end) - 1;
                let cols = span(self.col_start, self.col_end);
                span(col, self.col_end).saturating_add(rows_after.saturating_mul(cols))
            }
        }
    }
}

impl<R, C> Iterator for OrdinalRange2DIter<R, C>
where
    R: PrimInt,
    C: PrimInt,
{
    type Item = Point2D<R, C>;

    fn next(&mut self) -> Option<Self::Item> {
        let Cursor::Active { row, col } = self.cursor else {
            return None;
        };

        let next_col = col + C::one();
        self.cursor = if next_col < self.col_end {
            Cursor::Active { row, col: next_col }
        } else {
            let next_row = row + R::one();
            if next_row < self.row_end {
                Cursor::Active {
                    row: next_row,
                    col: self.col_start,
                }
            } else {
                Cursor::Exhausted
            }
        };

        Some(Point2D { row, col })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        exact_size_hint(self.remaining())
    }
}

impl<R, C> ExactSizeIterator for OrdinalRange2DIter<R, C>
where
    R: PrimInt,
    C: PrimInt,
{
    #[inline]
    fn len(&self) -> usize {
        saturate_to_usize(self.remaining())
    }
}

impl<R, C> FusedIterator for OrdinalRange2DIter<R, C>
where
    R: PrimInt,
    C: PrimInt,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(br: i32, er: i32, bc: i32, ec: i32) -> OrdinalRange2D<i32> {
        OrdinalRange2D::from_bounds(br, er, bc, ec)
    }

    #[test]
    fn test_dimensions() {
        let g = grid(0, 10, 0, 10);
        assert_eq!(g.rows(), 10);
        assert_eq!(g.cols(), 10);
        assert_eq!(g.len(), 100);
        assert!(!g.is_empty());
    }

    #[test]
    fn test_row_major_order() {
        let g = grid(0, 10, 0, 10);
        let points: Vec<_> = g.iter().collect();
        assert_eq!(points.len(), 100);

        let expected: Vec<_> = (0..10)
            .flat_map(|r| (0..10).map(move |c| Point2D::new(r, c)))
            .collect();
        assert_eq!(points, expected);
        assert_eq!(points[0], Point2D::new(0, 0));
        assert_eq!(points[9], Point2D::new(0, 9));
        assert_eq!(points[10], Point2D::new(1, 0));
        assert_eq!(points[99], Point2D::new(9, 9));
    }

    #[test]
    fn test_row_major_order_matches_point_ordering() {
        let points: Vec<_> = grid(-2, 3, 4, 7).iter().collect();
        assert!(points.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_offset_bounds() {
        let g = grid(11, 41, 55, 75);
        let points: Vec<_> = g.iter().collect();
        assert_eq!(points.len(), g.len());
        assert_eq!(points.first(), Some(&Point2D::new(11, 55)));
        assert_eq!(points.last(), Some(&Point2D::new(40, 74)));
        assert!(points.iter().all(|p| g.contains_point(*p)));
    }

    #[test]
    fn test_empty_axes() {
        for g in [grid(0, 0, 0, 10), grid(0, 10, 5, 5), grid(3, 1, 0, 10), grid(0, 10, 9, 2)] {
            assert!(g.is_empty());
            assert_eq!(g.len(), 0);
            assert_eq!(g.iter().count(), 0);
            assert_eq!(g.iter().len(), 0);
        }
    }

    #[test]
    fn test_single_row_and_single_column() {
        let row: Vec<_> = grid(4, 5, 0, 3).iter().map(<(i32, i32)>::from).collect();
        assert_eq!(row, vec![(4, 0), (4, 1), (4, 2)]);

        let col: Vec<_> = grid(0, 3, 4, 5).iter().map(<(i32, i32)>::from).collect();
        assert_eq!(col, vec![(0, 4), (1, 4), (2, 4)]);
    }

    #[test]
    fn test_termination_at_type_ceiling() {
        // The row cursor steps onto u8::MAX as the sweep ends.
        let g: OrdinalRange2D<u8> = OrdinalRange2D::from_bounds(253, 255, 250, 255);
        let points: Vec<_> = g.iter().collect();
        assert_eq!(points.len(), 10);
        assert_eq!(points.last(), Some(&Point2D::new(254, 254)));
    }

    #[test]
    fn test_mixed_axis_types() {
        let g: OrdinalRange2D<u8, i64> = OrdinalRange2D::from_bounds(0u8, 2u8, -1i64, 1i64);
        let points: Vec<_> = g.iter().collect();
        assert_eq!(
            points,
            vec![
                Point2D::new(0u8, -1i64),
                Point2D::new(0, 0),
                Point2D::new(1, -1),
                Point2D::new(1, 0)
            ]
        );
    }

    #[test]
    fn test_exact_size_tracks_progress() {
        let g = grid(0, 3, 0, 4);
        let mut iter = g.iter();
        for remaining in (0..=12).rev() {
            assert_eq!(iter.len(), remaining);
            iter.next();
        }
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_size_hint_matches_len_beyond_usize() {
        let g = OrdinalRange2D::from_bounds(0u64, u64::MAX, 0u64, u64::MAX);
        assert_eq!(g.len(), usize::MAX);

        let mut iter = g.iter();
        assert_eq!(iter.size_hint(), (usize::MAX, Some(usize::MAX)));
        assert_eq!(iter.next(), Some(Point2D::new(0, 0)));
        assert_eq!(iter.size_hint(), (iter.len(), Some(iter.len())));
    }

    #[test]
    fn test_restartable_and_independent() {
        let g = grid(0, 2, 0, 2);
        let mut a = g.iter();
        a.next();
        let b = a.clone();
        a.next();
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 3);
        assert_eq!(g.iter().collect::<Vec<_>>(), g.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(grid(0, 1, 2, 3), grid(0, 1, 2, 3));
        assert_ne!(grid(0, 1, 2, 3), grid(0, 1, 2, 4));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", grid(0, 2, 5, 7)), "[0, 2) x [5, 7)");
        assert_eq!(format!("{}", Point2D::new(3, -4)), "(3, -4)");
    }
}
