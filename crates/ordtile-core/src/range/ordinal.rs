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

use crate::num::distance::{exact_size_hint, saturate_to_usize, span};
use num_traits::PrimInt;
use std::{
    cmp::{max, min},
    iter::FusedIterator,
};

/// A half-open interval `[start, end)` over a primitive integer type.
///
/// The range is a plain value: it is never mutated after construction and
/// equality compares the two bounds only. Bounds are stored exactly as given.
/// If `start >= end` the range is empty; inverted bounds are not an error.
///
/// # Examples
///
/// ```rust
/// # use ordtile_core::range::OrdinalRange;
///
/// let r = OrdinalRange::new(-2, 3);
/// assert_eq!(r.len(), 5);
/// assert_eq!(r.iter().collect::<Vec<_>>(), vec![-2, -1, 0, 1, 2]);
///
/// let inverted = OrdinalRange::new(3, -2);
/// assert!(inverted.is_empty());
/// assert_eq!(inverted.len(), 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrdinalRange<T>
where
    T: PrimInt,
{
    start_inclusive: T,
    end_exclusive: T,
}

/// An iterator over the values of an `OrdinalRange`, in ascending order.
///
/// Holds its own copy of the bounds; it does not borrow the range.
///
/// # Examples
///
/// ```rust
/// # use ordtile_core::range::OrdinalRange;
///
/// let mut iter = OrdinalRange::new(1, 4).iter();
/// assert_eq!(iter.len(), 3);
/// assert_eq!(iter.next(), Some(1));
/// assert_eq!(iter.next_back(), Some(3));
/// assert_eq!(iter.next(), Some(2));
/// assert_eq!(iter.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct OrdinalRangeIter<T>
where
    T: PrimInt,
{
    current: T,
    end_exclusive: T,
}

impl<T> Iterator for OrdinalRangeIter<T>
where
    T: PrimInt,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.current < self.end_exclusive {
            let value = self.current;
            self.current = self.current + T::one();
            Some(value)
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        exact_size_hint(span(self.current, self.end_exclusive))
    }
}

impl<T> DoubleEndedIterator for OrdinalRangeIter<T>
where
    T: PrimInt,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.current < self.end_exclusive {
            self.end_exclusive = self.end_exclusive - T::one();
            Some(self.end_exclusive)
        } else {
            None
        }
    }
}

impl<T> ExactSizeIterator for OrdinalRangeIter<T>
where
    T: PrimInt,
{
    #[inline]
    fn len(&self) -> usize {
        saturate_to_usize(span(self.current, self.end_exclusive))
    }
}

impl<T> FusedIterator for OrdinalRangeIter<T> where T: PrimInt {}

impl<T> OrdinalRange<T>
where
    T: PrimInt,
{
    /// Creates a new `OrdinalRange` covering `[start_inclusive, end_exclusive)`.
    ///
    /// Never fails. A range with `start_inclusive >= end_exclusive` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordtile_core::range::OrdinalRange;
    ///
    /// let r = OrdinalRange::new(0u32, 10u32);
    /// assert_eq!(r.start(), 0);
    /// assert_eq!(r.end(), 10);
    /// ```
    #[inline]
    pub const fn new(start_inclusive: T, end_exclusive: T) -> Self {
        Self {
            start_inclusive,
            end_exclusive,
        }
    }

    /// Returns the inclusive start bound.
    #[inline]
    pub const fn start(&self) -> T {
        self.start_inclusive
    }

    /// Returns the exclusive end bound.
    #[inline]
    pub const fn end(&self) -> T {
        self.end_exclusive
    }

    /// Returns the number of values in the range, `max(0, end - start)`.
    ///
    /// The count is exact even when `end - start` does not fit in `T`; it is
    /// clamped only at `usize::MAX`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordtile_core::range::OrdinalRange;
    ///
    /// assert_eq!(OrdinalRange::new(10, 20).len(), 10);
    /// assert_eq!(OrdinalRange::new(20, 10).len(), 0);
    /// assert_eq!(OrdinalRange::new(i8::MIN, i8::MAX).len(), 255);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        saturate_to_usize(span(self.start_inclusive, self.end_exclusive))
    }

    /// Returns `true` if the range contains no values (`start >= end`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start_inclusive >= self.end_exclusive
    }

    /// Returns `true` if `value` lies in `[start, end)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordtile_core::range::OrdinalRange;
    ///
    /// let r = OrdinalRange::new(0, 10);
    /// assert!(r.contains_point(0));
    /// assert!(!r.contains_point(10));
    /// ```
    #[inline]
    pub fn contains_point(&self, value: T) -> bool {
        self.start_inclusive <= value && value < self.end_exclusive
    }

    /// Returns `true` if every value of the non-empty range `other` lies in `self`.
    ///
    /// An empty `other` is contained in any range.
    #[inline]
    pub fn contains_range(&self, other: Self) -> bool {
        other.is_empty()
            || (self.start_inclusive <= other.start_inclusive
                && other.end_exclusive <= self.end_exclusive)
    }

    /// Returns the values common to both ranges, or `None` if there are none.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordtile_core::range::OrdinalRange;
    ///
    /// let a = OrdinalRange::new(0, 10);
    /// assert_eq!(a.intersection(OrdinalRange::new(5, 15)), Some(OrdinalRange::new(5, 10)));
    /// assert_eq!(a.intersection(OrdinalRange::new(10, 15)), None);
    /// ```
    #[inline]
    pub fn intersection(&self, other: Self) -> Option<Self> {
        let start = max(self.start_inclusive, other.start_inclusive);
        let end = min(self.end_exclusive, other.end_exclusive);
        (start < end).then_some(Self::new(start, end))
    }

    /// Creates an iterator over the values `start, start + 1, ..., end - 1`.
    ///
    /// The iterator owns a copy of the bounds, so the range can be traversed
    /// again at any time with identical results.
    #[inline]
    pub fn iter(&self) -> OrdinalRangeIter<T> {
        OrdinalRangeIter {
            current: self.start_inclusive,
            end_exclusive: self.end_exclusive,
        }
    }
}

impl<T> Default for OrdinalRange<T>
where
    T: PrimInt,
{
    #[inline]
    fn default() -> Self {
        Self::new(T::zero(), T::zero())
    }
}

impl<T> std::fmt::Debug for OrdinalRange<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrdinalRange")
            .field("start_inclusive", &self.start_inclusive)
            .field("end_exclusive", &self.end_exclusive)
            .finish()
    }
}

impl<T> std::fmt::Display for OrdinalRange<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start_inclusive, self.end_exclusive)
    }
}

impl<T> std::ops::RangeBounds<T> for OrdinalRange<T>
where
    T: PrimInt,
{
    fn start_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.start_inclusive)
    }

    fn end_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Excluded(&self.end_exclusive)
    }
}

impl<T> IntoIterator for OrdinalRange<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = OrdinalRangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &OrdinalRange<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = OrdinalRangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<std::ops::Range<T>> for OrdinalRange<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(range: std::ops::Range<T>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl<T> From<OrdinalRange<T>> for std::ops::Range<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(range: OrdinalRange<T>) -> Self {
        range.start_inclusive..range.end_exclusive
    }
}
