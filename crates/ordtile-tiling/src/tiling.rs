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

//! # Overlapping Tiling
//!
//! Splits a domain `[begin, end)` into a lazy, ordered sequence of windows of
//! `unit` values, each window starting `step = unit - overlap` after the
//! previous one. The final window is truncated to the domain end instead of
//! running past it.
//!
//! ## Traversal rule
//!
//! - The first window is `[begin, min(begin + unit, end))`.
//! - Each following window starts `step` after the previous start and ends at
//!   `min(start + unit, end)`.
//! - The sequence stops right after the first window whose end equals `end`.
//!
//! Stopping on the window end rather than on a precomputed count means a
//! domain whose length is not a multiple of `step` still ends with exactly
//! one truncated window, and a domain that is an exact multiple gets no empty
//! trailing window.
//!
//! ## Example
//!
//! ```rust
//! use ordtile_tiling::tiling::OverlappingTiling;
//!
//! let tiling = OverlappingTiling::new(-10, 15, 8, 3).unwrap();
//! let windows: Vec<_> = tiling.iter().map(std::ops::Range::from).collect();
//! assert_eq!(windows, vec![-10..-2, -5..3, 0..8, 5..13, 10..15]);
//! assert_eq!(tiling.len(), 5);
//! ```

use crate::{config::TilingConfig, error::ConfigurationError};
use ordtile_core::{
    num::{
        Ordinal,
        distance::{advance, exact_size_hint, saturate_to_usize, span},
    },
    range::OrdinalRange,
};
use std::{cmp::min, iter::FusedIterator};

/// Number of windows produced for a domain of `length` values.
#[inline]
fn window_count(length: u128, unit: u128, step: u128) -> u128 {
    if length == 0 {
        0
    } else if length <= unit {
        1
    } else {
        1 + (length - unit).div_ceil(step)
    }
}

/// The window starting at `start`, truncated to `domain_end`.
#[inline]
fn window_at<T>(start: T, unit: T, domain_end: T) -> OrdinalRange<T>
where
    T: Ordinal,
{
    let end = start
        .checked_add(&unit)
        .map_or(domain_end, |end| min(end, domain_end));
    OrdinalRange::new(start, end)
}

/// A domain `[begin, end)` paired with a validated window configuration.
///
/// The tiling itself is an immutable value. Each call to `iter` returns a
/// fresh `Windows` iterator, so the same tiling can be walked any number of
/// times with identical results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlappingTiling<T>
where
    T: Ordinal,
{
    domain: OrdinalRange<T>,
    config: TilingConfig<T>,
}

impl<T> OverlappingTiling<T>
where
    T: Ordinal,
{
    /// Creates a tiling of `[begin, end)` with windows of `unit` values that
    /// overlap by `overlap` values.
    ///
    /// An empty or inverted domain is accepted and yields no windows.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` if `unit <= 0`, `overlap < 0` or
    /// `overlap >= unit`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordtile_tiling::tiling::OverlappingTiling;
    /// # use ordtile_tiling::error::ConfigurationError;
    ///
    /// let tiling = OverlappingTiling::new(0, 10, 4, 1).unwrap();
    /// assert_eq!(tiling.len(), 3);
    ///
    /// assert!(matches!(
    ///     OverlappingTiling::new(0, 10, 0, 0),
    ///     Err(ConfigurationError::NonPositiveUnit { .. })
    /// ));
    /// ```
    pub fn new(begin: T, end: T, unit: T, overlap: T) -> Result<Self, ConfigurationError<T>> {
        let config = TilingConfig::new(unit, overlap)?;
        Ok(Self::with_config(OrdinalRange::new(begin, end), config))
    }

    /// Creates a tiling of `[begin, end)` into adjacent windows of `unit` values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::NonPositiveUnit` if `unit <= 0`.
    #[inline]
    pub fn non_overlapping(begin: T, end: T, unit: T) -> Result<Self, ConfigurationError<T>> {
        Self::new(begin, end, unit, T::zero())
    }

    /// Applies an already validated configuration to `domain`.
    pub fn with_config(domain: OrdinalRange<T>, config: TilingConfig<T>) -> Self {
        tracing::trace!(%domain, %config, "created overlapping tiling");
        Self { domain, config }
    }

    /// Returns the tiled domain.
    #[inline]
    pub const fn domain(&self) -> OrdinalRange<T> {
        self.domain
    }

    /// Returns the window configuration.
    #[inline]
    pub const fn config(&self) -> TilingConfig<T> {
        self.config
    }

    /// Returns the inclusive start of the domain.
    #[inline]
    pub const fn start(&self) -> T {
        self.domain.start()
    }

    /// Returns the exclusive end of the domain.
    #[inline]
    pub const fn end(&self) -> T {
        self.domain.end()
    }

    /// Returns the window size.
    #[inline]
    pub const fn unit(&self) -> T {
        self.config.unit()
    }

    /// Returns the overlap between consecutive windows.
    #[inline]
    pub const fn overlap(&self) -> T {
        self.config.overlap()
    }

    /// Returns the start-to-start distance of consecutive windows.
    #[inline]
    pub fn step(&self) -> T {
        self.config.step()
    }

    /// Returns the number of windows the traversal produces.
    ///
    /// This counts the truncated final window exactly once:
    /// `0` for an empty domain, `1` if the domain is no longer than `unit`,
    /// and `1 + ceil((length - unit) / step)` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordtile_tiling::tiling::OverlappingTiling;
    ///
    /// assert_eq!(OverlappingTiling::new(14, 150, 8, 3).unwrap().len(), 27);
    /// assert_eq!(OverlappingTiling::new(0, 5, 8, 3).unwrap().len(), 1);
    /// assert_eq!(OverlappingTiling::new(5, 0, 8, 3).unwrap().len(), 0);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        saturate_to_usize(window_count(
            span(self.domain.start(), self.domain.end()),
            self.config.unit_span(),
            self.config.step_span(),
        ))
    }

    /// Returns `true` if the domain is empty (`begin >= end`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    /// Returns the first window, or `None` for an empty domain.
    #[inline]
    pub fn first(&self) -> Option<OrdinalRange<T>> {
        (!self.is_empty()).then(|| window_at(self.start(), self.unit(), self.end()))
    }

    /// Returns the degenerate window `[end, end)` that marks the end of the
    /// traversal.
    #[inline]
    pub const fn end_marker(&self) -> OrdinalRange<T> {
        OrdinalRange::new(self.end(), self.end())
    }

    /// Returns the window at position `index` of the traversal, or `None` if
    /// `index >= len()`. Runs in constant time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordtile_core::range::OrdinalRange;
    /// # use ordtile_tiling::tiling::OverlappingTiling;
    ///
    /// let tiling = OverlappingTiling::new(-10, 15, 8, 3).unwrap();
    /// assert_eq!(tiling.get(2), Some(OrdinalRange::new(0, 8)));
    /// assert_eq!(tiling.get(4), Some(OrdinalRange::new(10, 15)));
    /// assert_eq!(tiling.get(5), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<OrdinalRange<T>> {
        self.iter().nth(index)
    }

    /// Creates an iterator over the windows, in ascending order of their start.
    ///
    /// The iterator owns a copy of the domain end and the configuration; it
    /// holds no reference to `self`.
    #[inline]
    pub fn iter(&self) -> Windows<T> {
        let cursor = match self.first() {
            Some(window) => WindowCursor::Active(window),
            None => WindowCursor::Exhausted,
        };
        Windows {
            domain_end: self.end(),
            config: self.config,
            cursor,
        }
    }
}

impl<T> std::fmt::Display for OverlappingTiling<T>
where
    T: Ordinal,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} tiled by {}", self.domain, self.config)
    }
}

impl<T> IntoIterator for OverlappingTiling<T>
where
    T: Ordinal,
{
    type Item = OrdinalRange<T>;
    type IntoIter = Windows<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &OverlappingTiling<T>
where
    T: Ordinal,
{
    type Item = OrdinalRange<T>;
    type IntoIter = Windows<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WindowCursor<T>
where
    T: Ordinal,
{
    Active(OrdinalRange<T>),
    Exhausted,
}

/// An iterator over the windows of an `OverlappingTiling`.
///
/// The cursor is either the window to be returned next or the terminal
/// `Exhausted` state, which is entered right after the window that reaches
/// the domain end has been returned.
#[derive(Debug, Clone)]
pub struct Windows<T>
where
    T: Ordinal,
{
    domain_end: T,
    config: TilingConfig<T>,
    cursor: WindowCursor<T>,
}

impl<T> Windows<T>
where
    T: Ordinal,
{
    /// Number of windows still to be produced, without clamping to `usize`.
    #[inline]
    pub(crate) fn remaining(&self) -> u128 {
        match self.cursor {
            WindowCursor::Exhausted => 0,
            WindowCursor::Active(window) => window_count(
                span(window.start(), self.domain_end),
                self.config.unit_span(),
                self.config.step_span(),
            ),
        }
    }
}

impl<T> Iterator for Windows<T>
where
    T: Ordinal,
{
    type Item = OrdinalRange<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let WindowCursor::Active(window) = self.cursor else {
            return None;
        };

        self.cursor = if window.end() == self.domain_end {
            WindowCursor::Exhausted
        } else {
            // A window short of the domain end is a full `unit` window, so
            // `start + step < start + unit` cannot overflow.
            let start = window.start() + self.config.step();
            WindowCursor::Active(window_at(start, self.config.unit(), self.domain_end))
        };

        Some(window)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        exact_size_hint(self.remaining())
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let WindowCursor::Active(window) = self.cursor else {
            return None;
        };

        let skip = n as u128;
        if skip >= self.remaining() {
            self.cursor = WindowCursor::Exhausted;
            return None;
        }

        // skip < remaining, so the skipped distance stays inside the domain.
        self.cursor = match advance(window.start(), skip * self.config.step_span()) {
            Some(start) => {
                WindowCursor::Active(window_at(start, self.config.unit(), self.domain_end))
            }
            None => WindowCursor::Exhausted,
        };
        self.next()
    }

    #[inline]
    fn count(self) -> usize {
        saturate_to_usize(self.remaining())
    }
}

impl<T> ExactSizeIterator for Windows<T>
where
    T: Ordinal,
{
    #[inline]
    fn len(&self) -> usize {
        saturate_to_usize(self.remaining())
    }
}

impl<T> FusedIterator for Windows<T> where T: Ordinal {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    type IntegerType = i64;

    fn tiling(
        b: IntegerType,
        e: IntegerType,
        unit: IntegerType,
        overlap: IntegerType,
    ) -> OverlappingTiling<IntegerType> {
        OverlappingTiling::new(b, e, unit, overlap).unwrap()
    }

    fn windows<T: Ordinal>(t: &OverlappingTiling<T>) -> Vec<(T, T)> {
        t.iter().map(|w| (w.start(), w.end())).collect()
    }

    /// Straightforward restatement of the traversal rule, used as an oracle.
    fn reference_windows(
        b: IntegerType,
        e: IntegerType,
        unit: IntegerType,
        overlap: IntegerType,
    ) -> Vec<(IntegerType, IntegerType)> {
        let mut out = Vec::new();
        if b >= e {
            return out;
        }
        let step = unit - overlap;
        let mut start = b;
        loop {
            let end = (start + unit).min(e);
            out.push((start, end));
            if end == e {
                return out;
            }
            start += step;
        }
    }

    #[test]
    fn test_worked_example() {
        let t = tiling(-10, 15, 8, 3);
        assert_eq!(
            windows(&t),
            vec![(-10, -2), (-5, 3), (0, 8), (5, 13), (10, 15)]
        );
        assert_eq!(t.len(), 5);
        assert_eq!(t.step(), 5);
    }

    #[test]
    fn test_truncated_final_window() {
        let t = tiling(0, 10, 4, 1);
        assert_eq!(windows(&t), vec![(0, 4), (3, 7), (6, 10)]);
        assert_eq!(t.len(), 3);

        let t = tiling(0, 11, 4, 1);
        assert_eq!(windows(&t), vec![(0, 4), (3, 7), (6, 10), (9, 11)]);
        assert_eq!(t.len(), 4);
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_window() {
        let t = tiling(0, 12, 4, 0);
        assert_eq!(windows(&t), vec![(0, 4), (4, 8), (8, 12)]);
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn test_len_differs_from_naive_formula() {
        // ceil(length / step) would report 6 here.
        let t = tiling(0, 26, 8, 3);
        assert_eq!(t.len(), 5);
        assert_eq!(t.iter().count(), 5);
        assert_eq!(windows(&t).last(), Some(&(20, 26)));
    }

    #[test]
    fn test_unit_at_least_domain_collapses_to_one_window() {
        assert_eq!(windows(&tiling(3, 8, 5, 2)), vec![(3, 8)]);
        assert_eq!(windows(&tiling(3, 8, 100, 2)), vec![(3, 8)]);
        // Overlap larger than the domain itself.
        assert_eq!(windows(&tiling(0, 5, 8, 6)), vec![(0, 5)]);
        assert_eq!(tiling(0, 5, 8, 6).len(), 1);
    }

    #[test]
    fn test_single_value_domain() {
        let t = tiling(7, 8, 3, 1);
        assert_eq!(windows(&t), vec![(7, 8)]);
    }

    #[test]
    fn test_empty_and_inverted_domains() {
        for t in [tiling(5, 5, 4, 1), tiling(10, -10, 4, 1)] {
            assert!(t.is_empty());
            assert_eq!(t.len(), 0);
            assert_eq!(t.iter().next(), None);
            assert_eq!(t.first(), None);
            assert_eq!(t.get(0), None);
        }
    }

    #[test]
    fn test_step_of_one() {
        let t = tiling(0, 5, 3, 2);
        assert_eq!(windows(&t), vec![(0, 3), (1, 4), (2, 5)]);
    }

    #[test]
    fn test_end_marker() {
        assert_eq!(tiling(-10, 15, 8, 3).end_marker(), OrdinalRange::new(15, 15));
    }

    #[test]
    fn test_invalid_configurations_are_rejected() {
        assert_eq!(
            OverlappingTiling::new(0, 10, 0, 0),
            Err(ConfigurationError::NonPositiveUnit { unit: 0 })
        );
        assert_eq!(
            OverlappingTiling::new(0, 10, -4, 1),
            Err(ConfigurationError::NonPositiveUnit { unit: -4 })
        );
        assert_eq!(
            OverlappingTiling::new(0, 10, 4, 4),
            Err(ConfigurationError::OverlapNotLessThanUnit {
                unit: 4,
                overlap: 4
            })
        );
        assert_eq!(
            OverlappingTiling::new(0, 10, 4, -1),
            Err(ConfigurationError::NegativeOverlap { overlap: -1 })
        );
    }

    #[test]
    fn test_unsigned_type_ceiling() {
        let t = OverlappingTiling::new(250u8, 255u8, 4, 1).unwrap();
        assert_eq!(windows(&t), vec![(250, 254), (253, 255)]);
        assert_eq!(t.len(), 2);

        let t = OverlappingTiling::new(0u8, 255u8, 200, 10).unwrap();
        assert_eq!(windows(&t), vec![(0, 200), (190, 255)]);
    }

    #[test]
    fn test_signed_full_width_domain() {
        let t = OverlappingTiling::new(i8::MIN, i8::MAX, 100, 0).unwrap();
        assert_eq!(windows(&t), vec![(-128, -28), (-28, 72), (72, 127)]);
        assert_eq!(t.len(), 3);
        assert_eq!(t.get(2), Some(OrdinalRange::new(72, 127)));
    }

    #[test]
    fn test_get_agrees_with_traversal() {
        let t = tiling(14, 150, 8, 3);
        let all: Vec<_> = t.iter().collect();
        assert_eq!(all.len(), 27);
        for (i, w) in all.iter().enumerate() {
            assert_eq!(t.get(i), Some(*w));
        }
        assert_eq!(t.get(all.len()), None);
        assert_eq!(t.get(usize::MAX), None);
    }

    #[test]
    fn test_nth_then_next_continues_sequence() {
        let t = tiling(-10, 15, 8, 3);
        let mut iter = t.iter();
        assert_eq!(iter.nth(1), Some(OrdinalRange::new(-5, 3)));
        assert_eq!(iter.next(), Some(OrdinalRange::new(0, 8)));
        assert_eq!(iter.nth(1), Some(OrdinalRange::new(10, 15)));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.nth(3), None);
    }

    #[test]
    fn test_exact_size_tracks_progress() {
        let t = tiling(14, 150, 8, 3);
        let mut iter = t.iter();
        for remaining in (0..=27).rev() {
            assert_eq!(iter.len(), remaining);
            assert_eq!(iter.size_hint(), (remaining, Some(remaining)));
            iter.next();
        }
    }

    #[test]
    fn test_size_hint_matches_len_beyond_usize() {
        let t = OverlappingTiling::new(0u128, u128::MAX, 2, 1).unwrap();
        assert_eq!(t.len(), usize::MAX);

        let mut iter = t.iter();
        assert_eq!(iter.len(), usize::MAX);
        assert_eq!(iter.size_hint(), (usize::MAX, Some(usize::MAX)));

        assert_eq!(iter.next(), Some(OrdinalRange::new(0, 2)));
        assert_eq!(iter.nth(9), Some(OrdinalRange::new(10, 12)));
        assert_eq!(iter.size_hint(), (iter.len(), Some(iter.len())));
    }

    #[test]
    fn test_fused() {
        let mut iter = tiling(0, 3, 4, 1).iter();
        assert!(iter.next().is_some());
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_restartable_and_independent() {
        let t = tiling(0, 10, 4, 1);
        assert_eq!(windows(&t), windows(&t));

        let mut a = t.iter();
        a.next();
        let mut b = a.clone();
        assert_eq!(a.next(), Some(OrdinalRange::new(3, 7)));
        assert_eq!(a.next(), Some(OrdinalRange::new(6, 10)));
        assert_eq!(b.next(), Some(OrdinalRange::new(3, 7)));
    }

    #[test]
    fn test_iterator_outlives_tiling() {
        let iter = {
            let t = tiling(0, 10, 4, 1);
            t.iter()
        };
        assert_eq!(iter.count(), 3);
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(tiling(0, 10, 4, 1), tiling(0, 10, 4, 1));
        assert_ne!(tiling(0, 10, 4, 1), tiling(0, 10, 4, 2));
        assert_ne!(tiling(0, 10, 4, 1), tiling(0, 11, 4, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", tiling(0, 10, 4, 1)),
            "[0, 10) tiled by unit 4, overlap 1"
        );
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<X: Send + Sync>() {}
        assert_send_sync::<OverlappingTiling<i32>>();
        assert_send_sync::<Windows<u64>>();
    }

    #[test]
    fn test_randomized_against_reference() {
        let mut rng = StdRng::seed_from_u64(0x5EED_CAFE);
        for _ in 0..2_000 {
            let b: IntegerType = rng.random_range(-100..100);
            let len: IntegerType = rng.random_range(-5..250);
            let unit: IntegerType = rng.random_range(1..40);
            let overlap: IntegerType = rng.random_range(0..unit);
            let e = b + len;

            let t = tiling(b, e, unit, overlap);
            let got = windows(&t);
            assert_eq!(got, reference_windows(b, e, unit, overlap));
            assert_eq!(t.len(), got.len(), "len mismatch for {t}");
            assert_eq!(t.is_empty(), b >= e);
        }
    }

    #[test]
    fn test_randomized_coverage_properties() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..2_000 {
            let b: IntegerType = rng.random_range(-1_000..1_000);
            let e = b + rng.random_range(1..500);
            let unit: IntegerType = rng.random_range(1..64);
            let overlap: IntegerType = rng.random_range(0..unit);
            let t = tiling(b, e, unit, overlap);
            let ws: Vec<_> = t.iter().collect();

            // Every window is non-empty, inside the domain and at most `unit` long.
            for w in &ws {
                assert!(!w.is_empty());
                assert!(t.domain().contains_range(*w));
                assert!(w.len() as IntegerType <= unit);
            }
            // All windows but the last are full.
            for w in &ws[..ws.len() - 1] {
                assert_eq!(w.len() as IntegerType, unit);
            }
            // Consecutive windows share exactly `overlap` values, leaving no gap.
            for pair in ws.windows(2) {
                assert_eq!(pair[1].start(), pair[0].start() + t.step());
                assert_eq!(pair[0].end() - pair[1].start(), overlap);
            }
            // The union is exactly the domain.
            assert_eq!(ws.first().map(|w| w.start()), Some(b));
            assert_eq!(ws.last().map(|w| w.end()), Some(e));
            // Random access matches traversal.
            let i = rng.random_range(0..ws.len());
            assert_eq!(t.get(i), Some(ws[i]));
        }
    }
}
