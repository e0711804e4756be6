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

//! # Window Configuration
//!
//! `TilingConfig` is the validated `(unit, overlap)` pair that governs every
//! tiling. Validation happens once, here; anything holding a `TilingConfig`
//! can rely on `0 <= overlap < unit`, which in turn guarantees a positive
//! `step` and a terminating traversal.
//!
//! A configuration is independent of any domain and can be reused for many
//! of them, including both axes of a 2D tiling.

use crate::error::ConfigurationError;
use ordtile_core::num::{Ordinal, distance::span};

/// A validated window configuration: windows of `unit` values, consecutive
/// windows sharing `overlap` values.
///
/// # Invariants
///
/// `unit > 0` and `0 <= overlap < unit`.
///
/// # Examples
///
/// ```rust
/// # use ordtile_tiling::config::TilingConfig;
/// # use ordtile_tiling::error::ConfigurationError;
///
/// let config = TilingConfig::new(8, 3).unwrap();
/// assert_eq!(config.step(), 5);
///
/// assert_eq!(
///     TilingConfig::new(4, 4),
///     Err(ConfigurationError::OverlapNotLessThanUnit { unit: 4, overlap: 4 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TilingConfig<T>
where
    T: Ordinal,
{
    unit: T,
    overlap: T,
}

impl<T> TilingConfig<T>
where
    T: Ordinal,
{
    /// Validates and creates a window configuration.
    ///
    /// # Errors
    ///
    /// - `ConfigurationError::NonPositiveUnit` if `unit <= 0`.
    /// - `ConfigurationError::NegativeOverlap` if `overlap < 0`.
    /// - `ConfigurationError::OverlapNotLessThanUnit` if `overlap >= unit`.
    ///
    /// The checks run in that order; the first violated one is reported.
    pub fn new(unit: T, overlap: T) -> Result<Self, ConfigurationError<T>> {
        let result = if unit <= T::zero() {
            Err(ConfigurationError::NonPositiveUnit { unit })
        } else if overlap < T::zero() {
            Err(ConfigurationError::NegativeOverlap { overlap })
        } else if overlap >= unit {
            Err(ConfigurationError::OverlapNotLessThanUnit { unit, overlap })
        } else {
            Ok(Self { unit, overlap })
        };

        if let Err(error) = &result {
            tracing::debug!(%unit, %overlap, %error, "rejected tiling configuration");
        }
        result
    }

    /// Creates a configuration of adjacent, non-overlapping windows.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::NonPositiveUnit` if `unit <= 0`.
    #[inline]
    pub fn non_overlapping(unit: T) -> Result<Self, ConfigurationError<T>> {
        Self::new(unit, T::zero())
    }

    /// Returns the window size.
    #[inline]
    pub const fn unit(&self) -> T {
        self.unit
    }

    /// Returns the number of values shared by consecutive windows.
    #[inline]
    pub const fn overlap(&self) -> T {
        self.overlap
    }

    /// Returns the start-to-start distance of consecutive windows,
    /// `unit - overlap`. Always positive.
    #[inline]
    pub fn step(&self) -> T {
        self.unit - self.overlap
    }

    #[inline]
    pub(crate) fn unit_span(&self) -> u128 {
        span(T::zero(), self.unit)
    }

    #[inline]
    pub(crate) fn step_span(&self) -> u128 {
        span(self.overlap, self.unit)
    }
}

impl<T> std::fmt::Display for TilingConfig<T>
where
    T: Ordinal,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unit {}, overlap {}", self.unit, self.overlap)
    }
}

impl<T> TryFrom<(T, T)> for TilingConfig<T>
where
    T: Ordinal,
{
    type Error = ConfigurationError<T>;

    #[inline]
    fn try_from((unit, overlap): (T, T)) -> Result<Self, Self::Error> {
        Self::new(unit, overlap)
    }
}
