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

use num_traits::PrimInt;

/// Returns the number of integer points in `[lo, hi)`, or `0` if `hi <= lo`.
///
/// The result is exact for every primitive integer type, including spans
/// that overflow the type itself.
///
/// # Examples
///
/// ```rust
/// # use ordtile_core::num::distance::span;
///
/// assert_eq!(span(-10, 15), 25);
/// assert_eq!(span(i8::MIN, i8::MAX), 255);
/// assert_eq!(span(7u32, 3u32), 0);
/// ```
#[inline]
pub fn span<T>(lo: T, hi: T) -> u128
where
    T: PrimInt,
{
    if hi <= lo {
        return 0;
    }
    // Signed types and all unsigned types up to 64 bits fit in `i128`.
    if let (Some(l), Some(h)) = (lo.to_i128(), hi.to_i128()) {
        return h.wrapping_sub(l) as u128;
    }
    // Only `u128` values above `i128::MAX` end up here.
    match (lo.to_u128(), hi.to_u128()) {
        (Some(l), Some(h)) => h - l,
        _ => 0,
    }
}

/// Converts a `u128` count into `usize`, clamping at `usize::MAX`.
#[inline]
pub fn saturate_to_usize(value: u128) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

/// The `size_hint` of an exact-size iterator with `remaining` items left.
///
/// Both bounds are clamped with [`saturate_to_usize`], so the hint always
/// agrees with `ExactSizeIterator::len`. Counts above `usize::MAX` can only
/// arise from 128-bit domains and are reported as `usize::MAX`.
#[inline]
pub fn exact_size_hint(remaining: u128) -> (usize, Option<usize>) {
    let n = saturate_to_usize(remaining);
    (n, Some(n))
}

/// Returns `base + distance` if the result is representable in `T`.
///
/// # Examples
///
/// ```rust
/// # use ordtile_core::num::distance::advance;
///
/// assert_eq!(advance(-10i32, 25), Some(15));
/// assert_eq!(advance(i8::MIN, 255), Some(i8::MAX));
/// assert_eq!(advance(250u8, 6), None);
/// ```
#[inline]
pub fn advance<T>(base: T, distance: u128) -> Option<T>
where
    T: PrimInt,
{
    match base.to_i128() {
        Some(b) if b < 0 => {
            let to_zero = b.unsigned_abs();
            if distance < to_zero {
                // distance < |b| <= 2^127, so the cast is lossless
                num_traits::cast::<i128, T>(b + distance as i128)
            } else {
                num_traits::cast::<u128, T>(distance - to_zero)
            }
        }
        _ => {
            let b = base.to_u128()?;
            num_traits::cast::<u128, T>(b.checked_add(distance)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_basic() {
        assert_eq!(span(0, 10), 10);
        assert_eq!(span(-10, 15), 25);
        assert_eq!(span(5, 5), 0);
    }

    #[test]
    fn test_span_inverted_is_zero() {
        assert_eq!(span(10, 0), 0);
        assert_eq!(span(3u8, 1u8), 0);
    }

    #[test]
    fn test_span_exceeds_type() {
        assert_eq!(span(i8::MIN, i8::MAX), 255);
        assert_eq!(span(i64::MIN, i64::MAX), <u128 as From<u64>>::from(u64::MAX));
        assert_eq!(span(i128::MIN, i128::MAX), u128::MAX);
        assert_eq!(span(0u128, u128::MAX), u128::MAX);
        assert_eq!(span(u128::MAX - 3, u128::MAX), 3);
    }

    #[test]
    fn test_saturate_to_usize() {
        assert_eq!(saturate_to_usize(42), 42);
        assert_eq!(saturate_to_usize(u128::MAX), usize::MAX);
    }

    #[test]
    fn test_exact_size_hint_bounds_agree() {
        assert_eq!(exact_size_hint(0), (0, Some(0)));
        assert_eq!(exact_size_hint(42), (42, Some(42)));
        assert_eq!(exact_size_hint(u128::MAX), (usize::MAX, Some(usize::MAX)));
    }

    #[test]
    fn test_advance_signed() {
        assert_eq!(advance(-10i32, 0), Some(-10));
        assert_eq!(advance(-10i32, 5), Some(-5));
        assert_eq!(advance(-10i32, 10), Some(0));
        assert_eq!(advance(-10i32, 25), Some(15));
        assert_eq!(advance(i8::MIN, 255), Some(i8::MAX));
        assert_eq!(advance(i8::MIN, 256), None);
        assert_eq!(advance(100i8, 28), None);
    }

    #[test]
    fn test_advance_unsigned() {
        assert_eq!(advance(250u8, 5), Some(255));
        assert_eq!(advance(250u8, 6), None);
        assert_eq!(advance(u128::MAX - 1, 1), Some(u128::MAX));
        assert_eq!(advance(u128::MAX, 1), None);
    }

    #[test]
    fn test_advance_inverts_span() {
        for (lo, hi) in [(-7i16, 300i16), (0, 0), (i16::MIN, i16::MAX)] {
            assert_eq!(advance(lo, span(lo, hi)), Some(hi));
        }
    }
}
