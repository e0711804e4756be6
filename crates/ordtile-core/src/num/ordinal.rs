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
use std::hash::Hash;

/// A trait alias for the element types of tiled domains.
///
/// Any primitive integer, signed or unsigned, from 8 to 128 bits. Beyond the
/// arithmetic of `PrimInt` it requires the formatting traits used in error
/// messages and diagnostics, and `Send + Sync` so that tilings can be shared
/// across threads without extra bounds at every call site.
pub trait Ordinal:
    PrimInt + std::fmt::Debug + std::fmt::Display + Hash + Send + Sync + 'static
{
}

impl<T> Ordinal for T where
    T: PrimInt + std::fmt::Debug + std::fmt::Display + Hash + Send + Sync + 'static
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_ordinal<T: Ordinal>() {}

    #[test]
    fn test_primitive_integers_are_ordinal() {
        assert_ordinal::<i8>();
        assert_ordinal::<u8>();
        assert_ordinal::<i32>();
        assert_ordinal::<u64>();
        assert_ordinal::<isize>();
        assert_ordinal::<usize>();
        assert_ordinal::<i128>();
        assert_ordinal::<u128>();
    }
}
