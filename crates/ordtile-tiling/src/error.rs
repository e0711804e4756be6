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

//! Errors raised while validating window configurations.

/// The reason a `(unit, overlap)` window configuration was rejected.
///
/// Only the window parameters can be invalid. Empty or inverted domains are
/// accepted and simply produce no windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigurationError<T> {
    /// The window size is zero or negative, so no window can make progress.
    NonPositiveUnit {
        /// The rejected window size.
        unit: T,
    },
    /// The overlap is negative, which would leave gaps between windows and
    /// allow window starts beyond the end of the domain.
    NegativeOverlap {
        /// The rejected overlap.
        overlap: T,
    },
    /// The overlap is not smaller than the window size, so consecutive
    /// windows would not advance.
    OverlapNotLessThanUnit {
        /// The configured window size.
        unit: T,
        /// The rejected overlap.
        overlap: T,
    },
}

impl<T> std::fmt::Display for ConfigurationError<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveUnit { unit } => {
                write!(f, "Window unit must be positive, got {unit}")
            }
            Self::NegativeOverlap { overlap } => {
                write!(f, "Window overlap must not be negative, got {overlap}")
            }
            Self::OverlapNotLessThanUnit { unit, overlap } => write!(
                f,
                "Window overlap ({overlap}) must be less than the window unit ({unit})"
            ),
        }
    }
}

impl<T> std::error::Error for ConfigurationError<T> where T: std::fmt::Debug + std::fmt::Display {}
