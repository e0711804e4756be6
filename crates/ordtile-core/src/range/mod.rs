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

//! # Ordinal Ranges
//!
//! Bounded, half-open domains over primitive integers and their lazy
//! traversal.
//!
//! ## Submodules
//!
//! - `ordinal`: `OrdinalRange<T>`, the `[start, end)` interval, and its
//!   value iterator `OrdinalRangeIter<T>`.
//! - `grid`: `OrdinalRange2D<R, C>`, the pairing of a row range with a column
//!   range, producing `Point2D` coordinates in row-major order.
//!
//! ## Traversal model
//!
//! Every iterator in this module owns a copy of the bounds it walks plus its
//! current position. Iterators never borrow the range they came from, so a
//! range can be traversed any number of times, from any number of threads,
//! and each traversal yields the same sequence.

pub mod grid;
pub mod ordinal;

pub use grid::{OrdinalRange2D, OrdinalRange2DIter, Point2D};
pub use ordinal::{OrdinalRange, OrdinalRangeIter};
