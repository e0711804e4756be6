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

//! # Ordtile Core
//!
//! Foundational ordinal primitives for the ordtile windowing crates. The
//! types here describe bounded, half-open domains over primitive integers
//! and walk them lazily, without allocating and without holding references
//! back to the value they were created from.
//!
//! ## Modules
//!
//! - `range`: The half-open `[start, end)` interval `OrdinalRange<T>` and its
//!   row-major pairing `OrdinalRange2D<R, C>`, together with their owned
//!   iterators (`Iterator`, `ExactSizeIterator`, `FusedIterator`, and
//!   `DoubleEndedIterator` for the one-dimensional case).
//! - `num`: Overflow-free distance arithmetic across every primitive integer
//!   width, used to report lengths and compute window offsets, plus the
//!   `Ordinal` trait alias for element types.
//!
//! Refer to each module for detailed APIs and examples.

pub mod num;
pub mod range;
