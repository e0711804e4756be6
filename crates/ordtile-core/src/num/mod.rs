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

//! # Numeric Foundations
//!
//! Width-independent integer arithmetic for ordinal domains. A domain such as
//! `[i8::MIN, i8::MAX)` is perfectly valid, yet its length does not fit in
//! `i8`. The helpers in this module measure such distances in `u128`, which
//! is wide enough for the span between any two values of any primitive
//! integer type, and convert results back into the domain type only when
//! they are guaranteed to be representable.
//!
//! ## Submodules
//!
//! - `distance`: `span`, `advance` and the `usize` clamping used for iterator sizes.
//! - `ordinal`: The `Ordinal` trait alias collecting the bounds shared by the
//!   tiling crates.

pub mod distance;
pub mod ordinal;

pub use ordinal::Ordinal;
