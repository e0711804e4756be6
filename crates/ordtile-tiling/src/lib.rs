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

//! # Ordtile Tiling
//!
//! Lazy, restartable tilings of bounded ordinal domains into overlapping
//! windows: the primitive behind blocked processing with context overlap,
//! such as stencil passes or batched scans with lookback.
//!
//! ## Modules
//!
//! - `config`: `TilingConfig`, the validated `(unit, overlap)` window
//!   configuration shared by all tilings.
//! - `error`: `ConfigurationError`, returned when window parameters cannot
//!   produce a terminating traversal.
//! - `tiling`: `OverlappingTiling` and its window iterator `Windows`.
//! - `tiling2d`: `OverlappingTiling2D`, the row-major pairing of two tilings,
//!   and its tile iterator `Tiles`.
//!
//! ## Example
//!
//! ```rust
//! use ordtile_tiling::{OverlappingTiling, OverlappingTiling2D};
//!
//! let rows = OverlappingTiling::new(0, 10, 4, 1)?;
//! let cols = OverlappingTiling::new(0, 10, 4, 1)?;
//! let tiles = OverlappingTiling2D::new(rows, cols);
//!
//! for tile in &tiles {
//!     assert!(tile.rows() <= 4 && tile.cols() <= 4);
//! }
//! assert_eq!(tiles.iter().count(), 9);
//! # Ok::<(), ordtile_tiling::ConfigurationError<i32>>(())
//! ```
//!
//! ## Logging
//!
//! Construction and validation emit `tracing` events (`trace` on success,
//! `debug` on rejected configurations). Traversal never logs. Install any
//! `tracing` subscriber to observe them.

pub mod config;
pub mod error;
pub mod tiling;
pub mod tiling2d;

pub use config::TilingConfig;
pub use error::ConfigurationError;
pub use tiling::{OverlappingTiling, Windows};
pub use tiling2d::{OverlappingTiling2D, Tiles};
