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

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use ordtile_tiling::{OverlappingTiling, OverlappingTiling2D};
use std::hint::black_box;

fn bench_windows(c: &mut Criterion) {
    let mut group = c.benchmark_group("windows");
    for length in [1_000i64, 100_000, 10_000_000] {
        let tiling = OverlappingTiling::new(0, length, 64, 8).expect("valid configuration");
        group.throughput(Throughput::Elements(tiling.len() as u64));
        group.bench_with_input(BenchmarkId::new("iterate", length), &tiling, |b, t| {
            b.iter(|| {
                let mut acc = 0i64;
                for w in black_box(t) {
                    acc = acc.wrapping_add(w.end() - w.start());
                }
                acc
            })
        });
        group.bench_with_input(BenchmarkId::new("len", length), &tiling, |b, t| {
            b.iter(|| black_box(t).len())
        });
    }
    group.finish();
}

fn bench_tiles(c: &mut Criterion) {
    let mut group = c.benchmark_group("tiles");
    for side in [256i32, 2_048, 8_192] {
        let axis = OverlappingTiling::new(0, side, 32, 4).expect("valid configuration");
        let tiles = OverlappingTiling2D::new(axis, axis);
        group.throughput(Throughput::Elements(tiles.len() as u64));
        group.bench_with_input(BenchmarkId::new("iterate", side), &tiles, |b, t| {
            b.iter(|| black_box(t).iter().fold(0usize, |acc, tile| acc + tile.rows()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_windows, bench_tiles);
criterion_main!(benches);
