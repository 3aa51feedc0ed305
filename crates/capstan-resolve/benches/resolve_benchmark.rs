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

use capstan_core::math::interval::Interval;
use capstan_model::anchor::AnchorMode;
use capstan_model::rate::Rate;
use capstan_model::zone::EfficiencyZone;
use capstan_resolve::resolver::resolve_with_efficiencies;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

const SEED: u64 = 0xCAB1E;
const HORIZON: i64 = 1_000_000;
const RATES: [i64; 8] = [0, 25, 50, 75, 100, 150, 200, 300];

/// Generates a reproducible zone collection spread over the horizon, with
/// overlaps, gaps, zero-rate stretches, and a few priority overrides.
fn random_zones(rng: &mut StdRng, count: usize) -> Vec<EfficiencyZone<i64>> {
    (0..count)
        .map(|_| {
            let min = rng.gen_range(-HORIZON / 4..HORIZON);
            let len = rng.gen_range(1..HORIZON / 16);
            let rate = RATES[rng.gen_range(0..RATES.len())];
            let priority = rng.gen_range(-1..=1);
            EfficiencyZone::new(Interval::new(min, min + len), Rate::new(rate))
                .with_priority(priority)
        })
        .collect()
}

fn bench_resolve(c: &mut Criterion) {
    let target = Interval::new(0_i64, HORIZON / 2);
    let mut group = c.benchmark_group("resolve_with_efficiencies");

    for count in [4_usize, 16, 64, 256, 1024] {
        let mut rng = StdRng::seed_from_u64(SEED);
        let zones = random_zones(&mut rng, count);

        group.throughput(Throughput::Elements(count as u64));

        for mode in [AnchorMode::FixedStart, AnchorMode::FixedEnd] {
            group.bench_with_input(
                BenchmarkId::new(format!("{}", mode), count),
                &zones,
                |b, zones| {
                    b.iter(|| {
                        resolve_with_efficiencies(
                            black_box(target),
                            black_box(zones),
                            black_box(mode),
                        )
                        .expect("benchmark zones are well formed")
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
