//! Benchmarks comparing copy-based and in-place permutation application.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench remap
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;
use renumber::{
    Lit, NewToOld, OldToNew, SeenMarkers, Var, apply_compacting, apply_forward, apply_in_place,
    apply_polarized, apply_reverse,
};

const SIZES: [usize; 3] = [1_000, 100_000, 1_000_000];

fn shuffled_vars(len: usize, seed: u64) -> Vec<Var> {
    let mut rng = Pcg64::seed_from_u64(seed);
    let mut vars: Vec<Var> = Var::range(len).collect();
    vars.shuffle(&mut rng);
    vars
}

fn payload(len: usize) -> Vec<u64> {
    (0..len as u64).collect()
}

fn bench_permutation_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("permutation_apply");
    for len in SIZES {
        let gather = NewToOld::new(shuffled_vars(len, 0x5eed));
        let scatter = gather.to_opposite();
        let data = payload(len);

        group.bench_with_input(BenchmarkId::new("forward", len), &data, |b, data| {
            b.iter_batched_ref(
                || data.clone(),
                |data| apply_forward(data, hint::black_box(&gather)),
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("reverse", len), &data, |b, data| {
            b.iter_batched_ref(
                || data.clone(),
                |data| apply_reverse(data, hint::black_box(&scatter)),
                BatchSize::LargeInput,
            );
        });

        let mut seen = SeenMarkers::new(len);
        group.bench_with_input(BenchmarkId::new("in_place", len), &data, |b, data| {
            b.iter_batched_ref(
                || data.clone(),
                |data| hint::black_box(apply_in_place(data, &mut seen, hint::black_box(&gather))),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_value_remap(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_remap");
    for len in SIZES {
        let mapper = OldToNew::new(shuffled_vars(len / 2, 0xc0de));
        let refs = shuffled_vars(len, 0xface);
        let lits: Vec<Lit> = refs
            .iter()
            .map(|&var| Lit::new(var, var.index() % 3 == 0))
            .collect();

        group.bench_with_input(BenchmarkId::new("compacting", len), &refs, |b, refs| {
            b.iter_batched_ref(
                || refs.clone(),
                |refs| apply_compacting(refs, hint::black_box(&mapper)),
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("polarized", len), &lits, |b, lits| {
            b.iter_batched_ref(
                || lits.clone(),
                |lits| apply_polarized(lits, hint::black_box(&mapper)),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_permutation_apply, bench_value_remap);
criterion_main!(benches);
