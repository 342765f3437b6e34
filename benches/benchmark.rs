use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rand_replay::*;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut mt = MersenneTwister::new(0);
    c.bench_function("MersenneTwister::next", move |b| b.iter(|| mt.next()));
    // Reseeding every 8 outputs keeps the fast engine inside its budget.
    c.bench_function("MersenneTwisterFast::new + 8 x next_u16", |b| b.iter(|| {
        let mut rng = MersenneTwisterFast::new(black_box(0x1234), 8);
        (0 .. 8).fold(0u16, |acc, _| acc ^ rng.next_u16())
    }));
    c.bench_function("MersenneTwister::new + 8 x next_u16", |b| b.iter(|| {
        let mut rng = MersenneTwister::new(black_box(0x1234));
        (0 .. 8).fold(0u16, |acc, _| acc ^ rng.next_u16())
    }));
    let mut bw = BwRng::new(0);
    c.bench_function("BwRng::next", move |b| b.iter(|| bw.next()));
    let mut bw = BwRng::new(0);
    c.bench_function("BwRng::advance", move |b| b.iter(|| bw.advance(black_box(0x8765_4321))));
    let mut poke = PokeRng::new(0);
    c.bench_function("PokeRng::advance", move |b| b.iter(|| poke.advance(black_box(0x8765_4321))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
