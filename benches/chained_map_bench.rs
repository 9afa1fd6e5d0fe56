use chained_map::ChainedMap;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn bench_put(c: &mut Criterion) {
    c.bench_function("chained_map_put_10k", |b| {
        b.iter_batched(
            ChainedMap::<u64, u64>::new,
            |mut m| {
                for (i, k) in lcg(1).take(10_000).enumerate() {
                    m.put(k, i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_overwrite(c: &mut Criterion) {
    c.bench_function("chained_map_overwrite", |b| {
        let mut m = ChainedMap::<u64, u64>::new();
        let keys: Vec<_> = lcg(3).take(10_000).collect();
        for &k in &keys {
            m.put(k, 0);
        }
        let mut it = keys.iter().cycle();
        let mut n = 0u64;
        b.iter(|| {
            let k = *it.next().unwrap();
            n = n.wrapping_add(1);
            m.put(k, n);
        })
    });
}

fn bench_get_hit(c: &mut Criterion) {
    c.bench_function("chained_map_get_hit", |b| {
        let mut m = ChainedMap::<u64, u64>::new();
        let keys: Vec<_> = lcg(7).take(20_000).collect();
        for (i, &k) in keys.iter().enumerate() {
            m.put(k, i as u64);
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = *it.next().unwrap();
            black_box(m.get(k).unwrap());
        })
    });
}

fn bench_get_miss(c: &mut Criterion) {
    c.bench_function("chained_map_get_miss", |b| {
        let mut m = ChainedMap::<u64, u64>::new();
        for (i, k) in lcg(11).take(10_000).enumerate() {
            m.put(k, i as u64);
        }
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            // generate keys unlikely in map
            let k = miss.next().unwrap();
            black_box(m.get(k).is_err());
        })
    });
}

fn bench_unmap_put(c: &mut Criterion) {
    c.bench_function("chained_map_unmap_put", |b| {
        let mut m = ChainedMap::<u64, u64>::new();
        let keys: Vec<_> = lcg(13).take(10_000).collect();
        for &k in &keys {
            m.put(k, k);
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = *it.next().unwrap();
            m.unmap(k);
            m.put(k, k);
        })
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_put, bench_overwrite, bench_get_hit, bench_get_miss, bench_unmap_put
}
criterion_main!(benches);
