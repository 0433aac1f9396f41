use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use suggest::{Options, Suggest};

/// Deterministic pseudo-words so runs are comparable.
fn vocabulary(n: usize) -> Vec<String> {
    let letters = b"abcdefghijklmnopqrstuvwxyz";
    let mut state: u32 = 0x9e37_79b9;
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let len = 3 + (state % 8) as usize;
            (0..len)
                .map(|i| letters[((state >> i) as usize + i * 7) % letters.len()] as char)
                .collect()
        })
        .collect()
}

fn bench_query_against(c: &mut Criterion) {
    let mut group = c.benchmark_group("query-against");
    let suggester = Suggest::new(Options::default());

    for size in [16, 256, 4096] {
        let commands = vocabulary(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &commands, |b, cmds| {
            b.iter(|| suggester.query_against(black_box("chekcout"), cmds))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_query_against);
criterion_main!(benches);
