use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use movie_data::{aggregate, RawRecord, YearFilter};

fn gen_records(n: usize) -> Vec<RawRecord> {
    (0..n)
        .map(|i| {
            let year = 1916 + (i % 101);
            // every seventh row has no gross, like the real dataset's gaps
            let gross = if i % 7 == 0 { String::new() } else { format!("{}", (i * 7919) % 500_000_000) };
            RawRecord::new(&year.to_string(), &gross)
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");
    for &n in &[5_000usize, 50_000usize] {
        let data = gen_records(n);
        for filter in [YearFilter::Present, YearFilter::Since(2010)] {
            group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}_{filter:?}")), &filter, |b, &f| {
                b.iter_batched(
                    || data.clone(),
                    |d| { let _ = black_box(aggregate(&d, f)); },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_aggregate);
criterion_main!(benches);
