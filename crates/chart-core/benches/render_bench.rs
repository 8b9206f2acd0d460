use chart_core::{Chart, ChartError, RenderOptions, Series};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_chart_years(n: usize) -> Chart {
    let mut ch = Chart::new().with_title("Total Gross by Year");
    let data = (0..n)
        .map(|i| {
            let year = 1900.0 + i as f64;
            let gross = ((i as f64 * 0.1).sin() + 1.2) * 1e9;
            (year, gross)
        })
        .collect();
    ch.add_series(Series::with_data("gross", data));
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_svg");
    for &n in &[100usize, 10_000usize] {
        group.bench_function(format!("years_{n}"), |b| {
            let mut ch = build_chart_years(n);
            ch.autoscale_axes().expect("non-empty");
            let opts = RenderOptions::default();
            b.iter(|| -> Result<(), ChartError> {
                let doc = ch.to_svg_string(&opts)?;
                black_box(doc);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
