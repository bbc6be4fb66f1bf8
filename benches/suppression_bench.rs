use chart_drilldown::core::{
    ChartDataset, ChartSeries, PaletteColors, isolate_highest, suppress_empty,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn sparse_dataset(series_count: usize, category_count: usize) -> ChartDataset {
    let labels: Vec<String> = (0..category_count).map(|i| format!("category-{i}")).collect();
    let series = (0..series_count)
        .map(|s| {
            let values = (0..category_count).map(move |c| {
                if (c + s) % 7 == 0 || s % 5 == 0 {
                    0.0
                } else {
                    ((c * 31 + s * 17) % 97) as f64
                }
            });
            ChartSeries::new(format!("series-{s}"), values)
        })
        .collect();
    ChartDataset::from_labels(labels, series)
}

fn bench_suppress_empty_50x2k(c: &mut Criterion) {
    let dataset = sparse_dataset(50, 2_000);
    let palette = PaletteColors::new((0..50).map(|i| format!("#{i:06x}")));

    c.bench_function("suppress_empty_50x2k", |b| {
        b.iter(|| {
            let suppression = suppress_empty(black_box(&dataset)).expect("suppression");
            let _ = suppression.prune_palette(black_box(&palette));
        })
    });
}

fn bench_isolate_highest_10x10k(c: &mut Criterion) {
    let dataset = sparse_dataset(10, 10_000);

    c.bench_function("isolate_highest_10x10k", |b| {
        b.iter(|| {
            let _ = isolate_highest(black_box(&dataset)).expect("isolation");
        })
    });
}

criterion_group!(
    benches,
    bench_suppress_empty_50x2k,
    bench_isolate_highest_10x10k
);
criterion_main!(benches);
