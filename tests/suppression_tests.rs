use chart_drilldown::core::{
    ChartDataset, ChartSeries, DataValue, PaletteColors, SeriesPoint, suppress_empty,
};
use chart_drilldown::error::DrillDownError;

fn sparse_dataset() -> ChartDataset {
    ChartDataset::from_labels(
        ["a", "b", "c", "d"],
        vec![
            ChartSeries::new("A", [0.0, 1.0, 0.0, 0.0]),
            ChartSeries::new("B", [0.0, 0.0, 0.0, 0.0]),
            ChartSeries::new("C", [0.0, 2.0, 0.0, 3.0]),
        ],
    )
}

#[test]
fn drops_empty_categories_and_series() {
    let original = sparse_dataset();
    let suppression = suppress_empty(&original).expect("suppression");

    assert_eq!(suppression.dataset.category_labels(), vec!["b", "d"]);
    assert_eq!(
        suppression.dataset.series_names(),
        vec![Some("A"), Some("C")]
    );
    assert_eq!(suppression.removed_series, vec![1]);
    assert!(!suppression.placeholder);
    suppression.dataset.validate().expect("aligned after suppression");

    let values: Vec<Option<f64>> = suppression.dataset.series[1]
        .data
        .iter()
        .map(|p| p.value.get())
        .collect();
    assert_eq!(values, vec![Some(2.0), Some(3.0)]);
}

#[test]
fn does_not_touch_the_original_snapshot() {
    let original = sparse_dataset();
    let copy = original.clone();
    let _ = suppress_empty(&original).expect("suppression");
    assert_eq!(original, copy);
}

#[test]
fn all_zero_dataset_becomes_two_point_placeholder() {
    let original = ChartDataset::from_labels(
        ["a", "b"],
        vec![
            ChartSeries::new("A", [0.0, 0.0]),
            ChartSeries::new("B", [0.0, 0.0]),
        ],
    );
    let suppression = suppress_empty(&original).expect("suppression");

    assert!(suppression.placeholder);
    assert!(suppression.dataset.is_placeholder());
    assert_eq!(suppression.dataset.series.len(), 1);
    assert_eq!(suppression.dataset.series[0].name, None);
    assert_eq!(
        suppression.dataset.series[0].data,
        vec![SeriesPoint::null(), SeriesPoint::null()]
    );
    assert_eq!(suppression.removed_series, vec![0, 1]);
    assert_eq!(
        suppression.prune_palette(&PaletteColors::new(["c0", "c1", "c2"])),
        PaletteColors::new(["c2"])
    );
}

#[test]
fn null_only_series_count_as_empty() {
    let original = ChartDataset::from_labels(
        ["a", "b"],
        vec![
            ChartSeries {
                name: Some("nulls".to_owned()),
                data: vec![SeriesPoint::null(), SeriesPoint::new(0.0)],
            },
            ChartSeries::new("values", [4.0, 0.0]),
        ],
    );
    let suppression = suppress_empty(&original).expect("suppression");

    assert_eq!(suppression.dataset.series_names(), vec![Some("values")]);
    assert_eq!(suppression.dataset.category_labels(), vec!["a"]);
    assert_eq!(
        suppression.dataset.series[0].data[0].value,
        DataValue::new(4.0)
    );
}

#[test]
fn palette_follows_removed_series() {
    let original = ChartDataset::from_labels(
        ["a"],
        vec![
            ChartSeries::new("s0", [1.0]),
            ChartSeries::new("s1", [0.0]),
            ChartSeries::new("s2", [2.0]),
            ChartSeries::new("s3", [0.0]),
        ],
    );
    let palette = PaletteColors::new(["c0", "c1", "c2", "c3"]);
    let suppression = suppress_empty(&original).expect("suppression");

    assert_eq!(suppression.removed_series, vec![1, 3]);
    assert_eq!(
        suppression.prune_palette(&palette),
        PaletteColors::new(["c0", "c2"])
    );
}

#[test]
fn misaligned_dataset_fails_fast() {
    let original = ChartDataset::from_labels(
        ["a", "b", "c"],
        vec![ChartSeries::new("short", [1.0, 2.0])],
    );
    let err = suppress_empty(&original).expect_err("must reject misaligned data");
    assert!(matches!(
        err,
        DrillDownError::InvariantViolation {
            series: 0,
            expected: 3,
            actual: 2
        }
    ));
}
