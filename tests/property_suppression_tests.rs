use chart_drilldown::api::ChartSnapshot;
use chart_drilldown::core::{
    ChartDataset, ChartSeries, PaletteColors, SeriesPoint, suppress_empty,
};
use proptest::prelude::*;

fn cell() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        2 => Just(None),
        3 => Just(Some(0.0)),
        5 => (-1_000.0f64..1_000.0).prop_map(Some),
    ]
}

fn dataset() -> impl Strategy<Value = ChartDataset> {
    (0usize..6, 0usize..12).prop_flat_map(|(series_count, category_count)| {
        proptest::collection::vec(
            proptest::collection::vec(cell(), category_count),
            series_count,
        )
        .prop_map(move |rows| {
            let series = rows
                .into_iter()
                .enumerate()
                .map(|(index, row)| ChartSeries {
                    name: Some(format!("s{index}")),
                    data: row.into_iter().map(SeriesPoint::new).collect(),
                })
                .collect();
            ChartDataset::from_labels((0..category_count).map(|c| format!("c{c}")), series)
        })
    })
}

fn palette_for(dataset: &ChartDataset) -> PaletteColors {
    PaletteColors::new((0..dataset.series.len()).map(|i| format!("color-{i}")))
}

proptest! {
    #[test]
    fn hide_then_show_restores_original(original in dataset()) {
        let palette = palette_for(&original);
        let hidden = ChartSnapshot::new(original.clone(), palette.clone(), true).expect("hide");
        let shown = hidden.with_hide_empty(false).expect("show");

        prop_assert_eq!(shown.displayed(), &original);
        prop_assert_eq!(shown.displayed_palette(), &palette);
    }

    #[test]
    fn suppressed_output_has_no_empty_rows_or_columns(original in dataset()) {
        let suppression = suppress_empty(&original).expect("suppression");
        let result = &suppression.dataset;

        if suppression.placeholder {
            prop_assert!(result.is_placeholder());
            prop_assert!(original.series.iter().all(|s| !s.has_nonzero_value()));
        } else {
            result.validate().expect("aligned");
            for series in &result.series {
                prop_assert!(series.has_nonzero_value());
            }
            for index in 0..result.categories().len() {
                prop_assert!(result.series.iter().any(|s| s.data[index].value.is_nonzero()));
            }
        }
        prop_assert_eq!(
            suppression.removed_series.len()
                + usize::from(!suppression.placeholder) * result.series.len(),
            original.series.len()
        );
    }

    #[test]
    fn palette_stays_aligned_with_surviving_series(original in dataset()) {
        let palette = palette_for(&original);
        let suppression = suppress_empty(&original).expect("suppression");
        let pruned = suppression.prune_palette(&palette);

        if !suppression.placeholder {
            prop_assert_eq!(pruned.len(), suppression.dataset.series.len());
            for (series, color) in suppression.dataset.series.iter().zip(pruned.as_slice()) {
                let name = series.name.as_deref().expect("named");
                prop_assert_eq!(&format!("color-{}", &name[1..]), color);
            }
        } else {
            prop_assert!(pruned.is_empty());
        }
    }

    #[test]
    fn suppression_is_idempotent(original in dataset()) {
        let once = suppress_empty(&original).expect("first pass");
        prop_assume!(!once.placeholder);
        let twice = suppress_empty(&once.dataset).expect("second pass");

        prop_assert_eq!(&twice.dataset, &once.dataset);
        prop_assert!(twice.removed_series.is_empty());
    }
}
