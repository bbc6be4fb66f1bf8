use crate::core::{ChartDataset, ChartSeries};

const CUSTOM_PREFIX: &str = "custom";

/// Keeps only the series whose name is in `allowed`, preserving order.
/// Unnamed series never match.
#[must_use]
pub fn restrict_series<S: AsRef<str>>(dataset: &ChartDataset, allowed: &[S]) -> ChartDataset {
    let series: Vec<ChartSeries> = dataset
        .series
        .iter()
        .filter(|series| {
            series
                .name
                .as_deref()
                .is_some_and(|name| allowed.iter().any(|a| a.as_ref() == name))
        })
        .cloned()
        .collect();

    ChartDataset {
        categories: dataset.categories.clone(),
        series,
    }
}

/// Strips a leading `custom` marker (any case) from every series name.
pub fn strip_custom_prefixes(dataset: &mut ChartDataset) {
    for series in &mut dataset.series {
        if let Some(name) = series.name.as_mut() {
            if name
                .get(..CUSTOM_PREFIX.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(CUSTOM_PREFIX))
            {
                name.replace_range(..CUSTOM_PREFIX.len(), "");
            }
        }
    }
}
