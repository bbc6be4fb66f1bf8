use ordered_float::OrderedFloat;
use tracing::trace;

use crate::core::ChartDataset;
use crate::error::DrillDownResult;

/// Dataset collapsed onto the maximum of its first series.
#[derive(Debug, Clone, PartialEq)]
pub struct HighestIsolation {
    pub dataset: ChartDataset,
    /// Original category indices that were kept, ascending.
    pub kept_indices: Vec<usize>,
    /// Labels of the kept categories, in original order.
    pub labels: Vec<String>,
}

/// Collapses the dataset onto every category where the first series reaches
/// its maximum. Tied maxima are all kept, in original order; empty cells
/// compare as zero.
///
/// Returns `Ok(None)` when there is no first series or it has no values.
pub fn isolate_highest(dataset: &ChartDataset) -> DrillDownResult<Option<HighestIsolation>> {
    dataset.validate()?;

    let Some(first) = dataset.series.first() else {
        return Ok(None);
    };
    let Some(max) = first
        .data
        .iter()
        .map(|point| OrderedFloat(point.value.as_f64_or_zero()))
        .max()
    else {
        return Ok(None);
    };

    let keep: Vec<bool> = first
        .data
        .iter()
        .map(|point| OrderedFloat(point.value.as_f64_or_zero()) == max)
        .collect();
    let kept_indices: Vec<usize> = keep
        .iter()
        .enumerate()
        .filter_map(|(index, kept)| kept.then_some(index))
        .collect();

    let mut isolated = dataset.clone();
    isolated.retain_indices(&keep);
    let labels = isolated
        .categories()
        .iter()
        .map(|category| category.label.clone())
        .collect();

    trace!(max = max.0, kept = kept_indices.len(), "isolated highest value");
    Ok(Some(HighestIsolation {
        dataset: isolated,
        kept_indices,
        labels,
    }))
}
