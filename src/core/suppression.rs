use tracing::debug;

use crate::core::{ChartDataset, ChartSeries, PaletteColors};
use crate::error::DrillDownResult;

/// Result of hiding empty categories and series.
#[derive(Debug, Clone, PartialEq)]
pub struct Suppression {
    pub dataset: ChartDataset,
    /// Indices of removed series in the unsuppressed series order, ascending.
    pub removed_series: Vec<usize>,
    /// True when every series was removed and the placeholder was substituted.
    pub placeholder: bool,
}

impl Suppression {
    /// Palette re-aligned to the surviving series.
    #[must_use]
    pub fn prune_palette(&self, palette: &PaletteColors) -> PaletteColors {
        palette.pruned(&self.removed_series)
    }
}

/// Drops every category with no nonzero value in any series, then every
/// series left with only zero or empty values.
///
/// Always computed from the unsuppressed snapshot so repeated toggles never
/// compound. An empty result is replaced by [`ChartSeries::placeholder`].
pub fn suppress_empty(original: &ChartDataset) -> DrillDownResult<Suppression> {
    original.validate()?;

    let keep: Vec<bool> = (0..original.categories().len())
        .map(|index| {
            original
                .series
                .iter()
                .any(|series| series.data[index].value.is_nonzero())
        })
        .collect();

    let mut dataset = original.clone();
    dataset.retain_indices(&keep);

    let mut removed_series = Vec::new();
    let mut index = 0;
    dataset.series.retain(|series| {
        let kept = series.has_nonzero_value();
        if !kept {
            removed_series.push(index);
        }
        index += 1;
        kept
    });

    let placeholder = dataset.series.is_empty();
    if placeholder {
        dataset.series.push(ChartSeries::placeholder());
    }

    debug!(
        categories_before = keep.len(),
        categories_after = dataset.categories().len(),
        removed_series = removed_series.len(),
        placeholder,
        "suppressed empty chart values"
    );

    Ok(Suppression {
        dataset,
        removed_series,
        placeholder,
    })
}
