use tracing::{debug, warn};

use crate::core::{
    ChartDataset, PaletteColors, TranslationLookup, isolate_highest, restrict_series,
    strip_custom_prefixes, suppress_empty, translate_legends_or_keep,
};
use crate::error::DrillDownResult;

use super::PendingCommand;

/// Unsuppressed chart data next to what is actually displayed.
///
/// The original is never modified after construction; every suppression
/// toggle is recomputed from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSnapshot {
    original: ChartDataset,
    original_palette: PaletteColors,
    displayed: ChartDataset,
    displayed_palette: PaletteColors,
}

impl ChartSnapshot {
    pub fn new(
        original: ChartDataset,
        palette: PaletteColors,
        hide_empty: bool,
    ) -> DrillDownResult<Self> {
        original.validate()?;
        let snapshot = Self {
            displayed: original.clone(),
            displayed_palette: palette.clone(),
            original,
            original_palette: palette,
        };
        snapshot.with_hide_empty(hide_empty)
    }

    /// Recomputes the displayed data from the original snapshot.
    pub fn with_hide_empty(&self, hide_empty: bool) -> DrillDownResult<Self> {
        if !hide_empty {
            return Ok(Self {
                original: self.original.clone(),
                original_palette: self.original_palette.clone(),
                displayed: self.original.clone(),
                displayed_palette: self.original_palette.clone(),
            });
        }

        let suppression = suppress_empty(&self.original)?;
        Ok(Self {
            original: self.original.clone(),
            original_palette: self.original_palette.clone(),
            displayed_palette: suppression.prune_palette(&self.original_palette),
            displayed: suppression.dataset,
        })
    }

    #[must_use]
    pub fn original(&self) -> &ChartDataset {
        &self.original
    }

    #[must_use]
    pub fn original_palette(&self) -> &PaletteColors {
        &self.original_palette
    }

    #[must_use]
    pub fn displayed(&self) -> &ChartDataset {
        &self.displayed
    }

    #[must_use]
    pub fn displayed_palette(&self) -> &PaletteColors {
        &self.displayed_palette
    }
}

/// Facet selection forced by a highest-value isolation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighestSelection {
    pub facet: String,
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResponseOutcome {
    pub snapshot: Option<ChartSnapshot>,
    pub highest: Option<HighestSelection>,
    /// Whether the pending one-shot commands were applied and must be dropped.
    pub commands_consumed: bool,
}

/// Turns freshly fetched chart data into a new snapshot.
///
/// Order: strip `custom` name prefixes, run pending one-shot commands,
/// translate legends, snapshot with the base palette, then suppress empty
/// values if requested. Without new chart data the previous original is
/// re-displayed with the base palette and commands stay pending.
pub fn apply_chart_response(
    previous: Option<&ChartSnapshot>,
    chart_data: Option<&ChartDataset>,
    commands: &[PendingCommand],
    palette: &PaletteColors,
    lookup: &dyn TranslationLookup,
    blank_key: &str,
    hide_empty: bool,
) -> DrillDownResult<ResponseOutcome> {
    let Some(incoming) = chart_data else {
        let snapshot = previous
            .map(|prev| ChartSnapshot::new(prev.original.clone(), palette.clone(), hide_empty))
            .transpose()?;
        return Ok(ResponseOutcome {
            snapshot,
            highest: None,
            commands_consumed: false,
        });
    };

    incoming.validate()?;
    let mut dataset = incoming.clone();
    strip_custom_prefixes(&mut dataset);

    let mut highest = None;
    for command in commands {
        match command {
            PendingCommand::IsolateHighest { facet } => match isolate_highest(&dataset)? {
                Some(isolation) => {
                    debug!(
                        facet = facet.as_str(),
                        kept = isolation.kept_indices.len(),
                        "applied highest-value isolation"
                    );
                    dataset = isolation.dataset;
                    highest = Some(HighestSelection {
                        facet: facet.clone(),
                        labels: isolation.labels,
                    });
                }
                None => warn!(
                    facet = facet.as_str(),
                    "highest-value isolation skipped on empty dataset"
                ),
            },
            PendingCommand::RestrictSeries(allowed) => {
                dataset = restrict_series(&dataset, allowed.as_slice());
                debug!(
                    allowed = allowed.len(),
                    kept = dataset.series.len(),
                    "applied series allow-list"
                );
            }
        }
    }

    translate_legends_or_keep(&mut dataset.series, lookup, blank_key);

    Ok(ResponseOutcome {
        snapshot: Some(ChartSnapshot::new(dataset, palette.clone(), hide_empty)?),
        highest,
        commands_consumed: true,
    })
}
