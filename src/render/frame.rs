use serde::{Deserialize, Serialize};

use crate::core::{ChartDataset, PaletteColors};
use crate::error::{DrillDownError, DrillDownResult};

/// Display type the drill-down widget renders with.
pub const DEFAULT_DISPLAY_TYPE: &str = "mscombi2d";

/// Backend-agnostic payload for one chart draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedChart {
    pub title: String,
    pub display_type: String,
    #[serde(flatten)]
    pub dataset: ChartDataset,
    #[serde(rename = "paletteColors")]
    pub palette: PaletteColors,
}

impl RenderedChart {
    #[must_use]
    pub fn new(title: impl Into<String>, dataset: ChartDataset, palette: PaletteColors) -> Self {
        Self {
            title: title.into(),
            display_type: DEFAULT_DISPLAY_TYPE.to_owned(),
            dataset,
            palette,
        }
    }

    /// The empty-chart placeholder is exempt from the category-alignment check.
    pub fn validate(&self) -> DrillDownResult<()> {
        if self.dataset.is_placeholder() {
            return Ok(());
        }
        self.dataset.validate()
    }

    pub fn to_json_pretty(&self) -> DrillDownResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            DrillDownError::Render(format!("failed to serialize chart payload: {e}"))
        })
    }
}
