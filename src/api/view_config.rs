use serde::{Deserialize, Serialize};

use crate::core::{BLANK_LABEL_KEY, PaletteColors};
use crate::error::{DrillDownError, DrillDownResult};
use crate::render::DEFAULT_DISPLAY_TYPE;

/// Host-level drill-down configuration.
///
/// This type is serializable so dashboards can ship their defaults as JSON
/// instead of hard-coding them in the hosting UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillDownConfig {
    /// Selected facet values shown before the "show more" link kicks in.
    #[serde(default = "default_max_filters_count")]
    pub max_filters_count: usize,
    /// View used when neither the saved nor the default chart view is available.
    #[serde(default = "default_view")]
    pub default_view: String,
    /// Axis used when the chart announces no vertical axis at all.
    #[serde(default)]
    pub default_axis: Option<String>,
    #[serde(default = "default_hide_empty")]
    pub hide_empty_by_default: bool,
    #[serde(default = "default_palette")]
    pub palette: PaletteColors,
    #[serde(default = "default_blank_label_key")]
    pub blank_label_key: String,
    #[serde(default = "default_display_type")]
    pub display_type: String,
}

impl Default for DrillDownConfig {
    fn default() -> Self {
        Self {
            max_filters_count: default_max_filters_count(),
            default_view: default_view(),
            default_axis: None,
            hide_empty_by_default: default_hide_empty(),
            palette: default_palette(),
            blank_label_key: default_blank_label_key(),
            display_type: default_display_type(),
        }
    }
}

impl DrillDownConfig {
    /// Sets the color palette series are painted with.
    #[must_use]
    pub fn with_palette(mut self, palette: PaletteColors) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_default_view(mut self, view: impl Into<String>) -> Self {
        self.default_view = view.into();
        self
    }

    #[must_use]
    pub fn with_hide_empty_by_default(mut self, hide_empty: bool) -> Self {
        self.hide_empty_by_default = hide_empty;
        self
    }

    #[must_use]
    pub fn with_max_filters_count(mut self, max_filters_count: usize) -> Self {
        self.max_filters_count = max_filters_count;
        self
    }

    pub fn validate(&self) -> DrillDownResult<()> {
        if self.max_filters_count == 0 {
            return Err(DrillDownError::InvalidConfig(
                "max_filters_count must be > 0".to_owned(),
            ));
        }
        if self.default_view.trim().is_empty() {
            return Err(DrillDownError::InvalidConfig(
                "default_view must not be empty".to_owned(),
            ));
        }
        if self.palette.is_empty() {
            return Err(DrillDownError::InvalidConfig(
                "palette must contain at least one color".to_owned(),
            ));
        }
        if self.blank_label_key.is_empty() {
            return Err(DrillDownError::InvalidConfig(
                "blank_label_key must not be empty".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> DrillDownResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DrillDownError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> DrillDownResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| DrillDownError::InvalidConfig(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_max_filters_count() -> usize {
    15
}

fn default_view() -> String {
    "gender".to_owned()
}

fn default_hide_empty() -> bool {
    true
}

fn default_palette() -> PaletteColors {
    PaletteColors::new([
        "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
        "#bcbd22", "#17becf",
    ])
}

fn default_blank_label_key() -> String {
    BLANK_LABEL_KEY.to_owned()
}

fn default_display_type() -> String {
    DEFAULT_DISPLAY_TYPE.to_owned()
}
