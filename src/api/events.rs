use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{ChartRequest, ChartResponse, Pagination};

/// One-shot commands applied to the first response that carries chart data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingCommand {
    /// Collapse onto the highest value and select it in `facet`.
    IsolateHighest { facet: String },
    /// Keep only the named series.
    RestrictSeries(Vec<String>),
}

/// Launch parameters handed over by the page that opened the drill-down.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DrillDownPresets {
    /// Facet name to the values that should be the only ones selected.
    #[serde(default)]
    pub general_filters: IndexMap<String, Vec<String>>,
    #[serde(default)]
    pub chart_filters: Vec<String>,
    #[serde(default)]
    pub chart_view: Option<String>,
    #[serde(default)]
    pub vertical_axis: Option<String>,
    #[serde(default)]
    pub highest: bool,
}

/// User or network input that drives a drill-down view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Refresh,
    ToggleFacetValue {
        facet: String,
        value: String,
        selected: bool,
    },
    SetFacetAll {
        facet: String,
        selected: bool,
    },
    ExpandFacet {
        facet: String,
        expanded: bool,
    },
    ChangePage(Pagination),
    ChangeView(String),
    ChangeAxis(String),
    SetHideEmpty(bool),
    ChartLoaded(ChartResponse),
    FetchFailed(String),
}

/// Work the host must perform after an event was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Fetch(ChartRequest),
    Render,
    ReportError(String),
}
