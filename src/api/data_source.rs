use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{ChartDataset, FilterFacets};
use crate::error::{DrillDownError, DrillDownResult};

use super::Pagination;

/// Why a chart refresh was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    Refresh,
    ChangePage,
}

/// Parameters of one chart data fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: RequestKind,
    pub view: String,
    pub axis: Option<String>,
    pub filter: FilterFacets,
    pub user_pagination: Pagination,
    /// Monotonic per-view sequence, for tracing only.
    #[serde(default)]
    pub sequence: u64,
}

/// Payload returned for a [`ChartRequest`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartResponse {
    #[serde(default)]
    pub chart_data: Option<ChartDataset>,
    #[serde(default)]
    pub users: Option<Vec<Value>>,
    #[serde(default)]
    pub users_count: Option<u64>,
}

impl ChartResponse {
    #[must_use]
    pub fn with_chart_data(chart_data: ChartDataset) -> Self {
        Self {
            chart_data: Some(chart_data),
            ..Self::default()
        }
    }

    pub fn from_json_str(input: &str) -> DrillDownResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            DrillDownError::DataSource(format!("failed to parse chart response: {e}"))
        })
    }
}

/// Chart payload embedded in a [`ChartDefinition`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DefinitionChartData {
    #[serde(default)]
    pub available_chart_view: Vec<String>,
    #[serde(default)]
    pub available_vertical_axis_types: Vec<String>,
    #[serde(default)]
    pub available_filters: IndexMap<String, Vec<String>>,
    #[serde(default)]
    pub default_chart_view: Option<String>,
    #[serde(default)]
    pub users: Vec<Value>,
    #[serde(default)]
    pub users_count: u64,
    #[serde(default)]
    pub users_filter_data: Option<Value>,
}

/// Chart metadata loaded once when a drill-down view is opened.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartDefinition {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub chart_view: Option<String>,
    #[serde(default)]
    pub vertical_axis_type: Option<String>,
    /// Saved facet selection, as a JSON-encoded string.
    #[serde(default)]
    pub filters: Option<String>,
    #[serde(default)]
    pub from_dashboard: bool,
    #[serde(default)]
    pub hide_empty: Option<bool>,
    pub chart_data: DefinitionChartData,
}

/// Facet name to the saved per-value selection.
pub type SavedSelection = IndexMap<String, IndexMap<String, bool>>;

#[derive(Debug, Deserialize)]
struct SavedFacet {
    #[serde(default)]
    values: IndexMap<String, bool>,
}

impl ChartDefinition {
    pub fn from_json_str(input: &str) -> DrillDownResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            DrillDownError::DataSource(format!("failed to parse chart definition: {e}"))
        })
    }

    /// Decodes the saved facet selection, if any.
    pub fn saved_selection(&self) -> DrillDownResult<Option<SavedSelection>> {
        let Some(raw) = self.filters.as_deref().filter(|raw| !raw.trim().is_empty()) else {
            return Ok(None);
        };
        let saved: IndexMap<String, SavedFacet> = serde_json::from_str(raw).map_err(|e| {
            DrillDownError::InvalidData(format!("failed to parse saved filters: {e}"))
        })?;
        Ok(Some(
            saved
                .into_iter()
                .map(|(name, facet)| (name, facet.values))
                .collect(),
        ))
    }
}

/// Request/response boundary to the chart backend.
///
/// Format and error semantics belong to the implementor; the drill-down view
/// never retries.
pub trait ChartDataSource {
    fn load_chart(
        &mut self,
        chart_id: u64,
        dashboard_chart_id: Option<u64>,
    ) -> DrillDownResult<ChartDefinition>;

    fn fetch(&mut self, request: &ChartRequest) -> DrillDownResult<ChartResponse>;
}
