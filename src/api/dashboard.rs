use serde::{Deserialize, Serialize};

use crate::core::FilterFacets;
use crate::error::{DrillDownError, DrillDownResult};

/// Selection persisted when a drill-down chart is pinned to a dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardChartOptions {
    pub chart_id: u64,
    pub dashboard_id: Option<u64>,
    pub chart_title: String,
    pub chart_view: String,
    pub filters: FilterFacets,
    pub vertical_axis: Option<String>,
    pub hide_empty: bool,
}

impl DashboardChartOptions {
    pub fn to_json_pretty(&self) -> DrillDownResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            DrillDownError::InvalidData(format!("failed to serialize dashboard options: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> DrillDownResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            DrillDownError::InvalidData(format!("failed to parse dashboard options: {e}"))
        })
    }
}
