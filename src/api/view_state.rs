use serde::{Deserialize, Serialize};

use crate::core::FilterFacets;

/// Cursor into the user list shown under the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default = "default_page_number")]
    pub page_number: u32,
    #[serde(default)]
    pub page_size: Option<u32>,
    #[serde(default, rename = "totalItems")]
    pub total_items: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_number: default_page_number(),
            page_size: None,
            total_items: 0,
        }
    }
}

impl Pagination {
    #[must_use]
    pub fn page(page_number: u32) -> Self {
        Self {
            page_number,
            ..Self::default()
        }
    }

    pub fn rewind(&mut self) {
        self.page_number = default_page_number();
    }
}

fn default_page_number() -> u32 {
    1
}

/// Chart view lifecycle: `Idle -> Loading -> Rendered`.
///
/// `Loading` only drives busy indicators; a second request while loading is
/// allowed and whichever response arrives last wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Rendered,
    Failed,
}

/// Filter/view selection of one activated drill-down chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub chart_id: u64,
    pub view: String,
    pub axis: Option<String>,
    pub facets: FilterFacets,
    pub pagination: Pagination,
    pub hide_empty: bool,
    pub load: LoadState,
}

impl ViewState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }
}
