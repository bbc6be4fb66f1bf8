mod chart_snapshot;
mod controller;
mod dashboard;
mod data_source;
mod drilldown_view;
mod events;
mod view_config;
mod view_state;

pub use chart_snapshot::{ChartSnapshot, HighestSelection, ResponseOutcome, apply_chart_response};
pub use controller::DrillDownController;
pub use dashboard::DashboardChartOptions;
pub use data_source::{
    ChartDataSource, ChartDefinition, ChartRequest, ChartResponse, DefinitionChartData,
    RequestKind, SavedSelection,
};
pub use drilldown_view::DrillDownView;
pub use events::{DrillDownPresets, Effect, PendingCommand, ViewEvent};
pub use view_config::DrillDownConfig;
pub use view_state::{LoadState, Pagination, ViewState};
