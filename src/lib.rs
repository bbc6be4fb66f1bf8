//! chart-drilldown: filter and view aggregation for drill-down analytics charts.
//!
//! The crate turns raw chart payloads plus a user's facet selection into the
//! dataset a charting widget should draw. The core is a set of pure
//! transformations; data fetching, translation and drawing stay behind traits.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{DrillDownConfig, DrillDownController, DrillDownView};
pub use error::{DrillDownError, DrillDownResult};
