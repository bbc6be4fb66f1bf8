mod frame;
mod null_renderer;

pub use frame::{DEFAULT_DISPLAY_TYPE, RenderedChart};
pub use null_renderer::NullRenderer;

use crate::error::DrillDownResult;

/// Contract implemented by any charting widget.
///
/// Renderers receive the fully filtered dataset and its re-aligned palette,
/// so drawing code stays isolated from filter and view logic.
pub trait ChartRenderer {
    fn render(&mut self, chart: &RenderedChart) -> DrillDownResult<()>;
}
