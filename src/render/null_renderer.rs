use crate::error::DrillDownResult;
use crate::render::{ChartRenderer, RenderedChart};

/// No-op renderer used by tests and headless usage.
///
/// It still validates the payload and keeps the last one so tests can assert
/// on exactly what a real widget would have received.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last: Option<RenderedChart>,
}

impl ChartRenderer for NullRenderer {
    fn render(&mut self, chart: &RenderedChart) -> DrillDownResult<()> {
        chart.validate()?;
        self.render_count += 1;
        self.last = Some(chart.clone());
        Ok(())
    }
}
