use tracing::{debug, warn};

use crate::core::TranslationLookup;
use crate::error::{DrillDownError, DrillDownResult};
use crate::render::ChartRenderer;

use super::{
    ChartDataSource, DashboardChartOptions, DrillDownConfig, DrillDownPresets, DrillDownView,
    Effect, Pagination, ViewEvent,
};

/// Host-side driver around [`DrillDownView`].
///
/// Owns the collaborators, runs the effects returned by the pure view and
/// forwards the displayed chart to the renderer. Fetches are synchronous and
/// applied in the order they complete.
pub struct DrillDownController<S, T, R>
where
    S: ChartDataSource,
    T: TranslationLookup,
    R: ChartRenderer,
{
    source: S,
    lookup: T,
    renderer: R,
    config: DrillDownConfig,
    view: Option<DrillDownView>,
}

impl<S, T, R> DrillDownController<S, T, R>
where
    S: ChartDataSource,
    T: TranslationLookup,
    R: ChartRenderer,
{
    pub fn new(
        source: S,
        lookup: T,
        renderer: R,
        config: DrillDownConfig,
    ) -> DrillDownResult<Self> {
        config.validate()?;
        Ok(Self {
            source,
            lookup,
            renderer,
            config,
            view: None,
        })
    }

    /// Loads the chart definition, builds the view and fetches the first chart.
    pub fn activate(
        &mut self,
        chart_id: u64,
        dashboard_chart_id: Option<u64>,
        presets: &DrillDownPresets,
    ) -> DrillDownResult<()> {
        let definition = self
            .source
            .load_chart(chart_id, dashboard_chart_id)
            .inspect_err(|err| warn!(error = %err, chart_id, "failed to load drill-down chart"))?;
        self.view = Some(DrillDownView::activate(&definition, presets, &self.config)?);
        self.dispatch(ViewEvent::Refresh)
    }

    /// Applies an event and runs every effect it triggers.
    pub fn dispatch(&mut self, event: ViewEvent) -> DrillDownResult<()> {
        let mut next_event = Some(event);
        while let Some(event) = next_event.take() {
            let view = self.view.as_ref().ok_or_else(|| {
                DrillDownError::InvalidData("drill-down view is not activated".to_owned())
            })?;
            let (next, effect) = view.apply(event, &self.lookup)?;
            self.view = Some(next);
            next_event = self.run_effect(effect)?;
        }
        Ok(())
    }

    fn run_effect(&mut self, effect: Effect) -> DrillDownResult<Option<ViewEvent>> {
        match effect {
            Effect::None => Ok(None),
            Effect::Fetch(request) => match self.source.fetch(&request) {
                Ok(response) => {
                    debug!(sequence = request.sequence, "chart data received");
                    Ok(Some(ViewEvent::ChartLoaded(response)))
                }
                Err(err) => {
                    warn!(error = %err, sequence = request.sequence, "chart data fetch failed");
                    if let Some(view) = self.view.as_ref() {
                        let (failed, _) =
                            view.apply(ViewEvent::FetchFailed(err.to_string()), &self.lookup)?;
                        self.view = Some(failed);
                    }
                    Err(err)
                }
            },
            Effect::Render => {
                if let Some(chart) = self.view.as_ref().and_then(DrillDownView::rendered_chart) {
                    self.renderer.render(&chart)?;
                }
                Ok(None)
            }
            Effect::ReportError(message) => Err(DrillDownError::DataSource(message)),
        }
    }

    pub fn toggle_facet_value(
        &mut self,
        facet: &str,
        value: &str,
        selected: bool,
    ) -> DrillDownResult<()> {
        self.dispatch(ViewEvent::ToggleFacetValue {
            facet: facet.to_owned(),
            value: value.to_owned(),
            selected,
        })
    }

    pub fn set_facet_all(&mut self, facet: &str, selected: bool) -> DrillDownResult<()> {
        self.dispatch(ViewEvent::SetFacetAll {
            facet: facet.to_owned(),
            selected,
        })
    }

    pub fn change_page(&mut self, pagination: Pagination) -> DrillDownResult<()> {
        self.dispatch(ViewEvent::ChangePage(pagination))
    }

    pub fn change_view(&mut self, view: &str) -> DrillDownResult<()> {
        self.dispatch(ViewEvent::ChangeView(view.to_owned()))
    }

    pub fn change_axis(&mut self, axis: &str) -> DrillDownResult<()> {
        self.dispatch(ViewEvent::ChangeAxis(axis.to_owned()))
    }

    pub fn set_hide_empty(&mut self, hide_empty: bool) -> DrillDownResult<()> {
        self.dispatch(ViewEvent::SetHideEmpty(hide_empty))
    }

    #[must_use]
    pub fn view(&self) -> Option<&DrillDownView> {
        self.view.as_ref()
    }

    #[must_use]
    pub fn dashboard_options(&self, dashboard_id: Option<u64>) -> Option<DashboardChartOptions> {
        self.view
            .as_ref()
            .map(|view| view.dashboard_options(dashboard_id))
    }

    #[must_use]
    pub fn config(&self) -> &DrillDownConfig {
        &self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    #[must_use]
    pub fn lookup(&self) -> &T {
        &self.lookup
    }
}
