use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::core::{FilterFacets, PaletteColors, TranslationLookup, custom_field_names};
use crate::error::{DrillDownError, DrillDownResult};
use crate::render::RenderedChart;

use super::{
    ChartDefinition, ChartRequest, ChartResponse, ChartSnapshot, DashboardChartOptions,
    DrillDownConfig, DrillDownPresets, Effect, LoadState, Pagination, PendingCommand,
    RequestKind, ViewEvent, ViewState, apply_chart_response,
};

/// Complete state of one activated drill-down chart.
///
/// Values are immutable from the outside: [`DrillDownView::apply`] consumes an
/// event and returns the next view together with the [`Effect`] the host has
/// to run. Nothing here performs I/O.
#[derive(Debug, Clone, PartialEq)]
pub struct DrillDownView {
    state: ViewState,
    title: String,
    available_views: Vec<String>,
    available_axes: Vec<String>,
    custom_fields: Vec<String>,
    users: Vec<Value>,
    total_users: u64,
    users_filter_data: Option<Value>,
    pending: Vec<PendingCommand>,
    snapshot: Option<ChartSnapshot>,
    palette: PaletteColors,
    blank_label_key: String,
    display_type: String,
    next_sequence: u64,
}

impl DrillDownView {
    /// Builds the initial view for a freshly loaded chart definition.
    pub fn activate(
        definition: &ChartDefinition,
        presets: &DrillDownPresets,
        config: &DrillDownConfig,
    ) -> DrillDownResult<Self> {
        config.validate()?;
        let chart_data = &definition.chart_data;

        let saved = match definition.saved_selection() {
            Ok(saved) => saved,
            Err(err) => {
                warn!(
                    error = %err,
                    chart_id = definition.id,
                    "ignoring unreadable saved filters"
                );
                None
            }
        };
        let mut facets =
            FilterFacets::from_available(&chart_data.available_filters, saved.as_ref());
        for (name, selected) in &presets.general_filters {
            match facets.facet_mut(name) {
                Ok(facet) => facet.select_only(selected.as_slice()),
                Err(err) => debug!(error = %err, "preset filter does not match any facet"),
            }
        }
        facets.collapse_all();

        let axis = presets
            .vertical_axis
            .clone()
            .or_else(|| definition.vertical_axis_type.clone())
            .or_else(|| chart_data.available_vertical_axis_types.get(1).cloned())
            .or_else(|| chart_data.available_vertical_axis_types.first().cloned())
            .or_else(|| config.default_axis.clone());

        let available_views = &chart_data.available_chart_view;
        let if_available =
            |view: Option<&String>| view.filter(|v| available_views.contains(v)).cloned();
        let view = presets
            .chart_view
            .clone()
            .filter(|v| !v.is_empty())
            .or_else(|| if_available(definition.chart_view.as_ref()))
            .or_else(|| if_available(chart_data.default_chart_view.as_ref()))
            .unwrap_or_else(|| config.default_view.clone());

        let hide_empty = if definition.from_dashboard {
            definition.hide_empty.unwrap_or(false)
        } else {
            config.hide_empty_by_default
        };

        let mut pending = Vec::new();
        if presets.highest {
            pending.push(PendingCommand::IsolateHighest {
                facet: view.clone(),
            });
        }
        if !presets.chart_filters.is_empty() {
            pending.push(PendingCommand::RestrictSeries(presets.chart_filters.clone()));
        }

        debug!(
            chart_id = definition.id,
            view = view.as_str(),
            axis = axis.as_deref().unwrap_or(""),
            facets = facets.len(),
            pending = pending.len(),
            hide_empty,
            "activated drill-down view"
        );

        Ok(Self {
            state: ViewState {
                chart_id: definition.id,
                view,
                axis,
                facets,
                pagination: Pagination {
                    total_items: chart_data.users_count,
                    ..Pagination::default()
                },
                hide_empty,
                load: LoadState::Idle,
            },
            title: definition.title.clone(),
            available_views: chart_data.available_chart_view.clone(),
            available_axes: chart_data.available_vertical_axis_types.clone(),
            custom_fields: custom_field_names(
                chart_data.available_filters.keys().map(String::as_str),
            ),
            users: chart_data.users.clone(),
            total_users: chart_data.users_count,
            users_filter_data: chart_data.users_filter_data.clone(),
            pending,
            snapshot: None,
            palette: config.palette.clone(),
            blank_label_key: config.blank_label_key.clone(),
            display_type: config.display_type.clone(),
            next_sequence: 0,
        })
    }

    /// Applies one event and returns the next view plus the effect to run.
    pub fn apply(
        &self,
        event: ViewEvent,
        lookup: &dyn TranslationLookup,
    ) -> DrillDownResult<(Self, Effect)> {
        let mut next = self.clone();
        let effect = match event {
            ViewEvent::Refresh => next.begin_fetch(RequestKind::Refresh),
            ViewEvent::ToggleFacetValue {
                facet,
                value,
                selected,
            } => {
                next.state.facets.facet_mut(&facet)?.set_value(&value, selected)?;
                next.state.pagination.rewind();
                next.begin_fetch(RequestKind::Refresh)
            }
            ViewEvent::SetFacetAll { facet, selected } => {
                next.state.facets.facet_mut(&facet)?.set_all(selected);
                next.state.pagination.rewind();
                next.begin_fetch(RequestKind::Refresh)
            }
            ViewEvent::ExpandFacet { facet, expanded } => {
                next.state.facets.facet_mut(&facet)?.expanded = expanded;
                Effect::None
            }
            ViewEvent::ChangePage(pagination) => {
                next.state.pagination = pagination;
                next.begin_fetch(RequestKind::ChangePage)
            }
            ViewEvent::ChangeView(view) => {
                if !self.available_views.is_empty() && !self.available_views.contains(&view) {
                    return Err(DrillDownError::InvalidData(format!(
                        "chart view `{view}` is not available"
                    )));
                }
                next.state.view = view;
                next.begin_fetch(RequestKind::Refresh)
            }
            ViewEvent::ChangeAxis(axis) => {
                if !self.available_axes.is_empty() && !self.available_axes.contains(&axis) {
                    return Err(DrillDownError::InvalidData(format!(
                        "vertical axis `{axis}` is not available"
                    )));
                }
                next.state.axis = Some(axis);
                next.begin_fetch(RequestKind::Refresh)
            }
            ViewEvent::SetHideEmpty(hide_empty) => {
                next.state.hide_empty = hide_empty;
                match &self.snapshot {
                    Some(snapshot) => {
                        next.snapshot = Some(snapshot.with_hide_empty(hide_empty)?);
                        Effect::Render
                    }
                    None => Effect::None,
                }
            }
            ViewEvent::ChartLoaded(response) => next.apply_response(response, lookup)?,
            ViewEvent::FetchFailed(message) => {
                next.state.load = LoadState::Failed;
                Effect::ReportError(message)
            }
        };
        Ok((next, effect))
    }

    fn begin_fetch(&mut self, kind: RequestKind) -> Effect {
        self.next_sequence += 1;
        self.state.load = LoadState::Loading;
        trace!(
            chart_id = self.state.chart_id,
            sequence = self.next_sequence,
            ?kind,
            "requesting chart data"
        );
        Effect::Fetch(ChartRequest {
            id: self.state.chart_id,
            kind,
            view: self.state.view.clone(),
            axis: self.state.axis.clone(),
            filter: self.state.facets.clone(),
            user_pagination: self.state.pagination,
            sequence: self.next_sequence,
        })
    }

    fn apply_response(
        &mut self,
        response: ChartResponse,
        lookup: &dyn TranslationLookup,
    ) -> DrillDownResult<Effect> {
        if let Some(users) = response.users {
            self.users = users;
        }
        if let Some(count) = response.users_count {
            self.total_users = count;
            self.state.pagination.total_items = count;
        }

        let outcome = apply_chart_response(
            self.snapshot.as_ref(),
            response.chart_data.as_ref(),
            &self.pending,
            &self.palette,
            lookup,
            &self.blank_label_key,
            self.state.hide_empty,
        )?;

        if let Some(selection) = outcome.highest {
            match self.state.facets.facet_mut(&selection.facet) {
                Ok(facet) => facet.select_only(selection.labels.as_slice()),
                Err(err) => warn!(error = %err, "highest value has no facet to select"),
            }
        }
        if outcome.commands_consumed {
            self.pending.clear();
        }
        self.snapshot = outcome.snapshot;

        // Nothing to draw until a response carries chart data.
        if self.snapshot.is_some() {
            self.state.load = LoadState::Rendered;
            Ok(Effect::Render)
        } else {
            self.state.load = LoadState::Idle;
            Ok(Effect::None)
        }
    }

    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<&ChartSnapshot> {
        self.snapshot.as_ref()
    }

    #[must_use]
    pub fn pending_commands(&self) -> &[PendingCommand] {
        &self.pending
    }

    #[must_use]
    pub fn custom_fields(&self) -> &[String] {
        &self.custom_fields
    }

    #[must_use]
    pub fn users(&self) -> &[Value] {
        &self.users
    }

    #[must_use]
    pub fn total_users(&self) -> u64 {
        self.total_users
    }

    #[must_use]
    pub fn users_filter_data(&self) -> Option<&Value> {
        self.users_filter_data.as_ref()
    }

    /// Payload for the chart widget, once data has been loaded.
    #[must_use]
    pub fn rendered_chart(&self) -> Option<RenderedChart> {
        self.snapshot.as_ref().map(|snapshot| {
            let mut chart = RenderedChart::new(
                self.title.clone(),
                snapshot.displayed().clone(),
                snapshot.displayed_palette().clone(),
            );
            chart.display_type = self.display_type.clone();
            chart
        })
    }

    /// Selection to persist when the chart is pinned to a dashboard.
    #[must_use]
    pub fn dashboard_options(&self, dashboard_id: Option<u64>) -> DashboardChartOptions {
        DashboardChartOptions {
            chart_id: self.state.chart_id,
            dashboard_id,
            chart_title: self.title.clone(),
            chart_view: self.state.view.clone(),
            filters: self.state.facets.clone(),
            vertical_axis: self.state.axis.clone(),
            hide_empty: self.state.hide_empty,
        }
    }
}
