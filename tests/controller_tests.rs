use std::collections::VecDeque;

use chart_drilldown::api::{
    ChartDataSource, ChartDefinition, ChartRequest, ChartResponse, DefinitionChartData,
    DrillDownConfig, DrillDownController, DrillDownPresets, LoadState, Pagination, RequestKind,
};
use chart_drilldown::core::{ChartDataset, ChartSeries, PaletteColors, TranslationTable};
use chart_drilldown::error::{DrillDownError, DrillDownResult};
use chart_drilldown::render::NullRenderer;
use indexmap::IndexMap;

#[derive(Default)]
struct ScriptedSource {
    definition: Option<ChartDefinition>,
    responses: VecDeque<DrillDownResult<ChartResponse>>,
    requests: Vec<ChartRequest>,
}

impl ScriptedSource {
    fn new(responses: Vec<DrillDownResult<ChartResponse>>) -> Self {
        let mut available_filters = IndexMap::new();
        available_filters.insert(
            "gender".to_owned(),
            vec!["Male".to_owned(), "Female".to_owned()],
        );
        Self {
            definition: Some(ChartDefinition {
                id: 7,
                title: "Attrition".to_owned(),
                chart_data: DefinitionChartData {
                    available_chart_view: vec!["gender".to_owned()],
                    available_vertical_axis_types: vec!["count".to_owned()],
                    available_filters,
                    ..DefinitionChartData::default()
                },
                ..ChartDefinition::default()
            }),
            responses: responses.into(),
            requests: Vec::new(),
        }
    }
}

impl ChartDataSource for ScriptedSource {
    fn load_chart(
        &mut self,
        chart_id: u64,
        _dashboard_chart_id: Option<u64>,
    ) -> DrillDownResult<ChartDefinition> {
        self.definition
            .clone()
            .filter(|definition| definition.id == chart_id)
            .ok_or_else(|| DrillDownError::DataSource(format!("chart {chart_id} not found")))
    }

    fn fetch(&mut self, request: &ChartRequest) -> DrillDownResult<ChartResponse> {
        self.requests.push(request.clone());
        self.responses
            .pop_front()
            .unwrap_or_else(|| Err(DrillDownError::DataSource("no scripted response".to_owned())))
    }
}

fn chart(name: &str, values: [f64; 2]) -> DrillDownResult<ChartResponse> {
    Ok(ChartResponse::with_chart_data(ChartDataset::from_labels(
        ["Male", "Female"],
        vec![ChartSeries::new(name, values)],
    )))
}

fn controller(
    responses: Vec<DrillDownResult<ChartResponse>>,
) -> DrillDownController<ScriptedSource, TranslationTable, NullRenderer> {
    DrillDownController::new(
        ScriptedSource::new(responses),
        TranslationTable::new().with("headcount", "Plantilla"),
        NullRenderer::default(),
        DrillDownConfig::default().with_palette(PaletteColors::new(["c0", "c1"])),
    )
    .expect("controller")
}

#[test]
fn activation_fetches_and_renders_first_chart() {
    let mut controller = controller(vec![chart("Headcount", [3.0, 4.0])]);
    controller
        .activate(7, None, &DrillDownPresets::default())
        .expect("activate");

    let rendered = controller.renderer().last.as_ref().expect("rendered chart");
    assert_eq!(controller.renderer().render_count, 1);
    assert_eq!(rendered.title, "Attrition");
    assert_eq!(rendered.dataset.series_names(), vec![Some("Plantilla")]);
    assert_eq!(
        controller.view().expect("view").state().load,
        LoadState::Rendered
    );

    let request = &controller.source().requests[0];
    assert_eq!(request.id, 7);
    assert_eq!(request.view, "gender");
    assert_eq!(request.axis.as_deref(), Some("count"));
}

#[test]
fn unknown_chart_fails_activation() {
    let mut controller = controller(Vec::new());
    let err = controller
        .activate(99, None, &DrillDownPresets::default())
        .expect_err("unknown chart");
    assert!(matches!(err, DrillDownError::DataSource(_)));
    assert!(controller.view().is_none());
}

#[test]
fn dispatch_before_activation_is_rejected() {
    let mut controller = controller(Vec::new());
    assert!(matches!(
        controller.set_hide_empty(false),
        Err(DrillDownError::InvalidData(_))
    ));
}

#[test]
fn fetch_failure_is_reported_without_retry() {
    let mut controller = controller(vec![
        chart("A", [1.0, 1.0]),
        Err(DrillDownError::DataSource("502".to_owned())),
    ]);
    controller
        .activate(7, None, &DrillDownPresets::default())
        .expect("activate");

    let err = controller
        .toggle_facet_value("gender", "Male", false)
        .expect_err("fetch fails");
    assert_eq!(err, DrillDownError::DataSource("502".to_owned()));
    assert_eq!(controller.source().requests.len(), 2);
    assert_eq!(controller.renderer().render_count, 1);
    assert_eq!(
        controller.view().expect("view").state().load,
        LoadState::Failed
    );
}

#[test]
fn each_completed_fetch_replaces_the_chart() {
    let mut controller = controller(vec![
        chart("First", [1.0, 2.0]),
        chart("Second", [5.0, 0.0]),
        chart("Third", [0.0, 9.0]),
    ]);
    controller
        .activate(7, None, &DrillDownPresets::default())
        .expect("activate");
    controller.set_facet_all("gender", false).expect("clear");
    controller.set_facet_all("gender", true).expect("select");

    let rendered = controller.renderer().last.as_ref().expect("rendered chart");
    assert_eq!(controller.renderer().render_count, 3);
    assert_eq!(rendered.dataset.series_names(), vec![Some("Third")]);
    assert_eq!(rendered.dataset.category_labels(), vec!["Female"]);

    let sequences: Vec<u64> = controller
        .source()
        .requests
        .iter()
        .map(|r| r.sequence)
        .collect();
    assert_eq!(sequences, vec![1, 2, 3]);
}

#[test]
fn page_change_is_forwarded_to_the_data_source() {
    let mut controller = controller(vec![chart("A", [1.0, 2.0]), chart("A", [1.0, 2.0])]);
    controller
        .activate(7, None, &DrillDownPresets::default())
        .expect("activate");
    controller
        .change_page(Pagination {
            page_number: 4,
            page_size: Some(25),
            total_items: 100,
        })
        .expect("page");

    let request = controller.source().requests.last().expect("request");
    assert_eq!(request.kind, RequestKind::ChangePage);
    assert_eq!(request.user_pagination.page_number, 4);
    assert_eq!(request.user_pagination.page_size, Some(25));
}

#[test]
fn hide_empty_toggle_rerenders_without_fetching() {
    let mut controller = controller(vec![chart("A", [0.0, 2.0])]);
    controller
        .activate(7, None, &DrillDownPresets::default())
        .expect("activate");
    assert_eq!(
        controller
            .renderer()
            .last
            .as_ref()
            .expect("chart")
            .dataset
            .category_labels(),
        vec!["Female"]
    );

    controller.set_hide_empty(false).expect("show empty");
    assert_eq!(controller.source().requests.len(), 1);
    assert_eq!(controller.renderer().render_count, 2);
    assert_eq!(
        controller
            .renderer()
            .last
            .as_ref()
            .expect("chart")
            .dataset
            .category_labels(),
        vec!["Male", "Female"]
    );
    assert!(!controller.dashboard_options(None).expect("options").hide_empty);
}
