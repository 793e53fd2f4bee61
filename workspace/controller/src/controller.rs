//! Event handling for the whole client.
//!
//! [`AppController::apply`] turns one user action or one completed request
//! into state changes plus a list of [`Command`]s. Executing commands (HTTP,
//! chart drawing, prompts) is left to the caller, which feeds completions
//! back in as events.

use crate::chart::BarChart;
use crate::pagination::{PageNumber, PerPage};
use crate::prediction::{PredictionApplied, PredictionClient, PredictionRequest, PredictionResponse};
use crate::records::{RecordsApplied, RecordsClient, RecordsRequest, RecordsResponse};
use crate::upload::UploadClient;
use crate::view::{Page, ViewRouter};
use common::{ApiError, UploadOutcome};
use tracing::{debug, trace, warn};

/// Something that happened in the UI or on the network.
///
/// `F` is the frontend's file handle type.
#[derive(Debug, Clone, PartialEq)]
pub enum Event<F> {
    /// The application was mounted.
    Started,
    /// A navigation link targeting a page section id.
    Navigate(String),
    PreviousPage,
    NextPage,
    /// Raw value of the page-size selector.
    PerPageSelected(String),
    RetryRecords,
    RecordsLoaded(RecordsResponse),
    /// Upload clicked with whatever the file input currently holds.
    UploadRequested(Option<F>),
    UploadFinished(Result<UploadOutcome, ApiError>),
    /// Predict clicked with the selected season.
    PredictRequested(String),
    PredictionLoaded(PredictionResponse),
}

/// Side effect the caller must perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Command<F> {
    FetchRecords(RecordsRequest),
    SubmitUpload(F),
    FetchPrediction(PredictionRequest),
    RenderChart(BarChart),
    /// Blocking prompt for a user input error.
    Prompt(String),
    /// Non-blocking error notification.
    ReportError(String),
}

/// All client state of one browser session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    router: ViewRouter,
    records: RecordsClient,
    upload: UploadClient,
    prediction: PredictionClient,
}

impl AppState {
    pub fn router(&self) -> &ViewRouter {
        &self.router
    }

    pub fn records(&self) -> &RecordsClient {
        &self.records
    }

    pub fn upload(&self) -> &UploadClient {
        &self.upload
    }

    pub fn prediction(&self) -> &PredictionClient {
        &self.prediction
    }

    fn apply<F>(&mut self, event: Event<F>) -> Vec<Command<F>> {
        match event {
            Event::Started => {
                self.router = ViewRouter::new();
                vec![Command::FetchRecords(self.records.load(PageNumber::FIRST))]
            }
            Event::Navigate(id) => match self.router.show_page(&id) {
                Some(Page::Records) => vec![Command::FetchRecords(self.records.refresh())],
                _ => Vec::new(),
            },
            Event::PreviousPage => self
                .records
                .previous()
                .map(Command::FetchRecords)
                .into_iter()
                .collect(),
            Event::NextPage => vec![Command::FetchRecords(self.records.next())],
            Event::PerPageSelected(value) => match value.parse::<PerPage>() {
                Ok(per_page) => vec![Command::FetchRecords(self.records.change_per_page(per_page))],
                Err(err) => {
                    warn!(error = %err, "Ignoring page size change");
                    Vec::new()
                }
            },
            Event::RetryRecords => vec![Command::FetchRecords(self.records.refresh())],
            Event::RecordsLoaded(response) => match self.records.apply(response) {
                RecordsApplied::Failed(message) => vec![Command::ReportError(message)],
                RecordsApplied::Rendered { .. } | RecordsApplied::Stale => Vec::new(),
            },
            Event::UploadRequested(file) => match self.upload.begin(file) {
                Ok(file) => vec![Command::SubmitUpload(file)],
                Err(err) => vec![Command::Prompt(err.to_string())],
            },
            Event::UploadFinished(result) => {
                if self.upload.complete(result) {
                    vec![Command::FetchRecords(self.records.load(PageNumber::FIRST))]
                } else {
                    Vec::new()
                }
            }
            Event::PredictRequested(season) => {
                vec![Command::FetchPrediction(self.prediction.request(season))]
            }
            Event::PredictionLoaded(response) => match self.prediction.apply(response) {
                PredictionApplied::Rendered { chart: Some(chart) } => vec![Command::RenderChart(chart)],
                PredictionApplied::Rendered { chart: None } | PredictionApplied::Stale => Vec::new(),
                PredictionApplied::Failed(message) => vec![Command::ReportError(message)],
            },
        }
    }
}

/// Pure form of [`AppController::apply`]: consumes a state and returns the
/// next one with the commands to run.
pub fn reduce<F>(mut state: AppState, event: Event<F>) -> (AppState, Vec<Command<F>>) {
    let commands = state.apply(event);
    (state, commands)
}

/// Owner of the session state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppController {
    state: AppState,
}

impl AppController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn apply<F>(&mut self, event: Event<F>) -> Vec<Command<F>> {
        trace!(event = event_name(&event), "Handling event");
        let commands = self.state.apply(event);
        debug!(commands = commands.len(), "Event handled");
        commands
    }
}

fn event_name<F>(event: &Event<F>) -> &'static str {
    match event {
        Event::Started => "started",
        Event::Navigate(_) => "navigate",
        Event::PreviousPage => "previous_page",
        Event::NextPage => "next_page",
        Event::PerPageSelected(_) => "per_page_selected",
        Event::RetryRecords => "retry_records",
        Event::RecordsLoaded(_) => "records_loaded",
        Event::UploadRequested(_) => "upload_requested",
        Event::UploadFinished(_) => "upload_finished",
        Event::PredictRequested(_) => "predict_requested",
        Event::PredictionLoaded(_) => "prediction_loaded",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::RecordsRequest;
    use crate::test_support::init_tracing;
    use crate::upload::UploadStatus;
    use chrono::NaiveDate;
    use common::{MedicinePrediction, PredictionResult, Record, RecordsQuery, RowError};
    use std::collections::HashMap;

    type TestEvent = Event<&'static str>;

    fn started() -> (AppController, RecordsRequest) {
        init_tracing();
        let mut controller = AppController::new();
        let commands = controller.apply(TestEvent::Started);
        (controller, only_records_request(&commands))
    }

    fn only_records_request(commands: &[Command<&'static str>]) -> RecordsRequest {
        match commands {
            [Command::FetchRecords(request)] => *request,
            other => panic!("expected a single records fetch, got {:?}", other),
        }
    }

    fn rows(n: u64) -> Vec<Record> {
        (0..n)
            .map(|i| Record {
                id: Some(i as i64),
                date: NaiveDate::from_ymd_opt(2023, 12, 1).unwrap(),
                season: "Winter".into(),
                medicine: format!("M{}", i),
                quantity: i + 1,
            })
            .collect()
    }

    fn load(controller: &mut AppController, request: RecordsRequest, n: u64) {
        let commands = controller.apply(TestEvent::RecordsLoaded(RecordsResponse {
            request,
            result: Ok(rows(n)),
        }));
        assert!(commands.is_empty());
    }

    fn current_page(controller: &AppController) -> u32 {
        controller.state().records().pagination().current_page().get()
    }

    #[test]
    fn test_start_shows_home_and_fetches_first_page() {
        let (controller, request) = started();

        assert_eq!(controller.state().router().visible(), Page::Home);
        assert_eq!(request.query(), RecordsQuery { page: 1, per_page: 10 });
    }

    #[test]
    fn test_next_page_requests_current_page_size_and_updates_indicator() {
        let (mut controller, first) = started();
        load(&mut controller, first, 10);

        let request = only_records_request(&controller.apply(TestEvent::NextPage));
        assert_eq!(request.query(), RecordsQuery { page: 2, per_page: 10 });

        load(&mut controller, request, 3);
        assert_eq!(current_page(&controller), 2);
    }

    #[test]
    fn test_previous_on_first_page_issues_nothing() {
        let (mut controller, first) = started();
        load(&mut controller, first, 10);

        let commands = controller.apply(TestEvent::PreviousPage);

        assert!(commands.is_empty());
        assert_eq!(current_page(&controller), 1);
    }

    #[test]
    fn test_previous_after_next_goes_back() {
        let (mut controller, first) = started();
        load(&mut controller, first, 10);
        let second = only_records_request(&controller.apply(TestEvent::NextPage));
        load(&mut controller, second, 10);

        let back = only_records_request(&controller.apply(TestEvent::PreviousPage));
        assert_eq!(back.page, PageNumber::FIRST);
    }

    #[test]
    fn test_page_size_change_resets_to_first_page() {
        let (mut controller, first) = started();
        load(&mut controller, first, 10);
        let next = only_records_request(&controller.apply(TestEvent::NextPage));
        load(&mut controller, next, 10);
        assert_eq!(current_page(&controller), 2);

        for size in ["25", "50", "100", "10"] {
            let commands = controller.apply(TestEvent::PerPageSelected(size.to_string()));
            let request = only_records_request(&commands);

            assert_eq!(current_page(&controller), 1);
            assert_eq!(request.page, PageNumber::FIRST);
            assert_eq!(request.per_page.to_string(), size);
        }
    }

    #[test]
    fn test_invalid_page_size_is_ignored() {
        let (mut controller, _) = started();
        assert!(controller.apply(TestEvent::PerPageSelected("7".into())).is_empty());
        assert_eq!(controller.state().records().pagination().per_page().get(), 10);
    }

    #[test]
    fn test_navigating_to_records_refetches_current_page() {
        let (mut controller, first) = started();
        load(&mut controller, first, 10);

        assert!(controller.apply(TestEvent::Navigate("page-upload".into())).is_empty());
        let request = only_records_request(&controller.apply(TestEvent::Navigate("page-records".into())));

        assert_eq!(controller.state().router().visible(), Page::Records);
        assert_eq!(request.page, PageNumber::FIRST);
    }

    #[test]
    fn test_unknown_navigation_target_changes_nothing() {
        let (mut controller, _) = started();
        controller.apply(TestEvent::Navigate("page-dashboard".into()));

        assert!(controller.apply(TestEvent::Navigate("page-missing".into())).is_empty());
        assert_eq!(controller.state().router().visible(), Page::Dashboard);
    }

    #[test]
    fn test_upload_without_file_only_prompts() {
        let (mut controller, _) = started();

        let commands = controller.apply(TestEvent::UploadRequested(None));

        assert_eq!(commands, vec![Command::Prompt("select a CSV file".into())]);
    }

    #[test]
    fn test_upload_submits_selected_file() {
        let (mut controller, _) = started();

        let commands = controller.apply(TestEvent::UploadRequested(Some("winter.csv")));

        assert_eq!(commands, vec![Command::SubmitUpload("winter.csv")]);
        assert_eq!(controller.state().upload().status(), &UploadStatus::Uploading);
    }

    #[test]
    fn test_upload_success_reloads_first_page() {
        let (mut controller, first) = started();
        load(&mut controller, first, 10);
        let next = only_records_request(&controller.apply(TestEvent::NextPage));
        load(&mut controller, next, 10);
        controller.apply(TestEvent::UploadRequested(Some("data.csv")));

        let commands = controller.apply(TestEvent::UploadFinished(Ok(UploadOutcome {
            inserted: 7,
            errors: vec![],
        })));

        let request = only_records_request(&commands);
        assert_eq!(request.page, PageNumber::FIRST);
        let indicators = controller.state().upload().status().indicators();
        assert_eq!(indicators.len(), 1);
        assert!(indicators[0].message.contains('7'));
    }

    #[test]
    fn test_partial_upload_still_reloads_once() {
        let (mut controller, _) = started();
        controller.apply(TestEvent::UploadRequested(Some("data.csv")));
        let errors = (0..3)
            .map(|row| RowError { row, error: "bad date".into() })
            .collect();

        let commands = controller.apply(TestEvent::UploadFinished(Ok(UploadOutcome {
            inserted: 4,
            errors,
        })));

        assert_eq!(only_records_request(&commands).page, PageNumber::FIRST);
        let indicators = controller.state().upload().status().indicators();
        assert_eq!(indicators.len(), 2);
        assert!(indicators[1].message.contains('3'));
    }

    #[test]
    fn test_failed_upload_does_not_reload() {
        let (mut controller, _) = started();
        controller.apply(TestEvent::UploadRequested(Some("data.csv")));

        let commands = controller.apply(TestEvent::UploadFinished(Err(ApiError::Request(
            "connection refused".into(),
        ))));

        assert!(commands.is_empty());
        assert_eq!(
            controller.state().upload().status(),
            &UploadStatus::Failed("Request failed: connection refused".into())
        );
    }

    #[test]
    fn test_prediction_renders_row_and_chart() {
        let (mut controller, _) = started();
        let request = match controller.apply(TestEvent::PredictRequested("Winter".into())).as_slice() {
            [Command::FetchPrediction(request)] => request.clone(),
            other => panic!("expected prediction fetch, got {:?}", other),
        };

        let result = PredictionResult {
            prediction: Some(
                vec![(
                    "Aspirin",
                    MedicinePrediction {
                        predicted_quantity: 42.0,
                        last_total: 10.0,
                    },
                )]
                .into_iter()
                .collect(),
            ),
            actions: HashMap::from([("Aspirin".to_string(), "Reorder".to_string())]),
            notes: None,
        };
        let commands = controller.apply(TestEvent::PredictionLoaded(PredictionResponse {
            request,
            result: Ok(result),
        }));

        let expected = BarChart::new(vec!["Aspirin".into()], vec![42.0]).unwrap();
        assert_eq!(commands, vec![Command::RenderChart(expected)]);
        let rows = controller.state().prediction().rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cells(), ["Aspirin", "42", "10", "Reorder"].map(String::from));
    }

    #[test]
    fn test_prediction_without_payload_skips_chart() {
        let (mut controller, _) = started();
        let request = match controller.apply(TestEvent::PredictRequested("all".into())).as_slice() {
            [Command::FetchPrediction(request)] => request.clone(),
            other => panic!("expected prediction fetch, got {:?}", other),
        };

        let commands = controller.apply(TestEvent::PredictionLoaded(PredictionResponse {
            request,
            result: Ok(PredictionResult::default()),
        }));

        assert!(commands.is_empty());
        assert!(controller.state().prediction().rows().is_empty());
    }

    #[test]
    fn test_fetch_failures_are_reported() {
        let (mut controller, first) = started();

        let commands = controller.apply(TestEvent::RecordsLoaded(RecordsResponse {
            request: first,
            result: Err(ApiError::status(500, None)),
        }));

        assert_eq!(commands, vec![Command::ReportError("HTTP error: 500".into())]);
        assert!(controller.state().records().rows().is_error());

        let retry = only_records_request(&controller.apply(TestEvent::RetryRecords));
        assert_eq!(retry.page, PageNumber::FIRST);
    }

    #[test]
    fn test_out_of_order_records_responses() {
        let (mut controller, first) = started();
        load(&mut controller, first, 10);
        let to_two = only_records_request(&controller.apply(TestEvent::NextPage));
        let to_first_with_size =
            only_records_request(&controller.apply(TestEvent::PerPageSelected("50".into())));

        load(&mut controller, to_first_with_size, 50);
        load(&mut controller, to_two, 10);

        assert_eq!(current_page(&controller), 1);
        assert_eq!(controller.state().records().rows().data().map(Vec::len), Some(50));
    }

    #[test]
    fn test_reduce_is_equivalent_to_apply() {
        init_tracing();
        let (state, commands) = reduce(AppState::default(), TestEvent::NextPage);

        assert_eq!(only_records_request(&commands).page.get(), 2);
        assert_eq!(state.records().pagination().current_page(), PageNumber::FIRST);
    }
}
