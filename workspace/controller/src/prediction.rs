use crate::chart::BarChart;
use crate::fetch::FetchState;
use crate::sequence::{RequestSequence, RequestToken};
use common::{ApiError, PredictionQuery, PredictionResult};
use tracing::{debug, info, warn};

/// Season selector value meaning "every season".
pub const ALL_SEASONS: &str = "all";

/// Values offered by the season selector, sentinel first.
pub const SEASON_OPTIONS: [(&str, &str); 5] = [
    (ALL_SEASONS, "All seasons"),
    ("Winter", "Winter"),
    ("Spring", "Spring"),
    ("Summer", "Summer"),
    ("Autumn", "Autumn"),
];

/// A prediction fetch the frontend should perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionRequest {
    pub token: RequestToken,
    pub season: String,
}

impl PredictionRequest {
    pub fn query(&self) -> PredictionQuery {
        PredictionQuery {
            season: self.season.clone(),
        }
    }
}

/// Completion of a [`PredictionRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResponse {
    pub request: PredictionRequest,
    pub result: Result<PredictionResult, ApiError>,
}

/// What happened to a response handed to [`PredictionClient::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionApplied {
    /// Table rendered; `chart` is set when the chart should be redrawn.
    Rendered { chart: Option<BarChart> },
    Failed(String),
    Stale,
}

/// One row of the prediction table.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRow {
    pub medicine: String,
    pub predicted_quantity: f64,
    pub last_total: f64,
    pub action: String,
}

impl PredictionRow {
    /// Cell texts in column order.
    pub fn cells(&self) -> [String; 4] {
        [
            self.medicine.clone(),
            self.predicted_quantity.to_string(),
            self.last_total.to_string(),
            self.action.clone(),
        ]
    }
}

/// Table rows for a prediction response, in the response's key order.
/// No response or no `prediction` field yields an empty table.
pub fn prediction_rows(result: Option<&PredictionResult>) -> Vec<PredictionRow> {
    let Some(result) = result else {
        return Vec::new();
    };
    let Some(prediction) = result.prediction.as_ref() else {
        return Vec::new();
    };

    prediction
        .iter()
        .map(|(medicine, meta)| PredictionRow {
            medicine: medicine.to_string(),
            predicted_quantity: meta.predicted_quantity,
            last_total: meta.last_total,
            action: result.action_for(medicine).unwrap_or_default().to_string(),
        })
        .collect()
}

/// Chart data for a prediction response, or `None` when there is nothing to
/// plot and the current chart should stay as it is.
pub fn chart_series(result: &PredictionResult) -> Option<BarChart> {
    if !result.has_entries() {
        return None;
    }
    let prediction = result.prediction.as_ref()?;
    let (labels, values) = prediction
        .iter()
        .map(|(medicine, meta)| (medicine.to_string(), meta.predicted_quantity))
        .unzip();
    BarChart::new(labels, values).ok()
}

/// Forecast retrieval for the dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionClient {
    result: FetchState<PredictionResult>,
    sequence: RequestSequence,
}

impl PredictionClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn result(&self) -> &FetchState<PredictionResult> {
        &self.result
    }

    pub fn rows(&self) -> Vec<PredictionRow> {
        prediction_rows(self.result.data())
    }

    pub fn notes(&self) -> Option<&str> {
        self.result.data().and_then(|r| r.notes.as_deref())
    }

    pub fn request(&mut self, season: impl Into<String>) -> PredictionRequest {
        let request = PredictionRequest {
            token: self.sequence.issue(),
            season: season.into(),
        };
        debug!(season = %request.season, token = request.token.value(), "Requesting prediction");
        self.result = FetchState::Loading;
        request
    }

    pub fn apply(&mut self, response: PredictionResponse) -> PredictionApplied {
        let PredictionResponse { request, result } = response;
        if !self.sequence.is_latest(request.token) {
            debug!(token = request.token.value(), season = %request.season, "Discarding stale prediction response");
            return PredictionApplied::Stale;
        }

        match result {
            Ok(prediction) => {
                let chart = chart_series(&prediction);
                info!(season = %request.season, charted = chart.is_some(), "Prediction received");
                self.result = FetchState::Success(prediction);
                PredictionApplied::Rendered { chart }
            }
            Err(err) => {
                warn!(season = %request.season, error = %err, "Failed to load prediction");
                let message = err.to_string();
                self.result = FetchState::Error(message.clone());
                PredictionApplied::Failed(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{MedicinePrediction, OrderedEntries};
    use std::collections::HashMap;

    fn entry(predicted_quantity: f64, last_total: f64) -> MedicinePrediction {
        MedicinePrediction {
            predicted_quantity,
            last_total,
        }
    }

    fn aspirin_result() -> PredictionResult {
        PredictionResult {
            prediction: Some(vec![("Aspirin", entry(42.0, 10.0))].into_iter().collect()),
            actions: HashMap::from([("Aspirin".to_string(), "Reorder".to_string())]),
            notes: None,
        }
    }

    #[test]
    fn test_rows_for_single_medicine() {
        let rows = prediction_rows(Some(&aspirin_result()));

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cells(), ["Aspirin", "42", "10", "Reorder"].map(String::from));
    }

    #[test]
    fn test_rows_keep_response_order_and_default_action() {
        let result = PredictionResult {
            prediction: Some(
                vec![("Zinc", entry(12.5, 10.0)), ("Aspirin", entry(3.0, 3.0))]
                    .into_iter()
                    .collect(),
            ),
            actions: HashMap::from([("Aspirin".to_string(), "hold".to_string())]),
            notes: None,
        };

        let rows = prediction_rows(Some(&result));

        assert_eq!(rows[0].cells(), ["Zinc", "12.5", "10", ""].map(String::from));
        assert_eq!(rows[1].cells(), ["Aspirin", "3", "3", "hold"].map(String::from));
    }

    #[test]
    fn test_rows_empty_without_prediction() {
        assert!(prediction_rows(None).is_empty());
        assert!(prediction_rows(Some(&PredictionResult::default())).is_empty());
    }

    #[test]
    fn test_chart_series_pairs_labels_with_values() {
        let chart = chart_series(&aspirin_result()).unwrap();
        assert_eq!(chart.labels(), &["Aspirin".to_string()]);
        assert_eq!(chart.values(), &[42.0]);
    }

    #[test]
    fn test_no_chart_for_absent_or_empty_prediction() {
        assert_eq!(chart_series(&PredictionResult::default()), None);

        let empty = PredictionResult {
            prediction: Some(OrderedEntries::new()),
            ..Default::default()
        };
        assert_eq!(chart_series(&empty), None);
    }

    #[test]
    fn test_apply_renders_table_and_chart() {
        let mut client = PredictionClient::new();
        let request = client.request("Winter");
        assert_eq!(request.query().season, "Winter");
        assert!(client.result().is_loading());

        let applied = client.apply(PredictionResponse {
            request,
            result: Ok(aspirin_result()),
        });

        match applied {
            PredictionApplied::Rendered { chart: Some(chart) } => {
                assert_eq!(chart.labels(), &["Aspirin".to_string()]);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(client.rows().len(), 1);
    }

    #[test]
    fn test_apply_shows_notes_without_chart() {
        let mut client = PredictionClient::new();
        let request = client.request(ALL_SEASONS);

        let applied = client.apply(PredictionResponse {
            request,
            result: Ok(PredictionResult {
                prediction: Some(OrderedEntries::new()),
                notes: Some("no historical data for that season".into()),
                ..Default::default()
            }),
        });

        assert_eq!(applied, PredictionApplied::Rendered { chart: None });
        assert!(client.rows().is_empty());
        assert_eq!(client.notes(), Some("no historical data for that season"));
    }

    #[test]
    fn test_stale_prediction_is_discarded() {
        let mut client = PredictionClient::new();
        let winter = client.request("Winter");
        let summer = client.request("Summer");

        assert_eq!(
            client.apply(PredictionResponse { request: summer, result: Ok(PredictionResult::default()) }),
            PredictionApplied::Rendered { chart: None }
        );
        assert_eq!(
            client.apply(PredictionResponse { request: winter, result: Ok(aspirin_result()) }),
            PredictionApplied::Stale
        );
        assert!(client.rows().is_empty());
    }

    #[test]
    fn test_failure_is_visible() {
        let mut client = PredictionClient::new();
        let request = client.request("Winter");

        let applied = client.apply(PredictionResponse {
            request,
            result: Err(ApiError::status(400, Some("season query param required".into()))),
        });

        assert_eq!(
            applied,
            PredictionApplied::Failed("Error: season query param required".into())
        );
        assert_eq!(client.result().error(), Some("Error: season query param required"));
    }
}
