use common::{ApiError, PredictionQuery, PredictionResult, PREDICTION_ENDPOINT};
use crate::api_client;

/// Get the forecast for a season. The season is URL-encoded as a query parameter.
pub async fn get_prediction(query: PredictionQuery) -> Result<PredictionResult, ApiError> {
    log::trace!("Fetching prediction for season: {}", query.season);
    let result: Result<PredictionResult, ApiError> =
        api_client::get(PREDICTION_ENDPOINT, &query.params()).await;
    match &result {
        Ok(prediction) => log::info!(
            "Fetched prediction for {} ({} medicines)",
            query.season,
            prediction.prediction.as_ref().map_or(0, |p| p.len())
        ),
        Err(e) => log::error!("Failed to fetch prediction for {}: {}", query.season, e),
    }
    result
}
