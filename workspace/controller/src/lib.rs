//! Browser-independent core of the MedForecast client.
//!
//! Everything here is plain Rust: page switching, the records cursor, upload
//! status, prediction rows and the chart lifecycle. The `frontend` crate binds
//! it to the DOM and performs the network calls it asks for.

pub mod chart;
pub mod controller;
pub mod error;
pub mod fetch;
pub mod pagination;
pub mod prediction;
pub mod records;
pub mod sequence;
pub mod upload;
pub mod view;

#[cfg(test)]
mod test_support;

pub use chart::{BarChart, ChartRenderer, ChartSurface, SERIES_LABEL};
pub use controller::{AppController, AppState, Command, Event, reduce};
pub use error::{ControllerError, Result};
pub use fetch::FetchState;
pub use pagination::{PageNumber, PerPage, Pagination, DEFAULT_PER_PAGE, PER_PAGE_OPTIONS};
pub use prediction::{
    ALL_SEASONS, PredictionApplied, PredictionClient, PredictionRequest, PredictionResponse,
    PredictionRow, SEASON_OPTIONS, chart_series, prediction_rows,
};
pub use records::{RecordsApplied, RecordsClient, RecordsRequest, RecordsResponse};
pub use sequence::{RequestSequence, RequestToken};
pub use upload::{Indicator, IndicatorLevel, UploadClient, UploadStatus};
pub use view::{Page, ViewRouter};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_outcomes_are_reachable_from_crate_root() {
        let mut records = RecordsClient::new();
        let request = records.load(PageNumber::FIRST);
        let applied: RecordsApplied = records.apply(RecordsResponse {
            request,
            result: Ok(Vec::new()),
        });
        assert_eq!(applied, RecordsApplied::Rendered { page: PageNumber::FIRST, rows: 0 });

        let mut prediction = PredictionClient::new();
        let request = prediction.request(ALL_SEASONS);
        let applied: PredictionApplied = prediction.apply(PredictionResponse {
            request,
            result: Ok(Default::default()),
        });
        assert_eq!(applied, PredictionApplied::Rendered { chart: None });
    }
}
