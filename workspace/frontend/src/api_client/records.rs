use common::{ApiError, Record, RecordsQuery, RECORDS_ENDPOINT};
use crate::api_client;

/// Get one page of imported records, newest first as ordered by the server
pub async fn get_records(query: RecordsQuery) -> Result<Vec<Record>, ApiError> {
    log::trace!("Fetching records page {} ({} per page)", query.page, query.per_page);
    let result: Result<Vec<Record>, ApiError> =
        api_client::get(RECORDS_ENDPOINT, &query.params()).await;
    match &result {
        Ok(records) => log::info!("Fetched {} records for page {}", records.len(), query.page),
        Err(e) => log::error!("Failed to fetch records page {}: {}", query.page, e),
    }
    result
}
