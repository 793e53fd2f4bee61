use common::{ApiError, UploadOutcome, UPLOAD_ENDPOINT, UPLOAD_FIELD};
use web_sys::{File, FormData};
use crate::api_client;

/// Upload a CSV file as multipart form data
pub async fn upload_csv(file: File) -> Result<UploadOutcome, ApiError> {
    log::debug!("Uploading file: {} ({} bytes)", file.name(), file.size());

    let form = FormData::new()
        .and_then(|form| {
            form.append_with_blob_and_filename(UPLOAD_FIELD, &file, &file.name())?;
            Ok(form)
        })
        .map_err(|e| {
            let err = ApiError::Request(format!("Failed to build form data: {:?}", e));
            log::error!("Upload of {} - {}", file.name(), err);
            err
        })?;

    let result: Result<UploadOutcome, ApiError> = api_client::post_form(UPLOAD_ENDPOINT, form).await;
    match &result {
        Ok(outcome) => log::info!(
            "Uploaded {}: {} inserted, {} rejected",
            file.name(),
            outcome.inserted,
            outcome.failed_rows()
        ),
        Err(e) => log::error!("Failed to upload {}: {}", file.name(), e),
    }
    result
}
