use crate::error::{ControllerError, Result};
use common::{ApiError, UploadOutcome};
use tracing::{debug, info, warn};

/// Severity of a status line under the upload form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorLevel {
    Info,
    Success,
    Warning,
    Failure,
}

/// One rendered status line, optionally with detail lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    pub level: IndicatorLevel,
    pub message: String,
    pub details: Vec<String>,
}

impl Indicator {
    fn new(level: IndicatorLevel, message: String) -> Self {
        Self {
            level,
            message,
            details: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading,
    Completed(UploadOutcome),
    Failed(String),
}

impl UploadStatus {
    /// Status lines to render. A partial import shows the success line and
    /// the warning line together.
    pub fn indicators(&self) -> Vec<Indicator> {
        match self {
            UploadStatus::Idle => Vec::new(),
            UploadStatus::Uploading => {
                vec![Indicator::new(IndicatorLevel::Info, "Uploading...".to_string())]
            }
            UploadStatus::Completed(outcome) => {
                let mut lines = vec![Indicator::new(
                    IndicatorLevel::Success,
                    format!("Inserted: {}", outcome.inserted),
                )];
                if outcome.is_partial() {
                    let mut warning = Indicator::new(
                        IndicatorLevel::Warning,
                        format!("{} rows failed to import", outcome.failed_rows()),
                    );
                    warning.details = outcome
                        .errors
                        .iter()
                        .map(|e| format!("Row {}: {}", e.row, e.error))
                        .collect();
                    lines.push(warning);
                }
                lines
            }
            UploadStatus::Failed(message) => vec![Indicator::new(
                IndicatorLevel::Failure,
                format!("Upload failed: {}", message),
            )],
        }
    }
}

/// CSV upload with partial-failure reporting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadClient {
    status: UploadStatus,
}

impl UploadClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &UploadStatus {
        &self.status
    }

    pub fn is_uploading(&self) -> bool {
        self.status == UploadStatus::Uploading
    }

    /// Clears the previous status and hands back the file to submit.
    ///
    /// Without a file nothing is submitted and
    /// [`ControllerError::NoFileSelected`] carries the prompt text.
    pub fn begin<F>(&mut self, file: Option<F>) -> Result<F> {
        self.status = UploadStatus::Idle;
        let file = file.ok_or_else(|| {
            debug!("Upload requested without a file");
            ControllerError::NoFileSelected
        })?;
        self.status = UploadStatus::Uploading;
        Ok(file)
    }

    /// Records the outcome. Returns `true` when the request itself succeeded,
    /// whether or not some rows were rejected.
    pub fn complete(&mut self, result: std::result::Result<UploadOutcome, ApiError>) -> bool {
        match result {
            Ok(outcome) => {
                info!(inserted = outcome.inserted, failed = outcome.failed_rows(), "Upload finished");
                self.status = UploadStatus::Completed(outcome);
                true
            }
            Err(err) => {
                warn!(error = %err, "Upload failed");
                self.status = UploadStatus::Failed(err.to_string());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::RowError;

    fn row_errors(n: u64) -> Vec<RowError> {
        (0..n)
            .map(|row| RowError {
                row,
                error: "quantity must be non-negative".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_begin_without_file_is_rejected() {
        let mut client = UploadClient::new();
        let result = client.begin::<&str>(None);

        assert_eq!(result, Err(ControllerError::NoFileSelected));
        assert_eq!(client.status(), &UploadStatus::Idle);
        assert_eq!(ControllerError::NoFileSelected.to_string(), "select a CSV file");
    }

    #[test]
    fn test_begin_sets_uploading() {
        let mut client = UploadClient::new();
        assert_eq!(client.begin(Some("data.csv")), Ok("data.csv"));
        assert!(client.is_uploading());
        assert_eq!(client.status().indicators()[0].message, "Uploading...");
    }

    #[test]
    fn test_full_success_shows_only_success_line() {
        let mut client = UploadClient::new();
        client.begin(Some(())).unwrap();

        assert!(client.complete(Ok(UploadOutcome { inserted: 7, errors: vec![] })));

        let indicators = client.status().indicators();
        assert_eq!(indicators.len(), 1);
        assert_eq!(indicators[0].level, IndicatorLevel::Success);
        assert!(indicators[0].message.contains('7'));
    }

    #[test]
    fn test_partial_success_shows_success_and_warning() {
        let mut client = UploadClient::new();
        client.begin(Some(())).unwrap();

        assert!(client.complete(Ok(UploadOutcome { inserted: 2, errors: row_errors(3) })));

        let indicators = client.status().indicators();
        assert_eq!(indicators.len(), 2);
        assert_eq!(indicators[0].message, "Inserted: 2");
        assert_eq!(indicators[1].level, IndicatorLevel::Warning);
        assert_eq!(indicators[1].message, "3 rows failed to import");
        assert_eq!(indicators[1].details.len(), 3);
        assert_eq!(indicators[1].details[1], "Row 1: quantity must be non-negative");
    }

    #[test]
    fn test_transport_failure_shows_failure_line() {
        let mut client = UploadClient::new();
        client.begin(Some(())).unwrap();

        assert!(!client.complete(Err(ApiError::Parse("expected value".into()))));

        let indicators = client.status().indicators();
        assert_eq!(indicators.len(), 1);
        assert_eq!(indicators[0].level, IndicatorLevel::Failure);
        assert_eq!(
            indicators[0].message,
            "Upload failed: Failed to parse response: expected value"
        );
    }

    #[test]
    fn test_new_attempt_clears_previous_status() {
        let mut client = UploadClient::new();
        client.begin(Some(())).unwrap();
        client.complete(Err(ApiError::Request("offline".into())));

        let _ = client.begin::<()>(None);
        assert!(client.status().indicators().is_empty());
    }
}
