//! Transport-layer types shared between the forecast API and the frontend.
//! These structs mirror the API's request/response payloads so the client
//! can deserialize responses without duplicating shapes.

mod error;
mod ordered;

pub use error::ApiError;
pub use ordered::OrderedEntries;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Endpoint accepting a multipart CSV upload.
pub const UPLOAD_ENDPOINT: &str = "/upload";
/// Endpoint serving one page of imported records.
pub const RECORDS_ENDPOINT: &str = "/records";
/// Endpoint serving the per-medicine forecast for a season.
pub const PREDICTION_ENDPOINT: &str = "/prediction";
/// Multipart form field carrying the CSV file.
pub const UPLOAD_FIELD: &str = "file";

/// Error body returned by the API together with a non-OK status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

// ===================== Records =====================

/// One imported data row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub date: NaiveDate,
    pub season: String,
    pub medicine: String,
    pub quantity: u64,
}

/// Query string of `GET /records`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordsQuery {
    pub page: u32,
    pub per_page: u32,
}

impl RecordsQuery {
    /// Query parameters in the order they are appended to the URL.
    pub fn params(&self) -> [(&'static str, String); 2] {
        [
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
        ]
    }
}

// ===================== Upload =====================

/// A CSV row the server refused to import.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RowError {
    #[serde(default)]
    pub row: u64,
    #[serde(default)]
    pub error: String,
}

/// Response of `POST /upload`. Missing fields decode as "nothing inserted,
/// nothing failed".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadOutcome {
    #[serde(default)]
    pub inserted: u64,
    #[serde(default)]
    pub errors: Vec<RowError>,
}

impl UploadOutcome {
    pub fn failed_rows(&self) -> usize {
        self.errors.len()
    }

    pub fn is_partial(&self) -> bool {
        !self.errors.is_empty()
    }
}

// ===================== Prediction =====================

/// Query string of `GET /prediction`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PredictionQuery {
    pub season: String,
}

impl PredictionQuery {
    pub fn params(&self) -> [(&'static str, String); 1] {
        [("season", self.season.clone())]
    }
}

/// Forecast for a single medicine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MedicinePrediction {
    pub predicted_quantity: f64,
    pub last_total: f64,
}

/// Response of `GET /prediction`.
///
/// `prediction` keeps the server's key order. `actions` is looked up per
/// medicine and may lack entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PredictionResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction: Option<OrderedEntries<MedicinePrediction>>,
    #[serde(default)]
    pub actions: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PredictionResult {
    pub fn action_for(&self, medicine: &str) -> Option<&str> {
        self.actions.get(medicine).map(String::as_str)
    }

    /// True when the response carries at least one forecast entry.
    pub fn has_entries(&self) -> bool {
        self.prediction.as_ref().is_some_and(|p| !p.is_empty())
    }
}
