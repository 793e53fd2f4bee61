pub mod prediction;
pub mod records;
pub mod upload;

use common::{ApiError, ErrorResponse};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use web_sys::FormData;
use crate::settings;

// API base is retrieved from settings
fn api_url(endpoint: &str) -> String {
    settings::get_settings().api_url(endpoint)
}

/// Common GET request handler with query parameters
pub async fn get<T, V>(endpoint: &str, params: &[(&str, V)]) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    V: AsRef<str>,
{
    let url = api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url)
        .query(params.iter().map(|(key, value)| (*key, value.as_ref())))
        .send()
        .await
        .map_err(|e| {
            let err = ApiError::Request(e.to_string());
            log::error!("GET {} - {}", endpoint, err);
            err
        })?;

    read_json("GET", endpoint, response).await
}

/// Common multipart POST handler
pub async fn post_form<T>(endpoint: &str, form: FormData) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let url = api_url(endpoint);
    log::debug!("POST (multipart) request to: {}", url);

    let response = Request::post(&url)
        .body(form)
        .map_err(|e| {
            let err = ApiError::Request(format!("Failed to build request: {}", e));
            log::error!("POST {} - {}", endpoint, err);
            err
        })?
        .send()
        .await
        .map_err(|e| {
            let err = ApiError::Request(e.to_string());
            log::error!("POST {} - {}", endpoint, err);
            err
        })?;

    read_json("POST", endpoint, response).await
}

async fn read_json<T>(method: &str, endpoint: &str, response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    if !response.ok() {
        log::warn!("{} {} - Non-OK response: {}", method, endpoint, response.status());
        let error_response: Result<ErrorResponse, _> = response.json().await;
        let err = ApiError::status(response.status(), error_response.ok().map(|e| e.error));
        log::error!("{} {} - {}", method, endpoint, err);
        return Err(err);
    }

    log::trace!("{} {} - Response received, parsing JSON", method, endpoint);
    let data = response.json::<T>().await.map_err(|e| {
        let err = ApiError::Parse(e.to_string());
        log::error!("{} {} - {}", method, endpoint, err);
        err
    })?;

    log::info!("{} {} - Success", method, endpoint);
    Ok(data)
}
