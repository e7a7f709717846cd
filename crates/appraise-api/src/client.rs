//! HTTP client for the valuation backend
//!
//! One `ApiClient` is built at startup from the resolved base address and
//! shared (cheaply cloned) by every request. No timeout is configured; the
//! transport default applies.

use appraise_core::prelude::*;
use appraise_core::{AnalyticsSnapshot, EstimateRequest, LocationCatalog};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::backend::ValuationBackend;
use crate::protocol::{
    rejection_message, PredictResponse, ANALYTICS_PATH, HEALTH_PATH, LOCATIONS_PATH, PREDICT_PATH,
};

/// Backend client bound to a single origin
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for `base_url`.
    ///
    /// The address is parsed once here; a trailing `/` is added so relative
    /// endpoint paths keep any path prefix (`http://host/valuation/`).
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = normalize_base_url(base_url)?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for an endpoint path
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::invalid_base_url(self.base_url.as_str(), e.to_string()))
    }

    async fn get(&self, path: &str) -> Result<Response> {
        let url = self.endpoint(path)?;
        debug!("GET {}", url);
        self.http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.get(path).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::unexpected_status(status.as_u16()));
        }
        decode_json(response).await
    }
}

impl ValuationBackend for ApiClient {
    async fn fetch_analytics(&self) -> Result<AnalyticsSnapshot> {
        self.get_json(ANALYTICS_PATH).await
    }

    async fn fetch_locations(&self) -> Result<LocationCatalog> {
        self.get_json(LOCATIONS_PATH).await
    }

    async fn predict(&self, request: &EstimateRequest) -> Result<f64> {
        let url = self.endpoint(PREDICT_PATH)?;
        debug!("POST {} {:?}", url, request);

        let response = self
            .http
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            let body: PredictResponse = decode_json(response).await?;
            return Ok(body.predicted_price);
        }

        Err(rejection_from(status, response).await)
    }

    async fn ping(&self) -> Result<String> {
        let response = self.get(HEALTH_PATH).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::unexpected_status(status.as_u16()));
        }
        response
            .text()
            .await
            .map_err(|e| Error::transport(e.to_string()))
    }
}

/// Parse and normalize the configured base address
pub fn normalize_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let mut url = Url::parse(trimmed).map_err(|e| Error::invalid_base_url(trimmed, e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::invalid_base_url(
            trimmed,
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::transport(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| Error::protocol(e.to_string()))
}

/// Map a non-2xx estimate response to a rejection or a bare status error
async fn rejection_from(status: StatusCode, response: Response) -> Error {
    let body = response.text().await.unwrap_or_default();
    match rejection_message(&body) {
        Some(message) => Error::server_rejection(status.as_u16(), message),
        None => Error::unexpected_status(status.as_u16()),
    }
}
