use crate::config::ClientConfig;
use crate::error::{GfResult, GradeFormError};
use crate::protocol::{EndpointInfo, ErrorBody, HealthStatus, ModelInfo, PredictResponse, Prediction};
use crate::snapshot::FormSnapshot;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::future::Future;
use tracing::{info, warn};

/// Anything that can turn a snapshot into a prediction.
///
/// One call is one request; implementations must not retry.
pub trait PredictionBackend {
    fn predict(&self, snapshot: &FormSnapshot) -> impl Future<Output = GfResult<Prediction>>;
}

/// HTTP client for the prediction service.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: Client,
    server: String,
    predict_path: String,
}

impl PredictionClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(http: Client, config: &ClientConfig) -> Self {
        Self {
            http,
            server: config.server.trim_end_matches('/').to_string(),
            predict_path: config.predict_path.clone(),
        }
    }

    pub fn predict_url(&self) -> String {
        format!("{}{}", self.server, self.predict_path)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.server, path)
    }

    /// `POST /predict` with the snapshot as a JSON object body.
    pub async fn send_prediction(&self, snapshot: &FormSnapshot) -> GfResult<Prediction> {
        let url = self.predict_url();
        info!("📤 Sending {} fields to {}", snapshot.len(), url);

        let resp = self.http.post(&url).json(snapshot).send().await?;
        let body: PredictResponse = read_json(resp).await?;
        let prediction = Prediction::try_from(body)?;

        info!("✅ Prediction received: {}", prediction.label);
        Ok(prediction)
    }

    /// `GET /predict`: the fields the service expects.
    pub async fn endpoint_info(&self) -> GfResult<EndpointInfo> {
        let resp = self.http.get(self.predict_url()).send().await?;
        read_json(resp).await
    }

    pub async fn health(&self) -> GfResult<HealthStatus> {
        let resp = self.http.get(self.url("/health")).send().await?;
        read_json(resp).await
    }

    pub async fn model_info(&self) -> GfResult<ModelInfo> {
        let resp = self.http.get(self.url("/model-info")).send().await?;
        read_json(resp).await
    }
}

impl PredictionBackend for PredictionClient {
    fn predict(&self, snapshot: &FormSnapshot) -> impl Future<Output = GfResult<Prediction>> {
        self.send_prediction(snapshot)
    }
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> GfResult<T> {
    if !resp.status().is_success() {
        return Err(server_error(resp).await);
    }
    Ok(resp.json().await?)
}

/// Prefers the service's own `error` text, else `HTTP <status>: <reason>`.
async fn server_error(resp: Response) -> GradeFormError {
    let status = resp.status();
    let body: Option<ErrorBody> = resp.json().await.ok();

    let message = body
        .and_then(|b| b.error)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| match status.canonical_reason() {
            Some(reason) => format!("HTTP {}: {}", status.as_u16(), reason),
            None => format!("HTTP {}", status.as_u16()),
        });

    warn!("❌ Server rejected request ({}): {}", status.as_u16(), message);
    GradeFormError::Server {
        status: status.as_u16(),
        message,
    }
}
