//! HTTP classifier - the real `/predict` endpoint

use super::{AnalysisRequest, ClassifierError, EmotionClassifier, EmotionScores, PredictResponse};
use anyhow::{Context, Result};
use futures::future::BoxFuture;
use std::time::Duration;

/// Classifier reached over HTTP
///
/// Cloning is cheap: `reqwest::Client` is reference-counted internally.
#[derive(Clone)]
pub struct HttpClassifier {
    client: reqwest::Client,
    predict_url: String,
    health_url: String,
}

impl HttpClassifier {
    /// Create a classifier for `endpoint` (e.g. `http://127.0.0.1:5000`).
    ///
    /// `timeout` of `None` waits for the transport indefinitely.
    pub fn new(endpoint: &str, predict_path: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        let base = endpoint.trim_end_matches('/');
        let predict_url = format!("{}/{}", base, predict_path.trim_start_matches('/'));
        let health_url = format!("{}/health", base);

        tracing::debug!("Classifier endpoint: {}", predict_url);

        Ok(Self {
            client,
            predict_url,
            health_url,
        })
    }

    pub fn predict_url(&self) -> &str {
        &self.predict_url
    }

    /// Query the classifier's `/health` endpoint and return its JSON body
    pub async fn health(&self) -> Result<serde_json::Value, ClassifierError> {
        let response = self
            .client
            .get(&self.health_url)
            .send()
            .await
            .map_err(|e| ClassifierError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            return Err(ClassifierError::from_error_body(
                status.as_u16(),
                status.canonical_reason().unwrap_or(""),
                &body,
            ));
        }

        response
            .json()
            .await
            .map_err(|e| ClassifierError::MalformedResponse(format!("Failed to parse health: {}", e)))
    }
}

impl EmotionClassifier for HttpClassifier {
    fn name(&self) -> &'static str {
        "http"
    }

    fn predict(
        &self,
        request: AnalysisRequest,
    ) -> BoxFuture<'static, Result<EmotionScores, ClassifierError>> {
        let client = self.client.clone();
        let url = self.predict_url.clone();
        Box::pin(async move { post_predict(&client, &url, &request).await })
    }
}

async fn post_predict(
    client: &reqwest::Client,
    url: &str,
    request: &AnalysisRequest,
) -> Result<EmotionScores, ClassifierError> {
    // `.json()` sets Content-Type: application/json
    let response = client
        .post(url)
        .json(request)
        .send()
        .await
        .map_err(|e| ClassifierError::Transport(e.to_string()))?;

    let status = response.status();
    tracing::debug!("Classifier responded with {}", status);

    if !status.is_success() {
        // A body we cannot read is treated like an unparsable one
        let body = response.bytes().await.unwrap_or_default();
        return Err(ClassifierError::from_error_body(
            status.as_u16(),
            status.canonical_reason().unwrap_or(""),
            &body,
        ));
    }

    let body: PredictResponse = response
        .json()
        .await
        .map_err(|e| ClassifierError::MalformedResponse(format!("Failed to parse response: {}", e)))?;

    Ok(body.emotions.unwrap_or_default())
}
