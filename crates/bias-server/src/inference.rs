//! Hosted model adapters
//!
//! The transformer sentiment classifier and the entity recognizer run behind
//! a Hugging Face style inference API. Both calls post `{"inputs": text}` to
//! `{api_url}/models/{model}` and parse the JSON that comes back.

use std::time::{Duration, Instant};

use bias_core::{normalize, BiasError, BiasResult, Entity, ModelScore, SentimentLabel};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use crate::config::InferenceConfig;
use crate::error::{AppError, AppResult};

/// HTTP client for the hosted models
pub struct InferenceClient {
    client: Client,
    api_url: String,
    api_token: String,
    sentiment_model: String,
    ner_model: String,
}

impl InferenceClient {
    pub fn new(config: &InferenceConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
            sentiment_model: config.sentiment_model.clone(),
            ner_model: config.ner_model.clone(),
        })
    }

    pub fn sentiment_model(&self) -> &str {
        &self.sentiment_model
    }

    pub fn ner_model(&self) -> &str {
        &self.ner_model
    }

    /// Run the transformer classifier and normalize its top prediction
    pub async fn classify(&self, text: &str) -> AppResult<ModelScore> {
        let body = self
            .post(&self.sentiment_model, json!({ "inputs": text }))
            .await?;
        Ok(parse_classification(&body)?)
    }

    /// Run the entity recognizer with grouped entities
    pub async fn entities(&self, text: &str) -> AppResult<Vec<Entity>> {
        let body = self
            .post(
                &self.ner_model,
                json!({
                    "inputs": text,
                    "parameters": { "aggregation_strategy": "simple" }
                }),
            )
            .await?;
        Ok(parse_entities(&body)?)
    }

    async fn post(&self, model: &str, payload: Value) -> AppResult<Value> {
        let url = format!("{}/models/{}", self.api_url, model);
        let start = Instant::now();
        tracing::debug!(model = %model, url = %url, "Calling inference API");

        let mut request = self.client.post(&url).json(&payload);
        if !self.api_token.is_empty() {
            request = request.bearer_auth(&self.api_token);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::warn!(
                model = %model,
                status = %status.as_u16(),
                detail = %detail,
                "Inference API returned an error"
            );
            return Err(status_error(model, status, &detail));
        }

        let body: Value = response.json().await?;
        tracing::debug!(
            model = %model,
            duration_ms = %start.elapsed().as_millis(),
            "Inference API call completed"
        );
        Ok(body)
    }
}

/// Any non-success status from a model is fatal for the request
fn status_error(model: &str, status: StatusCode, detail: &str) -> AppError {
    AppError::ModelUnavailable(format!(
        "{} returned {}: {}",
        model,
        status.as_u16(),
        detail.trim()
    ))
}

/// An `{"error": ...}` body means the model could not run (often still loading)
fn check_error_body(body: &Value) -> BiasResult<()> {
    if let Some(error) = body.get("error").and_then(Value::as_str) {
        return Err(BiasError::ModelUnavailable(error.to_string()));
    }
    Ok(())
}

/// Pick the highest scoring label from a classifier response.
///
/// Accepts both `[[{label, score}, ...]]` and `[{label, score}, ...]`.
pub fn parse_classification(body: &Value) -> BiasResult<ModelScore> {
    check_error_body(body)?;

    let outer = body
        .as_array()
        .ok_or_else(|| BiasError::InvalidModelOutput("classifier response is not an array".into()))?;
    let candidates = match outer.first() {
        Some(Value::Array(inner)) => inner.as_slice(),
        _ => outer.as_slice(),
    };

    let (label, score) = candidates
        .iter()
        .filter_map(|c| Some((c.get("label")?.as_str()?, c.get("score")?.as_f64()?)))
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .ok_or_else(|| BiasError::InvalidModelOutput("classifier returned no labels".into()))?;

    normalize::from_classifier(label.parse::<SentimentLabel>()?, score)
}

/// Collect `(word, entity type)` pairs from an entity recognizer response.
///
/// Grouped responses carry `entity_group`; token-level ones carry `entity`
/// with a `B-`/`I-` prefix, which is dropped.
pub fn parse_entities(body: &Value) -> BiasResult<Vec<Entity>> {
    check_error_body(body)?;

    let items = body
        .as_array()
        .ok_or_else(|| BiasError::InvalidModelOutput("entity response is not an array".into()))?;

    let mut entities = Vec::with_capacity(items.len());
    for item in items {
        let label = item
            .get("entity_group")
            .or_else(|| item.get("entity"))
            .and_then(Value::as_str)
            .ok_or_else(|| BiasError::InvalidModelOutput("entity without a type".into()))?;
        let label = match label.split_once('-') {
            Some(("B" | "I", rest)) => rest,
            _ => label,
        };

        let text = item.get("word").and_then(Value::as_str).unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }

        entities.push(Entity {
            text: text.to_string(),
            label: label.to_string(),
        });
    }

    Ok(entities)
}
